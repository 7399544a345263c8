//! Test helpers shared across the `genprop` workspace.
//!
//! Provides annotated Go source fixtures, helpers for inspecting generated
//! source text, and a `figment::Jail` wrapper for configuration tests.

pub mod figment;
pub mod go;
pub mod text;
