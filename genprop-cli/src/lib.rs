//! Library interface for the `genprop` command-line tool.
//!
//! Provides the Go source front end, the printer that turns synthesized
//! declarations back into Go source, layered configuration and the run
//! pipeline used by the `genprop` binary.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod fs_helpers;
pub mod meta;
pub mod parser;
pub mod render;
pub mod telemetry;
