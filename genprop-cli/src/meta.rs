//! Build metadata.

/// Crate version baked in at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Line printed by `--version`, e.g. `genprop v0.4.0`.
#[must_use]
pub fn version_line() -> String {
    format!("genprop v{VERSION}")
}
