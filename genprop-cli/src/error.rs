//! Error types for `genprop`.

use camino::Utf8PathBuf;
use genprop::GenerateError;
use thiserror::Error;

use crate::parser::ParseError;

/// Errors surfaced by the `genprop` pipeline.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GenpropError {
    /// No input file was given.
    #[error("file argument is required")]
    MissingFile,

    /// More than one input file was given.
    #[error("exactly one file argument is required")]
    TooManyFiles,

    /// The input file could not be read.
    #[error("failed to read file {path}")]
    Read {
        /// File that failed to load.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The input file is not valid Go.
    #[error("failed to parse file {path}")]
    Parse {
        /// File that failed to parse.
        path: Utf8PathBuf,
        /// Syntax error with its position.
        #[source]
        source: ParseError,
    },

    /// Synthesis rejected a struct tag.
    #[error("failed to generate code")]
    Generate(#[source] GenerateError),

    /// Writing the generated source failed.
    #[error("failed to write output")]
    Write(#[source] std::io::Error),

    /// An explicitly requested configuration file is missing.
    #[error("configuration file {0} does not exist")]
    ConfigNotFound(Utf8PathBuf),

    /// Layered configuration could not be merged or extracted.
    #[error("invalid configuration")]
    Config(#[source] Box<figment::Error>),
}

impl From<GenerateError> for GenpropError {
    fn from(err: GenerateError) -> Self {
        Self::Generate(err)
    }
}

impl From<figment::Error> for GenpropError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}
