//! Errors raised while synthesizing declarations.

use thiserror::Error;

use crate::tag::{DirectiveError, UnquoteError};

/// Fatal generation failures. Any of these aborts the whole run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GenerateError {
    /// A field's raw tag literal is not a valid Go string literal.
    #[error("malformed tag on {type_name}.{field}: {source}")]
    MalformedTag {
        /// Struct declaring the field.
        type_name: String,
        /// Offending field.
        field: String,
        /// Underlying unquote failure.
        #[source]
        source: UnquoteError,
    },

    /// A property tag carries an unrecognised directive token.
    #[error("invalid tag value: directive={directive} (field {type_name}.{field})")]
    InvalidDirective {
        /// Struct declaring the field.
        type_name: String,
        /// Offending field.
        field: String,
        /// The token as written.
        directive: String,
    },
}

impl GenerateError {
    pub(crate) fn invalid_directive(type_name: &str, field: &str, err: DirectiveError) -> Self {
        Self::InvalidDirective {
            type_name: type_name.to_owned(),
            field: field.to_owned(),
            directive: err.0,
        }
    }
}
