//! Struct tag handling: raw literal unquoting, `key:"value"` lookup and the
//! property directive grammar.

mod directive;
mod literal;

pub use directive::{Directive, DirectiveError, DirectiveSet, SetterVisibility};
pub use literal::{UnquoteError, unquote};

/// The unquoted text of a struct field tag.
///
/// Lookups follow the conventional `key:"value" other:"value"` layout. The
/// scan is lenient: a malformed pair ends the scan and the key is reported
/// as absent rather than as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructTag(String);

impl StructTag {
    /// Unquotes a raw tag literal as written in the source.
    ///
    /// # Errors
    ///
    /// Returns [`UnquoteError`] when the literal is not a well-formed Go
    /// string literal.
    pub fn from_literal(raw: &str) -> Result<Self, UnquoteError> {
        unquote(raw).map(Self)
    }

    /// Wraps already unquoted tag text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Returns the unquoted tag text.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the value stored under `key`, if present and well formed.
    ///
    /// # Examples
    ///
    /// ```
    /// use genprop::tag::StructTag;
    ///
    /// let tag = StructTag::new(r#"property:"get,set" validate:"required""#);
    /// assert_eq!(tag.lookup("property").as_deref(), Some("get,set"));
    /// assert_eq!(tag.lookup("validate").as_deref(), Some("required"));
    /// assert_eq!(tag.lookup("json"), None);
    /// ```
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<String> {
        let mut rest = self.0.as_str();
        loop {
            rest = rest.trim_start_matches(' ');
            if rest.is_empty() {
                return None;
            }
            let name_len = rest
                .bytes()
                .take_while(|byte| *byte > b' ' && *byte != b':' && *byte != b'"' && *byte != 0x7f)
                .count();
            let (name, after_name) = rest.split_at(name_len);
            if name.is_empty() {
                return None;
            }
            let quoted_and_tail = after_name.strip_prefix(':')?;
            if !quoted_and_tail.starts_with('"') {
                return None;
            }
            let closing = closing_quote(quoted_and_tail)?;
            let (quoted, tail) = quoted_and_tail.split_at(closing + 1);
            if name == key {
                return unquote(quoted).ok();
            }
            rest = tail;
        }
    }
}

/// Byte offset of the quote closing the string that opens at offset zero.
fn closing_quote(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut index = 1;
    while let Some(byte) = bytes.get(index) {
        match byte {
            b'"' => return Some(index),
            b'\\' => index += 2,
            _ => index += 1,
        }
    }
    None
}
