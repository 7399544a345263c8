//! Accessor name derivation with initialism handling.

use heck::ToUpperCamelCase;

/// Initialisms rendered fully upper-case when they form a field's leading
/// lowercase run.
pub const DEFAULT_INITIALISMS: &[&str] = &["id", "url", "api"];

/// Converts field identifiers into the exported form used after `Get`/`Set`.
///
/// Only the leading run of ASCII lowercase letters is rewritten; the rest of
/// the identifier is copied verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTransformer {
    initialisms: Vec<String>,
}

impl Default for NameTransformer {
    fn default() -> Self {
        Self::new(DEFAULT_INITIALISMS.iter().copied())
    }
}

impl NameTransformer {
    /// Creates a transformer recognising `initialisms`.
    ///
    /// Entries are trimmed and blank entries dropped. Matching is
    /// case-insensitive.
    #[must_use]
    pub fn new<I, S>(initialisms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            initialisms: initialisms
                .into_iter()
                .map(|entry| entry.as_ref().trim().to_upper_camel_case())
                .filter(|entry| !entry.is_empty())
                .collect(),
        }
    }

    /// Parses a comma-separated initialism list such as `id,url,api`.
    #[must_use]
    pub fn from_list(list: &str) -> Self {
        Self::new(list.split(','))
    }

    /// Returns the exported accessor suffix for `field`.
    ///
    /// # Examples
    ///
    /// ```
    /// use genprop::naming::NameTransformer;
    ///
    /// let names = NameTransformer::default();
    /// assert_eq!(names.exported("apiKey"), "APIKey");
    /// assert_eq!(names.exported("name"), "Name");
    /// assert_eq!(names.exported("identity"), "Identity");
    /// ```
    #[must_use]
    pub fn exported(&self, field: &str) -> String {
        let head_len = field
            .bytes()
            .take_while(u8::is_ascii_lowercase)
            .count();
        if head_len == 0 {
            return field.to_owned();
        }
        let (head, tail) = field.split_at(head_len);
        let titled = head.to_upper_camel_case();
        let lead = if self.initialisms.contains(&titled) {
            head.to_ascii_uppercase()
        } else {
            titled
        };
        format!("{lead}{tail}")
    }
}
