//! Property directive grammar: `get`, `set` and `set=private`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// An unrecognised directive token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid directive `{0}`")]
pub struct DirectiveError(pub String);

/// One accessor request from a property tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// `get`: emit `Get<Name>`.
    Get,
    /// `set`: emit `Set<Name>`.
    Set,
    /// `set=private`: emit `set<Name>`.
    SetPrivate,
}

impl Directive {
    /// The token as written in a tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Set => "set",
            Self::SetPrivate => "set=private",
        }
    }
}

impl FromStr for Directive {
    type Err = DirectiveError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "get" => Ok(Self::Get),
            "set" => Ok(Self::Set),
            "set=private" => Ok(Self::SetPrivate),
            other => Err(DirectiveError(other.to_owned())),
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visibility of a generated setter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetterVisibility {
    /// Exported `Set<Name>`.
    Public,
    /// Unexported `set<Name>`.
    Private,
}

impl SetterVisibility {
    /// Method-name prefix for this visibility.
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Public => "Set",
            Self::Private => "set",
        }
    }
}

/// Ordered directives parsed from a property tag value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DirectiveSet(Vec<Directive>);

impl DirectiveSet {
    /// Parses a property tag value.
    ///
    /// An absent value, an empty value and `-` all produce an empty set.
    /// Tokens are split on `,` and must match exactly; surrounding spaces are
    /// not trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`DirectiveError`] naming the first unrecognised token.
    ///
    /// # Examples
    ///
    /// ```
    /// use genprop::tag::{Directive, DirectiveSet};
    ///
    /// let set = DirectiveSet::parse(Some("set,get")).expect("valid directives");
    /// assert_eq!(set.iter().collect::<Vec<_>>(), [Directive::Set, Directive::Get]);
    /// assert!(DirectiveSet::parse(Some("-")).expect("dash").is_empty());
    /// assert!(DirectiveSet::parse(Some("foo")).is_err());
    /// ```
    pub fn parse(value: Option<&str>) -> Result<Self, DirectiveError> {
        match value {
            None | Some("" | "-") => Ok(Self::default()),
            Some(text) => text
                .split(',')
                .map(Directive::from_str)
                .collect::<Result<Vec<_>, _>>()
                .map(Self),
        }
    }

    /// Returns `true` when no accessor was requested.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates directives in tag order.
    #[must_use = "iterators are lazy"]
    pub fn iter(&self) -> impl Iterator<Item = Directive> + '_ {
        self.0.iter().copied()
    }

    /// The setter the constructor should call, if any.
    ///
    /// `set=private` wins when both setter forms are present.
    #[must_use]
    pub fn setter(&self) -> Option<SetterVisibility> {
        if self.0.contains(&Directive::SetPrivate) {
            Some(SetterVisibility::Private)
        } else if self.0.contains(&Directive::Set) {
            Some(SetterVisibility::Public)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("-"))]
    fn blank_values_yield_empty_set(#[case] value: Option<&str>) {
        assert_eq!(DirectiveSet::parse(value), Ok(DirectiveSet::default()));
    }

    #[rstest]
    #[case("get", vec![Directive::Get])]
    #[case("get,set", vec![Directive::Get, Directive::Set])]
    #[case("set=private,get", vec![Directive::SetPrivate, Directive::Get])]
    fn directives_keep_tag_order(#[case] value: &str, #[case] expected: Vec<Directive>) {
        let parsed = DirectiveSet::parse(Some(value)).map(|set| set.iter().collect::<Vec<_>>());
        assert_eq!(parsed, Ok(expected));
    }

    #[rstest]
    #[case("foo", "foo")]
    #[case("get, set", " set")]
    #[case("get,", "")]
    #[case("set=public", "set=public")]
    fn unknown_tokens_are_rejected(#[case] value: &str, #[case] offending: &str) {
        assert_eq!(
            DirectiveSet::parse(Some(value)),
            Err(DirectiveError(offending.to_owned()))
        );
    }

    #[rstest]
    #[case("get", None)]
    #[case("get,set", Some(SetterVisibility::Public))]
    #[case("set=private", Some(SetterVisibility::Private))]
    #[case("set,set=private", Some(SetterVisibility::Private))]
    fn setter_prefers_private_form(
        #[case] value: &str,
        #[case] expected: Option<SetterVisibility>,
    ) {
        let set = DirectiveSet::parse(Some(value)).unwrap_or_default();
        assert_eq!(set.setter(), expected);
    }
}
