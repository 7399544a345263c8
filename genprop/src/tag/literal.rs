//! Go string literal unquoting for raw struct tag text.

use thiserror::Error;

/// Reasons a raw tag literal could not be unquoted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnquoteError {
    /// The text is not wrapped in matching backquotes or double quotes.
    #[error("literal is not a quoted string")]
    NotQuoted,
    /// A double-quoted literal contains an unescaped quote or newline.
    #[error("unexpected {0:?} inside quoted string")]
    UnexpectedChar(char),
    /// A raw literal contains a backquote before its end.
    #[error("backquote inside raw string")]
    NestedBackquote,
    /// An escape sequence is unknown or truncated.
    #[error("invalid escape sequence `\\{0}`")]
    InvalidEscape(String),
    /// An escape names a value that is not a Unicode scalar.
    #[error("escape does not name a valid code point: {0:#x}")]
    InvalidCodePoint(u32),
    /// Byte escapes decode to a sequence that is not valid UTF-8.
    #[error("byte escapes do not form valid UTF-8")]
    InvalidUtf8,
}

/// Unquotes a Go string literal written with backquotes or double quotes.
///
/// Raw (backquoted) literals are taken verbatim with carriage returns dropped.
/// Interpreted literals honour the Go escape sequences.
///
/// # Errors
///
/// Returns [`UnquoteError`] when the literal is malformed.
///
/// # Examples
///
/// ```
/// use genprop::tag::unquote;
///
/// assert_eq!(unquote("`property:\"get\"`").as_deref(), Ok("property:\"get\""));
/// assert_eq!(unquote("\"property:\\\"get\\\"\"").as_deref(), Ok("property:\"get\""));
/// assert!(unquote("property").is_err());
/// ```
pub fn unquote(literal: &str) -> Result<String, UnquoteError> {
    if let Some(inner) = strip_delimiters(literal, '`') {
        if inner.contains('`') {
            return Err(UnquoteError::NestedBackquote);
        }
        return Ok(inner.chars().filter(|ch| *ch != '\r').collect());
    }
    let inner = strip_delimiters(literal, '"').ok_or(UnquoteError::NotQuoted)?;
    unescape(inner)
}

fn strip_delimiters(literal: &str, delimiter: char) -> Option<&str> {
    literal.strip_prefix(delimiter)?.strip_suffix(delimiter)
}

fn unescape(inner: &str) -> Result<String, UnquoteError> {
    let mut out = Vec::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '"' | '\n' => return Err(UnquoteError::UnexpectedChar(ch)),
            '\\' => unescape_one(&mut chars, &mut out)?,
            other => push_char(&mut out, other),
        }
    }
    String::from_utf8(out).map_err(|_| UnquoteError::InvalidUtf8)
}

fn push_char(out: &mut Vec<u8>, ch: char) {
    let mut buf = [0_u8; 4];
    out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
}

/// Decodes one escape into `out`. `\x` and octal escapes append a single raw
/// byte, so a run of them may spell a multi-byte UTF-8 sequence.
fn unescape_one(chars: &mut std::str::Chars<'_>, out: &mut Vec<u8>) -> Result<(), UnquoteError> {
    let Some(kind) = chars.next() else {
        return Err(UnquoteError::InvalidEscape(String::new()));
    };
    let simple = match kind {
        'a' => Some('\u{07}'),
        'b' => Some('\u{08}'),
        'f' => Some('\u{0C}'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        'v' => Some('\u{0B}'),
        '\\' => Some('\\'),
        '"' => Some('"'),
        _ => None,
    };
    if let Some(value) = simple {
        push_char(out, value);
        return Ok(());
    }
    match kind {
        'x' => {
            let code = read_digits(chars, kind, 2, 16)?;
            out.push(byte(code, || format!("x{code:02x}"))?);
        }
        '0'..='7' => {
            let rest = read_digits(chars, kind, 2, 8)?;
            let lead = kind.to_digit(8).unwrap_or_default();
            out.push(byte(lead * 64 + rest, || format!("{kind}{rest:02o}"))?);
        }
        'u' | 'U' => {
            let width = if kind == 'u' { 4 } else { 8 };
            let code = read_digits(chars, kind, width, 16)?;
            let decoded = char::from_u32(code).ok_or(UnquoteError::InvalidCodePoint(code))?;
            push_char(out, decoded);
        }
        other => return Err(UnquoteError::InvalidEscape(other.to_string())),
    }
    Ok(())
}

fn byte(code: u32, written: impl FnOnce() -> String) -> Result<u8, UnquoteError> {
    u8::try_from(code).map_err(|_| UnquoteError::InvalidEscape(written()))
}

fn read_digits(
    chars: &mut std::str::Chars<'_>,
    kind: char,
    count: usize,
    radix: u32,
) -> Result<u32, UnquoteError> {
    let mut value = 0_u32;
    let mut seen = String::new();
    for _ in 0..count {
        let digit = chars
            .next()
            .and_then(|ch| {
                seen.push(ch);
                ch.to_digit(radix)
            })
            .ok_or_else(|| UnquoteError::InvalidEscape(format!("{kind}{seen}")))?;
        value = value * radix + digit;
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("`a:\"b\"`", "a:\"b\"")]
    #[case("`line\r\n`", "line\n")]
    #[case("\"a:\\\"b\\\"\"", "a:\"b\"")]
    #[case("\"tab\\there\"", "tab\there")]
    #[case("\"\\x41\\101\\u00e9\"", "AAé")]
    #[case("\"\"", "")]
    #[case("\"\\xc3\\xa9\\303\\251\"", "éé")]
    #[case("\"\\xe2\\x82\\xac\"", "€")]
    fn unquotes_valid_literals(#[case] literal: &str, #[case] expected: &str) {
        assert_eq!(unquote(literal).as_deref(), Ok(expected));
    }

    #[rstest]
    #[case("plain", UnquoteError::NotQuoted)]
    #[case("`", UnquoteError::NotQuoted)]
    #[case("\"unterminated", UnquoteError::NotQuoted)]
    #[case("\"a\"b\"", UnquoteError::UnexpectedChar('"'))]
    #[case("\"\\q\"", UnquoteError::InvalidEscape("q".to_owned()))]
    #[case("\"\\x4\"", UnquoteError::InvalidEscape("x4".to_owned()))]
    #[case("\"\\400\"", UnquoteError::InvalidEscape("400".to_owned()))]
    #[case("\"\\xff\"", UnquoteError::InvalidUtf8)]
    #[case("\"\\xc3\"", UnquoteError::InvalidUtf8)]
    #[case("\"\\ud800\"", UnquoteError::InvalidCodePoint(0xd800))]
    fn rejects_malformed_literals(#[case] literal: &str, #[case] expected: UnquoteError) {
        assert_eq!(unquote(literal), Err(expected));
    }
}
