//! Canonical spacing for type expressions rebuilt from tokens.

use super::lexer::{Tok, Token};

/// Joins `tokens` with gofmt spacing, e.g. `map[string][]*T` or
/// `func(a int) (int, error)`.
pub(super) fn canonical_type(tokens: &[Token]) -> String {
    let mut out = String::new();
    let mut prev: Option<&Tok> = None;
    for (index, token) in tokens.iter().enumerate() {
        let next = tokens.get(index + 1).map(|following| &following.tok);
        if token.tok == Tok::Semi && next.is_none_or(|following| following.is_punct("}")) {
            continue;
        }
        if prev.is_some_and(|before| spaced(before, &token.tok, next)) {
            out.push(' ');
        }
        out.push_str(token.tok.text());
        prev = Some(&token.tok);
    }
    out
}

fn spaced(prev: &Tok, tok: &Tok, next: Option<&Tok>) -> bool {
    match (prev.text(), tok.text()) {
        (_, ")" | "]" | "," | "." | ";") => false,
        ("<-", _) => !tok.is_ident("chan"),
        ("(" | "[" | "." | "*" | "..." | "]" | "~", _) => false,
        ("chan", "<-") => false,
        ("struct" | "interface" | "func", "{" | "(") => false,
        ("{", "}") => false,
        (")", "(") => true,
        (_, "(") => false,
        ("map", "[") => false,
        // `a []int` and `a [4]int` in parameter lists, `List[T]` otherwise.
        (_, "[") if matches!(prev, Tok::Ident(_)) => {
            next.is_none_or(|following| {
                following.is_punct("]") || matches!(following, Tok::Number(_))
            })
        }
        _ => true,
    }
}
