//! Helpers for inspecting generated Go source text.

/// Returns every top-level `func` line without its opening brace.
#[must_use]
pub fn func_signatures(source: &str) -> Vec<&str> {
    source
        .lines()
        .filter(|line| line.starts_with("func "))
        .map(|line| line.strip_suffix(" {").unwrap_or(line))
        .collect()
}

/// Returns the body lines of the function whose signature line starts with
/// `prefix`, with one level of indentation removed.
#[must_use]
pub fn func_body<'a>(source: &'a str, prefix: &str) -> Vec<&'a str> {
    source
        .lines()
        .skip_while(|line| !line.starts_with(prefix))
        .skip(1)
        .take_while(|line| *line != "}")
        .map(|line| line.strip_prefix('\t').unwrap_or(line))
        .collect()
}
