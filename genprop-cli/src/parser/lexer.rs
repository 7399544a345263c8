//! Go tokenizer with automatic semicolon insertion.

use super::ParseError;

/// Go keywords; only `break`, `continue`, `fallthrough` and `return` end a
/// statement at a line break.
const KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Operators and delimiters, longest first so that maximal munch applies.
const PUNCTUATION: &[&str] = &[
    "<<=", ">>=", "&^=", "...", "&&", "||", "<-", "++", "--", "==", "!=", "<=", ">=", ":=", "+=",
    "-=", "*=", "/=", "%=", "&=", "|=", "^=", "<<", ">>", "&^", "+", "-", "*", "/", "%", "&", "|",
    "^", "<", ">", "=", "!", "(", ")", "[", "]", "{", "}", ",", ".", ":", "~",
];

/// Lexical token classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tok {
    /// Identifier or keyword.
    Ident(String),
    /// Numeric literal text.
    Number(String),
    /// String literal text including its quotes.
    Str(String),
    /// Rune literal text including its quotes.
    Rune(String),
    /// Operator or delimiter.
    Punct(&'static str),
    /// Explicit or inserted `;`.
    Semi,
    /// End of input.
    Eof,
}

impl Tok {
    /// Source text of the token.
    #[must_use]
    pub const fn text(&self) -> &str {
        match self {
            Self::Ident(text) | Self::Number(text) | Self::Str(text) | Self::Rune(text) => {
                text.as_str()
            }
            Self::Punct(text) => text,
            Self::Semi => ";",
            Self::Eof => "",
        }
    }

    /// Returns `true` for the punctuation `text`.
    #[must_use]
    pub fn is_punct(&self, text: &str) -> bool {
        matches!(self, Self::Punct(punct) if *punct == text)
    }

    /// Returns `true` for the identifier or keyword `text`.
    #[must_use]
    pub fn is_ident(&self, text: &str) -> bool {
        matches!(self, Self::Ident(ident) if ident == text)
    }

    fn ends_statement(&self) -> bool {
        match self {
            Self::Ident(ident) => {
                !KEYWORDS.contains(&ident.as_str())
                    || matches!(
                        ident.as_str(),
                        "break" | "continue" | "fallthrough" | "return"
                    )
            }
            Self::Number(_) | Self::Str(_) | Self::Rune(_) => true,
            Self::Punct(punct) => matches!(*punct, "++" | "--" | ")" | "]" | "}"),
            Self::Semi | Self::Eof => false,
        }
    }
}

/// A token with its 1-based source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token class and text.
    pub tok: Tok,
    /// Line of the first character.
    pub line: usize,
    /// Column of the first character.
    pub column: usize,
}

/// Splits `source` into tokens, ending with [`Tok::Eof`].
///
/// # Errors
///
/// Returns [`ParseError`] for unterminated literals or comments and for
/// characters that cannot start a token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    Lexer::new(source).run()
}

struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    column: usize,
    tokens: Vec<Token>,
}

impl Lexer {
    fn new(source: &str) -> Self {
        Self {
            chars: source.trim_start_matches('\u{feff}').chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
            tokens: Vec::new(),
        }
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek(0)?;
        self.pos += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError::new(self.line, self.column, message)
    }

    fn push(&mut self, tok: Tok, line: usize, column: usize) {
        self.tokens.push(Token { tok, line, column });
    }

    fn newline(&mut self) {
        let line = self.line;
        let column = self.column;
        if self
            .tokens
            .last()
            .is_some_and(|token| token.tok.ends_statement())
        {
            self.push(Tok::Semi, line, column);
        }
    }

    fn run(mut self) -> Result<Vec<Token>, ParseError> {
        while let Some(ch) = self.peek(0) {
            let (line, column) = (self.line, self.column);
            match ch {
                '\n' => {
                    self.newline();
                    self.bump();
                }
                ' ' | '\t' | '\r' => {
                    self.bump();
                }
                '/' if self.peek(1) == Some('/') => self.line_comment(),
                '/' if self.peek(1) == Some('*') => self.block_comment()?,
                '"' => {
                    let text = self.interpreted_string()?;
                    self.push(Tok::Str(text), line, column);
                }
                '`' => {
                    let text = self.raw_string()?;
                    self.push(Tok::Str(text), line, column);
                }
                '\'' => {
                    let text = self.rune()?;
                    self.push(Tok::Rune(text), line, column);
                }
                ';' => {
                    self.bump();
                    self.push(Tok::Semi, line, column);
                }
                c if c.is_alphabetic() || c == '_' => {
                    let text = self.take_while(|next| next.is_alphanumeric() || next == '_');
                    self.push(Tok::Ident(text), line, column);
                }
                c if c.is_ascii_digit()
                    || (c == '.' && self.peek(1).is_some_and(|n| n.is_ascii_digit())) =>
                {
                    let text = self.number();
                    self.push(Tok::Number(text), line, column);
                }
                _ => {
                    let punct = self.punctuation()?;
                    self.push(Tok::Punct(punct), line, column);
                }
            }
        }
        self.newline();
        let (line, column) = (self.line, self.column);
        self.push(Tok::Eof, line, column);
        Ok(self.tokens)
    }

    fn take_while(&mut self, keep: impl Fn(char) -> bool) -> String {
        let mut text = String::new();
        while let Some(ch) = self.peek(0).filter(|ch| keep(*ch)) {
            text.push(ch);
            self.bump();
        }
        text
    }

    fn line_comment(&mut self) {
        while self.peek(0).is_some_and(|ch| ch != '\n') {
            self.bump();
        }
    }

    fn block_comment(&mut self) -> Result<(), ParseError> {
        let start = self.error("unterminated block comment");
        self.bump();
        self.bump();
        let mut spans_lines = false;
        loop {
            match self.bump() {
                Some('*') if self.peek(0) == Some('/') => {
                    self.bump();
                    break;
                }
                Some('\n') => spans_lines = true,
                Some(_) => {}
                None => return Err(start),
            }
        }
        if spans_lines {
            self.newline();
        }
        Ok(())
    }

    fn interpreted_string(&mut self) -> Result<String, ParseError> {
        self.quoted('"', "unterminated string literal")
    }

    fn rune(&mut self) -> Result<String, ParseError> {
        self.quoted('\'', "unterminated rune literal")
    }

    fn quoted(&mut self, quote: char, message: &str) -> Result<String, ParseError> {
        let start = self.error(message);
        let mut text = String::new();
        if let Some(open) = self.bump() {
            text.push(open);
        }
        loop {
            match self.bump() {
                Some('\\') => {
                    text.push('\\');
                    match self.bump() {
                        Some('\n') | None => return Err(start),
                        Some(escaped) => text.push(escaped),
                    }
                }
                Some(ch) if ch == quote => {
                    text.push(ch);
                    return Ok(text);
                }
                Some('\n') | None => return Err(start),
                Some(ch) => text.push(ch),
            }
        }
    }

    fn raw_string(&mut self) -> Result<String, ParseError> {
        let start = self.error("unterminated raw string literal");
        let mut text = String::from('`');
        self.bump();
        loop {
            match self.bump() {
                Some('`') => {
                    text.push('`');
                    return Ok(text);
                }
                Some(ch) => text.push(ch),
                None => return Err(start),
            }
        }
    }

    fn number(&mut self) -> String {
        let mut text = String::new();
        while let Some(ch) = self.peek(0) {
            let hex = text.starts_with("0x") || text.starts_with("0X");
            let exponent_sign = matches!(ch, '+' | '-')
                && if hex {
                    text.ends_with(['p', 'P'])
                } else {
                    text.ends_with(['e', 'E', 'p', 'P'])
                };
            if ch.is_ascii_alphanumeric() || ch == '_' || ch == '.' || exponent_sign {
                text.push(ch);
                self.bump();
            } else {
                break;
            }
        }
        text
    }

    fn punctuation(&mut self) -> Result<&'static str, ParseError> {
        let matched = PUNCTUATION.iter().copied().find(|punct| {
            punct
                .chars()
                .enumerate()
                .all(|(offset, expected)| self.peek(offset) == Some(expected))
        });
        let Some(punct) = matched else {
            let ch = self.peek(0).unwrap_or_default();
            return Err(self.error(format!("unexpected character {ch:?}")));
        };
        for _ in 0..punct.chars().count() {
            self.bump();
        }
        Ok(punct)
    }
}
