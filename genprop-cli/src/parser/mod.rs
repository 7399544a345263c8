//! Go source front end.
//!
//! Reads just enough of a Go file to drive generation: the package clause,
//! imports and type declarations with their struct fields. Function, variable
//! and constant declarations are skipped by balanced-delimiter scanning.

mod lexer;
mod types;

use genprop::ast::{Decl, FieldDecl, ImportDecl, ImportSpec, SourceFile, TypeDecl, TypeShape};
use genprop::tag::unquote;
use thiserror::Error;

pub use lexer::{Tok, Token, tokenize};
use types::canonical_type;

/// A syntax error with its 1-based source position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{line}:{column}: {message}")]
pub struct ParseError {
    /// Line of the offending token.
    pub line: usize,
    /// Column of the offending token.
    pub column: usize,
    /// Description of the problem.
    pub message: String,
}

impl ParseError {
    /// Creates an error at `line`:`column`.
    #[must_use]
    pub fn new(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            column,
            message: message.into(),
        }
    }
}

/// Parses Go `source` into the generator's syntax model.
///
/// # Errors
///
/// Returns [`ParseError`] when the source is not a well-formed Go file as far
/// as the modelled declarations are concerned.
pub fn parse_source(source: &str) -> Result<SourceFile, ParseError> {
    Parser::new(tokenize(source)?).file()
}

/// Where a type expression ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TypeContext {
    /// A type specification: ends at `;` or the closing `)` of a group.
    Spec,
    /// A struct field: additionally ends at the tag literal or the closing `}`.
    Field,
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    eof: Token,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        let eof = tokens.last().cloned().unwrap_or(Token {
            tok: Tok::Eof,
            line: 1,
            column: 1,
        });
        Self {
            tokens,
            pos: 0,
            eof,
        }
    }

    fn peek(&self) -> &Token {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> &Token {
        self.tokens.get(self.pos + offset).unwrap_or(&self.eof)
    }

    fn bump(&mut self) -> Token {
        let token = self.peek().clone();
        if token.tok != Tok::Eof {
            self.pos += 1;
        }
        token
    }

    fn error_here(&self, message: impl Into<String>) -> ParseError {
        let token = self.peek();
        ParseError::new(token.line, token.column, message)
    }

    fn unexpected(&self, expected: &str) -> ParseError {
        let found = match &self.peek().tok {
            Tok::Eof => "end of file".to_owned(),
            Tok::Semi => "newline".to_owned(),
            tok => format!("`{}`", tok.text()),
        };
        self.error_here(format!("expected {expected}, found {found}"))
    }

    fn at_punct(&self, punct: &str) -> bool {
        self.peek().tok.is_punct(punct)
    }

    fn eat_punct(&mut self, punct: &str) -> bool {
        let matched = self.at_punct(punct);
        if matched {
            self.bump();
        }
        matched
    }

    fn expect_punct(&mut self, punct: &str) -> Result<(), ParseError> {
        if self.eat_punct(punct) {
            Ok(())
        } else {
            Err(self.unexpected(&format!("`{punct}`")))
        }
    }

    fn expect_ident(&mut self) -> Result<String, ParseError> {
        match &self.peek().tok {
            Tok::Ident(text) => {
                let ident = text.clone();
                self.bump();
                Ok(ident)
            }
            _ => Err(self.unexpected("identifier")),
        }
    }

    fn skip_semis(&mut self) {
        while self.peek().tok == Tok::Semi {
            self.bump();
        }
    }

    /// Accepts the end of a spec: `;`, or nothing before `closer`/EOF.
    fn end_of_spec(&mut self, closer: Option<&str>) -> Result<(), ParseError> {
        match &self.peek().tok {
            Tok::Semi => {
                self.bump();
                Ok(())
            }
            Tok::Eof => Ok(()),
            Tok::Punct(punct) if Some(*punct) == closer => Ok(()),
            _ => Err(self.unexpected("`;` or newline")),
        }
    }

    fn file(mut self) -> Result<SourceFile, ParseError> {
        self.skip_semis();
        if !self.peek().tok.is_ident("package") {
            return Err(self.unexpected("`package` clause"));
        }
        self.bump();
        let package = self.expect_ident()?;
        self.end_of_spec(None)?;

        let mut decls = Vec::new();
        loop {
            self.skip_semis();
            let keyword = match &self.peek().tok {
                Tok::Eof => break,
                Tok::Ident(keyword) => keyword.clone(),
                _ => return Err(self.unexpected("declaration")),
            };
            match keyword.as_str() {
                "import" => decls.push(Decl::Import(self.import_decl()?)),
                "type" => decls.extend(self.type_decls()?.into_iter().map(Decl::Type)),
                "func" | "var" | "const" => {
                    self.skip_decl();
                    decls.push(Decl::Other);
                }
                _ => return Err(self.unexpected("declaration")),
            }
        }
        Ok(SourceFile::new(package, decls))
    }

    fn import_decl(&mut self) -> Result<ImportDecl, ParseError> {
        self.bump();
        let mut specs = Vec::new();
        if self.eat_punct("(") {
            loop {
                self.skip_semis();
                if self.eat_punct(")") {
                    break;
                }
                specs.push(self.import_spec()?);
                self.end_of_spec(Some(")"))?;
            }
            self.end_of_spec(None)?;
        } else {
            specs.push(self.import_spec()?);
            self.end_of_spec(None)?;
        }
        Ok(ImportDecl { specs })
    }

    fn import_spec(&mut self) -> Result<ImportSpec, ParseError> {
        let name = match &self.peek().tok {
            Tok::Ident(name) => Some(name.clone()),
            Tok::Punct(".") => Some(".".to_owned()),
            _ => None,
        };
        if name.is_some() {
            self.bump();
        }
        let Tok::Str(literal) = &self.peek().tok else {
            return Err(self.unexpected("import path"));
        };
        let path = unquote(literal)
            .map_err(|err| self.error_here(format!("invalid import path: {err}")))?;
        self.bump();
        Ok(ImportSpec {
            name,
            path,
        })
    }

    fn type_decls(&mut self) -> Result<Vec<TypeDecl>, ParseError> {
        self.bump();
        let mut decls = Vec::new();
        if self.eat_punct("(") {
            loop {
                self.skip_semis();
                if self.eat_punct(")") {
                    break;
                }
                decls.push(self.type_spec()?);
                self.end_of_spec(Some(")"))?;
            }
            self.end_of_spec(None)?;
        } else {
            decls.push(self.type_spec()?);
            self.end_of_spec(None)?;
        }
        Ok(decls)
    }

    fn type_spec(&mut self) -> Result<TypeDecl, ParseError> {
        let name = self.expect_ident()?;
        if self.at_type_parameters() {
            self.type_tokens(TypeContext::Spec)?;
            return Ok(TypeDecl {
                name,
                shape: TypeShape::Generic,
            });
        }
        self.eat_punct("=");
        let shape = if self.peek().tok.is_ident("struct") && self.peek_at(1).tok.is_punct("{") {
            TypeShape::Struct(self.struct_fields()?)
        } else {
            let tokens = self.type_tokens(TypeContext::Spec)?;
            if tokens.is_empty() {
                return Err(self.unexpected("type"));
            }
            TypeShape::Other(canonical_type(&tokens).into())
        };
        Ok(TypeDecl { name, shape })
    }

    /// `type T[P any]` as opposed to the array type in `type T [N]int`.
    fn at_type_parameters(&self) -> bool {
        self.at_punct("[")
            && matches!(self.peek_at(1).tok, Tok::Ident(_))
            && !self.peek_at(2).tok.is_punct("]")
    }

    fn struct_fields(&mut self) -> Result<Vec<FieldDecl>, ParseError> {
        self.bump();
        self.expect_punct("{")?;
        let mut fields = Vec::new();
        loop {
            self.skip_semis();
            if self.eat_punct("}") {
                break;
            }
            fields.extend(self.field_group()?);
            self.end_of_spec(Some("}"))?;
        }
        Ok(fields)
    }

    fn field_group(&mut self) -> Result<Vec<FieldDecl>, ParseError> {
        let names = if self.at_embedded_field() {
            Vec::new()
        } else {
            let mut names = vec![self.expect_ident()?];
            while self.eat_punct(",") {
                names.push(self.expect_ident()?);
            }
            names
        };
        let tokens = self.type_tokens(TypeContext::Field)?;
        if tokens.is_empty() {
            return Err(self.unexpected("field type"));
        }
        let ty = canonical_type(&tokens);
        let tag = match &self.peek().tok {
            Tok::Str(literal) => {
                let text = literal.clone();
                self.bump();
                Some(text)
            }
            _ => None,
        };

        let field = |name: Option<String>| FieldDecl {
            name,
            ty: ty.as_str().into(),
            tag: tag.clone(),
        };
        Ok(if names.is_empty() {
            vec![field(None)]
        } else {
            names.into_iter().map(|name| field(Some(name))).collect()
        })
    }

    fn at_embedded_field(&self) -> bool {
        if self.at_punct("*") {
            return true;
        }
        matches!(self.peek().tok, Tok::Ident(_))
            && matches!(
                &self.peek_at(1).tok,
                Tok::Semi | Tok::Str(_) | Tok::Eof | Tok::Punct(".") | Tok::Punct("}")
            )
    }

    /// Collects the tokens of one type expression, leaving its terminator.
    fn type_tokens(&mut self, context: TypeContext) -> Result<Vec<Token>, ParseError> {
        let mut tokens = Vec::new();
        let mut depth = 0_usize;
        loop {
            let token = self.peek();
            match &token.tok {
                Tok::Eof if depth > 0 => return Err(self.unexpected("closing delimiter")),
                Tok::Eof => break,
                Tok::Semi if depth == 0 => break,
                Tok::Str(_) if depth == 0 && context == TypeContext::Field => break,
                Tok::Punct(")" | "]" | "}") if depth == 0 => break,
                Tok::Punct("(" | "[" | "{") => depth += 1,
                Tok::Punct(")" | "]" | "}") => depth -= 1,
                _ => {}
            }
            tokens.push(self.bump());
        }
        Ok(tokens)
    }

    /// Skips a `func`, `var` or `const` declaration.
    fn skip_decl(&mut self) {
        let mut depth = 0_usize;
        loop {
            match &self.peek().tok {
                Tok::Eof => return,
                Tok::Semi if depth == 0 => {
                    self.bump();
                    return;
                }
                Tok::Punct("(" | "[" | "{") => depth += 1,
                Tok::Punct(")" | "]" | "}") => depth = depth.saturating_sub(1),
                _ => {}
            }
            self.bump();
        }
    }
}
