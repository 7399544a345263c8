//! Syntax model shared by the front end, the synthesis engine and the printer.
//!
//! The model is deliberately closed: it covers the declaration shapes the
//! generator reads (imports, type declarations, struct fields) and the
//! statement and expression shapes it writes (reading and assigning a field,
//! calling a method, returning, and returning early on a non-nil error).

use std::fmt;

/// One parsed Go source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Name from the `package` clause.
    pub package: String,
    /// Top-level declarations in source order.
    pub decls: Vec<Decl>,
}

impl SourceFile {
    /// Creates a file with the given package name and declarations.
    #[must_use]
    pub fn new(package: impl Into<String>, decls: Vec<Decl>) -> Self {
        Self {
            package: package.into(),
            decls,
        }
    }
}

/// A top-level declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decl {
    /// An `import` declaration, single or grouped.
    Import(ImportDecl),
    /// A single type specification.
    Type(TypeDecl),
    /// A function or method declaration.
    Func(FuncDecl),
    /// Anything the front end does not model (`var`, `const`, parsed functions).
    Other,
}

/// An `import` declaration holding one or more specs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImportDecl {
    /// Import specs in declaration order.
    pub specs: Vec<ImportSpec>,
}

/// One imported package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpec {
    /// Explicit local name (`_`, `.` or an alias).
    pub name: Option<String>,
    /// Unquoted import path.
    pub path: String,
}

impl ImportSpec {
    /// Creates an import without a local name.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            name: None,
            path: path.into(),
        }
    }

    /// Sets the local name of the import.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// A named type declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    /// Declared type name.
    pub name: String,
    /// Underlying shape.
    pub shape: TypeShape,
}

impl TypeDecl {
    /// Creates a struct type declaration.
    #[must_use]
    pub fn structure(name: impl Into<String>, fields: Vec<FieldDecl>) -> Self {
        Self {
            name: name.into(),
            shape: TypeShape::Struct(fields),
        }
    }
}

/// The underlying shape of a type declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeShape {
    /// A struct with its fields in declaration order.
    Struct(Vec<FieldDecl>),
    /// Any other underlying type (alias, interface, named primitive).
    Other(TypeExpr),
    /// A type-parameterised declaration; never processed.
    Generic,
}

/// One struct field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    /// Field name; `None` for embedded fields.
    pub name: Option<String>,
    /// Declared type.
    pub ty: TypeExpr,
    /// Raw tag literal including its quotes, as written in the source.
    pub tag: Option<String>,
}

impl FieldDecl {
    /// Creates a named field without a tag.
    #[must_use]
    pub fn named(name: impl Into<String>, ty: impl Into<TypeExpr>) -> Self {
        Self {
            name: Some(name.into()),
            ty: ty.into(),
            tag: None,
        }
    }

    /// Creates an embedded field.
    #[must_use]
    pub fn embedded(ty: impl Into<TypeExpr>) -> Self {
        Self {
            name: None,
            ty: ty.into(),
            tag: None,
        }
    }

    /// Attaches a raw tag literal, quotes included.
    #[must_use]
    pub fn with_tag(mut self, raw: impl Into<String>) -> Self {
        self.tag = Some(raw.into());
        self
    }
}

/// Opaque type expression text, copied verbatim into generated signatures.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeExpr(String);

impl TypeExpr {
    /// Wraps already canonical type text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The `*T` form of this type.
    #[must_use]
    pub fn pointer(&self) -> Self {
        Self(format!("*{}", self.0))
    }

    /// The predeclared `error` type.
    #[must_use]
    pub fn error() -> Self {
        Self::new("error")
    }

    /// Returns the type text.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for TypeExpr {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TypeExpr {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A synthesized function or method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDecl {
    /// Method receiver; `None` for free functions.
    pub receiver: Option<Receiver>,
    /// Function name.
    pub name: String,
    /// Parameters in order.
    pub params: Vec<Param>,
    /// Unnamed results in order.
    pub results: Vec<TypeExpr>,
    /// Body statements.
    pub body: Vec<Stmt>,
}

impl FuncDecl {
    /// Builds the `Go`-style signature line without the body, e.g.
    /// `func (t *User) GetID() int`.
    #[must_use]
    pub fn signature(&self) -> String {
        let mut out = String::from("func ");
        if let Some(receiver) = &self.receiver {
            out.push_str(&format!("({} {}) ", receiver.name, receiver.ty));
        }
        out.push_str(&self.name);
        out.push('(');
        let params: Vec<String> = self
            .params
            .iter()
            .map(|param| format!("{} {}", param.name, param.ty))
            .collect();
        out.push_str(&params.join(", "));
        out.push(')');
        match self.results.as_slice() {
            [] => {}
            [single] => out.push_str(&format!(" {single}")),
            many => {
                let results: Vec<&str> = many.iter().map(TypeExpr::as_str).collect();
                out.push_str(&format!(" ({})", results.join(", ")));
            }
        }
        out
    }
}

/// A method receiver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receiver {
    /// Receiver variable name.
    pub name: String,
    /// Receiver type, usually a pointer.
    pub ty: TypeExpr,
}

/// A named parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// Parameter name.
    pub name: String,
    /// Parameter type.
    pub ty: TypeExpr,
}

impl Param {
    /// Creates a parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Assignment operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOp {
    /// `:=`
    Define,
    /// `=`
    Assign,
}

impl AssignOp {
    /// Source text of the operator.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Define => ":=",
            Self::Assign => "=",
        }
    }
}

/// Statements used by accessor and constructor bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// `lhs op rhs`
    Assign {
        /// Assigned targets.
        lhs: Vec<Expr>,
        /// Operator.
        op: AssignOp,
        /// Assigned values.
        rhs: Vec<Expr>,
    },
    /// A bare expression statement, typically a call.
    Expr(Expr),
    /// `return values...`
    Return(Vec<Expr>),
    /// `if cond { body }`, used for early returns on error.
    If {
        /// Branch condition.
        cond: Expr,
        /// Statements executed when the condition holds.
        body: Vec<Stmt>,
    },
}

/// Expressions used by accessor and constructor bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A bare identifier.
    Ident(String),
    /// The `nil` literal.
    Nil,
    /// A string literal holding its unescaped value.
    Str(String),
    /// `base.field`
    Selector {
        /// Selected-from expression.
        base: Box<Expr>,
        /// Selected member name.
        field: String,
    },
    /// `func(args...)`
    Call {
        /// Called expression.
        func: Box<Expr>,
        /// Call arguments.
        args: Vec<Expr>,
    },
    /// `lhs != rhs`
    NotEq {
        /// Left operand.
        lhs: Box<Expr>,
        /// Right operand.
        rhs: Box<Expr>,
    },
    /// `&expr`
    AddressOf(Box<Expr>),
    /// `T{}`
    EmptyLiteral(TypeExpr),
}

impl Expr {
    /// Creates an identifier expression.
    #[must_use]
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Ident(name.into())
    }

    /// Selects `field` from this expression.
    #[must_use]
    pub fn select(self, field: impl Into<String>) -> Self {
        Self::Selector {
            base: Box::new(self),
            field: field.into(),
        }
    }

    /// Calls this expression with `args`.
    #[must_use]
    pub fn call(self, args: Vec<Self>) -> Self {
        Self::Call {
            func: Box::new(self),
            args,
        }
    }

    /// `self != nil`
    #[must_use]
    pub fn not_nil(self) -> Self {
        Self::NotEq {
            lhs: Box::new(self),
            rhs: Box::new(Self::Nil),
        }
    }
}
