//! Import pruning for generated files.
//!
//! An import survives when it is a blank or dot import, or when its package
//! name qualifies an identifier in the generated declarations. Without an
//! explicit alias the package name is assumed from the import path.

use std::collections::BTreeSet;

use genprop::ast::{Expr, FuncDecl, ImportSpec, Stmt, TypeExpr};
use tracing::trace;

/// Standard library imports sort before those whose first path element
/// looks like a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ImportGroup {
    /// No `.` in the first path element.
    Standard,
    /// Anything hosted elsewhere.
    Remote,
}

impl ImportGroup {
    /// Classifies `path`.
    #[must_use]
    pub fn of(path: &str) -> Self {
        let first = path.split('/').next().unwrap_or_default();
        if first.contains('.') {
            Self::Remote
        } else {
            Self::Standard
        }
    }
}

/// Package name assumed for `path` when the import carries no alias.
///
/// The last path element is used, or the one before it when the last is a
/// major-version suffix such as `v2`. A `go-` prefix is dropped and the name
/// ends at the first character that cannot appear in an identifier.
///
/// # Examples
///
/// ```
/// use genprop_cli::render::imports::assumed_name;
///
/// assert_eq!(assumed_name("go/ast"), "ast");
/// assert_eq!(assumed_name("github.com/pkg/errors"), "errors");
/// assert_eq!(assumed_name("example.com/go-yaml/v3"), "yaml");
/// assert_eq!(assumed_name("gopkg.in/check.v1"), "check");
/// ```
#[must_use]
pub fn assumed_name(path: &str) -> &str {
    let mut elements = path.rsplit('/');
    let last = elements.next().unwrap_or_default();
    let element = match elements.next() {
        Some(parent) if is_major_version(last) => parent,
        _ => last,
    };
    let base = element.strip_prefix("go-").unwrap_or(element);
    let end = base
        .char_indices()
        .find(|(_, ch)| !(ch.is_alphanumeric() || *ch == '_'))
        .map_or(base.len(), |(index, _)| index);
    base.get(..end).unwrap_or(base)
}

fn is_major_version(element: &str) -> bool {
    element
        .strip_prefix('v')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

/// Keeps the imports used by `funcs`, deduplicated and sorted by group and
/// path.
#[must_use]
pub fn prune<'a>(
    imports: impl IntoIterator<Item = &'a ImportSpec>,
    funcs: &[&FuncDecl],
) -> Vec<ImportSpec> {
    let used = qualifiers(funcs);
    let mut seen = BTreeSet::new();
    let mut kept: Vec<ImportSpec> = imports
        .into_iter()
        .filter(|spec| {
            let package = spec
                .name
                .as_deref()
                .unwrap_or_else(|| assumed_name(&spec.path));
            let keep = matches!(package, "_" | ".") || used.contains(package);
            if !keep {
                trace!(path = %spec.path, package, "dropping unused import");
            }
            keep
        })
        .filter(|spec| seen.insert((spec.path.clone(), spec.name.clone())))
        .cloned()
        .collect();
    kept.sort_by(|a, b| {
        (ImportGroup::of(&a.path), &a.path, &a.name).cmp(&(
            ImportGroup::of(&b.path),
            &b.path,
            &b.name,
        ))
    });
    kept
}

/// Package qualifiers referenced by the signatures and bodies of `funcs`.
fn qualifiers(funcs: &[&FuncDecl]) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    for func in funcs {
        let types = func
            .receiver
            .iter()
            .map(|receiver| &receiver.ty)
            .chain(func.params.iter().map(|param| &param.ty))
            .chain(&func.results);
        for ty in types {
            scan(TypeExpr::as_str(ty), &mut found);
        }
        for stmt in &func.body {
            stmt_qualifiers(stmt, &mut found);
        }
    }
    found
}

fn stmt_qualifiers(stmt: &Stmt, found: &mut BTreeSet<String>) {
    match stmt {
        Stmt::Assign { lhs, rhs, .. } => {
            for expr in lhs.iter().chain(rhs) {
                expr_qualifiers(expr, found);
            }
        }
        Stmt::Expr(expr) => expr_qualifiers(expr, found),
        Stmt::Return(values) => {
            for expr in values {
                expr_qualifiers(expr, found);
            }
        }
        Stmt::If { cond, body } => {
            expr_qualifiers(cond, found);
            for nested in body {
                stmt_qualifiers(nested, found);
            }
        }
    }
}

/// Selector bases are always locals in generated code, so only identifiers
/// and type literals are scanned.
fn expr_qualifiers(expr: &Expr, found: &mut BTreeSet<String>) {
    match expr {
        Expr::Ident(name) => scan(name, found),
        Expr::EmptyLiteral(ty) => scan(ty.as_str(), found),
        Expr::Selector { base, .. } if matches!(**base, Expr::Ident(_)) => {}
        Expr::Selector { base, .. } => expr_qualifiers(base, found),
        Expr::Call { func, args } => {
            expr_qualifiers(func, found);
            for arg in args {
                expr_qualifiers(arg, found);
            }
        }
        Expr::NotEq { lhs, rhs } => {
            expr_qualifiers(lhs, found);
            expr_qualifiers(rhs, found);
        }
        Expr::AddressOf(inner) => expr_qualifiers(inner, found),
        Expr::Nil | Expr::Str(_) => {}
    }
}

/// Collects `pkg` from every `pkg.Name` in `text`, skipping string literals.
fn scan(text: &str, found: &mut BTreeSet<String>) {
    let mut chars = text.chars();
    let mut word = String::new();
    let mut after_dot = false;
    while let Some(ch) = chars.next() {
        if ch.is_alphanumeric() || ch == '_' {
            word.push(ch);
            continue;
        }
        if ch == '.' && !word.is_empty() && !after_dot && !word.starts_with(char::is_numeric) {
            found.insert(std::mem::take(&mut word));
        }
        word.clear();
        after_dot = ch == '.';
        if matches!(ch, '"' | '`') {
            let mut escaped = false;
            for inner in chars.by_ref() {
                if escaped {
                    escaped = false;
                } else if inner == '\\' && ch == '"' {
                    escaped = true;
                } else if inner == ch {
                    break;
                }
            }
        }
    }
}
