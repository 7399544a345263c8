//! gofmt-style printing of synthesized function declarations.

use genprop::ast::{Expr, FuncDecl, Stmt};

use super::escape::quote;

/// Appends `func` to `out` as a complete declaration, tab-indented.
pub(super) fn write_func(out: &mut String, func: &FuncDecl) {
    out.push_str(&func.signature());
    out.push_str(" {\n");
    write_block(out, &func.body, 1);
    out.push_str("}\n");
}

fn write_block(out: &mut String, stmts: &[Stmt], depth: usize) {
    for stmt in stmts {
        write_stmt(out, stmt, depth);
    }
}

fn write_stmt(out: &mut String, stmt: &Stmt, depth: usize) {
    indent(out, depth);
    match stmt {
        Stmt::Assign { lhs, op, rhs } => {
            out.push_str(&expr_list(lhs));
            out.push(' ');
            out.push_str(op.as_str());
            out.push(' ');
            out.push_str(&expr_list(rhs));
        }
        Stmt::Expr(expr) => out.push_str(&expr_text(expr)),
        Stmt::Return(values) if values.is_empty() => out.push_str("return"),
        Stmt::Return(values) => {
            out.push_str("return ");
            out.push_str(&expr_list(values));
        }
        Stmt::If { cond, body } => {
            out.push_str("if ");
            out.push_str(&expr_text(cond));
            out.push_str(" {\n");
            write_block(out, body, depth + 1);
            indent(out, depth);
            out.push('}');
        }
    }
    out.push('\n');
}

fn indent(out: &mut String, depth: usize) {
    out.extend(std::iter::repeat_n('\t', depth));
}

fn expr_list(exprs: &[Expr]) -> String {
    exprs.iter().map(expr_text).collect::<Vec<_>>().join(", ")
}

/// Source text of `expr`.
pub(super) fn expr_text(expr: &Expr) -> String {
    match expr {
        Expr::Ident(name) => name.clone(),
        Expr::Nil => "nil".to_owned(),
        Expr::Str(value) => quote(value),
        Expr::Selector { base, field } => format!("{}.{field}", expr_text(base)),
        Expr::Call { func, args } => format!("{}({})", expr_text(func), expr_list(args)),
        Expr::NotEq { lhs, rhs } => format!("{} != {}", expr_text(lhs), expr_text(rhs)),
        Expr::AddressOf(inner) => format!("&{}", expr_text(inner)),
        Expr::EmptyLiteral(ty) => format!("{ty}{{}}"),
    }
}
