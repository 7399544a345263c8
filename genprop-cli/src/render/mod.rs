//! Go source printer for generated declarations.
//!
//! Produces a complete file: the generated-code marker, the package clause,
//! the imports still referenced after pruning, and each function separated by
//! a blank line. The whole file is rendered into memory so that nothing is
//! written when an earlier stage fails.

pub mod escape;
pub mod imports;
mod printer;

use genprop::ast::{Decl, FuncDecl, ImportSpec};

use self::escape::quote;
use self::imports::{ImportGroup, prune};

/// First line of every generated file.
pub const GENERATED_HEADER: &str = "// Code generated by genprop DO NOT EDIT.";

/// Renders `decls` as the body of Go package `package`.
///
/// Only import and function declarations are printed; any other variant is
/// ignored.
///
/// # Examples
///
/// ```
/// use genprop::ast::Decl;
/// use genprop_cli::render::render_file;
///
/// let text = render_file("demo", &[] as &[Decl]);
/// assert_eq!(text, "// Code generated by genprop DO NOT EDIT.\n\npackage demo\n");
/// ```
#[must_use]
pub fn render_file(package: &str, decls: &[Decl]) -> String {
    let funcs: Vec<&FuncDecl> = decls
        .iter()
        .filter_map(|decl| match decl {
            Decl::Func(func) => Some(func),
            _ => None,
        })
        .collect();
    let imports = prune(
        decls.iter().flat_map(|decl| match decl {
            Decl::Import(import) => import.specs.as_slice(),
            _ => &[],
        }),
        &funcs,
    );

    let mut out = String::with_capacity(256 * (funcs.len() + 1));
    out.push_str(GENERATED_HEADER);
    out.push_str("\n\npackage ");
    out.push_str(package);
    out.push('\n');
    write_imports(&mut out, &imports);
    for func in funcs {
        out.push('\n');
        printer::write_func(&mut out, func);
    }
    out
}

fn write_imports(out: &mut String, imports: &[ImportSpec]) {
    match imports {
        [] => {}
        [single] => {
            out.push_str("\nimport ");
            out.push_str(&import_line(single));
            out.push('\n');
        }
        many => {
            out.push_str("\nimport (\n");
            let mut group = None;
            for spec in many {
                let current = ImportGroup::of(&spec.path);
                if group.is_some_and(|previous| previous != current) {
                    out.push('\n');
                }
                group = Some(current);
                out.push('\t');
                out.push_str(&import_line(spec));
                out.push('\n');
            }
            out.push_str(")\n");
        }
    }
}

fn import_line(spec: &ImportSpec) -> String {
    spec.name.as_ref().map_or_else(
        || quote(&spec.path),
        |name| format!("{name} {}", quote(&spec.path)),
    )
}
