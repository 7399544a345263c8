//! Declaration synthesis engine for `genprop`.
//!
//! Given a parsed Go source file, [`Generator`] finds struct declarations,
//! interprets each field's `property` tag (`get`, `set`, `set=private`) and
//! optional validation tag, and synthesizes getter and setter methods plus an
//! optional `New<Type>` constructor. Parsing source text and printing the
//! result are left to the caller; see the `genprop-cli` crate.
//!
//! ```
//! use genprop::ast::{Decl, FieldDecl, SourceFile, TypeDecl};
//! use genprop::{Generator, GeneratorConfig};
//!
//! let file = SourceFile::new(
//!     "example",
//!     vec![Decl::Type(TypeDecl::structure(
//!         "Client",
//!         vec![FieldDecl::named("apiKey", "string").with_tag(r#"`property:"get,set"`"#)],
//!     ))],
//! );
//! let decls = Generator::new(GeneratorConfig::default()).generate(&file)?;
//! let names: Vec<_> = decls
//!     .iter()
//!     .filter_map(|decl| match decl {
//!         Decl::Func(func) => Some(func.name.as_str()),
//!         _ => None,
//!     })
//!     .collect();
//! assert_eq!(names, ["GetAPIKey", "SetAPIKey"]);
//! # Ok::<(), genprop::GenerateError>(())
//! ```

pub mod accessor;
pub mod ast;
pub mod config;
pub mod constructor;
mod error;
pub mod field;
pub mod naming;
pub mod tag;
mod walker;

pub use config::GeneratorConfig;
pub use error::GenerateError;
pub use walker::Generator;
