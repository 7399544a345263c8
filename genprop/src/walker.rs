//! Top-level declaration walk driving accessor and constructor synthesis.

use tracing::{debug, instrument};

use crate::accessor::AccessorSynthesizer;
use crate::ast::{Decl, FieldDecl, SourceFile, TypeDecl, TypeShape};
use crate::config::GeneratorConfig;
use crate::constructor::ConstructorSynthesizer;
use crate::error::GenerateError;
use crate::field::FieldPlan;

/// Synthesizes accessor methods and constructors for a parsed file.
///
/// # Examples
///
/// ```
/// use genprop::ast::{Decl, FieldDecl, SourceFile, TypeDecl};
/// use genprop::{Generator, GeneratorConfig};
///
/// let file = SourceFile::new(
///     "example",
///     vec![Decl::Type(TypeDecl::structure(
///         "User",
///         vec![FieldDecl::named("id", "int").with_tag(r#"`property:"get"`"#)],
///     ))],
/// );
/// let decls = Generator::new(GeneratorConfig::default())
///     .generate(&file)
///     .expect("generation succeeds");
/// assert_eq!(decls.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Creates a generator using `config`.
    #[must_use]
    pub const fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Walks `file` and returns the synthesized declarations.
    ///
    /// Imports are passed through unchanged. Each struct contributes its
    /// constructor (when enabled) followed by accessors in field order. All
    /// other declarations contribute nothing.
    ///
    /// # Errors
    ///
    /// Returns the first [`GenerateError`] encountered; no declarations are
    /// returned in that case.
    #[instrument(level = "debug", skip_all, fields(package = %file.package))]
    pub fn generate(&self, file: &SourceFile) -> Result<Vec<Decl>, GenerateError> {
        let mut decls = Vec::new();
        for decl in &file.decls {
            match decl {
                Decl::Import(import) => decls.push(Decl::Import(import.clone())),
                Decl::Type(type_decl) => decls.extend(self.type_decls(type_decl)?),
                Decl::Func(_) | Decl::Other => {}
            }
        }
        Ok(decls)
    }

    fn type_decls(&self, type_decl: &TypeDecl) -> Result<Vec<Decl>, GenerateError> {
        let TypeShape::Struct(fields) = &type_decl.shape else {
            debug!(type_name = %type_decl.name, "skipping non-struct type");
            return Ok(Vec::new());
        };
        let plans = self.analyse_fields(&type_decl.name, fields)?;
        debug!(
            type_name = %type_decl.name,
            fields = plans.len(),
            "synthesizing struct declarations"
        );

        let mut decls = Vec::new();
        if self.config.generate_new_func {
            let constructor =
                ConstructorSynthesizer::new(&type_decl.name, &self.config).constructor(&plans);
            decls.push(Decl::Func(constructor));
        }
        let accessors = AccessorSynthesizer::new(&type_decl.name, &self.config);
        decls.extend(
            plans
                .iter()
                .flat_map(|plan| accessors.field_accessors(plan))
                .map(Decl::Func),
        );
        Ok(decls)
    }

    fn analyse_fields(
        &self,
        type_name: &str,
        fields: &[FieldDecl],
    ) -> Result<Vec<FieldPlan>, GenerateError> {
        let mut plans = Vec::with_capacity(fields.len());
        for field in fields {
            if let Some(plan) = FieldPlan::analyse(type_name, field, &self.config)? {
                plans.push(plan);
            }
        }
        Ok(plans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{FuncDecl, ImportDecl, ImportSpec, TypeExpr};
    use rstest::rstest;

    fn signatures(decls: &[Decl]) -> Vec<String> {
        decls
            .iter()
            .filter_map(|decl| match decl {
                Decl::Func(func) => Some(func.signature()),
                _ => None,
            })
            .collect()
    }

    fn user() -> Decl {
        Decl::Type(TypeDecl::structure(
            "User",
            vec![
                FieldDecl::named("id", "int").with_tag(r#"`property:"get"`"#),
                FieldDecl::named("name", "string").with_tag(r#"`property:"get,set"`"#),
            ],
        ))
    }

    #[rstest]
    fn struct_fields_produce_accessors_in_order() {
        let file = SourceFile::new("example", vec![user()]);
        let decls = Generator::default().generate(&file).unwrap_or_default();
        assert_eq!(
            signatures(&decls),
            [
                "func (t *User) GetID() int",
                "func (t *User) GetName() string",
                "func (t *User) SetName(v string)",
            ]
        );
    }

    #[rstest]
    fn constructor_precedes_accessors_when_enabled() {
        let file = SourceFile::new("example", vec![user()]);
        let generator = Generator::new(GeneratorConfig::default().with_new_func(true));
        let decls = generator.generate(&file).unwrap_or_default();
        assert_eq!(
            signatures(&decls).first().map(String::as_str),
            Some("func NewUser(id int, name string) *User")
        );
        assert_eq!(decls.len(), 4);
    }

    #[rstest]
    fn imports_pass_through_and_other_shapes_are_ignored() {
        let import = Decl::Import(ImportDecl {
            specs: vec![ImportSpec::new("go/ast")],
        });
        let file = SourceFile::new(
            "example",
            vec![
                import.clone(),
                Decl::Type(TypeDecl {
                    name: "Name".to_owned(),
                    shape: TypeShape::Other(TypeExpr::new("string")),
                }),
                Decl::Type(TypeDecl {
                    name: "List".to_owned(),
                    shape: TypeShape::Generic,
                }),
                Decl::Func(FuncDecl {
                    receiver: None,
                    name: "helper".to_owned(),
                    params: Vec::new(),
                    results: Vec::new(),
                    body: Vec::new(),
                }),
                Decl::Other,
            ],
        );
        assert_eq!(Generator::default().generate(&file), Ok(vec![import]));
    }

    #[rstest]
    fn invalid_directive_aborts_without_partial_output() {
        let broken = Decl::Type(TypeDecl::structure(
            "Broken",
            vec![FieldDecl::named("x", "int").with_tag(r#"`property:"foo"`"#)],
        ));
        let file = SourceFile::new("example", vec![user(), broken]);
        let result = Generator::default().generate(&file);
        assert!(matches!(
            result,
            Err(GenerateError::InvalidDirective { ref directive, .. }) if directive == "foo"
        ));
    }

    #[rstest]
    fn embedded_and_untagged_fields_produce_nothing() {
        let file = SourceFile::new(
            "example",
            vec![Decl::Type(TypeDecl::structure(
                "Wrapper",
                vec![
                    FieldDecl::embedded("Base").with_tag(r#"`property:"get"`"#),
                    FieldDecl::named("plain", "int"),
                    FieldDecl::named("dash", "int").with_tag(r#"`property:"-"`"#),
                ],
            ))],
        );
        assert_eq!(Generator::default().generate(&file), Ok(Vec::new()));
    }
}
