//! Per-field analysis shared by the accessor and constructor synthesizers.

use crate::ast::{FieldDecl, TypeExpr};
use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use crate::tag::{DirectiveSet, StructTag};

/// A named field with its tag interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPlan {
    /// Field identifier as declared.
    pub name: String,
    /// Declared type.
    pub ty: TypeExpr,
    /// Requested accessors in tag order.
    pub directives: DirectiveSet,
    /// Non-empty validation rule, when the validation tag is present.
    pub validation: Option<String>,
}

impl FieldPlan {
    /// Interprets `field` under `config`.
    ///
    /// The tag of every field is checked, embedded ones included, but only
    /// named fields produce a plan: embedded fields return `Ok(None)` and
    /// never receive accessors or constructor parameters. Errors on an
    /// embedded field name it by its type.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::MalformedTag`] when the raw tag literal cannot
    /// be unquoted and [`GenerateError::InvalidDirective`] for unknown
    /// directive tokens.
    pub fn analyse(
        type_name: &str,
        field: &FieldDecl,
        config: &GeneratorConfig,
    ) -> Result<Option<Self>, GenerateError> {
        let label = field.name.as_deref().unwrap_or_else(|| field.ty.as_str());
        let tag = field
            .tag
            .as_deref()
            .map(StructTag::from_literal)
            .transpose()
            .map_err(|source| GenerateError::MalformedTag {
                type_name: type_name.to_owned(),
                field: label.to_owned(),
                source,
            })?;
        let property = tag
            .as_ref()
            .and_then(|parsed| parsed.lookup(&config.property_tag));
        let directives = DirectiveSet::parse(property.as_deref())
            .map_err(|err| GenerateError::invalid_directive(type_name, label, err))?;
        let Some(name) = field.name.as_deref() else {
            return Ok(None);
        };
        let validation = tag
            .as_ref()
            .and_then(|parsed| parsed.lookup(&config.validation_tag))
            .filter(|rule| !rule.is_empty());
        Ok(Some(Self {
            name: name.to_owned(),
            ty: field.ty.clone(),
            directives,
            validation,
        }))
    }
}
