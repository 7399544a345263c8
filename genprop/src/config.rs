//! Generator configuration.

use crate::naming::NameTransformer;

/// Tag key holding property directives.
pub const DEFAULT_PROPERTY_TAG: &str = "property";
/// Tag key holding validation rules.
pub const DEFAULT_VALIDATION_TAG: &str = "validate";
/// Function called by validating setters.
pub const DEFAULT_VALIDATION_FUNC: &str = "validateFieldValue";

/// Settings consumed by [`crate::Generator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Tag key holding property directives.
    pub property_tag: String,
    /// Accessor name derivation rules.
    pub names: NameTransformer,
    /// Function called as `f(fieldName, value, rule)` by validating setters.
    pub validation_func: String,
    /// Tag key holding the rule string passed to `validation_func`.
    pub validation_tag: String,
    /// Whether to emit a `New<Type>` constructor per struct.
    pub generate_new_func: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            property_tag: DEFAULT_PROPERTY_TAG.to_owned(),
            names: NameTransformer::default(),
            validation_func: DEFAULT_VALIDATION_FUNC.to_owned(),
            validation_tag: DEFAULT_VALIDATION_TAG.to_owned(),
            generate_new_func: false,
        }
    }
}

impl GeneratorConfig {
    /// Replaces the initialism list with a comma-separated one.
    #[must_use]
    pub fn with_initialisms(mut self, list: &str) -> Self {
        self.names = NameTransformer::from_list(list);
        self
    }

    /// Enables or disables constructor synthesis.
    #[must_use]
    pub const fn with_new_func(mut self, enabled: bool) -> Self {
        self.generate_new_func = enabled;
        self
    }

    /// Sets the validation function name.
    #[must_use]
    pub fn with_validation_func(mut self, name: impl Into<String>) -> Self {
        self.validation_func = name.into();
        self
    }

    /// Sets the validation tag key.
    #[must_use]
    pub fn with_validation_tag(mut self, key: impl Into<String>) -> Self {
        self.validation_tag = key.into();
        self
    }
}
