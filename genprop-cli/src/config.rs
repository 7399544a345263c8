//! Layered configuration for `genprop`.
//!
//! Values are merged from built-in defaults, a TOML file, `GENPROP_`
//! environment variables and finally the command-line flags that were
//! actually supplied.

use camino::Utf8Path;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use genprop::GeneratorConfig;
use genprop::config::{DEFAULT_VALIDATION_FUNC, DEFAULT_VALIDATION_TAG};
use genprop::naming::DEFAULT_INITIALISMS;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::Args;
use crate::error::GenpropError;

/// Configuration file read from the working directory when `--config` is
/// not given.
pub const DEFAULT_CONFIG_FILE: &str = ".genprop.toml";

/// Prefix of environment variables mapped onto [`Settings`] fields.
pub const ENV_PREFIX: &str = "GENPROP_";

/// Effective generator settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Comma-separated initialisms.
    pub initialism: String,
    /// Function called by validating setters.
    pub validation_func: String,
    /// Tag key holding validation rules.
    pub validation_tag: String,
    /// Whether to emit `New<Type>` constructors.
    pub generate_new_func: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            initialism: DEFAULT_INITIALISMS.join(","),
            validation_func: DEFAULT_VALIDATION_FUNC.to_owned(),
            validation_tag: DEFAULT_VALIDATION_TAG.to_owned(),
            generate_new_func: false,
        }
    }
}

/// Flags supplied on the command line; absent flags leave lower layers intact.
#[derive(Debug, Default, Serialize)]
struct CliOverrides<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    initialism: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    validation_func: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    validation_tag: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generate_new_func: Option<bool>,
}

impl<'a> From<&'a Args> for CliOverrides<'a> {
    fn from(args: &'a Args) -> Self {
        Self {
            initialism: args.initialism.as_deref(),
            validation_func: args.validation_func.as_deref(),
            validation_tag: args.validation_tag.as_deref(),
            generate_new_func: args.generate_new_func,
        }
    }
}

impl Settings {
    /// Loads settings for `args`.
    ///
    /// # Errors
    ///
    /// Returns [`GenpropError::ConfigNotFound`] when `--config` names a missing
    /// file and [`GenpropError::Config`] when a layer cannot be parsed or
    /// extracted.
    pub fn load(args: &Args) -> Result<Self, GenpropError> {
        let file = match &args.config {
            Some(path) if !path.is_file() => {
                return Err(GenpropError::ConfigNotFound(path.clone()));
            }
            Some(path) => path.as_path(),
            None => Utf8Path::new(DEFAULT_CONFIG_FILE),
        };
        debug!(config = %file, "loading configuration");

        let settings = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file_exact(file))
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Serialized::defaults(CliOverrides::from(args)))
            .extract()?;
        Ok(settings)
    }

    /// Converts the settings into the engine configuration.
    #[must_use]
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig::default()
            .with_initialisms(&self.initialism)
            .with_validation_func(self.validation_func.as_str())
            .with_validation_tag(self.validation_tag.as_str())
            .with_new_func(self.generate_new_func)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genprop::naming::NameTransformer;
    use rstest::rstest;

    #[rstest]
    fn defaults_match_engine_defaults() {
        assert_eq!(
            Settings::default().generator_config(),
            GeneratorConfig::default()
        );
    }

    #[rstest]
    fn settings_convert_field_by_field() {
        let settings = Settings {
            initialism: "http, db".to_owned(),
            validation_func: "check".to_owned(),
            validation_tag: "rule".to_owned(),
            generate_new_func: true,
        };
        let config = settings.generator_config();
        assert_eq!(config.names, NameTransformer::from_list("http,db"));
        assert_eq!(config.validation_func, "check");
        assert_eq!(config.validation_tag, "rule");
        assert!(config.generate_new_func);
        assert_eq!(config.property_tag, "property");
    }
}
