//! Precedence of defaults, `.genprop.toml`, `GENPROP_` variables and flags.

use anyhow::Result;
use camino::Utf8PathBuf;
use genprop_cli::cli::Args;
use genprop_cli::config::Settings;
use genprop_cli::error::GenpropError;
use rstest::rstest;
use test_helpers::figment::with_jail;

fn load(args: &Args) -> figment::error::Result<Settings> {
    Settings::load(args).map_err(|err| figment::Error::from(err.to_string()))
}

#[rstest]
fn defaults_apply_without_any_layer() -> Result<()> {
    let settings = with_jail(|jail| {
        jail.clear_env();
        load(&Args::default())
    })?;
    anyhow::ensure!(settings == Settings::default());
    Ok(())
}

#[rstest]
fn file_values_replace_defaults() -> Result<()> {
    let settings = with_jail(|jail| {
        jail.clear_env();
        jail.create_file(
            ".genprop.toml",
            "initialism = \"http,sql\"\ngenerate_new_func = true\n",
        )?;
        load(&Args::default())
    })?;
    anyhow::ensure!(settings.initialism == "http,sql");
    anyhow::ensure!(settings.generate_new_func);
    anyhow::ensure!(settings.validation_func == "validateFieldValue");
    Ok(())
}

#[rstest]
fn parent_directory_config_is_ignored() -> Result<()> {
    let settings = with_jail(|jail| {
        jail.clear_env();
        jail.create_file(".genprop.toml", "validation_func = \"fromParent\"\n")?;
        jail.create_dir("sub")?;
        jail.change_dir("sub")?;
        load(&Args::default())
    })?;
    anyhow::ensure!(
        settings.validation_func == "validateFieldValue",
        "picked up {}",
        settings.validation_func
    );
    Ok(())
}

#[rstest]
fn environment_overrides_file() -> Result<()> {
    let settings = with_jail(|jail| {
        jail.clear_env();
        jail.create_file(".genprop.toml", "validation_tag = \"file\"\n")?;
        jail.set_env("GENPROP_VALIDATION_TAG", "env");
        jail.set_env("GENPROP_GENERATE_NEW_FUNC", "true");
        load(&Args::default())
    })?;
    anyhow::ensure!(settings.validation_tag == "env");
    anyhow::ensure!(settings.generate_new_func);
    Ok(())
}

#[rstest]
#[case::explicit_false(Some(false), false)]
#[case::explicit_true(Some(true), true)]
#[case::absent(None, true)]
fn supplied_flags_override_environment(
    #[case] flag: Option<bool>,
    #[case] expected: bool,
) -> Result<()> {
    let args = Args {
        initialism: Some("db".to_owned()),
        generate_new_func: flag,
        ..Args::default()
    };
    let settings = with_jail(|jail| {
        jail.clear_env();
        jail.set_env("GENPROP_INITIALISM", "env");
        jail.set_env("GENPROP_GENERATE_NEW_FUNC", "true");
        load(&args)
    })?;
    anyhow::ensure!(settings.initialism == "db");
    anyhow::ensure!(settings.generate_new_func == expected);
    Ok(())
}

#[rstest]
fn explicit_config_path_is_read() -> Result<()> {
    let settings = with_jail(|jail| {
        jail.clear_env();
        jail.create_file(".genprop.toml", "validation_func = \"ignored\"\n")?;
        jail.create_file("custom.toml", "validation_func = \"check\"\n")?;
        load(&Args {
            config: Some(Utf8PathBuf::from("custom.toml")),
            ..Args::default()
        })
    })?;
    anyhow::ensure!(settings.validation_func == "check");
    Ok(())
}

#[rstest]
fn missing_explicit_config_is_an_error() -> Result<()> {
    let outcome = with_jail(|jail| {
        jail.clear_env();
        let result = Settings::load(&Args {
            config: Some(Utf8PathBuf::from("absent.toml")),
            ..Args::default()
        });
        Ok(matches!(result, Err(GenpropError::ConfigNotFound(ref path)) if path == "absent.toml"))
    })?;
    anyhow::ensure!(outcome, "expected ConfigNotFound for absent.toml");
    Ok(())
}

#[rstest]
fn mistyped_values_are_rejected() -> Result<()> {
    let outcome = with_jail(|jail| {
        jail.clear_env();
        jail.create_file(".genprop.toml", "generate_new_func = \"often\"\n")?;
        Ok(matches!(
            Settings::load(&Args::default()),
            Err(GenpropError::Config(_))
        ))
    })?;
    anyhow::ensure!(outcome, "expected a configuration error");
    Ok(())
}
