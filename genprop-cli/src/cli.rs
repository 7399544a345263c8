//! Command-line interface definitions for `genprop`.

use std::ffi::OsString;

use camino::Utf8PathBuf;
use clap::Parser;

/// Parsed CLI arguments for `genprop`.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "genprop")]
#[command(
    about = "Generate getter and setter methods for private Go struct fields based on struct tags"
)]
#[command(disable_version_flag = true)]
pub struct Args {
    /// Go source file declaring the annotated structs.
    #[arg(value_name = "FILE")]
    pub files: Vec<Utf8PathBuf>,
    /// Comma-separated names rendered fully upper-case in method names.
    #[arg(long, value_name = "LIST")]
    pub initialism: Option<String>,
    /// Function called by validating setters.
    #[arg(long, value_name = "NAME")]
    pub validation_func: Option<String>,
    /// Struct tag key holding a field's validation rule.
    #[arg(long, value_name = "NAME")]
    pub validation_tag: Option<String>,
    /// Generate a `New<Type>` constructor for every struct.
    #[arg(
        long,
        visible_alias = "new-func",
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub generate_new_func: Option<bool>,
    /// TOML configuration file (defaults to `.genprop.toml` when present).
    #[arg(long, value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,
    /// Show version information.
    #[arg(long)]
    pub version: bool,
}

impl Args {
    /// Parses `args` after accepting Go-style single-dash long flags.
    ///
    /// Exits the process with clap's diagnostics on invalid input.
    #[must_use]
    pub fn parse_go_style<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(normalise_go_style_flags(args))
    }
}

/// Rewrites `-flag` and `-flag=value` to their `--` form.
///
/// The program name, single-letter short flags, values and anything after a
/// literal `--` are left untouched.
///
/// # Examples
///
/// ```
/// use genprop_cli::cli::normalise_go_style_flags;
///
/// let args = normalise_go_style_flags(["genprop", "-version", "-h", "user.go"]);
/// assert_eq!(args, ["genprop", "--version", "-h", "user.go"]);
/// ```
#[must_use]
pub fn normalise_go_style_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .enumerate()
        .map(|(index, raw)| {
            let arg: OsString = raw.into();
            if index == 0 || passthrough {
                return arg;
            }
            if arg == "--" {
                passthrough = true;
                return arg;
            }
            match arg.to_str() {
                Some(text) if is_go_style_long_flag(text) => OsString::from(format!("-{text}")),
                _ => arg,
            }
        })
        .collect()
}

fn is_go_style_long_flag(arg: &str) -> bool {
    let Some(flag) = arg.strip_prefix('-') else {
        return false;
    };
    let name = flag.split_once('=').map_or(flag, |(key, _)| key);
    !name.starts_with('-') && name.len() > 1 && name.starts_with(|c: char| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Args {
        Args::parse_go_style(args.iter().copied())
    }

    #[rstest]
    #[case(&["genprop", "-initialism=id,http", "a.go"], &["genprop", "--initialism=id,http", "a.go"])]
    #[case(&["genprop", "--version"], &["genprop", "--version"])]
    #[case(&["genprop", "-h"], &["genprop", "-h"])]
    #[case(&["genprop", "--", "-weird.go"], &["genprop", "--", "-weird.go"])]
    #[case(&["-genprop", "-"], &["-genprop", "-"])]
    fn rewrites_only_single_dash_long_flags(#[case] input: &[&str], #[case] expected: &[&str]) {
        assert_eq!(normalise_go_style_flags(input.iter().copied()), expected);
    }

    #[rstest]
    fn unspecified_options_stay_unset() {
        let args = parse(&["genprop", "user.go"]);
        assert_eq!(args.files, [Utf8PathBuf::from("user.go")]);
        assert!(args.initialism.is_none());
        assert!(args.generate_new_func.is_none());
        assert!(!args.version);
    }

    #[rstest]
    #[case(&["genprop", "-generate-new-func", "a.go"], Some(true))]
    #[case(&["genprop", "--new-func", "a.go"], Some(true))]
    #[case(&["genprop", "-generate-new-func=false", "a.go"], Some(false))]
    fn constructor_flag_accepts_go_boolean_forms(
        #[case] input: &[&str],
        #[case] expected: Option<bool>,
    ) {
        let args = parse(input);
        assert_eq!(args.generate_new_func, expected);
        assert_eq!(args.files, [Utf8PathBuf::from("a.go")]);
    }

    #[rstest]
    fn go_style_value_flags_are_parsed() {
        let args = parse(&[
            "genprop",
            "-validation-func=check",
            "-validation-tag",
            "rule",
            "a.go",
        ]);
        assert_eq!(args.validation_func.as_deref(), Some("check"));
        assert_eq!(args.validation_tag.as_deref(), Some("rule"));
    }
}
