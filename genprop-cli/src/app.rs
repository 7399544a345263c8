//! The `genprop` run pipeline: read, parse, generate, render, write.

use std::io::Write;

use camino::Utf8Path;
use clap::CommandFactory;
use genprop::{Generator, GeneratorConfig};
use tracing::{debug, instrument};

use crate::cli::Args;
use crate::config::Settings;
use crate::error::GenpropError;
use crate::fs_helpers::read_source;
use crate::meta::version_line;
use crate::parser::parse_source;
use crate::render::render_file;

/// Executes one invocation, writing generated code to `out` and usage text to
/// `err`.
///
/// Output is rendered completely before anything is written, so a failing run
/// leaves `out` untouched.
///
/// # Errors
///
/// Returns [`GenpropError`] for a wrong number of file arguments, invalid
/// configuration, or a failure in any pipeline stage.
pub fn run(args: &Args, out: &mut impl Write, err: &mut impl Write) -> Result<(), GenpropError> {
    if args.version {
        writeln!(out, "{}", version_line()).map_err(GenpropError::Write)?;
        return Ok(());
    }
    let path = input_file(args, err)?;
    let settings = Settings::load(args)?;
    let generated = generate_file(path, &settings.generator_config())?;
    out.write_all(generated.as_bytes())
        .and_then(|()| out.flush())
        .map_err(GenpropError::Write)
}

fn input_file<'a>(args: &'a Args, err: &mut impl Write) -> Result<&'a Utf8Path, GenpropError> {
    match args.files.as_slice() {
        [path] => Ok(path.as_path()),
        files => {
            let usage = Args::command().render_help();
            write!(err, "{usage}").map_err(GenpropError::Write)?;
            Err(if files.is_empty() {
                GenpropError::MissingFile
            } else {
                GenpropError::TooManyFiles
            })
        }
    }
}

/// Reads the Go file at `path` and returns the generated source.
///
/// # Errors
///
/// Returns [`GenpropError::Read`], [`GenpropError::Parse`] or
/// [`GenpropError::Generate`] for the failing stage.
pub fn generate_file(path: &Utf8Path, config: &GeneratorConfig) -> Result<String, GenpropError> {
    let source = read_source(path)?;
    render_source(path, &source, config)
}

/// Generates code for `source`; `path` only labels parse errors.
///
/// # Errors
///
/// Returns [`GenpropError::Parse`] or [`GenpropError::Generate`].
#[instrument(level = "debug", skip(source, config))]
pub fn render_source(
    path: &Utf8Path,
    source: &str,
    config: &GeneratorConfig,
) -> Result<String, GenpropError> {
    let file = parse_source(source).map_err(|err| GenpropError::Parse {
        path: path.to_path_buf(),
        source: err,
    })?;
    debug!(package = %file.package, decls = file.decls.len(), "parsed source");
    let decls = Generator::new(config.clone()).generate(&file)?;
    debug!(decls = decls.len(), "generated declarations");
    Ok(render_file(&file.package, &decls))
}
