//! CLI entrypoint for `genprop`.

use std::io;

use genprop_cli::app;
use genprop_cli::cli::Args;
use genprop_cli::telemetry;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    telemetry::init()?;
    let args = Args::parse_go_style(std::env::args_os());
    app::run(&args, &mut io::stdout().lock(), &mut io::stderr().lock())
        .map_err(color_eyre::eyre::Report::from)
}
