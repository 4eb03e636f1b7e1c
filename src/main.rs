//! hexlist CLI - address-annotated listing of a firmware text dump
//!
//! Usage: hexlist [INPUT] [--json] [--config FILE] [-v...]

use std::io::{self, BufWriter};
use std::path::Path;

use anyhow::Result;
use clap::Parser;

use hexlist::logging::{init_logging, LogConfig};
use hexlist::{AnnotateOptions, AnnotateUseCase, Config, ConfigWarning, LocalFs, OutputFormat};

mod cli;
mod ui;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(error) = init_logging(&LogConfig::from_verbosity(cli.verbose)) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let json = cli.json;
    if let Err(err) = run(&cli) {
        if ui::error::is_broken_pipe(&err) {
            return;
        }
        ui::error::print_error(&err, json);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let (config, warnings) = load_config(cli.config.as_deref())?;
    ui::output::print_config_warnings(&warnings);

    let options = resolve_options(cli, &config);
    tracing::debug!(input = %options.input.display(), format = %options.format, "resolved options");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summary = AnnotateUseCase::new(LocalFs::new()).execute(&options, &mut out)?;

    if let Some(last) = summary.last_address {
        tracing::debug!(last_address = %last, "last line address");
    }
    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<(Config, Vec<ConfigWarning>)> {
    match explicit {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)?;
            Ok((config.with_env_overrides(), warnings))
        }
        None => Ok(Config::discover(Path::new("."))?),
    }
}

/// CLI flags win over config and environment.
fn resolve_options(cli: &Cli, config: &Config) -> AnnotateOptions {
    let input = cli.input.clone().unwrap_or_else(|| config.input.clone());
    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output.format
    };
    AnnotateOptions::new(input).with_format(format)
}
