//! milsym - Render the unit symbol catalog to SVG files.

use clap::Parser;
use milsym_cli::cli::GenerateArgs;
use milsym_cli::commands;
use milsym_cli::logging::init_logging;
use milsym_cli::{Cli, Command, Config, Formatter};
use tracing::warn;

/// Exit status when symbols failed under strict mode
const EXIT_ASSET_ERRORS: i32 = 2;

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run() -> milsym_cli::Result<i32> {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load(cli.config.as_deref())?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        None => generate(GenerateArgs::default(), &mut config, &formatter),
        Some(Command::Generate(args)) => generate(args, &mut config, &formatter),
        Some(Command::List(args)) => {
            commands::execute_list(args, &config, &formatter)?;
            Ok(0)
        }
        Some(Command::Catalog) => {
            commands::execute_catalog(&formatter)?;
            Ok(0)
        }
    }
}

fn generate(args: GenerateArgs, config: &mut Config, formatter: &Formatter) -> milsym_cli::Result<i32> {
    let summary = commands::execute_generate(args, config, formatter)?;

    if config.settings.strict && summary.has_errors() {
        warn!("{} symbol(s) failed in strict mode", summary.errors);
        return Ok(EXIT_ASSET_ERRORS);
    }
    Ok(0)
}
