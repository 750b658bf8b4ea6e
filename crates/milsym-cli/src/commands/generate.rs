//! Generate command implementation.

use crate::cli::{GenerateArgs, PresetArg};
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::output::Formatter;
use milsym_domain::traits::SymbolRenderer;
use milsym_generator::{BatchGenerator, GeneratorConfig, RunSummary};
use milsym_render::CommandRenderer;
use std::io::{self, Write};
use tracing::debug;

/// Execute the generate command.
///
/// Command-line flags take precedence over the configuration file. The
/// returned summary carries the error count; `config.settings.strict` tells
/// the caller whether that count should fail the process.
pub fn execute_generate(
    args: GenerateArgs,
    config: &mut Config,
    formatter: &Formatter,
) -> Result<RunSummary> {
    apply_overrides(&args, config)?;

    let renderer = CommandRenderer::new(config.renderer.clone());
    let generator = BatchGenerator::new(renderer, config.generator.clone())
        .with_filter(args.selection.to_filter())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_generate(&generator, formatter, &mut out)
}

/// Fold command-line flags into the loaded configuration and re-validate.
pub fn apply_overrides(args: &GenerateArgs, config: &mut Config) -> Result<()> {
    if let Some(preset) = args.preset {
        apply_preset(preset, &mut config.generator);
    }
    if let Some(dir) = &args.output_dir {
        config.generator.output_dir = dir.clone();
    }
    if let Some(style) = args.style {
        config.generator.style = style.into();
    }
    if let Some(mode) = args.query_mode {
        config.generator.query_mode = mode.into();
    }
    if let Some(program) = &args.program {
        config.renderer.program = program.clone();
    }
    config.settings.strict |= args.strict;

    debug!(?config, "Effective configuration");
    config.validate()
}

/// Take the renderer-specific fields of a preset, keeping paths and style.
fn apply_preset(preset: PresetArg, generator: &mut GeneratorConfig) {
    let base = match preset {
        PresetArg::Milsymbol => GeneratorConfig::milsymbol(),
    };
    generator.header_tag = base.header_tag;
    generator.query_mode = base.query_mode;
    generator.unresolved_marker = base.unresolved_marker;
}

/// Run a generator and report its progress to `out`.
///
/// Text output streams one line per asset; JSON output is a single report
/// written once the run completes.
pub fn run_generate<R, W>(
    generator: &BatchGenerator<R>,
    formatter: &Formatter,
    out: &mut W,
) -> Result<RunSummary>
where
    R: SymbolRenderer,
    R::Error: std::fmt::Display,
    W: Write,
{
    match formatter.format() {
        OutputFormat::Text => {
            writeln!(out, "{}", formatter.banner(generator.renderer().name()))?;

            let mut write_error: Option<io::Error> = None;
            let summary = generator.run(|outcome| {
                if write_error.is_none() {
                    if let Err(e) = writeln!(out, "{}", formatter.outcome_line(outcome)) {
                        write_error = Some(e);
                    }
                }
            })?;
            if let Some(e) = write_error {
                return Err(e.into());
            }

            writeln!(out, "{}", formatter.summary(&summary))?;
            Ok(summary)
        }
        OutputFormat::Json => {
            let mut outcomes = Vec::new();
            let summary = generator.run(|outcome| outcomes.push(outcome.clone()))?;
            writeln!(out, "{}", formatter.run_report(&summary, &outcomes)?)?;
            Ok(summary)
        }
    }
}
