//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};
use milsym_domain::{Affiliation, Confidence, SymbolStyle};
use milsym_generator::{QueryMode, UnitFilter};
use std::path::PathBuf;

/// milsym - Generate military unit symbol SVGs for every affiliation and confidence.
#[derive(Debug, Parser)]
#[command(name = "milsym")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "MILSYM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Progress lines (default)
    Text,
    /// JSON report
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render and write every selected symbol (default)
    Generate(GenerateArgs),

    /// Show the generation plan without rendering
    List(ListArgs),

    /// Show the unit catalog
    Catalog,
}

/// Selection of units and variants.
#[derive(Debug, Clone, Default, Args)]
pub struct SelectionArgs {
    /// Only these unit ids (repeatable)
    #[arg(short, long = "unit")]
    pub units: Vec<String>,

    /// Only these affiliations (repeatable)
    #[arg(short, long = "affiliation", value_enum)]
    pub affiliations: Vec<AffiliationArg>,

    /// Only these confidence variants (repeatable)
    #[arg(long = "confidence", value_enum)]
    pub confidences: Vec<ConfidenceArg>,
}

/// Arguments for the generate command.
#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Output directory (created if absent)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Symbol style
    #[arg(short, long, value_enum)]
    pub style: Option<StyleArg>,

    /// Query source passed to the renderer
    #[arg(short, long, value_enum)]
    pub query_mode: Option<QueryModeArg>,

    /// Generator preset, applied before the other flags
    #[arg(long, value_enum)]
    pub preset: Option<PresetArg>,

    /// Renderer program (overrides the config file)
    #[arg(long)]
    pub program: Option<String>,

    /// Exit with status 2 if any symbol failed
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the list command.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Query source to display
    #[arg(short, long, value_enum)]
    pub query_mode: Option<QueryModeArg>,
}

/// Affiliation argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum AffiliationArg {
    /// Own forces
    Friendly,
    /// Enemy forces
    Hostile,
    /// Unidentified
    Unknown,
}

/// Confidence argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ConfidenceArg {
    /// Confirmed contact
    Conf,
    /// Suspected contact
    Sus,
}

/// Style argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum StyleArg {
    /// Pale fill
    Light,
    /// Filled frame with outline
    Medium,
    /// Saturated fill
    Dark,
    /// Outline only
    Unfilled,
}

/// Generator preset argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum PresetArg {
    /// SIDC queries, milsymbol header tag, placeholder-icon detection
    Milsymbol,
}

/// Query mode argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum QueryModeArg {
    /// Natural-language unit name
    Name,
    /// Symbol identification code
    Sidc,
}

impl SelectionArgs {
    /// Convert to a generator filter.
    pub fn to_filter(&self) -> UnitFilter {
        UnitFilter {
            units: self.units.clone(),
            affiliations: self.affiliations.iter().map(|&a| a.into()).collect(),
            confidences: self.confidences.iter().map(|&c| c.into()).collect(),
        }
    }
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => crate::config::OutputFormat::Text,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

impl From<AffiliationArg> for Affiliation {
    fn from(arg: AffiliationArg) -> Self {
        match arg {
            AffiliationArg::Friendly => Affiliation::Friendly,
            AffiliationArg::Hostile => Affiliation::Hostile,
            AffiliationArg::Unknown => Affiliation::Unknown,
        }
    }
}

impl From<ConfidenceArg> for Confidence {
    fn from(arg: ConfidenceArg) -> Self {
        match arg {
            ConfidenceArg::Conf => Confidence::Confirmed,
            ConfidenceArg::Sus => Confidence::Suspected,
        }
    }
}

impl From<StyleArg> for SymbolStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Light => SymbolStyle::Light,
            StyleArg::Medium => SymbolStyle::Medium,
            StyleArg::Dark => SymbolStyle::Dark,
            StyleArg::Unfilled => SymbolStyle::Unfilled,
        }
    }
}

impl From<QueryModeArg> for QueryMode {
    fn from(arg: QueryModeArg) -> Self {
        match arg {
            QueryModeArg::Name => QueryMode::Name,
            QueryModeArg::Sidc => QueryMode::Sidc,
        }
    }
}
