//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use milsym_domain::{sidc, UnitDefinition};
use milsym_generator::{AssetJob, AssetOutcome, OutcomeStatus, RunSummary};
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

/// JSON report for a whole run.
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    /// Assets written
    pub generated: usize,
    /// Assets skipped
    pub errors: usize,
    /// Written assets with a placeholder icon
    pub flagged: usize,
    /// Output directory
    pub output_dir: String,
    /// Per-asset results, in plan order
    pub assets: Vec<AssetReport<'a>>,
}

/// JSON entry for one asset.
#[derive(Debug, Serialize)]
pub struct AssetReport<'a> {
    /// Output file name
    pub file: &'a str,
    /// Query passed to the renderer
    pub query: &'a str,
    /// `ok`, `flagged` or `error`
    pub status: &'static str,
    /// Failure kind, for errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    /// Failure detail, for errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<&'a str>,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Banner printed before a text-mode run.
    pub fn banner(&self, renderer: &str) -> String {
        format!(
            "{}\nrenderer: {}\n{}",
            self.colorize("Company Commander - unit symbol SVG generation", "cyan"),
            renderer,
            "-".repeat(50)
        )
    }

    /// Progress line for one asset.
    pub fn outcome_line(&self, outcome: &AssetOutcome) -> String {
        match &outcome.status {
            OutcomeStatus::Generated { flagged: false } => {
                format!("  {} {}", self.colorize("OK  ", "green"), outcome.file_name)
            }
            OutcomeStatus::Generated { flagged: true } => {
                format!("  {} {}", self.colorize("Q(?)", "yellow"), outcome.file_name)
            }
            OutcomeStatus::Failed(failure) => format!(
                "  {} {} : {}",
                self.colorize("NG  ", "red"),
                outcome.file_name,
                failure.detail
            ),
        }
    }

    /// Closing lines after a text-mode run.
    pub fn summary(&self, summary: &RunSummary) -> String {
        let line = summary.summary();
        let line = if summary.has_errors() {
            self.colorize(&line, "yellow")
        } else {
            self.colorize(&line, "green")
        };
        format!("\n{}\nOutput: {}", line, summary.output_dir.display())
    }

    /// JSON report for a finished run.
    pub fn run_report(&self, summary: &RunSummary, outcomes: &[AssetOutcome]) -> Result<String> {
        let assets = outcomes
            .iter()
            .map(|o| match &o.status {
                OutcomeStatus::Generated { flagged } => AssetReport {
                    file: &o.file_name,
                    query: &o.query,
                    status: if *flagged { "flagged" } else { "ok" },
                    kind: None,
                    detail: None,
                },
                OutcomeStatus::Failed(failure) => AssetReport {
                    file: &o.file_name,
                    query: &o.query,
                    status: "error",
                    kind: Some(failure.kind.as_str()),
                    detail: Some(&failure.detail),
                },
            })
            .collect();

        let report = RunReport {
            generated: summary.generated,
            errors: summary.errors,
            flagged: summary.flagged,
            output_dir: summary.output_dir.display().to_string(),
            assets,
        };

        Ok(serde_json::to_string_pretty(&report)?)
    }

    /// Format the generation plan.
    pub fn format_plan(&self, jobs: &[AssetJob]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_plan_json(jobs),
            OutputFormat::Text => Ok(self.format_plan_table(jobs)),
        }
    }

    fn format_plan_json(&self, jobs: &[AssetJob]) -> Result<String> {
        let rows: Vec<serde_json::Value> = jobs
            .iter()
            .map(|j| {
                serde_json::json!({
                    "file": j.file_name(),
                    "unit_id": j.key.unit.id,
                    "affiliation": j.key.affiliation.key(),
                    "confidence": j.key.confidence.key(),
                    "query": j.query,
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&rows)?)
    }

    fn format_plan_table(&self, jobs: &[AssetJob]) -> String {
        if jobs.is_empty() {
            return self.colorize("Nothing selected.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "File", "Query", "Weight", "Category"]);

        for job in jobs {
            builder.push_record([
                job.index.to_string(),
                job.file_name(),
                job.query.clone(),
                job.key.unit.weight.to_string(),
                job.key.unit.category.to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format the unit catalog.
    pub fn format_catalog(&self, units: &[UnitDefinition]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let rows: Vec<serde_json::Value> = units
                    .iter()
                    .map(|u| {
                        serde_json::json!({
                            "id": u.id,
                            "label": u.label,
                            "friendly_name": u.friendly_name,
                            "hostile_name": u.hostile_name,
                            "weight": u.weight.as_str(),
                            "category": u.category.as_str(),
                            "sidc_template": u.sidc_template,
                            "symbol_set": sidc::symbol_set(u.sidc_template),
                            "entity": sidc::entity(u.sidc_template),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&rows)?)
            }
            OutputFormat::Text => {
                let mut builder = Builder::default();
                builder.push_record(["ID", "Label", "Friendly", "Hostile", "Weight", "Category"]);
                for u in units {
                    builder.push_record([
                        u.id,
                        u.label,
                        u.friendly_name,
                        u.hostile_name,
                        u.weight.as_str(),
                        u.category.as_str(),
                    ]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
