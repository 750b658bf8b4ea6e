//! External Command Renderer
//!
//! Renders symbols by running an external program once per request and
//! reading SVG markup from its standard output.
//!
//! # Protocol
//!
//! - Arguments are taken from the configuration with the placeholders
//!   `{query}`, `{style}` and `{use_variants}` substituted per request
//! - Exit status 0 and SVG text on stdout means success
//! - A non-zero exit is a render failure; the last stderr line is the detail
//! - Empty stdout means the query resolved to no symbol
//!
//! The default configuration drives the `military_symbol` Python package
//! through a one-line helper, so `python3` with that package installed is
//! the only runtime requirement.
//!
//! # Examples
//!
//! ```no_run
//! use milsym_render::{CommandRenderer, CommandRendererConfig};
//! use milsym_domain::traits::SymbolRenderer;
//! use milsym_domain::{RenderRequest, SymbolStyle};
//!
//! let renderer = CommandRenderer::new(CommandRendererConfig::default());
//! let request = RenderRequest::new("friendly infantry", SymbolStyle::Medium, true);
//! let svg = renderer.render(&request)?;
//! # Ok::<(), milsym_render::RenderError>(())
//! ```

use crate::RenderError;
use milsym_domain::traits::SymbolRenderer;
use milsym_domain::RenderRequest;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::process::{Command, Stdio};
use tracing::debug;

/// Default renderer program
pub const DEFAULT_PROGRAM: &str = "python3";

/// Helper passed to `python3 -c`; argv is query, style, use_variants
pub const PYTHON_HELPER: &str = "import sys, military_symbol; \
sys.stdout.write(military_symbol.get_symbol_svg_string_from_name(\
sys.argv[1], style=sys.argv[2], use_variants=sys.argv[3] == 'true'))";

/// Configuration for [`CommandRenderer`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandRendererConfig {
    /// Program to execute
    pub program: String,

    /// Arguments, with `{query}`, `{style}` and `{use_variants}` placeholders
    pub args: Vec<String>,

    /// Extra environment variables (e.g. `PYTHONPATH` for a source checkout)
    pub env: BTreeMap<String, String>,

    /// Append `--standard` / `--status` when a request carries overrides
    pub forward_overrides: bool,
}

impl Default for CommandRendererConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            args: vec![
                "-c".to_string(),
                PYTHON_HELPER.to_string(),
                "{query}".to_string(),
                "{style}".to_string(),
                "{use_variants}".to_string(),
            ],
            env: BTreeMap::new(),
            forward_overrides: false,
        }
    }
}

impl CommandRendererConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.program.trim().is_empty() {
            return Err("renderer program must not be empty".to_string());
        }
        if !self.args.iter().any(|a| a.contains("{query}")) {
            return Err("renderer args must contain a {query} placeholder".to_string());
        }
        Ok(())
    }

    /// Expand the argument list for a request
    pub fn expand_args(&self, request: &RenderRequest) -> Vec<String> {
        let use_variants = if request.use_variants { "true" } else { "false" };

        let values = [
            ("{query}", request.query.as_str()),
            ("{style}", request.style.as_str()),
            ("{use_variants}", use_variants),
        ];

        let mut args: Vec<String> = self
            .args
            .iter()
            .map(|arg| substitute(arg, &values))
            .collect();

        if self.forward_overrides {
            if let Some(overrides) = request.overrides {
                args.extend([
                    "--standard".to_string(),
                    overrides.standard.to_string(),
                    "--status".to_string(),
                    overrides.status.to_string(),
                ]);
            }
        }

        args
    }
}

/// Renderer backed by an external program
pub struct CommandRenderer {
    config: CommandRendererConfig,
    name: String,
}

impl CommandRenderer {
    /// Create a new command renderer
    pub fn new(config: CommandRendererConfig) -> Self {
        let name = format!("command:{}", config.program);
        Self { config, name }
    }

    /// Create a command renderer with the default Python helper
    pub fn default_python() -> Self {
        Self::new(CommandRendererConfig::default())
    }

    /// Get the configuration
    pub fn config(&self) -> &CommandRendererConfig {
        &self.config
    }
}

impl SymbolRenderer for CommandRenderer {
    type Error = RenderError;

    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self, request: &RenderRequest) -> Result<String, Self::Error> {
        let args = self.config.expand_args(request);
        debug!(program = %self.config.program, query = %request.query, "Spawning renderer");

        let output = Command::new(&self.config.program)
            .args(&args)
            .envs(&self.config.env)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| RenderError::Launch(format!("{}: {}", self.config.program, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RenderError::Failed {
                status: output.status.to_string(),
                detail: last_line(&stderr).unwrap_or("no diagnostic output").to_string(),
            });
        }

        let markup = String::from_utf8(output.stdout)
            .map_err(|e| RenderError::InvalidOutput(format!("output is not UTF-8: {}", e)))?;

        if markup.trim().is_empty() {
            return Err(RenderError::NoSymbol(request.query.clone()));
        }
        if !markup.contains("<svg") {
            return Err(RenderError::InvalidOutput(format!(
                "no <svg> element in {} bytes of output",
                markup.len()
            )));
        }

        Ok(markup)
    }
}

/// Replace placeholders in one left-to-right pass
///
/// Substituted text is never scanned again, so a query that itself contains
/// `{style}` is passed through unchanged.
fn substitute(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while !rest.is_empty() {
        match values.iter().find(|(token, _)| rest.starts_with(token)) {
            Some((token, value)) => {
                out.push_str(value);
                rest = &rest[token.len()..];
            }
            None => {
                let mut chars = rest.chars();
                if let Some(c) = chars.next() {
                    out.push(c);
                }
                rest = chars.as_str();
            }
        }
    }

    out
}

/// Last non-empty line of a diagnostic stream
fn last_line(text: &str) -> Option<&str> {
    text.lines().rev().map(str::trim).find(|line| !line.is_empty())
}
