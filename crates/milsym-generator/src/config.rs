//! Configuration for the generator

use milsym_domain::SymbolStyle;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default output directory, resolved against the current working directory
pub const DEFAULT_OUTPUT_DIR: &str = "assets/units/symbols";

/// Default tag on the first line of every metadata header
pub const DEFAULT_HEADER_TAG: &str = "python-military-symbols";

/// What the renderer receives as its query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryMode {
    /// Natural-language name resolved from the unit's name fragments
    #[default]
    Name,

    /// The unit's SIDC with the affiliation digit filled in
    Sidc,
}

/// What to do when an asset cannot be written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteFailurePolicy {
    /// Count it like a render failure and continue
    #[default]
    Count,

    /// Stop the run
    Abort,
}

/// Configuration for the Batch Asset Generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Directory that receives the generated files (created if absent)
    pub output_dir: PathBuf,

    /// Visual style passed to the renderer
    pub style: SymbolStyle,

    /// Let the renderer match name variants
    pub use_variants: bool,

    /// Tag on the first line of the metadata header
    pub header_tag: String,

    /// Query source
    pub query_mode: QueryMode,

    /// Substring that marks a placeholder ("?") icon in rendered markup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unresolved_marker: Option<String>,

    /// Write failure handling
    pub write_failure: WriteFailurePolicy,
}

impl Default for GeneratorConfig {
    /// Name queries, medium style, variant matching on
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            style: SymbolStyle::Medium,
            use_variants: true,
            header_tag: DEFAULT_HEADER_TAG.to_string(),
            query_mode: QueryMode::Name,
            unresolved_marker: None,
            write_failure: WriteFailurePolicy::Count,
        }
    }
}

impl GeneratorConfig {
    /// Preset for SIDC-driven renderers such as milsymbol
    ///
    /// milsymbol draws an undefined icon with a path containing the
    /// coordinate `94.8206`; such assets are flagged.
    pub fn milsymbol() -> Self {
        Self {
            header_tag: "milsymbol APP-6E".to_string(),
            query_mode: QueryMode::Sidc,
            unresolved_marker: Some("94.8206".to_string()),
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.output_dir.as_os_str().is_empty() {
            return Err("output_dir must not be empty".to_string());
        }
        if self.header_tag.contains("--") {
            return Err("header_tag must not contain '--' (it ends up inside an XML comment)".to_string());
        }
        if matches!(&self.unresolved_marker, Some(m) if m.is_empty()) {
            return Err("unresolved_marker must not be empty when set".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
