//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use milsym_generator::GeneratorConfig;
use milsym_render::CommandRendererConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration.
///
/// Every section is optional; an absent file means all defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Generator settings
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Renderer program settings
    #[serde(default)]
    pub renderer: CommandRendererConfig,

    /// Presentation settings
    #[serde(default)]
    pub settings: Settings,
}

/// Presentation and exit settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Exit non-zero when any asset failed
    #[serde(default)]
    pub strict: bool,
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Progress lines and a summary
    #[default]
    Text,
    /// One JSON report at the end
    Json,
}

impl Config {
    /// Load configuration from a TOML file, or defaults when no path is given.
    ///
    /// A path that was given explicitly must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let contents = fs::read_to_string(path).map_err(|e| {
                    CliError::Config(format!("Cannot read {}: {}", path.display(), e))
                })?;
                Self::from_toml(&contents)
            }
            None => Ok(Self::default()),
        }
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        self.generator
            .validate()
            .map_err(|e| CliError::Config(format!("[generator] {}", e)))?;
        self.renderer
            .validate()
            .map_err(|e| CliError::Config(format!("[renderer] {}", e)))?;
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Text,
            strict: false,
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use milsym_domain::SymbolStyle;
    use milsym_generator::QueryMode;
    use std::path::PathBuf;

    #[test]
    fn test_default_config() {
        let config = Config::load(None).unwrap();
        assert!(config.settings.color);
        assert!(!config.settings.strict);
        assert_eq!(config.settings.format, OutputFormat::Text);
        assert_eq!(config.renderer.program, "python3");
    }

    #[test]
    fn test_sections_from_toml() {
        let config = Config::from_toml(
            r#"
            [generator]
            output_dir = "out/symbols"
            style = "light"
            query_mode = "sidc"

            [renderer]
            program = "node"
            args = ["render.mjs", "{query}"]

            [settings]
            strict = true
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.generator.output_dir, PathBuf::from("out/symbols"));
        assert_eq!(config.generator.style, SymbolStyle::Light);
        assert_eq!(config.generator.query_mode, QueryMode::Sidc);
        assert!(config.generator.use_variants);
        assert_eq!(config.renderer.program, "node");
        assert!(config.settings.strict);
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_section_is_rejected() {
        let result = Config::from_toml(
            r#"
            [renderer]
            args = ["no placeholder"]
            "#,
        );
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.starts_with("[renderer]")));
    }

    #[test]
    fn test_missing_explicit_file() {
        let result = Config::load(Some(Path::new("/nonexistent/milsym.toml")));
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
