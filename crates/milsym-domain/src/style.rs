//! Render style and request types

use crate::RenderOverrides;
use serde::{Deserialize, Serialize};

/// Visual style passed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolStyle {
    /// Pale fill
    Light,

    /// Filled frame with outline
    #[default]
    Medium,

    /// Saturated fill
    Dark,

    /// Outline only
    Unfilled,
}

impl SymbolStyle {
    /// Style token understood by the renderer
    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolStyle::Light => "light",
            SymbolStyle::Medium => "medium",
            SymbolStyle::Dark => "dark",
            SymbolStyle::Unfilled => "unfilled",
        }
    }

    /// Parse a style token
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "light" => Some(SymbolStyle::Light),
            "medium" => Some(SymbolStyle::Medium),
            "dark" => Some(SymbolStyle::Dark),
            "unfilled" => Some(SymbolStyle::Unfilled),
            _ => None,
        }
    }
}

impl std::fmt::Display for SymbolStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SymbolStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid symbol style: {}", s))
    }
}

/// A single call to the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    /// Natural-language unit description or symbol code
    pub query: String,

    /// Visual style
    pub style: SymbolStyle,

    /// Allow the renderer to match name variants
    pub use_variants: bool,

    /// Overrides from the confidence variant
    pub overrides: Option<RenderOverrides>,
}

impl RenderRequest {
    /// Create a request with no overrides
    pub fn new(query: impl Into<String>, style: SymbolStyle, use_variants: bool) -> Self {
        Self {
            query: query.into(),
            style,
            use_variants,
            overrides: None,
        }
    }

    /// Attach render overrides
    pub fn with_overrides(mut self, overrides: Option<RenderOverrides>) -> Self {
        self.overrides = overrides;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        assert_eq!(SymbolStyle::default(), SymbolStyle::Medium);
    }

    #[test]
    fn test_style_parsing() {
        assert_eq!("Dark".parse::<SymbolStyle>(), Ok(SymbolStyle::Dark));
        assert!("neon".parse::<SymbolStyle>().is_err());
    }

    #[test]
    fn test_request_builder() {
        let request = RenderRequest::new("friendly armor", SymbolStyle::Medium, true);
        assert!(request.overrides.is_none());
        assert_eq!(request.query, "friendly armor");
    }
}
