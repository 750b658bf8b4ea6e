//! Confidence module - how certain the contact report is

use crate::markup;
use serde::{Deserialize, Serialize};

/// Opacity applied to suspected contacts
pub const SUSPECTED_OPACITY: f64 = 0.55;

/// Confidence variant of a symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Positively identified contact, drawn as rendered
    #[serde(alias = "conf")]
    Confirmed,

    /// Suspected contact, drawn semi-transparent
    #[serde(alias = "sus")]
    Suspected,
}

/// Optional render overrides attached to a confidence variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOverrides {
    /// Symbology standard to request (e.g. "2525")
    pub standard: &'static str,

    /// Operational status to request (e.g. "anticipated")
    pub status: &'static str,
}

impl Confidence {
    /// All confidence variants in generation order
    pub const ALL: [Confidence; 2] = [Confidence::Confirmed, Confidence::Suspected];

    /// Key used in file names and metadata
    pub fn key(&self) -> &'static str {
        match self {
            Confidence::Confirmed => "conf",
            Confidence::Suspected => "sus",
        }
    }

    /// Parse a confidence from its key or full name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "conf" | "confirmed" => Some(Confidence::Confirmed),
            "sus" | "suspected" => Some(Confidence::Suspected),
            _ => None,
        }
    }

    /// Render overrides for this variant, if any
    ///
    /// Suspected contacts ask for a dashed (anticipated) frame when the
    /// renderer supports it.
    pub fn overrides(&self) -> Option<RenderOverrides> {
        match self {
            Confidence::Confirmed => None,
            Confidence::Suspected => Some(RenderOverrides {
                standard: "2525",
                status: "anticipated",
            }),
        }
    }

    /// Apply the post-render transform for this variant
    ///
    /// Returns `None` when the transform needs a root `<svg>` element and
    /// the markup has none.
    pub fn post_process(&self, markup: &str) -> Option<String> {
        match self {
            Confidence::Confirmed => Some(markup.to_string()),
            Confidence::Suspected => markup::inject_opacity(markup, SUSPECTED_OPACITY),
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for Confidence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid confidence: {}", s))
    }
}
