//! Unit module - hand-authored unit records

use crate::affiliation::Affiliation;
use crate::sidc;

/// Weight class of a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeightClass {
    /// Foot-mobile or lightly equipped
    Light,

    /// Wheeled or tracked carriers
    Medium,

    /// Main battle tanks and heavy guns
    Heavy,
}

impl WeightClass {
    /// Get the weight class name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightClass::Light => "light",
            WeightClass::Medium => "medium",
            WeightClass::Heavy => "heavy",
        }
    }

    /// Parse a weight class from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "light" => Some(WeightClass::Light),
            "medium" => Some(WeightClass::Medium),
            "heavy" => Some(WeightClass::Heavy),
            _ => None,
        }
    }
}

impl std::fmt::Display for WeightClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WeightClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid weight class: {}", s))
    }
}

/// Category tag of a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitCategory {
    /// Infantry and dismounted specialists
    Infantry,
    /// Tanks and armoured carriers
    Armor,
    /// Mortars, guns and missiles
    FireSupport,
    /// Reconnaissance assets
    Recon,
    /// Logistics and medical
    Support,
    /// Headquarters
    Command,
}

impl UnitCategory {
    /// Get the category tag as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitCategory::Infantry => "infantry",
            UnitCategory::Armor => "armor",
            UnitCategory::FireSupport => "fire_support",
            UnitCategory::Recon => "recon",
            UnitCategory::Support => "support",
            UnitCategory::Command => "command",
        }
    }

    /// Parse a category from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "infantry" => Some(UnitCategory::Infantry),
            "armor" => Some(UnitCategory::Armor),
            "fire_support" => Some(UnitCategory::FireSupport),
            "recon" => Some(UnitCategory::Recon),
            "support" => Some(UnitCategory::Support),
            "command" => Some(UnitCategory::Command),
            _ => None,
        }
    }
}

impl std::fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UnitCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid unit category: {}", s))
    }
}

/// An immutable unit record from the catalog
///
/// The friendly and hostile name fragments are natural-language queries
/// understood by the renderer (e.g. "friendly infantry", "enemy infantry").
/// The SIDC template is a 30-character APP-6E code with `X` in the
/// affiliation position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitDefinition {
    /// Unique identifier, used as the file name stem
    pub id: &'static str,

    /// Human-readable display label
    pub label: &'static str,

    /// Query fragment for the friendly affiliation
    pub friendly_name: &'static str,

    /// Query fragment for the hostile affiliation
    pub hostile_name: &'static str,

    /// Weight class
    pub weight: WeightClass,

    /// Category tag
    pub category: UnitCategory,

    /// SIDC template with the affiliation position left open
    pub sidc_template: &'static str,
}

impl UnitDefinition {
    /// Resolve the renderer query for an affiliation
    ///
    /// - friendly: the friendly fragment verbatim
    /// - hostile: the hostile fragment verbatim
    /// - unknown: the friendly fragment with one leading `friendly ` or
    ///   `enemy ` marker stripped, prefixed with `unknown `
    pub fn query_for(&self, affiliation: Affiliation) -> String {
        match affiliation {
            Affiliation::Friendly => self.friendly_name.to_string(),
            Affiliation::Hostile => self.hostile_name.to_string(),
            Affiliation::Unknown => unknown_query(self.friendly_name),
        }
    }

    /// Build the full SIDC for an affiliation
    pub fn sidc_for(&self, affiliation: Affiliation) -> String {
        sidc::with_affiliation(self.sidc_template, affiliation)
    }
}

/// Turn a friendly or hostile fragment into its `unknown` counterpart
pub fn unknown_query(fragment: &str) -> String {
    let stripped = fragment
        .strip_prefix("friendly ")
        .or_else(|| fragment.strip_prefix("enemy "))
        .unwrap_or(fragment);

    if stripped.starts_with("unknown ") {
        stripped.to_string()
    } else {
        format!("unknown {}", stripped)
    }
}
