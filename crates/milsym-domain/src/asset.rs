//! Asset module - naming and metadata for generated files

use crate::{Affiliation, Confidence, UnitCategory, UnitDefinition, WeightClass};

/// File extension of every generated asset
pub const ASSET_EXTENSION: &str = "svg";

/// One (unit, affiliation, confidence) triple
///
/// Unit ids are unique and the variant keys are fixed enumerations, so the
/// file name is unique per key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetKey {
    /// Unit definition
    pub unit: UnitDefinition,

    /// Affiliation variant
    pub affiliation: Affiliation,

    /// Confidence variant
    pub confidence: Confidence,
}

impl AssetKey {
    /// Create a new asset key
    pub fn new(unit: UnitDefinition, affiliation: Affiliation, confidence: Confidence) -> Self {
        Self {
            unit,
            affiliation,
            confidence,
        }
    }

    /// Deterministic output file name: `{unit_id}_{affiliation}_{confidence}.svg`
    pub fn file_name(&self) -> String {
        format!(
            "{}_{}_{}.{}",
            self.unit.id,
            self.affiliation.key(),
            self.confidence.key(),
            ASSET_EXTENSION
        )
    }

    /// Metadata for this key with the resolved query
    pub fn metadata<'a>(&'a self, query: &'a str) -> AssetMetadata<'a> {
        AssetMetadata {
            unit_id: self.unit.id,
            label: self.unit.label,
            query,
            affiliation: self.affiliation,
            confidence: self.confidence,
            weight: self.unit.weight,
            category: self.unit.category,
        }
    }
}

/// The seven fields recorded in every asset header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetMetadata<'a> {
    /// Unit identifier
    pub unit_id: &'a str,
    /// Display label
    pub label: &'a str,
    /// Query passed to the renderer
    pub query: &'a str,
    /// Affiliation variant
    pub affiliation: Affiliation,
    /// Confidence variant
    pub confidence: Confidence,
    /// Weight class
    pub weight: WeightClass,
    /// Category tag
    pub category: UnitCategory,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_file_names_for_rifle() {
        let unit = catalog::find("inf_rifle").unwrap();
        let mut names = Vec::new();
        for affiliation in Affiliation::ALL {
            for confidence in Confidence::ALL {
                names.push(AssetKey::new(*unit, affiliation, confidence).file_name());
            }
        }

        assert_eq!(
            names,
            vec![
                "inf_rifle_friendly_conf.svg",
                "inf_rifle_friendly_sus.svg",
                "inf_rifle_hostile_conf.svg",
                "inf_rifle_hostile_sus.svg",
                "inf_rifle_unknown_conf.svg",
                "inf_rifle_unknown_sus.svg",
            ]
        );
    }

    #[test]
    fn test_metadata_copies_unit_fields() {
        let unit = catalog::find("armor_tank").unwrap();
        let key = AssetKey::new(*unit, Affiliation::Hostile, Confidence::Suspected);
        let meta = key.metadata("enemy armor");

        assert_eq!(meta.unit_id, "armor_tank");
        assert_eq!(meta.query, "enemy armor");
        assert_eq!(meta.weight, WeightClass::Heavy);
        assert_eq!(meta.category, UnitCategory::Armor);
        assert_eq!(meta.confidence, Confidence::Suspected);
    }
}
