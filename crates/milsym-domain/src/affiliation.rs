//! Affiliation module - which side a symbol is drawn for

use serde::{Deserialize, Serialize};

/// Affiliation variant of a symbol
///
/// Each affiliation has its own rule for turning a unit definition into a
/// renderer query (see [`crate::UnitDefinition::query_for`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Affiliation {
    /// Own forces (blue frame)
    Friendly,

    /// Enemy forces (red frame)
    Hostile,

    /// Not yet identified (yellow/white frame)
    Unknown,
}

impl Affiliation {
    /// All affiliations in generation order
    pub const ALL: [Affiliation; 3] = [
        Affiliation::Friendly,
        Affiliation::Hostile,
        Affiliation::Unknown,
    ];

    /// Key used in file names and metadata
    pub fn key(&self) -> &'static str {
        match self {
            Affiliation::Friendly => "friendly",
            Affiliation::Hostile => "hostile",
            Affiliation::Unknown => "unknown",
        }
    }

    /// APP-6E standard identity digit (SIDC position 3)
    pub fn sidc_code(&self) -> char {
        match self {
            Affiliation::Friendly => '3',
            Affiliation::Hostile => '6',
            Affiliation::Unknown => '1',
        }
    }

    /// Parse an affiliation from its key
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "friendly" => Some(Affiliation::Friendly),
            "hostile" => Some(Affiliation::Hostile),
            "unknown" => Some(Affiliation::Unknown),
            _ => None,
        }
    }
}

impl std::fmt::Display for Affiliation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for Affiliation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid affiliation: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_order() {
        let keys: Vec<_> = Affiliation::ALL.iter().map(|a| a.key()).collect();
        assert_eq!(keys, vec!["friendly", "hostile", "unknown"]);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Affiliation::parse("Hostile"), Some(Affiliation::Hostile));
        assert!("neutral".parse::<Affiliation>().is_err());
    }

    #[test]
    fn test_sidc_codes_are_distinct() {
        assert_ne!(Affiliation::Friendly.sidc_code(), Affiliation::Hostile.sidc_code());
        assert_ne!(Affiliation::Hostile.sidc_code(), Affiliation::Unknown.sidc_code());
    }
}
