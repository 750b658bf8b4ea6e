//! Enumeration of the (unit × affiliation × confidence) cross product

use crate::config::QueryMode;
use crate::error::GeneratorError;
use crate::types::AssetJob;
use milsym_domain::{catalog, Affiliation, AssetKey, Confidence, UnitDefinition};

/// Restricts a run to a subset of the catalog
///
/// Empty lists mean "everything".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitFilter {
    /// Unit ids to include
    pub units: Vec<String>,

    /// Affiliations to include
    pub affiliations: Vec<Affiliation>,

    /// Confidence variants to include
    pub confidences: Vec<Confidence>,
}

impl UnitFilter {
    /// A filter that includes everything
    pub fn all() -> Self {
        Self::default()
    }

    /// Check that every requested unit id exists in `units`
    pub fn validate(&self, units: &[UnitDefinition]) -> Result<(), GeneratorError> {
        let unknown: Vec<&str> = self
            .units
            .iter()
            .map(String::as_str)
            .filter(|id| !units.iter().any(|u| u.id == *id))
            .collect();

        if unknown.is_empty() {
            Ok(())
        } else {
            Err(GeneratorError::Config(format!(
                "Unknown unit id(s): {}",
                unknown.join(", ")
            )))
        }
    }

    fn wants_unit(&self, unit: &UnitDefinition) -> bool {
        self.units.is_empty() || self.units.iter().any(|id| id == unit.id)
    }

    fn wants_affiliation(&self, affiliation: Affiliation) -> bool {
        self.affiliations.is_empty() || self.affiliations.contains(&affiliation)
    }

    fn wants_confidence(&self, confidence: Confidence) -> bool {
        self.confidences.is_empty() || self.confidences.contains(&confidence)
    }
}

/// Query for a triple under a query mode
pub fn resolve_query(key: &AssetKey, mode: QueryMode) -> String {
    match mode {
        QueryMode::Name => key.unit.query_for(key.affiliation),
        QueryMode::Sidc => key.unit.sidc_for(key.affiliation),
    }
}

/// Build the ordered job list for `units`
///
/// Order is units (catalog order), then affiliations, then confidences.
pub fn build_plan(units: &[UnitDefinition], filter: &UnitFilter, mode: QueryMode) -> Vec<AssetJob> {
    let mut jobs = Vec::new();

    for unit in units.iter().filter(|u| filter.wants_unit(u)) {
        for affiliation in Affiliation::ALL {
            if !filter.wants_affiliation(affiliation) {
                continue;
            }
            for confidence in Confidence::ALL {
                if !filter.wants_confidence(confidence) {
                    continue;
                }
                let key = AssetKey::new(*unit, affiliation, confidence);
                let query = resolve_query(&key, mode);
                jobs.push(AssetJob {
                    index: jobs.len(),
                    key,
                    query,
                });
            }
        }
    }

    jobs
}

/// Build the full plan over the fixed catalog
pub fn catalog_plan(mode: QueryMode) -> Vec<AssetJob> {
    build_plan(catalog::UNITS, &UnitFilter::all(), mode)
}
