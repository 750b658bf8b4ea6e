//! Military Symbol Domain Layer
//!
//! This crate contains the domain model for the symbol asset generator.
//! It has no runtime dependencies beyond serde derives and defines the
//! unit catalog, the variant axes and the renderer port that all other
//! crates depend upon.
//!
//! ## Key Concepts
//!
//! - **UnitDefinition**: A hand-authored unit record (id, label, name fragments, weight, category)
//! - **Affiliation**: Friendly / hostile / unknown, each with its own query rule
//! - **Confidence**: Confirmed / suspected, with optional render overrides and post-processing
//! - **AssetKey**: One (unit, affiliation, confidence) triple and its output file name
//! - **SymbolRenderer**: The port through which an external renderer is consumed
//!
//! ## Architecture
//!
//! - Pure domain logic only
//! - Renderer implementations live in `milsym-render`
//! - Batch orchestration lives in `milsym-generator`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod affiliation;
pub mod asset;
pub mod catalog;
pub mod confidence;
pub mod markup;
pub mod sidc;
pub mod style;
pub mod traits;
pub mod unit;

// Re-exports for convenience
pub use affiliation::Affiliation;
pub use asset::{AssetKey, AssetMetadata};
pub use confidence::{Confidence, RenderOverrides};
pub use style::{RenderRequest, SymbolStyle};
pub use unit::{UnitCategory, UnitDefinition, WeightClass};
