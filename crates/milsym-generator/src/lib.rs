//! Batch Asset Generator
//!
//! Renders every (unit × affiliation × confidence) combination of the fixed
//! catalog into an SVG file with a metadata header.
//!
//! # Overview
//!
//! For each triple the generator:
//! - resolves a query string (natural-language name or SIDC)
//! - delegates rendering to a `SymbolRenderer`
//! - injects `opacity="0.55"` into the root element for suspected contacts
//! - prepends a seven-field metadata comment
//! - writes `{unit_id}_{affiliation}_{confidence}.svg`, overwriting any previous file
//!
//! Render failures are counted and skipped; the run always visits every triple.
//!
//! # Architecture
//!
//! ```text
//! catalog → plan → renderer → post-process → header → output_dir
//! ```
//!
//! # Example Usage
//!
//! ```no_run
//! use milsym_generator::{BatchGenerator, GeneratorConfig, OutcomeStatus};
//! use milsym_render::MockRenderer;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let generator = BatchGenerator::new(MockRenderer::new(), GeneratorConfig::default());
//!
//! let summary = generator.run(|outcome| match &outcome.status {
//!     OutcomeStatus::Generated { .. } => println!("  OK   {}", outcome.file_name),
//!     OutcomeStatus::Failed(f) => println!("  NG   {} : {}", outcome.file_name, f.detail),
//! })?;
//!
//! println!("{}", summary.summary());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod generator;
mod plan;
mod summary;
mod types;

pub use config::{GeneratorConfig, QueryMode, WriteFailurePolicy, DEFAULT_HEADER_TAG, DEFAULT_OUTPUT_DIR};
pub use error::GeneratorError;
pub use generator::BatchGenerator;
pub use plan::{build_plan, catalog_plan, resolve_query, UnitFilter};
pub use summary::RunSummary;
pub use types::{
    AssetFailure, AssetJob, AssetOutcome, FailureKind, GeneratedAsset, OutcomeStatus,
};
