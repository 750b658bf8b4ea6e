//! Job and result types for a generation run

use milsym_domain::AssetKey;
use std::path::PathBuf;

/// One planned (unit, affiliation, confidence) triple
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetJob {
    /// Position in the plan, starting at 0
    pub index: usize,

    /// The triple
    pub key: AssetKey,

    /// Query that will be passed to the renderer
    pub query: String,
}

impl AssetJob {
    /// Output file name for this job
    pub fn file_name(&self) -> String {
        self.key.file_name()
    }
}

/// A rendered asset, ready to be written
#[derive(Debug, Clone)]
pub struct GeneratedAsset {
    /// The triple this asset was generated for
    pub key: AssetKey,

    /// Destination path
    pub path: PathBuf,

    /// Metadata header followed by the (post-processed) markup
    pub content: String,

    /// Markup contains the configured placeholder-icon marker
    pub flagged: bool,
}

/// Why an asset was not produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The renderer could not resolve the query
    Render,

    /// The rendered markup had no root element to transform
    Markup,

    /// The file could not be written
    Write,
}

impl FailureKind {
    /// Get the kind as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Render => "render",
            FailureKind::Markup => "markup",
            FailureKind::Write => "write",
        }
    }
}

/// A failure for a single asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFailure {
    /// Failure category
    pub kind: FailureKind,

    /// Underlying error message
    pub detail: String,
}

/// Final state of one asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeStatus {
    /// Written to disk
    Generated {
        /// Placeholder icon detected
        flagged: bool,
    },

    /// Skipped after a failure
    Failed(AssetFailure),
}

/// Per-asset report passed to the progress callback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetOutcome {
    /// Output file name
    pub file_name: String,

    /// Query passed to the renderer
    pub query: String,

    /// Result
    pub status: OutcomeStatus,
}

impl AssetOutcome {
    /// True if the asset was written
    pub fn is_generated(&self) -> bool {
        matches!(self.status, OutcomeStatus::Generated { .. })
    }
}
