//! Core Batch Asset Generator implementation

use crate::config::{GeneratorConfig, WriteFailurePolicy};
use crate::error::GeneratorError;
use crate::plan::{build_plan, UnitFilter};
use crate::summary::RunSummary;
use crate::types::{
    AssetFailure, AssetJob, AssetOutcome, FailureKind, GeneratedAsset, OutcomeStatus,
};
use milsym_domain::traits::SymbolRenderer;
use milsym_domain::{catalog, markup, RenderRequest, UnitDefinition};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Enumerates the catalog, renders every triple and writes the results
///
/// # Examples
///
/// ```no_run
/// use milsym_generator::{BatchGenerator, GeneratorConfig};
/// use milsym_render::CommandRenderer;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let generator = BatchGenerator::new(CommandRenderer::default_python(), GeneratorConfig::default());
/// let summary = generator.run(|outcome| println!("{:?}", outcome))?;
/// println!("{}", summary.summary());
/// # Ok(())
/// # }
/// ```
pub struct BatchGenerator<R> {
    renderer: R,
    config: GeneratorConfig,
    units: &'static [UnitDefinition],
    filter: UnitFilter,
}

impl<R> BatchGenerator<R>
where
    R: SymbolRenderer,
    R::Error: std::fmt::Display,
{
    /// Create a generator over the full catalog
    pub fn new(renderer: R, config: GeneratorConfig) -> Self {
        Self {
            renderer,
            config,
            units: catalog::UNITS,
            filter: UnitFilter::all(),
        }
    }

    /// Restrict the run to a subset of the catalog
    pub fn with_filter(mut self, filter: UnitFilter) -> Result<Self, GeneratorError> {
        filter.validate(self.units)?;
        self.filter = filter;
        Ok(self)
    }

    /// Replace the unit table (used for tests and custom catalogs)
    pub fn with_units(mut self, units: &'static [UnitDefinition]) -> Self {
        self.units = units;
        self
    }

    /// Get the configuration
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Get the renderer
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Jobs this generator will process, in order
    pub fn plan(&self) -> Vec<AssetJob> {
        build_plan(self.units, &self.filter, self.config.query_mode)
    }

    /// Render one job into a ready-to-write asset
    ///
    /// Calls the renderer, applies the confidence transform and attaches the
    /// metadata header. Nothing is written.
    pub fn generate_one(&self, job: &AssetJob) -> Result<GeneratedAsset, AssetFailure> {
        let request = RenderRequest::new(job.query.clone(), self.config.style, self.config.use_variants)
            .with_overrides(job.key.confidence.overrides());

        let rendered = self.renderer.render(&request).map_err(|e| AssetFailure {
            kind: FailureKind::Render,
            detail: e.to_string(),
        })?;

        let body = job.key.confidence.post_process(&rendered).ok_or_else(|| AssetFailure {
            kind: FailureKind::Markup,
            detail: "rendered markup has no <svg> root element".to_string(),
        })?;

        let flagged = self
            .config
            .unresolved_marker
            .as_deref()
            .is_some_and(|marker| rendered.contains(marker));

        let header = markup::metadata_header(&self.config.header_tag, &job.key.metadata(&job.query));

        Ok(GeneratedAsset {
            key: job.key,
            path: self.config.output_dir.join(job.file_name()),
            content: markup::attach_header(&body, &header),
            flagged,
        })
    }

    /// Run the whole batch
    ///
    /// `on_outcome` is called once per job, in plan order, as soon as the
    /// job finishes. Render failures are counted and skipped. Write failures
    /// follow [`WriteFailurePolicy`].
    ///
    /// # Errors
    ///
    /// Returns an error if the output directory cannot be created, or if a
    /// write fails under [`WriteFailurePolicy::Abort`].
    pub fn run<F>(&self, mut on_outcome: F) -> Result<RunSummary, GeneratorError>
    where
        F: FnMut(&AssetOutcome),
    {
        let output_dir = &self.config.output_dir;
        ensure_dir(output_dir)?;

        let plan = self.plan();
        info!(
            "Generating {} assets with renderer '{}' into {}",
            plan.len(),
            self.renderer.name(),
            output_dir.display()
        );

        let mut summary = RunSummary::new(output_dir.clone());

        for job in &plan {
            let file_name = job.file_name();

            let status = match self.generate_one(job) {
                Ok(asset) => match write_asset(&asset) {
                    Ok(()) => {
                        debug!(file = %file_name, query = %job.query, "Asset written");
                        summary.record_generated(asset.flagged);
                        OutcomeStatus::Generated { flagged: asset.flagged }
                    }
                    Err(source) => {
                        warn!(file = %file_name, "Write failed: {}", source);
                        summary.record_error(FailureKind::Write);
                        let failure = AssetFailure {
                            kind: FailureKind::Write,
                            detail: source.to_string(),
                        };

                        if self.config.write_failure == WriteFailurePolicy::Abort {
                            on_outcome(&AssetOutcome {
                                file_name,
                                query: job.query.clone(),
                                status: OutcomeStatus::Failed(failure),
                            });
                            return Err(GeneratorError::Write {
                                path: asset.path,
                                source,
                            });
                        }
                        OutcomeStatus::Failed(failure)
                    }
                },
                Err(failure) => {
                    warn!(file = %file_name, kind = failure.kind.as_str(), "{}", failure.detail);
                    summary.record_error(failure.kind);
                    OutcomeStatus::Failed(failure)
                }
            };

            on_outcome(&AssetOutcome {
                file_name,
                query: job.query.clone(),
                status,
            });
        }

        info!("{}", summary.summary());
        Ok(summary)
    }
}

/// Create the output directory and its parents if needed
fn ensure_dir(dir: &Path) -> Result<(), GeneratorError> {
    fs::create_dir_all(dir).map_err(|source| GeneratorError::OutputDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Write an asset, replacing any previous file of the same name
fn write_asset(asset: &GeneratedAsset) -> std::io::Result<()> {
    fs::write(&asset.path, asset.content.as_bytes())
}
