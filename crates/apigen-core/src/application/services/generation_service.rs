//! Generation Service - main application orchestrator.
//!
//! This service coordinates a whole run:
//! 1. Reject a missing or empty bundle list
//! 2. Check upstream library compatibility (once)
//! 3. For each bundle, in configuration order: validate, select a strategy,
//!    and drive it through its pipeline stages
//!
//! The first error anywhere aborts the run. Remaining bundles are never
//! attempted.

use std::path::PathBuf;

use tracing::{debug, info, info_span, instrument, warn};

use crate::{
    application::{
        CapabilityGuard, OutputResolver,
        ports::{Filesystem, RuntimeEnvironment, StrategyFactory},
    },
    domain::{
        Bundle, BundleConfig, ConfigValidator, StrategyKind, StrategySelector,
        find_output_collisions,
    },
    error::RunResult,
};

/// What happened to one bundle during a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleReport {
    pub title: String,
    pub version: String,
    pub strategy: StrategyKind,
    /// Base path passed to the emission stage.
    pub base_path: String,
    pub rendered: bool,
    pub output_path: Option<PathBuf>,
    pub spec_paths: Vec<PathBuf>,
}

/// Outcome of a successful run, one report per bundle in configuration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub bundles: Vec<BundleReport>,
}

/// Top-level driver of a generation run.
pub struct GenerationService {
    environment: Box<dyn RuntimeEnvironment>,
    filesystem: Box<dyn Filesystem>,
    factory: Box<dyn StrategyFactory>,
}

impl GenerationService {
    /// Create a new generation service with the given adapters.
    pub fn new(
        environment: Box<dyn RuntimeEnvironment>,
        filesystem: Box<dyn Filesystem>,
        factory: Box<dyn StrategyFactory>,
    ) -> Self {
        Self {
            environment,
            filesystem,
            factory,
        }
    }

    /// Run every bundle through its generation pipeline.
    ///
    /// `None` stands for an absent bundle list; a `None` entry for a bundle
    /// that was declared but left empty.
    #[instrument(skip_all, fields(bundles = bundles.map_or(0, |b| b.len())))]
    pub fn run(&self, bundles: Option<&[Option<BundleConfig>]>) -> RunResult<RunSummary> {
        let bundles = ConfigValidator::require_bundles(bundles)?;

        CapabilityGuard::new(self.environment.as_ref()).check_compatibility()?;
        self.warn_on_collisions(bundles);

        let mut summary = RunSummary::default();
        for (index, config) in bundles.iter().enumerate() {
            let bundle = ConfigValidator::validate(config.as_ref())?;
            summary.bundles.push(self.process(index, bundle)?);
        }

        info!(bundles = summary.bundles.len(), "Generation completed successfully");
        Ok(summary)
    }

    /// Check every bundle without invoking any strategy.
    ///
    /// Applies the same preconditions, compatibility check and fail-fast
    /// validation as [`run`](Self::run).
    #[instrument(skip_all, fields(bundles = bundles.map_or(0, |b| b.len())))]
    pub fn validate_only(&self, bundles: Option<&[Option<BundleConfig>]>) -> RunResult<Vec<Bundle>> {
        let bundles = ConfigValidator::require_bundles(bundles)?;

        CapabilityGuard::new(self.environment.as_ref()).check_compatibility()?;
        self.warn_on_collisions(bundles);

        let validated = bundles
            .iter()
            .map(|config| ConfigValidator::validate(config.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        info!(bundles = validated.len(), "Configuration is valid");
        Ok(validated)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn process(&self, index: usize, bundle: Bundle) -> RunResult<BundleReport> {
        let span = info_span!("bundle", index, title = %bundle.title());
        let _guard = span.enter();

        let kind = StrategySelector::select(&bundle);
        let base_path = OutputResolver::effective_base_path(&bundle).to_string();
        let render = bundle.template_path().is_some();
        let report = BundleReport {
            title: bundle.title().to_string(),
            version: bundle.info().version.clone(),
            strategy: kind,
            base_path: base_path.clone(),
            rendered: render,
            output_path: bundle.output_path().map(PathBuf::from),
            spec_paths: bundle.spec_paths(),
        };

        let mut strategy = self.factory.create(kind, bundle);
        debug!(strategy = %kind, "Strategy selected");

        debug!("Loading overriding models");
        strategy.load_overriding_models()?;

        debug!("Loading documents");
        strategy.load_documents()?;

        OutputResolver::new(self.filesystem.as_ref())
            .ensure_output_directory(report.output_path.as_deref())?;

        if render {
            debug!("Rendering templates");
            strategy.render_templates()?;
        }

        debug!(base_path = %base_path, "Emitting specification");
        strategy.emit_specification(&base_path)?;

        info!(strategy = %kind, "Bundle generated");
        Ok(report)
    }

    fn warn_on_collisions(&self, bundles: &[Option<BundleConfig>]) {
        for collision in find_output_collisions(bundles) {
            warn!(
                path = %collision.path.display(),
                bundles = ?collision.bundles,
                "Bundles write to the same file; later bundles overwrite earlier ones"
            );
        }
    }
}
