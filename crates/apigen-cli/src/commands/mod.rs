//! Command handlers, one module per subcommand.

pub mod completions;
pub mod generate;
pub mod init;
pub mod validate;

use std::sync::Arc;

use apigen_adapters::{
    DescriptorScanner, DialectStrategyFactory, LocalFilesystem, ManifestEnvironment,
    SimpleRenderer,
};
use apigen_core::application::GenerationService;
use apigen_core::error::RunError;
use tracing::debug;

use crate::config::AppConfig;
use crate::error::CliResult;

/// Wire the local adapters into a generation service.
pub(crate) fn build_service(config: &AppConfig) -> CliResult<GenerationService> {
    let environment =
        ManifestEnvironment::load(config.runtime.manifest.as_deref()).map_err(RunError::from)?;

    debug!(
        source_root = %config.runtime.source_root.display(),
        libraries = environment.libraries().len(),
        "Wiring adapters"
    );

    let factory = DialectStrategyFactory::new(
        Arc::new(DescriptorScanner::new(&config.runtime.source_root)),
        Arc::new(LocalFilesystem::new()),
        Arc::new(SimpleRenderer::new()),
    );

    Ok(GenerationService::new(
        Box::new(environment),
        Box::new(LocalFilesystem::new()),
        Box::new(factory),
    ))
}
