//! `apigen validate`: check the configuration without generating anything.

use tracing::instrument;

use crate::{cli::GlobalArgs, config::AppConfig, error::CliResult, output::OutputManager};

#[instrument(skip_all)]
pub fn execute(global: &GlobalArgs, output: &OutputManager) -> CliResult<()> {
    let (path, explicit) = global.config_file();
    let config = AppConfig::load(&path, explicit)?;

    let service = super::build_service(&config)?;
    let bundles = service.validate_only(config.bundles())?;

    output.validated(&bundles)?;
    Ok(())
}
