//! `apigen generate`: run every configured API source.

use tracing::instrument;

use crate::{cli::GlobalArgs, config::AppConfig, error::CliResult, output::OutputManager};

#[instrument(skip_all)]
pub fn execute(global: &GlobalArgs, output: &OutputManager) -> CliResult<()> {
    let (path, explicit) = global.config_file();
    let config = AppConfig::load(&path, explicit)?;

    let service = super::build_service(&config)?;
    let summary = service.run(config.bundles())?;

    output.run_summary(&summary)?;
    Ok(())
}
