//! Output location handling.

use std::path::Path;

use tracing::debug;

use crate::{
    application::ports::Filesystem,
    domain::Bundle,
    error::{RunError, RunResult},
};

/// Creates output directories on demand and resolves the publish base path.
pub struct OutputResolver<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> OutputResolver<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Make sure the parent directory of `output_path` exists.
    ///
    /// No-op when `output_path` is unset or has no parent component. A
    /// failure names the directory, not the file.
    pub fn ensure_output_directory(&self, output_path: Option<&Path>) -> RunResult<()> {
        let Some(parent) = output_path
            .and_then(Path::parent)
            .filter(|p| !p.as_os_str().is_empty())
        else {
            return Ok(());
        };

        if self.filesystem.exists(parent) {
            return Ok(());
        }

        debug!(path = %parent.display(), "Creating output directory");
        self.filesystem
            .create_dir_all(parent)
            .map_err(|e| RunError::DirectoryCreation {
                path: parent.to_path_buf(),
                reason: match e {
                    RunError::DirectoryCreation { reason, .. } => reason,
                    other => other.to_string(),
                },
            })
    }

    /// `publish_base_path_override` if set, `base_path` otherwise.
    pub fn effective_base_path(bundle: &Bundle) -> &str {
        bundle.effective_base_path()
    }
}
