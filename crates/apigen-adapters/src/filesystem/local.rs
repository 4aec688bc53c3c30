//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use apigen_core::{
    application::ports::Filesystem,
    error::{Context, RunError, RunResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> RunResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e))
    }

    fn write_file(&self, path: &Path, content: &str) -> RunResult<()> {
        std::fs::write(path, content).context(format!("Failed to write {}", path.display()))
    }

    fn read_to_string(&self, path: &Path) -> RunResult<String> {
        std::fs::read_to_string(path).context(format!("Failed to read {}", path.display()))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error) -> RunError {
    RunError::DirectoryCreation {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
}
