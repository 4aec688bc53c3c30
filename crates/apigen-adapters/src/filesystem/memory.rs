//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use apigen_core::{
    application::ports::Filesystem,
    error::{RunError, RunResult},
};

/// In-memory filesystem for testing.
///
/// Clones share the same storage, so a test can hand one clone to a
/// service and inspect the other afterwards.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    read_only: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Seed a file, creating its parent directories (testing helper).
    pub fn insert_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        let path = path.into();
        let Ok(mut inner) = self.inner.write() else {
            return;
        };
        if let Some(parent) = path.parent() {
            add_ancestors(&mut inner.directories, parent);
        }
        inner.files.insert(path, content.into());
    }

    /// Refuse directory creation at or below `path` (testing helper).
    pub fn deny_directory(&self, path: impl Into<PathBuf>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.read_only.insert(path.into());
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> RunResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error())?;

        if inner.read_only.iter().any(|denied| path.starts_with(denied)) {
            return Err(RunError::DirectoryCreation {
                path: path.to_path_buf(),
                reason: "permission denied".into(),
            });
        }

        add_ancestors(&mut inner.directories, path);
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> RunResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error())?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(RunError::unexpected(format!(
                    "Failed to write {}: parent directory does not exist",
                    path.display()
                )));
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> RunResult<String> {
        let inner = self.inner.read().map_err(|_| lock_error())?;
        inner
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| RunError::unexpected(format!("Failed to read {}: not found", path.display())))
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }
}

fn add_ancestors(directories: &mut HashSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}

fn lock_error() -> RunError {
    RunError::unexpected("in-memory filesystem lock poisoned")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("out/a.json"), "{}").is_err());

        fs.create_dir_all(Path::new("out")).unwrap();
        fs.write_file(Path::new("out/a.json"), "{}").unwrap();
        assert_eq!(fs.read_file(Path::new("out/a.json")).as_deref(), Some("{}"));
    }

    #[test]
    fn clones_share_storage() {
        let fs = MemoryFilesystem::new();
        let other = fs.clone();
        fs.insert_file("t/doc.tmpl", "{{TITLE}}");
        assert!(other.exists(Path::new("t")));
        assert_eq!(other.read_to_string(Path::new("t/doc.tmpl")).unwrap(), "{{TITLE}}");
    }

    #[test]
    fn denied_directory_fails_creation() {
        let fs = MemoryFilesystem::new();
        fs.deny_directory("/tmp/x");
        let err = fs.create_dir_all(Path::new("/tmp/x/y")).unwrap_err();
        assert!(matches!(err, RunError::DirectoryCreation { .. }));
        assert!(!fs.exists(Path::new("/tmp/x/y")));
    }
}
