//! Filesystem-based resource descriptor scanner.
//!
//! Each scan location is a dotted package or class name resolved against a
//! source root:
//!
//! ```text
//! <source_root>/
//! └── com/example/pets/
//!     ├── PetResource.api.yaml     ← one descriptor per resource
//!     └── admin/
//!         └── AdminResource.api.json
//! ```
//!
//! `com.example.pets` scans the whole directory tree; a class name such as
//! `com.example.pets.PetResource` picks the single matching descriptor.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use apigen_core::{
    application::{GenerationError, ports::SourceScanner},
    domain::ResourceDescriptor,
    error::RunResult,
};

/// Descriptor file suffixes, in lookup order.
pub const DESCRIPTOR_SUFFIXES: [&str; 3] = [".api.json", ".api.yaml", ".api.yml"];

/// Scanner reading `*.api.{json,yaml,yml}` descriptors below a source root.
#[derive(Debug, Clone)]
pub struct DescriptorScanner {
    source_root: PathBuf,
}

impl DescriptorScanner {
    pub fn new(source_root: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
        }
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    /// Descriptor files for one location, sorted by path.
    fn files_for(&self, location: &str) -> Result<Vec<PathBuf>, GenerationError> {
        let relative = relative_path(location)?;
        let dir = self.source_root.join(&relative);

        if dir.is_dir() {
            let mut files = Vec::new();
            for entry in WalkDir::new(&dir).sort_by_file_name() {
                let entry = entry.map_err(|e| GenerationError::Scan {
                    location: location.to_string(),
                    reason: format!("directory walk error: {e}"),
                })?;
                if entry.file_type().is_file() && is_descriptor(entry.path()) {
                    files.push(entry.into_path());
                }
            }
            return Ok(files);
        }

        DESCRIPTOR_SUFFIXES
            .iter()
            .map(|suffix| {
                let mut candidate = dir.clone().into_os_string();
                candidate.push(suffix);
                PathBuf::from(candidate)
            })
            .find(|candidate| candidate.is_file())
            .map(|file| vec![file])
            .ok_or_else(|| GenerationError::Scan {
                location: location.to_string(),
                reason: format!("not found under {}", self.source_root.display()),
            })
    }
}

/// Path below the source root for a dotted name.
///
/// Every segment must be a plain identifier so the result never leaves the root.
fn relative_path(location: &str) -> Result<PathBuf, GenerationError> {
    let segments: Vec<&str> = location.trim().split('.').collect();
    let plain = |segment: &&str| {
        !segment.is_empty()
            && segment
                .chars()
                .all(|c| c.is_alphanumeric() || c == '_' || c == '$' || c == '-')
    };
    if !segments.iter().all(plain) {
        return Err(GenerationError::Scan {
            location: location.to_string(),
            reason: "not a dotted package or class name".to_string(),
        });
    }
    Ok(segments.into_iter().collect())
}

impl SourceScanner for DescriptorScanner {
    #[instrument(skip_all, fields(root = %self.source_root.display()))]
    fn scan(&self, locations: &[String]) -> RunResult<Vec<ResourceDescriptor>> {
        let mut seen = BTreeSet::new();
        let mut descriptors = Vec::new();

        for location in locations {
            let files = self.files_for(location)?;
            if files.is_empty() {
                warn!(location = %location, "No resource descriptors found");
            }

            for file in files {
                if !seen.insert(file.clone()) {
                    continue;
                }
                debug!(file = %file.display(), "Reading descriptor");
                descriptors.push(read_descriptor(&file)?);
            }
        }

        debug!(count = descriptors.len(), "Scan complete");
        Ok(descriptors)
    }
}

fn is_descriptor(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| DESCRIPTOR_SUFFIXES.iter().any(|s| name.ends_with(s)))
}

fn read_descriptor(file: &Path) -> Result<ResourceDescriptor, GenerationError> {
    let invalid = |reason: String| GenerationError::InvalidDescriptor {
        file: file.display().to_string(),
        reason,
    };

    let raw = fs::read_to_string(file).map_err(|e| invalid(e.to_string()))?;
    let mut descriptor: ResourceDescriptor = if file.extension().is_some_and(|ext| ext == "json") {
        serde_json::from_str(&raw).map_err(|e| invalid(e.to_string()))?
    } else {
        serde_yaml::from_str(&raw).map_err(|e| invalid(e.to_string()))?
    };
    descriptor.origin = Some(file.to_path_buf());
    Ok(descriptor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use apigen_core::error::RunError;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn tree() -> TempDir {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            "com/example/pets/PetResource.api.yaml",
            "controller: PetResource\npath: /pets\n",
        );
        write(
            temp.path(),
            "com/example/pets/admin/AdminResource.api.json",
            r#"{"controller": "AdminResource", "path": "/admin"}"#,
        );
        write(temp.path(), "com/example/pets/README.md", "not a descriptor");
        temp
    }

    #[test]
    fn package_location_walks_the_tree_in_order() {
        let temp = tree();
        let scanner = DescriptorScanner::new(temp.path());

        let found = scanner.scan(&["com.example.pets".into()]).unwrap();

        let controllers: Vec<_> = found.iter().map(|d| d.controller.clone().unwrap()).collect();
        assert_eq!(controllers, vec!["PetResource", "AdminResource"]);
        assert!(found[0].origin.as_ref().unwrap().ends_with("PetResource.api.yaml"));
    }

    #[test]
    fn class_location_picks_one_descriptor() {
        let temp = tree();
        let scanner = DescriptorScanner::new(temp.path());

        let found = scanner
            .scan(&["com.example.pets.admin.AdminResource".into()])
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].path.as_deref(), Some("/admin"));
    }

    #[test]
    fn overlapping_locations_do_not_duplicate() {
        let temp = tree();
        let scanner = DescriptorScanner::new(temp.path());

        let found = scanner
            .scan(&["com.example.pets".into(), "com.example.pets.admin".into()])
            .unwrap();
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn missing_location_is_a_generation_error() {
        let temp = tree();
        let err = DescriptorScanner::new(temp.path())
            .scan(&["com.example.missing".into()])
            .unwrap_err();
        assert!(matches!(
            err,
            RunError::Generation(GenerationError::Scan { .. })
        ));
    }

    #[test]
    fn empty_location_is_not_an_error() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("com/empty")).unwrap();
        let found = DescriptorScanner::new(temp.path())
            .scan(&["com.empty".into()])
            .unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn locations_cannot_leave_the_source_root() {
        let temp = tree();
        let scanner = DescriptorScanner::new(temp.path().join("com"));

        for location in [".", "..", ".etc.passwd", "example..pets", "example.", "../com", "a/b", ""] {
            let err = scanner.scan(&[location.into()]).unwrap_err();
            match err {
                RunError::Generation(GenerationError::Scan { location: named, reason }) => {
                    assert_eq!(named, location);
                    assert!(reason.contains("dotted"), "{location}: {reason}");
                }
                other => panic!("{location}: unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn relative_path_is_built_from_segments() {
        assert_eq!(
            relative_path(" com.example.Pet$Inner ").unwrap(),
            Path::new("com").join("example").join("Pet$Inner")
        );
    }

    #[test]
    fn malformed_descriptor_names_the_file() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "com/bad/Broken.api.json", "{ not json");
        let err = DescriptorScanner::new(temp.path())
            .scan(&["com.bad".into()])
            .unwrap_err();
        assert!(err.to_string().contains("Broken.api.json"));
    }
}
