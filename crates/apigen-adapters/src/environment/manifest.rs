//! Dependency-manifest runtime environment.
//!
//! The scanned project declares what it ships with in a small TOML file:
//!
//! ```toml
//! [[library]]
//! name         = "swagger-core"
//! version      = "1.5.10"
//! spec_library = true                          # the annotation/spec library
//! types        = ["io.swagger.annotations.Api"]  # resolvable type names
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};

use apigen_core::{
    application::ports::RuntimeEnvironment, domain::LibraryInfo, error::RunError,
};

/// The manifest could not be loaded.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read manifest {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl From<ManifestError> for RunError {
    fn from(e: ManifestError) -> Self {
        RunError::Unexpected {
            message: e.to_string(),
            source: Some(std::sync::Arc::new(e)),
        }
    }
}

/// Deserialised `[[library]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct LibraryEntry {
    pub name: String,
    pub version: Option<String>,
    #[serde(default)]
    pub spec_library: bool,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Manifest {
    #[serde(default)]
    library: Vec<LibraryEntry>,
}

/// Runtime environment described by a dependency manifest.
#[derive(Debug, Clone, Default)]
pub struct ManifestEnvironment {
    libraries: Vec<LibraryEntry>,
}

impl ManifestEnvironment {
    /// Environment with no libraries; nothing is detected.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the manifest at `path`, or an empty environment when unset.
    #[instrument(skip_all, fields(path = ?path))]
    pub fn load(path: Option<&Path>) -> Result<Self, ManifestError> {
        let Some(path) = path else {
            debug!("No runtime manifest configured");
            return Ok(Self::empty());
        };

        let raw = fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let env = Self::from_toml(&raw).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(libraries = env.libraries.len(), "Loaded runtime manifest");
        Ok(env)
    }

    /// Parse manifest text.
    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        let manifest: Manifest = toml::from_str(raw)?;
        Ok(Self {
            libraries: manifest.library,
        })
    }

    pub fn libraries(&self) -> &[LibraryEntry] {
        &self.libraries
    }
}

impl RuntimeEnvironment for ManifestEnvironment {
    fn spec_library(&self) -> Option<LibraryInfo> {
        self.libraries
            .iter()
            .find(|lib| lib.spec_library)
            .and_then(|lib| {
                lib.version.as_ref().map(|version| LibraryInfo {
                    name: lib.name.clone(),
                    version: version.clone(),
                })
            })
    }

    fn resolves_type(&self, name: &str) -> bool {
        self.libraries
            .iter()
            .any(|lib| lib.types.iter().any(|t| t == name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MANIFEST: &str = r#"
[[library]]
name = "jackson-databind"
version = "2.9.0"
types = ["com.fasterxml.jackson.databind.ObjectMapper"]

[[library]]
name = "swagger-core"
version = "1.5.10"
spec_library = true
types = ["io.swagger.annotations.Api", "io.swagger.models.Swagger"]
"#;

    #[test]
    fn missing_path_is_an_empty_environment() {
        let env = ManifestEnvironment::load(None).unwrap();
        assert!(env.spec_library().is_none());
        assert!(!env.resolves_type("io.swagger.annotations.Api"));
    }

    #[test]
    fn declared_spec_library_is_reported() {
        let env = ManifestEnvironment::from_toml(MANIFEST).unwrap();
        let lib = env.spec_library().unwrap();
        assert_eq!(lib.name, "swagger-core");
        assert_eq!(lib.version, "1.5.10");
    }

    #[test]
    fn types_resolve_across_libraries() {
        let env = ManifestEnvironment::from_toml(MANIFEST).unwrap();
        assert!(env.resolves_type("io.swagger.models.Swagger"));
        assert!(env.resolves_type("com.fasterxml.jackson.databind.ObjectMapper"));
        assert!(!env.resolves_type("com.wordnik.swagger.model.ApiListing"));
    }

    #[test]
    fn loads_from_disk_and_reports_parse_errors() {
        let temp = TempDir::new().unwrap();
        let good = temp.path().join("runtime.toml");
        std::fs::write(&good, MANIFEST).unwrap();
        assert_eq!(ManifestEnvironment::load(Some(&good)).unwrap().libraries().len(), 2);

        let bad = temp.path().join("bad.toml");
        std::fs::write(&bad, "[[library]]\nversion = 3").unwrap();
        let err = ManifestEnvironment::load(Some(&bad)).unwrap_err();
        assert!(matches!(err, ManifestError::Parse { .. }));

        let err = ManifestEnvironment::load(Some(&temp.path().join("none.toml"))).unwrap_err();
        assert!(matches!(err, ManifestError::Read { .. }));
    }
}
