//! Run configuration.
//!
//! [`AppConfig`] is loaded once per command and passed down by reference.
//! The CLI layer owns config; the core crate only ever sees the bundle list.
//!
//! # Resolution order (highest priority first)
//!
//! 1. Environment variables prefixed with `APIGEN_`, nested keys joined by
//!    `__` (e.g. `APIGEN_RUNTIME__SOURCE_ROOT=src/main`)
//! 2. Config file (`--config`, default `apigen.yaml`; format by extension)
//! 3. Built-in defaults
//!
//! Relative paths are resolved against the working directory.

use std::path::{Path, PathBuf};

use apigen_core::domain::BundleConfig;
use config::{Config, Environment, File};
use serde::Deserialize;
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Environment variable prefix.
const ENV_PREFIX: &str = "APIGEN";

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// API sources to generate, one bundle each. `None` when the key is
    /// absent, `Some(None)` entries for declared-but-empty bundles.
    #[serde(alias = "apiSources")]
    pub api_sources: Option<Vec<Option<BundleConfig>>>,
    /// Where descriptors and the runtime manifest live.
    pub runtime: RuntimeConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Root that scan locations are resolved against.
    #[serde(alias = "sourceRoot")]
    pub source_root: PathBuf,
    /// TOML manifest listing the libraries present at generation time.
    pub manifest: Option<PathBuf>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            source_root: PathBuf::from("."),
            manifest: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from `path` layered under the environment.
    ///
    /// A missing file is only an error when `required` is set, i.e. when the
    /// user named it with `--config`.
    pub fn load(path: &Path, required: bool) -> CliResult<Self> {
        debug!(path = %path.display(), required, "Loading configuration");

        if required && !path.is_file() {
            return Err(CliError::ConfigError {
                message: format!("configuration file '{}' not found", path.display()),
                source: None,
            });
        }

        let settings = Config::builder()
            .add_source(File::from(path).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(|e| CliError::config(format!("failed to read '{}'", path.display()), e))?;

        settings
            .try_deserialize()
            .map_err(|e| CliError::config(format!("invalid configuration in '{}'", path.display()), e))
    }

    /// Bundle list in the shape the generation service expects.
    pub fn bundles(&self) -> Option<&[Option<BundleConfig>]> {
        self.api_sources.as_deref()
    }
}

/// Starter file written by `apigen init`.
pub const STARTER_CONFIG: &str = r#"# apigen run configuration
#
# Every entry under `api_sources` produces one Swagger 2.0 document.

runtime:
  # Directory that scan locations are resolved against.
  source_root: src
  # Optional TOML manifest of the libraries present at generation time.
  # manifest: apigen-runtime.toml

api_sources:
  - info:
      title: My API
      version: "1.0.0"
      description: Describe your API here
    base_path: /api
    # Package-style locations are scanned recursively; a trailing
    # class-style segment names a single descriptor.
    locations:
      - com.example.api
    # generic | framework-specific
    dialect: generic
    swagger_directory: generated/swagger-ui
    output_formats: [json]
    # Render human-readable docs next to the document:
    # template_path: templates/api.md.tmpl
    # output_path: generated/docs/api.md
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn defaults_point_at_current_directory() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.runtime.source_root, PathBuf::from("."));
        assert!(cfg.runtime.manifest.is_none());
        assert!(cfg.bundles().is_none());
    }

    #[test]
    fn missing_optional_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = AppConfig::load(&dir.path().join("apigen.yaml"), false).unwrap();
        assert!(cfg.api_sources.is_none());
    }

    #[test]
    fn missing_required_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(&dir.path().join("nope.yaml"), true).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn starter_config_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("apigen.yaml");
        fs::write(&path, STARTER_CONFIG).unwrap();

        let cfg = AppConfig::load(&path, true).unwrap();
        let bundles = cfg.bundles().unwrap();
        assert_eq!(bundles.len(), 1);
        let bundle = bundles[0].as_ref().unwrap();
        assert_eq!(bundle.locations.as_deref(), Some(&["com.example.api".to_string()][..]));
        assert_eq!(cfg.runtime.source_root, PathBuf::from("src"));
    }

    #[test]
    fn toml_files_are_supported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("apigen.toml");
        fs::write(
            &path,
            "[runtime]\nsource_root = \"descriptors\"\n\n[[api_sources]]\nlocations = [\"a.b\"]\n\n[api_sources.info]\ntitle = \"T\"\nversion = \"1\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(&path, true).unwrap();
        assert_eq!(cfg.runtime.source_root, PathBuf::from("descriptors"));
        assert_eq!(cfg.bundles().map(<[_]>::len), Some(1));
    }
}
