//! Application layer errors.
//!
//! These are failures raised by the strategy pipeline stages (loading
//! overrides, scanning, rendering, emission). Configuration problems are
//! `ConfigurationError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a generation strategy. Surfaced to the user as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// The model-substitute file could not be read or parsed.
    #[error("Failed to load model overrides from {path}: {reason}")]
    Overrides { path: PathBuf, reason: String },

    /// A scan location could not be examined.
    #[error("Failed to scan location '{location}': {reason}")]
    Scan { location: String, reason: String },

    /// A descriptor file is malformed or incomplete.
    #[error("Invalid resource descriptor {file}: {reason}")]
    InvalidDescriptor { file: String, reason: String },

    /// Two operations share a path and method within one bundle.
    #[error("Duplicate operation {method} {path}")]
    DuplicateOperation { method: String, path: String },

    /// A stage was invoked before the stage it depends on.
    #[error("Stage '{stage}' invoked before documents were loaded")]
    StageOrder { stage: &'static str },

    /// Template rendering failed.
    #[error("Template rendering failed: {reason}")]
    Rendering { reason: String },

    /// Writing the specification document failed.
    #[error("Failed to write specification: {reason}")]
    Emission { reason: String },
}

impl GenerationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Overrides { path, .. } => vec![
                format!("Check the file at {}", path.display()),
                "Each line must read `From : To`; `#` starts a comment".into(),
            ],
            Self::Scan { location, .. } => vec![
                format!("Check that '{}' exists under the source root", location),
                "Set `runtime.source_root` if sources live elsewhere".into(),
            ],
            Self::InvalidDescriptor { file, .. } => {
                vec![format!("Fix the descriptor at {}", file)]
            }
            Self::DuplicateOperation { method, path } => vec![
                format!("Only one operation may handle {} {}", method, path),
                "Split the bundle or change one of the mappings".into(),
            ],
            Self::Rendering { .. } => vec![
                "Check `template_path` and `output_path`".into(),
                "Both must be set for documentation rendering".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }
}
