//! Unified error handling for Apigen Core.
//!
//! This module provides the run-level error type that wraps domain and
//! application errors. Every variant aborts the whole run; callers use
//! [`RunError::is_expected`] to choose between a plain message and a full
//! cause chain.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::application::GenerationError;
use crate::domain::{CompatibilityError, ConfigurationError};

/// Root error type for a generation run.
#[derive(Debug, Error, Clone)]
pub enum RunError {
    /// The runtime environment carries an unsupported upstream library.
    #[error(transparent)]
    IncompatibleVersion(#[from] CompatibilityError),

    /// Missing bundle list or a validator rule violation.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// A strategy pipeline stage failed.
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// The output directory could not be created.
    #[error("Failed to create directory {path}: {reason}")]
    DirectoryCreation { path: PathBuf, reason: String },

    /// Anything else. The original cause is kept for diagnostics.
    #[error("{message}")]
    Unexpected {
        message: String,
        #[source]
        source: Option<Arc<dyn std::error::Error + Send + Sync>>,
    },
}

impl RunError {
    /// Unexpected error without an underlying cause.
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
            source: None,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::IncompatibleVersion(e) => e.suggestions(),
            Self::Configuration(e) => e.suggestions(),
            Self::Generation(e) => e.suggestions(),
            Self::DirectoryCreation { path, .. } => vec![
                format!("Failed to create: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::Unexpected { .. } => vec![
                "This appears to be a bug in apigen".into(),
                "Re-run with -vvv and include the output when reporting it".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IncompatibleVersion(_) => ErrorCategory::Compatibility,
            Self::Configuration(_) => ErrorCategory::Configuration,
            Self::Generation(_) => ErrorCategory::Generation,
            Self::DirectoryCreation { .. } | Self::Unexpected { .. } => ErrorCategory::Internal,
        }
    }

    /// Expected failures are reported with their message only.
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Configuration(_) | Self::Generation(_))
    }
}

/// Error categories for UI display and exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Generation,
    Compatibility,
    Internal,
}

/// Convenient result type alias.
pub type RunResult<T> = Result<T, RunError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Wrap a foreign error as [`RunError::Unexpected`], keeping it as the source.
    fn context(self, msg: impl Into<String>) -> RunResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> RunResult<T> {
        self.map_err(|e| RunError::Unexpected {
            message: format!("{}: {}", msg.into(), e),
            source: Some(Arc::new(e)),
        })
    }
}
