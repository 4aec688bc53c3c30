//! Application layer for apigen.
//!
//! This layer contains:
//! - **Services**: the generation run and its helpers
//!   (GenerationService, CapabilityGuard, OutputResolver)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Pipeline stage error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    BundleReport, // DTO for one processed bundle
    CapabilityGuard,
    GenerationService,
    OutputResolver,
    RunSummary,
};

// Re-export port traits (for adapter implementation)
pub use ports::{
    Filesystem, GenerationStrategy, RuntimeEnvironment, SourceScanner, StrategyFactory,
    TemplateRenderer,
};

pub use error::GenerationError;
