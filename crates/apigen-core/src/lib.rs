//! Apigen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for apigen, the
//! API specification generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           apigen-cli (CLI)              │
//! │     (generate / validate commands)      │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (GenerationService, CapabilityGuard,    │
//! │  OutputResolver)                        │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, RuntimeEnvironment,        │
//! │  GenerationStrategy, StrategyFactory)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     apigen-adapters (Infrastructure)    │
//! │ (LocalFilesystem, DescriptorScanner,    │
//! │  DefaultStrategy, FrameworkStrategy)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (BundleConfig, ConfigValidator,         │
//! │  ApiModel, SpecificationDocument)       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use apigen_core::application::GenerationService;
//!
//! // Adapters are injected by the caller.
//! let service = GenerationService::new(environment, filesystem, factory);
//! let summary = service.run(Some(&bundles))?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BundleReport, CapabilityGuard, GenerationError, GenerationService, OutputResolver,
        RunSummary,
        ports::{
            Filesystem, GenerationStrategy, RuntimeEnvironment, SourceScanner, StrategyFactory,
            TemplateRenderer,
        },
    };
    pub use crate::domain::{
        ApiModel, Bundle, BundleConfig, ConfigValidator, ConfigurationError, Dialect,
        ModelOverrides, RenderContext, ResourceDescriptor, SpecificationDocument, StrategyKind,
        StrategySelector,
    };
    pub use crate::error::{ErrorCategory, RunError, RunResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
