//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate every bundle" or "validate the
//! configuration".

pub mod capability_guard;
pub mod generation_service;
pub mod output_resolver;

pub use capability_guard::CapabilityGuard;
pub use generation_service::{BundleReport, GenerationService, RunSummary};
pub use output_resolver::OutputResolver;
