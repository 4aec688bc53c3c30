//! Infrastructure adapters for apigen.
//!
//! This crate implements the ports defined in `apigen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod environment;
pub mod filesystem;
pub mod renderer;
pub mod scanner;
pub mod strategy;

// Re-export commonly used adapters
pub use environment::{ManifestEnvironment, StaticEnvironment};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::SimpleRenderer;
pub use scanner::DescriptorScanner;
pub use strategy::{DefaultStrategy, DialectStrategyFactory, FrameworkStrategy};
