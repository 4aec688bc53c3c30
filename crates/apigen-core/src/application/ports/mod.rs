//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `apigen-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `RuntimeEnvironment`: What the scanned project ships with
//!   - `SourceScanner`: Turns scan locations into resource descriptors
//!   - `TemplateRenderer`: Documentation rendering
//!   - `GenerationStrategy` / `StrategyFactory`: The per-bundle pipeline
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{
    Filesystem, GenerationStrategy, RuntimeEnvironment, SourceScanner, StrategyFactory,
    TemplateRenderer,
};

#[cfg(test)]
pub use output::{
    MockFilesystem, MockGenerationStrategy, MockRuntimeEnvironment, MockStrategyFactory,
};
