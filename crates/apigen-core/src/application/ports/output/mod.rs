//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `apigen-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{
    Bundle, LibraryInfo, RenderContext, ResourceDescriptor, StrategyKind,
};
use crate::error::RunResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `apigen_adapters::filesystem::LocalFilesystem` (production)
/// - `apigen_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> RunResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> RunResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> RunResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port describing the runtime dependency set of the scanned project.
///
/// Implemented by:
/// - `apigen_adapters::environment::ManifestEnvironment` (dependency manifest)
/// - `apigen_adapters::environment::StaticEnvironment` (fixed answers)
#[cfg_attr(test, mockall::automock)]
pub trait RuntimeEnvironment: Send + Sync {
    /// The spec/annotation library as declared by the environment, if any.
    fn spec_library(&self) -> Option<LibraryInfo>;

    /// Whether a fully qualified type name is resolvable.
    fn resolves_type(&self, name: &str) -> bool;
}

/// Port for the source scanner.
///
/// Implemented by `apigen_adapters::scanner::DescriptorScanner`.
pub trait SourceScanner: Send + Sync {
    /// Describe every resource found under the given locations, in a
    /// deterministic order.
    fn scan(&self, locations: &[String]) -> RunResult<Vec<ResourceDescriptor>>;
}

/// Port for documentation template rendering.
///
/// Implemented by `apigen_adapters::renderer::SimpleRenderer`.
pub trait TemplateRenderer: Send + Sync {
    /// Render template text with the given context.
    fn render(&self, template: &str, context: &RenderContext) -> RunResult<String>;
}

/// A per-bundle pipeline driver.
///
/// Bound to exactly one bundle and used for exactly one run. Stages are
/// invoked in declaration order; `render_templates` is optional.
#[cfg_attr(test, mockall::automock)]
pub trait GenerationStrategy: Send {
    /// The variant this strategy implements.
    fn kind(&self) -> StrategyKind;

    /// Apply configured model substitutions before scanning.
    fn load_overriding_models(&mut self) -> RunResult<()>;

    /// Drive the scanner and build the API model.
    fn load_documents(&mut self) -> RunResult<()>;

    /// Render documentation from the bundle's template.
    fn render_templates(&mut self) -> RunResult<()>;

    /// Write the specification document with the given base path.
    fn emit_specification(&mut self, base_path: &str) -> RunResult<()>;
}

/// Instantiates the strategy variant chosen by
/// [`StrategySelector`](crate::domain::StrategySelector).
#[cfg_attr(test, mockall::automock)]
pub trait StrategyFactory: Send + Sync {
    fn create(&self, kind: StrategyKind, bundle: Bundle) -> Box<dyn GenerationStrategy>;
}
