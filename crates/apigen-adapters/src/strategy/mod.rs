//! Generation strategies and the factory that instantiates them.

mod default;
mod document_source;
mod framework;

use std::sync::Arc;

use apigen_core::{
    application::ports::{
        Filesystem, GenerationStrategy, SourceScanner, StrategyFactory, TemplateRenderer,
    },
    domain::{Bundle, StrategyKind},
};

pub use default::DefaultStrategy;
pub use document_source::{DocumentSource, StrategyPorts};
pub use framework::FrameworkStrategy;

/// Builds the strategy variant for a [`StrategyKind`], sharing one set of
/// adapters across every bundle of a run.
#[derive(Clone)]
pub struct DialectStrategyFactory {
    ports: StrategyPorts,
}

impl DialectStrategyFactory {
    pub fn new(
        scanner: Arc<dyn SourceScanner>,
        filesystem: Arc<dyn Filesystem>,
        renderer: Arc<dyn TemplateRenderer>,
    ) -> Self {
        Self {
            ports: StrategyPorts {
                scanner,
                filesystem,
                renderer,
            },
        }
    }
}

impl StrategyFactory for DialectStrategyFactory {
    fn create(&self, kind: StrategyKind, bundle: Bundle) -> Box<dyn GenerationStrategy> {
        match kind {
            StrategyKind::Default => Box::new(DefaultStrategy::new(bundle, self.ports.clone())),
            StrategyKind::FrameworkAware => {
                Box::new(FrameworkStrategy::new(bundle, self.ports.clone()))
            }
        }
    }
}
