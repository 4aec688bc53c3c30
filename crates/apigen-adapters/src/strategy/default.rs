//! Strategy for the generic annotation dialect.
//!
//! Resources carry a `path`, operations a `path` relative to it and exactly
//! one `method`.

use apigen_core::{
    application::{GenerationError, ports::GenerationStrategy},
    domain::{Bundle, HttpMethod, Operation, ResourceDescriptor, StrategyKind, join_paths},
    error::RunResult,
};

use super::document_source::{DocumentSource, StrategyPorts};

pub struct DefaultStrategy {
    source: DocumentSource,
}

impl DefaultStrategy {
    pub fn new(bundle: Bundle, ports: StrategyPorts) -> Self {
        Self {
            source: DocumentSource::new(bundle, ports),
        }
    }
}

impl GenerationStrategy for DefaultStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Default
    }

    fn load_overriding_models(&mut self) -> RunResult<()> {
        self.source.load_overriding_models()
    }

    fn load_documents(&mut self) -> RunResult<()> {
        self.source.load_documents(translate)
    }

    fn render_templates(&mut self) -> RunResult<()> {
        self.source.render_templates()
    }

    fn emit_specification(&mut self, base_path: &str) -> RunResult<()> {
        self.source.emit_specification(base_path)
    }
}

fn translate(resource: &ResourceDescriptor) -> Result<Vec<Operation>, GenerationError> {
    resource
        .operations
        .iter()
        .map(|op| {
            let path = join_paths(resource.path.as_deref(), op.path.as_deref());
            let invalid = |reason: String| GenerationError::InvalidDescriptor {
                file: resource.origin_display(),
                reason,
            };

            let method: HttpMethod = op
                .method
                .as_deref()
                .ok_or_else(|| invalid(format!("operation on {path} has no `method`")))?
                .parse()
                .map_err(invalid)?;

            let tags = if op.tags.is_empty() {
                resource.tags.clone()
            } else {
                op.tags.clone()
            };

            Ok(Operation {
                method,
                path,
                tags,
                summary: op.summary.clone(),
                description: op.description.clone(),
                operation_id: op.operation_id.clone(),
                parameters: op.parameters.clone(),
                responses: op.responses.clone(),
                deprecated: op.deprecated,
            })
        })
        .collect()
}
