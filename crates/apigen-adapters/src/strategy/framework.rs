//! Strategy for the framework-specific (controller) annotation dialect.
//!
//! Controllers carry a request `mapping`; handler methods carry their own
//! `mapping` and may accept several HTTP verbs. Plain `path` fields are
//! honoured as a fallback so generic descriptors still load.

use apigen_core::{
    application::{GenerationError, ports::GenerationStrategy},
    domain::{
        Bundle, HttpMethod, Operation, OperationDescriptor, ResourceDescriptor, StrategyKind,
        join_paths,
    },
    error::RunResult,
};

use super::document_source::{DocumentSource, StrategyPorts};

pub struct FrameworkStrategy {
    source: DocumentSource,
}

impl FrameworkStrategy {
    pub fn new(bundle: Bundle, ports: StrategyPorts) -> Self {
        Self {
            source: DocumentSource::new(bundle, ports),
        }
    }
}

impl GenerationStrategy for FrameworkStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::FrameworkAware
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

fn translate(controller: &ResourceDescriptor) -> Result<Vec<Operation>, GenerationError> {
    let prefix = controller.mapping.as_deref().or(controller.path.as_deref());
    let default_tags = controller_tags(controller);

    let mut operations = Vec::new();
    for handler in &controller.operations {
        let path = join_paths(prefix, handler.mapping.as_deref().or(handler.path.as_deref()));
        let methods = handler_methods(handler).map_err(|reason| {
            GenerationError::InvalidDescriptor {
                file: controller.origin_display(),
                reason,
            }
        })?;
        let tags = if handler.tags.is_empty() {
            default_tags.clone()
        } else {
            handler.tags.clone()
        };

        let expanded = methods.len() > 1;
        for method in methods {
            let operation_id = handler.operation_id.as_ref().map(|id| {
                if expanded {
                    format!("{id}_{}", method.as_str().to_ascii_lowercase())
                } else {
                    id.clone()
                }
            });
            operations.push(Operation {
                method,
                path: path.clone(),
                tags: tags.clone(),
                summary: handler.summary.clone(),
                description: handler.description.clone(),
                operation_id,
                parameters: handler.parameters.clone(),
                responses: handler.responses.clone(),
                deprecated: handler.deprecated,
            });
        }
    }
    Ok(operations)
}

/// Explicit tags, else the controller's simple class name.
fn controller_tags(controller: &ResourceDescriptor) -> Vec<String> {
    if !controller.tags.is_empty() {
        return controller.tags.clone();
    }
    controller
        .controller
        .as_deref()
        .and_then(|name| name.rsplit('.').next())
        .filter(|name| !name.is_empty())
        .map(|name| vec![name.to_string()])
        .unwrap_or_default()
}

/// Verbs a handler accepts: `methods`, else `method`, else `GET`.
fn handler_methods(handler: &OperationDescriptor) -> Result<Vec<HttpMethod>, String> {
    let declared: Vec<&str> = if handler.methods.is_empty() {
        handler.method.as_deref().into_iter().collect()
    } else {
        handler.methods.iter().map(String::as_str).collect()
    };

    if declared.is_empty() {
        return Ok(vec![HttpMethod::Get]);
    }

    let mut methods = declared
        .into_iter()
        .map(str::parse)
        .collect::<Result<Vec<HttpMethod>, String>>()?;
    methods.sort();
    methods.dedup();
    Ok(methods)
}
