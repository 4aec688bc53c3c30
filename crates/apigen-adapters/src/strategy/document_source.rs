//! State and stages shared by both generation strategies.
//!
//! A strategy differs only in how it turns a [`ResourceDescriptor`] into
//! operations; loading overrides, collecting the model, rendering and
//! emission are the same for every dialect.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use apigen_core::{
    application::{
        GenerationError,
        ports::{Filesystem, SourceScanner, TemplateRenderer},
    },
    domain::{
        ApiModel, Bundle, ModelOverrides, Operation, OutputFormat, RenderContext,
        ResourceDescriptor, SpecificationDocument,
    },
    error::{RunError, RunResult},
};

/// Adapters a strategy needs, shared by every strategy of a run.
#[derive(Clone)]
pub struct StrategyPorts {
    pub scanner: Arc<dyn SourceScanner>,
    pub filesystem: Arc<dyn Filesystem>,
    pub renderer: Arc<dyn TemplateRenderer>,
}

/// One bundle's accumulated model plus the stages operating on it.
pub struct DocumentSource {
    bundle: Bundle,
    ports: StrategyPorts,
    overrides: ModelOverrides,
    model: ApiModel,
    loaded: bool,
}

impl DocumentSource {
    pub fn new(bundle: Bundle, ports: StrategyPorts) -> Self {
        Self {
            bundle,
            ports,
            overrides: ModelOverrides::new(),
            model: ApiModel::new(),
            loaded: false,
        }
    }

    pub fn bundle(&self) -> &Bundle {
        &self.bundle
    }

    pub fn model(&self) -> &ApiModel {
        &self.model
    }

    /// Read the bundle's model-substitute file, if any.
    #[instrument(skip_all)]
    pub fn load_overriding_models(&mut self) -> RunResult<()> {
        let Some(path) = self.bundle.model_substitute() else {
            return Ok(());
        };

        let overrides_error = |reason: String| GenerationError::Overrides {
            path: path.to_path_buf(),
            reason,
        };
        let text = self
            .ports
            .filesystem
            .read_to_string(path)
            .map_err(|e| overrides_error(e.to_string()))?;
        self.overrides = ModelOverrides::parse(&text).map_err(overrides_error)?;

        debug!(count = self.overrides.len(), "Loaded model overrides");
        Ok(())
    }

    /// Scan the bundle's locations and build the model with `translate`.
    ///
    /// Duplicate path and method pairs fail the stage. Model definitions are
    /// first-wins across descriptors.
    #[instrument(skip_all)]
    pub fn load_documents<F>(&mut self, translate: F) -> RunResult<()>
    where
        F: Fn(&ResourceDescriptor) -> Result<Vec<Operation>, GenerationError>,
    {
        let descriptors = self.ports.scanner.scan(self.bundle.locations())?;

        for descriptor in &descriptors {
            if let Some(description) = &descriptor.description {
                for tag in &descriptor.tags {
                    self.model.add_tag(tag.clone(), Some(description.clone()));
                }
            }

            for operation in translate(descriptor)? {
                let (method, path) = (operation.method, operation.path.clone());
                if !self.model.add_operation(operation) {
                    return Err(GenerationError::DuplicateOperation {
                        method: method.to_string(),
                        path,
                    }
                    .into());
                }
            }

            for (name, definition) in &descriptor.definitions {
                if !self.model.add_definition(name.clone(), definition.clone()) {
                    debug!(model = %name, origin = %descriptor.origin_display(), "Model already defined; keeping first");
                }
            }
        }

        self.model.finalize_references(&self.overrides);
        self.loaded = true;

        info!(
            resources = descriptors.len(),
            operations = self.model.operation_count(),
            definitions = self.model.definitions().len(),
            "Documents loaded"
        );
        Ok(())
    }

    /// Render the bundle's template into `output_path`.
    #[instrument(skip_all)]
    pub fn render_templates(&mut self) -> RunResult<()> {
        self.require_loaded("render_templates")?;

        let template_path = self.bundle.template_path().ok_or_else(|| GenerationError::Rendering {
            reason: "no `template_path` configured".into(),
        })?;
        let output_path = self.bundle.output_path().ok_or_else(|| GenerationError::Rendering {
            reason: format!(
                "`template_path` {} is set but `output_path` is not",
                template_path.display()
            ),
        })?;

        let rendering = |e: RunError| GenerationError::Rendering {
            reason: e.to_string(),
        };
        let template = self
            .ports
            .filesystem
            .read_to_string(template_path)
            .map_err(rendering)?;
        let context = RenderContext::for_bundle(&self.bundle, &self.model);
        let rendered = self
            .ports
            .renderer
            .render(&template, &context)
            .map_err(rendering)?;
        self.ports
            .filesystem
            .write_file(output_path, &rendered)
            .map_err(rendering)?;

        info!(output = %output_path.display(), "Documentation rendered");
        Ok(())
    }

    /// Write the specification document, one file per output format.
    #[instrument(skip_all, fields(base_path = %base_path))]
    pub fn emit_specification(&mut self, base_path: &str) -> RunResult<()> {
        self.require_loaded("emit_specification")?;

        let document = SpecificationDocument::assemble(&self.bundle, &self.model, base_path);
        let directory = self.bundle.swagger_directory();
        if !self.ports.filesystem.exists(directory) {
            self.ports.filesystem.create_dir_all(directory)?;
        }

        for (format, path) in self
            .bundle
            .output_formats()
            .iter()
            .zip(self.bundle.spec_paths())
        {
            let content = serialize(&document, *format)?;
            self.ports
                .filesystem
                .write_file(&path, &content)
                .map_err(|e| GenerationError::Emission {
                    reason: e.to_string(),
                })?;
            info!(path = %path.display(), format = %format, "Specification written");
        }
        Ok(())
    }

    fn require_loaded(&self, stage: &'static str) -> Result<(), GenerationError> {
        if self.loaded {
            Ok(())
        } else {
            Err(GenerationError::StageOrder { stage })
        }
    }
}

fn serialize(document: &SpecificationDocument, format: OutputFormat) -> Result<String, GenerationError> {
    let emission = |reason: String| GenerationError::Emission { reason };
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(document)
            .map(|mut json| {
                json.push('\n');
                json
            })
            .map_err(|e| emission(e.to_string())),
        OutputFormat::Yaml => serde_yaml::to_string(document).map_err(|e| emission(e.to_string())),
    }
}
