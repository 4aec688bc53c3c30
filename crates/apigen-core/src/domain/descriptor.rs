//! Scanner output.
//!
//! A [`ResourceDescriptor`] is what the external scanner reports for one
//! annotated class: its mapping, its operations, and the models it exposes.
//! Descriptors are dialect-neutral; each generation strategy decides which
//! fields carry meaning for its annotation convention.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::model::{ModelDefinition, Parameter, Response};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ResourceDescriptor {
    /// Class name of the controller or resource.
    pub controller: Option<String>,
    /// Resource path (generic dialect).
    pub path: Option<String>,
    /// Controller request mapping (framework dialect).
    pub mapping: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub operations: Vec<OperationDescriptor>,
    pub definitions: BTreeMap<String, ModelDefinition>,
    /// File the descriptor was read from, filled in by the scanner.
    #[serde(skip)]
    pub origin: Option<PathBuf>,
}

impl ResourceDescriptor {
    /// Where this descriptor came from, for error messages.
    pub fn origin_display(&self) -> String {
        match (&self.origin, &self.controller) {
            (Some(path), _) => path.display().to_string(),
            (None, Some(controller)) => controller.clone(),
            (None, None) => "<unnamed resource>".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OperationDescriptor {
    /// Single verb (generic dialect).
    pub method: Option<String>,
    /// Verb list of a request mapping (framework dialect).
    pub methods: Vec<String>,
    pub path: Option<String>,
    pub mapping: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    #[serde(alias = "operationId")]
    pub operation_id: Option<String>,
    pub tags: Vec<String>,
    pub parameters: Vec<Parameter>,
    pub responses: BTreeMap<String, Response>,
    pub deprecated: bool,
}
