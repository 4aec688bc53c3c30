//! The internal API model a generation strategy accumulates.
//!
//! Value types here serialise directly into the Swagger 2.0 document shape,
//! so the emission stage does no field-by-field translation.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Prefix of a local model reference in a Swagger 2.0 document.
pub const DEFINITIONS_PREFIX: &str = "#/definitions/";

// ── HttpMethod ───────────────────────────────────────────────────────────────

/// Operation verbs, ordered as they appear in a path item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
}

impl HttpMethod {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Put => "PUT",
            Self::Post => "POST",
            Self::Delete => "DELETE",
            Self::Options => "OPTIONS",
            Self::Head => "HEAD",
            Self::Patch => "PATCH",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "PUT" => Ok(Self::Put),
            "POST" => Ok(Self::Post),
            "DELETE" => Ok(Self::Delete),
            "OPTIONS" => Ok(Self::Options),
            "HEAD" => Ok(Self::Head),
            "PATCH" => Ok(Self::Patch),
            other => Err(format!("unknown HTTP method '{other}'")),
        }
    }
}

// ── Schemas ──────────────────────────────────────────────────────────────────

/// A type reference or inline primitive schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Schema {
    #[serde(rename = "$ref", alias = "ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Schema {
    /// Apply `f` to every reference in this schema, including nested items.
    fn rewrite_references(&mut self, f: &impl Fn(&str) -> String) {
        self.reference = self.reference.as_deref().map(f);
        if let Some(items) = &mut self.items {
            items.rewrite_references(f);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterLocation {
    #[serde(rename = "path")]
    Path,
    #[serde(rename = "query")]
    Query,
    #[serde(rename = "header")]
    Header,
    #[serde(rename = "body")]
    Body,
    #[serde(rename = "formData", alias = "form")]
    FormData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Schema>,
    /// Body parameters only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Response {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelDefinition {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Schema>,
}

impl Default for ModelDefinition {
    fn default() -> Self {
        Self {
            kind: "object".into(),
            description: None,
            required: Vec::new(),
            properties: BTreeMap::new(),
        }
    }
}

// ── Operations ───────────────────────────────────────────────────────────────

/// One resolved operation. `method` and `path` locate it in the document and
/// are not serialised as fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(skip)]
    pub method: HttpMethod,
    #[serde(skip)]
    pub path: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    pub responses: BTreeMap<String, Response>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub deprecated: bool,
}

// ── Model overrides ──────────────────────────────────────────────────────────

/// Model substitutions applied to every schema reference.
///
/// Text form, one pair per line: `com.example.Money : java.lang.String`.
/// Blank lines and `#` comments are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelOverrides {
    substitutions: BTreeMap<String, String>,
}

impl ModelOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the text form. The error names the offending line (1-based).
    pub fn parse(text: &str) -> Result<Self, String> {
        let mut overrides = Self::new();
        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (from, to) = line
                .split_once(':')
                .map(|(from, to)| (from.trim(), to.trim()))
                .filter(|(from, to)| !from.is_empty() && !to.is_empty())
                .ok_or_else(|| {
                    format!("line {}: expected `From : To`, found '{line}'", index + 1)
                })?;
            overrides.insert(from, to);
        }
        Ok(overrides)
    }

    pub fn insert(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.substitutions.insert(from.into(), to.into());
    }

    /// Substitute a model name. Substitutions do not chain.
    pub fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        self.substitutions
            .get(name)
            .map(String::as_str)
            .unwrap_or(name)
    }

    pub fn len(&self) -> usize {
        self.substitutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.substitutions.is_empty()
    }
}

// ── ApiModel ─────────────────────────────────────────────────────────────────

/// Operations, definitions and tags collected for one bundle.
///
/// Operations are keyed by `(path, method)` so iteration order is stable and
/// duplicates are detected on insert.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiModel {
    operations: BTreeMap<(String, HttpMethod), Operation>,
    definitions: BTreeMap<String, ModelDefinition>,
    tags: BTreeMap<String, Option<String>>,
}

impl ApiModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an operation. Returns `false`, leaving the model unchanged, if
    /// the same path and method are already present.
    pub fn add_operation(&mut self, operation: Operation) -> bool {
        let key = (operation.path.clone(), operation.method);
        if self.operations.contains_key(&key) {
            return false;
        }
        for tag in &operation.tags {
            self.tags.entry(tag.clone()).or_insert(None);
        }
        self.operations.insert(key, operation);
        true
    }

    /// Insert a model definition. The first definition of a name wins;
    /// returns `false` if the name was already defined.
    pub fn add_definition(&mut self, name: impl Into<String>, definition: ModelDefinition) -> bool {
        let name = name.into();
        if self.definitions.contains_key(&name) {
            return false;
        }
        self.definitions.insert(name, definition);
        true
    }

    /// Register a tag; a later description fills in a missing one.
    pub fn add_tag(&mut self, name: impl Into<String>, description: Option<String>) {
        let slot = self.tags.entry(name.into()).or_insert(None);
        if slot.is_none() {
            *slot = description;
        }
    }

    /// Substitute overridden models and normalise every reference to
    /// `#/definitions/<Name>`.
    pub fn finalize_references(&mut self, overrides: &ModelOverrides) {
        let rewrite = |reference: &str| {
            let bare = reference
                .strip_prefix(DEFINITIONS_PREFIX)
                .unwrap_or(reference);
            format!("{DEFINITIONS_PREFIX}{}", overrides.resolve(bare))
        };

        for operation in self.operations.values_mut() {
            for parameter in &mut operation.parameters {
                if let Some(schema) = &mut parameter.schema {
                    schema.rewrite_references(&rewrite);
                }
                if let Some(items) = &mut parameter.items {
                    items.rewrite_references(&rewrite);
                }
            }
            for response in operation.responses.values_mut() {
                if let Some(schema) = &mut response.schema {
                    schema.rewrite_references(&rewrite);
                }
            }
        }
        for definition in self.definitions.values_mut() {
            for property in definition.properties.values_mut() {
                property.rewrite_references(&rewrite);
            }
        }
    }

    pub fn operations(&self) -> impl Iterator<Item = &Operation> {
        self.operations.values()
    }

    pub fn operation_count(&self) -> usize {
        self.operations.len()
    }

    pub fn definitions(&self) -> &BTreeMap<String, ModelDefinition> {
        &self.definitions
    }

    pub fn tags(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.tags
            .iter()
            .map(|(name, description)| (name.as_str(), description.as_deref()))
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty() && self.definitions.is_empty()
    }

    /// Operations grouped into Swagger path items.
    pub fn paths(&self) -> BTreeMap<String, BTreeMap<HttpMethod, Operation>> {
        let mut paths: BTreeMap<String, BTreeMap<HttpMethod, Operation>> = BTreeMap::new();
        for ((path, method), operation) in &self.operations {
            paths
                .entry(path.clone())
                .or_default()
                .insert(*method, operation.clone());
        }
        paths
    }
}

/// Join two path segments into a normalised absolute path.
///
/// Leading slash guaranteed, duplicate and trailing slashes removed:
/// `("/pets/", "{id}")` → `/pets/{id}`, `(None, None)` → `/`.
pub fn join_paths(prefix: Option<&str>, suffix: Option<&str>) -> String {
    let segments: Vec<&str> = [prefix, suffix]
        .into_iter()
        .flatten()
        .flat_map(|part| part.split('/'))
        .filter(|segment| !segment.is_empty())
        .collect();

    format!("/{}", segments.join("/"))
}
