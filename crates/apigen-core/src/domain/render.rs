//! Variables available to documentation templates.

use std::collections::HashMap;

use crate::domain::{bundle::Bundle, model::ApiModel};

/// Context for template rendering.
///
/// A value object holding every variable a documentation template may use.
/// Immutable after creation; [`RenderContext::with_variable`] returns a new
/// instance.
///
/// ## Built-in Variables
///
/// | Variable | Example | Source |
/// |----------|---------|--------|
/// | `TITLE` | "Petstore" | `info.title` |
/// | `VERSION` | "1.0.0" | `info.version` |
/// | `DESCRIPTION` | "Pets API" | `info.description` (empty if unset) |
/// | `BASE_PATH` | "/v1" | configured base path |
/// | `HOST` | "api.example.com" | `host` (empty if unset) |
/// | `ENDPOINTS` | "GET /pets - List pets" | one line per operation |
/// | `ENDPOINT_COUNT` | "3" | number of operations |
/// | `GENERATOR_VERSION` | "0.1.0" | apigen version |
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    /// Empty context; placeholders render unchanged.
    pub fn new() -> Self {
        Self {
            variables: HashMap::new(),
        }
    }

    /// Context with the built-in variables derived from a bundle and its
    /// loaded model.
    pub fn for_bundle(bundle: &Bundle, model: &ApiModel) -> Self {
        let info = bundle.info();
        let endpoints: Vec<String> = model
            .operations()
            .map(|op| match &op.summary {
                Some(summary) => format!("{} {} - {}", op.method, op.path, summary),
                None => format!("{} {}", op.method, op.path),
            })
            .collect();

        Self::new()
            .with_variable("TITLE", &info.title)
            .with_variable("VERSION", &info.version)
            .with_variable("DESCRIPTION", info.description.as_deref().unwrap_or_default())
            .with_variable("BASE_PATH", bundle.base_path())
            .with_variable("HOST", bundle.host().unwrap_or_default())
            .with_variable("ENDPOINTS", endpoints.join("\n"))
            .with_variable("ENDPOINT_COUNT", model.operation_count().to_string())
            .with_variable("GENERATOR_VERSION", crate::VERSION)
    }

    /// Add a custom variable, consuming self and returning a new context.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Get a variable value if it exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// # Edge Cases
    ///
    /// - `{{UNKNOWN}}` → remains as literal `{{UNKNOWN}}` (no error)
    /// - `{{TITLE}}{{TITLE}}` → both replaced
    /// - Substituted values are not rescanned, so a value containing
    ///   `{{...}}` is emitted verbatim
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            match after.find("}}") {
                Some(end) => {
                    let key = &after[..end];
                    match self.get(key.trim()) {
                        Some(value) => out.push_str(value),
                        None => {
                            out.push_str("{{");
                            out.push_str(key);
                            out.push_str("}}");
                        }
                    }
                    rest = &after[end + 2..];
                }
                None => {
                    out.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);
        out
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new()
    }
}
