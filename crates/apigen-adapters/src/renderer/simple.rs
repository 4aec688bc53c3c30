//! Simple variable substitution renderer.

use apigen_core::{
    application::ports::TemplateRenderer, domain::RenderContext, error::RunResult,
};
use tracing::{instrument, warn};

/// Simple renderer using basic `{{VARIABLE}}` substitution.
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SimpleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip_all, fields(len = template.len()))]
    fn render(&self, template: &str, context: &RenderContext) -> RunResult<String> {
        let rendered = context.render(template);

        let unresolved = unresolved_placeholders(&rendered);
        if !unresolved.is_empty() {
            warn!(placeholders = ?unresolved, "Template has unknown placeholders; left as-is");
        }

        Ok(rendered)
    }
}

fn unresolved_placeholders(text: &str) -> Vec<&str> {
    let mut found = Vec::new();
    let mut rest = text;
    while let Some(start) = rest.find("{{") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else { break };
        found.push(after[..end].trim());
        rest = &after[end + 2..];
    }
    found
}
