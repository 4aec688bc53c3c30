//! Environment with fixed answers, for tests and embedding.

use apigen_core::{application::ports::RuntimeEnvironment, domain::LibraryInfo};

#[derive(Debug, Clone, Default)]
pub struct StaticEnvironment {
    library: Option<LibraryInfo>,
    types: Vec<String>,
}

impl StaticEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_library(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.library = Some(LibraryInfo {
            name: name.into(),
            version: version.into(),
        });
        self
    }

    pub fn with_type(mut self, name: impl Into<String>) -> Self {
        self.types.push(name.into());
        self
    }
}

impl RuntimeEnvironment for StaticEnvironment {
    fn spec_library(&self) -> Option<LibraryInfo> {
        self.library.clone()
    }

    fn resolves_type(&self, name: &str) -> bool {
        self.types.iter().any(|t| t == name)
    }
}
