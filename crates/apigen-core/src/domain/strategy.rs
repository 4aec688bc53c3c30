//! Strategy selection.
//!
//! The set of generation strategies is closed: one variant per [`Dialect`].
//! Selection is a pure, exhaustive match on the bundle's dialect tag, so a new
//! dialect cannot be added without the compiler pointing here.

use std::fmt;

use serde::Serialize;

use crate::domain::bundle::{Bundle, Dialect};

/// Identity of a generation strategy variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// Generic annotation reader.
    Default,
    /// Framework-aware controller reader.
    FrameworkAware,
}

impl StrategyKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::FrameworkAware => "framework-aware",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Dialect> for StrategyKind {
    fn from(dialect: Dialect) -> Self {
        match dialect {
            Dialect::Generic => Self::Default,
            Dialect::FrameworkSpecific => Self::FrameworkAware,
        }
    }
}

/// Maps a validated bundle to the strategy variant that must drive it.
pub struct StrategySelector;

impl StrategySelector {
    pub fn select(bundle: &Bundle) -> StrategyKind {
        StrategyKind::from(bundle.dialect())
    }
}
