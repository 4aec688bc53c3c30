//! Runtime environment adapters.

mod fixed;
mod manifest;

pub use fixed::StaticEnvironment;
pub use manifest::{LibraryEntry, ManifestEnvironment, ManifestError};
