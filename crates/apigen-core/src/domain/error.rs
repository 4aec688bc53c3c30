// ============================================================================
// domain/error.rs - CONFIGURATION AND COMPATIBILITY ERRORS
// ============================================================================

use thiserror::Error;

/// A bundle list or a single bundle violates a mandatory-field rule.
///
/// Every variant names the missing field and the rule that requires it.
/// The messages are user-facing and stable; tests match on them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("at least one bundle is required: configure one or more `<api_sources>` entries")]
    NoBundles,

    #[error("an `<api_sources>` entry is empty; every bundle must be configured")]
    MissingBundle,

    #[error("`<info>` is required by Swagger Spec.")]
    MissingInfo,

    #[error("`<info><title>` is required by Swagger Spec.")]
    MissingTitle,

    #[error("`<info><version>` is required by Swagger Spec.")]
    MissingVersion,

    #[error("`<info><license><name>` is required by Swagger Spec.")]
    MissingLicenseName,

    #[error("`<locations>` is required by apigen.")]
    MissingLocations,
}

impl ConfigurationError {
    /// Dotted path of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::NoBundles => "api_sources",
            Self::MissingBundle => "api_sources[]",
            Self::MissingInfo => "info",
            Self::MissingTitle => "info.title",
            Self::MissingVersion => "info.version",
            Self::MissingLicenseName => "info.license.name",
            Self::MissingLocations => "locations",
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NoBundles | Self::MissingBundle => vec![
                "Declare at least one bundle under `api_sources:`".into(),
                "Run `apigen init` to write a starter configuration".into(),
            ],
            Self::MissingLocations => vec![
                "List the packages or classes to scan under `locations:`".into(),
                "Example: locations: [\"com.example.api\"]".into(),
            ],
            other => vec![format!(
                "Add `{}` to the bundle; the Swagger 2.0 spec requires it",
                other.field()
            )],
        }
    }
}

/// The runtime environment carries an upstream library apigen cannot drive.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompatibilityError {
    #[error(
        "You may use an old version of swagger ({legacy}, detected via `{marker}`), \
         which is not supported; apigen only supports {supported}"
    )]
    LegacyLibrary {
        marker: &'static str,
        legacy: &'static str,
        supported: &'static str,
    },

    #[error("{library} {version} is not supported; apigen requires {library} {range}")]
    UnsupportedVersion {
        library: String,
        version: String,
        range: String,
    },

    #[error("{library} declares an unreadable version '{version}'")]
    InvalidVersion { library: String, version: String },
}

impl CompatibilityError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::LegacyLibrary { marker, .. } => vec![
                format!("Remove the dependency providing `{marker}`"),
                "Upgrade to swagger-core 1.5.x (Swagger spec 2.0)".into(),
            ],
            Self::UnsupportedVersion { range, .. } => vec![
                format!("Pin the spec library to a version in {range}"),
            ],
            Self::InvalidVersion { .. } => vec![
                "Check the `version` entry of the dependency manifest".into(),
            ],
        }
    }
}
