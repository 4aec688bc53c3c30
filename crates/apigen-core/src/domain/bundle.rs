//! Bundle configuration.
//!
//! A bundle describes one API surface: the metadata the specification
//! requires, the locations the scanner must examine, and where the
//! generated artifacts go.
//!
//! Two shapes exist:
//!
//! - [`BundleConfig`] is what the user wrote. Every field is optional because
//!   deserialisation must succeed on incomplete input so that validation can
//!   report *which* rule was violated.
//! - [`Bundle`] is the validated, immutable value. It can only be produced by
//!   [`ConfigValidator`](crate::domain::ConfigValidator), so holding one proves
//!   every mandatory-field rule held at construction time.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Directory receiving the specification document when neither
/// `swagger_directory` nor `output_path` is configured.
pub const DEFAULT_SWAGGER_DIRECTORY: &str = "generated/swagger-ui";

/// File stem of the specification document when `swagger_file_name` is unset.
pub const DEFAULT_SWAGGER_FILE_NAME: &str = "swagger";

/// Base path written to the document when the bundle declares none.
pub const DEFAULT_BASE_PATH: &str = "/";

// ── Dialect ──────────────────────────────────────────────────────────────────

/// Annotation convention followed by the scanned code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dialect {
    /// Plain resource annotations (JAX-RS style).
    #[default]
    Generic,
    /// Framework controller annotations (Spring MVC style).
    #[serde(alias = "springmvc", alias = "spring-mvc", alias = "framework_specific")]
    FrameworkSpecific,
}

impl Dialect {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::FrameworkSpecific => "framework-specific",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "generic" => Ok(Self::Generic),
            "framework-specific" | "framework_specific" | "springmvc" | "spring-mvc" => {
                Ok(Self::FrameworkSpecific)
            }
            other => Err(format!(
                "unknown dialect '{other}' (expected 'generic' or 'framework-specific')"
            )),
        }
    }
}

// ── OutputFormat / Scheme ────────────────────────────────────────────────────

/// Serialisation format of the specification document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    #[serde(alias = "yml")]
    Yaml,
}

impl OutputFormat {
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Transfer protocol advertised by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    Http,
    Https,
    Ws,
    Wss,
}

// ── Raw configuration ────────────────────────────────────────────────────────

/// One bundle exactly as configured.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BundleConfig {
    pub info: Option<InfoConfig>,
    #[serde(alias = "basePath")]
    pub base_path: Option<String>,
    #[serde(alias = "publishBasePathOverride")]
    pub publish_base_path_override: Option<String>,
    #[serde(alias = "outputPath")]
    pub output_path: Option<PathBuf>,
    #[serde(alias = "templatePath")]
    pub template_path: Option<PathBuf>,
    pub locations: Option<Vec<String>>,
    pub dialect: Dialect,
    pub host: Option<String>,
    pub schemes: Vec<Scheme>,
    #[serde(alias = "swaggerDirectory")]
    pub swagger_directory: Option<PathBuf>,
    #[serde(alias = "swaggerFileName")]
    pub swagger_file_name: Option<String>,
    #[serde(alias = "outputFormats")]
    pub output_formats: Vec<OutputFormat>,
    #[serde(alias = "modelSubstitute")]
    pub model_substitute: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfoConfig {
    pub title: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    #[serde(alias = "termsOfService")]
    pub terms_of_service: Option<String>,
    pub contact: Option<Contact>,
    pub license: Option<LicenseConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LicenseConfig {
    pub name: Option<String>,
    pub url: Option<String>,
}

impl BundleConfig {
    /// Directory the specification document is written to.
    pub fn resolved_swagger_directory(&self) -> PathBuf {
        resolve_swagger_directory(
            self.swagger_directory.as_deref(),
            non_empty_path(self.output_path.as_deref()).as_deref(),
        )
    }

    /// Every specification file this bundle would write.
    pub fn resolved_spec_paths(&self) -> Vec<PathBuf> {
        spec_paths(
            &self.resolved_swagger_directory(),
            self.swagger_file_name
                .as_deref()
                .filter(|name| !name.trim().is_empty())
                .unwrap_or(DEFAULT_SWAGGER_FILE_NAME),
            &effective_formats(&self.output_formats),
        )
    }
}

// ── Validated bundle ─────────────────────────────────────────────────────────

/// Contact block of the specification info.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct License {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Validated specification metadata. `title` and `version` are guaranteed
/// non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Info {
    pub title: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms_of_service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
}

/// A bundle that passed every mandatory-field rule.
///
/// Immutable: all fields are private and only readable through accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct Bundle {
    info: Info,
    base_path: String,
    publish_base_path_override: Option<String>,
    output_path: Option<PathBuf>,
    template_path: Option<PathBuf>,
    locations: Vec<String>,
    dialect: Dialect,
    host: Option<String>,
    schemes: Vec<Scheme>,
    swagger_directory: PathBuf,
    swagger_file_name: String,
    output_formats: Vec<OutputFormat>,
    model_substitute: Option<PathBuf>,
}

impl Bundle {
    /// Build from a raw config whose required fields were already checked.
    pub(crate) fn from_checked(
        config: &BundleConfig,
        info: Info,
        locations: Vec<String>,
    ) -> Self {
        Self {
            info,
            base_path: non_empty(config.base_path.as_deref())
                .unwrap_or(DEFAULT_BASE_PATH)
                .to_string(),
            publish_base_path_override: non_empty(config.publish_base_path_override.as_deref())
                .map(str::to_string),
            output_path: non_empty_path(config.output_path.as_deref()),
            template_path: non_empty_path(config.template_path.as_deref()),
            locations,
            dialect: config.dialect,
            host: non_empty(config.host.as_deref()).map(str::to_string),
            schemes: config.schemes.clone(),
            swagger_directory: config.resolved_swagger_directory(),
            swagger_file_name: non_empty(config.swagger_file_name.as_deref())
                .unwrap_or(DEFAULT_SWAGGER_FILE_NAME)
                .to_string(),
            output_formats: effective_formats(&config.output_formats),
            model_substitute: non_empty_path(config.model_substitute.as_deref()),
        }
    }

    pub fn info(&self) -> &Info {
        &self.info
    }

    pub fn title(&self) -> &str {
        &self.info.title
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn publish_base_path_override(&self) -> Option<&str> {
        self.publish_base_path_override.as_deref()
    }

    /// The override when present, the configured base path otherwise.
    pub fn effective_base_path(&self) -> &str {
        self.publish_base_path_override
            .as_deref()
            .unwrap_or(&self.base_path)
    }

    pub fn output_path(&self) -> Option<&Path> {
        self.output_path.as_deref()
    }

    pub fn template_path(&self) -> Option<&Path> {
        self.template_path.as_deref()
    }

    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    pub fn schemes(&self) -> &[Scheme] {
        &self.schemes
    }

    pub fn swagger_directory(&self) -> &Path {
        &self.swagger_directory
    }

    pub fn swagger_file_name(&self) -> &str {
        &self.swagger_file_name
    }

    pub fn output_formats(&self) -> &[OutputFormat] {
        &self.output_formats
    }

    pub fn model_substitute(&self) -> Option<&Path> {
        self.model_substitute.as_deref()
    }

    /// Specification files written by the emission stage, one per format.
    pub fn spec_paths(&self) -> Vec<PathBuf> {
        spec_paths(
            &self.swagger_directory,
            &self.swagger_file_name,
            &self.output_formats,
        )
    }
}

// ── Output collisions ────────────────────────────────────────────────────────

/// Two or more bundles that would write the same file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputCollision {
    pub path: PathBuf,
    /// Zero-based positions of the colliding bundles in configuration order.
    pub bundles: Vec<usize>,
}

/// Find artifact paths claimed by more than one bundle.
///
/// Null entries are skipped; they fail validation later anyway.
pub fn find_output_collisions(configs: &[Option<BundleConfig>]) -> Vec<OutputCollision> {
    let mut claims: BTreeMap<PathBuf, Vec<usize>> = BTreeMap::new();

    for (index, config) in configs.iter().enumerate() {
        let Some(config) = config else { continue };

        let mut paths = config.resolved_spec_paths();
        if let Some(output) = non_empty_path(config.output_path.as_deref()) {
            paths.push(output);
        }
        paths.sort();
        paths.dedup();

        for path in paths {
            claims.entry(path).or_default().push(index);
        }
    }

    claims
        .into_iter()
        .filter(|(_, bundles)| bundles.len() > 1)
        .map(|(path, bundles)| OutputCollision { path, bundles })
        .collect()
}

// ── helpers ──────────────────────────────────────────────────────────────────

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Blank or whitespace-only paths count as unset.
fn non_empty_path(value: Option<&Path>) -> Option<PathBuf> {
    value
        .filter(|path| !path.to_string_lossy().trim().is_empty())
        .map(Path::to_path_buf)
}

fn resolve_swagger_directory(configured: Option<&Path>, output_path: Option<&Path>) -> PathBuf {
    if let Some(dir) = non_empty_path(configured) {
        return dir;
    }
    output_path
        .and_then(Path::parent)
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SWAGGER_DIRECTORY))
}

fn effective_formats(configured: &[OutputFormat]) -> Vec<OutputFormat> {
    if configured.is_empty() {
        return vec![OutputFormat::Json];
    }
    let mut formats = configured.to_vec();
    formats.sort();
    formats.dedup();
    formats
}

fn spec_paths(dir: &Path, file_name: &str, formats: &[OutputFormat]) -> Vec<PathBuf> {
    formats
        .iter()
        .map(|format| dir.join(format!("{file_name}.{}", format.extension())))
        .collect()
}
