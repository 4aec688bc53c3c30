//! Upstream library capability registry.
//!
//! apigen drives an external annotation scanner, and only one generation of
//! the upstream spec/annotation library produces Swagger 2.0 models. Older
//! generations are recognised in two ways:
//!
//! - **Legacy markers**: type names that exist only in an obsolete release.
//!   Each is described once in [`LEGACY_MARKERS`].
//! - **Declared version**: when the environment announces the spec library's
//!   version, it must fall inside [`SUPPORTED_SPEC_LIBRARY`].
//!
//! # Adding a New Legacy Release
//!
//! 1. Add one [`LegacyMarker`] entry to [`LEGACY_MARKERS`]
//! 2. The guard iterates the registry in order, nothing else changes

use std::fmt;
use std::str::FromStr;

use crate::domain::error::CompatibilityError;

// ── Legacy markers ───────────────────────────────────────────────────────────

/// A type name uniquely associated with an unsupported library release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyMarker {
    /// Fully qualified type name probed in the runtime environment.
    pub type_name: &'static str,

    /// Human-readable name of the release the marker identifies.
    pub legacy: &'static str,

    /// What apigen supports instead; quoted in the error message.
    pub supported: &'static str,
}

/// Known obsolete releases, checked in this order.
pub static LEGACY_MARKERS: &[LegacyMarker] = &[
    LegacyMarker {
        type_name: "com.wordnik.swagger.annotations.ApiErrors",
        legacy: "Swagger spec 1.1 / swagger-core 1.1.x",
        supported: "swagger-core 1.3.x and later",
    },
    LegacyMarker {
        type_name: "com.wordnik.swagger.model.ApiListing",
        legacy: "Swagger spec 1.2 / swagger-core 1.3.x",
        supported: "Swagger spec 2.0 (swagger-core 1.5.x)",
    },
];

/// Return the first registered marker the environment can resolve.
pub fn find_legacy_marker(resolves: impl Fn(&str) -> bool) -> Option<&'static LegacyMarker> {
    LEGACY_MARKERS.iter().find(|marker| resolves(marker.type_name))
}

// ── Versions ─────────────────────────────────────────────────────────────────

/// `major.minor.patch`; missing components read as zero and any qualifier
/// after `-` or `+` is ignored (`1.5.10-SNAPSHOT` → `1.5.10`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LibraryVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl LibraryVersion {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for LibraryVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for LibraryVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let core = s
            .trim()
            .split(['-', '+'])
            .next()
            .unwrap_or_default();
        if core.is_empty() {
            return Err(format!("empty version '{s}'"));
        }

        let mut parts = [0u64; 3];
        for (i, piece) in core.split('.').enumerate() {
            if i >= parts.len() {
                return Err(format!("too many components in '{s}'"));
            }
            parts[i] = piece
                .parse()
                .map_err(|_| format!("non-numeric component '{piece}' in '{s}'"))?;
        }

        Ok(Self::new(parts[0], parts[1], parts[2]))
    }
}

/// Half-open version range `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionRange {
    pub min: LibraryVersion,
    pub max: LibraryVersion,
}

impl VersionRange {
    pub fn contains(&self, version: LibraryVersion) -> bool {
        version >= self.min && version < self.max
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ">={}, <{}", self.min, self.max)
    }
}

/// swagger-core 1.5.x is the release line that models Swagger spec 2.0.
pub const SUPPORTED_SPEC_LIBRARY: VersionRange = VersionRange {
    min: LibraryVersion::new(1, 5, 0),
    max: LibraryVersion::new(2, 0, 0),
};

/// The spec library as declared by the runtime environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryInfo {
    pub name: String,
    pub version: String,
}

/// Check a declared spec-library version against [`SUPPORTED_SPEC_LIBRARY`].
pub fn check_declared_version(library: &LibraryInfo) -> Result<(), CompatibilityError> {
    let version: LibraryVersion =
        library
            .version
            .parse()
            .map_err(|_| CompatibilityError::InvalidVersion {
                library: library.name.clone(),
                version: library.version.clone(),
            })?;

    if SUPPORTED_SPEC_LIBRARY.contains(version) {
        Ok(())
    } else {
        Err(CompatibilityError::UnsupportedVersion {
            library: library.name.clone(),
            version: library.version.clone(),
            range: SUPPORTED_SPEC_LIBRARY.to_string(),
        })
    }
}
