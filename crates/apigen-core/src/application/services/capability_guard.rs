//! Upstream library compatibility check.
//!
//! Runs once per run, before any bundle is looked at. A failure is terminal:
//! no bundle is processed.

use tracing::{debug, instrument, warn};

use crate::{
    application::ports::RuntimeEnvironment,
    domain::{
        CompatibilityError,
        capabilities::{check_declared_version, find_legacy_marker},
    },
};

/// Probes the runtime environment for unsupported spec-library versions.
pub struct CapabilityGuard<'a> {
    environment: &'a dyn RuntimeEnvironment,
}

impl<'a> CapabilityGuard<'a> {
    pub fn new(environment: &'a dyn RuntimeEnvironment) -> Self {
        Self { environment }
    }

    /// Fail if a legacy marker type resolves or the declared library
    /// version falls outside the supported range.
    ///
    /// Markers are checked first, in registry order.
    #[instrument(skip_all)]
    pub fn check_compatibility(&self) -> Result<(), CompatibilityError> {
        if let Some(marker) = find_legacy_marker(|name| self.environment.resolves_type(name)) {
            warn!(marker = marker.type_name, legacy = marker.legacy, "Legacy library detected");
            return Err(CompatibilityError::LegacyLibrary {
                marker: marker.type_name,
                legacy: marker.legacy,
                supported: marker.supported,
            });
        }

        match self.environment.spec_library() {
            Some(library) => {
                check_declared_version(&library)?;
                debug!(library = %library.name, version = %library.version, "Spec library supported");
            }
            None => debug!("No spec library declared; skipping version check"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockRuntimeEnvironment;
    use crate::domain::{LEGACY_MARKERS, LibraryInfo};

    fn environment(resolvable: Vec<&'static str>, library: Option<&str>) -> MockRuntimeEnvironment {
        let mut env = MockRuntimeEnvironment::new();
        env.expect_resolves_type()
            .returning(move |name| resolvable.iter().any(|r| *r == name));
        let library = library.map(|version| LibraryInfo {
            name: "swagger-core".into(),
            version: version.into(),
        });
        env.expect_spec_library().returning(move || library.clone());
        env
    }

    #[test]
    fn clean_environment_passes() {
        let env = environment(vec![], None);
        assert!(CapabilityGuard::new(&env).check_compatibility().is_ok());
    }

    #[test]
    fn each_legacy_marker_is_reported_by_name() {
        for marker in LEGACY_MARKERS {
            let env = environment(vec![marker.type_name], Some("1.5.10"));
            let err = CapabilityGuard::new(&env).check_compatibility().unwrap_err();
            assert!(err.to_string().contains(marker.legacy));
            assert!(err.to_string().contains(marker.supported));
        }
    }

    #[test]
    fn legacy_marker_wins_over_declared_version() {
        let env = environment(vec!["com.wordnik.swagger.model.ApiListing"], Some("1.5.10"));
        let err = CapabilityGuard::new(&env).check_compatibility().unwrap_err();
        assert!(matches!(err, CompatibilityError::LegacyLibrary { .. }));
    }

    #[test]
    fn declared_version_outside_range_fails() {
        let env = environment(vec![], Some("2.1.0"));
        let err = CapabilityGuard::new(&env).check_compatibility().unwrap_err();
        assert!(matches!(err, CompatibilityError::UnsupportedVersion { .. }));
        assert!(err.to_string().contains("2.1.0"));
    }

    #[test]
    fn declared_version_inside_range_passes() {
        let env = environment(vec![], Some("1.5.10"));
        assert!(CapabilityGuard::new(&env).check_compatibility().is_ok());
    }
}
