// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for apigen.
//!
//! Pure logic only: bundle configuration and its validation, the upstream
//! capability registry, strategy selection, the API model and the
//! specification document. All I/O is reached through the ports defined in
//! the application layer.
//!
//! - **No async**: domain logic is synchronous
//! - **No I/O**: no filesystem, network, or environment access
//! - **Immutable configuration**: a validated [`Bundle`] cannot be mutated
pub mod bundle;
pub mod capabilities;
pub mod descriptor;
pub mod document;
pub mod error;
pub mod model;
pub mod render;
pub mod strategy;

mod validation;

// Re-exports for convenience
pub use bundle::{
    Bundle, BundleConfig, Contact, Dialect, Info, InfoConfig, License, LicenseConfig,
    OutputCollision, OutputFormat, Scheme, find_output_collisions,
};
pub use capabilities::{LEGACY_MARKERS, LegacyMarker, LibraryInfo, LibraryVersion};
pub use descriptor::{OperationDescriptor, ResourceDescriptor};
pub use document::SpecificationDocument;
pub use error::{CompatibilityError, ConfigurationError};
pub use model::{
    ApiModel, HttpMethod, ModelDefinition, ModelOverrides, Operation, Parameter,
    ParameterLocation, Response, Schema, join_paths,
};
pub use render::RenderContext;
pub use strategy::{StrategyKind, StrategySelector};
pub use validation::ConfigValidator;

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::*;

    fn valid_config() -> BundleConfig {
        BundleConfig {
            info: Some(InfoConfig {
                title: Some("Petstore".into()),
                version: Some("1.0.0".into()),
                ..InfoConfig::default()
            }),
            base_path: Some("/v1".into()),
            locations: Some(vec!["com.example.pets".into()]),
            ..BundleConfig::default()
        }
    }

    fn validate(config: &BundleConfig) -> Result<Bundle, ConfigurationError> {
        ConfigValidator::validate(Some(config))
    }

    // ========================================================================
    // Validator rules, in order
    // ========================================================================

    #[test]
    fn rule_1_null_bundle() {
        let err = ConfigValidator::validate(None).unwrap_err();
        assert_eq!(err, ConfigurationError::MissingBundle);
    }

    #[test]
    fn rule_2_missing_info() {
        let config = BundleConfig {
            info: None,
            ..valid_config()
        };
        let err = validate(&config).unwrap_err();
        assert_eq!(err.to_string(), "`<info>` is required by Swagger Spec.");
    }

    #[test]
    fn rule_3_missing_title() {
        let mut config = valid_config();
        config.info.as_mut().unwrap().title = None;
        let err = validate(&config).unwrap_err();
        assert_eq!(err.to_string(), "`<info><title>` is required by Swagger Spec.");
    }

    #[test]
    fn rule_4_missing_version() {
        let mut config = valid_config();
        config.info.as_mut().unwrap().version = None;
        let err = validate(&config).unwrap_err();
        assert_eq!(err.to_string(), "`<info><version>` is required by Swagger Spec.");
    }

    #[test]
    fn rule_5_license_without_name() {
        let mut config = valid_config();
        config.info.as_mut().unwrap().license = Some(LicenseConfig {
            name: None,
            url: Some("https://example.com/license".into()),
        });
        let err = validate(&config).unwrap_err();
        assert_eq!(
            err.to_string(),
            "`<info><license><name>` is required by Swagger Spec."
        );
    }

    #[test]
    fn rule_6_missing_locations() {
        let config = BundleConfig {
            locations: None,
            ..valid_config()
        };
        let err = validate(&config).unwrap_err();
        assert_eq!(err.to_string(), "`<locations>` is required by apigen.");
    }

    #[test]
    fn earlier_rule_wins_when_several_are_violated() {
        let config = BundleConfig {
            info: Some(InfoConfig::default()),
            locations: None,
            ..valid_config()
        };
        assert_eq!(validate(&config), Err(ConfigurationError::MissingTitle));
    }

    #[test]
    fn blank_values_count_as_missing() {
        let mut config = valid_config();
        config.info.as_mut().unwrap().title = Some("   ".into());
        assert_eq!(validate(&config), Err(ConfigurationError::MissingTitle));

        let config = BundleConfig {
            locations: Some(vec![String::new()]),
            ..valid_config()
        };
        assert_eq!(validate(&config), Err(ConfigurationError::MissingLocations));
    }

    #[test]
    fn license_with_name_is_kept() {
        let mut config = valid_config();
        config.info.as_mut().unwrap().license = Some(LicenseConfig {
            name: Some("Apache 2.0".into()),
            url: None,
        });
        let bundle = validate(&config).unwrap();
        assert_eq!(bundle.info().license.as_ref().unwrap().name, "Apache 2.0");
    }

    #[test]
    fn empty_bundle_list_is_rejected() {
        assert_eq!(
            ConfigValidator::require_bundles(None),
            Err(ConfigurationError::NoBundles)
        );
        assert_eq!(
            ConfigValidator::require_bundles(Some(&[])),
            Err(ConfigurationError::NoBundles)
        );
    }

    // ========================================================================
    // Validated bundle
    // ========================================================================

    #[test]
    fn override_takes_precedence_over_base_path() {
        let config = BundleConfig {
            publish_base_path_override: Some("/v2".into()),
            ..valid_config()
        };
        assert_eq!(validate(&config).unwrap().effective_base_path(), "/v2");
        assert_eq!(validate(&valid_config()).unwrap().effective_base_path(), "/v1");
    }

    #[test]
    fn defaults_are_applied() {
        let config = BundleConfig {
            base_path: None,
            ..valid_config()
        };
        let bundle = validate(&config).unwrap();
        assert_eq!(bundle.base_path(), "/");
        assert_eq!(bundle.dialect(), Dialect::Generic);
        assert_eq!(bundle.output_formats(), &[OutputFormat::Json]);
        assert_eq!(
            bundle.spec_paths(),
            vec![PathBuf::from("generated/swagger-ui/swagger.json")]
        );
    }

    #[test]
    fn swagger_directory_follows_output_path() {
        let config = BundleConfig {
            output_path: Some("/tmp/x/y/out.html".into()),
            output_formats: vec![OutputFormat::Yaml, OutputFormat::Json, OutputFormat::Yaml],
            ..valid_config()
        };
        let bundle = validate(&config).unwrap();
        assert_eq!(bundle.swagger_directory(), Path::new("/tmp/x/y"));
        assert_eq!(
            bundle.spec_paths(),
            vec![
                PathBuf::from("/tmp/x/y/swagger.json"),
                PathBuf::from("/tmp/x/y/swagger.yaml"),
            ]
        );
    }

    #[test]
    fn blank_paths_count_as_missing() {
        let config = BundleConfig {
            output_path: Some("  ".into()),
            template_path: Some("".into()),
            model_substitute: Some(" ".into()),
            swagger_directory: Some("".into()),
            ..valid_config()
        };
        let bundle = validate(&config).unwrap();
        assert_eq!(bundle.output_path(), None);
        assert_eq!(bundle.template_path(), None);
        assert_eq!(bundle.model_substitute(), None);
        assert_eq!(bundle.swagger_directory(), Path::new("generated/swagger-ui"));
    }

    // ========================================================================
    // Strategy selection
    // ========================================================================

    #[test]
    fn dialect_selects_strategy() {
        let generic = validate(&valid_config()).unwrap();
        assert_eq!(StrategySelector::select(&generic), StrategyKind::Default);

        let framework = validate(&BundleConfig {
            dialect: Dialect::FrameworkSpecific,
            ..valid_config()
        })
        .unwrap();
        assert_eq!(
            StrategySelector::select(&framework),
            StrategyKind::FrameworkAware
        );
    }

    #[test]
    fn dialect_parses_aliases() {
        assert_eq!("springmvc".parse(), Ok(Dialect::FrameworkSpecific));
        assert_eq!("Generic".parse(), Ok(Dialect::Generic));
        assert!("jersey".parse::<Dialect>().is_err());
    }

    // ========================================================================
    // Deserialisation
    // ========================================================================

    #[test]
    fn bundle_config_accepts_camel_case_aliases() {
        let config: BundleConfig = serde_yaml::from_str(
            r#"
info: { title: Petstore, version: "1.0" }
basePath: /v1
publishBasePathOverride: /v2
outputPath: out/doc.html
templatePath: doc.hbs
locations: [com.example]
dialect: framework-specific
"#,
        )
        .unwrap();
        let bundle = validate(&config).unwrap();
        assert_eq!(bundle.effective_base_path(), "/v2");
        assert_eq!(bundle.dialect(), Dialect::FrameworkSpecific);
        assert_eq!(bundle.template_path(), Some(Path::new("doc.hbs")));
    }

    #[test]
    fn null_list_entry_deserialises_to_none() {
        let list: Vec<Option<BundleConfig>> =
            serde_yaml::from_str("- ~\n- { locations: [a] }\n").unwrap();
        assert!(list[0].is_none());
        assert!(list[1].is_some());
    }

    // ========================================================================
    // Output collisions
    // ========================================================================

    #[test]
    fn colliding_bundles_are_reported() {
        let a = valid_config();
        let b = valid_config();
        let c = BundleConfig {
            swagger_directory: Some("elsewhere".into()),
            ..valid_config()
        };
        let collisions = find_output_collisions(&[Some(a), None, Some(b), Some(c)]);
        assert_eq!(collisions.len(), 1);
        assert_eq!(collisions[0].bundles, vec![0, 2]);
        assert_eq!(
            collisions[0].path,
            PathBuf::from("generated/swagger-ui/swagger.json")
        );
    }
}
