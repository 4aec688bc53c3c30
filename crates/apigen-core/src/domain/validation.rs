use crate::domain::{
    bundle::{Bundle, BundleConfig, Info, License, non_empty},
    error::ConfigurationError,
};

/// Centralized bundle validation.
///
/// Rules run in a fixed order and the first violation wins:
///
/// 1. the bundle itself is present
/// 2. `info` is present
/// 3. `info.title` is present
/// 4. `info.version` is present
/// 5. if `info.license` is present, `license.name` is present
/// 6. `locations` is present
///
/// Validation is pure: on success the caller receives the immutable
/// [`Bundle`]; nothing is written anywhere.
pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(config: Option<&BundleConfig>) -> Result<Bundle, ConfigurationError> {
        let config = config.ok_or(ConfigurationError::MissingBundle)?;
        let info = config.info.as_ref().ok_or(ConfigurationError::MissingInfo)?;

        let title = non_empty(info.title.as_deref()).ok_or(ConfigurationError::MissingTitle)?;
        let version =
            non_empty(info.version.as_deref()).ok_or(ConfigurationError::MissingVersion)?;

        let license = match &info.license {
            Some(license) => {
                let name = non_empty(license.name.as_deref())
                    .ok_or(ConfigurationError::MissingLicenseName)?;
                Some(License {
                    name: name.to_string(),
                    url: license.url.clone(),
                })
            }
            None => None,
        };

        let locations: Vec<String> = config
            .locations
            .iter()
            .flatten()
            .filter_map(|l| non_empty(Some(l.as_str())))
            .map(str::to_string)
            .collect();
        if locations.is_empty() {
            return Err(ConfigurationError::MissingLocations);
        }

        let info = Info {
            title: title.to_string(),
            version: version.to_string(),
            description: info.description.clone(),
            terms_of_service: info.terms_of_service.clone(),
            contact: info.contact.clone(),
            license,
        };

        Ok(Bundle::from_checked(config, info, locations))
    }

    /// Reject a missing or empty bundle list.
    pub fn require_bundles(
        bundles: Option<&[Option<BundleConfig>]>,
    ) -> Result<&[Option<BundleConfig>], ConfigurationError> {
        match bundles {
            Some(list) if !list.is_empty() => Ok(list),
            _ => Err(ConfigurationError::NoBundles),
        }
    }
}
