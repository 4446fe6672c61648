// foundry-core/src/domain/config/validation.rs
//
// Rule set of the init_deploy_config step. Presence checks mirror the
// "missing or empty" contract of the deployment config; field-level rules
// (ranges, dataset name shape) run through the Validate derive.

use validator::Validate;

use crate::domain::config::model::{is_blank, DeploymentConfig};
use crate::domain::error::DomainError;

pub fn validate_config(cfg: &DeploymentConfig) -> Result<(), DomainError> {
    if !cfg.deploy_marketing {
        tracing::info!("'marketing' is not being deployed. Skipping validation.");
        return Ok(());
    }

    tracing::info!("Validating 'marketing' configuration...");

    // Top-level attributes every connector needs.
    let mut missing = Vec::new();
    if is_blank(&cfg.project_id_source) {
        missing.push("projectIdSource".to_string());
    }
    if is_blank(&cfg.location) {
        missing.push("location".to_string());
    }
    if !missing.is_empty() {
        return Err(DomainError::MissingAttributes {
            section: "deployment".into(),
            attrs: missing,
        });
    }

    let marketing = cfg
        .marketing
        .as_ref()
        .ok_or_else(|| DomainError::MissingSection("marketing".into()))?;

    let mut missing = Vec::new();
    if marketing.deploy_google_ads.is_none() {
        missing.push("deployGoogleAds".to_string());
    }
    if marketing.deploy_cm360.is_none() {
        missing.push("deployCM360".to_string());
    }
    if is_blank(&marketing.dataflow_region) {
        missing.push("dataflowRegion".to_string());
    }
    if !missing.is_empty() {
        return Err(DomainError::MissingAttributes {
            section: "Marketing".into(),
            attrs: missing,
        });
    }

    // Google Ads
    if marketing.deploy_google_ads == Some(true) {
        tracing::info!("Validating configuration for GoogleAds...");
        let google_ads = marketing
            .google_ads
            .as_ref()
            .ok_or_else(|| DomainError::MissingSection("marketing.GoogleAds".into()))?;

        let mut missing = Vec::new();
        if google_ads.deploy_cdc.is_none() {
            missing.push("deployCDC".to_string());
        }
        if google_ads.lookback_days.is_none() {
            missing.push("lookbackDays".to_string());
        }
        if google_ads.datasets.is_none() {
            missing.push("datasets".to_string());
        }
        if !missing.is_empty() {
            return Err(DomainError::MissingAttributes {
                section: "GoogleAds".into(),
                attrs: missing,
            });
        }
        validate_datasets("GoogleAds", google_ads.datasets.as_ref())?;
    }

    // CM360
    if marketing.deploy_cm360 == Some(true) {
        tracing::info!("Validating configuration for CM360...");
        let cm360 = marketing
            .cm360
            .as_ref()
            .ok_or_else(|| DomainError::MissingSection("marketing.CM360".into()))?;

        let mut missing = Vec::new();
        if cm360.deploy_cdc.is_none() {
            missing.push("deployCDC".to_string());
        }
        if is_blank(&cm360.data_transfer_bucket) {
            missing.push("dataTransferBucket".to_string());
        }
        if cm360.datasets.is_none() {
            missing.push("datasets".to_string());
        }
        if !missing.is_empty() {
            return Err(DomainError::MissingAttributes {
                section: "CM360".into(),
                attrs: missing,
            });
        }
        validate_datasets("CM360", cm360.datasets.as_ref())?;
    }

    // Field-level rules (lookback range, dataset name shape, ...).
    cfg.validate().map_err(|e| DomainError::InvalidValue {
        section: "marketing".into(),
        message: e.to_string(),
    })?;

    // The Dataflow region must live inside the BigQuery location.
    let region = marketing.dataflow_region.as_deref().unwrap_or_default();
    let location = cfg.location.as_deref().unwrap_or_default();
    if !region_within_location(region, location) {
        return Err(DomainError::RegionOutsideLocation {
            region: region.to_string(),
            location: location.to_string(),
        });
    }

    if cfg.test_data && is_blank(&cfg.test_data_project) {
        return Err(DomainError::MissingAttributes {
            section: "testData".into(),
            attrs: vec!["testDataProject".to_string()],
        });
    }

    tracing::info!("'marketing' config validated successfully.");
    Ok(())
}

fn validate_datasets(
    section: &str,
    datasets: Option<&crate::domain::config::model::DatasetGroup>,
) -> Result<(), DomainError> {
    let Some(datasets) = datasets else {
        return Ok(()); // Absence already reported by the caller.
    };

    let mut missing = Vec::new();
    if is_blank(&datasets.cdc) {
        missing.push("cdc".to_string());
    }
    if is_blank(&datasets.raw) {
        missing.push("raw".to_string());
    }
    if is_blank(&datasets.reporting) {
        missing.push("reporting".to_string());
    }
    if !missing.is_empty() {
        return Err(DomainError::MissingAttributes {
            section: format!("{section} datasets"),
            attrs: missing,
        });
    }
    Ok(())
}

fn region_within_location(region: &str, location: &str) -> bool {
    let region = region.to_lowercase();
    let location = location.to_lowercase();
    region == location || region.starts_with(&format!("{location}-"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_config() -> DeploymentConfig {
        serde_json::from_str(
            r#"{
                "projectIdSource": "src-project",
                "projectIdTarget": "tgt-project",
                "location": "us",
                "deployMarketing": true,
                "marketing": {
                    "deployGoogleAds": true,
                    "deployCM360": true,
                    "dataflowRegion": "us-central1",
                    "GoogleAds": {
                        "deployCDC": true,
                        "lookbackDays": 180,
                        "datasets": { "cdc": "ga_cdc", "raw": "ga_raw", "reporting": "ga_reporting" }
                    },
                    "CM360": {
                        "deployCDC": true,
                        "dataTransferBucket": "cm360-transfer",
                        "datasets": { "cdc": "cm_cdc", "raw": "cm_raw", "reporting": "cm_reporting" }
                    }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_marketing_not_deployed_passes_trivially() {
        let mut cfg = valid_config();
        cfg.deploy_marketing = false;
        cfg.marketing = None;
        assert!(validate_config(&cfg).is_ok());
    }

    #[test]
    fn test_missing_marketing_section() {
        let mut cfg = valid_config();
        cfg.marketing = None;
        assert!(matches!(
            validate_config(&cfg),
            Err(DomainError::MissingSection(s)) if s == "marketing"
        ));
    }

    #[test]
    fn test_missing_marketing_attributes() {
        let mut cfg = valid_config();
        cfg.marketing.as_mut().unwrap().dataflow_region = Some("  ".into());
        match validate_config(&cfg) {
            Err(DomainError::MissingAttributes { section, attrs }) => {
                assert_eq!(section, "Marketing");
                assert_eq!(attrs, vec!["dataflowRegion".to_string()]);
            }
            other => panic!("Expected MissingAttributes, got {other:?}"),
        }
    }

    #[test]
    fn test_googleads_section_required_when_enabled() {
        let mut cfg = valid_config();
        cfg.marketing.as_mut().unwrap().google_ads = None;
        assert!(matches!(
            validate_config(&cfg),
            Err(DomainError::MissingSection(s)) if s == "marketing.GoogleAds"
        ));
    }

    #[test]
    fn test_googleads_section_not_required_when_disabled() {
        let mut cfg = valid_config();
        let marketing = cfg.marketing.as_mut().unwrap();
        marketing.deploy_google_ads = Some(false);
        marketing.google_ads = None;
        assert!(validate_config(&cfg).is_ok());
    }

    #[test]
    fn test_missing_googleads_attributes() {
        let mut cfg = valid_config();
        let google_ads = cfg
            .marketing
            .as_mut()
            .unwrap()
            .google_ads
            .as_mut()
            .unwrap();
        google_ads.lookback_days = None;
        match validate_config(&cfg) {
            Err(DomainError::MissingAttributes { section, attrs }) => {
                assert_eq!(section, "GoogleAds");
                assert_eq!(attrs, vec!["lookbackDays".to_string()]);
            }
            other => panic!("Expected MissingAttributes, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_dataset_attributes() {
        let mut cfg = valid_config();
        let datasets = cfg
            .marketing
            .as_mut()
            .unwrap()
            .cm360
            .as_mut()
            .unwrap()
            .datasets
            .as_mut()
            .unwrap();
        datasets.reporting = Some(String::new());
        match validate_config(&cfg) {
            Err(DomainError::MissingAttributes { section, attrs }) => {
                assert_eq!(section, "CM360 datasets");
                assert_eq!(attrs, vec!["reporting".to_string()]);
            }
            other => panic!("Expected MissingAttributes, got {other:?}"),
        }
    }

    #[test]
    fn test_lookback_days_out_of_range() {
        let mut cfg = valid_config();
        cfg.marketing
            .as_mut()
            .unwrap()
            .google_ads
            .as_mut()
            .unwrap()
            .lookback_days = Some(0);
        assert!(matches!(
            validate_config(&cfg),
            Err(DomainError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_region_must_be_inside_location() {
        let mut cfg = valid_config();
        cfg.marketing.as_mut().unwrap().dataflow_region = Some("europe-west1".into());
        assert!(matches!(
            validate_config(&cfg),
            Err(DomainError::RegionOutsideLocation { .. })
        ));
    }

    #[test]
    fn test_region_equal_to_location_is_fine() {
        let mut cfg = valid_config();
        cfg.marketing.as_mut().unwrap().dataflow_region = Some("US".into());
        assert!(validate_config(&cfg).is_ok());
    }

    #[test]
    fn test_test_data_requires_harness_project() {
        let mut cfg = valid_config();
        cfg.test_data = true;
        cfg.test_data_project = None;
        assert!(matches!(
            validate_config(&cfg),
            Err(DomainError::MissingAttributes { section, .. }) if section == "testData"
        ));
    }
}
