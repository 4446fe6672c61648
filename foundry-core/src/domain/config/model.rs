// foundry-core/src/domain/config/model.rs
//
// Typed model of config/marketing_config.json. Every field the validator
// can report as missing is an Option so that absence survives parsing;
// unknown keys are preserved through the in-place rewrite via `extra`.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::naming::DATASET_NAME_RE;
use crate::domain::pipeline::ConnectorKind;

/// Public project holding the seed datasets used when `testData` is on.
pub const DEFAULT_TEST_DATA_PROJECT: &str = "data-foundation-harness";

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id_source: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id_target: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default)]
    pub test_data: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_data_project: Option<String>,

    #[serde(default)]
    pub deploy_marketing: bool,

    #[validate(nested)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketing: Option<MarketingConfig>,

    // Sections owned by other workloads pass through the rewrite untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MarketingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deploy_google_ads: Option<bool>,

    #[serde(rename = "deployCM360", skip_serializing_if = "Option::is_none")]
    pub deploy_cm360: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataflow_region: Option<String>,

    #[validate(nested)]
    #[serde(rename = "GoogleAds", skip_serializing_if = "Option::is_none")]
    pub google_ads: Option<GoogleAdsConfig>,

    #[validate(nested)]
    #[serde(rename = "CM360", skip_serializing_if = "Option::is_none")]
    pub cm360: Option<Cm360Config>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GoogleAdsConfig {
    #[serde(rename = "deployCDC", skip_serializing_if = "Option::is_none")]
    pub deploy_cdc: Option<bool>,

    #[validate(range(min = 1, max = 3650, message = "lookbackDays must be between 1 and 3650"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lookback_days: Option<u32>,

    #[validate(nested)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datasets: Option<DatasetGroup>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Cm360Config {
    #[serde(rename = "deployCDC", skip_serializing_if = "Option::is_none")]
    pub deploy_cdc: Option<bool>,

    #[validate(length(min = 1, message = "dataTransferBucket must not be empty"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_transfer_bucket: Option<String>,

    #[validate(nested)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datasets: Option<DatasetGroup>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DatasetGroup {
    #[validate(regex(
        path = *DATASET_NAME_RE,
        message = "dataset names may only contain letters, numbers and underscores"
    ))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cdc: Option<String>,

    #[validate(regex(
        path = *DATASET_NAME_RE,
        message = "dataset names may only contain letters, numbers and underscores"
    ))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,

    #[validate(regex(
        path = *DATASET_NAME_RE,
        message = "dataset names may only contain letters, numbers and underscores"
    ))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporting: Option<String>,
}

impl DeploymentConfig {
    /// True when the given connector must actually be deployed.
    ///
    /// Deploy steps re-read the processed config and call this; a false
    /// gate is a successful skip, never an error.
    pub fn deploys(&self, kind: ConnectorKind) -> bool {
        if !self.deploy_marketing {
            return false;
        }
        let Some(marketing) = &self.marketing else {
            return false;
        };
        match kind {
            ConnectorKind::GoogleAds => marketing.deploy_google_ads.unwrap_or(false),
            ConnectorKind::Cm360 => marketing.deploy_cm360.unwrap_or(false),
        }
    }

    pub fn datasets(&self, kind: ConnectorKind) -> Option<&DatasetGroup> {
        let marketing = self.marketing.as_ref()?;
        match kind {
            ConnectorKind::GoogleAds => marketing.google_ads.as_ref()?.datasets.as_ref(),
            ConnectorKind::Cm360 => marketing.cm360.as_ref()?.datasets.as_ref(),
        }
    }

    /// Applies the processing half of the init step: trim every string
    /// field and fill the documented defaults. Runs before validation so
    /// the rules see the processed form.
    pub fn normalize(&mut self) {
        trim_opt(&mut self.project_id_source);
        trim_opt(&mut self.project_id_target);
        trim_opt(&mut self.location);
        trim_opt(&mut self.test_data_project);

        if is_blank(&self.project_id_target) {
            self.project_id_target = self.project_id_source.clone();
        }
        if self.test_data && is_blank(&self.test_data_project) {
            self.test_data_project = Some(DEFAULT_TEST_DATA_PROJECT.to_string());
        }

        if let Some(marketing) = &mut self.marketing {
            trim_opt(&mut marketing.dataflow_region);
            if let Some(google_ads) = &mut marketing.google_ads
                && let Some(datasets) = &mut google_ads.datasets
            {
                datasets.trim();
            }
            if let Some(cm360) = &mut marketing.cm360 {
                trim_opt(&mut cm360.data_transfer_bucket);
                if let Some(datasets) = &mut cm360.datasets {
                    datasets.trim();
                }
            }
        }
    }
}

impl DatasetGroup {
    fn trim(&mut self) {
        trim_opt(&mut self.cdc);
        trim_opt(&mut self.raw);
        trim_opt(&mut self.reporting);
    }
}

fn trim_opt(value: &mut Option<String>) {
    if let Some(v) = value {
        let trimmed = v.trim().to_string();
        if trimmed != *v {
            *v = trimmed;
        }
    }
}

pub(crate) fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|v| v.trim().is_empty())
}
