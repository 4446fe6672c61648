// foundry-core/src/infrastructure/render/context.rs

use serde_json::{Map, Value};

use crate::domain::config::DeploymentConfig;

/// Builds the substitution map handed to view templates. Keys follow the
/// `<section>_<connector>_<field>` convention (`project_id_src`,
/// `marketing_cm360_datasets_cdc`, ...); only values present in the config
/// are exposed, so a template touching an unconfigured connector fails to
/// render instead of producing half-empty SQL.
pub fn substitution_context(config: &DeploymentConfig) -> Value {
    let mut vars = Map::new();

    fn put(vars: &mut Map<String, Value>, key: &str, value: Option<&str>) {
        if let Some(v) = value {
            vars.insert(key.to_string(), Value::String(v.to_string()));
        }
    }

    put(&mut vars, "project_id_src", config.project_id_source.as_deref());
    put(&mut vars, "project_id_tgt", config.project_id_target.as_deref());
    put(&mut vars, "location", config.location.as_deref());

    if let Some(marketing) = &config.marketing {
        put(&mut vars, "dataflow_region", marketing.dataflow_region.as_deref());

        if let Some(google_ads) = &marketing.google_ads {
            if let Some(datasets) = &google_ads.datasets {
                put(&mut vars, "marketing_googleads_datasets_raw", datasets.raw.as_deref());
                put(&mut vars, "marketing_googleads_datasets_cdc", datasets.cdc.as_deref());
                put(
                    &mut vars,
                    "marketing_googleads_datasets_reporting",
                    datasets.reporting.as_deref(),
                );
            }
            if let Some(days) = google_ads.lookback_days {
                vars.insert(
                    "marketing_googleads_lookback_days".to_string(),
                    Value::from(days),
                );
            }
        }

        if let Some(cm360) = &marketing.cm360 {
            if let Some(datasets) = &cm360.datasets {
                put(&mut vars, "marketing_cm360_datasets_raw", datasets.raw.as_deref());
                put(&mut vars, "marketing_cm360_datasets_cdc", datasets.cdc.as_deref());
                put(
                    &mut vars,
                    "marketing_cm360_datasets_reporting",
                    datasets.reporting.as_deref(),
                );
            }
            put(
                &mut vars,
                "marketing_cm360_data_transfer_bucket",
                cm360.data_transfer_bucket.as_deref(),
            );
        }
    }

    Value::Object(vars)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_context_keys() {
        let config: DeploymentConfig = serde_json::from_str(
            r#"{
                "projectIdSource": "src-p",
                "projectIdTarget": "tgt-p",
                "location": "us",
                "deployMarketing": true,
                "marketing": {
                    "deployGoogleAds": false,
                    "deployCM360": true,
                    "dataflowRegion": "us-central1",
                    "CM360": {
                        "deployCDC": true,
                        "dataTransferBucket": "xfer",
                        "datasets": { "cdc": "cm_cdc", "raw": "cm_raw", "reporting": "cm_rep" }
                    }
                }
            }"#,
        )
        .unwrap();

        let ctx = substitution_context(&config);
        assert_eq!(ctx["project_id_src"], "src-p");
        assert_eq!(ctx["marketing_cm360_datasets_cdc"], "cm_cdc");
        assert_eq!(ctx["marketing_cm360_data_transfer_bucket"], "xfer");
        // No GoogleAds section configured, so no GoogleAds keys.
        assert!(ctx.get("marketing_googleads_datasets_cdc").is_none());
    }
}
