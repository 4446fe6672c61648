// foundry-core/src/domain/pipeline/step.rs
//
// The build plan: one validator step, then one gated step per connector.
// Connector steps wait only on the validator, never on each other.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const INIT_STEP_ID: &str = "init_deploy_config";
pub const GOOGLEADS_STEP_ID: &str = "googleads_deploy";
pub const CM360_STEP_ID: &str = "cm360_deploy";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectorKind {
    GoogleAds,
    Cm360,
}

impl ConnectorKind {
    pub const ALL: [ConnectorKind; 2] = [ConnectorKind::GoogleAds, ConnectorKind::Cm360];

    /// Config section name ("GoogleAds", "CM360").
    pub fn section(&self) -> &'static str {
        match self {
            ConnectorKind::GoogleAds => "GoogleAds",
            ConnectorKind::Cm360 => "CM360",
        }
    }

    /// Boolean gate key inside the `marketing` section.
    pub fn flag_name(&self) -> &'static str {
        match self {
            ConnectorKind::GoogleAds => "deployGoogleAds",
            ConnectorKind::Cm360 => "deployCM360",
        }
    }

    /// Directory name under `connectors/` and `views/`.
    pub fn dir_name(&self) -> &'static str {
        match self {
            ConnectorKind::GoogleAds => "googleads",
            ConnectorKind::Cm360 => "cm360",
        }
    }

    /// Dotted workload path used for test harness dataset names.
    pub fn workload_path(&self) -> String {
        format!("marketing.{}", self.section())
    }

    pub fn step_id(&self) -> &'static str {
        match self {
            ConnectorKind::GoogleAds => GOOGLEADS_STEP_ID,
            ConnectorKind::Cm360 => CM360_STEP_ID,
        }
    }
}

impl fmt::Display for ConnectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectorKind::GoogleAds => write!(f, "Google Ads"),
            ConnectorKind::Cm360 => write!(f, "CM360"),
        }
    }
}

impl FromStr for ConnectorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "googleads" => Ok(ConnectorKind::GoogleAds),
            "cm360" => Ok(ConnectorKind::Cm360),
            other => Err(format!(
                "unknown connector '{other}' (expected 'googleads' or 'cm360')"
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BuildStep {
    pub id: String,
    pub connector: Option<ConnectorKind>,
    pub wait_for: Vec<String>,
}

impl BuildStep {
    pub fn validator(id: &str) -> Self {
        Self {
            id: id.to_string(),
            connector: None,
            wait_for: Vec::new(),
        }
    }

    pub fn deploy(kind: ConnectorKind, wait_for: &[&str]) -> Self {
        Self {
            id: kind.step_id().to_string(),
            connector: Some(kind),
            wait_for: wait_for.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// The built-in three-step plan.
pub fn builtin_plan() -> Vec<BuildStep> {
    vec![
        BuildStep::validator(INIT_STEP_ID),
        BuildStep::deploy(ConnectorKind::GoogleAds, &[INIT_STEP_ID]),
        BuildStep::deploy(ConnectorKind::Cm360, &[INIT_STEP_ID]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_plan_shape() {
        let plan = builtin_plan();
        assert_eq!(plan.len(), 3);
        assert_eq!(plan[0].id, INIT_STEP_ID);
        assert!(plan[0].wait_for.is_empty());
        // Connector steps depend on the validator only, not on each other.
        assert_eq!(plan[1].wait_for, vec![INIT_STEP_ID.to_string()]);
        assert_eq!(plan[2].wait_for, vec![INIT_STEP_ID.to_string()]);
    }

    #[test]
    fn test_connector_parsing() {
        assert_eq!(
            "GoogleAds".parse::<ConnectorKind>(),
            Ok(ConnectorKind::GoogleAds)
        );
        assert_eq!("google-ads".parse(), Ok(ConnectorKind::GoogleAds));
        assert_eq!("cm360".parse(), Ok(ConnectorKind::Cm360));
        assert!("doubleclick".parse::<ConnectorKind>().is_err());
    }
}
