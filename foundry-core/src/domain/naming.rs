// foundry-core/src/domain/naming.rs
//
// Naming rules shared by config validation and the test harness tooling.

use regex::Regex;
use std::sync::LazyLock;

/// BigQuery dataset ids: letters, numbers and underscores only.
pub static DATASET_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    // The pattern is hardcoded; the fallback can never be reached.
    Regex::new("^[A-Za-z0-9_]+$")
        .unwrap_or_else(|_| Regex::new("$^").unwrap_or_else(|_| unreachable!()))
});

pub fn is_valid_dataset_name(name: &str) -> bool {
    DATASET_NAME_RE.is_match(name)
}

/// Version tag of the public test harness datasets.
pub const TEST_HARNESS_VERSION: &str = "5_0";

/// Seed dataset name in the test harness project for a given workload.
///
/// `workload_path` is dotted (e.g. "marketing.CM360"), `dataset_type` is the
/// config key ("raw", "cdc", "reporting"). Dataset names are lower-case,
/// letters, numbers and underscores.
pub fn harness_dataset_name(workload_path: &str, dataset_type: &str, location: &str) -> String {
    let workload_prefix = workload_path.replace('.', "__");
    let location = location.replace('-', "_");
    format!("{workload_prefix}__{dataset_type}__{TEST_HARNESS_VERSION}__{location}").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_name_rule() {
        assert!(is_valid_dataset_name("mkt_cm360_cdc"));
        assert!(is_valid_dataset_name("Reporting_01"));
        assert!(!is_valid_dataset_name("bad-name"));
        assert!(!is_valid_dataset_name("has space"));
        assert!(!is_valid_dataset_name(""));
    }

    #[test]
    fn test_harness_dataset_name() {
        assert_eq!(
            harness_dataset_name("marketing.CM360", "raw", "us"),
            "marketing__cm360__raw__5_0__us"
        );
        assert_eq!(
            harness_dataset_name("marketing.GoogleAds", "cdc", "europe-west1"),
            "marketing__googleads__cdc__5_0__europe_west1"
        );
    }
}
