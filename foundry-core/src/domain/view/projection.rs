// foundry-core/src/domain/view/projection.rs
//
// Pass-through reporting views over CDC tables: the named key columns come
// first, everything else follows through a `* EXCEPT (...)` expansion. The
// exclusion list is generated from the key list itself, so the two can
// never drift apart.

use std::collections::HashSet;
use std::fmt;

use crate::domain::error::DomainError;

/// Key columns of the impression-grain reporting views.
pub const IMPRESSION_KEY_COLUMNS: [&str; 6] = [
    "account_id",
    "advertiser_id",
    "campaign_id",
    "ad_id",
    "impression_id",
    "event_time",
];

/// Fully qualified BigQuery table, rendered backtick-quoted per part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    pub project: String,
    pub dataset: String,
    pub name: String,
}

impl TableRef {
    pub fn new(project: &str, dataset: &str, name: &str) -> Self {
        Self {
            project: project.to_string(),
            dataset: dataset.to_string(),
            name: name.to_string(),
        }
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}`.`{}`.`{}`", self.project, self.dataset, self.name)
    }
}

#[derive(Debug, Clone)]
pub struct ViewProjection {
    name: String,
    key_columns: Vec<String>,
}

impl ViewProjection {
    pub fn new<I, S>(name: &str, key_columns: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let key_columns: Vec<String> = key_columns.into_iter().map(Into::into).collect();
        if key_columns.is_empty() {
            return Err(DomainError::InvalidProjection(
                "at least one key column is required".into(),
            ));
        }

        let mut seen = HashSet::new();
        for col in &key_columns {
            if !seen.insert(col.to_lowercase()) {
                return Err(DomainError::InvalidProjection(format!(
                    "duplicate key column '{col}'"
                )));
            }
        }

        Ok(Self {
            name: name.to_string(),
            key_columns,
        })
    }

    /// The canonical impression-grain projection.
    pub fn impressions(name: &str) -> Self {
        // The constant key list is non-empty and duplicate-free.
        Self {
            name: name.to_string(),
            key_columns: IMPRESSION_KEY_COLUMNS.iter().map(|c| c.to_string()).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key_columns(&self) -> &[String] {
        &self.key_columns
    }

    /// `CREATE OR REPLACE VIEW` DDL: a pure projection, no filtering, joins
    /// or aggregation.
    pub fn ddl(&self, target: &TableRef, source: &TableRef) -> String {
        let keys = self.key_columns.join(",\n  ");
        let except = self.key_columns.join(", ");
        format!(
            "CREATE OR REPLACE VIEW {target} AS\nSELECT\n  {keys},\n  * EXCEPT ({except})\nFROM {source}\n"
        )
    }

    /// Output column set of the rendered view: keys first, then every
    /// source column not already named as a key, in original relative
    /// order. Comparison is case-insensitive, matching BigQuery.
    pub fn resolve_columns(&self, source_columns: &[String]) -> Vec<String> {
        let keys: HashSet<String> = self.key_columns.iter().map(|c| c.to_lowercase()).collect();

        let mut resolved = self.key_columns.clone();
        resolved.extend(
            source_columns
                .iter()
                .filter(|c| !keys.contains(&c.to_lowercase()))
                .cloned(),
        );
        resolved
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn as_strings(cols: &[&str]) -> Vec<String> {
        cols.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_rejects_empty_keys() {
        let result = ViewProjection::new("v", Vec::<String>::new());
        assert!(matches!(result, Err(DomainError::InvalidProjection(_))));
    }

    #[test]
    fn test_rejects_duplicate_keys() {
        let result = ViewProjection::new("v", ["ad_id", "Ad_Id"]);
        assert!(matches!(result, Err(DomainError::InvalidProjection(_))));
    }

    #[test]
    fn test_ddl_excludes_exactly_the_key_columns() {
        let projection = ViewProjection::impressions("impressions");
        let target = TableRef::new("tgt", "reporting", "impressions");
        let source = TableRef::new("src", "cdc", "impressions");
        let ddl = projection.ddl(&target, &source);

        assert!(ddl.starts_with(
            "CREATE OR REPLACE VIEW `tgt`.`reporting`.`impressions` AS"
        ));
        assert!(ddl.contains(
            "* EXCEPT (account_id, advertiser_id, campaign_id, ad_id, impression_id, event_time)"
        ));
        assert!(ddl.ends_with("FROM `src`.`cdc`.`impressions`\n"));
        // Every key column appears exactly twice: once in the select list,
        // once in the exclusion list.
        for key in IMPRESSION_KEY_COLUMNS {
            assert_eq!(ddl.matches(key).count(), 2, "column {key}");
        }
    }

    #[test]
    fn test_resolve_columns_keys_first_order_preserved() {
        let projection = ViewProjection::impressions("impressions");
        let source = as_strings(&[
            "impression_id",
            "placement_id",
            "account_id",
            "browser",
            "event_time",
            "cost_micros",
        ]);

        let resolved = projection.resolve_columns(&source);
        let expected = as_strings(&[
            "account_id",
            "advertiser_id",
            "campaign_id",
            "ad_id",
            "impression_id",
            "event_time",
            "placement_id",
            "browser",
            "cost_micros",
        ]);
        assert_eq!(resolved, expected);
    }

    #[test]
    fn test_resolve_columns_no_duplicates() {
        let projection = ViewProjection::impressions("impressions");
        let source = as_strings(&["ACCOUNT_ID", "ad_id", "clicks"]);
        let resolved = projection.resolve_columns(&source);

        let mut unique: Vec<String> = resolved.iter().map(|c| c.to_lowercase()).collect();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), resolved.len());
    }
}
