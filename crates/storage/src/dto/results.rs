use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Latest stored result for a session: the grand total, the per-category
/// breakdown, and when it was submitted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResultsResponse {
    pub total: i64,
    pub categories: BTreeMap<String, i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let response = ResultsResponse {
            total: 1692,
            categories: BTreeMap::from([("transport".to_string(), 1092)]),
            created_at: chrono::DateTime::UNIX_EPOCH,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("total").is_some());
        assert!(json.get("categories").is_some());
        assert!(json.get("createdAt").is_some());
    }
}
