//! `/api/data` payload: KPIs, chart series, candidate rows and filter options.

pub mod charts;
pub mod row;
pub mod status;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use charts::{ChartSeries, ChartsPayload};
pub use row::Row;
pub use status::{CandidateStatus, UpdateStatusRequest};

/// Full dashboard snapshot for the current filter selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardResponse {
    #[serde(default)]
    pub kpis: Map<String, Value>,
    #[serde(default)]
    pub charts: ChartsPayload,
    #[serde(default)]
    pub table_data: Vec<Row>,
    #[serde(default)]
    pub all_columns: Vec<String>,
    #[serde(default)]
    pub default_columns: Vec<String>,
    #[serde(default)]
    pub filters: FilterOptions,
}

/// Distinct values offered by each filter dropdown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub posts: Vec<String>,
    #[serde(default)]
    pub qualifications: Vec<String>,
    #[serde(default)]
    pub business_entities: Vec<String>,
    #[serde(default)]
    pub courses: Vec<String>,
    #[serde(default)]
    pub colleges: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_sections_default_to_empty() {
        let resp: DashboardResponse = serde_json::from_value(json!({
            "kpis": {"applications": 12},
            "table_data": [{"name": "Asha", "email": "asha@example.com"}]
        }))
        .unwrap();

        assert_eq!(resp.kpis.get("applications"), Some(&json!(12)));
        assert_eq!(resp.table_data.len(), 1);
        assert!(resp.all_columns.is_empty());
        assert!(resp.filters.locations.is_empty());
        assert!(resp.charts.recruitment_funnel.is_none());
    }

    #[test]
    fn filter_options_use_plural_keys() {
        let opts: FilterOptions = serde_json::from_value(json!({
            "locations": ["Pune", "Delhi"],
            "business_entities": ["Acme"]
        }))
        .unwrap();
        assert_eq!(opts.locations, vec!["Pune", "Delhi"]);
        assert_eq!(opts.business_entities, vec!["Acme"]);
        assert!(opts.colleges.is_empty());
    }
}
