use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::row::value_text;

/// Chart series keyed by chart name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartsPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apps_per_company: Option<ChartSeries>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apps_per_college: Option<ChartSeries>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender_diversity: Option<ChartSeries>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recruitment_funnel: Option<ChartSeries>,
}

/// A series arrives either as parallel `labels`/`data` arrays or as a plain
/// `{label: count}` object. Labels may be any scalar (years, buckets).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChartSeries {
    Labeled { labels: Vec<Value>, data: Vec<Value> },
    Counts(Map<String, Value>),
}

impl ChartSeries {
    /// Labels and numeric values; non-numeric values count as zero.
    pub fn points(&self) -> (Vec<String>, Vec<f64>) {
        match self {
            ChartSeries::Labeled { labels, data } => {
                (labels.iter().map(value_text).collect(), data.iter().map(as_number).collect())
            }
            ChartSeries::Counts(map) => (
                map.keys().cloned().collect(),
                map.values().map(as_number).collect(),
            ),
        }
    }
}

fn as_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn labeled_series() {
        let s: ChartSeries =
            serde_json::from_value(json!({"labels": ["Applied", "Hired"], "data": [10, 2]}))
                .unwrap();
        assert_eq!(
            s.points(),
            (vec!["Applied".to_string(), "Hired".to_string()], vec![10.0, 2.0])
        );
    }

    #[test]
    fn counts_series_keeps_key_order() {
        let s: ChartSeries =
            serde_json::from_value(json!({"Male": 5, "Female": "7", "Other": null})).unwrap();
        let (labels, values) = s.points();
        assert_eq!(labels, vec!["Male", "Female", "Other"]);
        assert_eq!(values, vec![5.0, 7.0, 0.0]);
    }

    #[test]
    fn numeric_labels_stay_labeled() {
        let s: ChartSeries =
            serde_json::from_value(json!({"labels": [2023, 2024], "data": [5, 7]})).unwrap();
        assert_eq!(
            s.points(),
            (vec!["2023".to_string(), "2024".to_string()], vec![5.0, 7.0])
        );
    }
}
