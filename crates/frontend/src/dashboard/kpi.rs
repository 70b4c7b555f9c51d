//! Fixed KPI card layout.

use contracts::dashboard::row::value_text;
use serde_json::{Map, Value};

/// Metric key and card caption, in display order.
pub const KPI_MAPPING: [(&str, &str); 8] = [
    ("applications", "No. of Applications"),
    ("shortlisted", "No. of Shortlisted"),
    ("interviewed", "No. of Interviewed"),
    ("offered", "No. of Offered"),
    ("hired", "No. of Hired"),
    ("rejected", "No. of Rejected"),
    ("acceptance_rate", "Acceptance Rate (%)"),
    ("rejection_rate", "Rejection Rate (%)"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct KpiCard {
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
}

/// One card per mapped metric; a missing or null metric shows `0`.
pub fn kpi_cards(kpis: &Map<String, Value>) -> Vec<KpiCard> {
    KPI_MAPPING
        .iter()
        .map(|(key, label)| {
            let value = match kpis.get(*key) {
                None | Some(Value::Null) => "0".to_string(),
                Some(v) => value_text(v),
            };
            KpiCard { key, label, value }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn eight_cards_in_fixed_order_with_zero_default() {
        let kpis = json!({"hired": 4, "acceptance_rate": 66.67, "applications": 120, "extra": 1});
        let cards = kpi_cards(kpis.as_object().unwrap());

        assert_eq!(cards.len(), 8);
        assert_eq!(cards[0].label, "No. of Applications");
        assert_eq!(cards[0].value, "120");
        assert_eq!(cards[1].value, "0");
        assert_eq!(cards[4].value, "4");
        assert_eq!(cards[6].value, "66.67");
        assert_eq!(cards[7].key, "rejection_rate");
        assert_eq!(cards[7].value, "0");
    }
}
