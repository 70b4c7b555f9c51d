//! Chart slots on the dashboard and the Chart.js configurations built for
//! them. Building configs is pure; [`registry`] owns the live JS instances.

pub mod registry;

use contracts::dashboard::{ChartSeries, ChartsPayload};
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Pie,
    Funnel,
}

impl ChartKind {
    pub fn js_type(&self) -> &'static str {
        match self {
            ChartKind::Bar | ChartKind::Funnel => "bar",
            ChartKind::Pie => "pie",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSlot {
    pub canvas_id: &'static str,
    pub kind: ChartKind,
    pub title: &'static str,
}

pub const CHART_SLOTS: [ChartSlot; 4] = [
    ChartSlot {
        canvas_id: "appsPerCompanyChart",
        kind: ChartKind::Bar,
        title: "Apps per Company",
    },
    ChartSlot {
        canvas_id: "appsPerCollegeChart",
        kind: ChartKind::Bar,
        title: "Apps per College",
    },
    ChartSlot {
        canvas_id: "genderDiversityChart",
        kind: ChartKind::Pie,
        title: "Gender Diversity",
    },
    ChartSlot {
        canvas_id: "recruitmentFunnelChart",
        kind: ChartKind::Funnel,
        title: "Recruitment Funnel",
    },
];

const BAR_COLOR: &str = "#36A2EB";
const PIE_COLORS: [&str; 6] = ["#36A2EB", "#FF6384", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40"];
const FUNNEL_COLORS: [&str; 6] = ["#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40"];

impl ChartSlot {
    pub fn series<'a>(&self, charts: &'a ChartsPayload) -> Option<&'a ChartSeries> {
        match self.canvas_id {
            "appsPerCompanyChart" => charts.apps_per_company.as_ref(),
            "appsPerCollegeChart" => charts.apps_per_college.as_ref(),
            "genderDiversityChart" => charts.gender_diversity.as_ref(),
            "recruitmentFunnelChart" => charts.recruitment_funnel.as_ref(),
            _ => None,
        }
    }

    /// Labels and values for this slot; empty when the server sent none.
    pub fn points(&self, charts: &ChartsPayload) -> (Vec<String>, Vec<f64>) {
        self.series(charts).map(ChartSeries::points).unwrap_or_default()
    }

    /// Full Chart.js configuration for a fresh instance.
    pub fn config(&self, labels: &[String], values: &[f64]) -> Value {
        match self.kind {
            ChartKind::Funnel => funnel_chart_config(self.title, labels, values),
            kind => simple_chart_config(kind, self.title, labels, values),
        }
    }
}

/// Transparent leading bar per bucket that centres the count bar inside the
/// widest one: `(max(values, 0) - value) / 2`.
pub fn funnel_spacers(values: &[f64]) -> Vec<f64> {
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    values.iter().map(|v| (max - v) / 2.0).collect()
}

fn simple_chart_config(kind: ChartKind, title: &str, labels: &[String], values: &[f64]) -> Value {
    let background = match kind {
        ChartKind::Pie => json!(PIE_COLORS),
        _ => json!(BAR_COLOR),
    };
    json!({
        "type": kind.js_type(),
        "data": {
            "labels": labels,
            "datasets": [{
                "label": "Count",
                "data": values,
                "backgroundColor": background
            }]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "title": { "display": true, "text": title }
            }
        }
    })
}

fn funnel_chart_config(title: &str, labels: &[String], values: &[f64]) -> Value {
    json!({
        "type": "bar",
        "data": {
            "labels": labels,
            "datasets": [
                {
                    "label": "Spacer",
                    "data": funnel_spacers(values),
                    "backgroundColor": "transparent",
                    "stack": "funnelStack",
                    "datalabels": { "display": false }
                },
                {
                    "label": "Count",
                    "data": values,
                    "backgroundColor": FUNNEL_COLORS,
                    "stack": "funnelStack",
                    "datalabels": { "display": true }
                }
            ]
        },
        "options": {
            "indexAxis": "y",
            "responsive": true,
            "maintainAspectRatio": false,
            "scales": {
                "x": { "stacked": true, "grid": { "display": false }, "ticks": { "display": false } },
                "y": { "stacked": true, "grid": { "display": false } }
            },
            "plugins": {
                "legend": { "display": false },
                "title": { "display": true, "text": title },
                "datalabels": {
                    "color": "white",
                    "font": { "weight": "bold", "size": 14 }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn funnel_spacers_centre_bars() {
        assert_eq!(funnel_spacers(&[10.0, 4.0, 6.0]), vec![0.0, 3.0, 2.0]);
        assert_eq!(funnel_spacers(&[5.0, 5.0]), vec![0.0, 0.0]);
        assert!(funnel_spacers(&[]).is_empty());
    }

    #[test]
    fn funnel_spacers_use_zero_floor() {
        assert_eq!(funnel_spacers(&[-2.0, -4.0]), vec![1.0, 2.0]);
    }

    #[test]
    fn funnel_config_stacks_spacer_before_counts() {
        let labels = vec!["Applied".to_string(), "Hired".to_string()];
        let config = CHART_SLOTS[3].config(&labels, &[8.0, 2.0]);

        assert_eq!(config["type"], "bar");
        assert_eq!(config["options"]["indexAxis"], "y");
        let datasets = config["data"]["datasets"].as_array().unwrap();
        assert_eq!(datasets[0]["label"], "Spacer");
        assert_eq!(datasets[0]["data"], json!([0.0, 3.0]));
        assert_eq!(datasets[0]["backgroundColor"], "transparent");
        assert_eq!(datasets[1]["data"], json!([8.0, 2.0]));
        assert_eq!(datasets[0]["stack"], datasets[1]["stack"]);
    }

    #[test]
    fn pie_uses_palette_and_bar_single_colour() {
        let pie = CHART_SLOTS[2].config(&["M".into()], &[1.0]);
        assert_eq!(pie["type"], "pie");
        assert!(pie["data"]["datasets"][0]["backgroundColor"].is_array());

        let bar = CHART_SLOTS[0].config(&["Acme".into()], &[3.0]);
        assert_eq!(bar["type"], "bar");
        assert_eq!(bar["data"]["datasets"][0]["backgroundColor"], BAR_COLOR);
        assert_eq!(bar["options"]["plugins"]["title"]["text"], "Apps per Company");
    }

    #[test]
    fn simple_charts_keep_global_value_labels() {
        for slot in &CHART_SLOTS[..3] {
            let config = slot.config(&["A".into()], &[1.0]);
            assert!(config["options"]["plugins"].get("datalabels").is_none());
        }
    }

    #[test]
    fn missing_series_yields_empty_points() {
        let charts: ChartsPayload = serde_json::from_value(json!({
            "gender_diversity": {"Male": 3, "Female": 4}
        }))
        .unwrap();
        assert_eq!(CHART_SLOTS[0].points(&charts), (vec![], vec![]));
        assert_eq!(
            CHART_SLOTS[2].points(&charts),
            (vec!["Male".to_string(), "Female".to_string()], vec![3.0, 4.0])
        );
    }
}
