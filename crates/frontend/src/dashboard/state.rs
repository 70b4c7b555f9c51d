//! The dashboard view model: everything the views derive from.

use std::cmp::Ordering;

use contracts::dashboard::{ChartsPayload, DashboardResponse, FilterOptions, Row};
use serde_json::{Map, Value};

use super::columns::ColumnVisibility;
use super::filters::FilterState;
use super::kpi::{kpi_cards, KpiCard};
use super::status::{unique_candidates, StatusEntry};
use crate::shared::list_utils::{compare_cell_text, sort_list, Sortable};

impl Sortable for Row {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        compare_cell_text(&self.text(field), &other.text(field))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ActiveModal {
    #[default]
    None,
    Details(Row),
    Status,
    Users,
    FormConfig,
}

#[derive(Debug, Clone, Default)]
pub struct DashboardViewModel {
    pub kpis: Map<String, Value>,
    pub charts: ChartsPayload,
    pub table_data: Vec<Row>,
    pub all_columns: Vec<String>,
    pub default_columns: Vec<String>,
    pub columns: ColumnVisibility,
    pub sort_field: Option<String>,
    pub sort_ascending: bool,
    pub filters: FilterState,
    pub filter_options: FilterOptions,
    pub filters_populated: bool,
    pub is_loading: bool,
    pub error: Option<String>,
    pub modal: ActiveModal,
    /// Bumped each time a response is applied.
    pub data_version: u64,
    request_generation: u64,
}

impl DashboardViewModel {
    /// Marks a new fetch in flight and returns its generation.
    pub fn begin_fetch(&mut self) -> u64 {
        self.request_generation += 1;
        self.is_loading = true;
        self.request_generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.request_generation
    }

    /// Replaces cached data with a fetch result. Returns `false` and leaves
    /// state untouched when a newer request has been issued since.
    pub fn apply_response(&mut self, generation: u64, response: DashboardResponse) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.is_loading = false;
        self.error = None;
        self.data_version += 1;
        self.kpis = response.kpis;
        self.charts = response.charts;
        self.table_data = response.table_data;
        self.columns
            .reconcile(&response.all_columns, &response.default_columns);
        self.all_columns = response.all_columns;
        self.default_columns = response.default_columns;
        if self
            .sort_field
            .as_ref()
            .is_some_and(|f| !self.all_columns.contains(f))
        {
            self.sort_field = None;
        }
        if !self.filters_populated {
            self.filter_options = response.filters;
            self.filters_populated = true;
        }
        true
    }

    pub fn apply_failure(&mut self, generation: u64, message: String) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.is_loading = false;
        self.error = Some(format!("Failed to load dashboard data. {}", message));
        true
    }

    pub fn kpi_cards(&self) -> Vec<KpiCard> {
        kpi_cards(&self.kpis)
    }

    pub fn status_entries(&self) -> Vec<StatusEntry> {
        unique_candidates(&self.table_data)
    }

    /// Clicking the active column flips direction; a new column starts ascending.
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field.as_deref() == Some(field) {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = Some(field.to_string());
            self.sort_ascending = true;
        }
    }

    pub fn sorted_rows(&self) -> Vec<Row> {
        let mut rows = self.table_data.clone();
        if let Some(field) = &self.sort_field {
            sort_list(&mut rows, field, self.sort_ascending);
        }
        rows
    }

    /// CSV headers: checked columns in table order, else the first row's keys.
    pub fn export_headers(&self) -> Vec<String> {
        let visible = self.columns.visible_columns();
        if !visible.is_empty() {
            return visible;
        }
        self.table_data
            .first()
            .map(|row| row.keys().cloned().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(value: Value) -> DashboardResponse {
        serde_json::from_value(value).unwrap()
    }

    fn sample() -> DashboardResponse {
        response(json!({
            "kpis": {"applications": 3},
            "table_data": [
                {"name": "Asha", "email": "a@x.io", "score": 9},
                {"name": "Ben", "email": "b@x.io", "score": 10}
            ],
            "all_columns": ["name", "email", "score"],
            "default_columns": ["name", "score"],
            "filters": {"locations": ["Pune"]}
        }))
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut vm = DashboardViewModel::default();
        let first = vm.begin_fetch();
        let second = vm.begin_fetch();

        assert!(!vm.apply_response(first, sample()));
        assert!(vm.table_data.is_empty());
        assert!(vm.is_loading);

        assert!(vm.apply_response(second, sample()));
        assert_eq!(vm.table_data.len(), 2);
        assert_eq!(vm.data_version, 1);
        assert!(!vm.is_loading);
    }

    #[test]
    fn filter_options_populate_once() {
        let mut vm = DashboardViewModel::default();
        let g = vm.begin_fetch();
        vm.apply_response(g, sample());
        assert_eq!(vm.filter_options.locations, vec!["Pune".to_string()]);

        let g = vm.begin_fetch();
        vm.apply_response(g, response(json!({"filters": {"locations": ["Delhi"]}})));
        assert_eq!(vm.filter_options.locations, vec!["Pune".to_string()]);
        assert!(vm.table_data.is_empty());
    }

    #[test]
    fn failure_sets_banner_and_success_clears_it() {
        let mut vm = DashboardViewModel::default();
        let g = vm.begin_fetch();
        assert!(vm.apply_failure(g, "Server down".into()));
        assert_eq!(
            vm.error.as_deref(),
            Some("Failed to load dashboard data. Server down")
        );

        let g = vm.begin_fetch();
        vm.apply_response(g, sample());
        assert!(vm.error.is_none());
    }

    #[test]
    fn export_headers_prefer_visible_columns() {
        let mut vm = DashboardViewModel::default();
        let g = vm.begin_fetch();
        vm.apply_response(g, sample());
        assert_eq!(vm.export_headers(), vec!["name", "score"]);

        vm.columns.set_visible("name", false);
        vm.columns.set_visible("score", false);
        assert_eq!(vm.export_headers(), vec!["name", "email", "score"]);
    }

    #[test]
    fn sorting_is_numeric_aware_and_toggles() {
        let mut vm = DashboardViewModel::default();
        let g = vm.begin_fetch();
        vm.apply_response(g, sample());

        vm.toggle_sort("score");
        let names: Vec<String> = vm.sorted_rows().iter().map(|r| r.text("name")).collect();
        assert_eq!(names, vec!["Asha", "Ben"]);

        vm.toggle_sort("score");
        assert!(!vm.sort_ascending);
        let names: Vec<String> = vm.sorted_rows().iter().map(|r| r.text("name")).collect();
        assert_eq!(names, vec!["Ben", "Asha"]);
        assert_eq!(vm.table_data[0].text("name"), "Asha");
    }

    #[test]
    fn status_entries_come_from_table_data() {
        let mut vm = DashboardViewModel::default();
        let g = vm.begin_fetch();
        vm.apply_response(g, sample());
        let emails: Vec<String> = vm.status_entries().into_iter().map(|e| e.email).collect();
        assert_eq!(emails, vec!["a@x.io", "b@x.io"]);
    }
}
