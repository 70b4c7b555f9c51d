use contracts::dashboard::Row;

use super::filters::FilterKey;

/// Every user or lifecycle event the dashboard reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardMsg {
    Load,
    FilterChanged(FilterKey, String),
    ResetFilters,
    ToggleColumn(String, bool),
    SortBy(String),
    ShowDetails(Row),
    OpenStatus,
    OpenUsers,
    OpenFormConfig,
    CloseModal,
    ExportCsv,
}
