pub mod charts_panel;
pub mod column_selector;
pub mod details_modal;
pub mod filter_bar;
pub mod kpi_grid;
pub mod page;
pub mod status_modal;
pub mod table;

pub use page::DashboardPage;
