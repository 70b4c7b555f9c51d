//! Single owner of the dashboard view model.
//!
//! Components never mutate state directly: they send a [`DashboardMsg`] to
//! [`DashboardController::dispatch`], which updates the view model and starts
//! any network work. Views re-render from the signal.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api::fetch_dashboard;
use super::filters::FilterState;
use super::messages::DashboardMsg;
use super::state::{ActiveModal, DashboardViewModel};
use crate::shared::dialogs::alert;
use crate::shared::export::{export_to_csv, ExportError, CSV_FILENAME};

#[derive(Clone, Copy)]
pub struct DashboardController {
    vm: RwSignal<DashboardViewModel>,
}

impl DashboardController {
    pub fn new() -> Self {
        Self {
            vm: RwSignal::new(DashboardViewModel::default()),
        }
    }

    pub fn view_model(&self) -> ReadSignal<DashboardViewModel> {
        self.vm.read_only()
    }

    pub fn dispatch(&self, msg: DashboardMsg) {
        match msg {
            DashboardMsg::Load => self.fetch(),
            DashboardMsg::FilterChanged(key, value) => {
                log::debug!("Filter {} -> {}", key.param(), value);
                self.vm.update(|vm| vm.filters.set(key, value));
                self.fetch();
            }
            DashboardMsg::ResetFilters => {
                self.vm.update(|vm| vm.filters.reset());
                self.fetch();
            }
            DashboardMsg::ToggleColumn(column, visible) => {
                self.vm.update(|vm| vm.columns.set_visible(&column, visible));
            }
            DashboardMsg::SortBy(column) => {
                self.vm.update(|vm| vm.toggle_sort(&column));
            }
            DashboardMsg::ShowDetails(row) => self.open(ActiveModal::Details(row)),
            DashboardMsg::OpenStatus => self.open(ActiveModal::Status),
            DashboardMsg::OpenUsers => self.open(ActiveModal::Users),
            DashboardMsg::OpenFormConfig => self.open(ActiveModal::FormConfig),
            DashboardMsg::CloseModal => {
                let mut closed = ActiveModal::None;
                self.vm
                    .update(|vm| closed = std::mem::take(&mut vm.modal));
                // Both of these may have changed server data.
                if matches!(closed, ActiveModal::Status | ActiveModal::FormConfig) {
                    self.fetch();
                }
            }
            DashboardMsg::ExportCsv => self.export_csv(),
        }
    }

    fn open(&self, modal: ActiveModal) {
        self.vm.update(|vm| vm.modal = modal);
    }

    fn fetch(&self) {
        let mut generation = 0;
        let mut filters = FilterState::default();
        self.vm.update(|vm| {
            generation = vm.begin_fetch();
            filters = vm.filters.clone();
        });

        let vm = self.vm;
        spawn_local(async move {
            log::debug!("Fetching dashboard data (request {})", generation);
            let result = fetch_dashboard(&filters).await;
            let mut applied = false;
            match result {
                Ok(response) => {
                    log::debug!(
                        "Dashboard data loaded: {} rows (request {})",
                        response.table_data.len(),
                        generation
                    );
                    vm.update(|vm| applied = vm.apply_response(generation, response));
                }
                Err(e) => {
                    log::error!("Error fetching dashboard data: {}", e);
                    vm.update(|vm| applied = vm.apply_failure(generation, e.to_string()));
                }
            }
            if !applied {
                log::warn!("Discarded stale dashboard response (request {})", generation);
            }
        });
    }

    fn export_csv(&self) {
        let (rows, headers) = self
            .vm
            .with_untracked(|vm| (vm.table_data.clone(), vm.export_headers()));
        match export_to_csv(&rows, &headers, CSV_FILENAME) {
            Ok(()) => log::info!("Exported {} rows to {}", rows.len(), CSV_FILENAME),
            Err(ExportError::Empty) => alert(&ExportError::Empty.to_string()),
            Err(e) => {
                log::error!("{}", e);
                alert(&e.to_string());
            }
        }
    }
}

impl Default for DashboardController {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_dashboard() -> DashboardController {
    use_context::<DashboardController>().expect("DashboardController not provided in context")
}
