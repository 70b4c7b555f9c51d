use leptos::prelude::*;
use thaw::*;

use super::charts_panel::ChartsPanel;
use super::column_selector::ColumnSelector;
use super::details_modal::DetailsModal;
use super::filter_bar::FilterBar;
use super::kpi_grid::KpiGrid;
use super::status_modal::StatusModal;
use super::table::CandidateTable;
use crate::dashboard::controller::use_dashboard;
use crate::dashboard::messages::DashboardMsg;
use crate::dashboard::state::ActiveModal;
use crate::form_config::ui::FormConfigModal;
use crate::shared::icons::icon;
use crate::system::users::ui::UserManagementModal;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctrl = use_dashboard();
    let vm = ctrl.view_model();
    let loading = Signal::derive(move || vm.with(|vm| vm.is_loading));
    let error = Signal::derive(move || vm.with(|vm| vm.error.clone()));
    let modal = Memo::new(move |_| vm.with(|vm| vm.modal.clone()));
    let close = Callback::new(move |_| ctrl.dispatch(DashboardMsg::CloseModal));

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Recruitment Dashboard"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| ctrl.dispatch(DashboardMsg::OpenStatus)
                    >
                        {icon("status")}
                        " Manage Status"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| ctrl.dispatch(DashboardMsg::OpenUsers)
                    >
                        {icon("users")}
                        " Manage Users"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| ctrl.dispatch(DashboardMsg::OpenFormConfig)
                    >
                        {icon("settings")}
                        " Form Configuration"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| ctrl.dispatch(DashboardMsg::Load)
                        disabled=loading
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <FilterBar />
                <KpiGrid />
                <ChartsPanel />

                <div class="table-toolbar">
                    <ColumnSelector />
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| ctrl.dispatch(DashboardMsg::ExportCsv)
                    >
                        {icon("download")}
                        " Download CSV"
                    </Button>
                </div>
                <CandidateTable />
            </div>

            {move || match modal.get() {
                ActiveModal::None => ().into_any(),
                ActiveModal::Details(row) => view! { <DetailsModal row=row /> }.into_any(),
                ActiveModal::Status => view! { <StatusModal /> }.into_any(),
                ActiveModal::Users => view! { <UserManagementModal on_close=close /> }.into_any(),
                ActiveModal::FormConfig => view! { <FormConfigModal on_close=close /> }.into_any(),
            }}
        </div>
    }
}
