use leptos::prelude::*;

use crate::dashboard::controller::use_dashboard;
use crate::dashboard::kpi::KPI_MAPPING;
use crate::shared::components::stat_card::StatCard;

#[component]
pub fn KpiGrid() -> impl IntoView {
    let vm = use_dashboard().view_model();

    view! {
        <div class="kpi-grid">
            {KPI_MAPPING
                .iter()
                .enumerate()
                .map(|(i, (_, label))| {
                    let value = Signal::derive(move || vm.with(|vm| vm.kpi_cards()[i].value.clone()));
                    view! { <StatCard label=*label value=value /> }
                })
                .collect_view()}
        </div>
    }
}
