use leptos::prelude::*;
use thaw::*;

use crate::dashboard::controller::{use_dashboard, DashboardController};
use crate::dashboard::filters::{FilterKey, ALL};
use crate::dashboard::messages::DashboardMsg;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::ui::{DateField, SelectField};
use crate::shared::icons::icon;

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctrl = use_dashboard();
    let vm = ctrl.view_model();
    let is_expanded = RwSignal::new(true);
    let active_count = Signal::derive(move || vm.with(|vm| vm.filters.active_count()));

    view! {
        <FilterPanel
            is_expanded=is_expanded
            active_filters_count=active_count
            header_actions=move || view! {
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| ctrl.dispatch(DashboardMsg::ResetFilters)
                >
                    {icon("refresh")}
                    " Reset filters"
                </Button>
            }
        >
            <Flex gap=FlexGap::Medium style="flex-wrap: wrap;">
                {FilterKey::SELECTS
                    .iter()
                    .map(|key| filter_select(ctrl, *key))
                    .collect_view()}
                {FilterKey::DATES
                    .iter()
                    .map(|key| filter_date(ctrl, *key))
                    .collect_view()}
            </Flex>
        </FilterPanel>
    }
}

fn filter_select(ctrl: DashboardController, key: FilterKey) -> impl IntoView {
    let vm = ctrl.view_model();
    let value = Signal::derive(move || vm.with(|vm| vm.filters.get(key).to_string()));
    let options = Signal::derive(move || {
        vm.with(|vm| {
            std::iter::once((ALL.to_string(), "All".to_string()))
                .chain(
                    key.options(&vm.filter_options)
                        .iter()
                        .map(|o| (o.clone(), o.clone())),
                )
                .collect::<Vec<_>>()
        })
    });

    view! {
        <SelectField
            label=key.label()
            id=format!("{}-filter", key.param())
            value=value
            options=options
            on_change=Callback::new(move |v: String| ctrl.dispatch(DashboardMsg::FilterChanged(key, v)))
        />
    }
}

fn filter_date(ctrl: DashboardController, key: FilterKey) -> impl IntoView {
    let vm = ctrl.view_model();
    let value = Signal::derive(move || vm.with(|vm| vm.filters.get(key).to_string()));

    view! {
        <DateField
            label=key.label()
            id=key.param()
            value=value
            on_change=Callback::new(move |v: String| ctrl.dispatch(DashboardMsg::FilterChanged(key, v)))
        />
    }
}
