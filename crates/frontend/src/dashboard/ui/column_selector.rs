use leptos::prelude::*;
use thaw::*;

use crate::dashboard::controller::use_dashboard;
use crate::dashboard::messages::DashboardMsg;
use crate::shared::components::ui::CheckboxField;
use crate::shared::icons::icon;

/// Dropdown of column checkboxes. Rebuilt from every fetched column set.
#[component]
pub fn ColumnSelector() -> impl IntoView {
    let ctrl = use_dashboard();
    let vm = ctrl.view_model();
    let (open, set_open) = signal(false);

    view! {
        <div class="column-selector">
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| set_open.update(|o| *o = !*o)
            >
                {icon("columns")}
                " Columns"
            </Button>
            <Show when=move || open.get()>
                <div class="column-selector__menu">
                    <For
                        each=move || vm.with(|vm| vm.columns.columns().to_vec())
                        key=|column| column.clone()
                        children=move |column| {
                            let name = column.clone();
                            let checked = Signal::derive(move || vm.with(|vm| vm.columns.is_visible(&name)));
                            let toggled = column.clone();
                            view! {
                                <CheckboxField
                                    label=column.clone()
                                    id=format!("col-{}", column)
                                    checked=checked
                                    on_change=Callback::new(move |visible: bool| {
                                        ctrl.dispatch(DashboardMsg::ToggleColumn(toggled.clone(), visible))
                                    })
                                />
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
