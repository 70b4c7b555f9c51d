use leptos::ev;
use leptos::prelude::*;
use thaw::*;

use super::fields_tab::type_badge;
use crate::form_config::controller::use_form_config;
use crate::form_config::messages::FormConfigMsg;
use crate::shared::dialogs::warn_on_err;
use crate::shared::icons::icon;

/// Drag-and-drop list of fields. Nothing is sent until "Save Order".
#[component]
pub fn OrderTab() -> impl IntoView {
    let ctrl = use_form_config();
    let state = ctrl.state();
    let fields = Memo::new(move |_| state.with(|s| s.ordered_fields()));
    let dragging = Memo::new(move |_| state.with(|s| s.dragging));

    view! {
        <p class="text-muted">"Drag fields to change their order on the application form."</p>
        <div class="sortable-fields">
            {move || {
                fields
                    .get()
                    .into_iter()
                    .map(|field| {
                        let id = field.id;
                        view! {
                            <div
                                class=move || {
                                    if dragging.get() == Some(id) {
                                        "sortable-field-item dragging"
                                    } else {
                                        "sortable-field-item"
                                    }
                                }
                                draggable="true"
                                on:dragstart=move |ev: ev::DragEvent| {
                                    if let Some(transfer) = ev.data_transfer() {
                                        warn_on_err("drag set_data", transfer.set_data("text/plain", &id.to_string()));
                                    }
                                    ctrl.dispatch(FormConfigMsg::DragStart(id));
                                }
                                on:dragover=move |ev: ev::DragEvent| ev.prevent_default()
                                on:drop=move |ev: ev::DragEvent| {
                                    ev.prevent_default();
                                    ctrl.dispatch(FormConfigMsg::DropOn(id));
                                }
                                on:dragend=move |_| ctrl.dispatch(FormConfigMsg::DragEnd)
                            >
                                <span class="drag-handle">{icon("grip")}</span>
                                <span class="sortable-field-item__label">{field.label.clone()}</span>
                                <span class="text-muted">{format!("({})", field.name)}</span>
                                {type_badge(&field.field_type)}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
        <Button
            appearance=ButtonAppearance::Primary
            on_click=move |_| ctrl.dispatch(FormConfigMsg::SaveOrder)
        >
            "Save Order"
        </Button>
    }
}
