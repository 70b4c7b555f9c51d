pub mod edit_modal;
pub mod fields_tab;
pub mod order_tab;
pub mod sections_tab;
pub mod validations_tab;

use leptos::prelude::*;

use super::controller::FormConfigController;
use super::messages::FormConfigMsg;
use super::model::FormConfigTab;
use crate::shared::modal::Modal;
use edit_modal::EditFieldModal;
use fields_tab::FieldsTab;
use order_tab::OrderTab;
use sections_tab::SectionsTab;
use validations_tab::ValidationsTab;

/// Id of the `<datalist>` offering existing section names.
pub const SECTIONS_DATALIST: &str = "existing-sections";

#[component]
pub fn FormConfigModal(on_close: Callback<()>) -> impl IntoView {
    let ctrl = FormConfigController::new(on_close);
    provide_context(ctrl);
    ctrl.dispatch(FormConfigMsg::Load);

    let state = ctrl.state();
    let tab = Memo::new(move |_| state.with(|s| s.tab));
    let editing = Memo::new(move |_| state.with(|s| s.editing.clone()));

    view! {
        <Modal title="Form Configuration" class="modal--wide" on_close=on_close>
            <datalist id=SECTIONS_DATALIST>
                <For
                    each=move || state.with(|s| s.sections.clone())
                    key=|section| section.clone()
                    children=|section| view! { <option value=section></option> }
                />
            </datalist>

            <div class="tabs">
                {FormConfigTab::ALL
                    .iter()
                    .map(|t| {
                        let t = *t;
                        view! {
                            <button
                                class=move || if tab.get() == t { "tabs__tab tabs__tab--active" } else { "tabs__tab" }
                                on:click=move |_| ctrl.dispatch(FormConfigMsg::SelectTab(t))
                            >
                                {t.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="tabs__content">
                {move || match tab.get() {
                    FormConfigTab::Fields => view! { <FieldsTab /> }.into_any(),
                    FormConfigTab::Sections => view! { <SectionsTab /> }.into_any(),
                    FormConfigTab::Order => view! { <OrderTab /> }.into_any(),
                    FormConfigTab::Validations => view! { <ValidationsTab /> }.into_any(),
                }}
            </div>
        </Modal>

        {move || editing.get().map(|field| view! { <EditFieldModal field=field /> })}
    }
}
