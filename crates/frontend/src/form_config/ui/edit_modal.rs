use std::sync::Arc;

use contracts::form_config::{FieldDefinition, FieldPatch, FieldType};
use leptos::prelude::*;
use thaw::*;

use super::fields_tab::field_type_options;
use super::SECTIONS_DATALIST;
use crate::form_config::controller::use_form_config;
use crate::form_config::messages::FormConfigMsg;
use crate::shared::components::ui::{CheckboxField, SelectField, TextareaField};
use crate::shared::modal::Modal;

/// Secondary dialog editing one field. Validations are edited as raw JSON.
#[component]
pub fn EditFieldModal(field: FieldDefinition) -> impl IntoView {
    let ctrl = use_form_config();
    let id = field.id;

    let label = RwSignal::new(field.label.clone());
    let field_type = RwSignal::new(field.field_type.as_str().to_string());
    let subsection = RwSignal::new(field.subsection.clone().unwrap_or_default());
    let options = RwSignal::new(field.options.clone().unwrap_or_default());
    let required = RwSignal::new(field.required);
    let validations = RwSignal::new(
        field
            .validations
            .clone()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "{}".to_string()),
    );
    let shows_options = Signal::derive(move || FieldType::from(field_type.get()).has_options());

    let save = move |_| {
        ctrl.dispatch(FormConfigMsg::SaveEdit(
            id,
            FieldPatch {
                label: Some(label.get_untracked()),
                field_type: Some(FieldType::from(field_type.get_untracked())),
                subsection: Some(subsection.get_untracked()),
                options: Some(options.get_untracked()),
                required: Some(required.get_untracked()),
                validations: Some(validations.get_untracked()),
            },
        ))
    };
    let close = Callback::new(move |_| ctrl.dispatch(FormConfigMsg::CloseEdit));

    view! {
        <Modal
            title=format!("Edit Field: {}", field.name)
            on_close=close
            footer=Arc::new(move || {
                view! {
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| close.run(())>
                        "Cancel"
                    </Button>
                    <Button appearance=ButtonAppearance::Primary on_click=save>
                        "Save Changes"
                    </Button>
                }
                .into_any()
            })
        >
            <div class="form__group">
                <label class="form__label">"Label"</label>
                <Input value=label />
            </div>
            <SelectField
                label="Type"
                value=field_type
                options=field_type_options()
                on_change=Callback::new(move |v: String| field_type.set(v))
            />
            <div class="form__group">
                <label class="form__label" for="edit-field-subsection">"Section"</label>
                <input
                    id="edit-field-subsection"
                    class="form__input"
                    list=SECTIONS_DATALIST
                    prop:value=move || subsection.get()
                    on:input=move |ev| subsection.set(event_target_value(&ev))
                />
            </div>
            <Show when=move || shows_options.get()>
                <div class="form__group">
                    <label class="form__label">"Options (comma-separated)"</label>
                    <Input value=options />
                </div>
            </Show>
            <CheckboxField
                label="Required"
                checked=required
                disabled=field.required_locked()
                on_change=Callback::new(move |v: bool| required.set(v))
            />
            <TextareaField label="Validations (JSON)" value=validations rows=4 />
        </Modal>
    }
}
