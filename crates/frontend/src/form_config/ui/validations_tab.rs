use contracts::form_config::{FieldDefinition, ValidationRule};
use leptos::prelude::*;

use super::fields_tab::type_badge;
use crate::form_config::controller::{use_form_config, FormConfigController};
use crate::form_config::messages::FormConfigMsg;

fn rule_input(rule: ValidationRule) -> (&'static str, &'static str, &'static str) {
    match rule {
        ValidationRule::MinLength => ("Min Length", "number", "e.g., 3"),
        ValidationRule::MaxLength => ("Max Length", "number", "e.g., 50"),
        ValidationRule::Pattern => ("Pattern (RegEx)", "text", "e.g., ^[0-9]+$"),
        ValidationRule::ErrorMessage => {
            ("Custom Error Message", "text", "Custom validation error message")
        }
    }
}

#[component]
pub fn ValidationsTab() -> impl IntoView {
    let ctrl = use_form_config();
    let state = ctrl.state();
    // Keyed on ids so saving a rule does not rebuild the inputs.
    let ids = Memo::new(move |_| state.with(|s| s.fields.iter().map(|f| f.id).collect::<Vec<_>>()));

    view! {
        <div class="validations">
            {move || {
                ids.track();
                state
                    .with_untracked(|s| s.fields.clone())
                    .into_iter()
                    .map(|field| validation_card(ctrl, field))
                    .collect_view()
            }}
        </div>
    }
}

fn validation_card(ctrl: FormConfigController, field: FieldDefinition) -> impl IntoView {
    let id = field.id;
    let rules = field.rules();

    view! {
        <div class="validation-field">
            <div class="validation-field__header">
                <div>
                    <h5>{field.label.clone()}</h5>
                    <p class="text-muted">{format!("{} ({})", field.name, field.field_type)}</p>
                </div>
                {type_badge(&field.field_type)}
            </div>
            <div class="validation-field__grid">
                {ValidationRule::ALL
                    .iter()
                    .map(|rule| {
                        let rule = *rule;
                        let (caption, input_type, placeholder) = rule_input(rule);
                        view! {
                            <div class="form__group">
                                <label class="form__label">{caption}</label>
                                <input
                                    type=input_type
                                    class="form__input"
                                    placeholder=placeholder
                                    prop:value=rules.display(rule)
                                    on:change=move |ev| {
                                        ctrl.dispatch(FormConfigMsg::ValidationChanged(
                                            id,
                                            rule,
                                            event_target_value(&ev),
                                        ))
                                    }
                                />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
