use contracts::form_config::{FieldDefinition, FieldType};
use leptos::prelude::*;
use thaw::*;

use super::SECTIONS_DATALIST;
use crate::form_config::controller::{use_form_config, FormConfigController};
use crate::form_config::messages::FormConfigMsg;
use crate::form_config::model::FieldDraft;
use crate::shared::components::ui::{CheckboxField, SelectField};
use crate::shared::icons::icon;

pub fn field_type_options() -> Vec<(String, String)> {
    FieldType::KNOWN
        .iter()
        .map(|t| (t.as_str().to_string(), t.as_str().to_string()))
        .collect()
}

pub fn type_badge(field_type: &FieldType) -> impl IntoView {
    let name = field_type.as_str().to_string();
    view! {
        <span class=format!("field-type-badge field-type-{}", name)>{name.clone()}</span>
    }
}

#[component]
pub fn FieldsTab() -> impl IntoView {
    let ctrl = use_form_config();
    let state = ctrl.state();
    let fields = Memo::new(move |_| state.with(|s| s.fields.clone()));

    view! {
        <Table attr:style="width: 100%;">
            <TableHeader>
                <TableRow>
                    <TableHeaderCell resizable=false min_width=60.0>"Order"</TableHeaderCell>
                    <TableHeaderCell resizable=false min_width=140.0>"Name"</TableHeaderCell>
                    <TableHeaderCell resizable=false min_width=140.0>"Label"</TableHeaderCell>
                    <TableHeaderCell resizable=false min_width=120.0>"Section"</TableHeaderCell>
                    <TableHeaderCell resizable=false min_width=90.0>"Type"</TableHeaderCell>
                    <TableHeaderCell resizable=false min_width=80.0>"Required"</TableHeaderCell>
                    <TableHeaderCell resizable=false min_width=120.0>"Actions"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {move || fields.get().into_iter().map(|field| field_row(ctrl, field)).collect_view()}
            </TableBody>
        </Table>

        <AddFieldForm />
    }
}

fn field_row(ctrl: FormConfigController, field: FieldDefinition) -> impl IntoView {
    let id = field.id;
    let order_key = field.order_key();
    let name = field.name.clone();
    let label = field.label.clone();
    let subsection = field.subsection.clone().unwrap_or_else(|| "N/A".to_string());
    let badge = type_badge(&field.field_type);
    let required = field.required;
    let required_locked = field.required_locked();
    let can_delete = field.can_delete();

    view! {
        <TableRow>
            <TableCell>
                <TableCellLayout>{order_key}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>
                    <code>{name}</code>
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>{label}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>
                    {subsection}
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>{badge}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>
                    <CheckboxField
                        label=String::new()
                        checked=required
                        disabled=required_locked
                        on_change=Callback::new(move |required: bool| {
                            ctrl.dispatch(FormConfigMsg::ToggleRequired(id, required))
                        })
                    />
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| ctrl.dispatch(FormConfigMsg::EditField(id))
                    >
                        "Edit"
                    </Button>
                    {if can_delete {
                        view! {
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| ctrl.dispatch(FormConfigMsg::DeleteField(id))
                            >
                                "Delete"
                            </Button>
                        }
                        .into_any()
                    } else {
                        view! { <span class="text-muted">"Core"</span> }.into_any()
                    }}
                </TableCellLayout>
            </TableCell>
        </TableRow>
    }
}

#[component]
fn AddFieldForm() -> impl IntoView {
    let ctrl = use_form_config();
    let state = ctrl.state();

    let name = RwSignal::new(String::new());
    let label = RwSignal::new(String::new());
    let field_type = RwSignal::new(FieldType::Text.as_str().to_string());
    let subsection = RwSignal::new(String::new());
    let options = RwSignal::new(String::new());
    let required = RwSignal::new(false);
    let shows_options = Signal::derive(move || FieldType::from(field_type.get()).has_options());

    let added = Memo::new(move |_| state.with(|s| s.added_count));
    Effect::new(move |prev: Option<u64>| {
        let count = added.get();
        if prev.is_some_and(|p| p != count) {
            name.set(String::new());
            label.set(String::new());
            field_type.set(FieldType::Text.as_str().to_string());
            subsection.set(String::new());
            options.set(String::new());
            required.set(false);
        }
        count
    });

    let submit = move |_| {
        ctrl.dispatch(FormConfigMsg::AddField(FieldDraft {
            name: name.get_untracked(),
            label: label.get_untracked(),
            field_type: FieldType::from(field_type.get_untracked()),
            subsection: subsection.get_untracked(),
            options: options.get_untracked(),
            required: required.get_untracked(),
        }))
    };

    view! {
        <h3 class="modal-section-title">"Add New Field"</h3>
        <Flex gap=FlexGap::Medium style="flex-wrap: wrap;">
            <div class="form__group">
                <label class="form__label">"Field Name"</label>
                <Input value=name placeholder="e.g. years_of_experience" />
            </div>
            <div class="form__group">
                <label class="form__label">"Label"</label>
                <Input value=label placeholder="e.g. Years of Experience" />
            </div>
            <SelectField
                label="Type"
                value=field_type
                options=field_type_options()
                on_change=Callback::new(move |v: String| field_type.set(v))
            />
            <div class="form__group">
                <label class="form__label" for="new-field-subsection">"Section"</label>
                <input
                    id="new-field-subsection"
                    class="form__input"
                    list=SECTIONS_DATALIST
                    prop:value=move || subsection.get()
                    on:input=move |ev| subsection.set(event_target_value(&ev))
                />
            </div>
            <Show when=move || shows_options.get()>
                <div class="form__group">
                    <label class="form__label">"Options (comma-separated)"</label>
                    <Input value=options placeholder="Option 1, Option 2" />
                </div>
            </Show>
            <CheckboxField
                label="Required"
                checked=required
                on_change=Callback::new(move |v: bool| required.set(v))
            />
        </Flex>
        <Button appearance=ButtonAppearance::Primary on_click=submit>
            {icon("plus")}
            " Add Field"
        </Button>
        <p class=move || state.with(|s| s.add_feedback.class())>
            {move || state.with(|s| s.add_feedback.text())}
        </p>
    }
}
