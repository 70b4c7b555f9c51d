//! Drives the form-configuration modal. Every tab sends [`FormConfigMsg`]s
//! here; server calls run on `spawn_local` and write back into the state
//! signal.

use contracts::form_config::{FieldPatch, ReorderRequest, ValidationRule};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use super::messages::FormConfigMsg;
use super::model::{
    field_orders, move_item, rename_plan, AddFieldFeedback, FieldDraft, FormConfigState,
    RenamePlan,
};
use crate::shared::dialogs::{alert, confirm, prompt};

const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this field? This will remove the corresponding column and all its data from the database. This action cannot be undone.";

#[derive(Clone, Copy)]
pub struct FormConfigController {
    state: RwSignal<FormConfigState>,
    on_close: Callback<()>,
}

impl FormConfigController {
    pub fn new(on_close: Callback<()>) -> Self {
        Self {
            state: RwSignal::new(FormConfigState::default()),
            on_close,
        }
    }

    pub fn state(&self) -> ReadSignal<FormConfigState> {
        self.state.read_only()
    }

    pub fn close(&self) {
        self.on_close.run(());
    }

    pub fn dispatch(&self, msg: FormConfigMsg) {
        match msg {
            FormConfigMsg::Load => self.load(),
            FormConfigMsg::SelectTab(tab) => self.state.update(|s| s.tab = tab),
            FormConfigMsg::AddField(draft) => self.add_field(draft),
            FormConfigMsg::EditField(id) => self.state.update(|s| s.editing = s.field(id).cloned()),
            FormConfigMsg::CloseEdit => self.state.update(|s| s.editing = None),
            FormConfigMsg::SaveEdit(id, patch) => self.save_edit(id, patch),
            FormConfigMsg::DeleteField(id) => self.delete_field(id),
            FormConfigMsg::ToggleRequired(id, required) => self.toggle_required(id, required),
            FormConfigMsg::DragStart(id) => self.state.update(|s| s.dragging = Some(id)),
            FormConfigMsg::DropOn(target) => self.state.update(|s| {
                if let Some(dragged) = s.dragging {
                    move_item(&mut s.order, dragged, target);
                }
            }),
            FormConfigMsg::DragEnd => self.state.update(|s| s.dragging = None),
            FormConfigMsg::SaveOrder => self.save_order(),
            FormConfigMsg::ValidationChanged(id, rule, value) => {
                self.change_validation(id, rule, value)
            }
            FormConfigMsg::RenameSection(section) => self.rename_section(section),
        }
    }

    /// Fetch fields and sections together. A failure on the first load closes
    /// the modal; later failures only alert.
    fn load(&self) {
        let state = self.state;
        let on_close = self.on_close;
        spawn_local(async move {
            log::debug!("Loading form configuration");
            let result = match api::fetch_fields().await {
                Ok(fields) => api::fetch_sections().await.map(|sections| (fields, sections)),
                Err(e) => Err(e),
            };
            match result {
                Ok((fields, sections)) => {
                    log::debug!("Loaded {} fields in {} sections", fields.len(), sections.len());
                    state.update(|s| s.apply_loaded(fields, sections));
                }
                Err(e) => {
                    log::error!("Failed to load form configuration: {}", e);
                    alert(&format!("Could not load form configuration: {}", e));
                    if !state.with_untracked(|s| s.is_loaded) {
                        on_close.run(());
                    }
                }
            }
        });
    }

    fn add_field(&self, draft: FieldDraft) {
        let Some(request) = draft.to_request() else {
            alert("Field Name is required and cannot contain spaces.");
            return;
        };
        let ctrl = *self;
        self.state.update(|s| s.add_feedback = AddFieldFeedback::Adding);
        spawn_local(async move {
            match api::create_field(&request).await {
                Ok(message) => {
                    log::info!("Added field {}", request.name);
                    ctrl.state.update(|s| {
                        s.add_feedback = AddFieldFeedback::Added(message);
                        s.added_count += 1;
                    });
                    ctrl.load();
                }
                Err(e) => {
                    log::error!("Failed to add field {}: {}", request.name, e);
                    ctrl.state
                        .update(|s| s.add_feedback = AddFieldFeedback::Failed(e.to_string()));
                }
            }
        });
    }

    fn save_edit(&self, id: i64, patch: FieldPatch) {
        let ctrl = *self;
        spawn_local(async move {
            match api::update_field(id, &patch).await {
                Ok(()) => {
                    log::info!("Updated field {}", id);
                    ctrl.state.update(|s| s.editing = None);
                    ctrl.load();
                }
                Err(e) => {
                    log::error!("Failed to update field {}: {}", id, e);
                    alert(&format!("Could not update field: {}", e));
                }
            }
        });
    }

    fn delete_field(&self, id: i64) {
        if !confirm(DELETE_CONFIRMATION) {
            return;
        }
        let ctrl = *self;
        spawn_local(async move {
            match api::delete_field(id).await {
                Ok(()) => {
                    log::info!("Deleted field {}", id);
                    ctrl.load();
                }
                Err(e) => {
                    log::error!("Failed to delete field {}: {}", id, e);
                    alert(&format!("Could not delete field: {}", e));
                }
            }
        });
    }

    /// Optimistic: the checkbox flips at once and is rolled back on failure.
    fn toggle_required(&self, id: i64, required: bool) {
        let state = self.state;
        let set_required = move |value: bool| {
            state.update(|s| {
                if let Some(field) = s.field_mut(id) {
                    field.required = value;
                }
            })
        };
        set_required(required);
        spawn_local(async move {
            match api::update_field(id, &FieldPatch::required(required)).await {
                Ok(()) => log::info!("Field {} required = {}", id, required),
                Err(e) => {
                    log::error!("Failed to update field {}: {}", id, e);
                    set_required(!required);
                    alert(&format!("Could not update field: {}", e));
                }
            }
        });
    }

    fn save_order(&self) {
        let request = ReorderRequest {
            field_orders: self.state.with_untracked(|s| field_orders(&s.order)),
        };
        let ctrl = *self;
        spawn_local(async move {
            match api::reorder_fields(&request).await {
                Ok(()) => {
                    log::info!("Saved order of {} fields", request.field_orders.len());
                    alert("Field order saved successfully!");
                    ctrl.load();
                }
                Err(e) => {
                    log::error!("Failed to reorder fields: {}", e);
                    alert(&format!("Could not save field order: {}", e));
                }
            }
        });
    }

    fn change_validation(&self, id: i64, rule: ValidationRule, value: String) {
        let Some(mut rules) = self.state.with_untracked(|s| s.field(id).map(|f| f.rules())) else {
            return;
        };
        rules.apply(rule, &value);
        let patch = FieldPatch::validations(&rules);
        let state = self.state;
        spawn_local(async move {
            match api::update_field(id, &patch).await {
                Ok(()) => {
                    log::info!("Updated {} rule of field {}", rule.key(), id);
                    state.update(|s| {
                        if let Some(field) = s.field_mut(id) {
                            field.validations = patch.validations.clone();
                        }
                    });
                }
                Err(e) => {
                    log::error!("Failed to update validation of field {}: {}", id, e);
                    alert(&format!("Could not update validation: {}", e));
                }
            }
        });
    }

    fn rename_section(&self, old: String) {
        let new = prompt("Enter new section name:", &old);
        let plan = self
            .state
            .with_untracked(|s| rename_plan(&s.fields, &old, new.as_deref()));
        let ids = match plan {
            RenamePlan::Unchanged => return,
            RenamePlan::NoFields => {
                alert("No fields found in this section.");
                return;
            }
            RenamePlan::Updates(ids) => ids,
        };
        let new = new.unwrap_or_default();
        let ctrl = *self;
        spawn_local(async move {
            let patch = FieldPatch::subsection(new.clone());
            let mut first_error = None;
            for id in &ids {
                if let Err(e) = api::update_field(*id, &patch).await {
                    log::error!("Failed to move field {} to section {}: {}", id, new, e);
                    first_error.get_or_insert(e);
                }
            }
            if let Some(e) = first_error {
                alert(&format!("Could not rename section: {}", e));
            } else {
                log::info!("Renamed section {} to {} ({} fields)", old, new, ids.len());
            }
            ctrl.load();
        });
    }
}

pub fn use_form_config() -> FormConfigController {
    use_context::<FormConfigController>().expect("FormConfigController not provided in context")
}
