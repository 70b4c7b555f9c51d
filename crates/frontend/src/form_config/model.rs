//! Form-schema editor state and the pure operations behind its tabs.

use contracts::form_config::{FieldDefinition, FieldType, NewFieldRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormConfigTab {
    #[default]
    Fields,
    Sections,
    Order,
    Validations,
}

impl FormConfigTab {
    pub const ALL: [FormConfigTab; 4] = [
        FormConfigTab::Fields,
        FormConfigTab::Sections,
        FormConfigTab::Order,
        FormConfigTab::Validations,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormConfigTab::Fields => "Fields",
            FormConfigTab::Sections => "Sections",
            FormConfigTab::Order => "Field Order",
            FormConfigTab::Validations => "Validations",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum AddFieldFeedback {
    #[default]
    None,
    Adding,
    Added(String),
    Failed(String),
}

impl AddFieldFeedback {
    pub fn text(&self) -> String {
        match self {
            AddFieldFeedback::None => String::new(),
            AddFieldFeedback::Adding => "Adding...".to_string(),
            AddFieldFeedback::Added(message) => message.clone(),
            AddFieldFeedback::Failed(error) => format!("Error: {}", error),
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            AddFieldFeedback::Added(_) => "form-feedback form-feedback--ok",
            AddFieldFeedback::Failed(_) => "form-feedback form-feedback--error",
            _ => "form-feedback",
        }
    }
}

/// Values typed into the "add field" form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldDraft {
    pub name: String,
    pub label: String,
    pub field_type: FieldType,
    pub subsection: String,
    pub options: String,
    pub required: bool,
}

impl FieldDraft {
    /// Request body, or `None` when the name normalizes to nothing.
    pub fn to_request(&self) -> Option<NewFieldRequest> {
        let name = normalize_field_name(&self.name);
        if name.is_empty() {
            return None;
        }
        Some(NewFieldRequest {
            name,
            label: self.label.clone(),
            field_type: self.field_type.clone(),
            subsection: self.subsection.clone(),
            options: self.options.clone(),
            required: self.required,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct FormConfigState {
    pub fields: Vec<FieldDefinition>,
    pub sections: Vec<String>,
    pub tab: FormConfigTab,
    /// Field ids as currently arranged in the order tab.
    pub order: Vec<i64>,
    pub dragging: Option<i64>,
    pub editing: Option<FieldDefinition>,
    pub add_feedback: AddFieldFeedback,
    /// Bumped after each successful add so the form can clear itself.
    pub added_count: u64,
    pub is_loaded: bool,
}

impl FormConfigState {
    pub fn apply_loaded(&mut self, fields: Vec<FieldDefinition>, sections: Vec<String>) {
        self.order = sorted_ids(&fields);
        self.fields = fields;
        self.sections = sections;
        self.dragging = None;
        self.is_loaded = true;
    }

    pub fn field(&self, id: i64) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn field_mut(&mut self, id: i64) -> Option<&mut FieldDefinition> {
        self.fields.iter_mut().find(|f| f.id == id)
    }

    /// Fields in the order-tab arrangement.
    pub fn ordered_fields(&self) -> Vec<FieldDefinition> {
        self.order
            .iter()
            .filter_map(|id| self.field(*id).cloned())
            .collect()
    }
}

/// Trim, collapse whitespace runs to `_`, lowercase.
pub fn normalize_field_name(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
}

/// Field ids sorted by `field_order` (missing counts as 0), ties keep
/// server order.
pub fn sorted_ids(fields: &[FieldDefinition]) -> Vec<i64> {
    let mut sorted: Vec<&FieldDefinition> = fields.iter().collect();
    sorted.sort_by_key(|f| f.order_key());
    sorted.into_iter().map(|f| f.id).collect()
}

/// Drop `dragged` onto `target`: after it when moving down, before it when
/// moving up. Unknown ids or a self-drop leave the order unchanged.
pub fn move_item(order: &mut Vec<i64>, dragged: i64, target: i64) {
    if dragged == target {
        return;
    }
    let (Some(from), Some(to)) = (
        order.iter().position(|id| *id == dragged),
        order.iter().position(|id| *id == target),
    ) else {
        return;
    };
    let item = order.remove(from);
    // Moving down, removal shifts the target left, so `to` lands after it.
    order.insert(to, item);
}

/// `(field id, 1-based position)` for the reorder request.
pub fn field_orders(order: &[i64]) -> Vec<(i64, u32)> {
    order
        .iter()
        .enumerate()
        .map(|(index, id)| (*id, index as u32 + 1))
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenamePlan {
    /// Cancelled, empty or same name.
    Unchanged,
    NoFields,
    /// Ids of every field in the old section.
    Updates(Vec<i64>),
}

pub fn rename_plan(fields: &[FieldDefinition], old: &str, new: Option<&str>) -> RenamePlan {
    if !new.is_some_and(|n| !n.is_empty() && n != old) {
        return RenamePlan::Unchanged;
    }
    let ids: Vec<i64> = fields
        .iter()
        .filter(|f| f.subsection.as_deref() == Some(old))
        .map(|f| f.id)
        .collect();
    if ids.is_empty() {
        RenamePlan::NoFields
    } else {
        RenamePlan::Updates(ids)
    }
}

/// Each section with the number of fields that reference it.
pub fn section_counts(sections: &[String], fields: &[FieldDefinition]) -> Vec<(String, usize)> {
    sections
        .iter()
        .map(|section| {
            let count = fields
                .iter()
                .filter(|f| f.subsection.as_deref() == Some(section.as_str()))
                .count();
            (section.clone(), count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields() -> Vec<FieldDefinition> {
        serde_json::from_value(json!([
            {"id": 1, "name": "full_name", "label": "Full Name", "type": "text",
             "subsection": "Personal", "required": 1, "is_core": 1, "field_order": 2},
            {"id": 2, "name": "email", "label": "Email", "type": "email",
             "subsection": "Personal", "required": 1, "is_core": 1, "field_order": 1},
            {"id": 3, "name": "college", "label": "College", "type": "select",
             "subsection": "Education", "field_order": 3},
            {"id": 4, "name": "notes", "label": "Notes", "type": "textarea"}
        ]))
        .unwrap()
    }

    #[test]
    fn field_names_are_normalized() {
        assert_eq!(normalize_field_name("  Years of  Experience "), "years_of_experience");
        assert_eq!(normalize_field_name("LinkedIn\tURL"), "linkedin_url");
        assert_eq!(normalize_field_name("   "), "");
    }

    #[test]
    fn draft_with_blank_name_is_rejected() {
        let draft = FieldDraft {
            name: "   ".into(),
            label: "Anything".into(),
            ..Default::default()
        };
        assert!(draft.to_request().is_none());

        let draft = FieldDraft {
            name: "Notice Period".into(),
            label: "Notice period".into(),
            field_type: FieldType::Number,
            ..Default::default()
        };
        let request = draft.to_request().unwrap();
        assert_eq!(request.name, "notice_period");
        assert_eq!(request.field_type, FieldType::Number);
    }

    #[test]
    fn ids_sort_by_field_order_with_missing_first() {
        assert_eq!(sorted_ids(&fields()), vec![4, 2, 1, 3]);
    }

    #[test]
    fn dragging_down_lands_after_target() {
        let mut order = vec![10, 20, 30, 40];
        move_item(&mut order, 10, 30);
        assert_eq!(order, vec![20, 30, 10, 40]);
    }

    #[test]
    fn dragging_up_lands_before_target() {
        let mut order = vec![10, 20, 30, 40];
        move_item(&mut order, 40, 20);
        assert_eq!(order, vec![10, 40, 20, 30]);
    }

    #[test]
    fn invalid_drops_are_ignored() {
        let mut order = vec![10, 20, 30];
        move_item(&mut order, 20, 20);
        move_item(&mut order, 99, 10);
        assert_eq!(order, vec![10, 20, 30]);
    }

    #[test]
    fn reorder_after_drag_uses_final_positions() {
        let mut order = vec![1, 2, 3];
        move_item(&mut order, 3, 1);
        assert_eq!(field_orders(&order), vec![(3, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn rename_plans() {
        let fields = fields();
        assert_eq!(rename_plan(&fields, "Personal", None), RenamePlan::Unchanged);
        assert_eq!(rename_plan(&fields, "Personal", Some("")), RenamePlan::Unchanged);
        assert_eq!(rename_plan(&fields, "Personal", Some("Personal")), RenamePlan::Unchanged);
        assert_eq!(rename_plan(&fields, "Work", Some("Career")), RenamePlan::NoFields);
        assert_eq!(
            rename_plan(&fields, "Personal", Some("About You")),
            RenamePlan::Updates(vec![1, 2])
        );
    }

    #[test]
    fn sections_count_their_fields() {
        let sections = vec!["Personal".to_string(), "Education".to_string(), "Work".to_string()];
        assert_eq!(
            section_counts(&sections, &fields()),
            vec![
                ("Personal".to_string(), 2),
                ("Education".to_string(), 1),
                ("Work".to_string(), 0)
            ]
        );
    }

    #[test]
    fn loading_resets_order_tab() {
        let mut state = FormConfigState::default();
        state.dragging = Some(3);
        state.apply_loaded(fields(), vec![]);
        assert_eq!(state.order, vec![4, 2, 1, 3]);
        assert!(state.dragging.is_none());
        let labels: Vec<String> = state.ordered_fields().into_iter().map(|f| f.label).collect();
        assert_eq!(labels, vec!["Notes", "Email", "Full Name", "College"]);
    }
}
