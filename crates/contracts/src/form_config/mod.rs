//! Dynamic application-form schema: field definitions, sections and rules.

pub mod validations;

use crate::shared::serde_helpers::{lenient_bool, lenient_i64, lenient_opt_i64};
use serde::{Deserialize, Serialize};
use std::fmt;

pub use validations::{ValidationRule, ValidationRules};

/// One configurable field of the public application form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type", default)]
    pub field_type: FieldType,
    #[serde(default)]
    pub subsection: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub required: bool,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_core: bool,
    #[serde(default, deserialize_with = "lenient_opt_i64")]
    pub field_order: Option<i64>,
    #[serde(default)]
    pub options: Option<String>,
    #[serde(default)]
    pub validations: Option<String>,
}

impl FieldDefinition {
    pub fn order_key(&self) -> i64 {
        self.field_order.unwrap_or(0)
    }

    pub fn section(&self) -> &str {
        self.subsection.as_deref().unwrap_or("")
    }

    /// Core fields can be neither deleted nor have their required flag changed.
    pub fn can_delete(&self) -> bool {
        !self.is_core
    }

    pub fn required_locked(&self) -> bool {
        self.is_core
    }

    pub fn rules(&self) -> ValidationRules {
        ValidationRules::parse(self.validations.as_deref())
    }
}

/// Input widget of a field. Unknown widget names round-trip untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    #[default]
    Text,
    Email,
    Tel,
    Number,
    Date,
    Textarea,
    Select,
    Radio,
    Checkbox,
    File,
    Other(String),
}

impl FieldType {
    pub const KNOWN: [FieldType; 10] = [
        FieldType::Text,
        FieldType::Email,
        FieldType::Tel,
        FieldType::Number,
        FieldType::Date,
        FieldType::Textarea,
        FieldType::Select,
        FieldType::Radio,
        FieldType::Checkbox,
        FieldType::File,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            FieldType::Text => "text",
            FieldType::Email => "email",
            FieldType::Tel => "tel",
            FieldType::Number => "number",
            FieldType::Date => "date",
            FieldType::Textarea => "textarea",
            FieldType::Select => "select",
            FieldType::Radio => "radio",
            FieldType::Checkbox => "checkbox",
            FieldType::File => "file",
            FieldType::Other(s) => s,
        }
    }

    /// Types whose choices come from the `options` list.
    pub fn has_options(&self) -> bool {
        matches!(self, FieldType::Select | FieldType::Radio | FieldType::Checkbox)
    }
}

impl From<String> for FieldType {
    fn from(s: String) -> Self {
        FieldType::from(s.as_str())
    }
}

impl From<&str> for FieldType {
    fn from(s: &str) -> Self {
        match s {
            "text" => FieldType::Text,
            "email" => FieldType::Email,
            "tel" => FieldType::Tel,
            "number" => FieldType::Number,
            "date" => FieldType::Date,
            "textarea" => FieldType::Textarea,
            "select" => FieldType::Select,
            "radio" => FieldType::Radio,
            "checkbox" => FieldType::Checkbox,
            "file" => FieldType::File,
            other => FieldType::Other(other.to_string()),
        }
    }
}

impl From<FieldType> for String {
    fn from(t: FieldType) -> Self {
        t.as_str().to_string()
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /api/form/config`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFieldRequest {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub subsection: String,
    pub options: String,
    pub required: bool,
}

/// Partial update sent to `PUT /api/form/config/{id}`; absent keys are left
/// unchanged by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<FieldType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subsection: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validations: Option<String>,
}

impl FieldPatch {
    pub fn required(required: bool) -> Self {
        Self {
            required: Some(required),
            ..Default::default()
        }
    }

    pub fn subsection(subsection: impl Into<String>) -> Self {
        Self {
            subsection: Some(subsection.into()),
            ..Default::default()
        }
    }

    pub fn validations(rules: &ValidationRules) -> Self {
        Self {
            validations: Some(rules.to_json()),
            ..Default::default()
        }
    }
}

/// Body of `POST /api/form/config/reorder`: `(field id, 1-based position)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReorderRequest {
    pub field_orders: Vec<(i64, u32)>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_sqlite_row() {
        let field: FieldDefinition = serde_json::from_value(json!({
            "id": 4,
            "name": "full_name",
            "label": "Full Name",
            "type": "text",
            "subsection": "Personal",
            "required": 1,
            "is_core": 1,
            "field_order": 2,
            "options": null,
            "validations": "{\"minLength\":3}"
        }))
        .unwrap();

        assert_eq!(field.id, 4);
        assert!(field.required);
        assert!(field.is_core);
        assert!(!field.can_delete());
        assert!(field.required_locked());
        assert_eq!(field.order_key(), 2);
        assert_eq!(field.rules().display(ValidationRule::MinLength), "3");
    }

    #[test]
    fn unknown_type_round_trips() {
        let t: FieldType = serde_json::from_value(json!("rating")).unwrap();
        assert_eq!(t, FieldType::Other("rating".into()));
        assert_eq!(serde_json::to_value(&t).unwrap(), json!("rating"));
        assert!(!t.has_options());
        assert!(FieldType::Radio.has_options());
    }

    #[test]
    fn patch_serializes_only_present_keys() {
        assert_eq!(
            serde_json::to_value(FieldPatch::required(false)).unwrap(),
            json!({"required": false})
        );
        assert_eq!(
            serde_json::to_value(FieldPatch::subsection("Academics")).unwrap(),
            json!({"subsection": "Academics"})
        );
    }

    #[test]
    fn reorder_pairs_serialize_as_arrays() {
        let req = ReorderRequest {
            field_orders: vec![(9, 1), (3, 2)],
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"field_orders": [[9, 1], [3, 2]]})
        );
    }
}
