use contracts::form_config::{FieldPatch, ValidationRule};

use super::model::{FieldDraft, FormConfigTab};

#[derive(Debug, Clone, PartialEq)]
pub enum FormConfigMsg {
    Load,
    SelectTab(FormConfigTab),
    AddField(FieldDraft),
    EditField(i64),
    CloseEdit,
    SaveEdit(i64, FieldPatch),
    DeleteField(i64),
    ToggleRequired(i64, bool),
    DragStart(i64),
    DropOn(i64),
    DragEnd,
    SaveOrder,
    ValidationChanged(i64, ValidationRule, String),
    RenameSection(String),
}
