use contracts::form_config::{FieldDefinition, FieldPatch, NewFieldRequest, ReorderRequest};
use contracts::shared::api_message::ApiMessage;

use crate::shared::api_utils::{delete_json, get_json, post_json, put_status, ApiError};

const CONFIG_PATH: &str = "/api/form/config";
const SECTIONS_PATH: &str = "/api/form/sections";
const REORDER_PATH: &str = "/api/form/config/reorder";

fn field_path(id: i64) -> String {
    format!("{}/{}", CONFIG_PATH, id)
}

pub async fn fetch_fields() -> Result<Vec<FieldDefinition>, ApiError> {
    get_json(CONFIG_PATH, "Failed to fetch form configuration.").await
}

pub async fn fetch_sections() -> Result<Vec<String>, ApiError> {
    get_json(SECTIONS_PATH, "Failed to fetch sections.").await
}

/// Returns the server's confirmation text.
pub async fn create_field(request: &NewFieldRequest) -> Result<String, ApiError> {
    let result: ApiMessage = post_json(CONFIG_PATH, request, "Failed to add field.").await?;
    Ok(result.message.unwrap_or_default())
}

pub async fn update_field(id: i64, patch: &FieldPatch) -> Result<(), ApiError> {
    put_status(&field_path(id), patch, "Failed to update field.").await
}

pub async fn delete_field(id: i64) -> Result<(), ApiError> {
    let _: ApiMessage = delete_json(&field_path(id), "Failed to delete field.").await?;
    Ok(())
}

pub async fn reorder_fields(request: &ReorderRequest) -> Result<(), ApiError> {
    let _: ApiMessage = post_json(REORDER_PATH, request, "Failed to reorder fields.").await?;
    Ok(())
}
