use contracts::shared::api_message::ApiMessage;
use contracts::system::users::{CreateViewerDto, DeleteUserDto, User};

use crate::shared::api_utils::{get_json, post_json, post_status, ApiError};

const USERS_PATH: &str = "/api/users";
const DELETE_USER_PATH: &str = "/api/users/delete";

/// Fetch all dashboard accounts
pub async fn fetch_users() -> Result<Vec<User>, ApiError> {
    get_json(USERS_PATH, "Failed to fetch users.").await
}

/// Create a viewer account; returns the server's confirmation text.
pub async fn create_viewer(dto: &CreateViewerDto) -> Result<String, ApiError> {
    let result: ApiMessage = post_json(USERS_PATH, dto, "Failed to add user.").await?;
    Ok(result.message.unwrap_or_default())
}

pub async fn delete_user(id: i64) -> Result<(), ApiError> {
    post_status(DELETE_USER_PATH, &DeleteUserDto { id }, "Failed to delete user.").await
}
