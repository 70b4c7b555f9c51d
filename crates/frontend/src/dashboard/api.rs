use contracts::dashboard::{DashboardResponse, UpdateStatusRequest};

use super::filters::FilterState;
use crate::shared::api_utils::{get_json, post_status, ApiError};

const DATA_PATH: &str = "/api/data";
const UPDATE_STATUS_PATH: &str = "/api/update_status";

/// `GET /api/data` with every active filter as a query parameter.
pub async fn fetch_dashboard(filters: &FilterState) -> Result<DashboardResponse, ApiError> {
    let query = filters
        .to_query()
        .map_err(|e| ApiError::Serialize(e.to_string()))?;
    let path = if query.is_empty() {
        DATA_PATH.to_string()
    } else {
        format!("{}?{}", DATA_PATH, query)
    };
    get_json(&path, "Network response was not ok").await
}

pub async fn update_status(request: &UpdateStatusRequest) -> Result<(), ApiError> {
    post_status(UPDATE_STATUS_PATH, request, "Failed to update status").await
}
