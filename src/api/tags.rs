//! Tag API endpoints.

use axum::{extract::rejection::JsonRejection, Json};
use serde_json::Value;

use super::{json_object, success, ApiResult};
use crate::forms::ApiTagForm;

/// POST /api/tags/validate - Validate a list of tags.
pub async fn validate_tags(payload: Result<Json<Value>, JsonRejection>) -> ApiResult<ApiTagForm> {
    let data = json_object(payload)?;
    success(ApiTagForm::process_data(&data)?)
}
