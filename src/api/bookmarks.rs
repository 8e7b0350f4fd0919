//! Bookmark API endpoints.

use axum::{extract::rejection::JsonRejection, Json};
use serde_json::Value;

use super::{json_object, success, ApiResult};
use crate::forms::{ApiBookmarkForm, ApiBookmarkRangeEditForm};

/// POST /api/bookmarks/validate - Validate a new bookmark.
pub async fn validate_bookmark_create(
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<ApiBookmarkForm> {
    let data = json_object(payload)?;
    success(ApiBookmarkForm::create(&data)?)
}

/// PUT /api/bookmarks/validate - Validate an update of one bookmark.
pub async fn validate_bookmark_edit(
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<ApiBookmarkForm> {
    let data = json_object(payload)?;
    success(ApiBookmarkForm::edit(&data)?)
}

/// PUT /api/bookmarks/range/validate - Validate an update of a bookmark range.
pub async fn validate_bookmark_range_edit(
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<ApiBookmarkRangeEditForm> {
    let data = json_object(payload)?;
    let form = ApiBookmarkRangeEditForm::process_data(&data)?;
    tracing::debug!(tags_in = ?form.tags_in, "Range edit accepted");
    success(form)
}
