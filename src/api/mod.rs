//! REST API module.
//!
//! Handlers run the submitted input through the matching form and return
//! the cleaned values. Nothing is stored.

mod bookmarks;
mod forms;
mod tags;

pub use bookmarks::*;
pub use forms::*;
pub use tags::*;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::forms::JsonData;

/// Success response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;

/// Create a successful API response.
pub fn success<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(ApiResponse::new(data))
}

/// Unwrap a JSON body that must be an object.
fn json_object(payload: Result<Json<Value>, JsonRejection>) -> Result<JsonData, AppError> {
    let Json(value) = payload?;
    match value {
        Value::Object(data) => Ok(data),
        _ => Err(AppError::BadRequest("JSON object expected".to_string())),
    }
}
