use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::{json, Value};

/// Static build tag reported as `app_version` in every envelope.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Wrapper that renders handler results in the uniform response envelope:
/// `{code, message, app_version, result}` where `result` is always an array
/// and `code` mirrors the HTTP status.
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    pub status: StatusCode,
    pub message: String,
    pub result: Vec<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 200 OK with the given result items
    pub fn success(result: Vec<T>) -> Self {
        Self {
            status: StatusCode::OK,
            message: "Success".to_string(),
            result,
        }
    }

    /// 201 Created with the given result items
    pub fn created(result: Vec<T>) -> Self {
        Self {
            status: StatusCode::CREATED,
            message: "Success".to_string(),
            result,
        }
    }

    /// Build the envelope body
    pub fn to_json(&self) -> Result<Value, serde_json::Error> {
        let result = serde_json::to_value(&self.result)?;
        Ok(json!({
            "code": self.status.as_u16(),
            "message": self.message,
            "app_version": APP_VERSION,
            "result": result,
        }))
    }
}

impl ApiResponse<Value> {
    /// 200 OK with an empty result array (e.g. delete)
    pub fn empty() -> Self {
        Self::success(vec![])
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        match self.to_json() {
            Ok(body) => (self.status, Json(body)).into_response(),
            Err(e) => {
                tracing::error!("failed to serialize response body: {}", e);
                crate::error::ApiError::internal_server_error("Failed to format response").into_response()
            }
        }
    }
}

/// Handler return type: enveloped success or a taxonomy error
pub type ApiResult<T> = Result<ApiResponse<T>, crate::error::ApiError>;
