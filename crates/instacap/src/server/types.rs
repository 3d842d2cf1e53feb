use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

use crate::core::error::AppError;
use crate::instagram::PostMetadata;

/// Body of `GET /health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// Body of both extract endpoints.
///
/// Success carries `data`, failure carries `error`; the other key is omitted.
#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<PostMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExtractResponse {
    pub fn ok(data: PostMetadata) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

/// Every error, validation or upstream, is answered with 400 and its message.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_validation() {
            log::info!("Rejected request: {}", self);
        } else {
            log::debug!("Returning lookup failure: {}", self);
        }
        (StatusCode::BAD_REQUEST, Json(ExtractResponse::failed(self.to_string()))).into_response()
    }
}
