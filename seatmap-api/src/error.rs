use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Unknown flight, or an id that is not a positive integer.
    #[error("Not found")]
    NotFound,

    #[error("Data access failed: {0}")]
    DataAccess(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "code": 404, "data": {} })),
            )
                .into_response(),
            AppError::DataAccess(err) => {
                tracing::error!("Data access failed: {}", err);
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "code": 400, "errors": "could not connect to db" })),
                )
                    .into_response()
            }
        }
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for AppError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        Self::DataAccess(err)
    }
}
