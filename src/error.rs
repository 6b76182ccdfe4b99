use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Restaurant not found")]
    RestaurantNotFound,

    #[error("validation errors")]
    Validation,

    #[error("Database error")]
    Db(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Error bodies are part of the API contract: not-found uses a single
        // `error` string, validation uses an `errors` array. Persistence
        // detail is never surfaced to the caller.
        let (status, body) = match &self {
            AppError::RestaurantNotFound => (
                StatusCode::NOT_FOUND,
                serde_json::json!({ "error": self.to_string() }),
            ),
            AppError::Validation => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "errors": [self.to_string()] }),
            ),
            AppError::Db(err) => {
                tracing::error!(error = %err, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({ "error": "Internal Server Error" }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
