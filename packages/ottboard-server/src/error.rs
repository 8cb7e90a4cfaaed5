use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::fmt;
use tracing::error;

#[derive(Debug)]
pub(crate) enum AppError {
    Unauthorized(String),
    Render(fmt::Error),
}

impl From<fmt::Error> for AppError {
    fn from(err: fmt::Error) -> Self {
        Self::Render(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::Render(err) => write!(f, "Render error: {}", err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Unauthorized(msg) => {
                error!(error = %msg, "unauthorized request");
                (StatusCode::UNAUTHORIZED, msg)
            }
            AppError::Render(err) => {
                error!(error = %err, "page render error");
                (StatusCode::INTERNAL_SERVER_ERROR, "render error".to_string())
            }
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
