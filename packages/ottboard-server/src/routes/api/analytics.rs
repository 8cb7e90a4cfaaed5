use crate::error::AppError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use ottboard_core::current_snapshot;

/// Serves the snapshot in the raw wire shape consumed by external callers.
pub(crate) async fn analytics_handler() -> Result<impl IntoResponse, AppError> {
    let data = current_snapshot();
    Ok((StatusCode::OK, Json(data)))
}
