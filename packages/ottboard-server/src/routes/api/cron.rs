use crate::error::AppError;
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use chrono::{SecondsFormat, Utc};
use ottboard_core::{RefreshReceipt, current_snapshot, format_units};
use std::sync::Arc;
use tracing::info;

/// Scheduled-refresh trigger. The snapshot is recomputed on every call; the
/// receipt exists so the external scheduler has something to log.
pub(crate) async fn cron_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    authorize(state.cron_secret.as_deref(), &headers)?;

    let data = current_snapshot();
    info!(
        display_date = %data.display_date,
        grand_total = %format_units(data.grand_total.total),
        "analytics data refreshed"
    );

    let receipt = RefreshReceipt {
        success: true,
        message: "Analytics data refreshed".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        display_date: data.display_date,
        grand_total: data.grand_total.total,
    };
    Ok((StatusCode::OK, Json(receipt)))
}

fn authorize(secret: Option<&str>, headers: &HeaderMap) -> Result<(), AppError> {
    let Some(secret) = secret else {
        return Ok(());
    };
    let presented = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    match presented {
        Some(value) if value == format!("Bearer {secret}") => Ok(()),
        _ => Err(AppError::Unauthorized(
            "invalid cron credentials".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_auth(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_authorize_open_when_no_secret() {
        assert!(authorize(None, &HeaderMap::new()).is_ok());
    }

    #[test]
    fn test_authorize_accepts_matching_bearer() {
        let headers = headers_with_auth("Bearer hunter2");
        assert!(authorize(Some("hunter2"), &headers).is_ok());
    }

    #[test]
    fn test_authorize_rejects_missing_or_wrong_credentials() {
        assert!(authorize(Some("hunter2"), &HeaderMap::new()).is_err());
        assert!(authorize(Some("hunter2"), &headers_with_auth("Bearer nope")).is_err());
        assert!(authorize(Some("hunter2"), &headers_with_auth("hunter2")).is_err());
    }

    #[tokio::test]
    async fn test_cron_handler_produces_receipt() {
        let state = Arc::new(AppState { cron_secret: None });
        let result = cron_handler(State(state), HeaderMap::new()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_cron_handler_rejects_without_secret() {
        let state = Arc::new(AppState {
            cron_secret: Some("hunter2".to_string()),
        });
        let result = cron_handler(State(state), HeaderMap::new()).await;
        assert!(result.is_err());
    }
}
