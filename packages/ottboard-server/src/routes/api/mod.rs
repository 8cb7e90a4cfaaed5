use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use std::sync::Arc;

mod analytics;
mod cron;

pub(crate) fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/analytics", get(analytics::analytics_handler))
        .route("/cron", get(cron::cron_handler))
}
