use crate::routes;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub(crate) fn axum_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::page::dashboard_handler))
        .nest("/api", routes::api::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
