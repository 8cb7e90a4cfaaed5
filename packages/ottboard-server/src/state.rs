#[derive(Clone)]
pub(crate) struct AppState {
    /// Shared secret required by the scheduled-refresh endpoint; when unset,
    /// the endpoint is open.
    pub(crate) cron_secret: Option<String>,
}
