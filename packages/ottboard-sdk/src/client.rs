use crate::SdkResult;
use crate::error::SdkError;
use ottboard_core::{AnalyticsSnapshot, RefreshReceipt};
use reqwest::Client;
use std::time::Duration;

/// Client for the ottboard read endpoints.
#[derive(Clone)]
pub struct OttboardClient {
    client: Client,
    pub base_url: String,
    pub timeout: Duration,
    pub cron_secret: Option<String>,
}

impl OttboardClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(30),
            cron_secret: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Shared secret sent as a bearer token to the refresh endpoint.
    pub fn with_cron_secret(mut self, secret: &str) -> Self {
        self.cron_secret = Some(secret.to_string());
        self
    }

    async fn get_json<T>(&self, endpoint: &str) -> SdkResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!(
            "{}/api/{}",
            self.base_url,
            endpoint.trim_start_matches('/')
        );
        let mut request = self.client.get(&url).timeout(self.timeout);

        if let Some(secret) = &self.cron_secret {
            request = request.header("Authorization", format!("Bearer {}", secret));
        }

        let response = request.send().await?.error_for_status()?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetches the current analytics snapshot.
    pub async fn get_analytics(&self) -> SdkResult<AnalyticsSnapshot> {
        self.get_json("analytics").await
    }

    /// Triggers the scheduled refresh and returns the server's receipt.
    pub async fn trigger_refresh(&self) -> SdkResult<RefreshReceipt> {
        let receipt: RefreshReceipt = self.get_json("cron").await?;
        if !receipt.success {
            return Err(SdkError::RefreshRejected {
                message: receipt.message,
            });
        }
        Ok(receipt)
    }
}
