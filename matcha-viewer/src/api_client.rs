//! HTTP client for the analytics backend.

use matcha_model::{InteractionCounts, User, UserId, UserStats};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failure modes of a backend request.
///
/// The viewer treats every variant the same way (log and keep prior state),
/// but keeping them distinct makes the diagnostics readable.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Client for the analytics API.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client against the given base URL.
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        log::info!("[ApiClient] Creating new API client with base URL: {base_url}");

        Self { client, base_url }
    }

    /// Build a full URL for an analytics endpoint path.
    fn build_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/api/analytics/{}", self.base_url, path)
    }

    /// Execute a GET request and decode the JSON body.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.build_url(path);
        log::debug!("[ApiClient] GET request to: {url}");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::Status { status, body });
        }
        Ok(response.json().await?)
    }

    /// Fetch the full user collection, in backend order.
    pub async fn fetch_users(&self) -> ApiResult<Vec<User>> {
        self.get("users").await
    }

    /// Fetch aggregate user statistics for the dashboard.
    pub async fn fetch_user_stats(&self) -> ApiResult<UserStats> {
        self.get("stats/users").await
    }

    /// Fetch per-type interaction counts for one user.
    pub async fn fetch_user_interactions(
        &self,
        user_id: UserId,
    ) -> ApiResult<InteractionCounts> {
        self.get(&format!("stats/users/{user_id}/interactions")).await
    }

    /// Check backend reachability. The endpoint returns a plain string.
    pub async fn health_check(&self) -> ApiResult<String> {
        let url = self.build_url("health");
        log::debug!("[ApiClient] GET request to: {url}");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::Status { status, body });
        }
        Ok(response.text().await?)
    }
}
