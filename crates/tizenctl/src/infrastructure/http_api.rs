//! Client for the companion HTTP management API.
//!
//! The TV serves a small REST surface next to the WebSocket channel:
//!
//! | Operation        | Request                              |
//! |------------------|--------------------------------------|
//! | device identity  | `GET    /api/v2/`                    |
//! | app status       | `GET    /api/v2/applications/{id}`   |
//! | launch app       | `POST   /api/v2/applications/{id}`   |
//! | stop app         | `DELETE /api/v2/applications/{id}`   |
//!
//! These calls are stateless request/response plumbing: no token, no retry.
//! A non-success status surfaces immediately as [`ApiError::Status`] —
//! retrying a 404 for an app the TV does not have would not help anyone.
//!
//! One `reqwest::Client` is built per [`DeviceApi`] and reused across calls
//! so connection pooling works; the timeout and TLS policy come from the
//! session configuration.

use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

use tizenctl_core::domain::responses::{AppInfo, DeviceInfo, ResponseShapeError};

use crate::domain::SessionConfig;

/// Error type for management API calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client could not be built or the request failed to complete
    /// (connection refused, timeout, TLS failure).
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The TV answered with a non-success status.
    #[error("device returned {status} for {url}")]
    Status { status: StatusCode, url: String },

    /// The response body does not have the expected shape.
    #[error(transparent)]
    Shape(#[from] ResponseShapeError),
}

/// HTTP client for one TV's management API.
pub struct DeviceApi {
    client: reqwest::Client,
    base_url: String,
}

impl DeviceApi {
    /// Builds a client for the TV described by `config`.
    ///
    /// The underlying `reqwest::Client` applies the configured timeout to
    /// every request and skips certificate verification when
    /// `accept_invalid_certs` is set, matching the WebSocket transport.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the TLS backend cannot be initialised.
    pub fn new(config: &SessionConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;
        Ok(Self {
            client,
            base_url: config.http_base_url(),
        })
    }

    /// Fetches device identity and power state (`GET /`).
    pub async fn get_info(&self) -> Result<DeviceInfo, ApiError> {
        let url = format!("{}/", self.base_url);
        let body = self.get_json(&url).await?;
        Ok(DeviceInfo::from_json(&body)?)
    }

    /// Fetches the status of an installed application.
    pub async fn get_app_info(&self, app_id: &str) -> Result<AppInfo, ApiError> {
        let url = self.app_url(app_id);
        let body = self.get_json(&url).await?;
        Ok(AppInfo::from_json(&body)?)
    }

    /// Launches an application by its identifier.
    pub async fn start_app(&self, app_id: &str) -> Result<(), ApiError> {
        let url = self.app_url(app_id);
        debug!("starting app: {url}");
        let response = self.client.post(&url).send().await?;
        Self::check_status(response).await.map(|_| ())
    }

    /// Stops a running application.
    pub async fn stop_app(&self, app_id: &str) -> Result<(), ApiError> {
        let url = self.app_url(app_id);
        debug!("stopping app: {url}");
        let response = self.client.delete(&url).send().await?;
        Self::check_status(response).await.map(|_| ())
    }

    fn app_url(&self, app_id: &str) -> String {
        format!("{}/applications/{}", self.base_url, app_id)
    }

    async fn get_json(&self, url: &str) -> Result<serde_json::Value, ApiError> {
        debug!("GET {url}");
        let response = self.client.get(url).send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(ApiError::Status {
                status,
                url: response.url().to_string(),
            })
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
