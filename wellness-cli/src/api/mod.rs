use anyhow::{Context, Result};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::RwLock;
use std::time::Duration;

use crate::config::Config;
use crate::models::{ExerciseEntry, HealthRecord, UserProfile};

pub mod endpoints;
mod error;

pub use endpoints::{Endpoint, Method};
pub use error::ApiError;

/// API client for the health and wellness backend.
///
/// Every call is a single request: no retry, no caching. The bearer token
/// is installed from the saved session and read at request time.
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl ApiClient {
    /// Create a new API client from configuration
    pub fn new(config: &Config) -> Result<Self> {
        let timeout = Duration::from_secs(config.api.timeout_seconds);

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        let token = config.session_token().map(str::to_string);

        Ok(Self {
            client,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            token: RwLock::new(token),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Install a freshly acquired session token
    pub fn set_token(&self, token: String) {
        if let Ok(mut slot) = self.token.write() {
            *slot = Some(token);
        }
    }

    pub fn clear_token(&self) {
        if let Ok(mut slot) = self.token.write() {
            *slot = None;
        }
    }

    pub fn has_token(&self) -> bool {
        self.current_token().is_some()
    }

    fn current_token(&self) -> Option<String> {
        self.token.read().ok().and_then(|t| t.clone())
    }

    fn request(&self, endpoint: Endpoint) -> Result<RequestBuilder, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint.path);

        let builder = match endpoint.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
        };

        if endpoint.authenticated {
            let token = self.current_token().ok_or(ApiError::NotLoggedIn)?;
            Ok(builder.bearer_auth(token))
        } else {
            Ok(builder)
        }
    }

    /// Send a record to a write endpoint (POST or PUT).
    ///
    /// A success body that is empty or not JSON is reported as `Value::Null`.
    pub async fn write<B>(&self, endpoint: Endpoint, body: &B) -> Result<Value, ApiError>
    where
        B: Serialize + ?Sized,
    {
        tracing::debug!("{:?} {}", endpoint.method, endpoint.path);

        let response = self.request(endpoint)?.json(body).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            Ok(serde_json::from_slice(&bytes).unwrap_or(Value::Null))
        } else {
            Err(ApiError::from_status(
                status,
                &String::from_utf8_lossy(&bytes),
            ))
        }
    }

    /// Read a whole resource
    pub async fn fetch<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, ApiError> {
        tracing::debug!("{:?} {}", endpoint.method, endpoint.path);

        let response = self.request(endpoint)?.send().await?;
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::InvalidResponse(e.to_string()))
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body))
        }
    }

    pub async fn list_exercises(&self) -> Result<Vec<ExerciseEntry>, ApiError> {
        self.fetch(endpoints::LIST_EXERCISES).await
    }

    pub async fn fetch_profile(&self) -> Result<UserProfile, ApiError> {
        self.fetch(endpoints::GET_PROFILE).await
    }

    pub async fn fetch_tracking(&self) -> Result<Vec<HealthRecord>, ApiError> {
        self.fetch(endpoints::TRACKING_HISTORY).await
    }
}
