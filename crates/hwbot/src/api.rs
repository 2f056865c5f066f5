//! Practicum homework statuses API client.

use async_trait::async_trait;
use hwbot_common::{truncate_string, FromDate, HwbotError, Result};
use hwbot_config::PracticumConfig;
use reqwest::{header::AUTHORIZATION, redirect, Client, Request, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

/// Source of homework status payloads.
#[async_trait]
pub trait HomeworkApi: Send + Sync {
    /// Fetches statuses of homeworks updated since `from_date`.
    async fn fetch(&self, from_date: FromDate) -> Result<Value>;
}

/// HTTP client for the Practicum API.
#[derive(Debug, Clone)]
pub struct PracticumClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    /// Create a new client with the given configuration
    pub fn new(config: &PracticumConfig) -> Result<Self> {
        // Redirects surface as unexpected statuses instead of being followed
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .redirect(redirect::Policy::none())
            .build()
            .map_err(|e| HwbotError::transport_with_source("failed to create HTTP client", e))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            token: config.token.clone(),
        })
    }

    /// Builds the authenticated GET request for one poll.
    pub fn build_request(&self, from_date: FromDate) -> Result<Request> {
        self.client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date.0)])
            .build()
            .map_err(|e| HwbotError::transport_with_source("failed to build request", e))
    }
}

#[async_trait]
impl HomeworkApi for PracticumClient {
    #[instrument(skip_all, fields(from_date = %from_date))]
    async fn fetch(&self, from_date: FromDate) -> Result<Value> {
        let request = self.build_request(from_date)?;
        debug!(url = %request.url(), "Requesting homework statuses");

        let response = self.client.execute(request).await.map_err(transport_error)?;
        check_status(response.status())?;

        let body = response.text().await.map_err(transport_error)?;
        debug!(body = %truncate_string(&body, 512), "Received homework statuses");

        parse_body(&body)
    }
}

/// Maps a status code and body to the payload or the matching error.
pub fn interpret_response(status: StatusCode, body: &str) -> Result<Value> {
    check_status(status)?;
    parse_body(body)
}

fn check_status(status: StatusCode) -> Result<()> {
    if status == StatusCode::OK {
        Ok(())
    } else {
        Err(HwbotError::unexpected_status(status.as_u16()))
    }
}

fn parse_body(body: &str) -> Result<Value> {
    serde_json::from_str(body).map_err(HwbotError::from)
}

fn transport_error(err: reqwest::Error) -> HwbotError {
    if err.is_timeout() {
        HwbotError::transport_with_source("request timed out", err)
    } else if err.is_connect() {
        HwbotError::transport_with_source("connection failed", err)
    } else if err.is_body() || err.is_decode() {
        HwbotError::transport_with_source("failed to read response body", err)
    } else {
        HwbotError::transport_with_source("request failed", err)
    }
}
