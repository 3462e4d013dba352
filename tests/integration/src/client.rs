//! HTTP client for one deployed handler

use reqwest::{Client, Method, StatusCode};
use serde::Deserialize;
use std::time::Duration;

/// Client bound to a single handler endpoint
pub struct HandlerClient {
    client: Client,
    url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimeEvent {
    pub time: String,
}

/// Status and raw body of a handler response
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

impl RawResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body)
            .unwrap_or_else(|e| panic!("Body is not JSON ({}): {}", e, self.body))
    }
}

#[derive(Debug)]
pub struct ApiError(String);

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Request error: {}", self.0)
    }
}

impl std::error::Error for ApiError {}

pub type ApiResult<T> = Result<T, ApiError>;

impl HandlerClient {
    /// Create a new client for the given endpoint URL
    pub fn new(url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            url: url.trim_end_matches('/').to_string(),
        }
    }

    /// Create a client from an environment variable, if it is set
    pub fn from_env(var: &str) -> Option<Self> {
        let _ = dotenvy::dotenv();
        std::env::var(var).ok().map(|url| Self::new(&url))
    }

    /// GET the health-check timestamp
    pub async fn time(&self) -> ApiResult<RawResponse> {
        self.send(Method::GET, None).await
    }

    /// POST a raw body
    pub async fn post(&self, body: &str) -> ApiResult<RawResponse> {
        self.send(Method::POST, Some(body.to_string())).await
    }

    /// Send with an arbitrary method and no body
    pub async fn request(&self, method: Method) -> ApiResult<RawResponse> {
        self.send(method, None).await
    }

    async fn send(&self, method: Method, body: Option<String>) -> ApiResult<RawResponse> {
        let mut request = self.client.request(method, &self.url);
        if let Some(body) = body {
            request = request.header("Content-Type", "application/json").body(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError(e.to_string()))?;

        Ok(RawResponse { status, body })
    }
}
