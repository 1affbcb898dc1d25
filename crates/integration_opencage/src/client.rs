//! OpenCage geocoding client

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, instrument};

use crate::{
    config::OpenCageConfig,
    error::OpenCageError,
    models::{ApiResponse, GeocodeResult},
};

/// Forward geocoding: free text in, best match out
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Resolve `query` to its best match
    ///
    /// Returns `Ok(None)` when the service knows no such place.
    async fn geocode(&self, query: &str) -> Result<Option<GeocodeResult>, OpenCageError>;
}

/// HTTP client for the OpenCage Geocoding API
#[derive(Debug)]
pub struct OpenCageClient {
    client: Client,
    api_key: String,
    base_url: String,
    language: Option<String>,
    timeout_secs: u64,
}

impl OpenCageClient {
    /// Create a new OpenCage client
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client cannot be created.
    pub fn new(config: &OpenCageConfig) -> Result<Self, OpenCageError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                OpenCageError::ConfigurationError("OpenCage API key is required".to_string())
            })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| OpenCageError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            language: config.language.clone(),
            timeout_secs: config.timeout_secs,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/geocode/v1/json", self.base_url)
    }

    /// Request URLs carry the API key, so they are stripped from the message
    fn map_send_error(&self, e: reqwest::Error) -> OpenCageError {
        let e = e.without_url();
        if e.is_timeout() {
            OpenCageError::Timeout {
                timeout_secs: self.timeout_secs,
            }
        } else if e.is_connect() {
            OpenCageError::ConnectionFailed(e.to_string())
        } else {
            OpenCageError::RequestFailed(e.to_string())
        }
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, OpenCageError> {
        let status = response.status();
        match status {
            s if s.is_success() => Ok(response),
            StatusCode::BAD_REQUEST => Err(OpenCageError::InvalidQuery(
                response.text().await.unwrap_or_default(),
            )),
            StatusCode::UNAUTHORIZED => Err(OpenCageError::AuthenticationFailed(
                "Invalid OpenCage API key".to_string(),
            )),
            StatusCode::FORBIDDEN => Err(OpenCageError::AuthenticationFailed(
                "OpenCage API key disabled".to_string(),
            )),
            StatusCode::PAYMENT_REQUIRED => Err(OpenCageError::QuotaExceeded),
            StatusCode::TOO_MANY_REQUESTS => Err(OpenCageError::RateLimitExceeded),
            s if s.is_server_error() => Err(OpenCageError::ServiceUnavailable(format!("HTTP {s}"))),
            s => {
                let body = response.text().await.unwrap_or_default();
                Err(OpenCageError::RequestFailed(format!("HTTP {s}: {body}")))
            },
        }
    }
}

#[async_trait]
impl GeocodingClient for OpenCageClient {
    #[instrument(skip(self), fields(provider = "opencage"))]
    async fn geocode(&self, query: &str) -> Result<Option<GeocodeResult>, OpenCageError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(OpenCageError::InvalidQuery(
                "Geocoding query cannot be empty".to_string(),
            ));
        }

        let mut params: Vec<(&str, &str)> = vec![
            ("q", query),
            ("key", self.api_key.as_str()),
            ("limit", "1"),
            ("no_annotations", "1"),
        ];
        if let Some(language) = &self.language {
            params.push(("language", language.as_str()));
        }

        debug!("Sending geocoding request");

        let response = self
            .client
            .get(self.endpoint())
            .query(&params)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        debug!(status = %response.status(), "Received geocoding response");
        let response = Self::check_status(response).await?;

        let body: ApiResponse = response
            .json()
            .await
            .map_err(|e| OpenCageError::ParseError(e.without_url().to_string()))?;

        let best = body.into_best_match();
        if best.is_none() {
            debug!("No geocoding match");
        }
        Ok(best)
    }
}
