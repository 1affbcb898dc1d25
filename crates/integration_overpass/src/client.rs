//! Overpass HTTP client

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, instrument};

use crate::{
    config::OverpassConfig,
    error::OverpassError,
    models::{ApiResponse, Poi},
    query::{amenity_query, is_valid_category},
};

/// Lookup of amenities near a coordinate
#[async_trait]
pub trait PoiClient: Send + Sync {
    /// Find amenities tagged `category` within the configured radius
    async fn find_pois(
        &self,
        latitude: f64,
        longitude: f64,
        category: &str,
    ) -> Result<Vec<Poi>, OverpassError>;
}

/// Overpass API client
#[derive(Debug)]
pub struct OverpassClient {
    client: Client,
    base_url: String,
    radius_m: u32,
    timeout_secs: u64,
}

impl OverpassClient {
    /// Create a new Overpass client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: &OverpassConfig) -> Result<Self, OverpassError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| OverpassError::ConfigurationError(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            radius_m: config.radius_m,
            timeout_secs: config.timeout_secs,
        })
    }

    fn interpreter_url(&self) -> String {
        format!("{}/api/interpreter", self.base_url)
    }
}

#[async_trait]
impl PoiClient for OverpassClient {
    #[instrument(skip(self))]
    async fn find_pois(
        &self,
        latitude: f64,
        longitude: f64,
        category: &str,
    ) -> Result<Vec<Poi>, OverpassError> {
        if !is_valid_category(category) {
            return Err(OverpassError::InvalidCategory(category.to_string()));
        }

        let query = amenity_query(latitude, longitude, self.radius_m, category);
        debug!(query = %query, "Sending Overpass query");

        let response = self
            .client
            .post(self.interpreter_url())
            .form(&[("data", query.as_str())])
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                if e.is_timeout() {
                    OverpassError::Timeout {
                        timeout_secs: self.timeout_secs,
                    }
                } else if e.is_connect() {
                    OverpassError::ConnectionFailed(e.to_string())
                } else {
                    OverpassError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        debug!(status = %status, "Received Overpass response");

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(OverpassError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(OverpassError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(OverpassError::RequestFailed(format!(
                "HTTP {status}: {error_text}"
            )));
        }

        let body: ApiResponse = response
            .json()
            .await
            .map_err(|e| OverpassError::ParseError(e.without_url().to_string()))?;

        let pois = body.into_pois(category);
        debug!(count = pois.len(), "Parsed points of interest");
        Ok(pois)
    }
}
