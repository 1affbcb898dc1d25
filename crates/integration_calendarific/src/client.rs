//! Calendarific HTTP client

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::{
    config::CalendarificConfig,
    error::CalendarificError,
    models::{ApiResponse, HolidayRecord},
};

/// Public holiday lookup
#[async_trait]
pub trait HolidayClient: Send + Sync {
    /// Holidays of `country` (ISO 3166-1 alpha-2) in `year`, in API order
    async fn holidays(
        &self,
        country: &str,
        year: i32,
    ) -> Result<Vec<HolidayRecord>, CalendarificError>;
}

/// Calendarific API client
#[derive(Debug)]
pub struct CalendarificClient {
    client: Client,
    api_key: String,
    base_url: String,
    timeout_secs: u64,
}

impl CalendarificClient {
    /// Create a new Calendarific client
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client cannot be created.
    pub fn new(config: &CalendarificConfig) -> Result<Self, CalendarificError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                CalendarificError::ConfigurationError(
                    "Calendarific API key is required".to_string(),
                )
            })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CalendarificError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout_secs: config.timeout_secs,
        })
    }

    fn holidays_url(&self) -> String {
        format!("{}/api/v2/holidays", self.base_url)
    }

    fn status_error(status: StatusCode, detail: String) -> CalendarificError {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                CalendarificError::AuthenticationFailed(detail)
            },
            StatusCode::PAYMENT_REQUIRED => CalendarificError::QuotaExceeded,
            StatusCode::TOO_MANY_REQUESTS => CalendarificError::RateLimitExceeded,
            s if s.is_server_error() => {
                CalendarificError::ServiceUnavailable(format!("HTTP {s}: {detail}"))
            },
            s => CalendarificError::RequestFailed(format!("HTTP {s}: {detail}")),
        }
    }
}

#[async_trait]
impl HolidayClient for CalendarificClient {
    #[instrument(skip(self))]
    async fn holidays(
        &self,
        country: &str,
        year: i32,
    ) -> Result<Vec<HolidayRecord>, CalendarificError> {
        let year = year.to_string();
        let params = [
            ("api_key", self.api_key.as_str()),
            ("country", country),
            ("year", year.as_str()),
        ];

        debug!("Requesting holidays");

        let response = self
            .client
            .get(self.holidays_url())
            .query(&params)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                // The URL carries the API key
                let e = e.without_url();
                if e.is_timeout() {
                    CalendarificError::Timeout {
                        timeout_secs: self.timeout_secs,
                    }
                } else if e.is_connect() {
                    CalendarificError::ConnectionFailed(e.to_string())
                } else {
                    CalendarificError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        debug!(status = %status, "Received holiday response");

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(Self::status_error(status, error_text));
        }

        let body: ApiResponse = response
            .json()
            .await
            .map_err(|e| CalendarificError::ParseError(e.without_url().to_string()))?;

        // Errors can also arrive with HTTP 200 and the real code in `meta`
        if let Some(meta) = &body.meta {
            if meta.code != 200 {
                let code = StatusCode::from_u16(meta.code).unwrap_or(StatusCode::BAD_GATEWAY);
                let detail = meta.error_detail.clone().unwrap_or_default();
                warn!(code = meta.code, detail = %detail, "Calendarific reported an error");
                return Err(Self::status_error(code, detail));
            }
        }

        let records = body.into_records();
        debug!(count = records.len(), "Parsed holidays");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_requires_api_key() {
        let result = CalendarificClient::new(&CalendarificConfig::default());
        assert!(matches!(result, Err(CalendarificError::ConfigurationError(_))));
    }

    #[test]
    fn status_mapping() {
        assert!(matches!(
            CalendarificClient::status_error(StatusCode::UNAUTHORIZED, String::new()),
            CalendarificError::AuthenticationFailed(_)
        ));
        assert!(matches!(
            CalendarificClient::status_error(StatusCode::PAYMENT_REQUIRED, String::new()),
            CalendarificError::QuotaExceeded
        ));
        assert!(matches!(
            CalendarificClient::status_error(StatusCode::BAD_GATEWAY, String::new()),
            CalendarificError::ServiceUnavailable(_)
        ));
        assert!(matches!(
            CalendarificClient::status_error(StatusCode::NOT_FOUND, String::new()),
            CalendarificError::RequestFailed(_)
        ));
    }
}
