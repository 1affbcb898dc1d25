//! Holiday adapter - Implements HolidayPort using integration_calendarific

use application::error::ApplicationError;
use application::ports::HolidayPort;
use async_trait::async_trait;
use domain::entities::Holiday;
use domain::value_objects::CountryCode;
use integration_calendarific::{
    CalendarificClient, CalendarificConfig, CalendarificError, HolidayClient,
};
use tracing::instrument;

/// Adapter for public holidays via Calendarific
#[derive(Debug)]
pub struct HolidayAdapter {
    client: CalendarificClient,
}

impl HolidayAdapter {
    /// Create an adapter from client configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails to initialize.
    pub fn new(config: &CalendarificConfig) -> Result<Self, ApplicationError> {
        let client = CalendarificClient::new(config).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    fn map_error(err: CalendarificError) -> ApplicationError {
        match err {
            CalendarificError::ConnectionFailed(e)
            | CalendarificError::RequestFailed(e)
            | CalendarificError::ParseError(e)
            | CalendarificError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            CalendarificError::Timeout { timeout_secs } => ApplicationError::ExternalService(
                format!("calendarific timed out after {timeout_secs}s"),
            ),
            CalendarificError::AuthenticationFailed(e)
            | CalendarificError::ConfigurationError(e) => ApplicationError::Configuration(e),
            CalendarificError::QuotaExceeded | CalendarificError::RateLimitExceeded => {
                ApplicationError::RateLimited
            },
        }
    }
}

#[async_trait]
impl HolidayPort for HolidayAdapter {
    #[instrument(skip(self))]
    async fn holidays(
        &self,
        country: &CountryCode,
        year: i32,
    ) -> Result<Vec<Holiday>, ApplicationError> {
        let records = self
            .client
            .holidays(country.as_str(), year)
            .await
            .map_err(Self::map_error)?;

        Ok(records
            .into_iter()
            .map(|record| Holiday::new(record.name, record.date))
            .collect())
    }
}
