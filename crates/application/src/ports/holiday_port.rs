//! Public holiday port

use async_trait::async_trait;
use domain::entities::Holiday;
use domain::value_objects::CountryCode;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for national public holidays
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HolidayPort: Send + Sync {
    /// Holidays of `country` in `year`
    async fn holidays(
        &self,
        country: &CountryCode,
        year: i32,
    ) -> Result<Vec<Holiday>, ApplicationError>;
}
