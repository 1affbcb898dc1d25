//! Calendarific integration
//!
//! National public holidays for a country and year from the
//! [Calendarific API](https://calendarific.com/api-documentation).

mod client;
mod config;
mod error;
mod models;

pub use client::{CalendarificClient, HolidayClient};
pub use config::CalendarificConfig;
pub use error::CalendarificError;
pub use models::HolidayRecord;
