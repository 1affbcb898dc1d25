//! Calendarific response models

use serde::{Deserialize, Serialize};

/// One holiday as reported by Calendarific
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayRecord {
    pub name: String,
    /// ISO 8601 date, sometimes with a time component
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse {
    pub meta: Option<Meta>,
    pub response: Option<ResponseBody>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Meta {
    pub code: u16,
    pub error_detail: Option<String>,
}

/// Calendarific sends `"response": []` when it has nothing to report
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ResponseBody {
    Holidays { holidays: Vec<ApiHoliday> },
    Empty(Vec<serde_json::Value>),
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiHoliday {
    pub name: String,
    pub date: ApiDate,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiDate {
    pub iso: String,
}

impl ApiResponse {
    pub fn into_records(self) -> Vec<HolidayRecord> {
        match self.response {
            Some(ResponseBody::Holidays { holidays }) => holidays
                .into_iter()
                .map(|h| HolidayRecord {
                    name: h.name,
                    date: h.date.iso,
                })
                .collect(),
            Some(ResponseBody::Empty(_)) | None => Vec::new(),
        }
    }
}
