//! Public holiday entry

use serde::{Deserialize, Serialize};

/// A named calendar date for a country
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// Holiday name
    pub name: String,
    /// ISO 8601 date as reported by the holiday service; may carry a time
    /// part for holidays that start at a specific moment
    pub date: String,
}

impl Holiday {
    /// Create a holiday entry
    pub fn new(name: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
        }
    }
}
