//! Monotonic request tags used to discard out-of-order results
//!
//! A [`SelectionToken`] identifies one place selection: every POI and
//! holiday request is tagged with the token current when it was issued, and
//! its result is applied only while that token is still current.
//!
//! A [`SearchTicket`] does the same one step earlier, for geocode requests:
//! only the result of the most recently issued search may change the
//! selection.

use serde::{Deserialize, Serialize};

/// Identity of a place selection within one session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionToken(u64);

impl SelectionToken {
    /// The token in force before anything has been selected
    pub const INITIAL: Self = Self(0);

    /// The token following this one
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Raw counter value
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Identity of a search request within one session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchTicket(u64);

impl SearchTicket {
    /// The ticket following this one
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Raw counter value
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_increase() {
        let first = SelectionToken::INITIAL.next();
        let second = first.next();
        assert!(second > first);
        assert_eq!(second.value(), 2);
    }

    #[test]
    fn tickets_increase() {
        let ticket = SearchTicket::default().next().next();
        assert_eq!(ticket.value(), 2);
    }
}
