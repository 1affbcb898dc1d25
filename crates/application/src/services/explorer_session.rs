//! State of one explorer tab
//!
//! All mutation is synchronous. The service drives the network calls and
//! brings their results back here tagged with the [`SearchTicket`] or
//! [`SelectionToken`] they were issued under; stale results are refused.

use domain::{
    CountryCode, GeoLocation, Holiday, MapView, PlaceSelection, PointOfInterest, SearchTicket,
    SelectionToken, SessionId,
};
use serde::Serialize;

use super::holiday_panel::{HolidayPanel, HolidayPanelView};

/// Everything the follow-up fetches need from a fresh selection
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionChange {
    pub token: SelectionToken,
    pub location: GeoLocation,
    pub country_code: Option<CountryCode>,
}

/// Point-in-time copy of a session for rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub session_id: SessionId,
    pub selection: Option<PlaceSelection>,
    pub selection_token: SelectionToken,
    pub map: MapView,
    pub pois_loading: bool,
    pub pois: Vec<PointOfInterest>,
    pub holidays: HolidayPanelView,
}

/// Selection, panels and map of one tab
#[derive(Debug)]
pub struct ExplorerSession {
    id: SessionId,
    selection: Option<PlaceSelection>,
    token: SelectionToken,
    ticket: SearchTicket,
    pois: Vec<PointOfInterest>,
    pois_loading: bool,
    holidays: HolidayPanel,
    map: MapView,
}

impl ExplorerSession {
    pub fn new(id: SessionId) -> Self {
        Self {
            id,
            selection: None,
            token: SelectionToken::INITIAL,
            ticket: SearchTicket::default(),
            pois: Vec::new(),
            pois_loading: false,
            holidays: HolidayPanel::new(),
            map: MapView::default(),
        }
    }

    pub const fn id(&self) -> SessionId {
        self.id
    }

    pub const fn selection(&self) -> Option<&PlaceSelection> {
        self.selection.as_ref()
    }

    pub const fn token(&self) -> SelectionToken {
        self.token
    }

    /// Register a new search; only its ticket may select from now on
    pub fn begin_search(&mut self) -> SearchTicket {
        self.ticket = self.ticket.next();
        self.ticket
    }

    /// Replace the selection if `ticket` is still the latest search
    ///
    /// On success the POI and holiday panels are emptied and put in loading
    /// state (holidays only when the place has a country) and the map is
    /// recentered. Returns `None` and changes nothing for a superseded ticket.
    pub fn select_if_current(
        &mut self,
        ticket: SearchTicket,
        selection: PlaceSelection,
    ) -> Option<SelectionChange> {
        if ticket != self.ticket {
            return None;
        }

        self.token = self.token.next();
        self.pois.clear();
        self.pois_loading = true;
        self.map.show_pois(&[]);
        if selection.has_country() {
            self.holidays.begin_loading();
        } else {
            self.holidays.show(Vec::new());
        }
        self.map.focus(&selection);

        let change = SelectionChange {
            token: self.token,
            location: selection.location,
            country_code: selection.country_code.clone(),
        };
        self.selection = Some(selection);
        Some(change)
    }

    /// Show POIs fetched under `token`; `false` if the selection moved on
    pub fn apply_pois(&mut self, token: SelectionToken, pois: Vec<PointOfInterest>) -> bool {
        if token != self.token {
            return false;
        }
        self.map.show_pois(&pois);
        self.pois = pois;
        self.pois_loading = false;
        true
    }

    /// Show holidays fetched under `token`; `false` if the selection moved on
    pub fn apply_holidays(&mut self, token: SelectionToken, holidays: Vec<Holiday>) -> bool {
        if token != self.token {
            return false;
        }
        self.holidays.show(holidays);
        true
    }

    pub fn next_holiday_page(&mut self) -> bool {
        self.holidays.next_page()
    }

    pub fn previous_holiday_page(&mut self) -> bool {
        self.holidays.previous_page()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.id,
            selection: self.selection.clone(),
            selection_token: self.token,
            map: self.map.clone(),
            pois_loading: self.pois_loading,
            pois: self.pois.clone(),
            holidays: self.holidays.view(),
        }
    }
}
