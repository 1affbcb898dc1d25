//! Explorer use cases
//!
//! A search geocodes the query, swaps the selection and then fetches POIs
//! and holidays for the new place concurrently. Session locks are held only
//! for the synchronous transitions in between network calls; stale results
//! are dropped by the ticket/token checks in [`ExplorerSession`].
//!
//! [`ExplorerSession`]: super::explorer_session::ExplorerSession

use std::{sync::Arc, time::Duration};

use chrono::{Datelike, Utc};
use domain::{PlaceSelection, PoiCategory, SessionId};
use tracing::{debug, info, instrument, warn};

use super::explorer_session::{SelectionChange, SessionSnapshot};
use super::session_store::{SessionHandle, SessionStore};
use crate::error::ApplicationError;
use crate::ports::{GeocodingPort, HolidayPort, PoiPort};

/// Tunables for [`ExplorerService`]
#[derive(Debug, Clone)]
pub struct ExplorerConfig {
    /// Amenity tag shown on the map
    pub poi_category: PoiCategory,
    /// Year to list holidays for; the current year when unset
    pub holiday_year: Option<i32>,
    /// Upper bound on concurrently open sessions
    pub max_sessions: usize,
    /// Idle time after which a session may be evicted to make room
    pub session_idle_timeout: Duration,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            poi_category: PoiCategory::default(),
            holiday_year: None,
            max_sessions: 1000,
            session_idle_timeout: Duration::from_secs(30 * 60),
        }
    }
}

/// Orchestrates searches across the three collaborators
pub struct ExplorerService {
    geocoder: Arc<dyn GeocodingPort>,
    pois: Arc<dyn PoiPort>,
    holidays: Arc<dyn HolidayPort>,
    store: SessionStore,
    config: ExplorerConfig,
}

impl std::fmt::Debug for ExplorerService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExplorerService")
            .field("sessions", &self.store.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ExplorerService {
    pub fn new(
        geocoder: Arc<dyn GeocodingPort>,
        pois: Arc<dyn PoiPort>,
        holidays: Arc<dyn HolidayPort>,
        config: ExplorerConfig,
    ) -> Self {
        Self {
            geocoder,
            pois,
            holidays,
            store: SessionStore::new(config.max_sessions, config.session_idle_timeout),
            config,
        }
    }

    pub const fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    pub fn session_count(&self) -> usize {
        self.store.len()
    }

    /// Open a new session
    pub fn create_session(&self) -> Result<SessionSnapshot, ApplicationError> {
        let handle = self.store.create()?;
        let snapshot = handle.lock().snapshot();
        info!(session_id = %snapshot.session_id, "Session created");
        Ok(snapshot)
    }

    pub fn snapshot(&self, id: SessionId) -> Result<SessionSnapshot, ApplicationError> {
        Ok(self.store.get(id)?.lock().snapshot())
    }

    /// Close a session; fetches still in flight for it finish unobserved
    pub fn close_session(&self, id: SessionId) -> Result<(), ApplicationError> {
        if self.store.remove(id) {
            info!(session_id = %id, "Session closed");
            Ok(())
        } else {
            Err(ApplicationError::NotFound(format!("session {id}")))
        }
    }

    /// Search for a place and make it the selection
    ///
    /// A not-found answer or a geocoder failure leaves the session as it
    /// was. If a newer search was started meanwhile, this one's result is
    /// ignored and the current state is returned.
    #[instrument(skip(self))]
    pub async fn search(
        &self,
        id: SessionId,
        query: &str,
    ) -> Result<SessionSnapshot, ApplicationError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ApplicationError::InvalidInput(
                "search query must not be empty".to_string(),
            ));
        }

        let session = self.store.get(id)?;
        let ticket = session.lock().begin_search();

        let Some(place) = self.geocoder.geocode(query).await? else {
            info!("No place matches the query");
            return Err(ApplicationError::NotFound(format!("no place named '{query}'")));
        };

        let selection = PlaceSelection::new(query, place.location, place.country_code);
        let change = session.lock().select_if_current(ticket, selection);
        let Some(change) = change else {
            debug!(ticket = ticket.value(), "Search superseded before it could select");
            let snapshot = session.lock().snapshot();
            return Ok(snapshot);
        };

        debug!(
            token = change.token.value(),
            location = %change.location,
            "Selection changed"
        );
        self.refresh(&session, &change).await;

        let snapshot = session.lock().snapshot();
        Ok(snapshot)
    }

    pub fn next_holiday_page(&self, id: SessionId) -> Result<SessionSnapshot, ApplicationError> {
        let session = self.store.get(id)?;
        let mut guard = session.lock();
        guard.next_holiday_page();
        Ok(guard.snapshot())
    }

    pub fn previous_holiday_page(
        &self,
        id: SessionId,
    ) -> Result<SessionSnapshot, ApplicationError> {
        let session = self.store.get(id)?;
        let mut guard = session.lock();
        guard.previous_holiday_page();
        Ok(guard.snapshot())
    }

    /// Holiday year in effect right now
    pub fn holiday_year(&self) -> i32 {
        self.config
            .holiday_year
            .unwrap_or_else(|| Utc::now().year())
    }

    /// Run the POI and holiday fetches for `change` and apply what is still current
    async fn refresh(&self, session: &SessionHandle, change: &SelectionChange) {
        let token = change.token;

        let pois = async {
            let pois = match self
                .pois
                .find_nearby(change.location, &self.config.poi_category)
                .await
            {
                Ok(pois) => pois,
                Err(e) => {
                    warn!(error = %e, "POI lookup failed, showing none");
                    Vec::new()
                },
            };
            let count = pois.len();
            if session.lock().apply_pois(token, pois) {
                debug!(count, "POIs applied");
            } else {
                debug!(token = token.value(), "Discarded POIs for stale selection");
            }
        };

        let holidays = async {
            let Some(country) = &change.country_code else {
                return;
            };
            let holidays = match self.holidays.holidays(country, self.holiday_year()).await {
                Ok(holidays) => holidays,
                Err(e) => {
                    warn!(error = %e, country = %country, "Holiday lookup failed, showing none");
                    Vec::new()
                },
            };
            let count = holidays.len();
            if session.lock().apply_holidays(token, holidays) {
                debug!(count, "Holidays applied");
            } else {
                debug!(token = token.value(), "Discarded holidays for stale selection");
            }
        };

        futures::join!(pois, holidays);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use domain::{CountryCode, GeoLocation, Holiday, PointOfInterest};
    use mockall::predicate;
    use tokio::sync::Notify;

    use super::*;
    use crate::ports::{GeocodedPlace, MockGeocodingPort, MockHolidayPort, MockPoiPort};

    fn spain() -> Option<CountryCode> {
        CountryCode::new("ES").ok()
    }

    fn place(location: GeoLocation) -> GeocodedPlace {
        GeocodedPlace {
            location,
            country_code: spain(),
        }
    }

    fn holidays(n: usize) -> Vec<Holiday> {
        (1..=n)
            .map(|d| Holiday::new(format!("Holiday {d}"), format!("2025-05-{d:02}")))
            .collect()
    }

    fn config() -> ExplorerConfig {
        ExplorerConfig {
            holiday_year: Some(2025),
            ..ExplorerConfig::default()
        }
    }

    fn service(
        geocoder: MockGeocodingPort,
        pois: MockPoiPort,
        holidays: MockHolidayPort,
    ) -> ExplorerService {
        ExplorerService::new(Arc::new(geocoder), Arc::new(pois), Arc::new(holidays), config())
    }

    // ========================================================================
    // Search
    // ========================================================================

    #[tokio::test]
    async fn search_selects_and_fills_both_panels() {
        let mut geocoder = MockGeocodingPort::new();
        geocoder
            .expect_geocode()
            .with(predicate::eq("Madrid"))
            .times(1)
            .returning(|_| Ok(Some(place(GeoLocation::madrid()))));

        let mut pois = MockPoiPort::new();
        pois.expect_find_nearby()
            .withf(|loc, cat| *loc == GeoLocation::madrid() && cat.as_str() == "restaurant")
            .times(1)
            .returning(|loc, _| Ok(vec![PointOfInterest::new(1, "Casa Lucio", loc)]));

        let mut holiday_port = MockHolidayPort::new();
        holiday_port
            .expect_holidays()
            .withf(|c, y| c.as_str() == "ES" && *y == 2025)
            .times(1)
            .returning(|_, _| Ok(holidays(12)));

        let service = service(geocoder, pois, holiday_port);
        let id = service.create_session().unwrap().session_id;

        let snapshot = service.search(id, "  Madrid ").await.unwrap();

        let selection = snapshot.selection.unwrap();
        assert_eq!(selection.name, "Madrid");
        assert_eq!(selection.country_code, spain());
        assert_eq!(snapshot.pois.len(), 1);
        assert!(!snapshot.pois_loading);
        assert_eq!(snapshot.map.poi_markers().len(), 1);
        assert_eq!(snapshot.map.recenter_seq(), 1);
        assert!(!snapshot.holidays.loading);
        assert_eq!(snapshot.holidays.page.total_pages, 2);
        assert_eq!(snapshot.holidays.page.items.len(), 8);
    }

    #[tokio::test]
    async fn empty_query_is_rejected() {
        let service = service(
            MockGeocodingPort::new(),
            MockPoiPort::new(),
            MockHolidayPort::new(),
        );
        let id = service.create_session().unwrap().session_id;

        let result = service.search(id, "   ").await;
        assert!(matches!(result, Err(ApplicationError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let service = service(
            MockGeocodingPort::new(),
            MockPoiPort::new(),
            MockHolidayPort::new(),
        );
        let result = service.search(SessionId::new(), "Madrid").await;
        assert!(matches!(result, Err(ApplicationError::NotFound(_))));
    }

    #[tokio::test]
    async fn not_found_keeps_previous_state() {
        let mut geocoder = MockGeocodingPort::new();
        geocoder
            .expect_geocode()
            .with(predicate::eq("Madrid"))
            .returning(|_| Ok(Some(place(GeoLocation::madrid()))));
        geocoder
            .expect_geocode()
            .with(predicate::eq("Atlantis"))
            .returning(|_| Ok(None));

        let mut pois = MockPoiPort::new();
        pois.expect_find_nearby()
            .times(1)
            .returning(|loc, _| Ok(vec![PointOfInterest::new(1, "Casa Lucio", loc)]));
        let mut holiday_port = MockHolidayPort::new();
        holiday_port
            .expect_holidays()
            .times(1)
            .returning(|_, _| Ok(holidays(3)));

        let service = service(geocoder, pois, holiday_port);
        let id = service.create_session().unwrap().session_id;
        let before = service.search(id, "Madrid").await.unwrap();

        let result = service.search(id, "Atlantis").await;
        assert!(matches!(result, Err(ApplicationError::NotFound(_))));

        let after = service.snapshot(id).unwrap();
        assert_eq!(after.selection, before.selection);
        assert_eq!(after.pois, before.pois);
        assert_eq!(after.holidays, before.holidays);
        assert_eq!(after.map.recenter_seq(), 1);
    }

    #[tokio::test]
    async fn geocoder_failure_is_surfaced_without_state_change() {
        let mut geocoder = MockGeocodingPort::new();
        geocoder
            .expect_geocode()
            .returning(|_| Err(ApplicationError::ExternalService("boom".to_string())));

        let service = service(geocoder, MockPoiPort::new(), MockHolidayPort::new());
        let id = service.create_session().unwrap().session_id;

        let result = service.search(id, "Madrid").await;
        assert!(matches!(result, Err(ApplicationError::ExternalService(_))));
        assert!(service.snapshot(id).unwrap().selection.is_none());
    }

    #[tokio::test]
    async fn panel_failures_degrade_to_empty_lists() {
        let mut geocoder = MockGeocodingPort::new();
        geocoder
            .expect_geocode()
            .returning(|_| Ok(Some(place(GeoLocation::barcelona()))));
        let mut pois = MockPoiPort::new();
        pois.expect_find_nearby()
            .returning(|_, _| Err(ApplicationError::ExternalService("overpass".to_string())));
        let mut holiday_port = MockHolidayPort::new();
        holiday_port
            .expect_holidays()
            .returning(|_, _| Err(ApplicationError::RateLimited));

        let service = service(geocoder, pois, holiday_port);
        let id = service.create_session().unwrap().session_id;

        let snapshot = service.search(id, "Barcelona").await.unwrap();
        assert!(snapshot.selection.is_some());
        assert!(snapshot.pois.is_empty());
        assert!(!snapshot.pois_loading);
        assert!(snapshot.holidays.page.items.is_empty());
        assert!(!snapshot.holidays.loading);
    }

    #[tokio::test]
    async fn place_without_country_skips_holiday_fetch() {
        let mut geocoder = MockGeocodingPort::new();
        geocoder.expect_geocode().returning(|_| {
            Ok(Some(GeocodedPlace {
                location: GeoLocation::new(-48.87, -123.39).unwrap(),
                country_code: None,
            }))
        });
        let mut pois = MockPoiPort::new();
        pois.expect_find_nearby().times(1).returning(|_, _| Ok(Vec::new()));
        let mut holiday_port = MockHolidayPort::new();
        holiday_port.expect_holidays().never();

        let service = service(geocoder, pois, holiday_port);
        let id = service.create_session().unwrap().session_id;

        let snapshot = service.search(id, "Point Nemo").await.unwrap();
        assert!(snapshot.selection.unwrap().country_code.is_none());
        assert_eq!(snapshot.holidays.page.total_items, 0);
    }

    // ========================================================================
    // Paging and session lifecycle
    // ========================================================================

    #[tokio::test]
    async fn holiday_paging_stops_at_bounds() {
        let mut geocoder = MockGeocodingPort::new();
        geocoder
            .expect_geocode()
            .returning(|_| Ok(Some(place(GeoLocation::madrid()))));
        let mut pois = MockPoiPort::new();
        pois.expect_find_nearby().returning(|_, _| Ok(Vec::new()));
        let mut holiday_port = MockHolidayPort::new();
        holiday_port
            .expect_holidays()
            .returning(|_, _| Ok(holidays(20)));

        let service = service(geocoder, pois, holiday_port);
        let id = service.create_session().unwrap().session_id;
        service.search(id, "Madrid").await.unwrap();

        assert_eq!(service.previous_holiday_page(id).unwrap().holidays.page.page, 0);
        assert_eq!(service.next_holiday_page(id).unwrap().holidays.page.page, 1);
        let last = service.next_holiday_page(id).unwrap().holidays.page;
        assert_eq!(last.page, 2);
        assert_eq!(last.items.len(), 4);
        assert_eq!(service.next_holiday_page(id).unwrap().holidays.page.page, 2);

        // A new search lands on page 0 again
        let again = service.search(id, "Madrid").await.unwrap();
        assert_eq!(again.holidays.page.page, 0);
    }

    #[test]
    fn close_session_removes_it() {
        let service = service(
            MockGeocodingPort::new(),
            MockPoiPort::new(),
            MockHolidayPort::new(),
        );
        let id = service.create_session().unwrap().session_id;
        assert_eq!(service.session_count(), 1);

        service.close_session(id).unwrap();
        assert!(matches!(service.snapshot(id), Err(ApplicationError::NotFound(_))));
        assert!(matches!(
            service.close_session(id),
            Err(ApplicationError::NotFound(_))
        ));
    }

    #[test]
    fn unclosed_sessions_are_reclaimed_once_idle() {
        let service = ExplorerService::new(
            Arc::new(MockGeocodingPort::new()),
            Arc::new(MockPoiPort::new()),
            Arc::new(MockHolidayPort::new()),
            ExplorerConfig {
                max_sessions: 3,
                session_idle_timeout: Duration::from_millis(20),
                ..config()
            },
        );
        for _ in 0..3 {
            service.create_session().unwrap();
        }
        assert!(matches!(
            service.create_session(),
            Err(ApplicationError::RateLimited)
        ));

        std::thread::sleep(Duration::from_millis(40));
        assert!(service.create_session().is_ok());
        assert_eq!(service.session_count(), 1);
    }

    #[test]
    fn holiday_year_defaults_to_current_year() {
        let service = ExplorerService::new(
            Arc::new(MockGeocodingPort::new()),
            Arc::new(MockPoiPort::new()),
            Arc::new(MockHolidayPort::new()),
            ExplorerConfig::default(),
        );
        assert_eq!(service.holiday_year(), Utc::now().year());
    }

    // ========================================================================
    // Out-of-order completion
    // ========================================================================

    /// POI source that holds back results for `slow` until released
    struct GatedPois {
        slow: GeoLocation,
        started: Notify,
        release: Notify,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl PoiPort for GatedPois {
        async fn find_nearby(
            &self,
            location: GeoLocation,
            _category: &PoiCategory,
        ) -> Result<Vec<PointOfInterest>, ApplicationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if location == self.slow {
                self.started.notify_one();
                self.release.notified().await;
                return Ok(vec![PointOfInterest::new(1, "Stale A", location)]);
            }
            Ok(vec![PointOfInterest::new(2, "Fresh B", location)])
        }
    }

    #[tokio::test]
    async fn late_results_for_previous_selection_are_discarded() {
        let mut geocoder = MockGeocodingPort::new();
        geocoder
            .expect_geocode()
            .with(predicate::eq("A"))
            .returning(|_| Ok(Some(place(GeoLocation::madrid()))));
        geocoder
            .expect_geocode()
            .with(predicate::eq("B"))
            .returning(|_| Ok(Some(place(GeoLocation::barcelona()))));
        let mut holiday_port = MockHolidayPort::new();
        holiday_port.expect_holidays().returning(|_, _| Ok(holidays(2)));

        let pois = Arc::new(GatedPois {
            slow: GeoLocation::madrid(),
            started: Notify::new(),
            release: Notify::new(),
            calls: AtomicUsize::new(0),
        });

        let service = Arc::new(ExplorerService::new(
            Arc::new(geocoder),
            Arc::clone(&pois) as Arc<dyn PoiPort>,
            Arc::new(holiday_port),
            config(),
        ));
        let id = service.create_session().unwrap().session_id;

        let search_a = tokio::spawn({
            let service = Arc::clone(&service);
            async move { service.search(id, "A").await }
        });

        // A is selected and its POI fetch is pending
        pois.started.notified().await;
        assert_eq!(
            service.snapshot(id).unwrap().selection.unwrap().name,
            "A"
        );

        let b = service.search(id, "B").await.unwrap();
        assert_eq!(b.pois[0].name, "Fresh B");

        pois.release.notify_one();
        let a = search_a.await.unwrap().unwrap();

        // A's late answer neither shows up in A's response nor in the session
        assert_eq!(a.selection.unwrap().name, "B");
        assert_eq!(a.pois[0].name, "Fresh B");
        let now = service.snapshot(id).unwrap();
        assert_eq!(now.pois.len(), 1);
        assert_eq!(now.pois[0].name, "Fresh B");
        assert_eq!(now.map.poi_markers()[0].label, "Fresh B");
        assert_eq!(pois.calls.load(Ordering::SeqCst), 2);
    }
}
