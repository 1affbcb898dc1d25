//! Application services - Use case implementations

mod explorer_service;
mod explorer_session;
mod holiday_panel;
mod session_store;

pub use explorer_service::{ExplorerConfig, ExplorerService};
pub use explorer_session::{ExplorerSession, SelectionChange, SessionSnapshot};
pub use holiday_panel::{HolidayPanel, HolidayPanelView};
pub use session_store::{SessionHandle, SessionStore};
