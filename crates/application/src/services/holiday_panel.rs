//! Holiday list with client-side paging

use domain::{Holiday, PageView, PagedList};
use serde::Serialize;

/// Holidays for the current selection plus their loading state
#[derive(Debug, Clone, Default)]
pub struct HolidayPanel {
    list: PagedList<Holiday>,
    loading: bool,
}

/// What the panel renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolidayPanelView {
    pub loading: bool,
    #[serde(flatten)]
    pub page: PageView<Holiday>,
}

impl HolidayPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty the list and show the loading indicator
    pub fn begin_loading(&mut self) {
        self.list.clear();
        self.loading = true;
    }

    /// Show `holidays` from the first page
    pub fn show(&mut self, holidays: Vec<Holiday>) {
        self.list.replace(holidays);
        self.loading = false;
    }

    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Advance one page; `false` at the last page
    pub fn next_page(&mut self) -> bool {
        self.list.next_page()
    }

    /// Go back one page; `false` at the first page
    pub fn previous_page(&mut self) -> bool {
        self.list.previous_page()
    }

    pub const fn current_page(&self) -> usize {
        self.list.current_page()
    }

    pub fn view(&self) -> HolidayPanelView {
        HolidayPanelView {
            loading: self.loading,
            page: self.list.view(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holidays(n: usize) -> Vec<Holiday> {
        (0..n)
            .map(|i| Holiday::new(format!("Holiday {i}"), format!("2025-01-{:02}", i % 28 + 1)))
            .collect()
    }

    #[test]
    fn empty_panel_has_no_controls() {
        let view = HolidayPanel::new().view();
        assert!(!view.loading);
        assert_eq!(view.page.total_pages, 0);
        assert!(view.page.items.is_empty());
        assert!(!view.page.show_controls);
    }

    #[test]
    fn twenty_holidays_page_through() {
        let mut panel = HolidayPanel::new();
        panel.show(holidays(20));

        let first = panel.view().page;
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.items.len(), 8);
        assert_eq!(first.items[0].name, "Holiday 0");
        assert!(!first.has_previous);
        assert!(first.has_next);
        assert!(first.show_controls);

        assert!(!panel.previous_page());
        assert!(panel.next_page());
        assert_eq!(panel.view().page.items[0].name, "Holiday 8");
        assert!(panel.next_page());

        let last = panel.view().page;
        assert_eq!(last.page, 2);
        assert_eq!(last.items.len(), 4);
        assert_eq!(last.items[3].name, "Holiday 19");
        assert!(!last.has_next);
        assert!(!panel.next_page());
        assert_eq!(panel.current_page(), 2);
    }

    #[test]
    fn loading_clears_contents_and_new_data_resets_page() {
        let mut panel = HolidayPanel::new();
        panel.show(holidays(20));
        panel.next_page();

        panel.begin_loading();
        let view = panel.view();
        assert!(view.loading);
        assert!(view.page.items.is_empty());

        panel.show(holidays(9));
        assert!(!panel.is_loading());
        assert_eq!(panel.current_page(), 0);
        assert_eq!(panel.view().page.total_pages, 2);
    }

    #[test]
    fn view_serializes_flat() {
        let mut panel = HolidayPanel::new();
        panel.show(holidays(1));
        let json = serde_json::to_value(panel.view()).unwrap();
        assert_eq!(json["loading"], false);
        assert_eq!(json["total_pages"], 1);
        assert_eq!(json["items"][0]["name"], "Holiday 0");
    }
}
