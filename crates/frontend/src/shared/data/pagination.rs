use std::collections::BTreeMap;

use contracts::shared::PageData;

/// Monotonic token source enforcing "last request wins" for a list view.
///
/// A page change while a fetch is in flight supersedes the stale request:
/// only the most recently issued token may apply its response.
#[derive(Clone, Debug, Default)]
pub struct RequestGuard {
    issued: u64,
}

impl RequestGuard {
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    pub fn is_current(&self, token: u64) -> bool {
        token == self.issued
    }
}

/// Non-reactive state behind every server-paginated list view: one page of
/// items plus the page cursor, search text and filter map that produced it.
/// Mirrors the wire envelope's pagination fields (1-based `currentpage`).
#[derive(Clone)]
pub struct PagedListState<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,

    pub search: String,
    pub filters: BTreeMap<&'static str, String>,

    pub is_loaded: bool,
    pub error: Option<String>,

    guard: RequestGuard,
}

impl<T> Default for PagedListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            page_size: 20,
            total_count: 0,
            total_pages: 0,
            search: String::new(),
            filters: BTreeMap::new(),
            is_loaded: false,
            error: None,
            guard: RequestGuard::default(),
        }
    }
}

impl<T> PagedListState<T> {
    /// Issue a token for the fetch about to start.
    pub fn begin_request(&mut self) -> u64 {
        self.guard.begin()
    }

    /// Apply a fetched page if its token is still the newest one.
    /// Stale responses are dropped, not queued.
    pub fn apply_page(&mut self, token: u64, page: PageData<T>) -> bool {
        if !self.guard.is_current(token) {
            return false;
        }
        self.items = page.data;
        self.total_count = page.count;
        self.page = page.currentpage;
        self.total_pages = page.lastpage;
        self.is_loaded = true;
        self.error = None;
        true
    }

    /// Record a fetch failure, unless a newer request superseded it.
    pub fn apply_error(&mut self, token: u64, message: String) -> bool {
        if !self.guard.is_current(token) {
            return false;
        }
        self.is_loaded = true;
        self.error = Some(message);
        true
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// New search text restarts from the first page.
    pub fn set_search(&mut self, search: String) {
        self.search = search;
        self.page = 1;
    }

    /// Set or clear one filter; a blank value removes the key.
    pub fn set_filter(&mut self, key: &'static str, value: String) {
        if value.trim().is_empty() {
            self.filters.remove(key);
        } else {
            self.filters.insert(key, value);
        }
        self.page = 1;
    }

    pub fn active_filters_count(&self) -> usize {
        self.filters.len()
    }

    /// Query string for the list endpoint: `page`, free-text `search`, then
    /// the resource-specific filters.
    pub fn query_string(&self) -> String {
        let mut parts = vec![format!("page={}", self.page)];
        if !self.search.trim().is_empty() {
            parts.push(format!("search={}", urlencoding::encode(self.search.trim())));
        }
        for (key, value) in &self.filters {
            parts.push(format!("{}={}", key, urlencoding::encode(value)));
        }
        format!("?{}", parts.join("&"))
    }

    /// A loaded, error-free, zero-row list renders the designated
    /// empty-state affordance rather than an error.
    pub fn is_empty_state(&self) -> bool {
        self.is_loaded && self.error.is_none() && self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(items: Vec<&'static str>, current: usize, last: usize) -> PageData<&'static str> {
        let count = items.len();
        PageData {
            data: items,
            count,
            currentpage: current,
            lastpage: last,
            nextpage: if current < last { Some(current + 1) } else { None },
            prevpage: if current > 1 { Some(current - 1) } else { None },
        }
    }

    #[test]
    fn last_request_wins() {
        let mut state: PagedListState<&'static str> = PagedListState::default();
        let first = state.begin_request();
        let second = state.begin_request();

        // The superseded response lands late and is dropped.
        assert!(state.apply_page(second, page(vec!["b"], 2, 3)));
        assert!(!state.apply_page(first, page(vec!["a"], 1, 3)));
        assert_eq!(state.items, vec!["b"]);
        assert_eq!(state.page, 2);
    }

    #[test]
    fn stale_error_is_dropped_too() {
        let mut state: PagedListState<&'static str> = PagedListState::default();
        let stale = state.begin_request();
        let current = state.begin_request();

        assert!(!state.apply_error(stale, "timeout".into()));
        assert!(state.error.is_none());
        assert!(state.apply_error(current, "timeout".into()));
        assert_eq!(state.error.as_deref(), Some("timeout"));
    }

    #[test]
    fn empty_page_is_an_empty_state_not_an_error() {
        let mut state: PagedListState<&'static str> = PagedListState::default();
        let token = state.begin_request();
        state.apply_page(token, page(vec![], 1, 1));

        assert!(state.is_empty_state());
        assert!(state.error.is_none());
        assert_eq!(state.total_count, 0);
    }

    #[test]
    fn search_and_filters_reset_the_page_cursor() {
        let mut state: PagedListState<&'static str> = PagedListState::default();
        state.set_page(4);
        state.set_search("jollof".into());
        assert_eq!(state.page, 1);

        state.set_page(3);
        state.set_filter("status", "active".into());
        assert_eq!(state.page, 1);

        state.set_filter("status", "  ".into());
        assert_eq!(state.active_filters_count(), 0);
    }

    #[test]
    fn query_string_includes_page_search_and_filters() {
        let mut state: PagedListState<&'static str> = PagedListState::default();
        state.set_search("suya spot".into());
        state.set_filter("status", "active".into());
        state.set_page(2);
        assert_eq!(state.query_string(), "?page=2&search=suya%20spot&status=active");
    }

    #[test]
    fn page_floor_is_one() {
        let mut state: PagedListState<&'static str> = PagedListState::default();
        state.set_page(0);
        assert_eq!(state.page, 1);
    }
}
