//! List-screen controller: one `QueryState`, one loading flag, one
//! request sequence per screen.
//!
//! Fetch discipline (uniform across every list screen):
//! - free-text search settles through a debounce window before fetching;
//! - filter, sort and page changes fetch immediately;
//! - each fetch carries a monotonic token and only the most recently
//!   issued token may apply its result; superseded responses are
//!   discarded on arrival, whatever order the network delivers them in;
//! - a failed fetch keeps the last-known-good items and surfaces a
//!   dismissible error.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use civiport_core::{PortalError, PortalResult};
use civiport_query::{PagedResult, QueryState, RequestSequence, RequestToken};
use tokio::sync::Mutex;
use tokio::time::sleep;

/// Data source for one list screen.
#[async_trait]
pub trait ListFetcher<T>: Send + Sync {
    async fn fetch(&self, query: &QueryState) -> PortalResult<PagedResult<T>>;

    /// Full-result export for the current filters. Lists without an export
    /// endpoint keep the default.
    async fn export(&self, query: &QueryState) -> PortalResult<Vec<u8>> {
        let _ = query;
        Err(PortalError::server(None, "export is not available for this list"))
    }
}

/// Mutable state of one mounted list screen.
pub struct ListScreen<T> {
    query: QueryState,
    data: PagedResult<T>,
    known_total_pages: Option<u32>,
    loading: bool,
    error: Option<PortalError>,
    seq: RequestSequence,
    search_epoch: u64,
}

impl<T> ListScreen<T> {
    fn new(per_page: u32) -> Self {
        Self {
            query: QueryState::new(per_page),
            data: PagedResult::empty(),
            known_total_pages: None,
            loading: false,
            error: None,
            seq: RequestSequence::new(),
            search_epoch: 0,
        }
    }

    fn begin_fetch(&mut self) -> RequestToken {
        self.loading = true;
        self.seq.issue()
    }

    /// Apply a completed fetch. Returns false when the token has been
    /// superseded: the response is discarded and a newer in-flight
    /// request still owns the loading state.
    fn apply(&mut self, token: RequestToken, result: PortalResult<PagedResult<T>>) -> bool {
        if !self.seq.accepts(token) {
            return false;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.known_total_pages = Some(page.total_pages);
                self.error = None;
                self.data = page;
            }
            Err(err) => {
                // Last-known-good: the previous items stay on screen.
                self.error = Some(err);
            }
        }
        true
    }
}

/// Point-in-time view of a screen for rendering.
#[derive(Debug, Clone)]
pub struct ScreenSnapshot<T> {
    pub items: Vec<T>,
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub loading: bool,
    pub error: Option<PortalError>,
}

/// Shared handle driving one list screen.
///
/// The state sits behind a `Mutex` that is never held across a network
/// await, so overlapping fetches interleave and the token check decides
/// which one lands.
pub struct ScreenHandle<T> {
    state: Arc<Mutex<ListScreen<T>>>,
    fetcher: Arc<dyn ListFetcher<T>>,
    per_page: u32,
    debounce: Duration,
}

impl<T> Clone for ScreenHandle<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            fetcher: Arc::clone(&self.fetcher),
            per_page: self.per_page,
            debounce: self.debounce,
        }
    }
}

impl<T: Send + 'static> ScreenHandle<T> {
    pub fn new(fetcher: Arc<dyn ListFetcher<T>>, per_page: u32, debounce: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(ListScreen::new(per_page))),
            fetcher,
            per_page,
            debounce,
        }
    }

    /// Reset to default query state and load the first page.
    pub async fn mount(&self) {
        {
            let mut state = self.state.lock().await;
            *state = ListScreen::new(self.per_page);
        }
        self.refresh().await;
    }

    /// Issue a fetch for the current query state.
    pub async fn refresh(&self) {
        let (token, query) = {
            let mut state = self.state.lock().await;
            (state.begin_fetch(), state.query.clone())
        };

        let result = self.fetcher.fetch(&query).await;

        let mut state = self.state.lock().await;
        if !state.apply(token, result) {
            tracing::debug!("discarded superseded list response");
        }
    }

    /// Update the free-text search. The fetch fires only once the text has
    /// been stable for the debounce window; intermediate keystrokes are
    /// absorbed.
    pub async fn set_search(&self, text: impl Into<String>) {
        let epoch = {
            let mut state = self.state.lock().await;
            if !state.query.set_search(text.into()) {
                return;
            }
            state.search_epoch += 1;
            state.search_epoch
        };

        sleep(self.debounce).await;

        let settled = self.state.lock().await.search_epoch == epoch;
        if settled {
            self.refresh().await;
        }
    }

    /// Set or clear a dropdown filter; fetches immediately on change.
    pub async fn set_filter(&self, key: &str, value: &str) {
        let changed = self.state.lock().await.query.set_filter(key, value);
        if changed {
            self.refresh().await;
        }
    }

    /// Cycle the sort on a column; fetches immediately.
    pub async fn toggle_sort(&self, column: &str) {
        self.state.lock().await.query.toggle_sort(column);
        self.refresh().await;
    }

    /// Change page, clamped against the last known page count. Out-of-range
    /// requests never produce a fetch.
    pub async fn set_page(&self, page: u32) {
        let changed = {
            let mut state = self.state.lock().await;
            let known = state.known_total_pages;
            state.query.set_page(page, known)
        };
        if changed {
            self.refresh().await;
        }
    }

    /// Export the current filters (minus pagination) as a file payload.
    /// Failures surface on the screen without altering the query state.
    pub async fn export(&self) -> PortalResult<Vec<u8>> {
        let query = self.state.lock().await.query.clone();
        match self.fetcher.export(&query).await {
            Ok(bytes) => Ok(bytes),
            Err(err) => {
                self.state.lock().await.error = Some(err.clone());
                Err(err)
            }
        }
    }

    pub async fn dismiss_error(&self) {
        self.state.lock().await.error = None;
    }

    pub async fn query(&self) -> QueryState {
        self.state.lock().await.query.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.lock().await.loading
    }
}

impl<T: Clone + Send + 'static> ScreenHandle<T> {
    pub async fn snapshot(&self) -> ScreenSnapshot<T> {
        let state = self.state.lock().await;
        ScreenSnapshot {
            items: state.data.items.clone(),
            current_page: state.data.current_page,
            total_pages: state.data.total_pages,
            total_items: state.data.total_items,
            loading: state.loading,
            error: state.error.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex as StdMutex;

    use tokio::task::yield_now;
    use tokio::time::advance;

    use super::*;

    const DEBOUNCE: Duration = Duration::from_millis(400);

    fn page_of(items: &[&str]) -> PagedResult<String> {
        PagedResult {
            items: items.iter().map(|s| s.to_string()).collect(),
            current_page: 1,
            total_pages: 3,
            total_items: items.len() as u64,
        }
    }

    /// Scripted fetcher: each call pops a (latency, result) step and
    /// records the query it was given.
    struct ScriptedFetcher {
        steps: StdMutex<VecDeque<(Duration, PortalResult<PagedResult<String>>)>>,
        seen: StdMutex<Vec<QueryState>>,
    }

    impl ScriptedFetcher {
        fn new(steps: Vec<(Duration, PortalResult<PagedResult<String>>)>) -> Self {
            Self {
                steps: StdMutex::new(steps.into()),
                seen: StdMutex::new(Vec::new()),
            }
        }

        fn fetch_count(&self) -> usize {
            self.seen.lock().unwrap().len()
        }

        fn last_query(&self) -> QueryState {
            self.seen.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait]
    impl ListFetcher<String> for ScriptedFetcher {
        async fn fetch(&self, query: &QueryState) -> PortalResult<PagedResult<String>> {
            self.seen.lock().unwrap().push(query.clone());
            let step = self.steps.lock().unwrap().pop_front();
            let (delay, result) = step.unwrap_or((Duration::ZERO, Ok(page_of(&[]))));
            sleep(delay).await;
            result
        }

        async fn export(&self, _query: &QueryState) -> PortalResult<Vec<u8>> {
            Err(PortalError::server(None, "export failed"))
        }
    }

    fn handle_with(fetcher: Arc<ScriptedFetcher>) -> ScreenHandle<String> {
        ScreenHandle::new(fetcher, 10, DEBOUNCE)
    }

    #[tokio::test(start_paused = true)]
    async fn burst_of_search_edits_issues_exactly_one_fetch() {
        let fetcher = Arc::new(ScriptedFetcher::new(vec![(
            Duration::ZERO,
            Ok(page_of(&["john doe"])),
        )]));
        let handle = handle_with(fetcher.clone());

        let h = handle.clone();
        let first = tokio::spawn(async move { h.set_search("john").await });
        yield_now().await;

        // Second edit lands inside the debounce window.
        advance(Duration::from_millis(100)).await;
        let h = handle.clone();
        let second = tokio::spawn(async move { h.set_search("john d").await });

        first.await.unwrap();
        second.await.unwrap();

        assert_eq!(fetcher.fetch_count(), 1);
        assert_eq!(fetcher.last_query().search(), "john d");
    }

    #[tokio::test(start_paused = true)]
    async fn later_request_wins_regardless_of_arrival_order() {
        // Request A is slow, request B (issued later) resolves first.
        let fetcher = Arc::new(ScriptedFetcher::new(vec![
            (Duration::from_millis(300), Ok(page_of(&["stale"]))),
            (Duration::from_millis(50), Ok(page_of(&["fresh"]))),
        ]));
        let handle = handle_with(fetcher.clone());

        let h = handle.clone();
        let a = tokio::spawn(async move { h.refresh().await });
        yield_now().await;
        let h = handle.clone();
        let b = tokio::spawn(async move { h.refresh().await });

        a.await.unwrap();
        b.await.unwrap();

        let snapshot = handle.snapshot().await;
        assert_eq!(snapshot.items, vec!["fresh".to_string()]);
        assert!(!snapshot.loading);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_fetch_keeps_last_known_good_items() {
        let fetcher = Arc::new(ScriptedFetcher::new(vec![
            (Duration::ZERO, Ok(page_of(&["alice"]))),
            (Duration::ZERO, Err(PortalError::Timeout)),
        ]));
        let handle = handle_with(fetcher.clone());

        handle.refresh().await;
        handle.refresh().await;

        let snapshot = handle.snapshot().await;
        assert_eq!(snapshot.items, vec!["alice".to_string()]);
        assert_eq!(snapshot.error, Some(PortalError::Timeout));

        handle.dismiss_error().await;
        assert!(handle.snapshot().await.error.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn out_of_range_page_change_sends_no_request() {
        let fetcher = Arc::new(ScriptedFetcher::new(vec![
            (Duration::ZERO, Ok(page_of(&["a"]))), // total_pages = 3
        ]));
        let handle = handle_with(fetcher.clone());

        handle.refresh().await;
        assert_eq!(fetcher.fetch_count(), 1);

        handle.set_page(3).await; // valid: fetches
        assert_eq!(fetcher.fetch_count(), 2);

        handle.set_page(5).await; // clamped onto current page: no request
        assert_eq!(fetcher.fetch_count(), 2);
        assert_eq!(handle.query().await.page(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn filter_and_sort_changes_fetch_immediately() {
        let fetcher = Arc::new(ScriptedFetcher::new(Vec::new()));
        let handle = handle_with(fetcher.clone());

        handle.set_filter("status", "new").await;
        assert_eq!(fetcher.fetch_count(), 1);

        handle.set_filter("status", "new").await; // unchanged: no fetch
        assert_eq!(fetcher.fetch_count(), 1);

        handle.toggle_sort("name").await;
        assert_eq!(fetcher.fetch_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn export_failure_surfaces_error_without_touching_query() {
        let fetcher = Arc::new(ScriptedFetcher::new(Vec::new()));
        let handle = handle_with(fetcher.clone());

        handle.set_filter("status", "new").await;
        let before = handle.query().await;

        let result = handle.export().await;
        assert!(result.is_err());
        assert!(handle.snapshot().await.error.is_some());
        assert_eq!(handle.query().await, before);
    }
}
