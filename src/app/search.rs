// ABOUTME: Channel search flow: debounced query, lookup dispatch, and dropdown state
// Responses are tagged with a sequence number so only the latest search can land

use std::time::{Duration, Instant};

use tracing::debug;

use super::debounce::Debouncer;
use crate::api::{ApiError, TubeShareClient};
use crate::models::Channel;

/// Shown in place of results whenever a lookup fails for any reason.
pub const SEARCH_ERROR_MESSAGE: &str = "Failed to fetch channels. Please try again.";

/// A lookup that should be sent to the channel search endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub seq: u64,
    pub query: String,
}

#[derive(Debug)]
pub struct SearchOutcome {
    pub seq: u64,
    pub query: String,
    pub result: Result<Vec<Channel>, ApiError>,
}

/// Perform one lookup. Never cancelled once started.
pub async fn run_search(client: &TubeShareClient, request: SearchRequest) -> SearchOutcome {
    let result = client.fetch_channels(&request.query).await;
    SearchOutcome {
        seq: request.seq,
        query: request.query,
        result,
    }
}

#[derive(Debug)]
pub struct SearchState {
    pub query: String,
    pub debounced_query: String,
    pub results: Vec<Channel>,
    pub is_open: bool,
    pub is_loading: bool,
    pub error: Option<String>,
    /// Highlighted row in the dropdown.
    pub highlighted: Option<usize>,
    debouncer: Debouncer<String>,
    latest_seq: u64,
}

impl SearchState {
    pub fn new(debounce: Duration) -> Self {
        Self {
            query: String::new(),
            debounced_query: String::new(),
            results: Vec::new(),
            is_open: false,
            is_loading: false,
            error: None,
            highlighted: None,
            debouncer: Debouncer::new(debounce),
            latest_seq: 0,
        }
    }

    /// Fresh state for a new session. Sequence numbers keep counting, so lookups
    /// started before the reset stay stale.
    pub fn renewed(&self) -> Self {
        Self {
            latest_seq: self.latest_seq + 1,
            ..Self::new(self.debouncer.delay())
        }
    }

    pub fn has_pending_input(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn set_query(&mut self, query: impl Into<String>, now: Instant) {
        self.query = query.into();
        self.debouncer.push(self.query.clone(), now);
    }

    pub fn input_char(&mut self, ch: char, now: Instant) {
        self.query.push(ch);
        self.debouncer.push(self.query.clone(), now);
    }

    pub fn backspace(&mut self, now: Instant) {
        if self.query.pop().is_some() {
            self.debouncer.push(self.query.clone(), now);
        }
    }

    /// Feed the UI clock; returns a request once the query has settled.
    pub fn poll(&mut self, now: Instant) -> Option<SearchRequest> {
        let settled = self.debouncer.poll(now)?;
        self.debounced_query = settled.clone();
        self.begin_search(&settled)
    }

    /// Start a search for `query`. Blank queries clear everything without a request.
    pub fn begin_search(&mut self, query: &str) -> Option<SearchRequest> {
        // Any earlier in-flight lookup is now stale
        self.latest_seq += 1;

        if query.trim().is_empty() {
            self.results.clear();
            self.highlighted = None;
            self.is_open = false;
            self.is_loading = false;
            self.error = None;
            return None;
        }

        self.is_loading = true;
        self.error = None;
        Some(SearchRequest {
            seq: self.latest_seq,
            query: query.to_string(),
        })
    }

    /// Apply a finished lookup. Returns `false` when the response was stale and dropped.
    pub fn apply_outcome(&mut self, outcome: SearchOutcome) -> bool {
        if outcome.seq != self.latest_seq {
            debug!(
                "Discarding stale search response #{} for {:?} (latest #{})",
                outcome.seq, outcome.query, self.latest_seq
            );
            return false;
        }

        match outcome.result {
            Ok(channels) => {
                self.highlighted = if channels.is_empty() { None } else { Some(0) };
                self.results = channels;
                self.is_open = true;
            }
            Err(e) => {
                debug!(
                    "Search for {:?} failed (status {:?}): {}",
                    outcome.query,
                    e.status(),
                    e
                );
                self.error = Some(SEARCH_ERROR_MESSAGE.to_string());
                self.results.clear();
                self.highlighted = None;
            }
        }
        self.is_loading = false;
        true
    }

    pub fn highlight_next(&mut self) {
        if !self.is_open || self.results.is_empty() {
            return;
        }
        let current = self.highlighted.unwrap_or(0);
        self.highlighted = Some((current + 1) % self.results.len());
    }

    pub fn highlight_previous(&mut self) {
        if !self.is_open || self.results.is_empty() {
            return;
        }
        let current = self.highlighted.unwrap_or(0);
        self.highlighted = Some(if current == 0 {
            self.results.len() - 1
        } else {
            current - 1
        });
    }

    pub fn highlighted_channel(&self) -> Option<&Channel> {
        if !self.is_open {
            return None;
        }
        self.results.get(self.highlighted?)
    }

    /// Take the highlighted result for the selection list and reset the input.
    pub fn choose_highlighted(&mut self) -> Option<Channel> {
        let channel = self.highlighted_channel().cloned()?;
        self.reset_query();
        Some(channel)
    }

    pub fn close_dropdown(&mut self) {
        self.is_open = false;
    }

    /// Clear the query and close the dropdown, dropping pending and in-flight lookups.
    pub fn reset_query(&mut self) {
        self.query.clear();
        self.debounced_query.clear();
        self.debouncer.cancel();
        self.latest_seq += 1;
        self.results.clear();
        self.highlighted = None;
        self.is_open = false;
        self.is_loading = false;
        self.error = None;
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::config::DEFAULT_DEBOUNCE_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn channel(id: &str) -> Channel {
        Channel::new(id, id.to_uppercase(), "//img/x.png", format!("/{}", id))
    }

    fn ok(request: &SearchRequest, channels: Vec<Channel>) -> SearchOutcome {
        SearchOutcome {
            seq: request.seq,
            query: request.query.clone(),
            result: Ok(channels),
        }
    }

    #[test]
    fn test_empty_query_clears_without_request() {
        let mut search = SearchState::default();
        search.results = vec![channel("c1")];
        search.is_open = true;

        assert_eq!(search.begin_search(""), None);
        assert_eq!(search.begin_search("   "), None);
        assert!(search.results.is_empty());
        assert!(!search.is_open);
        assert!(!search.is_loading);
    }

    #[test]
    fn test_success_opens_dropdown() {
        let mut search = SearchState::default();
        let request = search.begin_search("music").unwrap();
        assert!(search.is_loading);

        assert!(search.apply_outcome(ok(&request, vec![channel("c1")])));
        assert!(!search.is_loading);
        assert!(search.is_open);
        assert_eq!(search.results, vec![channel("c1")]);
        assert_eq!(search.highlighted, Some(0));
    }

    #[test]
    fn test_failure_sets_fixed_message_and_clears_results() {
        let mut search = SearchState::default();
        search.results = vec![channel("old")];
        let request = search.begin_search("music").unwrap();

        search.apply_outcome(SearchOutcome {
            seq: request.seq,
            query: request.query,
            result: Err(ApiError::Status { status: 500 }),
        });

        assert_eq!(search.error.as_deref(), Some(SEARCH_ERROR_MESSAGE));
        assert!(search.results.is_empty());
        assert!(!search.is_loading);
    }

    #[test]
    fn test_new_search_clears_previous_error() {
        let mut search = SearchState::default();
        search.error = Some(SEARCH_ERROR_MESSAGE.to_string());
        search.begin_search("again");
        assert_eq!(search.error, None);
    }

    #[test]
    fn test_clearing_query_clears_error() {
        let mut search = SearchState::default();
        let request = search.begin_search("music").unwrap();
        search.apply_outcome(SearchOutcome {
            seq: request.seq,
            query: request.query,
            result: Err(ApiError::Status { status: 500 }),
        });
        assert!(search.error.is_some());

        assert_eq!(search.begin_search("  "), None);
        assert_eq!(search.error, None);

        search.error = Some(SEARCH_ERROR_MESSAGE.to_string());
        search.reset_query();
        assert_eq!(search.error, None);
    }

    #[test]
    fn test_renewed_state_keeps_in_flight_lookups_stale() {
        let mut search = SearchState::new(Duration::from_millis(120));
        search.set_query("rust", Instant::now());
        let in_flight = search.begin_search("rust").unwrap();

        let mut renewed = search.renewed();
        assert_eq!(renewed.query, "");
        assert!(!renewed.has_pending_input());
        assert_eq!(renewed.debouncer.delay(), Duration::from_millis(120));

        let next = renewed.begin_search("rust").unwrap();
        assert_ne!(next.seq, in_flight.seq);
        assert!(!renewed.apply_outcome(ok(&in_flight, vec![channel("old")])));
        assert!(renewed.results.is_empty());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut search = SearchState::default();
        let slow = search.begin_search("ru").unwrap();
        let fast = search.begin_search("rust").unwrap();

        assert!(search.apply_outcome(ok(&fast, vec![channel("rust")])));
        assert!(!search.apply_outcome(ok(&slow, vec![channel("ruby")])));
        assert_eq!(search.results, vec![channel("rust")]);
    }

    #[test]
    fn test_choose_highlighted_resets_query() {
        let mut search = SearchState::default();
        search.set_query("c", Instant::now());
        let request = search.begin_search("c").unwrap();
        search.apply_outcome(ok(&request, vec![channel("c1"), channel("c2")]));

        search.highlight_next();
        assert_eq!(search.choose_highlighted(), Some(channel("c2")));
        assert_eq!(search.query, "");
        assert!(!search.is_open);
        assert!(!search.has_pending_input());
    }

    #[test]
    fn test_poll_only_searches_settled_query() {
        let start = Instant::now();
        let mut search = SearchState::new(Duration::from_millis(300));
        for (i, ch) in "abc".chars().enumerate() {
            search.input_char(ch, start + Duration::from_millis(100) * i as u32);
        }

        assert_eq!(search.poll(start + Duration::from_millis(350)), None);
        let request = search.poll(start + Duration::from_millis(500)).unwrap();
        assert_eq!(request.query, "abc");
        assert_eq!(search.debounced_query, "abc");
        assert_eq!(search.poll(start + Duration::from_millis(900)), None);
    }

    #[test]
    fn test_highlight_wraps() {
        let mut search = SearchState::default();
        let request = search.begin_search("c").unwrap();
        search.apply_outcome(ok(&request, vec![channel("c1"), channel("c2")]));

        search.highlight_previous();
        assert_eq!(search.highlighted, Some(1));
        search.highlight_next();
        assert_eq!(search.highlighted, Some(0));
    }
}
