//! Recommendation View State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All mutations go
//! through the transition methods on [`RecommendationState`], so the same
//! logic runs against the live store and against a plain `RefCell` in tests.

use std::cell::RefCell;

use leptos::prelude::*;
use reactive_stores::Store;
use tracing::{debug, warn};

use crate::commands::RecommendationClient;
use crate::error::FetchError;
use crate::models::{QueryResponse, RecommendationItem};

/// State owned by the recommendation view
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct RecommendationState {
    /// Current input text, unvalidated
    pub prompt: String,
    /// Matches of the latest successful response, verbatim
    pub items: Vec<RecommendationItem>,
    /// Markdown summary of the latest successful response
    pub recommendation: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
    pub selected_image: Option<String>,
    pub modal_open: bool,
    /// Sequence number of the most recently issued request
    pub latest_request: u64,
}

/// Handed out by `begin_submit`; identifies one outbound request
#[derive(Clone, Debug, PartialEq)]
pub struct SubmitTicket {
    pub seq: u64,
    pub prompt: String,
}

impl RecommendationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_prompt(&mut self, text: impl Into<String>) {
        self.prompt = text.into();
    }

    /// Submit is allowed only with a non-blank prompt and nothing in flight
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.prompt.trim().is_empty()
    }

    pub fn begin_submit(&mut self) -> Option<SubmitTicket> {
        if !self.can_submit() {
            return None;
        }
        self.latest_request += 1;
        self.loading = true;
        self.error = None;
        Some(SubmitTicket { seq: self.latest_request, prompt: self.prompt.clone() })
    }

    /// Apply a settled request. Returns false if the result was stale and dropped.
    pub fn finish_submit(&mut self, seq: u64, result: Result<QueryResponse, FetchError>) -> bool {
        if seq != self.latest_request {
            return false;
        }
        self.loading = false;
        match result {
            Ok(resp) => {
                self.items = resp.matches;
                self.recommendation = resp.recommendation.filter(|r| !r.trim().is_empty());
            }
            Err(e) => {
                self.error = Some(e.user_message().to_string());
            }
        }
        true
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Drop results and invalidate any request still in flight
    pub fn clear_results(&mut self) {
        self.latest_request += 1;
        self.items.clear();
        self.recommendation = None;
        self.error = None;
        self.loading = false;
    }

    pub fn open_modal(&mut self, url: impl Into<String>) {
        self.selected_image = Some(url.into());
        self.modal_open = true;
    }

    pub fn select_image(&mut self, url: impl Into<String>) {
        self.open_modal(url);
    }

    pub fn close_modal(&mut self) {
        self.selected_image = None;
        self.modal_open = false;
    }
}

/// Type alias for the store
pub type RecommendationStore = Store<RecommendationState>;

/// Get the store from context
pub fn use_recommendation_store() -> RecommendationStore {
    expect_context::<RecommendationStore>()
}

/// Somewhere a [`RecommendationState`] can be mutated in place
pub trait StateCell {
    fn with_state<R>(&self, f: impl FnOnce(&mut RecommendationState) -> R) -> R;
}

impl StateCell for RecommendationStore {
    fn with_state<R>(&self, f: impl FnOnce(&mut RecommendationState) -> R) -> R {
        let mut guard = self.write();
        f(&mut *guard)
    }
}

impl StateCell for RefCell<RecommendationState> {
    fn with_state<R>(&self, f: impl FnOnce(&mut RecommendationState) -> R) -> R {
        f(&mut *self.borrow_mut())
    }
}

/// One full submit cycle: guard, request, settle.
/// Returns false when the guard refused to start a request.
pub async fn submit<C, S>(client: &C, state: &S) -> bool
where
    C: RecommendationClient + ?Sized,
    S: StateCell,
{
    let Some(ticket) = state.with_state(|s| s.begin_submit()) else {
        return false;
    };
    debug!(seq = ticket.seq, "submitting prompt");

    let result = client.query_items(&ticket.prompt).await;
    match &result {
        Ok(resp) => debug!(seq = ticket.seq, matches = resp.matches.len(), "recommendations received"),
        Err(e) => warn!(seq = ticket.seq, kind = e.kind(), error = %e, "recommendation request failed"),
    }

    if !state.with_state(|s| s.finish_submit(ticket.seq, result)) {
        debug!(seq = ticket.seq, "dropping stale response");
    }
    true
}
