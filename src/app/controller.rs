//! Search controller - owns the query and the view state
//!
//! Fetches run on the tokio runtime; their results come back over a channel
//! and are applied by [`SearchController::poll`] on the UI thread, so the
//! query and state are only ever touched from one place.

use crate::api::{ApiError, QuoteApi};
use crate::constants::EMPTY_QUERY_NOTICE;
use crate::types::*;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

/// (sequence number, outcome) of one fetch
type Completion = (u64, Result<QuoteResponse, ApiError>);

/// Called from the runtime after a completion is queued
pub type Waker = Arc<dyn Fn() + Send + Sync>;

pub struct SearchController {
    api: Arc<dyn QuoteApi>,
    runtime: Handle,
    limit: u32,
    query: String,
    state: ViewState,
    notice: Option<Notice>,
    /// Sequence number of the most recent fetch; anything older is stale
    latest_seq: u64,
    tx: mpsc::UnboundedSender<Completion>,
    rx: mpsc::UnboundedReceiver<Completion>,
    waker: Option<Waker>,
}

impl SearchController {
    pub fn new(api: Arc<dyn QuoteApi>, runtime: Handle, limit: u32) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            api,
            runtime,
            limit,
            query: String::new(),
            state: ViewState::Idle,
            notice: None,
            latest_seq: 0,
            tx,
            rx,
            waker: None,
        }
    }

    pub fn with_waker(mut self, waker: Waker) -> Self {
        self.waker = Some(waker);
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// Start a search for the current query.
    ///
    /// A blank query only raises the "enter a query" notice. Otherwise the
    /// state becomes `Loading` before this returns and the fetch result is
    /// applied by a later `poll`.
    pub fn submit_search(&mut self) -> SubmitOutcome {
        if self.query.trim().is_empty() {
            debug!("Blank query, search not submitted");
            self.notice = Some(Notice::new(EMPTY_QUERY_NOTICE));
            return SubmitOutcome::EmptyQuery;
        }

        self.latest_seq += 1;
        let seq = self.latest_seq;
        self.state = ViewState::Loading;
        info!(seq, query = %self.query, limit = self.limit, "Submitting search");

        let fetch = self.api.search_quotes(self.query.clone(), self.limit);
        let tx = self.tx.clone();
        let waker = self.waker.clone();
        self.runtime.spawn(async move {
            let result = fetch.await;
            if tx.send((seq, result)).is_err() {
                debug!(seq, "Controller dropped, discarding search result");
                return;
            }
            if let Some(wake) = waker {
                wake();
            }
        });

        SubmitOutcome::Submitted(seq)
    }

    /// Re-run the search with whatever query is currently held.
    pub fn retry(&mut self) -> SubmitOutcome {
        debug!(query = %self.query, "Retrying search");
        self.submit_search()
    }

    /// Apply every completion that has arrived. Returns true if the view
    /// state changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok((seq, result)) = self.rx.try_recv() {
            changed |= self.apply(seq, result);
        }
        changed
    }

    fn apply(&mut self, seq: u64, result: Result<QuoteResponse, ApiError>) -> bool {
        if seq != self.latest_seq {
            debug!(seq, latest = self.latest_seq, "Discarding stale search result");
            return false;
        }

        self.state = match result {
            Ok(response) => {
                info!(seq, count = response.results.len(), "Search complete");
                ViewState::Results(response.results)
            }
            Err(e) => {
                match &e {
                    ApiError::Status { status, body } => error!(
                        seq,
                        category = e.category(),
                        status = *status,
                        body = body.as_deref().unwrap_or_default(),
                        "Search returned an error response"
                    ),
                    _ => error!(seq, category = e.category(), error = %e, "Search request failed"),
                }
                ViewState::Error(e.user_message())
            }
        };
        true
    }
}
