use serde::Deserialize;
use serde_json::Value;

/// One page of search results as returned on the wire.
///
/// `end_index` is the cumulative count of records seen through this page;
/// together with `total_items` it defines query fulfillment (see
/// [`crate::ChronAmClient::fetch_all`]).
#[derive(Debug, Deserialize)]
pub struct SearchPage {
    /// Raw search hits in arrival order. Kept as JSON values; typing
    /// happens later in `chronam_core::assemble`.
    pub items: Vec<Value>,
    #[serde(rename = "endIndex")]
    pub end_index: u64,
    #[serde(rename = "totalItems")]
    pub total_items: u64,
}

/// Which attempt produced a page: the first send, or the single resend
/// after the fixed pause. Surfaced so callers and tests can assert on
/// the outcome kind directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attempt {
    First,
    AfterRetry,
}

/// Per-query fetch accounting, owned by one `fetch_all` call and
/// returned by value. Never shared across queries.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchStats {
    /// Summed durations of the successful request per page. Excludes
    /// the retry pause and failed first attempts.
    pub elapsed_seconds: f64,
    /// `(end_index, total_items)` of the most recently received page.
    pub last_page_counts: (u64, u64),
}

impl FetchStats {
    /// Records collected through the last page.
    #[must_use]
    pub fn collected(&self) -> u64 {
        self.last_page_counts.0
    }

    /// Total matches the service reports for the query.
    #[must_use]
    pub fn available(&self) -> u64 {
        self.last_page_counts.1
    }
}

/// Everything one completed query produced: the accumulated raw hits of
/// all pages, in page order, plus the fetch accounting.
#[derive(Debug)]
pub struct FetchResult {
    pub items: Vec<Value>,
    /// How each page was obtained, in page order. A query that needed
    /// no retries holds only [`Attempt::First`].
    pub attempts: Vec<Attempt>,
    pub stats: FetchStats,
}
