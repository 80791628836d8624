//! Sequential page fetching with a soft result cap and single-retry
//! failure handling.

use std::time::{Duration, Instant};

use reqwest::{Client, Url};

use chronam_core::QueryParameters;

use crate::error::ClientError;
use crate::query::build_query;
use crate::types::{Attempt, FetchResult, FetchStats, SearchPage};

const DEFAULT_BASE_URL: &str = "https://chroniclingamerica.loc.gov/search/pages/results/";
const DEFAULT_PAGE_SIZE: u32 = 20;

/// The service commonly answers with a transient server error under
/// load; one fixed pause and a second attempt clears most of them.
const DEFAULT_RETRY_WAIT: Duration = Duration::from_secs(60);

/// Client for the Chronicling America page-search API.
///
/// Use [`ChronAmClient::new`] for production or
/// [`ChronAmClient::with_base_url`] to point at a mock server in tests.
/// One client may serve many queries, but each [`fetch_all`] call owns
/// its accumulator and stats exclusively; concurrent queries simply use
/// independent calls.
///
/// [`fetch_all`]: ChronAmClient::fetch_all
pub struct ChronAmClient {
    client: Client,
    base_url: Url,
    page_size: u32,
    retry_wait: Duration,
}

impl ChronAmClient {
    /// Creates a client pointed at the production search endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64) -> Result<Self, ClientError> {
        Self::with_base_url(timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(timeout_secs: u64, base_url: &str) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("chronam/0.1 (news-sentiment)")
            .build()?;

        // Normalise: exactly one trailing slash so the query string is
        // appended to the intended path.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url =
            Url::parse(&normalised).map_err(|e| ClientError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url,
            page_size: DEFAULT_PAGE_SIZE,
            retry_wait: DEFAULT_RETRY_WAIT,
        })
    }

    /// Overrides the rows-per-page count (minimum 1).
    #[must_use]
    pub fn page_size(mut self, rows: u32) -> Self {
        self.page_size = rows.max(1);
        self
    }

    /// Overrides the pause before the single retry. Tests set this to
    /// zero so a simulated failure does not sleep for a minute.
    #[must_use]
    pub fn retry_wait(mut self, wait: Duration) -> Self {
        self.retry_wait = wait;
        self
    }

    /// Retrieves every page of `params` until the query is fulfilled.
    ///
    /// Pages are requested strictly one after another, starting at page
    /// 1. The query is fulfilled once the page just received reports
    /// `end_index == total_items` (last page) or
    /// `end_index >= results_max`. The cap is soft: the page that
    /// crosses it is kept in full, so the result may overshoot
    /// `results_max` by up to one page. Callers size `results_max`
    /// expecting an approximate bound; do not truncate here.
    ///
    /// [`FetchResult::attempts`] records, per page, whether the first
    /// send or the resend after the pause produced it, so callers can
    /// assert on the outcome kind.
    ///
    /// # Errors
    ///
    /// - [`ClientError::RetryFailed`] when a page fails both its first
    ///   send and the single resend after the pause. Nothing fetched so
    ///   far survives the error; the query as a whole did not complete.
    /// - [`ClientError::Deserialize`] when a response body is not a
    ///   valid search page. Never retried.
    pub async fn fetch_all(
        &self,
        params: &QueryParameters,
        results_max: u64,
    ) -> Result<FetchResult, ClientError> {
        let mut items = Vec::new();
        let mut attempts = Vec::new();
        let mut stats = FetchStats::default();
        let mut page = 1u32;
        loop {
            let url = self.page_url(params, page)?;
            let (search_page, attempt, elapsed) = self.fetch_page(&url).await?;
            stats.elapsed_seconds += elapsed.as_secs_f64();
            stats.last_page_counts = (search_page.end_index, search_page.total_items);
            items.extend(search_page.items);
            attempts.push(attempt);
            tracing::debug!(
                page,
                end_index = stats.collected(),
                total_items = stats.available(),
                retried = matches!(attempt, Attempt::AfterRetry),
                "page received"
            );
            if fulfilled(&stats, results_max) {
                break;
            }
            page += 1;
        }
        Ok(FetchResult {
            items,
            attempts,
            stats,
        })
    }

    /// Fetches one page, retrying exactly once after a fixed pause on
    /// transient failure. The identical request is resent; a second
    /// failure is fatal for the whole query.
    async fn fetch_page(
        &self,
        url: &Url,
    ) -> Result<(SearchPage, Attempt, Duration), ClientError> {
        match self.send(url).await {
            Ok((page, elapsed)) => Ok((page, Attempt::First, elapsed)),
            Err(err) if is_transient(&err) => {
                tracing::warn!(
                    url = %url,
                    error = %err,
                    wait_secs = self.retry_wait.as_secs_f64(),
                    "page request failed; pausing before one retry"
                );
                tokio::time::sleep(self.retry_wait).await;
                match self.send(url).await {
                    Ok((page, elapsed)) => Ok((page, Attempt::AfterRetry, elapsed)),
                    Err(second) => Err(ClientError::RetryFailed {
                        url: url.to_string(),
                        status: failure_status(&second),
                        detail: second.to_string(),
                    }),
                }
            }
            Err(err) => Err(err),
        }
    }

    /// Sends one GET and parses the body. The returned duration covers
    /// only this request, not any retry pause.
    async fn send(&self, url: &Url) -> Result<(SearchPage, Duration), ClientError> {
        let started = Instant::now();
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        let body = response.text().await?;
        let elapsed = started.elapsed();
        let page = serde_json::from_str(&body).map_err(|e| ClientError::Deserialize {
            context: url.to_string(),
            source: e,
        })?;
        Ok((page, elapsed))
    }

    /// Joins the base URL with the hand-built query string. The query
    /// is not routed through `query_pairs_mut`, which would encode the
    /// `+` OR-delimiter (see [`crate::query`]).
    fn page_url(&self, params: &QueryParameters, page: u32) -> Result<Url, ClientError> {
        let full = format!("{}?{}", self.base_url, build_query(params, self.page_size, page));
        Url::parse(&full).map_err(|e| ClientError::InvalidBaseUrl {
            base_url: full,
            reason: e.to_string(),
        })
    }
}

/// Stop condition: last page reached, or the soft cap met or crossed.
fn fulfilled(stats: &FetchStats, results_max: u64) -> bool {
    let (end_index, total_items) = stats.last_page_counts;
    end_index == total_items || end_index >= results_max
}

/// Transport-layer failures (network errors and HTTP error statuses)
/// get the one retry. Anything else is a contract violation and does
/// not.
fn is_transient(err: &ClientError) -> bool {
    matches!(err, ClientError::Http(_) | ClientError::Status { .. })
}

fn failure_status(err: &ClientError) -> Option<u16> {
    match err {
        ClientError::Status { status, .. } => Some(*status),
        ClientError::Http(e) => e.status().map(|s| s.as_u16()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(end_index: u64, total_items: u64) -> FetchStats {
        FetchStats {
            elapsed_seconds: 0.0,
            last_page_counts: (end_index, total_items),
        }
    }

    fn test_client() -> ChronAmClient {
        ChronAmClient::with_base_url(30, "https://chroniclingamerica.loc.gov/search/pages/results")
            .expect("client construction should not fail")
    }

    #[test]
    fn fulfilled_on_last_page() {
        assert!(fulfilled(&stats(37, 37), 1000));
    }

    #[test]
    fn fulfilled_when_soft_cap_crossed() {
        assert!(fulfilled(&stats(40, 900), 25));
    }

    #[test]
    fn not_fulfilled_mid_query() {
        assert!(!fulfilled(&stats(20, 900), 100));
    }

    #[test]
    fn status_errors_are_transient() {
        let err = ClientError::Status {
            status: 503,
            url: "http://x/".to_owned(),
        };
        assert!(is_transient(&err));
        assert_eq!(failure_status(&err), Some(503));
    }

    #[test]
    fn deserialize_errors_are_not_transient() {
        let source = serde_json::from_str::<()>("nope").unwrap_err();
        let err = ClientError::Deserialize {
            context: "test".to_owned(),
            source,
        };
        assert!(!is_transient(&err));
        assert_eq!(failure_status(&err), None);
    }

    #[test]
    fn page_url_keeps_the_or_delimiter_raw() {
        let params = QueryParameters::new(
            vec!["drought".to_owned(), "famine".to_owned()],
            1900,
            1910,
        )
        .unwrap();
        let url = test_client().page_url(&params, 1).unwrap();
        assert!(
            url.as_str().contains("ortext=drought+famine&"),
            "URL must carry the raw delimiter: {url}"
        );
        assert!(url.as_str().ends_with("rows=20&page=1"));
    }

    #[test]
    fn base_url_gains_exactly_one_trailing_slash() {
        let client = test_client();
        assert!(client.base_url.as_str().ends_with("results/"));
    }
}
