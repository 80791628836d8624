//! HTTP client for the Chronicling America page-search API.
//!
//! Wraps `reqwest` with the service's query syntax (including its literal
//! `+` OR-delimiter, see [`query`]), sequential pagination with a soft
//! result cap, and a fixed-wait single-retry policy for transient
//! failures.

mod error;
mod fetcher;
pub mod query;
mod types;

pub use error::ClientError;
pub use fetcher::ChronAmClient;
pub use types::{Attempt, FetchResult, FetchStats, SearchPage};
