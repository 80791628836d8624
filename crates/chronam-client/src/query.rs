//! Query-string construction for the page-search endpoint.
//!
//! The service's `ortext` parameter takes keywords joined by a literal
//! `+`, which it reads as OR. A percent-encoded `%2B` changes the
//! meaning, so the query string is assembled by hand here rather than
//! through a URL builder that would encode every value uniformly: each
//! keyword is encoded individually and the joining `+` stays raw.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use chronam_core::QueryParameters;

/// Characters percent-encoded inside a single query value. Notably
/// includes `+` so that a `+` *inside* a keyword cannot masquerade as
/// the OR-delimiter.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?');

/// Builds the raw query string for one page of one query.
///
/// `rows` is the page size and `page` the 1-based page number; both are
/// positive by the caller's contract. Year bounds map to the service's
/// inclusive `yearRange` filter.
#[must_use]
pub fn build_query(params: &QueryParameters, rows: u32, page: u32) -> String {
    let ortext = params
        .keywords()
        .iter()
        .map(|keyword| utf8_percent_encode(keyword, QUERY_VALUE).to_string())
        .collect::<Vec<_>>()
        .join("+");
    format!(
        "ortext={ortext}&dateFilterType=yearRange&date1={}&date2={}&format=json&rows={rows}&page={page}",
        params.year_min(),
        params.year_max(),
    )
}
