//! Integration tests for `ChronAmClient` using wiremock HTTP mocks.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use chronam_client::{Attempt, ChronAmClient, ClientError};
use chronam_core::QueryParameters;

fn test_client(base_url: &str) -> ChronAmClient {
    ChronAmClient::with_base_url(30, base_url)
        .expect("client construction should not fail")
        .retry_wait(Duration::ZERO)
}

fn drought_1900() -> QueryParameters {
    QueryParameters::new(vec!["drought".to_owned()], 1900, 1900).unwrap()
}

fn item(seq: u64) -> serde_json::Value {
    json!({
        "date": "19000105",
        "state": ["Kansas"],
        "county": ["Ford"],
        "city": ["Dodge City"],
        "title": format!("Paper {seq}"),
        "ocr_eng": "Crops failed due to drought.",
        "seq": seq
    })
}

fn page_body(items: Vec<serde_json::Value>, end_index: u64, total_items: u64) -> serde_json::Value {
    json!({ "items": items, "endIndex": end_index, "totalItems": total_items })
}

#[tokio::test]
async fn single_page_query_completes_in_one_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_body(vec![item(1), item(2), item(3)], 3, 3)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = test_client(&server.uri())
        .fetch_all(&drought_1900(), 100)
        .await
        .expect("single page should fetch cleanly");

    assert_eq!(result.items.len(), 3);
    assert_eq!(result.attempts, [Attempt::First]);
    assert_eq!(result.stats.last_page_counts, (3, 3));
    assert!(result.stats.elapsed_seconds >= 0.0);
}

#[tokio::test]
async fn paginates_sequentially_until_total_items() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("page", "1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page_body(vec![item(1), item(2)], 2, 4)),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page_body(vec![item(3), item(4)], 4, 4)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = test_client(&server.uri())
        .fetch_all(&drought_1900(), 100)
        .await
        .expect("two-page query should fetch cleanly");

    assert_eq!(result.items.len(), 4);
    let seqs: Vec<u64> = result
        .items
        .iter()
        .map(|i| i["seq"].as_u64().unwrap())
        .collect();
    assert_eq!(seqs, [1, 2, 3, 4], "page order must be preserved");
    assert_eq!(result.attempts, [Attempt::First, Attempt::First]);
    assert_eq!(result.stats.last_page_counts, (4, 4));
}

#[tokio::test]
async fn soft_cap_keeps_the_crossing_page_whole() {
    let server = MockServer::start().await;

    // 20 rows arrive although only 10 were asked for; the cap is soft,
    // so the whole page is kept and no second page is requested.
    let items: Vec<_> = (1..=20).map(item).collect();
    Mock::given(method("GET"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(items, 20, 100)))
        .expect(1)
        .mount(&server)
        .await;

    let result = test_client(&server.uri())
        .fetch_all(&drought_1900(), 10)
        .await
        .expect("capped query should fetch cleanly");

    assert_eq!(result.items.len(), 20, "crossing page must not be truncated");
    assert_eq!(result.stats.last_page_counts, (20, 100));
}

#[tokio::test]
async fn one_failure_then_success_retries_exactly_once() {
    let server = MockServer::start().await;

    // First request fails; the identical resend must succeed.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page_body(vec![item(1)], 1, 1)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = test_client(&server.uri())
        .fetch_all(&drought_1900(), 100)
        .await
        .expect("retry should recover the page");

    assert_eq!(result.items.len(), 1);
    assert_eq!(
        result.attempts,
        [Attempt::AfterRetry],
        "the page must be marked as won on the second attempt"
    );
}

#[tokio::test]
async fn two_consecutive_failures_are_fatal() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(2)
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .fetch_all(&drought_1900(), 100)
        .await
        .expect_err("second failure must be fatal");

    match err {
        ClientError::RetryFailed { status, .. } => assert_eq!(status, Some(503)),
        other => panic!("expected RetryFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_fatal_and_never_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("this is not a search page"))
        .expect(1)
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .fetch_all(&drought_1900(), 100)
        .await
        .expect_err("malformed body must fail");

    assert!(matches!(err, ClientError::Deserialize { .. }));
}

#[tokio::test]
async fn empty_result_set_stops_after_one_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(Vec::new(), 0, 0)))
        .expect(1)
        .mount(&server)
        .await;

    let result = test_client(&server.uri())
        .fetch_all(&drought_1900(), 100)
        .await
        .expect("empty result set is not an error");

    assert!(result.items.is_empty());
    assert_eq!(result.stats.last_page_counts, (0, 0));
}
