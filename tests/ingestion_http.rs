//! Integration tests for page ingestion against a mock HTTP server.
//!
//! These cover the per-URL failure isolation, script/style stripping, and
//! session memoization behavior of the fetcher and batch driver.

use std::time::Duration;

use httpmock::prelude::*;
use url::Url;

use pageqa::SessionStore;
use pageqa::ingestion::{IngestStatus, PageFetcher, ingest_urls};

const SCRIPTED_PAGE: &str =
    "<html><body><script>evil()</script><p>Hello world</p></body></html>";

fn fetcher() -> PageFetcher {
    PageFetcher::new(Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn ingests_visible_text_without_script_content() {
    let server = MockServer::start_async().await;
    let page = server
        .mock_async(|when, then| {
            when.method(GET).path("/page");
            then.status(200)
                .header("content-type", "text/html")
                .body(SCRIPTED_PAGE);
        })
        .await;

    let url = Url::parse(&server.url("/page")).unwrap();
    let mut session = SessionStore::new();
    let reports = ingest_urls(&fetcher(), &mut session, &[url.clone()]).await;

    assert_eq!(reports.len(), 1);
    assert!(reports[0].status.is_success());
    assert_eq!(session.get(url.as_str()), Some("Hello world"));
    page.assert_async().await;
}

#[tokio::test]
async fn non_success_status_leaves_store_untouched() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/missing");
            then.status(404).body("not here");
        })
        .await;

    let url = Url::parse(&server.url("/missing")).unwrap();
    let mut session = SessionStore::new();
    let reports = ingest_urls(&fetcher(), &mut session, &[url]).await;

    assert_eq!(reports.len(), 1);
    assert!(matches!(&reports[0].status, IngestStatus::Failed { .. }));
    assert!(session.is_empty());
}

#[tokio::test]
async fn timed_out_fetch_is_a_per_url_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/slow");
            then.status(200)
                .body("<p>too late</p>")
                .delay(Duration::from_millis(500));
        })
        .await;

    let url = Url::parse(&server.url("/slow")).unwrap();
    let fetcher = PageFetcher::new(Duration::from_millis(100)).unwrap();
    let mut session = SessionStore::new();
    let reports = ingest_urls(&fetcher, &mut session, &[url]).await;

    assert!(matches!(&reports[0].status, IngestStatus::Failed { .. }));
    assert!(session.is_empty());
}

#[tokio::test]
async fn repeated_ingest_serves_from_session_memo() {
    let server = MockServer::start_async().await;
    let page = server
        .mock_async(|when, then| {
            when.method(GET).path("/cached");
            then.status(200).body("<p>stable text</p>");
        })
        .await;

    let url = Url::parse(&server.url("/cached")).unwrap();
    let fetcher = fetcher();
    let mut session = SessionStore::new();

    let first = ingest_urls(&fetcher, &mut session, &[url.clone()]).await;
    let second = ingest_urls(&fetcher, &mut session, &[url.clone()]).await;

    assert_eq!(
        first[0].status,
        IngestStatus::Ingested {
            bytes: "stable text".len(),
            from_cache: false
        }
    );
    assert_eq!(
        second[0].status,
        IngestStatus::Ingested {
            bytes: "stable text".len(),
            from_cache: true
        }
    );
    assert_eq!(session.get(url.as_str()), Some("stable text"));
    // Only the first ingestion reached the network.
    assert_eq!(page.hits_async().await, 1);
}

#[tokio::test]
async fn batch_continues_past_failed_urls() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/broken");
            then.status(500);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/ok");
            then.status(200).body("<p>still here</p>");
        })
        .await;

    let broken = Url::parse(&server.url("/broken")).unwrap();
    let ok = Url::parse(&server.url("/ok")).unwrap();
    let mut session = SessionStore::new();
    let reports = ingest_urls(&fetcher(), &mut session, &[broken, ok.clone()]).await;

    assert_eq!(reports.len(), 2);
    assert!(!reports[0].status.is_success());
    assert!(reports[1].status.is_success());
    assert_eq!(session.len(), 1);
    assert_eq!(session.get(ok.as_str()), Some("still here"));
}

#[tokio::test]
async fn page_without_visible_text_counts_as_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/blank");
            then.status(200)
                .body("<html><body><script>x()</script></body></html>");
        })
        .await;

    let url = Url::parse(&server.url("/blank")).unwrap();
    let mut session = SessionStore::new();
    let reports = ingest_urls(&fetcher(), &mut session, &[url]).await;

    assert!(matches!(&reports[0].status, IngestStatus::Failed { .. }));
    assert!(session.is_empty());
}
