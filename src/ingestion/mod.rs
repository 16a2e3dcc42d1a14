//! Ingestion: turning user-supplied URLs into stored page text.
//!
//! The helpers in this module provide three capabilities:
//!
//! * [`fetch`] — HTTP fetching with per-session memoization.
//! * [`extract`] — HTML-to-text extraction.
//! * [`ingest_urls`] — the batch driver that records results in a
//!   [`SessionStore`].
//!
//! URLs are processed strictly one at a time in input order, and a failure
//! for one URL never aborts the rest of the batch.

pub mod extract;
pub mod fetch;

pub use extract::extract_text;
pub use fetch::{FetchOutcome, PageFetcher};

use tracing::warn;
use url::Url;

use crate::session::SessionStore;

/// Outcome of one URL within an ingestion batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IngestReport {
    pub url: String,
    pub status: IngestStatus,
}

/// Per-URL ingestion status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IngestStatus {
    /// The page was fetched (or served from the session memo) and stored.
    Ingested { bytes: usize, from_cache: bool },
    /// The page could not be ingested; the store was not touched for this URL.
    Failed { message: String },
}

impl IngestStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, IngestStatus::Ingested { .. })
    }
}

/// Splits a multi-line URL block into parsed URLs and per-line failures.
///
/// Blank lines are skipped; lines that do not parse as absolute URLs become
/// failed reports so the user sees them alongside fetch results.
pub fn parse_url_block(input: &str) -> (Vec<Url>, Vec<IngestReport>) {
    let mut urls = Vec::new();
    let mut failures = Vec::new();
    for line in input.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match Url::parse(line) {
            Ok(url) => urls.push(url),
            Err(err) => failures.push(IngestReport {
                url: line.to_string(),
                status: IngestStatus::Failed {
                    message: format!("invalid url: {err}"),
                },
            }),
        }
    }
    (urls, failures)
}

/// Ingests `urls` one at a time in input order.
///
/// Successful fetches are stored under their URL via [`SessionStore::put`]
/// (last write wins when a URL repeats within a batch). Failures are logged,
/// reported per URL, and never abort the batch.
pub async fn ingest_urls(
    fetcher: &PageFetcher,
    session: &mut SessionStore,
    urls: &[Url],
) -> Vec<IngestReport> {
    let mut reports = Vec::with_capacity(urls.len());
    for url in urls {
        match fetcher.fetch_text(url).await {
            Ok(outcome) => {
                session.put(url.as_str(), outcome.text);
                reports.push(IngestReport {
                    url: url.to_string(),
                    status: IngestStatus::Ingested {
                        bytes: outcome.bytes,
                        from_cache: outcome.from_cache,
                    },
                });
            }
            Err(err) => {
                warn!(%url, error = %err, "failed to ingest page");
                reports.push(IngestReport {
                    url: url.to_string(),
                    status: IngestStatus::Failed {
                        message: err.to_string(),
                    },
                });
            }
        }
    }
    reports
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_block_separates_parsed_from_invalid() {
        let input = "https://a.example/page\n\n  not-a-url  \nhttps://b.example/\n";
        let (urls, failures) = parse_url_block(input);
        assert_eq!(urls.len(), 2);
        assert_eq!(urls[0].as_str(), "https://a.example/page");
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].url, "not-a-url");
        assert!(!failures[0].status.is_success());
    }

    #[test]
    fn empty_block_yields_nothing() {
        let (urls, failures) = parse_url_block("\n   \n");
        assert!(urls.is_empty());
        assert!(failures.is_empty());
    }
}
