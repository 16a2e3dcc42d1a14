//! Fetching pages and memoizing their extracted text for a session.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use reqwest::Client;
use rustc_hash::FxHashMap;
use tracing::{debug, info};
use url::Url;

use crate::ingestion::extract::extract_text;
use crate::types::PageQaError;

/// Result of fetching a page, indicating whether it came from the session memo.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub url: Url,
    /// Extracted visible text of the page.
    pub text: String,
    /// Size of the extracted text in bytes.
    pub bytes: usize,
    pub from_cache: bool,
}

/// Fetches pages over HTTP and extracts their visible text.
///
/// Successful extractions are memoized per URL for the fetcher's lifetime
/// (one fetcher per session), so repeated fetches of the same URL perform no
/// second network call and yield identical text. Failures are not memoized;
/// re-ingesting the URL retries the request.
///
/// The fetcher never mutates session state; the caller decides whether to
/// store the result.
#[derive(Clone, Debug)]
pub struct PageFetcher {
    client: Client,
    memo: Arc<Mutex<FxHashMap<String, String>>>,
}

impl PageFetcher {
    pub const USER_AGENT: &'static str = concat!("pageqa/", env!("CARGO_PKG_VERSION"));

    /// Creates a fetcher whose requests time out after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, PageQaError> {
        let client = Client::builder()
            .user_agent(Self::USER_AGENT)
            .use_rustls_tls()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            memo: Arc::new(Mutex::new(FxHashMap::default())),
        })
    }

    /// Fetches `url` and returns its extracted visible text.
    ///
    /// Timeouts, DNS and connect failures, non-2xx statuses, and pages whose
    /// extraction comes back empty are all per-URL errors; none of them
    /// should abort a batch.
    pub async fn fetch_text(&self, url: &Url) -> Result<FetchOutcome, PageQaError> {
        if let Some(text) = self.memo.lock().get(url.as_str()).cloned() {
            debug!(%url, "serving page text from session memo");
            let bytes = text.len();
            return Ok(FetchOutcome {
                url: url.clone(),
                text,
                bytes,
                from_cache: true,
            });
        }

        let fetch_err = |err: reqwest::Error| PageQaError::Fetch {
            url: url.to_string(),
            message: err.to_string(),
        };

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(fetch_err)?
            .error_for_status()
            .map_err(fetch_err)?;
        let body = response.text().await.map_err(fetch_err)?;

        let text = extract_text(&body);
        if text.is_empty() {
            return Err(PageQaError::EmptyDocument {
                url: url.to_string(),
            });
        }

        info!(%url, body_bytes = body.len(), text_bytes = text.len(), "fetched page");
        self.memo
            .lock()
            .insert(url.as_str().to_string(), text.clone());

        let bytes = text.len();
        Ok(FetchOutcome {
            url: url.clone(),
            text,
            bytes,
            from_cache: false,
        })
    }
}
