//! Shared error type for ingestion, configuration, and completion calls.

use thiserror::Error;

/// Errors produced while configuring the tool, ingesting pages, or talking to
/// the completion endpoint.
///
/// Fetch-side variants are recoverable per URL: the ingestion driver reports
/// them and moves on to the next URL. [`PageQaError::Config`] is fatal at
/// startup. Completion-side failures abort the current question only; the
/// session store always survives them.
#[derive(Debug, Error)]
pub enum PageQaError {
    /// Required configuration is missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// A user-supplied URL could not be parsed.
    #[error("invalid url '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// A page fetch failed at the network layer or returned a non-success status.
    #[error("fetch failed for {url}: {message}")]
    Fetch { url: String, message: String },

    /// A page fetched successfully but yielded no visible text.
    #[error("no visible text extracted from {url}")]
    EmptyDocument { url: String },

    /// The completion endpoint returned an unusable response.
    #[error("completion endpoint error: {0}")]
    Completion(String),

    /// Transport-level HTTP error outside the per-URL fetch path.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// I/O error from the interactive front end.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
