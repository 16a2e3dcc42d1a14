//! Environment-driven configuration.
//!
//! The only required setting is `GROQ_API_KEY`; without it the application
//! refuses to start. Everything else has a sensible default and exists mainly
//! so tests and demos can point the tool at a mock endpoint or shrink the
//! timeouts.

use std::time::Duration;

use url::Url;

use crate::types::PageQaError;

/// Model requested from the completion endpoint when `GROQ_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "llama3-8b-8192";

/// Default OpenAI-compatible API root.
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Per-request timeout for page fetches.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Per-request timeout for completion calls.
pub const DEFAULT_COMPLETION_TIMEOUT: Duration = Duration::from_secs(60);

/// Number of words per context chunk sent to the completion endpoint.
pub const DEFAULT_CHUNK_WORDS: usize = 1000;

/// Resolved application configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: Url,
    pub fetch_timeout: Duration,
    pub completion_timeout: Duration,
    pub chunk_words: usize,
}

impl AppConfig {
    /// Loads configuration from the environment (and a `.env` file if present).
    ///
    /// Fails when `GROQ_API_KEY` is absent or empty; callers must treat that
    /// as fatal before accepting any user input.
    pub fn from_env() -> Result<Self, PageQaError> {
        dotenvy::dotenv().ok();
        let api_key = std::env::var("GROQ_API_KEY").map_err(|_| {
            PageQaError::Config("GROQ_API_KEY is not set; refusing to start".to_string())
        })?;
        if api_key.trim().is_empty() {
            return Err(PageQaError::Config(
                "GROQ_API_KEY is empty; refusing to start".to_string(),
            ));
        }
        let model = std::env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base_url =
            std::env::var("GROQ_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(api_key, model, &base_url)
    }

    /// Builds a configuration from explicit values, validating the base URL.
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: &str,
    ) -> Result<Self, PageQaError> {
        let base_url = Url::parse(base_url)
            .map_err(|err| PageQaError::Config(format!("invalid completion base url: {err}")))?;
        Ok(Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            completion_timeout: DEFAULT_COMPLETION_TIMEOUT,
            chunk_words: DEFAULT_CHUNK_WORDS,
        })
    }

    #[must_use]
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_completion_timeout(mut self, timeout: Duration) -> Self {
        self.completion_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_chunk_words(mut self, chunk_words: usize) -> Self {
        self.chunk_words = chunk_words;
        self
    }
}
