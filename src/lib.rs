//! Interactive web content Q&A.
//!
//! Ingest a list of URLs, hold their extracted text in a per-session store,
//! and answer free-text questions by forwarding fixed-size word chunks of the
//! concatenated text to an OpenAI-compatible completion endpoint.
//!
//! ```text
//! URL block ──► ingestion::PageFetcher ──► extract::extract_text
//!                      │                        (drop script/style,
//!                      │                         collapse whitespace)
//!                      └─► session memo (no re-fetch within a session)
//!                                 │
//!                                 ▼
//!                      SessionStore (URL → text, insertion order)
//!                                 │ context()
//!                                 ▼
//!                      answer::chunk_words (1000-word chunks)
//!                                 │ one request per chunk, in order
//!                                 ▼
//!                      answer::CompletionProvider (Groq chat completions)
//!                                 │
//!                                 ▼
//!                      first chunk's answer (abort on first failure)
//! ```
//!
//! All state lives in an explicit [`SessionStore`] owned by one interactive
//! session; nothing persists across restarts, and every operation is strictly
//! sequential with at most one network call in flight.

pub mod answer;
pub mod config;
pub mod ingestion;
pub mod session;
pub mod types;

pub use answer::{CompletionProvider, GroqClient, QueryAnswerer};
pub use config::AppConfig;
pub use ingestion::{IngestReport, IngestStatus, PageFetcher, ingest_urls, parse_url_block};
pub use session::{IngestedPage, SessionStore};
pub use types::PageQaError;
