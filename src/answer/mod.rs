//! Question answering over ingested page text.
//!
//! * [`chunk`] — fixed-size word chunking of the concatenated context.
//! * [`completion`] — the remote completion endpoint seam and Groq client.
//! * [`engine`] — precondition checks and the per-chunk query loop.

pub mod chunk;
pub mod completion;
pub mod engine;

pub use chunk::chunk_words;
pub use completion::{CompletionProvider, GroqClient};
pub use engine::{
    MSG_MORE_DETAIL, MSG_NO_ANSWER, MSG_NO_CONTENT, MSG_PROCESSING_ERROR, QueryAnswerer,
};
