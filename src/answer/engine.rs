//! Precondition checks and the per-chunk query loop.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::answer::chunk::chunk_words;
use crate::answer::completion::CompletionProvider;

/// Fixed reply when the question is too short to answer meaningfully.
pub const MSG_MORE_DETAIL: &str = "Please provide a more detailed question.";

/// Fixed reply when nothing has been ingested yet.
pub const MSG_NO_CONTENT: &str =
    "No ingested content available. Please ingest valid URLs first.";

/// Fixed reply when any chunk request fails.
pub const MSG_PROCESSING_ERROR: &str =
    "Could not generate a complete answer due to an error processing content chunks.";

/// Fixed reply when no chunk produced an answer.
pub const MSG_NO_ANSWER: &str = "Could not generate an answer from the provided content.";

/// Minimum number of whitespace-separated words a question must contain.
pub const MIN_QUESTION_WORDS: usize = 3;

/// Answers questions by forwarding fixed-size chunks of the ingested context
/// to a [`CompletionProvider`], one request per chunk, strictly in order.
///
/// Each call to [`answer`](Self::answer) is a stateless sequential loop:
/// failures abort the current question only and never touch session state, so
/// the user can retry the same question afterwards.
pub struct QueryAnswerer {
    provider: Arc<dyn CompletionProvider>,
    chunk_words: usize,
}

impl QueryAnswerer {
    pub fn new(provider: Arc<dyn CompletionProvider>, chunk_words: usize) -> Self {
        Self {
            provider,
            chunk_words,
        }
    }

    /// Answers `question` against `context`, always returning a user-facing
    /// string.
    ///
    /// Questions under [`MIN_QUESTION_WORDS`] words and empty contexts return
    /// fixed guidance messages without any remote call. Otherwise one
    /// completion request is issued per chunk; the first failure aborts with
    /// [`MSG_PROCESSING_ERROR`], and on success only the first chunk's answer
    /// is returned (later answers are computed and discarded, preserving the
    /// first-answer-wins contract).
    pub async fn answer(&self, context: &str, question: &str) -> String {
        if question.split_whitespace().count() < MIN_QUESTION_WORDS {
            return MSG_MORE_DETAIL.to_string();
        }
        if context.trim().is_empty() {
            return MSG_NO_CONTENT.to_string();
        }

        let chunks = chunk_words(context, self.chunk_words);
        debug!(chunks = chunks.len(), "querying completion endpoint per chunk");

        let mut answers = Vec::with_capacity(chunks.len());
        for (index, chunk) in chunks.iter().enumerate() {
            match self.provider.complete(question, chunk).await {
                Ok(answer) => answers.push(answer.trim().to_string()),
                Err(err) => {
                    warn!(chunk = index, error = %err, "chunk query failed; aborting question");
                    return MSG_PROCESSING_ERROR.to_string();
                }
            }
        }

        match answers.into_iter().next() {
            Some(first) => first,
            None => MSG_NO_ANSWER.to_string(),
        }
    }
}
