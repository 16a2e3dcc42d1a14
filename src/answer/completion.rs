//! The remote completion endpoint seam and its Groq-flavored client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::AppConfig;
use crate::types::PageQaError;

/// A remote service that, given a question and a body of context, returns a
/// natural-language answer.
///
/// This is the seam the query engine depends on; tests substitute a recording
/// implementation, production uses [`GroqClient`].
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, question: &str, context: &str) -> Result<String, PageQaError>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Client for an OpenAI-compatible `chat/completions` endpoint (Groq by
/// default; any compatible base URL works, which is how the tests point it at
/// a mock server).
///
/// Requests carry an explicit timeout so a stalled endpoint surfaces as a
/// normal per-question failure instead of an indefinite hang.
#[derive(Clone, Debug)]
pub struct GroqClient {
    client: Client,
    endpoint: Url,
    api_key: String,
    model: String,
}

impl GroqClient {
    /// Creates a client for the endpoint rooted at `base_url`.
    pub fn new(
        base_url: Url,
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, PageQaError> {
        let raw = format!("{}/chat/completions", base_url.as_str().trim_end_matches('/'));
        let endpoint = Url::parse(&raw)
            .map_err(|err| PageQaError::Completion(format!("invalid endpoint url: {err}")))?;
        let client = Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            endpoint,
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    /// Creates a client from resolved application configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, PageQaError> {
        Self::new(
            config.base_url.clone(),
            config.api_key.clone(),
            config.model.clone(),
            config.completion_timeout,
        )
    }

    /// Full URL the client posts completions to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl CompletionProvider for GroqClient {
    async fn complete(&self, question: &str, context: &str) -> Result<String, PageQaError> {
        let prompt = format!(
            "Answer the following question based on the context provided. \
             Question: {question} Context: {context}"
        );
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let completion_err = |err: reqwest::Error| PageQaError::Completion(err.to_string());

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(completion_err)?
            .error_for_status()
            .map_err(completion_err)?;

        let parsed: ChatResponse = response.json().await.map_err(completion_err)?;
        let choice = parsed.choices.into_iter().next().ok_or_else(|| {
            PageQaError::Completion("completion response contained no choices".to_string())
        })?;
        Ok(choice.message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_doubled_slashes() {
        let base = Url::parse("https://api.groq.com/openai/v1/").unwrap();
        let client = GroqClient::new(base, "k", "m", Duration::from_secs(1)).unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "https://api.groq.com/openai/v1/chat/completions"
        );
    }

    #[test]
    fn response_shape_parses() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"It says hello."}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.choices[0].message.content, "It says hello.");
    }
}
