use crate::constants::{endpoints, models, timeouts};
use crate::error::PlannerError;
use crate::llm::traits::*;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Client for OpenAI-compatible chat-completion APIs (Groq by default).
pub struct OpenAIClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    timeout: Duration,
}

impl OpenAIClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        let timeout = Duration::from_secs(timeouts::LLM_REQUEST_SECS);
        Self {
            client: Self::build_http(timeout),
            api_key: api_key.into(),
            model: models::DEFAULT_MODEL.to_string(),
            base_url: endpoints::GROQ_BASE_URL.to_string(),
            timeout,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self.client = Self::build_http(timeout);
        self
    }

    /// Use a preconfigured HTTP client (proxy settings, TLS roots). Its own
    /// timeout applies; `with_timeout` only sets the reported value.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, endpoints::CHAT_COMPLETIONS_PATH)
    }

    fn build_http(timeout: Duration) -> reqwest::Client {
        reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("HTTP client builder failed, requests are unbounded: {e}");
                reqwest::Client::new()
            })
    }

    fn map_transport(&self, e: reqwest::Error) -> PlannerError {
        if e.is_timeout() {
            PlannerError::Timeout(self.timeout.as_secs())
        } else {
            PlannerError::Http(e)
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// Pulls the assistant text out of a raw response body.
pub(crate) fn parse_completion(body: &str) -> Result<String, PlannerError> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| PlannerError::MalformedResponse(format!("Failed to parse response: {e}")))?;

    let content = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| PlannerError::MalformedResponse("No choices in response".into()))?
        .message
        .content
        .unwrap_or_default();

    if content.trim().is_empty() {
        return Err(PlannerError::MalformedResponse("Empty completion".into()));
    }
    Ok(content)
}

#[async_trait::async_trait]
impl ModelClient for OpenAIClient {
    async fn generate(&self, messages: &[Message]) -> Result<String, PlannerError> {
        check_request(messages)?;

        let request_body = ChatRequest {
            model: &self.model,
            messages,
        };

        tracing::debug!(model = %self.model, messages = messages.len(), "sending completion request");

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| self.map_transport(e))?;

        let status = response.status();
        let response_text = response.text().await.map_err(|e| self.map_transport(e))?;

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(PlannerError::Auth(format!(
                    "API rejected the credential ({status}): {response_text}"
                )));
            }
            s if !s.is_success() => {
                return Err(PlannerError::Llm(format!(
                    "API error ({status}): {response_text}"
                )));
            }
            _ => {}
        }

        parse_completion(&response_text)
    }

    fn model(&self) -> &str {
        &self.model
    }
}
