//! Azure `OpenAI` chat-completions client.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{ModelClient, ModelRequest};
use crate::config::ModelConfig;
use crate::mcp::tools::util::truncate_text;
use crate::{AppError, Result};

/// Longest slice of an error body echoed back to the caller.
const ERROR_BODY_LIMIT: usize = 512;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: Option<String>,
}

/// [`ModelClient`] backed by an Azure `OpenAI` deployment.
#[derive(Debug, Clone)]
pub struct AzureChatClient {
    http: reqwest::Client,
    url: String,
    api_key: String,
    model: String,
}

impl AzureChatClient {
    /// Build a client for the deployment described by `config`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the HTTP client cannot be constructed.
    pub fn new(config: &ModelConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|err| AppError::Config(format!("failed to build http client: {err}")))?;

        Ok(Self {
            http,
            url: completions_url(config),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    /// Fully-qualified chat-completions URL this client posts to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn send(&self, request: &ModelRequest) -> Result<String> {
        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
            temperature: request.options.temperature,
            response_format: request.options.json_output.then_some(ResponseFormat {
                kind: "json_object",
            }),
        };

        debug!(
            url = %self.url,
            json_output = request.options.json_output,
            "sending chat completion request"
        );

        let response = self
            .http
            .post(&self.url)
            .header("api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| AppError::Upstream(format!("model request failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            warn!(%status, "model endpoint returned an error status");
            return Err(AppError::Upstream(format!(
                "model endpoint returned {status}: {}",
                truncate_text(detail.trim(), ERROR_BODY_LIMIT)
            )));
        }

        let payload: ChatResponse = response
            .json()
            .await
            .map_err(|err| AppError::Upstream(format!("malformed model response: {err}")))?;

        payload
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| AppError::Upstream("model response contained no content".into()))
    }
}

impl ModelClient for AzureChatClient {
    fn complete<'a>(
        &'a self,
        request: &'a ModelRequest,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        Box::pin(self.send(request))
    }
}

/// Build `<endpoint>/openai/deployments/<deployment>/chat/completions?api-version=<v>`.
#[must_use]
pub fn completions_url(config: &ModelConfig) -> String {
    format!(
        "{}/openai/deployments/{}/chat/completions?api-version={}",
        config.endpoint.trim().trim_end_matches('/'),
        config.deployment.trim(),
        config.api_version.trim(),
    )
}
