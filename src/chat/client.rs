//! Shared client logic for providers that expose an OpenAI-style chat completions API.

use async_trait::async_trait;

use crate::{
    chat::{request::Request, response::Response},
    core::{
        CompletionRequest, CredentialPool, HttpClient, HttpClientConfig, LlmError, TextGenerator,
    },
    provider::Provider,
};

/// Configuration trait for providers that use the chat completions API
pub trait ChatProviderConfig: Send + Sync {
    /// Model Provider
    fn provider(&self) -> Provider;

    /// Base URL for the API (e.g., `https://api.openai.com/v1`)
    fn base_url(&self) -> &str;

    /// API endpoint for chat completions (e.g., `/chat/completions`)
    fn endpoint(&self) -> &str;

    /// Model identifier sent with every request
    fn model(&self) -> &str;

    /// Keys rotated across outbound calls
    fn credentials(&self) -> &CredentialPool;

    /// Authentication header as (header_name, header_value) tuple
    fn auth_header(&self, api_key: &str) -> (String, String) {
        ("Authorization".to_string(), format!("Bearer {api_key}"))
    }

    /// Additional headers to include with each request
    fn extra_headers(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    fn http_config(&self) -> HttpClientConfig {
        HttpClientConfig::default()
    }
}

/// Shared client for providers using the chat completions API
pub struct ChatCompletionsClient<P: ChatProviderConfig> {
    pub config: P,
    http: HttpClient,
}

impl<P: ChatProviderConfig> ChatCompletionsClient<P> {
    pub fn new(config: P) -> Result<Self, LlmError> {
        let http = HttpClient::new(config.http_config())?;
        Ok(Self { config, http })
    }

    /// Make one API request, authenticated with the next key from the pool
    #[tracing::instrument(
        name = "chat_completion",
        skip(self, request),
        fields(
            provider = %self.config.provider(),
            model = %self.config.model(),
            messages = request.messages.len(),
            max_tokens = ?request.max_tokens,
        ),
        err
    )]
    pub(crate) async fn make_api_request(&self, request: &Request) -> Result<Response, LlmError> {
        let url = format!("{}{}", self.config.base_url(), self.config.endpoint());

        let mut headers = vec![self.config.auth_header(self.config.credentials().next())];
        headers.extend(self.config.extra_headers());

        self.http.post_json(&url, &headers, request).await
    }
}

#[async_trait]
impl<P: ChatProviderConfig> TextGenerator for ChatCompletionsClient<P> {
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError> {
        let api_request = Request::from_completion(self.config.model(), request);
        let api_response = self.make_api_request(&api_request).await?;
        extract_text(api_response)
    }
}

/// Pull the trimmed text of the first choice out of an API response.
pub(crate) fn extract_text(response: Response) -> Result<String, LlmError> {
    if let Some(usage) = response.usage {
        tracing::debug!(
            prompt_tokens = usage.prompt_tokens,
            completion_tokens = usage.completion_tokens,
            total_tokens = usage.total_tokens,
            "Completion usage"
        );
    }

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::Parse {
            message: "No choices in response".to_string(),
            source: None,
        })?;

    if choice.finish_reason.as_deref() == Some("length") {
        tracing::debug!("Completion stopped at the token limit");
    }

    match (choice.message.content, choice.message.refusal) {
        (Some(content), _) => Ok(content.trim().to_string()),
        (None, Some(refusal)) => Err(LlmError::Api {
            message: format!("Model refused: {refusal}"),
            status_code: None,
            source: None,
        }),
        (None, None) => Err(LlmError::Parse {
            message: "No content in message".to_string(),
            source: None,
        }),
    }
}
