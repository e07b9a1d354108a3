//! OpenRouter provider implementation.
//!
//! OpenRouter speaks the OpenAI chat completions dialect; the only differences
//! are the base URL, model naming (`vendor/model`) and two optional
//! attribution headers.

use std::sync::Arc;

use async_trait::async_trait;

use crate::chat::{ChatCompletionsClient, ChatProviderConfig};
use crate::core::{CompletionRequest, CredentialPool, HttpClientConfig, LlmError, TextGenerator};
use crate::provider::{Provider, constants::openrouter};

/// OpenRouter-specific configuration for the chat completions client
pub struct OpenRouterConfig {
    pub credentials: Arc<CredentialPool>,
    pub base_url: String,
    pub model: String,
    pub http_referer: Option<String>,
    pub x_title: Option<String>,
    pub http_config: HttpClientConfig,
}

impl OpenRouterConfig {
    pub fn new(credentials: Arc<CredentialPool>) -> Self {
        Self {
            credentials,
            base_url: openrouter::API_BASE.to_string(),
            model: openrouter::DEFAULT_MODEL.to_string(),
            http_referer: None,
            x_title: None,
            http_config: HttpClientConfig::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_http_config(mut self, config: HttpClientConfig) -> Self {
        self.http_config = config;
        self
    }

    pub fn with_http_referer(mut self, http_referer: impl Into<String>) -> Self {
        self.http_referer = Some(http_referer.into());
        self
    }

    pub fn with_x_title(mut self, x_title: impl Into<String>) -> Self {
        self.x_title = Some(x_title.into());
        self
    }
}

impl ChatProviderConfig for OpenRouterConfig {
    fn provider(&self) -> Provider {
        Provider::OpenRouter
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> &str {
        openrouter::CHAT_COMPLETIONS_ENDPOINT
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn credentials(&self) -> &CredentialPool {
        &self.credentials
    }

    fn extra_headers(&self) -> Vec<(String, String)> {
        let mut headers = Vec::new();

        if let Some(referer) = &self.http_referer {
            headers.push(("HTTP-Referer".to_string(), referer.clone()));
        }

        if let Some(title) = &self.x_title {
            headers.push(("X-Title".to_string(), title.clone()));
        }

        headers
    }

    fn http_config(&self) -> HttpClientConfig {
        self.http_config.clone()
    }
}

pub struct OpenRouterClient {
    chat_client: ChatCompletionsClient<OpenRouterConfig>,
}

impl OpenRouterClient {
    pub fn new(config: OpenRouterConfig) -> Result<Self, LlmError> {
        Ok(Self {
            chat_client: ChatCompletionsClient::new(config)?,
        })
    }
}

#[async_trait]
impl TextGenerator for OpenRouterClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError> {
        self.chat_client.complete(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> OpenRouterConfig {
        let pool = CredentialPool::new(vec!["or-key".to_string()]).unwrap();
        OpenRouterConfig::new(Arc::new(pool))
    }

    #[test]
    fn test_no_attribution_headers_by_default() {
        assert!(config().extra_headers().is_empty());
    }

    #[test]
    fn test_attribution_headers() {
        let config = config()
            .with_http_referer("https://courses.example")
            .with_x_title("Course Builder");

        assert_eq!(
            config.extra_headers(),
            vec![
                (
                    "HTTP-Referer".to_string(),
                    "https://courses.example".to_string()
                ),
                ("X-Title".to_string(), "Course Builder".to_string()),
            ]
        );
    }
}
