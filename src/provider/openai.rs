use std::sync::Arc;

use async_trait::async_trait;

use crate::chat::{ChatCompletionsClient, ChatProviderConfig};
use crate::core::{CompletionRequest, CredentialPool, HttpClientConfig, LlmError, TextGenerator};
use crate::provider::{Provider, constants::openai};

/// OpenAI-specific configuration for the chat completions client
pub struct OpenAiConfig {
    pub credentials: Arc<CredentialPool>,
    pub base_url: String,
    pub model: String,
    pub http_config: HttpClientConfig,
}

impl OpenAiConfig {
    pub fn new(credentials: Arc<CredentialPool>) -> Self {
        Self {
            credentials,
            base_url: openai::API_BASE.to_string(),
            model: openai::DEFAULT_MODEL.to_string(),
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
}

impl ChatProviderConfig for OpenAiConfig {
    fn provider(&self) -> Provider {
        Provider::OpenAI
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> &str {
        openai::CHAT_COMPLETIONS_ENDPOINT
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn credentials(&self) -> &CredentialPool {
        &self.credentials
    }

    fn http_config(&self) -> HttpClientConfig {
        self.http_config.clone()
    }
}

pub struct OpenAiClient {
    chat_client: ChatCompletionsClient<OpenAiConfig>,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Result<Self, LlmError> {
        Ok(Self {
            chat_client: ChatCompletionsClient::new(config)?,
        })
    }
}

#[async_trait]
impl TextGenerator for OpenAiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError> {
        self.chat_client.complete(request).await
    }
}
