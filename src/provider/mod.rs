mod constants;
pub(crate) mod openai;
pub(crate) mod openrouter;

pub use openai::{OpenAiClient, OpenAiConfig};
pub use openrouter::{OpenRouterClient, OpenRouterConfig};

use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    OpenAI,
    OpenRouter,
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::OpenAI => write!(f, "OpenAI"),
            Provider::OpenRouter => write!(f, "OpenRouter"),
        }
    }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(Provider::OpenAI),
            "openrouter" => Ok(Provider::OpenRouter),
            other => Err(format!(
                "Unsupported provider: {other}. Expected: openai or openrouter"
            )),
        }
    }
}

impl Provider {
    /// Prefix of the numbered environment variables holding this provider's API keys
    pub fn api_key_env_prefix(&self) -> &'static str {
        match self {
            Provider::OpenAI => constants::openai::API_KEY_ENV_PREFIX,
            Provider::OpenRouter => constants::openrouter::API_KEY_ENV_PREFIX,
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            Provider::OpenAI => constants::openai::DEFAULT_MODEL,
            Provider::OpenRouter => constants::openrouter::DEFAULT_MODEL,
        }
    }
}
