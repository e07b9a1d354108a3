//! Process configuration read from the environment.

use std::str::FromStr;
use std::time::Duration;

use crate::article::ArticleConfig;
use crate::core::{HttpClientConfig, LlmError};
use crate::provider::Provider;

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct LlmSettings {
    pub provider: Provider,
    pub model: String,
    /// Overrides the provider's default API base when set
    pub base_url: Option<String>,
    pub call_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub article: ArticleConfig,
}

impl Settings {
    pub fn from_env() -> Result<Self, LlmError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from an arbitrary variable source; unset keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LlmError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let provider = match lookup("LLM_PROVIDER") {
            Some(value) => Provider::from_str(&value).map_err(LlmError::ProviderConfiguration)?,
            None => Provider::OpenAI,
        };

        let mut article = ArticleConfig::default();
        if let Some(attempts) = parse_var(&lookup, "ARTICLE_DRAFT_ATTEMPTS")? {
            article = article.with_draft_attempts(attempts);
        }
        if let Some(temperature) = parse_var(&lookup, "LLM_TEMPERATURE")? {
            article = article.with_temperature(temperature);
        }
        if let Some(rounds) = parse_var(&lookup, "ARTICLE_MAX_ADJUSTMENT_ROUNDS")? {
            article = article.with_max_adjustment_rounds(rounds);
        }
        if let Some(secs) = parse_var(&lookup, "ARTICLE_REQUEST_TIMEOUT_SECS")? {
            article = article.with_request_timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            server: ServerSettings {
                host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                port: parse_var(&lookup, "SERVER_PORT")?.unwrap_or(8000),
            },
            llm: LlmSettings {
                provider,
                model: lookup("OPENAI_MODEL")
                    .unwrap_or_else(|| provider.default_model().to_string()),
                base_url: lookup("OPENAI_BASE_URL"),
                call_timeout: Duration::from_secs(
                    parse_var(&lookup, "LLM_CALL_TIMEOUT_SECS")?.unwrap_or(120),
                ),
            },
            article,
        })
    }

    pub fn http_config(&self) -> HttpClientConfig {
        HttpClientConfig::default().with_timeout(self.llm.call_timeout)
    }
}

fn parse_var<F, T>(lookup: &F, name: &str) -> Result<Option<T>, LlmError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(name)
        .map(|raw| {
            raw.trim().parse::<T>().map_err(|_| {
                LlmError::ProviderConfiguration(format!("Invalid value for {name}: {raw:?}"))
            })
        })
        .transpose()
}
