//! Shared HTTP client for all providers.

use std::time::Duration;

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use super::error::LlmError;

/// Configuration for HTTP client behaviour
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Deadline for a single round-trip, including reading the body
    pub timeout: Duration,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(120),
        }
    }
}

impl HttpClientConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Thin JSON-over-HTTP client. Every call is exactly one request.
pub struct HttpClient {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpClient {
    pub fn new(config: HttpClientConfig) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("coursewright/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                LlmError::ProviderConfiguration(format!("Failed to build reqwest client: {e}"))
            })?;

        Ok(Self {
            client,
            timeout: config.timeout,
        })
    }

    /// Make a POST request with a JSON body and decode the JSON reply.
    ///
    /// Status codes are mapped onto [`LlmError`] variants: 429 becomes
    /// `RateLimited`, 401/403 become `Authentication`, anything else
    /// unsuccessful becomes `Api`.
    #[tracing::instrument(
        name = "http_post_json",
        skip(self, headers, body),
        fields(url = %url),
        err
    )]
    pub async fn post_json<Req, Res>(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &Req,
    ) -> Result<Res, LlmError>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        let mut req_builder = self.client.post(url).json(body);
        for (name, value) in headers {
            req_builder = req_builder.header(name, value);
        }

        let res = req_builder.send().await.map_err(|e| self.transport_error(e))?;
        let status = res.status();

        if status.is_success() {
            debug!(status = %status, "HTTP request successful");

            let response_text = res.text().await.map_err(|e| self.transport_error(e))?;
            return serde_json::from_str(&response_text).map_err(|e| LlmError::Parse {
                message: "Failed to parse API response".to_string(),
                source: Some(Box::new(e)),
            });
        }

        let error_text = res
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        warn!(status = %status, "API returned error status");

        Err(match status {
            reqwest::StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimited {
                message: error_text,
            },
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                LlmError::Authentication {
                    message: error_text,
                }
            }
            _ => LlmError::Api {
                message: format!("API returned {status}: {error_text}"),
                status_code: Some(status.as_u16()),
                source: None,
            },
        })
    }

    fn transport_error(&self, e: reqwest::Error) -> LlmError {
        if e.is_timeout() {
            LlmError::Timeout {
                timeout: self.timeout,
            }
        } else {
            LlmError::Network {
                message: "Request failed".to_string(),
                source: Box::new(e),
            }
        }
    }
}
