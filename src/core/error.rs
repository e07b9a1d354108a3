use std::time::Duration;

use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure of a single completion call.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Provider configuration error: {0}")]
    ProviderConfiguration(String),

    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: BoxError,
    },

    #[error("API error: {message}")]
    Api {
        message: String,
        status_code: Option<u16>,
        #[source]
        source: Option<BoxError>,
    },

    #[error("Rate limited: {message}")]
    RateLimited { message: String },

    #[error("Authentication error: {message}")]
    Authentication { message: String },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    #[error("Request timed out after {timeout:?}")]
    Timeout { timeout: Duration },
}

impl LlmError {
    /// Whether a fresh attempt (with the next credential) may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            LlmError::Network { .. } | LlmError::RateLimited { .. } | LlmError::Timeout { .. } => {
                true
            }
            // The next attempt is signed with a different key from the pool.
            LlmError::Authentication { .. } => true,
            LlmError::Api { status_code, .. } => status_code.is_none_or(|code| code >= 500),
            LlmError::Parse { .. } => true,
            LlmError::ProviderConfiguration(_) => false,
        }
    }
}

/// Failure of the section generation pipeline.
#[derive(Error, Debug)]
pub enum ArticleError {
    #[error("Invalid word count: {0}")]
    InvalidWordCount(String),

    #[error("Invalid section: {0}")]
    InvalidSection(String),

    #[error(transparent)]
    Generation(#[from] LlmError),

    #[error("Draft generation failed after {attempts} attempts: {source}")]
    DraftExhausted {
        attempts: u32,
        #[source]
        source: LlmError,
    },

    #[error(
        "Could not bring text into {min}..={max} words after {rounds} adjustment rounds (last count: {word_count})"
    )]
    ConvergenceExhausted {
        rounds: u32,
        word_count: usize,
        min: usize,
        max: usize,
    },

    #[error("Batch exceeded its time budget of {elapsed:?}")]
    Timeout { elapsed: Duration },
}

impl ArticleError {
    /// Malformed caller input, as opposed to a failure while generating.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ArticleError::InvalidWordCount(_) | ArticleError::InvalidSection(_)
        )
    }
}
