use std::time::Duration;

use crate::core::RetryPolicy;

/// Knobs for the draft, completion and adjustment calls
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleConfig {
    /// Draft attempt budget and the backoff between failed draft calls (default: 3 attempts)
    pub draft_retry: RetryPolicy,
    /// Token budget for the draft call (default: 15000)
    pub draft_max_tokens: u32,
    /// Token budget for the sentence completion call (default: 50)
    pub completion_max_tokens: u32,
    /// Token headroom per requested word for summarize/expand calls (default: 5)
    pub tokens_per_word: u32,
    /// Adjust-and-complete rounds after the first adjustment (default: 8)
    pub max_adjustment_rounds: u32,
    /// Sampling temperature for every call (default: 0.6)
    pub temperature: f32,
    /// Retry applied to completion and adjustment calls
    pub follow_up_retry: RetryPolicy,
    /// Deadline for a whole batch (default: 10 minutes)
    pub request_timeout: Duration,
}

impl Default for ArticleConfig {
    fn default() -> Self {
        Self {
            draft_retry: RetryPolicy::default(),
            draft_max_tokens: 15000,
            completion_max_tokens: 50,
            tokens_per_word: 5,
            max_adjustment_rounds: 8,
            temperature: 0.6,
            follow_up_retry: RetryPolicy::default(),
            request_timeout: Duration::from_secs(600),
        }
    }
}

impl ArticleConfig {
    pub fn with_draft_attempts(mut self, attempts: u32) -> Self {
        self.draft_retry.max_attempts = attempts;
        self
    }

    pub fn with_draft_retry(mut self, policy: RetryPolicy) -> Self {
        self.draft_retry = policy;
        self
    }

    pub fn with_max_adjustment_rounds(mut self, rounds: u32) -> Self {
        self.max_adjustment_rounds = rounds;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_follow_up_retry(mut self, policy: RetryPolicy) -> Self {
        self.follow_up_retry = policy;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Token budget for a reply of roughly `words` words.
    pub(crate) fn token_budget(&self, words: usize) -> u32 {
        u32::try_from(words)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.tokens_per_word)
            .max(1)
    }
}
