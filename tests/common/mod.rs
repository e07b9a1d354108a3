#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use coursewright::article::ArticleConfig;
use coursewright::core::{CompletionRequest, LlmError, RetryPolicy, TextGenerator};

type Responder = Box<dyn Fn(&CompletionRequest) -> Result<String, LlmError> + Send + Sync>;

/// Replays queued replies, then falls back to a responder, recording every request.
pub struct ScriptedGenerator {
    script: Mutex<VecDeque<Result<String, LlmError>>>,
    fallback: Option<Responder>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedGenerator {
    pub fn new(script: Vec<Result<String, LlmError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            fallback: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_fallback<F>(mut self, fallback: F) -> Self
    where
        F: Fn(&CompletionRequest) -> Result<String, LlmError> + Send + Sync + 'static,
    {
        self.fallback = Some(Box::new(fallback));
        self
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// The prompt text of the last message of the `index`-th request.
    pub fn prompt(&self, index: usize) -> String {
        let requests = self.requests.lock().unwrap();
        requests[index].messages.last().unwrap().content.clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError> {
        self.requests.lock().unwrap().push(request.clone());

        if let Some(reply) = self.script.lock().unwrap().pop_front() {
            return reply;
        }

        match &self.fallback {
            Some(fallback) => fallback(&request),
            None => Err(LlmError::Parse {
                message: "script exhausted".to_string(),
                source: None,
            }),
        }
    }
}

/// `n` whitespace-separated words ending in a full stop.
pub fn words(n: usize) -> String {
    let mut text = (0..n)
        .map(|i| format!("word{i}"))
        .collect::<Vec<_>>()
        .join(" ");
    text.push('.');
    text
}

pub fn rate_limited() -> LlmError {
    LlmError::RateLimited {
        message: "Rate limit reached".to_string(),
    }
}

/// Default knobs with millisecond backoff so retries do not slow tests down.
pub fn fast_config() -> ArticleConfig {
    let fast = RetryPolicy::new(3, Duration::from_millis(1), Duration::from_millis(2));
    ArticleConfig::default()
        .with_draft_retry(fast.clone())
        .with_follow_up_retry(fast)
}
