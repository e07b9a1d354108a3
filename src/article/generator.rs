//! Drives one section from prompt to a length-bounded, complete text.
//!
//! The flow is `draft -> complete -> adjust -> (adjust -> complete)*`:
//!
//! 1. The draft call is tried up to `draft_retry.max_attempts` times and stops early
//!    once a reply reaches the minimum word count.
//! 2. The draft is finished with the [`SentenceCompleter`] and moved toward
//!    the target with one [`WordCountAdjuster`] call.
//! 3. While the text is outside the target range, another adjust-then-complete
//!    round runs, capped by `max_adjustment_rounds`.

use std::sync::Arc;

use crate::core::{
    ArticleError, CompletionRequest, ConvergenceGuard, GenerationConfig, LlmError, Message,
    TextGenerator,
};

use super::{
    adjuster::WordCountAdjuster,
    completer::SentenceCompleter,
    config::ArticleConfig,
    prompt::{self, CourseSectionTemplate, PromptTemplate},
    word_count::{WordCountSpec, WordRange, count_words},
};

/// Result of the bounded draft loop.
#[derive(Debug)]
pub enum DraftOutcome {
    /// Text from the first reply long enough, or the last successful reply
    Generated(String),
    /// No attempt produced any text
    Exhausted { attempts: u32, last_error: LlmError },
}

pub struct ArticleGenerator<G> {
    generator: G,
    template: Arc<dyn PromptTemplate>,
    config: ArticleConfig,
}

impl<G: TextGenerator> ArticleGenerator<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            template: Arc::new(CourseSectionTemplate),
            config: ArticleConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ArticleConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_template(mut self, template: Arc<dyn PromptTemplate>) -> Self {
        self.template = template;
        self
    }

    pub fn config(&self) -> &ArticleConfig {
        &self.config
    }

    /// Generate a section, parsing `word_count` first.
    pub async fn generate(
        &self,
        title: &str,
        word_count: &WordCountSpec,
        info: Option<&str>,
        history: &[Message],
        prefixes: &[String],
    ) -> Result<String, ArticleError> {
        let target = word_count.to_range()?;
        self.generate_within(title, target, info, history, prefixes)
            .await
    }

    #[tracing::instrument(
        name = "generate_section",
        skip(self, info, history, prefixes),
        fields(min = target.min, max = target.max, history = history.len()),
        err
    )]
    pub async fn generate_within(
        &self,
        title: &str,
        target: WordRange,
        info: Option<&str>,
        history: &[Message],
        prefixes: &[String],
    ) -> Result<String, ArticleError> {
        let prompt = prompt::with_prefixes(self.template.render(title, target, info), prefixes);

        let mut messages = history.to_vec();
        messages.push(Message::user(prompt));

        let text = match self.draft(messages, target).await {
            DraftOutcome::Generated(text) => text,
            DraftOutcome::Exhausted {
                attempts,
                last_error,
            } => {
                return Err(ArticleError::DraftExhausted {
                    attempts,
                    source: last_error,
                });
            }
        };

        let completer = SentenceCompleter::new(&self.generator, &self.config);
        let adjuster = WordCountAdjuster::new(&self.generator, &self.config);

        let text = completer.ensure_complete(text).await?;
        let mut text = adjuster.adjust(text, target).await?;

        let mut guard = ConvergenceGuard::new(self.config.max_adjustment_rounds);
        loop {
            let word_count = count_words(&text);
            if target.contains(word_count) {
                break;
            }
            if !guard.next_round() {
                return Err(ArticleError::ConvergenceExhausted {
                    rounds: guard.rounds_completed(),
                    word_count,
                    min: target.min,
                    max: target.max,
                });
            }

            tracing::debug!(round = guard.rounds_completed(), word_count, "Text outside target");
            text = adjuster.adjust(text, target).await?;
            text = completer.ensure_complete(text).await?;
        }

        tracing::debug!(word_count = count_words(&text), "Section converged");
        Ok(text)
    }

    /// Ask for the full section until a reply reaches `target.min` words or
    /// the attempt budget runs out. Failed and short replies both use up an
    /// attempt; the prompt is never changed between attempts.
    pub async fn draft(&self, messages: Vec<Message>, target: WordRange) -> DraftOutcome {
        let attempts = self.config.draft_retry.max_attempts;
        let generation_config =
            GenerationConfig::new(self.config.draft_max_tokens, self.config.temperature);

        let mut last_text: Option<String> = None;
        let mut last_error =
            LlmError::ProviderConfiguration("No draft attempts configured".to_string());

        for attempt in 0..attempts {
            let request = CompletionRequest::new(messages.clone(), generation_config);
            match self.generator.complete(request).await {
                Ok(text) => {
                    let word_count = count_words(&text);
                    if word_count >= target.min {
                        return DraftOutcome::Generated(text);
                    }
                    tracing::debug!(attempt, word_count, min = target.min, "Draft too short");
                    last_text = Some(text);
                }
                Err(e) => {
                    tracing::warn!(attempt, error = %e, "Draft call failed");
                    last_error = e;
                    if attempt + 1 < attempts {
                        tokio::time::sleep(self.config.draft_retry.delay_for(attempt)).await;
                    }
                }
            }
        }

        match last_text {
            Some(text) => DraftOutcome::Generated(text),
            None => DraftOutcome::Exhausted {
                attempts,
                last_error,
            },
        }
    }
}
