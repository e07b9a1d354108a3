use crate::core::{CompletionRequest, GenerationConfig, LlmError, TextGenerator};

use super::{
    config::ArticleConfig,
    prompt,
    word_count::{WordRange, count_words},
};

/// Moves a text toward a target word range with one summarize or expand call.
///
/// One call is not guaranteed to land inside the range; callers loop.
pub struct WordCountAdjuster<'a, G: ?Sized> {
    generator: &'a G,
    config: &'a ArticleConfig,
}

impl<'a, G> WordCountAdjuster<'a, G>
where
    G: TextGenerator + ?Sized,
{
    pub fn new(generator: &'a G, config: &'a ArticleConfig) -> Self {
        Self { generator, config }
    }

    /// Texts already inside `target` come back untouched without a call.
    /// A reply that moves away from the range (longer after summarizing,
    /// shorter after expanding) is discarded in favour of the input.
    #[tracing::instrument(
        name = "adjust_word_count",
        level = "debug",
        skip(self, text),
        fields(min = target.min, max = target.max),
        err
    )]
    pub async fn adjust(&self, text: String, target: WordRange) -> Result<String, LlmError> {
        let count = count_words(&text);
        if target.contains(count) {
            return Ok(text);
        }

        let (prompt, max_tokens) = if count > target.max {
            (
                prompt::summarize_prompt(&text, target.max),
                self.config.token_budget(target.max),
            )
        } else {
            let deficit = target.min - count;
            (
                prompt::expand_prompt(&text, deficit),
                self.config.token_budget(deficit),
            )
        };

        let request = CompletionRequest::prompt(
            prompt,
            GenerationConfig::new(max_tokens, self.config.temperature),
        );
        let reply = self
            .config
            .follow_up_retry
            .run("adjust_word_count", || self.generator.complete(request.clone()))
            .await?;
        let reply = reply.trim().to_string();
        let new_count = count_words(&reply);

        let wrong_direction = if count > target.max {
            new_count > count
        } else {
            new_count < count
        };
        if wrong_direction {
            tracing::warn!(
                before = count,
                after = new_count,
                "Adjustment moved away from the target range, keeping previous text"
            );
            return Ok(text);
        }

        tracing::debug!(before = count, after = new_count, "Adjusted word count");
        Ok(reply)
    }
}
