use crate::core::{CompletionRequest, GenerationConfig, LlmError, TextGenerator};

use super::{config::ArticleConfig, prompt};

/// True when the last non-whitespace character is `.`, `!` or `?`.
pub fn is_complete_sentence(text: &str) -> bool {
    text.trim_end().ends_with(['.', '!', '?'])
}

/// Makes sure a text ends on a finished sentence.
pub struct SentenceCompleter<'a, G: ?Sized> {
    generator: &'a G,
    config: &'a ArticleConfig,
}

impl<'a, G> SentenceCompleter<'a, G>
where
    G: TextGenerator + ?Sized,
{
    pub fn new(generator: &'a G, config: &'a ArticleConfig) -> Self {
        Self { generator, config }
    }

    /// Return `text` unchanged when complete; otherwise ask the model for a
    /// short finishing clause and append it after a single space.
    ///
    /// A failing completion call is returned to the caller once the
    /// follow-up retry budget is spent.
    #[tracing::instrument(name = "complete_sentence", level = "debug", skip_all, err)]
    pub async fn ensure_complete(&self, text: String) -> Result<String, LlmError> {
        if is_complete_sentence(&text) {
            return Ok(text);
        }

        let request = CompletionRequest::prompt(
            prompt::completion_prompt(&text),
            GenerationConfig::new(self.config.completion_max_tokens, self.config.temperature),
        );
        let ending = self
            .config
            .follow_up_retry
            .run("complete_sentence", || {
                self.generator.complete(request.clone())
            })
            .await?;

        tracing::debug!(appended_words = ending.split_whitespace().count(), "Appended ending");
        Ok(format!("{} {}", text.trim_end(), ending.trim()))
    }
}
