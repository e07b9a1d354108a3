use serde::{Deserialize, Serialize};

use crate::core::{ArticleError, Message, TextGenerator};

use super::{
    generator::ArticleGenerator,
    word_count::{WordCountSpec, WordRange, count_words},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionRequest {
    pub title: String,
    pub word_count: WordCountSpec,
    #[serde(default)]
    pub info: Option<String>,
}

impl SectionRequest {
    pub fn new(title: impl Into<String>, word_count: impl Into<WordCountSpec>) -> Self {
        Self {
            title: title.into(),
            word_count: word_count.into(),
            info: None,
        }
    }

    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.info = Some(info.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BatchRequest {
    pub sections: Vec<SectionRequest>,
    #[serde(default)]
    pub prefixes: Option<Vec<String>>,
    #[serde(default)]
    pub save_conversation_history: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionResult {
    pub title: String,
    pub content: String,
    pub word_count: usize,
}

/// Runs a list of sections through one [`ArticleGenerator`], in order.
pub struct BatchProcessor<G> {
    generator: ArticleGenerator<G>,
}

impl<G: TextGenerator> BatchProcessor<G> {
    pub fn new(generator: ArticleGenerator<G>) -> Self {
        Self { generator }
    }

    pub async fn process_batch(
        &self,
        request: &BatchRequest,
    ) -> Result<Vec<SectionResult>, ArticleError> {
        self.process(
            &request.sections,
            request.prefixes.as_deref().unwrap_or_default(),
            request.save_conversation_history.unwrap_or(false),
        )
        .await
    }

    /// Generate every section in input order.
    ///
    /// All sections are validated before the first call is made. With
    /// `keep_history`, each finished section is fed to the following ones as
    /// an assistant turn. The first failing section aborts the batch, and the
    /// whole batch is bounded by the configured request timeout.
    #[tracing::instrument(
        name = "process_batch",
        skip(self, sections, prefixes),
        fields(sections = sections.len(), prefixes = prefixes.len()),
        err
    )]
    pub async fn process(
        &self,
        sections: &[SectionRequest],
        prefixes: &[String],
        keep_history: bool,
    ) -> Result<Vec<SectionResult>, ArticleError> {
        let validated = sections
            .iter()
            .map(validate_section)
            .collect::<Result<Vec<_>, _>>()?;

        let timeout = self.generator.config().request_timeout;
        tokio::time::timeout(timeout, self.run(validated, prefixes, keep_history))
            .await
            .map_err(|_| ArticleError::Timeout { elapsed: timeout })?
    }

    async fn run(
        &self,
        sections: Vec<(&str, WordRange, Option<&str>)>,
        prefixes: &[String],
        keep_history: bool,
    ) -> Result<Vec<SectionResult>, ArticleError> {
        let mut history: Vec<Message> = Vec::new();
        let mut results = Vec::with_capacity(sections.len());

        for (title, target, info) in sections {
            let content = self
                .generator
                .generate_within(title, target, info, &history, prefixes)
                .await?;
            let word_count = count_words(&content);
            tracing::info!(title, word_count, "Section generated");

            if keep_history {
                history.push(Message::assistant(content.clone()));
            }

            results.push(SectionResult {
                title: title.to_string(),
                content,
                word_count,
            });
        }

        Ok(results)
    }
}

fn validate_section(
    section: &SectionRequest,
) -> Result<(&str, WordRange, Option<&str>), ArticleError> {
    let title = section.title.trim();
    if title.is_empty() {
        return Err(ArticleError::InvalidSection(
            "section title must not be empty".to_string(),
        ));
    }

    let target = section.word_count.to_range()?;
    Ok((title, target, section.info.as_deref()))
}
