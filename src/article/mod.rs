//! Section generation: prompt, draft, sentence completion and word-count convergence.

pub mod adjuster;
pub mod batch;
pub mod completer;
pub mod config;
pub mod generator;
pub mod prompt;
pub mod word_count;

pub use adjuster::WordCountAdjuster;
pub use batch::{BatchProcessor, BatchRequest, SectionRequest, SectionResult};
pub use completer::{SentenceCompleter, is_complete_sentence};
pub use config::ArticleConfig;
pub use generator::{ArticleGenerator, DraftOutcome};
pub use prompt::{CourseSectionTemplate, PromptTemplate};
pub use word_count::{WordCountSpec, WordRange, count_words};
