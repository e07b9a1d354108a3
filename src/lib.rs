//! # coursewright
//!
//! Turns a list of course sections (title, target word count, optional
//! context) into finished prose by prompting a chat-completion model and
//! post-processing each reply until it ends on a complete sentence and falls
//! inside the requested word range.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use coursewright::article::{ArticleGenerator, BatchProcessor, SectionRequest};
//! use coursewright::core::CredentialPool;
//! use coursewright::provider::{OpenAiClient, OpenAiConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let keys = Arc::new(CredentialPool::from_env("OPENAI_API_KEY_")?);
//!     let client = OpenAiClient::new(OpenAiConfig::new(keys))?;
//!     let batch = BatchProcessor::new(ArticleGenerator::new(client));
//!
//!     let sections = vec![SectionRequest::new("Intro to Rust", "150 to 200")];
//!     for section in batch.process(&sections, &[], false).await? {
//!         println!("{} ({} words)\n{}", section.title, section.word_count, section.content);
//!     }
//!     Ok(())
//! }
//! ```

pub mod article;
pub mod chat;
pub mod config;
pub mod core;
pub mod observability;
pub mod provider;
pub mod server;

pub use article::{ArticleGenerator, BatchProcessor, SectionRequest, SectionResult};
pub use crate::core::{ArticleError, ChatRole, CredentialPool, LlmError, Message, TextGenerator};
pub use provider::Provider;
