use async_trait::async_trait;

use super::{error::LlmError, types::CompletionRequest};

/// A single round-trip to a text-completion model.
///
/// Implementations must not retry internally; retry policy belongs to callers.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError>;
}

#[async_trait]
impl<T> TextGenerator for std::sync::Arc<T>
where
    T: TextGenerator + ?Sized,
{
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError> {
        (**self).complete(request).await
    }
}
