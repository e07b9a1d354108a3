//! OpenAI-style chat completions: the wire types and a client generic over the provider.

pub(crate) mod client;
pub(crate) mod request;
pub(crate) mod response;

pub use client::{ChatCompletionsClient, ChatProviderConfig};
