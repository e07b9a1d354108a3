use serde::Serialize;

use crate::core::{ChatRole, CompletionRequest};

#[derive(Debug, Clone, Serialize)]
pub struct Request {
    pub model: String,

    pub messages: Vec<RequestMessage>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RequestMessage {
    pub role: ChatRole,
    pub content: String,
}

impl Request {
    pub fn from_completion(model: &str, request: CompletionRequest) -> Self {
        Self {
            model: model.to_string(),
            messages: request
                .messages
                .into_iter()
                .map(|m| RequestMessage {
                    role: m.role,
                    content: m.content,
                })
                .collect(),
            max_tokens: request.generation_config.max_tokens,
            temperature: request.generation_config.temperature,
        }
    }
}
