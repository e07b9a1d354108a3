use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// One turn of a conversation sent to the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: ChatRole,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Configuration for text generation parameters
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GenerationConfig {
    /// Maximum number of tokens to generate
    pub max_tokens: Option<u32>,

    /// Sampling temperature
    pub temperature: Option<f32>,
}

impl GenerationConfig {
    pub fn new(max_tokens: u32, temperature: f32) -> Self {
        Self {
            max_tokens: Some(max_tokens),
            temperature: Some(temperature),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub messages: Vec<Message>,
    pub generation_config: GenerationConfig,
}

impl CompletionRequest {
    pub fn new(messages: Vec<Message>, generation_config: GenerationConfig) -> Self {
        Self {
            messages,
            generation_config,
        }
    }

    /// A request made of a single user prompt.
    pub fn prompt(prompt: impl Into<String>, generation_config: GenerationConfig) -> Self {
        Self::new(vec![Message::user(prompt)], generation_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_serialize_lowercase() {
        let message = Message::assistant("Earlier section.");
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["role"], "assistant");
        assert_eq!(value["content"], "Earlier section.");
    }

    #[test]
    fn test_prompt_request_has_single_user_turn() {
        let request = CompletionRequest::prompt("Write.", GenerationConfig::new(50, 0.6));
        assert_eq!(request.messages, vec![Message::user("Write.")]);
        assert_eq!(request.generation_config.max_tokens, Some(50));
    }
}
