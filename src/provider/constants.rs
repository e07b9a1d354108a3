pub mod openai {
    pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo-16k";
    pub const API_BASE: &str = "https://api.openai.com/v1";
    pub const CHAT_COMPLETIONS_ENDPOINT: &str = "/chat/completions";
    pub const API_KEY_ENV_PREFIX: &str = "OPENAI_API_KEY_";
}

pub mod openrouter {
    pub const DEFAULT_MODEL: &str = "openai/gpt-3.5-turbo-16k";
    pub const API_BASE: &str = "https://openrouter.ai/api/v1";
    pub const CHAT_COMPLETIONS_ENDPOINT: &str = "/chat/completions";
    pub const API_KEY_ENV_PREFIX: &str = "OPENROUTER_API_KEY_";
}
