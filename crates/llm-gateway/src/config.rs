//! Gateway configuration
//!
//! Configuration is built once and injected into the gateway constructor;
//! there is no ambient module state. Updates go through an explicit
//! save/reload cycle (see the `settings` module).

use serde::{Deserialize, Serialize};

pub const OPENROUTER_CHAT_COMPLETIONS: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const OPENROUTER_COMPLETIONS: &str = "https://openrouter.ai/api/v1/completions";
pub const OPENAI_CHAT_COMPLETIONS: &str = "https://api.openai.com/v1/chat/completions";
pub const OPENAI_COMPLETIONS: &str = "https://api.openai.com/v1/completions";

/// Endpoints the settings surface offers
pub const KNOWN_ENDPOINTS: &[&str] = &[
    OPENAI_CHAT_COMPLETIONS,
    OPENAI_COMPLETIONS,
    OPENROUTER_CHAT_COMPLETIONS,
    OPENROUTER_COMPLETIONS,
];

pub const DEFAULT_MODEL: &str = "mistralai/mistral-small-3.1-24b-instruct:free";

/// Model ids the settings surface offers
pub const KNOWN_MODELS: &[&str] = &[
    // Free models
    DEFAULT_MODEL,
    "open-r1/olympiccoder-7b:free",
    "google/gemini-2.5-pro-exp-03-25:free",
    "qwen/qwen2.5-vl-3b-instruct:free",
    // Premium models
    "anthropic/claude-3-opus-20240229",
    "anthropic/claude-3-sonnet-20240229",
    "anthropic/claude-3-haiku-20240307",
    // OpenAI models
    "gpt-3.5-turbo",
    "gpt-4",
    "gpt-4o",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    OpenRouter,
    OpenAi,
}

impl Provider {
    pub fn default_endpoint(&self) -> &'static str {
        match self {
            Provider::OpenRouter => OPENROUTER_CHAT_COMPLETIONS,
            Provider::OpenAi => OPENAI_CHAT_COMPLETIONS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmConfig {
    pub api_key: String,
    pub endpoint: String,
    pub model: String,
    pub provider: Provider,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: OPENROUTER_CHAT_COMPLETIONS.to_string(),
            model: DEFAULT_MODEL.to_string(),
            provider: Provider::OpenRouter,
        }
    }
}

impl LlmConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}
