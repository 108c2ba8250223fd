//! Chat-completions gateway for the UI assistant
//!
//! Wraps an OpenAI-compatible chat-completions endpoint (OpenRouter by
//! default) behind a small typed surface: code generation, code analysis,
//! and a low-cost connection check. Persistence of the user's provider
//! settings lives in [`settings`].

pub mod client;
pub mod config;
pub mod error;
pub mod settings;
pub mod transport;

pub use client::{ConnectionStatus, LlmGateway, GENERATION_SYSTEM_PROMPT};
pub use config::{LlmConfig, Provider, DEFAULT_MODEL, KNOWN_ENDPOINTS, KNOWN_MODELS};
pub use error::GatewayError;
pub use settings::{AccessibilityPrefs, Settings, SettingsError, SettingsStore};
pub use transport::{ChatMessage, ChatRequest, ChatTransport, HttpTransport, RawResponse};
