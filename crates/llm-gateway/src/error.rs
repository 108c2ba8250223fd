use thiserror::Error;

/// Failures surfaced by the gateway. None of these are retried here;
/// the caller decides whether to try again.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GatewayError {
    /// Missing or empty API key; detected before any network activity
    #[error("no valid API key found; set your LLM API key in settings")]
    Configuration,

    /// Non-2xx HTTP response; the body is logged, never parsed
    #[error("API request failed: {reason} ({status})")]
    Transport { status: u16, reason: String },

    /// 2xx response whose envelope could not be interpreted
    #[error("invalid API response format: {0}")]
    Protocol(String),

    /// Transport-level I/O failure before a status was received
    #[error("request failed: {0}")]
    Request(String),
}
