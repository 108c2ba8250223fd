//! Transport seam between the gateway and the wire
//!
//! The gateway builds `ChatRequest` payloads and interprets `RawResponse`s;
//! the transport only moves bytes. Tests inject a counting mock here.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::GatewayError;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Chat-completions request body
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    pub max_tokens: u32,
}

/// Raw HTTP outcome; status interpretation happens in the gateway
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub reason: String,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Issue a single POST; one attempt, no retries at this layer
    async fn send(
        &self,
        endpoint: &str,
        api_key: &str,
        extra_headers: &[(&'static str, String)],
        request: &ChatRequest,
    ) -> Result<RawResponse, GatewayError>;
}

/// Production transport over reqwest
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .user_agent("ui-assist/llm-gateway")
            .build()
            .map_err(|e| GatewayError::Request(e.to_string()))?;
        Ok(Self { http })
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn send(
        &self,
        endpoint: &str,
        api_key: &str,
        extra_headers: &[(&'static str, String)],
        request: &ChatRequest,
    ) -> Result<RawResponse, GatewayError> {
        let mut builder = self.http.post(endpoint).bearer_auth(api_key).json(request);
        for (name, value) in extra_headers {
            builder = builder.header(*name, value);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| GatewayError::Request(e.to_string()))?;

        let status = response.status();
        let reason = status
            .canonical_reason()
            .unwrap_or("Unknown Status")
            .to_string();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Request(e.to_string()))?;

        Ok(RawResponse {
            status: status.as_u16(),
            reason,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_to_wire_shape() {
        let request = ChatRequest {
            model: "gpt-4o".to_string(),
            messages: vec![ChatMessage::system("sys"), ChatMessage::user("hi")],
            temperature: Some(0.7),
            max_tokens: 2000,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4o");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "hi");
        assert_eq!(json["max_tokens"], 2000);
    }

    #[test]
    fn test_temperature_is_omitted_when_unset() {
        let request = ChatRequest {
            model: "m".to_string(),
            messages: vec![ChatMessage::user("Test connection")],
            temperature: None,
            max_tokens: 5,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("temperature"));
    }

    #[test]
    fn test_success_status_range() {
        let ok = RawResponse {
            status: 204,
            reason: "No Content".to_string(),
            body: String::new(),
        };
        assert!(ok.is_success());
        let not_ok = RawResponse {
            status: 404,
            reason: "Not Found".to_string(),
            body: String::new(),
        };
        assert!(!not_ok.is_success());
    }
}
