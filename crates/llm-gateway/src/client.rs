//! The gateway itself: prompt construction, precondition checks, and
//! envelope interpretation. One outstanding request per call, no retries.

use serde::Deserialize;
use tracing::{debug, error};

use crate::config::{LlmConfig, Provider};
use crate::error::GatewayError;
use crate::transport::{ChatMessage, ChatRequest, ChatTransport, HttpTransport, RawResponse};

/// Fixed system instruction for code generation
pub const GENERATION_SYSTEM_PROMPT: &str = "You are an expert UI developer. Generate a complete \
signup page using only a single HTML file. All CSS and JavaScript must be written inline, inside \
<style> and <script> tags. Your response should include: - Clean, modern, and accessible design \
- HTML form with Full Name, Email, Password, Confirm Password - Inline CSS for styling - Inline \
JavaScript for basic form validation. IMPORTANT: Provide improvement suggestions directly as \
**code comments** inside the HTML, CSS, or JS. These comments should guide the user on how to \
further enhance visuals, UX, accessibility, responsiveness, interactivity, or security. Avoid \
writing a separate explanation section at the end. All suggestions must be embedded as comments \
inside the code. Do NOT include any triple backticks in your response. Just return the raw HTML \
content starting with <!DOCTYPE html>.";

const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 2000;
const TEST_MAX_TOKENS: u32 = 5;

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatCompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionChoice {
    message: ChatCompletionMessage,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionMessage {
    content: Option<String>,
}

/// Outcome of a configuration-validation round trip
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionStatus {
    pub ok: bool,
    pub detail: String,
}

/// Boundary object wrapping the remote chat-completions API.
/// Configuration is injected; swap it with `reload`.
pub struct LlmGateway<T: ChatTransport = HttpTransport> {
    config: LlmConfig,
    transport: T,
}

impl LlmGateway<HttpTransport> {
    pub fn new(config: LlmConfig) -> Result<Self, GatewayError> {
        Ok(Self {
            config,
            transport: HttpTransport::new()?,
        })
    }
}

impl<T: ChatTransport> LlmGateway<T> {
    pub fn with_transport(config: LlmConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &LlmConfig {
        &self.config
    }

    /// Replace the configuration after an explicit settings save
    pub fn reload(&mut self, config: LlmConfig) {
        self.config = config;
    }

    /// Generate markup from a prompt; returns the first choice's content
    pub async fn generate_code(&self, prompt: &str) -> Result<String, GatewayError> {
        debug!(prompt_len = prompt.len(), model = %self.config.model, "generating code");
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage::system(GENERATION_SYSTEM_PROMPT),
                ChatMessage::user(prompt),
            ],
            temperature: Some(TEMPERATURE),
            max_tokens: MAX_TOKENS,
        };
        self.dispatch(request, &[]).await
    }

    /// Analyze pasted code with a caller-chosen focus area
    pub async fn analyze_code(&self, code: &str, focus: &str) -> Result<String, GatewayError> {
        debug!(code_len = code.len(), focus, "analyzing code");
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage::system(format!(
                    "You are an expert UI developer. Analyze the provided code and suggest \
                     improvements focusing on {focus}. Include specific code examples for \
                     improvements."
                )),
                ChatMessage::user(format!(
                    "Here's the code to analyze:\n\n{code}\n\nFocus on: {focus}"
                )),
            ],
            temperature: Some(TEMPERATURE),
            max_tokens: MAX_TOKENS,
        };
        self.dispatch(request, &[]).await
    }

    /// Minimal low-token round trip for configuration validation; never
    /// used on the generation path
    pub async fn test_connection(&self) -> ConnectionStatus {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage::user("Test connection")],
            temperature: None,
            max_tokens: TEST_MAX_TOKENS,
        };
        let extra_headers: Vec<(&'static str, String)> = match self.config.provider {
            Provider::OpenRouter => vec![("X-Title", "UI Code Assistant".to_string())],
            Provider::OpenAi => Vec::new(),
        };
        match self.dispatch(request, &extra_headers).await {
            Ok(_) => ConnectionStatus {
                ok: true,
                detail: "Connection successful!".to_string(),
            },
            Err(err) => ConnectionStatus {
                ok: false,
                detail: format!("Connection failed: {err}"),
            },
        }
    }

    async fn dispatch(
        &self,
        request: ChatRequest,
        extra_headers: &[(&'static str, String)],
    ) -> Result<String, GatewayError> {
        if !self.config.has_api_key() {
            return Err(GatewayError::Configuration);
        }

        let raw = self
            .transport
            .send(
                &self.config.endpoint,
                &self.config.api_key,
                extra_headers,
                &request,
            )
            .await?;

        Self::extract_content(raw)
    }

    fn extract_content(raw: RawResponse) -> Result<String, GatewayError> {
        if !raw.is_success() {
            error!(status = raw.status, body = %raw.body, "API response error");
            return Err(GatewayError::Transport {
                status: raw.status,
                reason: raw.reason,
            });
        }

        let parsed: ChatCompletionResponse =
            serde_json::from_str(&raw.body).map_err(|e| GatewayError::Protocol(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| GatewayError::Protocol("response contained no choices".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Counting transport that replays a canned response
    struct MockTransport {
        calls: AtomicUsize,
        response: RawResponse,
        last_request: Mutex<Option<ChatRequest>>,
    }

    impl MockTransport {
        fn replying(status: u16, reason: &str, body: &str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                response: RawResponse {
                    status,
                    reason: reason.to_string(),
                    body: body.to_string(),
                },
                last_request: Mutex::new(None),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ChatTransport for MockTransport {
        async fn send(
            &self,
            _endpoint: &str,
            _api_key: &str,
            _extra_headers: &[(&'static str, String)],
            request: &ChatRequest,
        ) -> Result<RawResponse, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock().unwrap() = Some(request.clone());
            Ok(self.response.clone())
        }
    }

    const OK_ENVELOPE: &str =
        r#"{"choices": [{"message": {"role": "assistant", "content": "<div>ok</div>"}}]}"#;

    fn configured() -> LlmConfig {
        LlmConfig::new("sk-test")
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_without_network_call() {
        let transport = MockTransport::replying(200, "OK", OK_ENVELOPE);
        let gateway = LlmGateway::with_transport(LlmConfig::default(), transport);

        let err = gateway.generate_code("a login page").await.unwrap_err();
        assert_eq!(err, GatewayError::Configuration);
        assert_eq!(gateway.transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_success_returns_first_choice_content() {
        let transport = MockTransport::replying(200, "OK", OK_ENVELOPE);
        let gateway = LlmGateway::with_transport(configured(), transport);

        let content = gateway.generate_code("a login page").await.unwrap();
        assert_eq!(content, "<div>ok</div>");
        assert_eq!(gateway.transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_generation_request_shape() {
        let transport = MockTransport::replying(200, "OK", OK_ENVELOPE);
        let gateway = LlmGateway::with_transport(configured(), transport);
        gateway.generate_code("a login page").await.unwrap();

        let request = gateway.transport.last_request.lock().unwrap().clone().unwrap();
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, "system");
        assert_eq!(request.messages[1].role, "user");
        assert_eq!(request.messages[1].content, "a login page");
        assert_eq!(request.temperature, Some(0.7));
        assert_eq!(request.max_tokens, 2000);
    }

    #[tokio::test]
    async fn test_analyze_embeds_focus_area() {
        let transport = MockTransport::replying(200, "OK", OK_ENVELOPE);
        let gateway = LlmGateway::with_transport(configured(), transport);
        gateway.analyze_code("<div></div>", "accessibility").await.unwrap();

        let request = gateway.transport.last_request.lock().unwrap().clone().unwrap();
        assert!(request.messages[0].content.contains("accessibility"));
        assert!(request.messages[1].content.contains("<div></div>"));
    }

    #[tokio::test]
    async fn test_http_error_maps_to_transport_error() {
        let transport = MockTransport::replying(500, "Internal Server Error", "boom");
        let gateway = LlmGateway::with_transport(configured(), transport);

        let err = gateway.generate_code("x").await.unwrap_err();
        assert_eq!(
            err,
            GatewayError::Transport {
                status: 500,
                reason: "Internal Server Error".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_empty_choices_is_a_protocol_error() {
        let transport = MockTransport::replying(200, "OK", r#"{"choices": []}"#);
        let gateway = LlmGateway::with_transport(configured(), transport);

        let err = gateway.generate_code("x").await.unwrap_err();
        assert!(matches!(err, GatewayError::Protocol(_)));
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_protocol_error() {
        let transport = MockTransport::replying(200, "OK", "not json");
        let gateway = LlmGateway::with_transport(configured(), transport);

        let err = gateway.generate_code("x").await.unwrap_err();
        assert!(matches!(err, GatewayError::Protocol(_)));
    }

    #[tokio::test]
    async fn test_connection_check_uses_minimal_request() {
        let transport = MockTransport::replying(200, "OK", OK_ENVELOPE);
        let gateway = LlmGateway::with_transport(configured(), transport);

        let status = gateway.test_connection().await;
        assert!(status.ok);

        let request = gateway.transport.last_request.lock().unwrap().clone().unwrap();
        assert_eq!(request.max_tokens, 5);
        assert_eq!(request.temperature, None);
        assert_eq!(request.messages[0].content, "Test connection");
    }

    #[tokio::test]
    async fn test_connection_check_reports_failures() {
        let transport = MockTransport::replying(401, "Unauthorized", "{}");
        let gateway = LlmGateway::with_transport(configured(), transport);

        let status = gateway.test_connection().await;
        assert!(!status.ok);
        assert!(status.detail.contains("401"));
    }

    #[tokio::test]
    async fn test_reload_swaps_configuration() {
        let transport = MockTransport::replying(200, "OK", OK_ENVELOPE);
        let mut gateway = LlmGateway::with_transport(LlmConfig::default(), transport);
        assert!(gateway.generate_code("x").await.is_err());

        gateway.reload(configured());
        assert!(gateway.generate_code("x").await.is_ok());
    }
}
