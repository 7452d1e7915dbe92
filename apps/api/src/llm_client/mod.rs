/// Model Gateway — the single point of entry for all generative-model calls.
///
/// ARCHITECTURAL RULE: No other module may call the model backend directly.
/// Drafting, revision and translation all go through `ModelGateway::invoke`.
///
/// The gateway never returns an error value: backend failures come back as a
/// string starting with `ERROR_MARKER` so the session can store *something*
/// and the advisor can retry by hand.
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::inputs::Attachment;

pub mod gemini;
pub mod prompts;

pub use gemini::GeminiBackend;

/// Prefix of every failure string returned by the gateway.
pub const ERROR_MARKER: &str = "Error: ";

/// Returned without any network I/O when the session has no API key.
pub const MISSING_CREDENTIAL: &str =
    "Error: API key is missing. Start a session with a Google API key before generating.";

/// Label of the background-material block appended after the prompt.
const CONTEXT_LABEL: &str = "\n【参考文档/背景信息 (简历或素材表)】:\n";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// One ordered element of a generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    Text(String),
    Media { mime_type: String, data: Bytes },
}

impl From<&Attachment> for Part {
    fn from(a: &Attachment) -> Self {
        Part::Media {
            mime_type: a.mime_type.clone(),
            data: a.data.clone(),
        }
    }
}

/// The external generative-text service: ordered parts in, text out.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    async fn generate(&self, parts: &[Part]) -> Result<String, LlmError>;
}

/// Credential and model choice for one drafting session.
#[derive(Debug, Clone, Default)]
pub struct GatewaySettings {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
}

impl GatewaySettings {
    pub fn has_credential(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

#[derive(Clone)]
pub struct ModelGateway {
    settings: GatewaySettings,
    backend: Arc<dyn GenerativeBackend>,
}

impl ModelGateway {
    /// Builds a gateway backed by the Gemini REST API.
    pub fn new(settings: GatewaySettings) -> Self {
        let backend = GeminiBackend::new(
            settings.api_key.clone(),
            settings.model.clone(),
            settings.api_base.clone(),
        );
        Self::with_backend(settings, Arc::new(backend))
    }

    pub fn with_backend(settings: GatewaySettings, backend: Arc<dyn GenerativeBackend>) -> Self {
        Self { settings, backend }
    }

    pub fn has_credential(&self) -> bool {
        self.settings.has_credential()
    }

    pub fn model(&self) -> &str {
        &self.settings.model
    }

    /// Sends `prompt`, then the labelled `context` block (when non-empty), then
    /// `attachments` in order, and returns the model's text.
    pub async fn invoke(
        &self,
        prompt: &str,
        attachments: &[Attachment],
        context: Option<&str>,
    ) -> String {
        if !self.has_credential() {
            warn!("Model call skipped: no API key configured");
            return MISSING_CREDENTIAL.to_string();
        }

        let parts = assemble_parts(prompt, attachments, context);
        debug!(
            "Invoking model {} with {} parts (prompt {} chars)",
            self.settings.model,
            parts.len(),
            prompt.chars().count()
        );

        match self.backend.generate(&parts).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Model call failed: {e}");
                format!("{ERROR_MARKER}{e}")
            }
        }
    }
}

/// Builds the ordered payload for one call.
pub fn assemble_parts(prompt: &str, attachments: &[Attachment], context: Option<&str>) -> Vec<Part> {
    let mut parts = Vec::with_capacity(2 + attachments.len());
    parts.push(Part::Text(prompt.to_string()));
    if let Some(ctx) = context.filter(|c| !c.is_empty()) {
        parts.push(Part::Text(format!("{CONTEXT_LABEL}{ctx}")));
    }
    parts.extend(attachments.iter().map(Part::from));
    parts
}

/// True when `text` is a gateway failure rather than model output.
pub fn is_gateway_error(text: &str) -> bool {
    text.trim_start().starts_with(ERROR_MARKER)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;

    /// Records every request and answers from a queue of canned replies.
    #[derive(Default)]
    pub(crate) struct StubBackend {
        pub calls: Mutex<Vec<Vec<Part>>>,
        replies: Mutex<VecDeque<Result<String, LlmError>>>,
    }

    impl StubBackend {
        pub(crate) fn replying(replies: &[&str]) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                replies: Mutex::new(replies.iter().map(|r| Ok(r.to_string())).collect()),
            })
        }

        pub(crate) fn failing(error: LlmError) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                replies: Mutex::new(VecDeque::from([Err(error)])),
            })
        }

        pub(crate) fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        pub(crate) fn call(&self, index: usize) -> Vec<Part> {
            self.calls.lock().unwrap()[index].clone()
        }
    }

    #[async_trait]
    impl GenerativeBackend for StubBackend {
        async fn generate(&self, parts: &[Part]) -> Result<String, LlmError> {
            self.calls.lock().unwrap().push(parts.to_vec());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok("stub reply".to_string()))
        }
    }

    pub(crate) fn settings(api_key: &str) -> GatewaySettings {
        GatewaySettings {
            api_key: api_key.to_string(),
            model: "gemini-test".to_string(),
            api_base: "http://localhost".to_string(),
        }
    }

    pub(crate) fn gateway_with(backend: Arc<StubBackend>) -> ModelGateway {
        ModelGateway::with_backend(settings("AIzaTestKey"), backend)
    }

    #[tokio::test]
    async fn test_missing_credential_skips_backend() {
        let backend = StubBackend::replying(&["never"]);
        for key in ["", "   "] {
            let gateway = ModelGateway::with_backend(settings(key), backend.clone());
            let out = gateway.invoke("prompt", &[], Some("context")).await;
            assert_eq!(out, MISSING_CREDENTIAL);
        }
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_backend_error_becomes_marked_string() {
        let backend = StubBackend::failing(LlmError::Api {
            status: 429,
            message: "quota exceeded".to_string(),
        });
        let gateway = gateway_with(backend.clone());

        let out = gateway.invoke("prompt", &[], None).await;
        assert_eq!(out, "Error: API error (status 429): quota exceeded");
        assert!(is_gateway_error(&out));
        assert_eq!(backend.call_count(), 1);
    }

    #[tokio::test]
    async fn test_payload_order_prompt_context_attachments() {
        let backend = StubBackend::replying(&["ok"]);
        let gateway = gateway_with(backend.clone());
        let images = vec![
            Attachment::new("image/png", vec![1u8]),
            Attachment::new("image/jpeg", vec![2u8]),
        ];

        let out = gateway.invoke("write", &images, Some("曾任市场分析实习生")).await;
        assert_eq!(out, "ok");

        let parts = backend.call(0);
        assert_eq!(parts.len(), 4);
        assert_eq!(parts[0], Part::Text("write".to_string()));
        assert_eq!(
            parts[1],
            Part::Text("\n【参考文档/背景信息 (简历或素材表)】:\n曾任市场分析实习生".to_string())
        );
        assert_eq!(parts[2], Part::from(&images[0]));
        assert_eq!(parts[3], Part::from(&images[1]));
    }

    #[test]
    fn test_empty_context_is_not_sent() {
        let parts = assemble_parts("p", &[], Some(""));
        assert_eq!(parts, vec![Part::Text("p".to_string())]);
        let parts = assemble_parts("p", &[], None);
        assert_eq!(parts.len(), 1);
    }

    #[test]
    fn test_is_gateway_error() {
        assert!(is_gateway_error(MISSING_CREDENTIAL));
        assert!(is_gateway_error("Error: HTTP error: timeout"));
        assert!(!is_gateway_error("我在大三时接触到机器学习"));
    }
}
