use crate::domain::Classification;
use async_trait::async_trait;

/// Opaque captured image handed to the classification service
///
/// The engine never inspects the bytes; capture and encoding belong to the
/// presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    bytes: Vec<u8>,
    mime_type: String,
}

impl ImagePayload {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            mime_type: "image/jpeg".to_string(),
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Failures of the external classification call
///
/// Never escapes the session's scan path: the orchestrator substitutes the
/// documented zero-reward fallback instead.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("classification service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("malformed classification response: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

/// External image-classification service (allows mocking in tests)
///
/// One invocation maps to one outstanding request; callers must not issue
/// concurrent duplicate requests for the same capture.
#[async_trait]
pub trait WasteClassifier: Send + Sync {
    async fn classify(&self, image: &ImagePayload) -> Result<Classification, ClassifierError>;
}
