use async_trait::async_trait;
use ecotrack_core::{Classification, ClassifierError, ImagePayload, WasteClassifier};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Classifier that answers every request with a canned classification and
/// counts how often it was called
pub struct MockClassifier {
    response: Classification,
    calls: AtomicUsize,
}

impl MockClassifier {
    pub fn new(response: Classification) -> Self {
        Self {
            response,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WasteClassifier for MockClassifier {
    async fn classify(&self, _image: &ImagePayload) -> Result<Classification, ClassifierError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }
}

/// Classifier that simulates an unreachable service
pub struct FailingClassifier;

#[async_trait]
impl WasteClassifier for FailingClassifier {
    async fn classify(&self, _image: &ImagePayload) -> Result<Classification, ClassifierError> {
        Err(ClassifierError::ServiceUnavailable(
            "connection refused".to_string(),
        ))
    }
}
