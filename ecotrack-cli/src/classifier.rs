use async_trait::async_trait;
use ecotrack_core::{Classification, ClassifierError, ImagePayload, WasteClassifier};

/// Stand-in for the remote image-classification service during local runs:
/// answers every request with a fixed classification
pub struct StaticClassifier {
    response: Classification,
}

impl StaticClassifier {
    pub fn new(response: Classification) -> Self {
        Self { response }
    }
}

#[async_trait]
impl WasteClassifier for StaticClassifier {
    async fn classify(&self, _image: &ImagePayload) -> Result<Classification, ClassifierError> {
        Ok(self.response.clone())
    }
}

/// Simulates an unreachable classification service, for exercising the
/// session's fallback path
pub struct OfflineClassifier;

#[async_trait]
impl WasteClassifier for OfflineClassifier {
    async fn classify(&self, _image: &ImagePayload) -> Result<Classification, ClassifierError> {
        Err(ClassifierError::ServiceUnavailable(
            "simulated outage".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_classifier_echoes_response() {
        let classifier = StaticClassifier::new(Classification::new("Glass Jar", true, 15));

        let result = classifier
            .classify(&ImagePayload::new(vec![0x01]))
            .await
            .unwrap();

        assert_eq!(result.material, "Glass Jar");
        assert_eq!(result.points_reward, 15);
    }

    #[tokio::test]
    async fn test_offline_classifier_always_fails() {
        let result = OfflineClassifier
            .classify(&ImagePayload::new(vec![]))
            .await;

        assert!(result.is_err());
    }
}
