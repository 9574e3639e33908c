mod mock_classifier;

pub use mock_classifier::{FailingClassifier, MockClassifier};
