mod classifier;

pub use classifier::{ClassifierError, ImagePayload, WasteClassifier};
