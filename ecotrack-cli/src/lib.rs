pub mod classifier;
pub mod error;

pub use classifier::{OfflineClassifier, StaticClassifier};
pub use error::{CliError, Result};
