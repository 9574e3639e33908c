pub mod activity;
pub mod catalog;
pub mod emission;
pub mod footprint;
pub mod progress;
pub mod quiz;
pub mod timestamp;

pub use activity::{Activity, Classification, FuelType, Ownership, TransportMode, TripActivity};
pub use catalog::{Article, ContentLibrary, Quest, QuestCatalog, QuizKey, Video};
pub use emission::{EmissionError, EmissionResult};
pub use footprint::{FootprintLedger, FootprintState, FootprintStatus};
pub use progress::{ProgressError, ProgressState, ProgressTracker};
pub use quiz::{QuizError, QuizSession, QuizStep};
pub use timestamp::Timestamp;
