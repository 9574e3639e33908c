pub mod application;
pub mod domain;
pub mod scan;

pub use application::{
    ActivityRecord, EcoSession, SessionCommand, SessionConfig, SessionEvent, SessionSnapshot,
};
pub use domain::{
    Activity, Classification, ContentLibrary, EmissionError, EmissionResult, FootprintState,
    FootprintStatus, FuelType, Ownership, ProgressError, ProgressState, Quest, QuestCatalog,
    QuizError, QuizKey, QuizSession, TransportMode, TripActivity,
};
pub use scan::{ClassifierError, ImagePayload, WasteClassifier};
