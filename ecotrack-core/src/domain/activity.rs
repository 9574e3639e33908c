use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Means of transport for a logged trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    Car,
    Bus,
    Train,
    Bike,
    Walk,
}

impl TransportMode {
    /// Motorized modes carry an ownership distinction; bike/walk do not
    pub fn is_motorized(&self) -> bool {
        !matches!(self, TransportMode::Bike | TransportMode::Walk)
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportMode::Car => write!(f, "car"),
            TransportMode::Bus => write!(f, "bus"),
            TransportMode::Train => write!(f, "train"),
            TransportMode::Bike => write!(f, "bike"),
            TransportMode::Walk => write!(f, "walk"),
        }
    }
}

/// Whether a motorized trip was made in a private or a shared vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Ownership {
    Private,
    Shared,
}

impl Default for Ownership {
    fn default() -> Self {
        Ownership::Private
    }
}

impl fmt::Display for Ownership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ownership::Private => write!(f, "private"),
            Ownership::Shared => write!(f, "shared"),
        }
    }
}

/// Fuel type of a car trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FuelType {
    Petrol,
    Diesel,
    Electric,
    Hybrid,
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FuelType::Petrol => write!(f, "petrol"),
            FuelType::Diesel => write!(f, "diesel"),
            FuelType::Electric => write!(f, "electric"),
            FuelType::Hybrid => write!(f, "hybrid"),
        }
    }
}

/// A single logged trip
///
/// Ownership only affects car trips and fuel is only meaningful for cars;
/// both are accepted for other modes and ignored by the emission model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TripActivity {
    /// Distance travelled in kilometres (must be positive and finite)
    pub distance_km: f64,

    /// Means of transport
    pub mode: TransportMode,

    /// Private or shared vehicle
    #[serde(default)]
    pub ownership: Ownership,

    /// Fuel type (car trips only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel: Option<FuelType>,
}

impl TripActivity {
    /// Create a trip with default ownership (private) and no fuel type
    pub fn new(distance_km: f64, mode: TransportMode) -> Self {
        Self {
            distance_km,
            mode,
            ownership: Ownership::default(),
            fuel: None,
        }
    }

    pub fn with_ownership(mut self, ownership: Ownership) -> Self {
        self.ownership = ownership;
        self
    }

    pub fn with_fuel(mut self, fuel: FuelType) -> Self {
        self.fuel = Some(fuel);
        self
    }
}

/// Result of classifying a scanned waste item
///
/// Supplied verbatim by the external classification service and trusted as-is;
/// `instructions` is presentation-only and never enters any computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Classification {
    /// Material label (e.g., "Plastic Bottle")
    pub material: String,

    /// Whether the item can be recycled
    pub is_recyclable: bool,

    /// Short disposal instructions for display
    pub instructions: String,

    /// Points the service decided to award for this scan
    pub points_reward: u32,
}

impl Classification {
    pub fn new(material: impl Into<String>, is_recyclable: bool, points_reward: u32) -> Self {
        Self {
            material: material.into(),
            is_recyclable,
            instructions: String::new(),
            points_reward,
        }
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    /// The documented fallback for a failed or unparsable classification call.
    ///
    /// A valid zero-reward result, not an error.
    pub fn unidentified() -> Self {
        Self {
            material: "Unknown Object".to_string(),
            is_recyclable: false,
            instructions: "Could not identify this item. Please try again.".to_string(),
            points_reward: 0,
        }
    }
}

/// A user action flowing into the session
///
/// Tagged union with disjoint payloads; the session orchestrator matches
/// exhaustively on the variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Activity {
    /// A trip to run through the emission model
    Trip(TripActivity),

    /// A scanned waste item with its externally supplied classification
    Scan(Classification),

    /// A quest completion, resolved against the static quest catalog
    Quest { quest_id: String },

    /// A finished quiz round, scored against the static answer key
    Quiz { answers: Vec<u32> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trip_builder() {
        let trip = TripActivity::new(15.0, TransportMode::Car)
            .with_ownership(Ownership::Shared)
            .with_fuel(FuelType::Electric);

        assert_eq!(trip.distance_km, 15.0);
        assert_eq!(trip.mode, TransportMode::Car);
        assert_eq!(trip.ownership, Ownership::Shared);
        assert_eq!(trip.fuel, Some(FuelType::Electric));
    }

    #[test]
    fn test_trip_defaults() {
        let trip = TripActivity::new(5.0, TransportMode::Bus);

        assert_eq!(trip.ownership, Ownership::Private);
        assert_eq!(trip.fuel, None);
    }

    #[test]
    fn test_motorized_modes() {
        assert!(TransportMode::Car.is_motorized());
        assert!(TransportMode::Bus.is_motorized());
        assert!(TransportMode::Train.is_motorized());
        assert!(!TransportMode::Bike.is_motorized());
        assert!(!TransportMode::Walk.is_motorized());
    }

    #[test]
    fn test_unidentified_fallback() {
        let fallback = Classification::unidentified();

        assert_eq!(fallback.material, "Unknown Object");
        assert!(!fallback.is_recyclable);
        assert_eq!(fallback.points_reward, 0);
        assert!(fallback.instructions.len() <= 100);
    }

    #[test]
    fn test_activity_serialization_tags() {
        let activity = Activity::Quest {
            quest_id: "q1".to_string(),
        };

        let json = serde_json::to_string(&activity).unwrap();
        assert!(json.contains("\"kind\":\"quest\""));

        let deserialized: Activity = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, activity);
    }

    #[test]
    fn test_transport_mode_display() {
        assert_eq!(TransportMode::Car.to_string(), "car");
        assert_eq!(TransportMode::Walk.to_string(), "walk");
        assert_eq!(Ownership::Shared.to_string(), "shared");
        assert_eq!(FuelType::Hybrid.to_string(), "hybrid");
    }
}
