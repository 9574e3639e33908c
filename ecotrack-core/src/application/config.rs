use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Baseline configuration a session starts from
///
/// Supplied once at startup and trusted beyond structural shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SessionConfig {
    /// Footprint already accumulated when the session opens, in kg CO2e
    pub baseline_footprint_kg: f64,

    /// Daily footprint goal in kg CO2e
    pub goal_kg: f64,

    /// Reward points carried over from previous sessions
    pub baseline_points: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            baseline_footprint_kg: 7.4,
            goal_kg: 10.0,
            baseline_points: 1250,
        }
    }
}

impl SessionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_baseline_footprint(mut self, kg: f64) -> Self {
        self.baseline_footprint_kg = kg;
        self
    }

    pub fn with_goal(mut self, kg: f64) -> Self {
        self.goal_kg = kg;
        self
    }

    pub fn with_baseline_points(mut self, points: u64) -> Self {
        self.baseline_points = points;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();

        assert_eq!(config.baseline_footprint_kg, 7.4);
        assert_eq!(config.goal_kg, 10.0);
        assert_eq!(config.baseline_points, 1250);
    }

    #[test]
    fn test_builder() {
        let config = SessionConfig::new()
            .with_baseline_footprint(0.0)
            .with_goal(5.0)
            .with_baseline_points(0);

        assert_eq!(config.baseline_footprint_kg, 0.0);
        assert_eq!(config.goal_kg, 5.0);
        assert_eq!(config.baseline_points, 0);
    }
}
