use crate::domain::emission::round2;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the day's footprint is still within the configured goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FootprintStatus {
    /// At or under the daily goal
    OnTrack,
    /// Past the daily goal; surfaced as a distinct status, not just a ratio
    OverLimit,
}

impl fmt::Display for FootprintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FootprintStatus::OnTrack => write!(f, "on track"),
            FootprintStatus::OverLimit => write!(f, "over limit"),
        }
    }
}

/// Immutable snapshot of the daily footprint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FootprintState {
    /// Today's accumulated footprint in kg CO2e (never negative)
    daily_kg: f64,

    /// Daily goal in kg CO2e
    goal_kg: f64,
}

impl FootprintState {
    pub fn daily_kg(&self) -> f64 {
        self.daily_kg
    }

    pub fn goal_kg(&self) -> f64 {
        self.goal_kg
    }

    /// Footprint relative to the goal, in [0, ∞).
    ///
    /// Presentation caps this at 100% for the radial indicator; values above
    /// 1.0 are additionally reported through [`FootprintStatus::OverLimit`].
    pub fn progress_ratio(&self) -> f64 {
        self.daily_kg / self.goal_kg
    }

    pub fn status(&self) -> FootprintStatus {
        if self.daily_kg > self.goal_kg {
            FootprintStatus::OverLimit
        } else {
            FootprintStatus::OnTrack
        }
    }
}

/// Running daily footprint ledger
///
/// Accumulates emission deltas; the only writer is the session orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FootprintLedger {
    state: FootprintState,
}

impl FootprintLedger {
    /// Start the day from a configured baseline against a fixed goal
    pub fn new(baseline_kg: f64, goal_kg: f64) -> Self {
        debug_assert!(goal_kg > 0.0, "footprint goal must be positive");

        Self {
            state: FootprintState {
                daily_kg: round2(baseline_kg.max(0.0)),
                goal_kg,
            },
        }
    }

    pub fn state(&self) -> FootprintState {
        self.state
    }

    /// Add an emissions delta (negative for offsets) and return the new
    /// snapshot. The daily value is clamped to ≥ 0 and rounded to 2 decimals
    /// after every update — a large offset cannot drive it negative.
    pub fn apply_delta(&mut self, kg: f64) -> FootprintState {
        let updated = round2((self.state.daily_kg + kg).max(0.0));

        tracing::debug!(
            delta_kg = kg,
            daily_kg = updated,
            goal_kg = self.state.goal_kg,
            "footprint updated"
        );

        self.state.daily_kg = updated;
        self.state
    }
}
