use crate::domain::{FuelType, Ownership, TransportMode, TripActivity};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Base emission factors in kg CO2e per km
const CAR_FACTOR: f64 = 0.18;
const BUS_FACTOR: f64 = 0.08;
const TRAIN_FACTOR: f64 = 0.04;
/// Bike/walk earn a fixed offset credit instead of emitting
const OFFSET_FACTOR: f64 = -0.05;

/// Fuel overrides for car trips (petrol/diesel keep the car base)
const ELECTRIC_CAR_FACTOR: f64 = 0.05;
const HYBRID_CAR_FACTOR: f64 = 0.11;

/// Carpooling/shared-transit discount divisor (car only)
const SHARED_CAR_DIVISOR: f64 = 3.0;

/// Reward for an offsetting activity (net emissions ≤ 0)
pub const OFFSET_REWARD_POINTS: u32 = 50;
/// Flat reward for logging any positive-emission trip
pub const LOGGING_REWARD_POINTS: u32 = 10;

/// Outcome of estimating one activity: emissions delta plus point reward.
///
/// Produced once per activity and never mutated. A non-positive
/// `emissions_kg` means the trip was a net offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EmissionResult {
    /// Emissions delta in kg CO2e, rounded to 2 decimals
    pub emissions_kg: f64,

    /// Points awarded for logging this activity
    pub points_awarded: u32,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum EmissionError {
    #[error("trip distance must be a positive number of kilometres, got {0}")]
    InvalidDistance(f64),
}

/// Estimate the emissions delta and point reward for a trip.
///
/// Pure and deterministic: the same trip always yields the same result.
pub fn estimate(trip: &TripActivity) -> Result<EmissionResult, EmissionError> {
    if !trip.distance_km.is_finite() || trip.distance_km <= 0.0 {
        return Err(EmissionError::InvalidDistance(trip.distance_km));
    }

    let factor = emission_factor(trip);
    let emissions_kg = round2(trip.distance_km * factor);

    let points_awarded = if emissions_kg <= 0.0 {
        OFFSET_REWARD_POINTS
    } else {
        LOGGING_REWARD_POINTS
    };

    Ok(EmissionResult {
        emissions_kg,
        points_awarded,
    })
}

/// Select the kg-CO2e-per-km factor for a trip.
///
/// Fuel type and ownership only apply to car trips; for every other mode
/// they are ignored and the mode's base factor is used.
fn emission_factor(trip: &TripActivity) -> f64 {
    match trip.mode {
        TransportMode::Bus => BUS_FACTOR,
        TransportMode::Train => TRAIN_FACTOR,
        TransportMode::Bike | TransportMode::Walk => OFFSET_FACTOR,
        TransportMode::Car => {
            let base = match trip.fuel {
                Some(FuelType::Electric) => ELECTRIC_CAR_FACTOR,
                Some(FuelType::Hybrid) => HYBRID_CAR_FACTOR,
                // Petrol, diesel and unspecified fuel fall back to the car base
                Some(FuelType::Petrol) | Some(FuelType::Diesel) | None => CAR_FACTOR,
            };

            match trip.ownership {
                Ownership::Shared => base / SHARED_CAR_DIVISOR,
                Ownership::Private => base,
            }
        }
    }
}

/// Round to 2 decimal places, half away from zero
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_petrol_car_private() {
        let trip = TripActivity::new(15.0, TransportMode::Car).with_fuel(FuelType::Petrol);

        let result = estimate(&trip).unwrap();

        assert_eq!(result.emissions_kg, 2.70);
        assert_eq!(result.points_awarded, LOGGING_REWARD_POINTS);
    }

    #[test]
    fn test_electric_car_shared() {
        let trip = TripActivity::new(15.0, TransportMode::Car)
            .with_ownership(Ownership::Shared)
            .with_fuel(FuelType::Electric);

        let result = estimate(&trip).unwrap();

        // 0.05 / 3 per km over 15 km
        assert_eq!(result.emissions_kg, 0.25);
        assert_eq!(result.points_awarded, LOGGING_REWARD_POINTS);
    }

    #[test]
    fn test_bike_is_offset() {
        let trip = TripActivity::new(20.0, TransportMode::Bike);

        let result = estimate(&trip).unwrap();

        assert_eq!(result.emissions_kg, -1.00);
        assert_eq!(result.points_awarded, OFFSET_REWARD_POINTS);
    }

    #[test]
    fn test_walk_is_offset() {
        let trip = TripActivity::new(2.0, TransportMode::Walk);

        let result = estimate(&trip).unwrap();

        assert_eq!(result.emissions_kg, -0.10);
        assert_eq!(result.points_awarded, OFFSET_REWARD_POINTS);
    }

    #[test]
    fn test_shared_only_discounts_cars() {
        let private_bus = TripActivity::new(10.0, TransportMode::Bus);
        let shared_bus = TripActivity::new(10.0, TransportMode::Bus).with_ownership(Ownership::Shared);

        assert_eq!(
            estimate(&private_bus).unwrap().emissions_kg,
            estimate(&shared_bus).unwrap().emissions_kg
        );
    }

    #[test]
    fn test_shared_car_is_a_third_of_private() {
        for fuel in [FuelType::Petrol, FuelType::Diesel, FuelType::Electric, FuelType::Hybrid] {
            let private = TripActivity::new(30.0, TransportMode::Car).with_fuel(fuel);
            let shared = TripActivity::new(30.0, TransportMode::Car)
                .with_ownership(Ownership::Shared)
                .with_fuel(fuel);

            let private_kg = estimate(&private).unwrap().emissions_kg;
            let shared_kg = estimate(&shared).unwrap().emissions_kg;

            assert_eq!(shared_kg, round2(private_kg / 3.0), "fuel: {fuel}");
        }
    }

    #[test]
    fn test_fuel_ignored_for_non_car() {
        let train = TripActivity::new(10.0, TransportMode::Train).with_fuel(FuelType::Electric);

        assert_eq!(estimate(&train).unwrap().emissions_kg, 0.40);
    }

    #[test]
    fn test_diesel_keeps_car_base() {
        let petrol = TripActivity::new(15.0, TransportMode::Car).with_fuel(FuelType::Petrol);
        let diesel = TripActivity::new(15.0, TransportMode::Car).with_fuel(FuelType::Diesel);
        let unspecified = TripActivity::new(15.0, TransportMode::Car);

        let expected = estimate(&petrol).unwrap().emissions_kg;
        assert_eq!(estimate(&diesel).unwrap().emissions_kg, expected);
        assert_eq!(estimate(&unspecified).unwrap().emissions_kg, expected);
    }

    #[test]
    fn test_rejects_non_positive_distance() {
        let zero = TripActivity::new(0.0, TransportMode::Bus);
        let negative = TripActivity::new(-3.0, TransportMode::Bus);

        assert_eq!(estimate(&zero), Err(EmissionError::InvalidDistance(0.0)));
        assert_eq!(estimate(&negative), Err(EmissionError::InvalidDistance(-3.0)));
    }

    #[test]
    fn test_rejects_non_finite_distance() {
        let nan = TripActivity::new(f64::NAN, TransportMode::Walk);
        let inf = TripActivity::new(f64::INFINITY, TransportMode::Walk);

        assert!(estimate(&nan).is_err());
        assert!(estimate(&inf).is_err());
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(1.0), 1.0);
    }

    #[test]
    fn test_offset_points_boundary() {
        // Any positive emission earns the flat logging reward, however small
        let short_shared = TripActivity::new(1.0, TransportMode::Car)
            .with_ownership(Ownership::Shared)
            .with_fuel(FuelType::Electric);

        let result = estimate(&short_shared).unwrap();

        assert!(result.emissions_kg > 0.0);
        assert_eq!(result.points_awarded, LOGGING_REWARD_POINTS);
    }
}
