//! Travel time and fuel cost estimation.

use serde::{Deserialize, Serialize};

/// Average city driving speed.
pub const DEFAULT_AVERAGE_SPEED_KMH: f64 = 30.0;
/// Fuel cost per kilometre.
pub const DEFAULT_FUEL_COST_PER_KM: f64 = 2.5;
/// Service time spent at each stop.
pub const DEFAULT_STOP_DURATION_MINUTES: u32 = 15;

/// Parameters converting route distance into time and money.
///
/// # Examples
/// ```
/// use waybill_core::CostModel;
///
/// let model = CostModel::default();
/// assert_eq!(model.driving_minutes(15.0), 30.0);
/// assert_eq!(model.fuel_cost(10.0), 25.0);
/// assert_eq!(model.service_minutes(3), 45);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostModel {
    /// Average vehicle speed in city traffic.
    pub average_speed_kmh: f64,
    /// Fuel cost per kilometre driven.
    pub fuel_cost_per_km: f64,
    /// Time spent at each delivery stop.
    pub stop_duration_minutes: u32,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            average_speed_kmh: DEFAULT_AVERAGE_SPEED_KMH,
            fuel_cost_per_km: DEFAULT_FUEL_COST_PER_KM,
            stop_duration_minutes: DEFAULT_STOP_DURATION_MINUTES,
        }
    }
}

impl CostModel {
    /// Minutes needed to drive `distance_km` at the average speed.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "time estimates scale distance by speed"
    )]
    pub fn driving_minutes(&self, distance_km: f64) -> f64 {
        distance_km / self.average_speed_kmh * 60.0
    }

    /// Fuel spend for `distance_km`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "fuel cost scales distance by a unit price"
    )]
    pub fn fuel_cost(&self, distance_km: f64) -> f64 {
        distance_km * self.fuel_cost_per_km
    }

    /// Minutes spent servicing `stops` deliveries.
    #[must_use]
    pub const fn service_minutes(&self, stops: u32) -> u32 {
        stops.saturating_mul(self.stop_duration_minutes)
    }
}
