//! Shared utilities for golden route tests.
//!
//! Each fixture under `tests/golden_routes/data` pairs an
//! [`OptimizeRequest`] with the plan the greedy optimizer is expected to
//! produce for it.

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use waybill_core::OptimizeRequest;

/// Deserialised golden route test case.
#[derive(Debug, Deserialize, Clone)]
pub struct GoldenRoute {
    /// Name of the test case (used in error messages).
    pub name: String,
    /// Human-readable description of what the test validates.
    #[expect(dead_code, reason = "kept for documentation in JSON files")]
    pub description: String,
    /// Request handed to the optimizer.
    pub request: OptimizeRequest,
    /// Expected results for validation.
    pub expected: ExpectedPlan,
}

/// Expected plan shape from JSON.
#[derive(Debug, Deserialize, Clone)]
pub struct ExpectedPlan {
    /// Delivery ids in visiting order.
    pub visit_order: Vec<u64>,
    /// `distance_from_previous` for every route entry.
    pub legs_km: Vec<f64>,
    /// Total route distance.
    pub total_distance_km: f64,
    /// Whole driving minutes.
    pub driving_time_min: u32,
    /// Service minutes.
    pub stop_time_min: u32,
    /// Whole total minutes.
    pub total_time_min: u32,
    /// Total hours to one decimal.
    pub total_time_hours: f64,
    /// Fuel spend.
    pub estimated_fuel_cost: f64,
    /// Arrival per route entry, when the request asks for estimates.
    #[serde(default)]
    pub arrivals: Option<Vec<String>>,
    /// Departure per route entry, when the request asks for estimates.
    #[serde(default)]
    pub departures: Option<Vec<Option<String>>>,
}

/// Load a golden route from the data directory.
///
/// # Panics
/// Panics when the fixture is missing or malformed.
#[must_use]
pub fn load_golden_route(filename: &str) -> GoldenRoute {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/golden_routes/data")
        .join(filename);
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    serde_json::from_str(&content)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()))
}
