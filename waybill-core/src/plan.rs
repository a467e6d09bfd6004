//! Route plans: the ordered entries a driver follows and their aggregates.
//!
//! A [`RoutePlan`] is built fresh for every optimisation and never mutated in
//! place; annotating arrival times produces a new plan.

use serde::{Deserialize, Serialize};

use crate::distance::round_to;
use crate::{ClockTime, CostModel, Depot, Stop, haversine_km};

/// Label reported by the nearest-neighbour optimizer.
pub const NEAREST_NEIGHBOUR_METHOD: &str = "Nearest Neighbor (Greedy TSP)";

/// Message attached to plans built from an empty stop list.
pub const NO_STOPS_MESSAGE: &str = "No stops provided";

/// Role of a [`RouteEntry`] within the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// The depot the vehicle leaves from.
    Start,
    /// A delivery stop.
    Delivery,
    /// The depot the vehicle returns to.
    Return,
}

/// One visited location in a [`RoutePlan`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteEntry {
    /// Zero-based position in the route.
    pub order: usize,
    /// Whether this is the depot or a delivery.
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Identifier of the stop or depot.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Display address.
    pub address: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Stop priority; absent for depot entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    /// Kilometres from the previous entry.
    pub distance_from_previous: f64,
    /// Kilometres from the start of the route.
    pub cumulative_distance: f64,
    /// Estimated arrival, when arrival times were requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_arrival: Option<ClockTime>,
    /// Estimated departure for delivery entries, when arrival times were
    /// requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_departure: Option<ClockTime>,
}

impl RouteEntry {
    fn depot(order: usize, kind: EntryKind, depot: &Depot, leg: f64, cumulative: f64) -> Self {
        Self {
            order,
            kind,
            id: depot.id,
            name: depot.name.clone(),
            address: depot.address.clone(),
            latitude: depot.latitude,
            longitude: depot.longitude,
            priority: None,
            distance_from_previous: leg,
            cumulative_distance: cumulative,
            estimated_arrival: None,
            estimated_departure: None,
        }
    }

    fn delivery(order: usize, stop: &Stop, leg: f64, cumulative: f64) -> Self {
        Self {
            order,
            kind: EntryKind::Delivery,
            id: stop.id,
            name: stop.name.clone(),
            address: stop.address.clone(),
            latitude: stop.latitude,
            longitude: stop.longitude,
            priority: Some(stop.priority),
            distance_from_previous: leg,
            cumulative_distance: cumulative,
            estimated_arrival: None,
            estimated_departure: None,
        }
    }
}

/// An ordered route with distance, time and cost aggregates.
///
/// # Examples
/// ```
/// use waybill_core::{CostModel, Depot, RoutePlan, Stop};
///
/// let depot = Depot::new(41.0, 29.0);
/// let stops = vec![Stop::new(1, 41.01, 29.0)];
/// let plan = RoutePlan::assemble(&depot, &stops, true, &CostModel::default(), "manual");
///
/// assert_eq!(plan.route.len(), 3);
/// assert_eq!(plan.stops_count, 1);
/// assert!((plan.total_distance_km - 2.22).abs() < 1e-9);
/// assert_eq!(plan.stop_time_min, 15);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    /// Depot start, deliveries in visiting order, then the optional return.
    pub route: Vec<RouteEntry>,
    /// Number of delivery stops.
    pub stops_count: usize,
    /// Total driven distance in kilometres.
    pub total_distance_km: f64,
    /// Driving time in whole minutes.
    pub driving_time_min: u32,
    /// Service time at stops in minutes.
    pub stop_time_min: u32,
    /// Driving plus service time in whole minutes.
    pub total_time_min: u32,
    /// Driving plus service time in hours, one decimal place.
    pub total_time_hours: f64,
    /// Fuel spend for the total distance.
    pub estimated_fuel_cost: f64,
    /// Name of the sequencing heuristic.
    pub optimization_method: String,
    /// Depot the route starts from.
    pub depot: Depot,
    /// Informational note, set for empty plans.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RoutePlan {
    /// The plan returned for an empty stop list.
    #[must_use]
    pub fn empty(depot: &Depot, method: &str) -> Self {
        Self {
            route: Vec::new(),
            stops_count: 0,
            total_distance_km: 0.0,
            driving_time_min: 0,
            stop_time_min: 0,
            total_time_min: 0,
            total_time_hours: 0.0,
            estimated_fuel_cost: 0.0,
            optimization_method: method.to_owned(),
            depot: depot.clone(),
            message: Some(NO_STOPS_MESSAGE.to_owned()),
        }
    }

    /// Build a plan visiting `ordered` stops in the given order.
    ///
    /// Each leg is the rounded Haversine distance from the previous entry.
    /// An empty `ordered` slice yields [`RoutePlan::empty`].
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "route aggregates accumulate floating-point distances"
    )]
    pub fn assemble(
        depot: &Depot,
        ordered: &[Stop],
        return_to_depot: bool,
        cost: &CostModel,
        method: &str,
    ) -> Self {
        if ordered.is_empty() {
            return Self::empty(depot, method);
        }

        let capacity = ordered.len() + 1 + usize::from(return_to_depot);
        let mut route = Vec::with_capacity(capacity);
        route.push(RouteEntry::depot(0, EntryKind::Start, depot, 0.0, 0.0));

        let mut position = depot.location();
        let mut total = 0.0;
        for stop in ordered {
            let leg = haversine_km(position, stop.location());
            total += leg;
            route.push(RouteEntry::delivery(
                route.len(),
                stop,
                leg,
                round_to(total, 2),
            ));
            position = stop.location();
        }

        if return_to_depot {
            let leg = haversine_km(position, depot.location());
            total += leg;
            route.push(RouteEntry::depot(
                route.len(),
                EntryKind::Return,
                depot,
                leg,
                round_to(total, 2),
            ));
        }

        let stop_count = u32::try_from(ordered.len()).unwrap_or(u32::MAX);
        let driving = cost.driving_minutes(total);
        let service = cost.service_minutes(stop_count);
        let total_minutes = driving + f64::from(service);

        Self {
            route,
            stops_count: ordered.len(),
            total_distance_km: round_to(total, 2),
            driving_time_min: whole_minutes(driving),
            stop_time_min: service,
            total_time_min: whole_minutes(total_minutes),
            total_time_hours: round_to(total_minutes / 60.0, 1),
            estimated_fuel_cost: round_to(cost.fuel_cost(total), 2),
            optimization_method: method.to_owned(),
            depot: depot.clone(),
            message: None,
        }
    }

    /// Delivery entries in visiting order.
    pub fn deliveries(&self) -> impl Iterator<Item = &RouteEntry> {
        self.route
            .iter()
            .filter(|entry| entry.kind == EntryKind::Delivery)
    }

    /// Return a copy of this plan with estimated arrival and departure times.
    ///
    /// See [`estimate_arrivals`](crate::estimate_arrivals).
    #[must_use]
    pub fn with_arrival_estimates(&self, start: ClockTime, cost: &CostModel) -> Self {
        Self {
            route: crate::estimate_arrivals(&self.route, start, cost),
            ..self.clone()
        }
    }
}

/// Round minutes half-to-even and clamp into `u32`.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "minutes are clamped to the u32 range before casting"
)]
fn whole_minutes(minutes: f64) -> u32 {
    minutes.round_ties_even().clamp(0.0, f64::from(u32::MAX)) as u32
}
