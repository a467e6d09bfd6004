//! Arrival-time estimation along a computed route.

use crate::{ClockTime, CostModel, EntryKind, RouteEntry};

/// Annotate `route` with estimated arrival and departure times.
///
/// Starting at `start`, the driving time of each leg is added before the
/// entry's arrival is recorded. Delivery entries additionally spend the
/// model's stop duration and record a departure; depot entries only receive
/// an arrival. Times wrap at midnight without a day marker.
///
/// # Examples
/// ```
/// use waybill_core::{ClockTime, CostModel, Depot, RoutePlan, Stop, estimate_arrivals};
///
/// let depot = Depot::new(41.0, 29.0);
/// let stops = vec![Stop::new(1, 41.1, 29.0)];
/// let cost = CostModel::default();
/// let plan = RoutePlan::assemble(&depot, &stops, true, &cost, "manual");
///
/// let timed = estimate_arrivals(&plan.route, ClockTime::default(), &cost);
/// assert_eq!(timed[0].estimated_arrival.map(|t| t.to_string()).as_deref(), Some("09:00"));
/// assert_eq!(timed[1].estimated_arrival.map(|t| t.to_string()).as_deref(), Some("09:22"));
/// assert_eq!(timed[1].estimated_departure.map(|t| t.to_string()).as_deref(), Some("09:37"));
/// assert!(timed[2].estimated_departure.is_none());
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "elapsed minutes accumulate fractional driving time"
)]
pub fn estimate_arrivals(
    route: &[RouteEntry],
    start: ClockTime,
    cost: &CostModel,
) -> Vec<RouteEntry> {
    let mut elapsed = 0.0;
    route
        .iter()
        .map(|entry| {
            elapsed += cost.driving_minutes(entry.distance_from_previous);
            let arrival = start.advanced_by(elapsed);
            let departure = if entry.kind == EntryKind::Delivery {
                elapsed += f64::from(cost.stop_duration_minutes);
                Some(start.advanced_by(elapsed))
            } else {
                None
            };
            RouteEntry {
                estimated_arrival: Some(arrival),
                estimated_departure: departure,
                ..entry.clone()
            }
        })
        .collect()
}
