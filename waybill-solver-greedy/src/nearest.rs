//! Nearest-neighbour sequencing over a priority-sorted scan order.

use geo::Coord;
use waybill_core::{Stop, haversine_km};

/// Order `stops` by repeatedly moving to the closest unvisited stop.
///
/// Stops are first stably sorted by ascending priority. That order is only
/// the scan order: on an exact distance tie the stop scanned first wins, so
/// priority breaks ties but never overrides distance. Unvisited stops are
/// removed with an order-preserving `Vec::remove` to keep tie-breaking stable.
pub(crate) fn nearest_neighbour_order(start: Coord<f64>, stops: &[Stop]) -> Vec<Stop> {
    let mut unvisited: Vec<&Stop> = stops.iter().collect();
    unvisited.sort_by_key(|stop| stop.priority);

    let mut ordered = Vec::with_capacity(stops.len());
    let mut position = start;
    while let Some(index) = closest(position, &unvisited) {
        let next = unvisited.remove(index);
        position = next.location();
        ordered.push(next.clone());
    }
    ordered
}

/// Index of the stop nearest to `position`, first-scanned on ties.
///
/// NaN distances rank behind every finite distance, so a batch made only of
/// unmeasurable stops falls back to scan order.
fn closest(position: Coord<f64>, candidates: &[&Stop]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, stop) in candidates.iter().enumerate() {
        let distance = match haversine_km(position, stop.location()) {
            measured if measured.is_nan() => f64::INFINITY,
            measured => measured,
        };
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((index, distance)),
        }
    }
    best.map(|(index, _)| index)
}
