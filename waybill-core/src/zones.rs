//! Proximity zones for splitting a day's stops between drivers.
//!
//! Grouping is a single seed-greedy pass, not a clustering algorithm: each
//! unassigned stop opens a zone and claims every later unassigned stop within
//! the radius of that seed. A stop within range of two seeds belongs to
//! whichever zone opened first. Zones are neither balanced nor refined.

use serde::{Deserialize, Serialize};

use crate::{Stop, haversine_km};

/// Radius used when the caller does not specify one.
pub const DEFAULT_ZONE_RADIUS_KM: f64 = 5.0;

/// A group of stops near a seed stop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// Display name, `"Zone 1"`, `"Zone 2"`, ...
    pub name: String,
    /// Member stops; the first is the seed.
    pub stops: Vec<Stop>,
}

impl Zone {
    /// The stop the zone was opened on.
    #[must_use]
    pub fn seed(&self) -> Option<&Stop> {
        self.stops.first()
    }
}

/// Partition `stops` into zones of radius `zone_radius_km`.
///
/// Every stop lands in exactly one zone and zones are returned in the order
/// they were opened. Assignment tracks input positions, so duplicate ids do
/// not merge stops.
///
/// # Examples
/// ```
/// use waybill_core::{Stop, group_by_zone};
///
/// let stops = vec![
///     Stop::new(1, 41.0, 29.0),
///     Stop::new(2, 41.5, 29.0),
///     Stop::new(3, 41.01, 29.0),
/// ];
/// let zones = group_by_zone(&stops, 5.0);
///
/// assert_eq!(zones.len(), 2);
/// assert_eq!(zones[0].name, "Zone 1");
/// assert_eq!(zones[0].stops.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 3]);
/// assert_eq!(zones[1].stops[0].id, 2);
/// ```
#[must_use]
pub fn group_by_zone(stops: &[Stop], zone_radius_km: f64) -> Vec<Zone> {
    let mut assigned = vec![false; stops.len()];
    let mut zones = Vec::new();

    for (seed_index, seed) in stops.iter().enumerate() {
        if is_assigned(&assigned, seed_index) {
            continue;
        }
        mark(&mut assigned, seed_index);
        let mut members = vec![seed.clone()];

        for (index, other) in stops.iter().enumerate() {
            if is_assigned(&assigned, index) {
                continue;
            }
            if haversine_km(seed.location(), other.location()) <= zone_radius_km {
                mark(&mut assigned, index);
                members.push(other.clone());
            }
        }

        zones.push(Zone {
            name: format!("Zone {}", zones.len() + 1),
            stops: members,
        });
    }

    log::debug!(
        "grouped {} stops into {} zones of radius {zone_radius_km} km",
        stops.len(),
        zones.len()
    );
    zones
}

fn is_assigned(assigned: &[bool], index: usize) -> bool {
    assigned.get(index).copied().unwrap_or(true)
}

fn mark(assigned: &mut [bool], index: usize) {
    if let Some(slot) = assigned.get_mut(index) {
        *slot = true;
    }
}
