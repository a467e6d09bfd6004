//! Core domain types for delivery route planning.
//!
//! Stops and depots carry WGS84 coordinates; distances are great-circle
//! kilometres rounded to two decimals. A [`RoutePlan`] is what every
//! [`Optimizer`] produces: depot start, deliveries in visiting order and an
//! optional return leg, together with time and fuel aggregates derived from a
//! [`CostModel`].
//!
//! The crate also provides the auxiliary planning views: pairwise distance
//! matrices, proximity zones and per-date delivery batches.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod clock;
mod cost;
mod delivery;
mod distance;
mod matrix;
mod optimizer;
mod plan;
mod schedule;
mod stop;
mod zones;

pub use clock::{ClockTime, ClockTimeError};
pub use cost::{
    CostModel, DEFAULT_AVERAGE_SPEED_KMH, DEFAULT_FUEL_COST_PER_KM, DEFAULT_STOP_DURATION_MINUTES,
};
pub use delivery::{
    Delivery, DeliveryBatchError, DeliveryStatus, MissingCoordinates, PRIORITY_STANDARD,
    PRIORITY_URGENT, UNKNOWN_ADDRESS, group_by_date, stops_for_deliveries,
};
pub use distance::{EARTH_RADIUS_KM, haversine_km};
pub use matrix::DistanceMatrix;
pub use optimizer::{OptimizeRequest, Optimizer, RequestValidationError};
pub use plan::{EntryKind, NEAREST_NEIGHBOUR_METHOD, NO_STOPS_MESSAGE, RouteEntry, RoutePlan};
pub use schedule::estimate_arrivals;
pub use stop::{
    DEFAULT_DEPOT_LATITUDE, DEFAULT_DEPOT_LONGITUDE, DEFAULT_PRIORITY, Depot, Stop, StopInput,
    StopValidationError,
};
pub use zones::{DEFAULT_ZONE_RADIUS_KM, Zone, group_by_zone};

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;
