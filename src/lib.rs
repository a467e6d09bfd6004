//! Facade crate for the waybill delivery-route optimizer.
//!
//! This crate re-exports the core domain types and exposes the greedy
//! optimizer behind the default `solver-greedy` feature.
//!
//! # Examples
//! ```
//! # #[cfg(feature = "solver-greedy")]
//! # {
//! use waybill::{GreedyOptimizer, OptimizeRequest, Optimizer, Stop};
//!
//! let request = OptimizeRequest::new(vec![Stop::new(1, 40.83, 29.31)]);
//! let plan = GreedyOptimizer::new().optimize(&request);
//! assert_eq!(plan.stops_count, 1);
//! # }
//! ```

#![forbid(unsafe_code)]

pub use waybill_core::{
    ClockTime, ClockTimeError, CostModel, Delivery, DeliveryBatchError, DeliveryStatus, Depot,
    DistanceMatrix, EntryKind, OptimizeRequest, Optimizer, RequestValidationError, RouteEntry,
    RoutePlan, Stop, StopValidationError, Zone, estimate_arrivals, group_by_date, group_by_zone,
    haversine_km, stops_for_deliveries,
};

#[cfg(feature = "solver-greedy")]
pub use waybill_solver_greedy::{GreedyOptimizer, GreedyOptimizerConfig};
