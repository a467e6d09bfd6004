//! Test-only utilities for `waybill-solver-greedy`.
//!
//! The helpers in this module are available to unit tests and behavioural
//! tests. They are gated behind the `test-support` feature (and `cfg(test)`).

use waybill_core::RoutePlan;

/// Ids of the delivery entries in visiting order.
///
/// # Examples
/// ```rust
/// use waybill_core::{OptimizeRequest, Optimizer, Stop};
/// use waybill_solver_greedy::GreedyOptimizer;
/// use waybill_solver_greedy::test_support::delivery_ids;
///
/// let plan = GreedyOptimizer::new().optimize(&OptimizeRequest::new(vec![Stop::new(4, 41.0, 29.0)]));
/// assert_eq!(delivery_ids(&plan), vec![4]);
/// ```
#[must_use]
pub fn delivery_ids(plan: &RoutePlan) -> Vec<u64> {
    plan.deliveries().map(|entry| entry.id).collect()
}

/// Sum of every `distance_from_previous` in the route.
#[must_use]
pub fn leg_sum(plan: &RoutePlan) -> f64 {
    plan.route
        .iter()
        .map(|entry| entry.distance_from_previous)
        .sum()
}
