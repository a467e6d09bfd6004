//! Test-only fixtures shared by unit, behaviour and downstream crate tests.

use crate::{CostModel, Depot, OptimizeRequest, Optimizer, RoutePlan, Stop};

/// Build a stop with the default priority and a generated display name.
#[must_use]
pub fn stop(id: u64, latitude: f64, longitude: f64) -> Stop {
    Stop::new(id, latitude, longitude)
        .with_name(format!("Stop {id}"))
        .with_address(format!("{id} Test Street"))
}

/// Build a stop with an explicit priority.
#[must_use]
pub fn stop_with_priority(id: u64, latitude: f64, longitude: f64, priority: u32) -> Stop {
    stop(id, latitude, longitude).with_priority(priority)
}

/// Depot at `(41.0, 29.0)` used by the latitude-axis fixtures.
#[must_use]
pub fn axis_depot() -> Depot {
    Depot::new(41.0, 29.0)
}

/// Three stops due north of [`axis_depot`], given in the order A, B, C.
///
/// Nearest-neighbour sequencing visits them as C, A, B.
#[must_use]
pub fn axis_stops() -> Vec<Stop> {
    vec![
        stop(1, 41.01, 29.0),
        stop(2, 41.1, 29.0),
        stop(3, 41.005, 29.0),
    ]
}

/// [`Optimizer`] that visits stops in the order they were supplied.
///
/// Useful for exercising callers without depending on a real heuristic.
#[derive(Debug, Clone, Default)]
pub struct InputOrderOptimizer {
    /// Depot used when the request carries none.
    pub depot: Depot,
    /// Cost model for the plan aggregates.
    pub cost: CostModel,
}

/// Method label reported by [`InputOrderOptimizer`].
pub const INPUT_ORDER_METHOD: &str = "Input order";

impl Optimizer for InputOrderOptimizer {
    fn optimize(&self, request: &OptimizeRequest) -> RoutePlan {
        let depot = request.depot.as_ref().unwrap_or(&self.depot);
        let plan = RoutePlan::assemble(
            depot,
            &request.stops,
            request.return_to_depot,
            &self.cost,
            INPUT_ORDER_METHOD,
        );
        if request.wants_arrival_estimates() {
            plan.with_arrival_estimates(request.start_time.unwrap_or_default(), &self.cost)
        } else {
            plan
        }
    }
}
