//! `GreedyOptimizer` implementation.

use waybill_core::{CostModel, Depot, NEAREST_NEIGHBOUR_METHOD, OptimizeRequest, Optimizer, RoutePlan};

use crate::nearest::nearest_neighbour_order;

/// Stop count above which the optimizer warns about quadratic scan cost.
pub const DEFAULT_LARGE_BATCH_THRESHOLD: usize = 1000;

/// Configuration for [`GreedyOptimizer`].
#[derive(Debug, Clone, PartialEq)]
pub struct GreedyOptimizerConfig {
    /// Depot used when a request does not override it.
    pub depot: Depot,
    /// Speed, fuel and service-time parameters for plan aggregates.
    pub cost: CostModel,
    /// Batch size above which a warning is logged.
    pub large_batch_threshold: usize,
}

impl Default for GreedyOptimizerConfig {
    fn default() -> Self {
        Self {
            depot: Depot::default(),
            cost: CostModel::default(),
            large_batch_threshold: DEFAULT_LARGE_BATCH_THRESHOLD,
        }
    }
}

/// Nearest-neighbour optimizer with a priority-sorted scan order.
///
/// The optimizer holds only its configuration; every call is an independent
/// pure computation, so a single instance can serve concurrent callers.
///
/// # Examples
/// ```
/// use waybill_core::{Depot, OptimizeRequest, Optimizer, Stop};
/// use waybill_solver_greedy::{GreedyOptimizer, GreedyOptimizerConfig};
///
/// let optimizer = GreedyOptimizer::with_config(GreedyOptimizerConfig {
///     depot: Depot::new(41.0, 29.0),
///     ..GreedyOptimizerConfig::default()
/// });
/// let request = OptimizeRequest::new(vec![
///     Stop::new(1, 41.01, 29.0),
///     Stop::new(2, 41.1, 29.0),
///     Stop::new(3, 41.005, 29.0),
/// ]);
///
/// let plan = optimizer.optimize(&request);
/// let visited: Vec<u64> = plan.deliveries().map(|entry| entry.id).collect();
/// assert_eq!(visited, vec![3, 1, 2]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyOptimizer {
    config: GreedyOptimizerConfig,
}

impl GreedyOptimizer {
    /// Construct an optimizer using the default depot and cost model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct an optimizer with explicit configuration.
    #[must_use]
    pub const fn with_config(config: GreedyOptimizerConfig) -> Self {
        Self { config }
    }

    /// The configuration this optimizer was built with.
    #[must_use]
    pub const fn config(&self) -> &GreedyOptimizerConfig {
        &self.config
    }
}

impl Optimizer for GreedyOptimizer {
    fn optimize(&self, request: &OptimizeRequest) -> RoutePlan {
        let depot = request.depot.as_ref().unwrap_or(&self.config.depot);
        let stop_count = request.stops.len();
        if stop_count > self.config.large_batch_threshold {
            log::warn!(
                "greedy optimizer received {stop_count} stops; the nearest-neighbour scan is \
                 quadratic and may be slow above {} stops",
                self.config.large_batch_threshold
            );
        }
        log::debug!(
            "optimising {stop_count} stops from depot {} (return_to_depot={})",
            depot.id,
            request.return_to_depot
        );

        let ordered = nearest_neighbour_order(depot.location(), &request.stops);
        let plan = RoutePlan::assemble(
            depot,
            &ordered,
            request.return_to_depot,
            &self.config.cost,
            NEAREST_NEIGHBOUR_METHOD,
        );
        log::debug!(
            "planned {} stops over {} km",
            plan.stops_count,
            plan.total_distance_km
        );

        if request.wants_arrival_estimates() {
            plan.with_arrival_estimates(request.start_time.unwrap_or_default(), &self.config.cost)
        } else {
            plan
        }
    }
}
