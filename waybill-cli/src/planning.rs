//! Depot, cost and start-time settings shared by the route-planning
//! subcommands, plus the seam that turns them into an optimizer.

use waybill_core::{ClockTime, CostModel, Depot, OptimizeRequest, Optimizer, RoutePlan};
use waybill_solver_greedy::{GreedyOptimizer, GreedyOptimizerConfig};

use crate::{
    ARG_AVERAGE_SPEED_KMH, ARG_DEPOT_LATITUDE, ARG_DEPOT_LONGITUDE, ARG_FUEL_COST_PER_KM,
    CliError,
};

/// Planning options as they arrive from the merged configuration layers.
#[derive(Debug, Clone, Default)]
pub(crate) struct PlanningOptions {
    pub(crate) depot_latitude: Option<f64>,
    pub(crate) depot_longitude: Option<f64>,
    pub(crate) average_speed_kmh: Option<f64>,
    pub(crate) fuel_cost_per_km: Option<f64>,
    pub(crate) stop_duration_minutes: Option<u32>,
    pub(crate) start_time: Option<String>,
}

/// Validated planning settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct PlanningSettings {
    /// Depot used when a request carries none.
    pub(crate) depot: Depot,
    /// Speed, fuel and service-time parameters.
    pub(crate) cost: CostModel,
    /// Start time applied to requests that do not set their own.
    pub(crate) start_time: Option<ClockTime>,
}

impl TryFrom<PlanningOptions> for PlanningSettings {
    type Error = CliError;

    fn try_from(options: PlanningOptions) -> Result<Self, Self::Error> {
        let depot = resolve_depot(options.depot_latitude, options.depot_longitude)?;

        let defaults = CostModel::default();
        let average_speed_kmh = options
            .average_speed_kmh
            .unwrap_or(defaults.average_speed_kmh);
        if !(average_speed_kmh.is_finite() && average_speed_kmh > 0.0) {
            return Err(CliError::InvalidSetting {
                field: ARG_AVERAGE_SPEED_KMH,
                requirement: "a positive, finite speed",
                value: average_speed_kmh,
            });
        }
        let fuel_cost_per_km = options
            .fuel_cost_per_km
            .unwrap_or(defaults.fuel_cost_per_km);
        if !(fuel_cost_per_km.is_finite() && fuel_cost_per_km >= 0.0) {
            return Err(CliError::InvalidSetting {
                field: ARG_FUEL_COST_PER_KM,
                requirement: "a non-negative, finite cost",
                value: fuel_cost_per_km,
            });
        }
        let cost = CostModel {
            average_speed_kmh,
            fuel_cost_per_km,
            stop_duration_minutes: options
                .stop_duration_minutes
                .unwrap_or(defaults.stop_duration_minutes),
        };

        let start_time = options
            .start_time
            .map(|value| {
                value
                    .parse::<ClockTime>()
                    .map_err(|source| CliError::InvalidStartTime { value, source })
            })
            .transpose()?;

        Ok(Self {
            depot,
            cost,
            start_time,
        })
    }
}

fn resolve_depot(latitude: Option<f64>, longitude: Option<f64>) -> Result<Depot, CliError> {
    let depot = match (latitude, longitude) {
        (None, None) => return Ok(Depot::default()),
        (Some(lat), Some(lon)) => Depot::new(lat, lon),
        (Some(_), None) => {
            return Err(CliError::IncompleteDepot {
                present: ARG_DEPOT_LATITUDE,
                missing: ARG_DEPOT_LONGITUDE,
            });
        }
        (None, Some(_)) => {
            return Err(CliError::IncompleteDepot {
                present: ARG_DEPOT_LONGITUDE,
                missing: ARG_DEPOT_LATITUDE,
            });
        }
    };
    depot
        .validate()
        .map_err(|source| CliError::InvalidDepot { source })?;
    Ok(depot)
}

/// Builds the optimizer used for a planning run.
pub(crate) trait OptimizerBuilder {
    fn build(&self, settings: &PlanningSettings) -> Box<dyn Optimizer>;
}

/// Builds a [`GreedyOptimizer`] around the configured depot and cost model.
pub(crate) struct GreedyOptimizerBuilder;

impl OptimizerBuilder for GreedyOptimizerBuilder {
    fn build(&self, settings: &PlanningSettings) -> Box<dyn Optimizer> {
        Box::new(GreedyOptimizer::with_config(GreedyOptimizerConfig {
            depot: settings.depot.clone(),
            cost: settings.cost,
            ..GreedyOptimizerConfig::default()
        }))
    }
}

/// Plan `request`, applying the configured start time when it sets none.
pub(crate) fn plan_route(
    optimizer: &dyn Optimizer,
    mut request: OptimizeRequest,
    settings: &PlanningSettings,
) -> RoutePlan {
    if request.start_time.is_none() {
        request.start_time = settings.start_time;
    }
    optimizer.optimize(&request)
}
