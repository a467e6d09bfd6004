//! `optimize` subcommand: order a request's stops into a costed route.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use waybill_core::{OptimizeRequest, RoutePlan};

use crate::files::{emit, load_json, require_existing};
use crate::planning::{
    GreedyOptimizerBuilder, OptimizerBuilder, PlanningOptions, PlanningSettings, plan_route,
};
use crate::{
    ARG_AVERAGE_SPEED_KMH, ARG_DEPOT_LATITUDE, ARG_DEPOT_LONGITUDE, ARG_FUEL_COST_PER_KM,
    ARG_OUTPUT, ARG_REQUEST, ARG_START_TIME, ARG_STOP_DURATION_MINUTES, CliError,
    ENV_OPTIMIZE_REQUEST,
};

/// CLI arguments for the `optimize` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "optimize",
    long_about = "Order the stops of a JSON-encoded optimisation request with \
                 the nearest-neighbour heuristic and report distance, time \
                 and fuel totals. Depot and cost settings can come from CLI \
                 flags, configuration files, or environment variables; a \
                 depot inside the request takes precedence.",
    about = "Plan a delivery route"
)]
#[ortho_config(prefix = "WAYBILL")]
pub(crate) struct OptimizeArgs {
    /// Path to a JSON file containing an optimisation request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Write the plan to this file instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Depot latitude; requires --depot-longitude.
    #[arg(long = ARG_DEPOT_LATITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) depot_latitude: Option<f64>,
    /// Depot longitude; requires --depot-latitude.
    #[arg(long = ARG_DEPOT_LONGITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) depot_longitude: Option<f64>,
    /// Average driving speed (default 30).
    #[arg(long = ARG_AVERAGE_SPEED_KMH, value_name = "kmh")]
    #[serde(default)]
    pub(crate) average_speed_kmh: Option<f64>,
    /// Fuel cost per kilometre (default 2.5).
    #[arg(long = ARG_FUEL_COST_PER_KM, value_name = "cost")]
    #[serde(default)]
    pub(crate) fuel_cost_per_km: Option<f64>,
    /// Minutes spent at each stop (default 15).
    #[arg(long = ARG_STOP_DURATION_MINUTES, value_name = "minutes")]
    #[serde(default)]
    pub(crate) stop_duration_minutes: Option<u32>,
    /// Departure time as `HH:MM`; enables arrival estimates.
    #[arg(long = ARG_START_TIME, value_name = "HH:MM")]
    #[serde(default)]
    pub(crate) start_time: Option<String>,
}

impl OptimizeArgs {
    pub(crate) fn into_config(self) -> Result<OptimizeConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        OptimizeConfig::try_from(merged)
    }
}

/// Resolved `optimize` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct OptimizeConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Optional output file.
    pub(crate) output: Option<Utf8PathBuf>,
    /// Depot, cost model and start time.
    pub(crate) planning: PlanningSettings,
}

impl OptimizeConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.request_path, ARG_REQUEST)
    }
}

impl TryFrom<OptimizeArgs> for OptimizeConfig {
    type Error = CliError;

    fn try_from(args: OptimizeArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env: ENV_OPTIMIZE_REQUEST,
        })?;
        let planning = PlanningSettings::try_from(PlanningOptions {
            depot_latitude: args.depot_latitude,
            depot_longitude: args.depot_longitude,
            average_speed_kmh: args.average_speed_kmh,
            fuel_cost_per_km: args.fuel_cost_per_km,
            stop_duration_minutes: args.stop_duration_minutes,
            start_time: args.start_time,
        })?;
        Ok(Self {
            request_path,
            output: args.output,
            planning,
        })
    }
}

pub(crate) fn run_optimize(args: OptimizeArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_optimize_with(args, &GreedyOptimizerBuilder, &mut stdout)
}

pub(crate) fn run_optimize_with(
    args: OptimizeArgs,
    builder: &dyn OptimizerBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let plan = execute_optimize(&config, builder)?;
    emit(&plan, config.output.as_deref(), writer)
}

fn execute_optimize(
    config: &OptimizeConfig,
    builder: &dyn OptimizerBuilder,
) -> Result<RoutePlan, CliError> {
    let request: OptimizeRequest = load_json(&config.request_path)?;
    request
        .validate()
        .map_err(|source| CliError::InvalidRequest {
            path: config.request_path.clone(),
            source,
        })?;
    let optimizer = builder.build(&config.planning);
    Ok(plan_route(optimizer.as_ref(), request, &config.planning))
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<OptimizeConfig, CliError> {
    let merged = OptimizeArgs::merge_from_layers(layers).map_err(CliError::from)?;
    OptimizeConfig::try_from(merged)
}
