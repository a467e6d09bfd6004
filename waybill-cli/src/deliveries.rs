//! `deliveries` subcommand: one route per delivery date.
//!
//! Deliveries are grouped by date and each date is planned independently.
//! Plans share no state, so dates run in parallel on the rayon pool; results
//! are gathered back in date order before any error is reported.

use std::collections::BTreeMap;
use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use jiff::civil::Date;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use waybill_core::{
    Delivery, OptimizeRequest, Optimizer, RoutePlan, group_by_date, stops_for_deliveries,
};

use crate::files::{emit, load_json, require_existing};
use crate::planning::{
    GreedyOptimizerBuilder, OptimizerBuilder, PlanningOptions, PlanningSettings, plan_route,
};
use crate::{
    ARG_AVERAGE_SPEED_KMH, ARG_DATE, ARG_DELIVERIES, ARG_DEPOT_LATITUDE, ARG_DEPOT_LONGITUDE,
    ARG_FUEL_COST_PER_KM, ARG_OUTPUT, ARG_START_TIME, ARG_STOP_DURATION_MINUTES, CliError,
    ENV_DELIVERIES_PATH,
};

/// CLI arguments for the `deliveries` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "deliveries",
    long_about = "Plan a route for every date in a JSON array of deliveries. \
                 Only pending and assigned deliveries are routed; priority \
                 deliveries win distance ties. Every plan carries arrival \
                 and departure estimates from the configured start time \
                 (09:00 unless set). Output is a JSON object keyed by date.",
    about = "Plan delivery routes per date"
)]
#[ortho_config(prefix = "WAYBILL")]
pub(crate) struct DeliveriesArgs {
    /// Path to a JSON array of deliveries.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) deliveries_path: Option<Utf8PathBuf>,
    /// Only plan deliveries scheduled for this date (`YYYY-MM-DD`).
    #[arg(long = ARG_DATE, value_name = "date")]
    #[serde(default)]
    pub(crate) date: Option<String>,
    /// Write the plans to this file instead of stdout.
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
    /// Departure time as `HH:MM` (default 09:00).
    #[arg(long = ARG_START_TIME, value_name = "HH:MM")]
    #[serde(default)]
    pub(crate) start_time: Option<String>,
}

impl DeliveriesArgs {
    fn into_config(self) -> Result<DeliveriesConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        DeliveriesConfig::try_from(merged)
    }
}

/// Resolved `deliveries` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DeliveriesConfig {
    pub(crate) deliveries_path: Utf8PathBuf,
    pub(crate) date: Option<Date>,
    pub(crate) output: Option<Utf8PathBuf>,
    pub(crate) planning: PlanningSettings,
}

impl TryFrom<DeliveriesArgs> for DeliveriesConfig {
    type Error = CliError;

    fn try_from(args: DeliveriesArgs) -> Result<Self, Self::Error> {
        let deliveries_path = args.deliveries_path.ok_or(CliError::MissingArgument {
            field: ARG_DELIVERIES,
            env: ENV_DELIVERIES_PATH,
        })?;
        let date = args
            .date
            .map(|value| {
                value
                    .parse::<Date>()
                    .map_err(|source| CliError::InvalidDate { value, source })
            })
            .transpose()?;
        let planning = PlanningSettings::try_from(PlanningOptions {
            depot_latitude: args.depot_latitude,
            depot_longitude: args.depot_longitude,
            average_speed_kmh: args.average_speed_kmh,
            fuel_cost_per_km: args.fuel_cost_per_km,
            stop_duration_minutes: args.stop_duration_minutes,
            start_time: args.start_time,
        })?;
        Ok(Self {
            deliveries_path,
            date,
            output: args.output,
            planning,
        })
    }
}

pub(crate) fn run_deliveries(args: DeliveriesArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_deliveries_with(args, &GreedyOptimizerBuilder, &mut stdout)
}

pub(crate) fn run_deliveries_with(
    args: DeliveriesArgs,
    builder: &dyn OptimizerBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_existing(&config.deliveries_path, ARG_DELIVERIES)?;
    let deliveries: Vec<Delivery> = load_json(&config.deliveries_path)?;
    let plans = plan_deliveries(&deliveries, &config, builder)?;
    emit(&plans, config.output.as_deref(), writer)
}

/// Plan every routable date, keyed by its `YYYY-MM-DD` form.
pub(crate) fn plan_deliveries(
    deliveries: &[Delivery],
    config: &DeliveriesConfig,
    builder: &dyn OptimizerBuilder,
) -> Result<BTreeMap<String, RoutePlan>, CliError> {
    let mut batches = group_by_date(deliveries);
    if let Some(wanted) = config.date {
        batches.retain(|date, _| *date == wanted);
        if batches.is_empty() {
            log::warn!("no routable deliveries scheduled for {wanted}");
        }
    }

    let optimizer = builder.build(&config.planning);
    let planned: Vec<Result<(Date, RoutePlan), CliError>> = batches
        .into_par_iter()
        .map(|(date, batch)| plan_batch(optimizer.as_ref(), date, &batch, config))
        .collect();

    planned
        .into_iter()
        .map(|outcome| outcome.map(|(date, plan)| (date.to_string(), plan)))
        .collect()
}

fn plan_batch(
    optimizer: &dyn Optimizer,
    date: Date,
    batch: &[&Delivery],
    config: &DeliveriesConfig,
) -> Result<(Date, RoutePlan), CliError> {
    let stops =
        stops_for_deliveries(batch).map_err(|source| CliError::MissingCoordinates { date, source })?;
    log::debug!("planning {} deliveries for {date}", stops.len());
    let mut request = OptimizeRequest::new(stops);
    request.estimate_arrivals = true;
    request
        .validate()
        .map_err(|source| CliError::InvalidRequest {
            path: config.deliveries_path.clone(),
            source,
        })?;
    Ok((date, plan_route(optimizer, request, &config.planning)))
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<DeliveriesConfig, CliError> {
    let merged = DeliveriesArgs::merge_from_layers(layers).map_err(CliError::from)?;
    DeliveriesConfig::try_from(merged)
}
