//! Command-line interface for the waybill route optimizer.
//!
//! Every subcommand reads a JSON document, runs a pure computation from
//! `waybill-core` and prints pretty JSON to stdout (or to `--output`).
//! Options are layered with `ortho_config`: CLI flags override
//! `WAYBILL_CMDS_<SUBCOMMAND>_<FIELD>` environment variables, which override
//! configuration files.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod deliveries;
mod error;
mod files;
pub mod logging;
mod matrix;
mod optimize;
mod planning;
mod zones;

pub use error::CliError;

use deliveries::{DeliveriesArgs, run_deliveries};
use matrix::{MatrixArgs, run_matrix};
use optimize::{OptimizeArgs, run_optimize};
use zones::{ZonesArgs, run_zones};

const ARG_REQUEST: &str = "request";
const ARG_STOPS: &str = "stops";
const ARG_DELIVERIES: &str = "deliveries";
const ARG_OUTPUT: &str = "output";
const ARG_DEPOT_LATITUDE: &str = "depot-latitude";
const ARG_DEPOT_LONGITUDE: &str = "depot-longitude";
const ARG_AVERAGE_SPEED_KMH: &str = "average-speed-kmh";
const ARG_FUEL_COST_PER_KM: &str = "fuel-cost-per-km";
const ARG_STOP_DURATION_MINUTES: &str = "stop-duration-minutes";
const ARG_START_TIME: &str = "start-time";
const ARG_ZONE_RADIUS_KM: &str = "zone-radius-km";
const ARG_DATE: &str = "date";
const ENV_OPTIMIZE_REQUEST: &str = "WAYBILL_CMDS_OPTIMIZE_REQUEST_PATH";
const ENV_MATRIX_STOPS: &str = "WAYBILL_CMDS_MATRIX_STOPS_PATH";
const ENV_ZONES_STOPS: &str = "WAYBILL_CMDS_ZONES_STOPS_PATH";
const ENV_DELIVERIES_PATH: &str = "WAYBILL_CMDS_DELIVERIES_DELIVERIES_PATH";

/// Run the waybill CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration, input loading
/// or output fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Optimize(args) => run_optimize(args),
        Command::Matrix(args) => run_matrix(args),
        Command::Zones(args) => run_zones(args),
        Command::Deliveries(args) => run_deliveries(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "waybill",
    about = "Plan delivery routes from JSON stop lists",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Order a request's stops into a route and report its cost.
    Optimize(OptimizeArgs),
    /// Print the pairwise distance matrix for a list of stops.
    Matrix(MatrixArgs),
    /// Group nearby stops into zones.
    Zones(ZonesArgs),
    /// Plan one route per delivery date.
    Deliveries(DeliveriesArgs),
}

#[cfg(test)]
mod tests;
