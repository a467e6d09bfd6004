//! `matrix` subcommand: pairwise great-circle distances between stops.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use waybill_core::{DistanceMatrix, Stop};

use crate::files::{emit, load_json, require_existing};
use crate::{ARG_OUTPUT, ARG_STOPS, CliError, ENV_MATRIX_STOPS};

/// CLI arguments for the `matrix` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "matrix",
    long_about = "Compute the symmetric N by N matrix of Haversine \
                 distances, in kilometres rounded to two decimals, for a \
                 JSON array of stops. Row and column order follow the input.",
    about = "Print the distance matrix for a list of stops"
)]
#[ortho_config(prefix = "WAYBILL")]
pub(crate) struct MatrixArgs {
    /// Path to a JSON array of stops.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) stops_path: Option<Utf8PathBuf>,
    /// Write the matrix to this file instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl MatrixArgs {
    fn into_config(self) -> Result<MatrixConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        MatrixConfig::try_from(merged)
    }
}

/// Resolved `matrix` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MatrixConfig {
    pub(crate) stops_path: Utf8PathBuf,
    pub(crate) output: Option<Utf8PathBuf>,
}

impl TryFrom<MatrixArgs> for MatrixConfig {
    type Error = CliError;

    fn try_from(args: MatrixArgs) -> Result<Self, Self::Error> {
        let stops_path = args.stops_path.ok_or(CliError::MissingArgument {
            field: ARG_STOPS,
            env: ENV_MATRIX_STOPS,
        })?;
        Ok(Self {
            stops_path,
            output: args.output,
        })
    }
}

pub(crate) fn run_matrix(args: MatrixArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_matrix_with(args, &mut stdout)
}

pub(crate) fn run_matrix_with(args: MatrixArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_existing(&config.stops_path, ARG_STOPS)?;
    let stops: Vec<Stop> = load_json(&config.stops_path)?;
    let matrix = DistanceMatrix::from_stops(&stops);
    log::debug!("computed {n}x{n} distance matrix", n = matrix.len());
    emit(&matrix, config.output.as_deref(), writer)
}
