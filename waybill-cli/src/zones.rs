//! `zones` subcommand: group nearby stops around seed stops.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use waybill_core::{DEFAULT_ZONE_RADIUS_KM, Stop, group_by_zone};

use crate::files::{emit, load_json, require_existing};
use crate::{ARG_OUTPUT, ARG_STOPS, ARG_ZONE_RADIUS_KM, CliError, ENV_ZONES_STOPS};

/// CLI arguments for the `zones` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "zones",
    long_about = "Partition a JSON array of stops into zones. Each zone is \
                 seeded by the first unassigned stop in input order and \
                 claims every unassigned stop within the radius of the seed.",
    about = "Group stops into zones"
)]
#[ortho_config(prefix = "WAYBILL")]
pub(crate) struct ZonesArgs {
    /// Path to a JSON array of stops.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) stops_path: Option<Utf8PathBuf>,
    /// Zone radius in kilometres (default 5).
    #[arg(long = ARG_ZONE_RADIUS_KM, value_name = "km")]
    #[serde(default)]
    pub(crate) zone_radius_km: Option<f64>,
    /// Write the zones to this file instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl ZonesArgs {
    fn into_config(self) -> Result<ZonesConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ZonesConfig::try_from(merged)
    }
}

/// Resolved `zones` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ZonesConfig {
    pub(crate) stops_path: Utf8PathBuf,
    pub(crate) zone_radius_km: f64,
    pub(crate) output: Option<Utf8PathBuf>,
}

impl TryFrom<ZonesArgs> for ZonesConfig {
    type Error = CliError;

    fn try_from(args: ZonesArgs) -> Result<Self, Self::Error> {
        let stops_path = args.stops_path.ok_or(CliError::MissingArgument {
            field: ARG_STOPS,
            env: ENV_ZONES_STOPS,
        })?;
        let zone_radius_km = args.zone_radius_km.unwrap_or(DEFAULT_ZONE_RADIUS_KM);
        if !(zone_radius_km.is_finite() && zone_radius_km >= 0.0) {
            return Err(CliError::InvalidSetting {
                field: ARG_ZONE_RADIUS_KM,
                requirement: "a non-negative, finite distance",
                value: zone_radius_km,
            });
        }
        Ok(Self {
            stops_path,
            zone_radius_km,
            output: args.output,
        })
    }
}

pub(crate) fn run_zones(args: ZonesArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_zones_with(args, &mut stdout)
}

pub(crate) fn run_zones_with(args: ZonesArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_existing(&config.stops_path, ARG_STOPS)?;
    let stops: Vec<Stop> = load_json(&config.stops_path)?;
    let zones = group_by_zone(&stops, config.zone_radius_km);
    log::debug!(
        "grouped {} stops into {} zones within {} km",
        stops.len(),
        zones.len(),
        config.zone_radius_km
    );
    emit(&zones, config.output.as_deref(), writer)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ZonesConfig, CliError> {
    let merged = ZonesArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ZonesConfig::try_from(merged)
}
