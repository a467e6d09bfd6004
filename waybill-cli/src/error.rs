//! Error types emitted by the waybill CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use jiff::civil::Date;
use thiserror::Error;
use waybill_core::{
    ClockTimeError, DeliveryBatchError, RequestValidationError, StopValidationError,
};

/// Errors emitted by the waybill CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name.
        field: &'static str,
        /// Environment variable that could supply it.
        env: &'static str,
    },
    /// Only one of the depot coordinates was configured.
    #[error("depot override needs both --{present} and --{missing}")]
    IncompleteDepot {
        /// The coordinate that was supplied.
        present: &'static str,
        /// The coordinate that was not.
        missing: &'static str,
    },
    /// The depot override carried invalid coordinates.
    #[error("invalid depot override: {source}")]
    InvalidDepot {
        /// Coordinate problem.
        #[source]
        source: StopValidationError,
    },
    /// A numeric setting was outside its valid range.
    #[error("{field} must be {requirement}, got {value}")]
    InvalidSetting {
        /// Flag name.
        field: &'static str,
        /// Human-readable constraint.
        requirement: &'static str,
        /// Supplied value.
        value: f64,
    },
    /// The start time was not a valid `HH:MM` clock time.
    #[error("invalid start time {value:?}: {source}")]
    InvalidStartTime {
        /// Supplied text.
        value: String,
        /// Parse failure.
        #[source]
        source: ClockTimeError,
    },
    /// The date filter was not a valid `YYYY-MM-DD` date.
    #[error("invalid date {value:?}: {source}")]
    InvalidDate {
        /// Supplied text.
        value: String,
        /// Parse failure.
        #[source]
        source: jiff::Error,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag name.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag name.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag name.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Reading an input file failed.
    #[error("failed to read {path:?}: {source}")]
    ReadInput {
        /// Input path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Input JSON could not be decoded.
    #[error("failed to parse JSON at {path:?}: {source}")]
    ParseInput {
        /// Input path.
        path: Utf8PathBuf,
        /// Decode failure, including invalid stop coordinates.
        #[source]
        source: serde_json::Error,
    },
    /// The optimisation request failed validation.
    #[error("request in {path:?} failed validation: {source}")]
    InvalidRequest {
        /// Input path.
        path: Utf8PathBuf,
        /// Validation failure.
        #[source]
        source: RequestValidationError,
    },
    /// Deliveries scheduled for a date lack coordinates.
    #[error("cannot plan deliveries for {date}: {source}")]
    MissingCoordinates {
        /// Delivery date.
        date: Date,
        /// Every delivery without coordinates.
        #[source]
        source: DeliveryBatchError,
    },
    /// Serialising the output failed.
    #[error("failed to serialise output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing to stdout failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
    /// Writing the output file failed.
    #[error("failed to write output to {path:?}: {source}")]
    WriteOutputFile {
        /// Output path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
}
