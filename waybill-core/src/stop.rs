//! Delivery stops and the depot a route starts from.

use geo::Coord;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Priority assigned to stops that do not specify one.
pub const DEFAULT_PRIORITY: u32 = 1;

/// A delivery destination.
///
/// `priority` orders urgency: `1` is the most urgent and larger values are
/// less urgent. The time window fields are advisory and never consulted by
/// the optimizer.
///
/// Deserialising a `Stop` performs caller-level validation: both coordinates
/// must be present, finite and within WGS84 range.
///
/// Identifiers are numeric (`u64`) only. They are echoed back unchanged but
/// never interpreted, and string identifiers such as `"S-17"` are rejected
/// at deserialisation.
///
/// # Examples
/// ```
/// use waybill_core::Stop;
///
/// let stop = Stop::new(7, 41.01, 29.0).with_priority(2).with_name("Ayse");
/// assert_eq!(stop.id, 7);
/// assert_eq!(stop.location().y, 41.01);
/// assert!(stop.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StopInput")]
pub struct Stop {
    /// Caller-defined identifier, echoed back in route entries.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Display address.
    pub address: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Urgency, `1` being the highest.
    pub priority: u32,
    /// Advisory start of the delivery window, e.g. `"09:00"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_window_start: Option<String>,
    /// Advisory end of the delivery window, e.g. `"18:00"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_window_end: Option<String>,
}

impl Stop {
    /// Construct a stop at the given coordinates with default priority and
    /// empty display strings.
    #[must_use]
    pub const fn new(id: u64, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            name: String::new(),
            address: String::new(),
            latitude,
            longitude,
            priority: DEFAULT_PRIORITY,
            time_window_start: None,
            time_window_end: None,
        }
    }

    /// Replace the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    /// Replace the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replace the display address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// The stop position as a `geo` coordinate (`x = longitude`).
    #[must_use]
    pub const fn location(&self) -> Coord<f64> {
        Coord {
            x: self.longitude,
            y: self.latitude,
        }
    }

    /// Check that both coordinates are finite and within WGS84 range.
    ///
    /// # Errors
    /// Returns [`StopValidationError`] describing the first offending
    /// coordinate.
    pub fn validate(&self) -> Result<(), StopValidationError> {
        check_coordinates(self.id, self.latitude, self.longitude)
    }
}

/// Errors raised while validating a [`Stop`] or [`Depot`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StopValidationError {
    /// The latitude or longitude was not supplied.
    #[error("stop {id} is missing {field}")]
    MissingCoordinate {
        /// Identifier of the offending stop.
        id: u64,
        /// Name of the absent field.
        field: &'static str,
    },
    /// A coordinate was NaN or infinite.
    #[error("stop {id} has a non-finite {field}")]
    NonFiniteCoordinate {
        /// Identifier of the offending stop.
        id: u64,
        /// Name of the offending field.
        field: &'static str,
    },
    /// Latitude outside `[-90, 90]`.
    #[error("stop {id} latitude {value} is outside [-90, 90]")]
    LatitudeOutOfRange {
        /// Identifier of the offending stop.
        id: u64,
        /// Supplied latitude.
        value: f64,
    },
    /// Longitude outside `[-180, 180]`.
    #[error("stop {id} longitude {value} is outside [-180, 180]")]
    LongitudeOutOfRange {
        /// Identifier of the offending stop.
        id: u64,
        /// Supplied longitude.
        value: f64,
    },
}

fn check_coordinates(id: u64, latitude: f64, longitude: f64) -> Result<(), StopValidationError> {
    if !latitude.is_finite() {
        return Err(StopValidationError::NonFiniteCoordinate {
            id,
            field: "latitude",
        });
    }
    if !longitude.is_finite() {
        return Err(StopValidationError::NonFiniteCoordinate {
            id,
            field: "longitude",
        });
    }
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(StopValidationError::LatitudeOutOfRange {
            id,
            value: latitude,
        });
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(StopValidationError::LongitudeOutOfRange {
            id,
            value: longitude,
        });
    }
    Ok(())
}

/// Wire shape accepted for a [`Stop`] before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StopInput {
    #[serde(default)]
    id: u64,
    #[serde(default)]
    name: String,
    #[serde(default)]
    address: String,
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
    #[serde(default)]
    priority: Option<u32>,
    #[serde(default)]
    time_window_start: Option<String>,
    #[serde(default)]
    time_window_end: Option<String>,
}

impl TryFrom<StopInput> for Stop {
    type Error = StopValidationError;

    fn try_from(input: StopInput) -> Result<Self, Self::Error> {
        let latitude = input
            .latitude
            .ok_or(StopValidationError::MissingCoordinate {
                id: input.id,
                field: "latitude",
            })?;
        let longitude = input
            .longitude
            .ok_or(StopValidationError::MissingCoordinate {
                id: input.id,
                field: "longitude",
            })?;
        let stop = Self {
            id: input.id,
            name: input.name,
            address: input.address,
            latitude,
            longitude,
            priority: input.priority.unwrap_or(DEFAULT_PRIORITY),
            time_window_start: input.time_window_start,
            time_window_end: input.time_window_end,
        };
        stop.validate()?;
        Ok(stop)
    }
}

/// The start and end location of every route.
///
/// Structurally a [`Stop`] without a priority. The default depot is the
/// central warehouse; callers override it by injecting their own value.
///
/// # Examples
/// ```
/// use waybill_core::Depot;
///
/// let depot = Depot::default();
/// assert_eq!(depot.id, 0);
/// assert_eq!(depot.latitude, 40.8219);
///
/// let custom = Depot::new(41.0, 29.0);
/// assert_eq!(custom.location().x, 29.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Depot {
    /// Identifier echoed in the start and return entries.
    #[serde(default)]
    pub id: u64,
    /// Display name.
    #[serde(default = "default_depot_name")]
    pub name: String,
    /// Display address.
    #[serde(default)]
    pub address: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

/// Latitude of the default depot.
pub const DEFAULT_DEPOT_LATITUDE: f64 = 40.8219;
/// Longitude of the default depot.
pub const DEFAULT_DEPOT_LONGITUDE: f64 = 29.3094;

fn default_depot_name() -> String {
    "Depot".to_owned()
}

impl Depot {
    /// Construct a depot at the given coordinates with the default name.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            id: 0,
            name: default_depot_name(),
            address: String::new(),
            latitude,
            longitude,
        }
    }

    /// The depot position as a `geo` coordinate (`x = longitude`).
    #[must_use]
    pub const fn location(&self) -> Coord<f64> {
        Coord {
            x: self.longitude,
            y: self.latitude,
        }
    }

    /// Check that both coordinates are finite and within WGS84 range.
    ///
    /// # Errors
    /// Returns [`StopValidationError`] describing the first offending
    /// coordinate.
    pub fn validate(&self) -> Result<(), StopValidationError> {
        check_coordinates(self.id, self.latitude, self.longitude)
    }
}

impl Default for Depot {
    fn default() -> Self {
        Self {
            id: 0,
            name: default_depot_name(),
            address: "Central warehouse".to_owned(),
            latitude: DEFAULT_DEPOT_LATITUDE,
            longitude: DEFAULT_DEPOT_LONGITUDE,
        }
    }
}
