//! Wall-clock times of day used for arrival estimates.
//!
//! Times wrap at 24:00 without tracking the day, so a route running past
//! midnight shows `00:10` rather than a next-day marker.

use std::fmt;
use std::str::FromStr;

use jiff::{SignedDuration, civil::Time};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const FORMAT: &str = "%H:%M";
const MINUTES_PER_DAY: f64 = 24.0 * 60.0;

/// A time of day with minute resolution, written `HH:MM`.
///
/// # Examples
/// ```
/// use waybill_core::ClockTime;
///
/// let start: ClockTime = "09:00".parse()?;
/// assert_eq!(start, ClockTime::default());
/// assert_eq!(start.advanced_by(75.9).to_string(), "10:15");
/// assert_eq!(start.advanced_by(900.0).to_string(), "00:00");
/// # Ok::<(), waybill_core::ClockTimeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(Time);

/// Errors raised while building a [`ClockTime`].
#[derive(Debug, Clone, Error)]
pub enum ClockTimeError {
    /// The string was not a valid `HH:MM` time of day.
    #[error("expected a time formatted as HH:MM, found {text:?}: {source}")]
    Malformed {
        /// The rejected input.
        text: String,
        /// Parser diagnostic.
        #[source]
        source: jiff::Error,
    },
    /// The hour or minute fell outside a single day.
    #[error("{hour}:{minute} is not a time of day: {source}")]
    OutOfRange {
        /// Requested hour.
        hour: i8,
        /// Requested minute.
        minute: i8,
        /// Range diagnostic.
        #[source]
        source: jiff::Error,
    },
}

impl ClockTime {
    /// Construct a time from an hour and minute.
    ///
    /// # Errors
    /// Rejects hours outside `0..=23` and minutes outside `0..=59`.
    pub fn new(hour: i8, minute: i8) -> Result<Self, ClockTimeError> {
        Time::new(hour, minute, 0, 0)
            .map(Self)
            .map_err(|source| ClockTimeError::OutOfRange {
                hour,
                minute,
                source,
            })
    }

    /// Hour component, `0..=23`.
    #[must_use]
    pub fn hour(self) -> i8 {
        self.0.hour()
    }

    /// Minute component, `0..=59`.
    #[must_use]
    pub fn minute(self) -> i8 {
        self.0.minute()
    }

    /// The time `elapsed_minutes` after `self`, floored to whole minutes
    /// and wrapped at midnight.
    ///
    /// A non-finite elapsed time leaves the clock where it is.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "elapsed travel time is fractional minutes"
    )]
    pub fn advanced_by(self, elapsed_minutes: f64) -> Self {
        let whole = elapsed_minutes.floor().rem_euclid(MINUTES_PER_DAY);
        SignedDuration::try_from_secs_f64(whole * 60.0)
            .map_or(self, |step| Self(self.0.wrapping_add(step)))
    }
}

impl Default for ClockTime {
    fn default() -> Self {
        Self(Time::constant(9, 0, 0, 0))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime(FORMAT))
    }
}

impl FromStr for ClockTime {
    type Err = ClockTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Time::strptime(FORMAT, s.trim())
            .map(Self)
            .map_err(|source| ClockTimeError::Malformed {
                text: s.to_owned(),
                source,
            })
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ClockTimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}
