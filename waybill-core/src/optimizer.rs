//! Optimisation requests and the trait every route optimizer implements.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{ClockTime, Depot, RoutePlan, Stop, StopValidationError};

/// Parameters for one route optimisation.
///
/// `depot` overrides the optimizer's configured depot for this request.
/// Arrival times are estimated when `estimate_arrivals` is set or a
/// `start_time` is supplied; the start defaults to 09:00.
///
/// # Examples
/// ```rust
/// use waybill_core::{OptimizeRequest, Stop};
///
/// let request = OptimizeRequest::new(vec![Stop::new(1, 41.0, 29.0)]);
/// assert!(request.return_to_depot);
/// assert!(!request.wants_arrival_estimates());
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizeRequest {
    /// Stops to visit.
    pub stops: Vec<Stop>,
    /// Depot override for this request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depot: Option<Depot>,
    /// Whether the route ends back at the depot.
    #[serde(default = "default_return_to_depot")]
    pub return_to_depot: bool,
    /// Clock time the vehicle leaves the depot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<ClockTime>,
    /// Whether to annotate the plan with arrival times.
    #[serde(default)]
    pub estimate_arrivals: bool,
}

const fn default_return_to_depot() -> bool {
    true
}

impl OptimizeRequest {
    /// A round trip over `stops` without arrival estimates.
    #[must_use]
    pub const fn new(stops: Vec<Stop>) -> Self {
        Self {
            stops,
            depot: None,
            return_to_depot: true,
            start_time: None,
            estimate_arrivals: false,
        }
    }

    /// Whether the plan should carry arrival and departure times.
    #[must_use]
    pub const fn wants_arrival_estimates(&self) -> bool {
        self.estimate_arrivals || self.start_time.is_some()
    }

    /// Validate stop and depot coordinates.
    ///
    /// Optimizers assume well-formed input; callers run this first.
    ///
    /// # Errors
    /// Returns the first invalid stop together with its position.
    pub fn validate(&self) -> Result<(), RequestValidationError> {
        if let Some(depot) = &self.depot {
            depot
                .validate()
                .map_err(|source| RequestValidationError::InvalidDepot { source })?;
        }
        for (index, stop) in self.stops.iter().enumerate() {
            stop.validate()
                .map_err(|source| RequestValidationError::InvalidStop { index, source })?;
        }
        Ok(())
    }
}

/// Errors returned by [`OptimizeRequest::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestValidationError {
    /// A stop carried invalid coordinates.
    #[error("stop at position {index} is invalid: {source}")]
    InvalidStop {
        /// Position of the stop in the request.
        index: usize,
        /// Underlying coordinate problem.
        #[source]
        source: StopValidationError,
    },
    /// The depot override carried invalid coordinates.
    #[error("depot is invalid: {source}")]
    InvalidDepot {
        /// Underlying coordinate problem.
        #[source]
        source: StopValidationError,
    },
}

/// Produce a route plan for a request.
///
/// Implementations are pure: the same request always yields the same plan
/// and no state is shared between calls, so independent requests may run in
/// parallel. Optimizers must be `Send + Sync`.
pub trait Optimizer: Send + Sync {
    /// Plan a route for `request`.
    ///
    /// An empty stop list yields [`RoutePlan::empty`] rather than an error.
    fn optimize(&self, request: &OptimizeRequest) -> RoutePlan;
}
