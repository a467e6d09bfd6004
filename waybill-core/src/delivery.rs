//! Scheduled deliveries and their conversion into routable stops.
//!
//! Deliveries come from the order system keyed by date. Only pending and
//! assigned deliveries are routed; each date is planned independently.

use std::collections::BTreeMap;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Stop;

/// Priority given to deliveries flagged as urgent.
pub const PRIORITY_URGENT: u32 = 1;
/// Priority given to all other deliveries.
pub const PRIORITY_STANDARD: u32 = 3;
/// Address used when a delivery has none on record.
pub const UNKNOWN_ADDRESS: &str = "Address not specified";

/// Lifecycle state of a delivery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    /// Awaiting a route.
    #[default]
    Pending,
    /// Placed on a route.
    Assigned,
    /// Out with a driver.
    InTransit,
    /// Handed to the customer.
    Delivered,
    /// Called off.
    Cancelled,
}

impl DeliveryStatus {
    /// Whether deliveries in this state should be placed on a route.
    #[must_use]
    pub const fn is_routable(self) -> bool {
        matches!(self, Self::Pending | Self::Assigned)
    }
}

/// A delivery scheduled for a given date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    /// Delivery identifier, reused as the stop id.
    pub id: u64,
    /// Customer display name.
    pub customer: String,
    /// Delivery address, if recorded.
    #[serde(default)]
    pub address: Option<String>,
    /// Geocoded latitude, if known.
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Geocoded longitude, if known.
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Date the delivery is scheduled for.
    pub delivery_date: Date,
    /// Current lifecycle state.
    #[serde(default)]
    pub status: DeliveryStatus,
    /// Whether the customer asked for priority handling.
    #[serde(default)]
    pub is_priority: bool,
}

/// A delivery that cannot be routed because it lacks coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingCoordinates {
    /// Delivery identifier.
    pub id: u64,
    /// Address on record, to help geocode it.
    pub address: String,
}

/// Errors raised while turning deliveries into stops.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryBatchError {
    /// One or more deliveries have no coordinates.
    #[error("{} deliveries are missing coordinates: {}", .missing.len(), format_ids(.missing))]
    MissingCoordinates {
        /// Every offending delivery, in input order.
        missing: Vec<MissingCoordinates>,
    },
}

fn format_ids(missing: &[MissingCoordinates]) -> String {
    missing
        .iter()
        .map(|entry| entry.id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl Delivery {
    /// Priority used when routing this delivery.
    #[must_use]
    pub const fn priority(&self) -> u32 {
        if self.is_priority {
            PRIORITY_URGENT
        } else {
            PRIORITY_STANDARD
        }
    }

    fn address_or_placeholder(&self) -> String {
        self.address
            .as_deref()
            .filter(|address| !address.trim().is_empty())
            .unwrap_or(UNKNOWN_ADDRESS)
            .to_owned()
    }

    /// Convert into a [`Stop`].
    ///
    /// # Errors
    /// Returns [`MissingCoordinates`] when either coordinate is absent.
    pub fn to_stop(&self) -> Result<Stop, MissingCoordinates> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Ok(Stop::new(self.id, latitude, longitude)
                .with_name(self.customer.clone())
                .with_address(self.address_or_placeholder())
                .with_priority(self.priority())),
            _ => Err(MissingCoordinates {
                id: self.id,
                address: self.address_or_placeholder(),
            }),
        }
    }
}

/// Group routable deliveries by date, preserving input order within a date.
///
/// # Examples
/// ```
/// use jiff::civil::date;
/// use waybill_core::{Delivery, DeliveryStatus, group_by_date};
///
/// let delivery = |id, day, status| Delivery {
///     id,
///     customer: "Ayse".into(),
///     address: None,
///     latitude: Some(41.0),
///     longitude: Some(29.0),
///     delivery_date: date(2026, 1, day),
///     status,
///     is_priority: false,
/// };
/// let deliveries = vec![
///     delivery(1, 7, DeliveryStatus::Pending),
///     delivery(2, 8, DeliveryStatus::Delivered),
///     delivery(3, 7, DeliveryStatus::Assigned),
/// ];
///
/// let batches = group_by_date(&deliveries);
/// assert_eq!(batches.len(), 1);
/// let ids: Vec<u64> = batches[&date(2026, 1, 7)].iter().map(|d| d.id).collect();
/// assert_eq!(ids, vec![1, 3]);
/// ```
#[must_use]
pub fn group_by_date(deliveries: &[Delivery]) -> BTreeMap<Date, Vec<&Delivery>> {
    let mut batches: BTreeMap<Date, Vec<&Delivery>> = BTreeMap::new();
    for delivery in deliveries {
        if delivery.status.is_routable() {
            batches
                .entry(delivery.delivery_date)
                .or_default()
                .push(delivery);
        } else {
            log::debug!(
                "skipping delivery {} in state {:?}",
                delivery.id,
                delivery.status
            );
        }
    }
    batches
}

/// Convert a batch of deliveries into stops.
///
/// # Errors
/// Returns [`DeliveryBatchError::MissingCoordinates`] listing every delivery
/// without coordinates, not only the first.
pub fn stops_for_deliveries(deliveries: &[&Delivery]) -> Result<Vec<Stop>, DeliveryBatchError> {
    let mut stops = Vec::with_capacity(deliveries.len());
    let mut missing = Vec::new();
    for delivery in deliveries {
        match delivery.to_stop() {
            Ok(stop) => stops.push(stop),
            Err(entry) => missing.push(entry),
        }
    }
    if missing.is_empty() {
        Ok(stops)
    } else {
        Err(DeliveryBatchError::MissingCoordinates { missing })
    }
}
