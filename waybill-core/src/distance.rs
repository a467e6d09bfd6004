//! Great-circle distance between WGS84 coordinates.
//!
//! Coordinates follow the `geo` convention used throughout the crate:
//! `x = longitude` and `y = latitude`, both in decimal degrees.

use geo::Coord;

/// Mean Earth radius used by [`haversine_km`].
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Return the Haversine distance in kilometres between `from` and `to`,
/// rounded to two decimal places.
///
/// The result is symmetric and zero for identical points. Antipodal points
/// yield half the Earth's circumference. Coordinates are not range checked;
/// see [`Stop::validate`](crate::Stop::validate).
///
/// # Examples
/// ```
/// use geo::Coord;
/// use waybill_core::haversine_km;
///
/// let depot = Coord { x: 29.0, y: 41.0 };
/// let stop = Coord { x: 29.0, y: 41.01 };
/// assert!((haversine_km(depot, stop) - 1.11).abs() < 1e-9);
/// assert_eq!(haversine_km(depot, depot), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the Haversine formula is inherently floating-point"
)]
pub fn haversine_km(from: Coord<f64>, to: Coord<f64>) -> f64 {
    let from_lat = from.y.to_radians();
    let to_lat = to.y.to_radians();
    let delta_lat = (to.y - from.y).to_radians();
    let delta_lon = (to.x - from.x).to_radians();

    // Rounding can push near-antipodal inputs fractionally above one.
    let a = ((delta_lat / 2.0).sin().powi(2)
        + from_lat.cos() * to_lat.cos() * (delta_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    round_to(EARTH_RADIUS_KM * c, 2)
}

/// Round `value` to `places` decimal places.
///
/// Ties are broken towards the even digit and are judged on the exact
/// binary value, so `55.625` becomes `55.62` while `2.675`, stored just
/// below the tie, becomes `2.67`.
#[must_use]
pub(crate) fn round_to(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}
