//! Pairwise distance matrices for callers running their own solver.

use serde::{Deserialize, Serialize};

use crate::{Stop, haversine_km};

/// Square matrix of Haversine distances in kilometres.
///
/// `matrix.get(i, j)` is the distance from `stops[i]` to `stops[j]`; the
/// diagonal is zero.
///
/// # Examples
/// ```
/// use waybill_core::{DistanceMatrix, Stop};
///
/// let stops = vec![Stop::new(1, 41.0, 29.0), Stop::new(2, 41.01, 29.0)];
/// let matrix = DistanceMatrix::from_stops(&stops);
///
/// assert_eq!(matrix.len(), 2);
/// assert_eq!(matrix.get(0, 0), Some(0.0));
/// assert_eq!(matrix.get(0, 1), matrix.get(1, 0));
/// assert_eq!(matrix.get(2, 0), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DistanceMatrix {
    rows: Vec<Vec<f64>>,
}

impl DistanceMatrix {
    /// Compute the full matrix for `stops` in O(n²).
    #[must_use]
    pub fn from_stops(stops: &[Stop]) -> Self {
        let rows = stops
            .iter()
            .enumerate()
            .map(|(i, from)| {
                stops
                    .iter()
                    .enumerate()
                    .map(|(j, to)| {
                        if i == j {
                            0.0
                        } else {
                            haversine_km(from.location(), to.location())
                        }
                    })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// Number of stops covered by the matrix.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the matrix covers no stops.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distance from stop `from` to stop `to`, if both indices are in range.
    #[must_use]
    pub fn get(&self, from: usize, to: usize) -> Option<f64> {
        self.rows.get(from).and_then(|row| row.get(to)).copied()
    }

    /// Borrow the matrix rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }
}

impl From<DistanceMatrix> for Vec<Vec<f64>> {
    fn from(matrix: DistanceMatrix) -> Self {
        matrix.rows
    }
}
