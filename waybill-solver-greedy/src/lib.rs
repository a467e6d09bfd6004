//! Greedy nearest-neighbour route optimizer for waybill.
//!
//! This crate provides [`GreedyOptimizer`], the default implementation of the
//! [`Optimizer`](waybill_core::Optimizer) trait. Stops are pre-sorted by
//! priority and then visited by repeatedly driving to the closest unvisited
//! stop. The result is a fast, deterministic approximation of the travelling
//! salesman tour, not an optimal one.
//!
//! The scan is O(n²) in the number of stops, which suits delivery batches of
//! tens of stops. Batches in the thousands need a spatial index in place of
//! the linear scan; the optimizer logs a warning above a configurable size.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod nearest;
mod solver;

pub use solver::{DEFAULT_LARGE_BATCH_THRESHOLD, GreedyOptimizer, GreedyOptimizerConfig};

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;
