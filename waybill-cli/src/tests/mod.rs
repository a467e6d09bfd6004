//! Shared test harness modules for the waybill CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod deliveries_unit;
mod helpers;
