//! Test helpers for writing JSON inputs into scratch workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Value, json};
use tempfile::TempDir;
use waybill_core::test_support::InputOrderOptimizer;
use waybill_core::{Depot, Optimizer};

use crate::planning::{OptimizerBuilder, PlanningSettings};

/// Temporary directory addressed through UTF-8 paths.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write_json(&self, name: &str, value: &Value) -> Utf8PathBuf {
        let path = self.path(name);
        write_utf8(&path, value.to_string().as_bytes());
        path
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test input");
}

/// Depot 41.0 N, 29.0 E and three stops due north of it, given as A, B, C.
pub(super) fn axis_request() -> Value {
    json!({
        "depot": { "latitude": 41.0, "longitude": 29.0 },
        "stops": axis_stops_json(),
    })
}

pub(super) fn axis_stops_json() -> Value {
    json!([
        { "id": 1, "name": "A", "latitude": 41.01, "longitude": 29.0 },
        { "id": 2, "name": "B", "latitude": 41.1, "longitude": 29.0 },
        { "id": 3, "name": "C", "latitude": 41.005, "longitude": 29.0 },
    ])
}

pub(super) fn parse_output(buffer: &[u8]) -> Value {
    serde_json::from_slice(buffer).expect("output should be JSON")
}

/// Delivery ids of a serialised route plan, in visiting order.
pub(super) fn visited_ids(plan: &Value) -> Vec<u64> {
    plan["route"]
        .as_array()
        .expect("route array")
        .iter()
        .filter(|entry| entry["type"] == "delivery")
        .map(|entry| entry["id"].as_u64().expect("numeric id"))
        .collect()
}

/// Builds an [`InputOrderOptimizer`] so tests can tell configured settings
/// apart from the greedy ordering.
pub(super) struct InputOrderBuilder;

impl OptimizerBuilder for InputOrderBuilder {
    fn build(&self, settings: &PlanningSettings) -> Box<dyn Optimizer> {
        Box::new(InputOrderOptimizer {
            depot: settings.depot.clone(),
            cost: settings.cost,
        })
    }
}

pub(super) fn configured_depot() -> Depot {
    Depot::new(35.19, 33.38)
}
