//! Behavioural tests for seed-greedy zone grouping.

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use waybill_core::{Stop, Zone, group_by_zone};

fn member_ids(zone: &Zone) -> Vec<u64> {
    zone.stops.iter().map(|stop| stop.id).collect()
}

#[fixture]
fn stops() -> RefCell<Vec<Stop>> {
    RefCell::new(Vec::new())
}

#[fixture]
fn zones() -> RefCell<Vec<Zone>> {
    RefCell::new(Vec::new())
}

#[given("stops clustered around two neighbourhoods")]
fn given_two_clusters(#[from(stops)] stops: &RefCell<Vec<Stop>>) {
    *stops.borrow_mut() = vec![
        Stop::new(1, 41.0, 29.0),
        Stop::new(2, 41.5, 29.0),
        Stop::new(3, 41.01, 29.01),
        Stop::new(4, 41.51, 29.0),
    ];
}

#[given("a stop lying between two seeds")]
fn given_shared_stop(#[from(stops)] stops: &RefCell<Vec<Stop>>) {
    // Stop 9 is about 4.4 km from both seeds, which are 8.9 km apart.
    *stops.borrow_mut() = vec![
        Stop::new(1, 41.0, 29.0),
        Stop::new(2, 41.08, 29.0),
        Stop::new(9, 41.04, 29.0),
    ];
}

#[given("no stops")]
fn given_no_stops(#[from(stops)] stops: &RefCell<Vec<Stop>>) {
    stops.borrow_mut().clear();
}

#[when("I group the stops with a radius of 5 km")]
fn when_grouped(
    #[from(stops)] stops: &RefCell<Vec<Stop>>,
    #[from(zones)] zones: &RefCell<Vec<Zone>>,
) {
    *zones.borrow_mut() = group_by_zone(&stops.borrow(), 5.0);
}

#[then("two zones are produced")]
fn then_two_zones(#[from(zones)] zones: &RefCell<Vec<Zone>>) {
    let zones = zones.borrow();
    assert_eq!(zones.len(), 2, "expected two zones");
    let names: Vec<&str> = zones.iter().map(|zone| zone.name.as_str()).collect();
    assert_eq!(names, vec!["Zone 1", "Zone 2"]);
}

#[then("the first zone contains stops 1 and 3")]
fn then_first_zone_members(#[from(zones)] zones: &RefCell<Vec<Zone>>) {
    let zones = zones.borrow();
    let first = zones.first().expect("first zone present");
    assert_eq!(member_ids(first), vec![1, 3]);
}

#[then("the shared stop belongs to the first zone")]
fn then_shared_stop_in_first_zone(#[from(zones)] zones: &RefCell<Vec<Zone>>) {
    let zones = zones.borrow();
    assert_eq!(zones.len(), 2, "expected the second seed to open its own zone");
    let first = zones.first().expect("first zone present");
    assert_eq!(member_ids(first), vec![1, 9]);
    let second = zones.get(1).expect("second zone present");
    assert_eq!(member_ids(second), vec![2]);
}

#[then("no zones are produced")]
fn then_no_zones(#[from(zones)] zones: &RefCell<Vec<Zone>>) {
    assert!(zones.borrow().is_empty(), "expected no zones");
}

#[scenario(path = "tests/features/zones.feature", index = 0)]
fn scenario_two_clusters(stops: RefCell<Vec<Stop>>, zones: RefCell<Vec<Zone>>) {
    let _ = (stops, zones);
}

#[scenario(path = "tests/features/zones.feature", index = 1)]
fn scenario_shared_stop(stops: RefCell<Vec<Stop>>, zones: RefCell<Vec<Zone>>) {
    let _ = (stops, zones);
}

#[scenario(path = "tests/features/zones.feature", index = 2)]
fn scenario_no_stops(stops: RefCell<Vec<Stop>>, zones: RefCell<Vec<Zone>>) {
    let _ = (stops, zones);
}
