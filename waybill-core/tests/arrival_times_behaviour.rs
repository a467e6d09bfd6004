//! Behavioural tests for arrival and departure estimation.

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use waybill_core::{
    ClockTime, ClockTimeError, CostModel, Depot, EntryKind, RoutePlan, Stop,
};

/// Latitude step of roughly 10 km.
const TEN_KM_NORTH: f64 = 0.09;

#[fixture]
fn plan() -> RefCell<Option<RoutePlan>> {
    RefCell::new(None)
}

#[fixture]
fn parsed() -> RefCell<Option<Result<ClockTime, ClockTimeError>>> {
    RefCell::new(None)
}

fn clock(text: &str) -> ClockTime {
    text.parse().expect("valid clock time")
}

fn render(time: Option<ClockTime>) -> Option<String> {
    time.map(|value| value.to_string())
}

#[given("a route with two stops 10 km apart starting at the depot")]
fn given_open_route(#[from(plan)] plan: &RefCell<Option<RoutePlan>>) {
    let stops = vec![
        Stop::new(1, TEN_KM_NORTH, 0.0),
        Stop::new(2, TEN_KM_NORTH * 2.0, 0.0),
    ];
    *plan.borrow_mut() = Some(RoutePlan::assemble(
        &Depot::new(0.0, 0.0),
        &stops,
        false,
        &CostModel::default(),
        "behaviour",
    ));
}

#[given("a round trip to one stop 10 km from the depot")]
fn given_round_trip(#[from(plan)] plan: &RefCell<Option<RoutePlan>>) {
    let stops = vec![Stop::new(1, TEN_KM_NORTH, 0.0)];
    *plan.borrow_mut() = Some(RoutePlan::assemble(
        &Depot::new(0.0, 0.0),
        &stops,
        true,
        &CostModel::default(),
        "behaviour",
    ));
}

#[when("I estimate arrivals from 08:00")]
fn when_estimate_morning(#[from(plan)] plan: &RefCell<Option<RoutePlan>>) {
    estimate(plan, "08:00");
}

#[when("I estimate arrivals from 23:50")]
fn when_estimate_late(#[from(plan)] plan: &RefCell<Option<RoutePlan>>) {
    estimate(plan, "23:50");
}

fn estimate(plan: &RefCell<Option<RoutePlan>>, start: &str) {
    let timed = plan
        .borrow()
        .as_ref()
        .expect("route assembled")
        .with_arrival_estimates(clock(start), &CostModel::default());
    *plan.borrow_mut() = Some(timed);
}

#[when("I parse the start time \"25:00\"")]
fn when_parse_invalid(
    #[from(parsed)] parsed: &RefCell<Option<Result<ClockTime, ClockTimeError>>>,
) {
    *parsed.borrow_mut() = Some("25:00".parse());
}

#[then("the stops are reached at 08:20 and 08:55")]
fn then_arrivals(#[from(plan)] plan: &RefCell<Option<RoutePlan>>) {
    let plan = plan.borrow();
    let arrivals: Vec<Option<String>> = plan
        .as_ref()
        .expect("route assembled")
        .deliveries()
        .map(|entry| render(entry.estimated_arrival))
        .collect();
    assert_eq!(
        arrivals,
        vec![Some("08:20".to_owned()), Some("08:55".to_owned())]
    );
}

#[then("the stops are left at 08:35 and 09:10")]
fn then_departures(#[from(plan)] plan: &RefCell<Option<RoutePlan>>) {
    let plan = plan.borrow();
    let departures: Vec<Option<String>> = plan
        .as_ref()
        .expect("route assembled")
        .deliveries()
        .map(|entry| render(entry.estimated_departure))
        .collect();
    assert_eq!(
        departures,
        vec![Some("08:35".to_owned()), Some("09:10".to_owned())]
    );
}

#[then("the depot entries have no departure time")]
fn then_depot_without_departure(#[from(plan)] plan: &RefCell<Option<RoutePlan>>) {
    let plan = plan.borrow();
    let route = &plan.as_ref().expect("route assembled").route;
    for entry in route.iter().filter(|entry| entry.kind != EntryKind::Delivery) {
        assert!(entry.estimated_arrival.is_some(), "depot arrival expected");
        assert!(entry.estimated_departure.is_none(), "depot departure unexpected");
    }
}

#[then("the vehicle returns at 00:45")]
fn then_wrapped_return(#[from(plan)] plan: &RefCell<Option<RoutePlan>>) {
    let plan = plan.borrow();
    let last = plan
        .as_ref()
        .expect("route assembled")
        .route
        .last()
        .expect("return entry present");
    assert_eq!(last.kind, EntryKind::Return);
    assert_eq!(render(last.estimated_arrival).as_deref(), Some("00:45"));
}

#[then("the start time is rejected")]
fn then_rejected(#[from(parsed)] parsed: &RefCell<Option<Result<ClockTime, ClockTimeError>>>) {
    let parsed = parsed.borrow();
    assert!(
        matches!(
            parsed.as_ref(),
            Some(Err(ClockTimeError::Malformed { text, .. })) if text == "25:00"
        ),
        "expected a malformed time error, got {parsed:?}"
    );
}

#[scenario(path = "tests/features/arrival_times.feature", index = 0)]
fn scenario_service_time(
    plan: RefCell<Option<RoutePlan>>,
    parsed: RefCell<Option<Result<ClockTime, ClockTimeError>>>,
) {
    let _ = (plan, parsed);
}

#[scenario(path = "tests/features/arrival_times.feature", index = 1)]
fn scenario_midnight_wrap(
    plan: RefCell<Option<RoutePlan>>,
    parsed: RefCell<Option<Result<ClockTime, ClockTimeError>>>,
) {
    let _ = (plan, parsed);
}

#[scenario(path = "tests/features/arrival_times.feature", index = 2)]
fn scenario_malformed_start(
    plan: RefCell<Option<RoutePlan>>,
    parsed: RefCell<Option<Result<ClockTime, ClockTimeError>>>,
) {
    let _ = (plan, parsed);
}
