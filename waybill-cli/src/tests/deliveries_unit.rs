//! Unit tests for per-date delivery planning.

use super::helpers::{Workspace, parse_output, visited_ids};
use super::*;
use crate::deliveries::{
    DeliveriesConfig, config_from_layers_for_test, plan_deliveries, run_deliveries_with,
};
use crate::planning::{GreedyOptimizerBuilder, PlanningSettings};
use jiff::civil::{Date, date};
use rstest::{fixture, rstest};
use serde_json::json;
use waybill_core::{Delivery, DeliveryBatchError, DeliveryStatus, Depot};

fn delivery(id: u64, day: i8, coordinates: Option<(f64, f64)>) -> Delivery {
    Delivery {
        id,
        customer: format!("Customer {id}"),
        address: None,
        latitude: coordinates.map(|(latitude, _)| latitude),
        longitude: coordinates.map(|(_, longitude)| longitude),
        delivery_date: date(2026, 1, day),
        status: DeliveryStatus::Pending,
        is_priority: false,
    }
}

/// Two routable deliveries on the 7th (one urgent), one on the 8th and a
/// cancelled delivery without coordinates.
#[fixture]
fn deliveries() -> Vec<Delivery> {
    vec![
        delivery(11, 7, Some((41.01, 29.0))),
        Delivery {
            status: DeliveryStatus::Assigned,
            is_priority: true,
            ..delivery(12, 7, Some((41.005, 29.0)))
        },
        delivery(13, 8, Some((41.1, 29.0))),
        Delivery {
            status: DeliveryStatus::Cancelled,
            ..delivery(14, 7, None)
        },
    ]
}

fn config(date: Option<Date>) -> DeliveriesConfig {
    DeliveriesConfig {
        deliveries_path: "deliveries.json".into(),
        date,
        output: None,
        planning: PlanningSettings {
            depot: Depot::new(41.0, 29.0),
            ..PlanningSettings::default()
        },
    }
}

#[rstest]
fn plans_each_date_separately(deliveries: Vec<Delivery>) {
    let plans = plan_deliveries(&deliveries, &config(None), &GreedyOptimizerBuilder)
        .expect("deliveries plan");

    let dates: Vec<&str> = plans.keys().map(String::as_str).collect();
    assert_eq!(dates, vec!["2026-01-07", "2026-01-08"]);

    let first = plans.get("2026-01-07").expect("plan for the 7th");
    let visited: Vec<u64> = first.deliveries().map(|entry| entry.id).collect();
    assert_eq!(visited, vec![12, 11]);
    let priorities: Vec<Option<u32>> = first.deliveries().map(|entry| entry.priority).collect();
    assert_eq!(priorities, vec![Some(1), Some(3)]);
    assert_eq!(plans.get("2026-01-08").map(|plan| plan.stops_count), Some(1));
}

#[rstest]
fn delivery_plans_always_carry_arrival_estimates(deliveries: Vec<Delivery>) {
    let plans = plan_deliveries(&deliveries, &config(None), &GreedyOptimizerBuilder)
        .expect("deliveries plan");
    for plan in plans.values() {
        let start = plan.route.first().expect("start entry");
        assert_eq!(start.estimated_arrival.map(|t| t.to_string()).as_deref(), Some("09:00"));
        assert!(plan.deliveries().all(|entry| entry.estimated_departure.is_some()));
    }
}

#[rstest]
fn date_filter_keeps_a_single_plan(deliveries: Vec<Delivery>) {
    let plans = plan_deliveries(
        &deliveries,
        &config(Some(date(2026, 1, 8))),
        &GreedyOptimizerBuilder,
    )
    .expect("deliveries plan");
    assert_eq!(plans.keys().collect::<Vec<_>>(), vec!["2026-01-08"]);
}

#[rstest]
fn date_without_deliveries_yields_no_plans(deliveries: Vec<Delivery>) {
    let plans = plan_deliveries(
        &deliveries,
        &config(Some(date(2026, 2, 1))),
        &GreedyOptimizerBuilder,
    )
    .expect("deliveries plan");
    assert!(plans.is_empty());
}

#[rstest]
fn every_delivery_without_coordinates_is_reported(mut deliveries: Vec<Delivery>) {
    deliveries.push(delivery(21, 7, None));
    deliveries.push(Delivery {
        address: Some("Ataturk Cad. 5".to_owned()),
        ..delivery(22, 7, None)
    });

    let err = plan_deliveries(&deliveries, &config(None), &GreedyOptimizerBuilder)
        .expect_err("missing coordinates");
    match err {
        CliError::MissingCoordinates { date: day, source } => {
            assert_eq!(day, date(2026, 1, 7));
            let DeliveryBatchError::MissingCoordinates { missing } = source;
            let ids: Vec<u64> = missing.iter().map(|entry| entry.id).collect();
            assert_eq!(ids, vec![21, 22]);
            assert_eq!(
                missing.last().map(|entry| entry.address.as_str()),
                Some("Ataturk Cad. 5")
            );
        }
        other => panic!("expected MissingCoordinates, found {other:?}"),
    }
}

#[rstest]
fn malformed_dates_are_rejected() {
    let err = DeliveriesConfig::try_from(DeliveriesArgs {
        deliveries_path: Some("deliveries.json".into()),
        date: Some("2026-13-01".to_owned()),
        ..DeliveriesArgs::default()
    })
    .expect_err("invalid date");
    match err {
        CliError::InvalidDate { value, .. } => assert_eq!(value, "2026-13-01"),
        other => panic!("expected InvalidDate, found {other:?}"),
    }
}

#[rstest]
fn date_filter_can_come_from_the_environment() {
    use ortho_config::MergeComposer;

    let mut composer = MergeComposer::new();
    composer.push_file(json!({ "deliveries_path": "deliveries.json", "start_time": "07:45" }), None);
    composer.push_environment(json!({ "date": "2026-01-08" }));

    let merged = config_from_layers_for_test(composer.layers()).expect("merged config");
    assert_eq!(merged.date, Some(date(2026, 1, 8)));
    assert_eq!(
        merged.planning.start_time.map(|t| t.to_string()).as_deref(),
        Some("07:45")
    );
}

#[rstest]
fn deliveries_command_prints_plans_keyed_by_date() {
    let workspace = Workspace::new();
    let path = workspace.write_json(
        "deliveries.json",
        &json!([
            { "id": 11, "customer": "Ayse Yilmaz", "latitude": 41.01, "longitude": 29.0,
              "delivery_date": "2026-01-07" },
            { "id": 12, "customer": "Mehmet Kaya", "latitude": 41.005, "longitude": 29.0,
              "delivery_date": "2026-01-07", "status": "assigned", "is_priority": true },
            { "id": 13, "customer": "Elif Demir", "delivery_date": "2026-01-07",
              "status": "delivered" },
        ]),
    );
    let args = DeliveriesArgs {
        deliveries_path: Some(path),
        depot_latitude: Some(41.0),
        depot_longitude: Some(29.0),
        start_time: Some("08:30".to_owned()),
        ..DeliveriesArgs::default()
    };
    let mut stdout = Vec::new();
    run_deliveries_with(args, &GreedyOptimizerBuilder, &mut stdout).expect("deliveries succeed");

    let output = parse_output(&stdout);
    let plan = &output["2026-01-07"];
    assert_eq!(visited_ids(plan), vec![12, 11]);
    assert_eq!(plan["route"][1]["name"], "Mehmet Kaya");
    assert_eq!(plan["route"][1]["address"], "Address not specified");
    assert_eq!(plan["route"][0]["estimated_arrival"], "08:30");
}
