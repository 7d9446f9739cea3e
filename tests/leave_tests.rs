mod common;
use common::{PERF_HEADER, PERF_ROWS, STATUS_HEADER, STATUS_ROWS, csv_text};

use rtaboard::core::leave::{LeaveSet, apply_leave_filter, candidates};
use rtaboard::core::metrics::{MetricPolicy, build_dataset};
use rtaboard::input::reader::read_grid_from;
use rtaboard::models::metrics::DerivedMetrics;

fn dataset() -> Vec<DerivedMetrics> {
    let perf = read_grid_from(csv_text(PERF_HEADER, PERF_ROWS).as_bytes()).expect("perf");
    let status = read_grid_from(csv_text(STATUS_HEADER, STATUS_ROWS).as_bytes()).expect("status");
    build_dataset(&perf, &status, &MetricPolicy::default())
}

fn names(rows: &[&DerivedMetrics]) -> Vec<String> {
    rows.iter().map(|r| r.agent_name.clone()).collect()
}

#[test]
fn test_filter_hides_agents_on_leave() {
    let data = dataset();
    let leave: LeaveSet = ["Bob", "Carol"].into_iter().collect();

    let visible = apply_leave_filter(&data, &leave);

    assert_eq!(names(&visible), ["Alice", "Dave"]);
}

#[test]
fn test_filter_does_not_touch_dataset() {
    let data = dataset();
    let before = data.clone();
    let leave: LeaveSet = ["Alice"].into_iter().collect();

    let _ = apply_leave_filter(&data, &leave);
    let _ = apply_leave_filter(&data, &LeaveSet::new());

    assert_eq!(data, before);
}

#[test]
fn test_filter_keeps_ranking_order() {
    let data = dataset();
    let leave: LeaveSet = ["Bob"].into_iter().collect();

    let visible = apply_leave_filter(&data, &leave);
    assert!(
        visible
            .windows(2)
            .all(|w| w[0].non_productive >= w[1].non_productive)
    );
}

#[test]
fn test_empty_leave_set_shows_everything() {
    let data = dataset();
    let visible = apply_leave_filter(&data, &LeaveSet::new());
    assert_eq!(visible.len(), data.len());
}

#[test]
fn test_unknown_agents_on_leave_are_harmless() {
    let data = dataset();
    let leave: LeaveSet = ["Nobody"].into_iter().collect();

    assert_eq!(apply_leave_filter(&data, &leave).len(), data.len());
    assert!(leave.contains("Nobody"));
}

#[test]
fn test_leave_set_operations() {
    let mut leave = LeaveSet::new();

    assert!(leave.add("  Bob "));
    assert!(!leave.add("Bob"));
    assert!(!leave.add("   "));
    assert!(leave.add("alice"));
    assert!(leave.add("Carol"));

    assert!(leave.contains("Bob"));
    assert_eq!(leave.sorted(), ["alice", "Bob", "Carol"]);

    assert!(leave.remove(" Bob"));
    assert!(!leave.remove("Bob"));
    assert_eq!(leave.len(), 2);

    leave.clear();
    assert!(leave.is_empty());
}

#[test]
fn test_candidates_are_sorted_and_distinct() {
    let data = dataset();
    assert_eq!(candidates(&data), ["Alice", "Bob", "Carol", "Dave"]);
    assert!(candidates(&[]).is_empty());
}
