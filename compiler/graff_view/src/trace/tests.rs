#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use graff_compile::compile;
use pretty_assertions::assert_eq;

use super::*;

fn small_view(width: u32) -> Viewport {
    // Column i samples x = i - 2; rows are one unit tall.
    Viewport::from_bounds((-2.0, f64::from(width) - 2.0), (-5.0, 5.0), width, 10).unwrap()
}

fn trace_source(source: &str, view: &Viewport) -> Curve {
    let program = compile(source, "x").unwrap();
    trace(&program, view, &mut Machine::new())
}

#[test]
fn continuous_curve_is_one_segment() {
    let view = Viewport::default();
    let curve = trace_source("sin(x)", &view);
    assert_eq!(curve.segments.len(), 1);
    assert_eq!(curve.point_count(), 800);
    assert_eq!(curve.segments[0].columns(), (0, 799));
}

#[test]
fn rows_follow_the_viewport() {
    let view = small_view(5);
    let curve = trace_source("x", &view);
    let rows: Vec<i64> = curve.segments[0].points().iter().map(|p| p.row).collect();
    // y = -2..=2 over a bottom edge at -5.
    assert_eq!(rows, vec![6, 5, 4, 3, 2]);
}

#[test]
fn nan_splits_the_curve() {
    // Columns sample x = -2, -1, 0, 1, 2; 1/x is undefined at column 2.
    let view = small_view(5);
    let curve = trace_source("1/x", &view);
    assert_eq!(curve.segments.len(), 2);
    assert_eq!(curve.segments[0].columns(), (0, 1));
    assert_eq!(curve.segments[1].columns(), (3, 4));
}

#[test]
fn single_point_runs_are_dropped() {
    // Defined only at x = 0, column 2.
    let view = small_view(5);
    let curve = trace_source("sqrt(0-x^2)", &view);
    assert_eq!(curve, Curve::default());
}

#[test]
fn nowhere_defined_is_empty() {
    let view = Viewport::default();
    let curve = trace_source("ln(0-abs(x)-1)", &view);
    assert!(curve.segments.is_empty());
}

#[test]
fn segments_hold_at_least_two_points() {
    let view = Viewport::default();
    let curve = trace_source("sqrt(sin(5*x))", &view);
    assert!(curve.segments.len() > 1);
    assert!(curve.segments.iter().all(|s| s.len() >= 2));
}

#[test]
fn machine_is_reused_across_traces() {
    let view = Viewport::default();
    let program = compile("x^2", "x").unwrap();
    let mut machine = Machine::new();
    let first = trace(&program, &view, &mut machine);
    let second = trace(&program, &view, &mut machine);
    assert_eq!(first, second);
}
