// File: crates/plot-core/tests/ticks.rs
// Purpose: Tick locator, tick label formatting and axis autoscale margins.

use plot_core::grid::{format_ticks, nice_step, nice_ticks};
use plot_core::{Axis, Figure, Series};

fn approx(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-9)
}

#[test]
fn nice_step_picks_1_2_2_5_5() {
    assert!((nice_step(0.489) - 0.5).abs() < 1e-12);
    assert!((nice_step(0.11) - 0.2).abs() < 1e-12);
    assert!((nice_step(2.2) - 2.5).abs() < 1e-12);
    assert!((nice_step(7.0) - 10.0).abs() < 1e-12);
    assert!((nice_step(1.0) - 1.0).abs() < 1e-12);
}

#[test]
fn ticks_for_default_view() {
    // x view 0.8..5.2 and y view 1.85..5.15 for the five point dataset
    assert!(approx(&nice_ticks(0.8, 5.2, 9), &[1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0, 4.5, 5.0]));
    assert!(approx(&nice_ticks(1.85, 5.15, 9), &[2.0, 2.5, 3.0, 3.5, 4.0, 4.5, 5.0]));
}

#[test]
fn ticks_empty_for_degenerate_range() {
    assert!(nice_ticks(1.0, 1.0, 9).is_empty());
    assert!(nice_ticks(2.0, 1.0, 9).is_empty());
    assert!(nice_ticks(f64::NAN, 1.0, 9).is_empty());
}

#[test]
fn labels_use_common_precision() {
    assert_eq!(format_ticks(&[1.0, 1.5, 2.0]), ["1.0", "1.5", "2.0"]);
    assert_eq!(format_ticks(&[0.0, 1.0, 2.0]), ["0", "1", "2"]);
    assert_eq!(format_ticks(&[0.0, 0.25, 0.5]), ["0.00", "0.25", "0.50"]);
    assert!(format_ticks(&[]).is_empty());
}

#[test]
fn axis_fit_adds_margin() {
    let mut a = Axis::new("X", 0.0, 1.0);
    a.fit(1.0, 5.0, 0.05);
    assert!((a.min - 0.8).abs() < 1e-9);
    assert!((a.max - 5.2).abs() < 1e-9);

    a.fit(3.0, 3.0, 0.0);
    assert!(a.max > a.min);
}

#[test]
fn autoscale_covers_all_series() {
    let mut fig = Figure::default();
    fig.add_series(Series::with_data(vec![(0.0, 1.0), (5.0, 3.0)]));
    fig.add_series(Series::with_data(vec![(2.0, -1.0), (3.0, 6.0)]));
    fig.autoscale_axes(0.0);
    assert!(fig.x_axis.min <= 0.0 + 1e-9);
    assert!(fig.x_axis.max >= 5.0 - 1e-9);
    assert!(fig.y_axis.min <= -1.0 + 1e-9);
    assert!(fig.y_axis.max >= 6.0 - 1e-9);
}
