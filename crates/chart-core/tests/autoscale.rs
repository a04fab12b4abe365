// File: crates/chart-core/tests/autoscale.rs
// Purpose: Validate autoscale over mixed series types and annotations.

use chart_core::{Annotation, Chart, Series, ViewState};
use skia_safe::Color;

#[test]
fn autoscale_mixed_series() {
    let mut chart = Chart::new();

    // XY series
    chart.add_series(Series::line(vec![(0.0, 1.0), (5.0, 3.0)], Color::BLUE));
    // Bars at 0..=2 reaching 6.0
    chart.add_series(Series::bars(&[2.0, 6.0, 4.0], Color::GREEN));

    chart.autoscale_axes(0.0);

    // X spans line 0..5 and bars -0.4..2.4 => expect -0.4..5
    assert!((chart.x_axis.min - -0.4).abs() < 1e-9);
    assert!((chart.x_axis.max - 5.0).abs() < 1e-9);

    // Bars pull Y down to their zero baseline
    assert!(chart.y_axis.min.abs() < 1e-9);
    assert!((chart.y_axis.max - 6.0).abs() < 1e-9);
}

#[test]
fn bar_baseline_stays_flush_with_margin() {
    let mut chart = Chart::new();
    chart.add_series(Series::bars(&[100.0, 200.0], Color::GREEN));
    let view = ViewState::from_chart(&chart, 0.05);

    assert_eq!(view.y_min, 0.0);
    assert!((view.y_max - 210.0).abs() < 1e-9);
    // Category axis is padded on both sides
    assert!(view.x_min < -0.4 && view.x_max > 1.4);
}

#[test]
fn hbars_anchor_zero_on_x_and_annotations_extend_range() {
    let mut chart = Chart::new();
    chart.add_series(Series::hbars(&[45.0, 8.0], Color::GREEN));
    chart.annotate(Annotation::new(46.0, 0.0, "45"));
    let view = ViewState::from_chart(&chart, 0.0);

    assert_eq!(view.x_min, 0.0);
    assert!((view.x_max - 46.0).abs() < 1e-9);
    assert!((view.y_min - -0.4).abs() < 1e-9);
    assert!((view.y_max - 1.4).abs() < 1e-9);
}

#[test]
fn empty_chart_falls_back_to_unit_range() {
    let chart = Chart::new();
    let view = ViewState::from_chart(&chart, 0.05);
    assert_eq!(view, ViewState { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 });
}
