// File: crates/chart-core/tests/indicator.rs
// Purpose: Least-squares fit and the trend-line indicator.

use chart_core::indicator::least_squares;
use chart_core::series::SeriesType;
use chart_core::{Indicator, LinearTrend, Series};
use skia_safe::Color;

#[test]
fn least_squares_recovers_exact_line() {
    let data: Vec<(f64, f64)> = (0..30).map(|i| (i as f64, 2.5 * i as f64 + 100.0)).collect();
    let (slope, intercept) = least_squares(&data).expect("fit");
    assert!((slope - 2.5).abs() < 1e-9);
    assert!((intercept - 100.0).abs() < 1e-9);
}

#[test]
fn least_squares_fits_zigzag_points() {
    let data = vec![(0.0, 1.0), (1.0, 3.0), (2.0, 1.0), (3.0, 3.0)];
    let (slope, intercept) = least_squares(&data).expect("fit");
    // sxy = 2, sxx = 5 around the means (1.5, 2.0)
    assert!((slope - 0.4).abs() < 1e-9);
    assert!((intercept - 1.4).abs() < 1e-9);
}

#[test]
fn least_squares_degenerate_inputs() {
    assert!(least_squares(&[]).is_none());
    assert!(least_squares(&[(1.0, 2.0)]).is_none());
    assert!(least_squares(&[(1.0, 2.0), (1.0, 5.0)]).is_none());
}

#[test]
fn linear_trend_evaluates_at_input_x() {
    let input = Series::line(vec![(0.0, 10.0), (1.0, 12.0), (2.0, 14.0)], Color::BLUE);
    let trend = LinearTrend.compute(&input);
    assert_eq!(trend.series_type, SeriesType::Line);
    assert_eq!(trend.len(), 3);
    for (&(x, y), &(fx, fy)) in input.data_xy.iter().zip(&trend.data_xy) {
        assert_eq!(x, fx);
        assert!((y - fy).abs() < 1e-9);
    }
}
