// File: crates/chart-core/src/indicator.rs
// Summary: Derived-series indicators; least-squares trend line over an XY series.

use crate::series::{Series, SeriesType};

/// Indicator transforms an input series into a derived Line series.
pub trait Indicator {
    fn compute(&self, input: &Series) -> Series;
}

/// Ordinary least-squares fit `y = slope * x + intercept`.
/// Returns `None` for fewer than two points or when every x is identical.
pub fn least_squares(data: &[(f64, f64)]) -> Option<(f64, f64)> {
    if data.len() < 2 { return None; }
    let n = data.len() as f64;
    let mean_x = data.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = data.iter().map(|p| p.1).sum::<f64>() / n;
    let mut sxy = 0.0f64;
    let mut sxx = 0.0f64;
    for &(x, y) in data {
        let dx = x - mean_x;
        sxy += dx * (y - mean_y);
        sxx += dx * dx;
    }
    if sxx.abs() < 1e-12 { return None; }
    let slope = sxy / sxx;
    Some((slope, mean_y - slope * mean_x))
}

/// Best-fit straight line evaluated at every x of the input.
/// Inherits the input's color; callers restyle it as needed.
pub struct LinearTrend;

impl Indicator for LinearTrend {
    fn compute(&self, input: &Series) -> Series {
        let fitted = match least_squares(&input.data_xy) {
            Some((slope, intercept)) => input
                .data_xy
                .iter()
                .map(|&(x, _)| (x, slope * x + intercept))
                .collect(),
            None => Vec::new(),
        };
        Series::with_data(SeriesType::Line, fitted, input.color)
    }
}
