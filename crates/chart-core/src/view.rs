// File: crates/chart-core/src/view.rs
// Visible data ranges and autoscale for a plot panel.

use crate::series::SeriesType;
use crate::Chart;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Data bounds of every series and annotation anchor, padded by `margin`
    /// (a fraction of each span). Bars keep their zero baseline flush with the
    /// axis instead of padding past it.
    pub fn from_chart(chart: &Chart, margin: f64) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        let mut include = |x: f64, y: f64| {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        };
        let mut zero_x = false;
        let mut zero_y = false;

        for s in &chart.series {
            let half = s.bar_width * 0.5;
            match s.series_type {
                SeriesType::Line => {
                    for &(x, y) in &s.data_xy { include(x, y); }
                }
                SeriesType::Bar => {
                    for &(x, v) in &s.data_xy {
                        include(x - half, v);
                        include(x + half, 0.0);
                    }
                    zero_y |= !s.data_xy.is_empty();
                }
                SeriesType::HBar => {
                    for &(y, v) in &s.data_xy {
                        include(v, y - half);
                        include(0.0, y + half);
                    }
                    zero_x |= !s.data_xy.is_empty();
                }
            }
        }
        for a in &chart.annotations {
            include(a.x, a.y);
        }

        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };
        }
        if (x_max - x_min).abs() < 1e-9 { x_max = x_min + 1.0; }
        if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }

        let xm = (x_max - x_min) * margin;
        let ym = (y_max - y_min) * margin;
        let pad = |lo: f64, hi: f64, m: f64, sticky_zero: bool| {
            let lo = if sticky_zero && lo == 0.0 { lo } else { lo - m };
            let hi = if sticky_zero && hi == 0.0 { hi } else { hi + m };
            (lo, hi)
        };
        let (x_min, x_max) = pad(x_min, x_max, xm, zero_x);
        let (y_min, y_max) = pad(y_min, y_max, ym, zero_y);
        Self { x_min, x_max, y_min, y_max }
    }

    pub fn apply_to_chart(&self, chart: &mut Chart) {
        chart.x_axis.min = self.x_min;
        chart.x_axis.max = self.x_max;
        chart.y_axis.min = self.y_min;
        chart.y_axis.max = self.y_max;
    }
}
