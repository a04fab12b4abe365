// File: crates/chart-core/src/scale.rs
// Summary: Linear value-to-pixel transforms for the X and Y axes of a plot area.

use crate::geometry::RectF;
use crate::Axis;

/// Maps a value range onto a pixel range. The pixel range may be inverted
/// (Y grows downward on screen while values grow upward).
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub vmin: f64,
    pub vmax: f64,
    pub px_at_min: f32,
    pub px_at_max: f32,
}

impl LinearScale {
    pub fn new(vmin: f64, vmax: f64, px_at_min: f32, px_at_max: f32) -> Self {
        let mut s = Self { vmin, vmax, px_at_min, px_at_max };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }
    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = (v - self.vmin) / (self.vmax - self.vmin);
        self.px_at_min + t as f32 * (self.px_at_max - self.px_at_min)
    }
}

/// X and Y scales bound to one plot rect.
#[derive(Clone, Copy, Debug)]
pub struct PlotScales {
    pub x: LinearScale,
    pub y: LinearScale,
}

impl PlotScales {
    pub fn new(plot: &RectF, x_axis: &Axis, y_axis: &Axis) -> Self {
        Self {
            x: LinearScale::new(x_axis.min, x_axis.max, plot.left, plot.right),
            y: LinearScale::new(y_axis.min, y_axis.max, plot.bottom, plot.top),
        }
    }
    #[inline]
    pub fn point(&self, x: f64, y: f64) -> (f32, f32) {
        (self.x.to_px(x), self.y.to_px(y))
    }
}
