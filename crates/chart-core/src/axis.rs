// File: crates/chart-core/src/axis.rs
// Summary: Axis model with label, range, tick placement, and tick label rotation.

use crate::grid::{nice_step, nice_ticks};
use crate::number::format_tick;

/// How tick positions and labels are chosen.
#[derive(Clone, Debug, PartialEq)]
pub enum Ticks {
    /// Nice-number ticks across the visible range, about `target` of them.
    Auto { target: usize },
    /// Exactly these (position, label) pairs; positions outside the range are skipped.
    Fixed(Vec<(f64, String)>),
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub ticks: Ticks,
    /// Counter-clockwise rotation of tick labels, in degrees.
    pub tick_rotation: f32,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, ticks: Ticks::Auto { target: 6 }, tick_rotation: 0.0 }
    }

    /// Axis with one tick per category at positions 0, 1, 2, ...
    pub fn categorical<S: AsRef<str>>(label: impl Into<String>, names: &[S]) -> Self {
        let ticks = names
            .iter()
            .enumerate()
            .map(|(i, n)| (i as f64, n.as_ref().to_string()))
            .collect();
        let n = names.len().max(1) as f64;
        Self::new(label, -0.5, n - 0.5).with_ticks(ticks)
    }

    pub fn with_ticks(mut self, ticks: Vec<(f64, String)>) -> Self {
        self.ticks = Ticks::Fixed(ticks);
        self
    }

    pub fn rotated(mut self, degrees: f32) -> Self {
        self.tick_rotation = degrees;
        self
    }

    pub fn span(&self) -> f64 { self.max - self.min }

    #[inline]
    pub fn contains(&self, v: f64) -> bool {
        let eps = self.span().abs() * 1e-9;
        v >= self.min - eps && v <= self.max + eps
    }

    /// Resolved (position, label) pairs inside the current range.
    pub fn tick_marks(&self) -> Vec<(f64, String)> {
        match &self.ticks {
            Ticks::Auto { target } => {
                let step = nice_step(self.span(), *target);
                nice_ticks(self.min, self.max, *target)
                    .into_iter()
                    .map(|v| (v, format_tick(v, step)))
                    .collect()
            }
            Ticks::Fixed(list) => list.iter().filter(|(v, _)| self.contains(*v)).cloned().collect(),
        }
    }
}
