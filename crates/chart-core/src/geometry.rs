// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for layout math.

use skia_safe as skia;

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn center_x(&self) -> f32 { (self.left + self.right) * 0.5 }
    pub fn center_y(&self) -> f32 { (self.top + self.bottom) * 0.5 }

    /// Shrink by `insets`; never inverts (collapses to a zero-size rect instead).
    pub fn inset(&self, insets: &Insets) -> Self {
        let left = self.left + insets.left as f32;
        let top = self.top + insets.top as f32;
        let right = (self.right - insets.right as f32).max(left);
        let bottom = (self.bottom - insets.bottom as f32).max(top);
        Self { left, top, right, bottom }
    }

    /// Shrink uniformly on all sides.
    pub fn pad(&self, amount: f32) -> Self {
        let a = amount.max(0.0) as u32;
        self.inset(&Insets::new(a, a, a, a))
    }

    /// Point at fractional coordinates: (0,0) is the bottom-left corner, (1,1) top-right.
    pub fn at_fraction(&self, fx: f32, fy: f32) -> (f32, f32) {
        (self.left + fx * self.width(), self.bottom - fy * self.height())
    }

    pub fn to_skia(&self) -> skia::Rect {
        skia::Rect::from_ltrb(self.left, self.top, self.right, self.bottom)
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
