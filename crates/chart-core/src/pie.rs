// File: crates/chart-core/src/pie.rs
// Summary: Pie chart panel: proportional wedges with outside labels and inside percentages.

use skia_safe as skia;

use crate::chart::{draw_title, DrawContext};
use crate::geometry::RectF;
use crate::text::{HAlign, VAlign};
use crate::theme::FontSizes;

#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub color: skia::Color,
}

#[derive(Clone, Debug)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
    /// Where the first wedge starts, in degrees counter-clockwise from 3 o'clock.
    pub start_angle: f64,
    /// Pie radius as a fraction of half the available square.
    pub radius_fraction: f32,
    pub fonts: FontSizes,
}

impl PieChart {
    /// Empty pie starting at 12 o'clock.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slices: Vec::new(),
            start_angle: 90.0,
            radius_fraction: 0.72,
            fonts: FontSizes::panel(),
        }
    }

    pub fn add_slice(&mut self, label: impl Into<String>, value: f64, color: skia::Color) {
        self.slices.push(PieSlice { label: label.into(), value, color });
    }

    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value.max(0.0)).sum()
    }

    /// Share of each slice in percent; all zeros when the total is not positive.
    pub fn percentages(&self) -> Vec<f64> {
        let total = self.total();
        self.slices
            .iter()
            .map(|s| if total > 0.0 { 100.0 * s.value.max(0.0) / total } else { 0.0 })
            .collect()
    }

    /// Percentages formatted to one decimal place, e.g. "28.0%".
    pub fn percent_labels(&self) -> Vec<String> {
        self.percentages().iter().map(|p| format!("{p:.1}%")).collect()
    }

    /// (start, sweep) per slice in degrees, counter-clockwise from 3 o'clock.
    pub fn wedge_angles(&self) -> Vec<(f64, f64)> {
        let mut start = self.start_angle;
        self.percentages()
            .into_iter()
            .map(|p| {
                let sweep = p * 3.6;
                let wedge = (start, sweep);
                start += sweep;
                wedge
            })
            .collect()
    }

    pub(crate) fn draw(&self, canvas: &skia::Canvas, rect: RectF, ctx: &DrawContext) {
        let title_h = draw_title(canvas, ctx, &rect, &self.title, self.fonts.title);
        let area = RectF::from_ltrb(rect.left, rect.top + title_h, rect.right, rect.bottom);
        let r = area.width().min(area.height()) * 0.5 * self.radius_fraction;
        if r <= 0.0 {
            return;
        }
        let (cx, cy) = (area.center_x(), area.center_y());
        let oval = skia::Rect::from_ltrb(cx - r, cy - r, cx + r, cy + r);

        let angles = self.wedge_angles();
        for (slice, &(start, sweep)) in self.slices.iter().zip(&angles) {
            let mut paint = skia::Paint::default();
            paint.set_anti_alias(true);
            paint.set_style(skia::paint::Style::Fill);
            paint.set_color(slice.color);
            // Skia measures angles clockwise (Y down); negate for counter-clockwise.
            canvas.draw_arc(oval, -(start as f32), -(sweep as f32), true, &paint);
        }

        if !ctx.draw_labels {
            return;
        }
        let size = self.fonts.annotation;
        for ((slice, &(start, sweep)), pct) in self.slices.iter().zip(&angles).zip(self.percent_labels()) {
            let mid = (start + sweep * 0.5).to_radians();
            let (c, s) = (mid.cos() as f32, mid.sin() as f32);
            let h = if c >= 0.0 { HAlign::Left } else { HAlign::Right };
            ctx.shaper.draw(
                canvas, &slice.label, (cx + 1.1 * r * c, cy - 1.1 * r * s), size,
                ctx.theme.axis_label, false, h, VAlign::Center,
            );
            ctx.shaper.draw(
                canvas, &pct, (cx + 0.6 * r * c, cy - 0.6 * r * s), size,
                ctx.theme.axis_label, false, HAlign::Center, VAlign::Center,
            );
        }
    }
}
