// File: crates/chart-core/src/text_panel.rs
// Summary: Axis-free panel listing label/value pairs in two columns.

use skia_safe as skia;

use crate::chart::{draw_title, DrawContext};
use crate::geometry::RectF;
use crate::text::{HAlign, VAlign};
use crate::theme::FontSizes;

#[derive(Clone, Debug)]
pub struct TextPanel {
    pub title: String,
    pub rows: Vec<(String, String)>,
    /// Column positions as fractions of the panel width.
    pub label_x: f32,
    pub value_x: f32,
    /// Height fraction (from the bottom) of the first row, and the drop per row.
    pub first_row_y: f32,
    pub row_step: f32,
    pub value_color: skia::Color,
    pub fonts: FontSizes,
}

impl TextPanel {
    pub fn new(title: impl Into<String>, value_color: skia::Color) -> Self {
        Self {
            title: title.into(),
            rows: Vec::new(),
            label_x: 0.1,
            value_x: 0.7,
            first_row_y: 0.9,
            row_step: 0.15,
            value_color,
            fonts: FontSizes::panel(),
        }
    }

    pub fn add_row(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.rows.push((label.into(), value.into()));
    }

    /// Height fraction of each row, top to bottom in insertion order.
    pub fn row_positions(&self) -> Vec<f32> {
        (0..self.rows.len())
            .map(|i| self.first_row_y - self.row_step * i as f32)
            .collect()
    }

    pub(crate) fn draw(&self, canvas: &skia::Canvas, rect: RectF, ctx: &DrawContext) {
        let title_h = draw_title(canvas, ctx, &rect, &self.title, self.fonts.title);
        if !ctx.draw_labels {
            return;
        }
        let area = RectF::from_ltrb(rect.left, rect.top + title_h, rect.right, rect.bottom);
        let size = self.fonts.body;
        for ((label, value), fy) in self.rows.iter().zip(self.row_positions()) {
            let (lx, y) = area.at_fraction(self.label_x, fy);
            let (vx, _) = area.at_fraction(self.value_x, fy);
            ctx.shaper.draw(
                canvas, &format!("{label}:"), (lx, y), size,
                ctx.theme.axis_label, true, HAlign::Left, VAlign::Bottom,
            );
            ctx.shaper.draw(canvas, value, (vx, y), size, self.value_color, true, HAlign::Left, VAlign::Bottom);
        }
    }
}
