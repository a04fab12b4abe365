// File: crates/chart-core/src/chart.rs
// Summary: Plot panel model (axes, series, annotations, legend) and its Skia drawing pipeline.

use skia_safe as skia;

use crate::error::RenderError;
use crate::figure::Figure;
use crate::geometry::RectF;
use crate::scale::PlotScales;
use crate::series::{LineStyle, Marker, Series, SeriesType};
use crate::text::{HAlign, TextShaper, VAlign};
use crate::theme::{FontSizes, Theme};
use crate::types::{Insets, HEIGHT_IN, WIDTH_IN};
use crate::view::ViewState;
use crate::Axis;

pub struct RenderOptions {
    /// Output pixels per layout unit (layout is 100 units per inch).
    pub scale: f32,
    pub theme: Theme,
    /// Skip all text; keeps pixel output independent of installed fonts.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}

/// Shared state for drawing panels on one canvas.
pub(crate) struct DrawContext<'a> {
    pub theme: &'a Theme,
    pub shaper: &'a TextShaper,
    pub draw_labels: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridLines {
    None,
    X,
    Y,
    Both,
}

impl GridLines {
    fn x(self) -> bool { matches!(self, GridLines::X | GridLines::Both) }
    fn y(self) -> bool { matches!(self, GridLines::Y | GridLines::Both) }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendLoc {
    UpperLeft,
    LowerRight,
}

/// Text placed at data coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub h: HAlign,
    pub v: VAlign,
    pub bold: bool,
}

impl Annotation {
    /// Bold label centered horizontally, sitting on top of `(x, y)`.
    pub fn new(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self { x, y, text: text.into(), h: HAlign::Center, v: VAlign::Bottom, bold: true }
    }

    pub fn aligned(mut self, h: HAlign, v: VAlign) -> Self {
        self.h = h;
        self.v = v;
        self
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub grid: GridLines,
    pub annotations: Vec<Annotation>,
    pub legend: Option<LegendLoc>,
    pub insets: Insets,
    pub fonts: FontSizes,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::new("X", 0.0, 10.0),
            y_axis: Axis::new("Y", 0.0, 100.0),
            grid: GridLines::Both,
            annotations: Vec::new(),
            legend: None,
            insets: Insets::default(),
            fonts: FontSizes::panel(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn annotate(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    /// Fit both axis ranges to the data (see [`ViewState::from_chart`]).
    /// Tick settings are left untouched.
    pub fn autoscale_axes(&mut self, margin: f64) {
        ViewState::from_chart(self, margin).apply_to_chart(self);
    }

    /// Render this chart alone on a default-size figure and return PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
        Figure::single(WIDTH_IN, HEIGHT_IN, self.clone()).render_to_png_bytes(opts)
    }

    pub(crate) fn draw(&self, canvas: &skia::Canvas, rect: RectF, ctx: &DrawContext) {
        draw_title(canvas, ctx, &rect, &self.title, self.fonts.title);

        let plot = rect.inset(&self.insets);
        let scales = PlotScales::new(&plot, &self.x_axis, &self.y_axis);

        draw_grid(canvas, ctx.theme, &plot, &scales, self);

        canvas.save();
        canvas.clip_rect(plot.to_skia(), None, Some(true));
        for s in &self.series {
            match s.series_type {
                SeriesType::Line => draw_line_series(canvas, &scales, s),
                SeriesType::Bar => draw_bar_series(canvas, &scales, s, false),
                SeriesType::HBar => draw_bar_series(canvas, &scales, s, true),
            }
        }
        canvas.restore();

        draw_axes(canvas, ctx, &rect, &plot, &scales, self);

        if ctx.draw_labels {
            for a in &self.annotations {
                ctx.shaper.draw(
                    canvas,
                    &a.text,
                    scales.point(a.x, a.y),
                    self.fonts.annotation,
                    ctx.theme.annotation,
                    a.bold,
                    a.h,
                    a.v,
                );
            }
        }

        if let Some(loc) = self.legend {
            draw_legend(canvas, ctx, &plot, loc, self);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

/// Bold centered title at the top of `rect`; returns the vertical space it takes.
pub(crate) fn draw_title(canvas: &skia::Canvas, ctx: &DrawContext, rect: &RectF, title: &str, size: f32) -> f32 {
    let reserved = size * 1.3 + 16.0;
    if title.is_empty() || !ctx.draw_labels {
        return reserved;
    }
    ctx.shaper.draw(
        canvas,
        title,
        (rect.center_x(), rect.top + 4.0),
        size,
        ctx.theme.title,
        true,
        HAlign::Center,
        VAlign::Top,
    );
    reserved
}

fn fill_paint(color: skia::Color, alpha: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint.set_alpha_f(alpha * color.a() as f32 / 255.0);
    paint
}

fn stroke_paint(color: skia::Color, alpha: f32, width: f32) -> skia::Paint {
    let mut paint = fill_paint(color, alpha);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

fn draw_grid(canvas: &skia::Canvas, theme: &Theme, plot: &RectF, scales: &PlotScales, chart: &Chart) {
    let mut paint = stroke_paint(theme.grid, theme.grid_alpha, 1.0);
    paint.set_path_effect(skia::PathEffect::dash(&[4.0, 3.0], 0.0));

    if chart.grid.x() {
        for (v, _) in chart.x_axis.tick_marks() {
            let x = scales.x.to_px(v);
            canvas.draw_line((x, plot.top), (x, plot.bottom), &paint);
        }
    }
    if chart.grid.y() {
        for (v, _) in chart.y_axis.tick_marks() {
            let y = scales.y.to_px(v);
            canvas.draw_line((plot.left, y), (plot.right, y), &paint);
        }
    }
}

fn draw_axes(
    canvas: &skia::Canvas,
    ctx: &DrawContext,
    rect: &RectF,
    plot: &RectF,
    scales: &PlotScales,
    chart: &Chart,
) {
    let theme = ctx.theme;
    let axis_paint = stroke_paint(theme.axis_line, 1.0, 1.2);
    canvas.draw_rect(plot.to_skia(), &axis_paint);

    let tick_len = 5.0;
    let x_ticks = chart.x_axis.tick_marks();
    let y_ticks = chart.y_axis.tick_marks();
    for (v, _) in &x_ticks {
        let x = scales.x.to_px(*v);
        canvas.draw_line((x, plot.bottom), (x, plot.bottom + tick_len), &axis_paint);
    }
    for (v, _) in &y_ticks {
        let y = scales.y.to_px(*v);
        canvas.draw_line((plot.left - tick_len, y), (plot.left, y), &axis_paint);
    }

    if !ctx.draw_labels {
        return;
    }

    let size = chart.fonts.tick;
    for (v, label) in &x_ticks {
        let anchor = (scales.x.to_px(*v), plot.bottom + tick_len + 3.0);
        if chart.x_axis.tick_rotation == 0.0 {
            ctx.shaper.draw(canvas, label, anchor, size, theme.tick, false, HAlign::Center, VAlign::Top);
        } else {
            ctx.shaper.draw_rotated(
                canvas, label, anchor, size, theme.tick, false,
                chart.x_axis.tick_rotation, HAlign::Right, VAlign::Top,
            );
        }
    }
    for (v, label) in &y_ticks {
        let anchor = (plot.left - tick_len - 3.0, scales.y.to_px(*v));
        ctx.shaper.draw_rotated(
            canvas, label, anchor, size, theme.tick, false,
            chart.y_axis.tick_rotation, HAlign::Right, VAlign::Center,
        );
    }

    let label_size = chart.fonts.label;
    if !chart.x_axis.label.is_empty() {
        ctx.shaper.draw(
            canvas, &chart.x_axis.label, (plot.center_x(), rect.bottom), label_size,
            theme.axis_label, false, HAlign::Center, VAlign::Bottom,
        );
    }
    if !chart.y_axis.label.is_empty() {
        ctx.shaper.draw_rotated(
            canvas, &chart.y_axis.label, (rect.left, plot.center_y()), label_size,
            theme.axis_label, false, 90.0, HAlign::Center, VAlign::Top,
        );
    }
}

fn draw_marker(canvas: &skia::Canvas, marker: Marker, (x, y): (f32, f32), size: f32, paint: &skia::Paint) {
    let half = size * 0.5;
    match marker {
        Marker::None => {}
        Marker::Circle => { canvas.draw_circle((x, y), half, paint); }
        Marker::Square => { canvas.draw_rect(skia::Rect::from_xywh(x - half, y - half, size, size), paint); }
    }
}

fn line_paint(series: &Series) -> skia::Paint {
    let mut stroke = stroke_paint(series.color, series.alpha, series.stroke_width);
    stroke.set_stroke_join(skia::paint::Join::Round);
    if series.line_style == LineStyle::Dashed {
        let w = series.stroke_width.max(1.0);
        stroke.set_path_effect(skia::PathEffect::dash(&[3.7 * w, 1.6 * w], 0.0));
    }
    stroke
}

fn draw_line_series(canvas: &skia::Canvas, scales: &PlotScales, series: &Series) {
    let data = &series.data_xy;
    if data.is_empty() {
        return;
    }

    if data.len() >= 2 {
        let mut path = skia::Path::new();
        let (x0, y0) = data[0];
        path.move_to(scales.point(x0, y0));
        for &(x, y) in data.iter().skip(1) {
            path.line_to(scales.point(x, y));
        }
        canvas.draw_path(&path, &line_paint(series));
    }

    if series.marker != Marker::None {
        let fill = fill_paint(series.color, series.alpha);
        for &(x, y) in data {
            draw_marker(canvas, series.marker, scales.point(x, y), series.marker_size, &fill);
        }
    }
}

fn draw_bar_series(canvas: &skia::Canvas, scales: &PlotScales, series: &Series, horizontal: bool) {
    let half = series.bar_width * 0.5;

    for (i, &(pos, v)) in series.data_xy.iter().enumerate() {
        let (lo, hi) = (v.min(0.0), v.max(0.0));
        let rect = if horizontal {
            skia::Rect::from_ltrb(
                scales.x.to_px(lo),
                scales.y.to_px(pos + half),
                scales.x.to_px(hi),
                scales.y.to_px(pos - half),
            )
        } else {
            skia::Rect::from_ltrb(
                scales.x.to_px(pos - half),
                scales.y.to_px(hi),
                scales.x.to_px(pos + half),
                scales.y.to_px(lo),
            )
        };
        canvas.draw_rect(rect, &fill_paint(series.color_at(i), series.alpha));
        if let Some(edge) = series.edge_at(i) {
            canvas.draw_rect(rect, &stroke_paint(edge, series.alpha, 1.0));
        }
    }
}

fn draw_legend(canvas: &skia::Canvas, ctx: &DrawContext, plot: &RectF, loc: LegendLoc, chart: &Chart) {
    let entries: Vec<(&Series, &str)> = chart
        .series
        .iter()
        .filter_map(|s| s.label.as_deref().map(|l| (s, l)))
        .collect();
    if entries.is_empty() {
        return;
    }

    let size = chart.fonts.legend;
    let pad = 8.0;
    let sample = 32.0;
    let gap = 8.0;
    let row_h = size * 1.5;
    let text_w = if ctx.draw_labels {
        entries
            .iter()
            .map(|(_, l)| ctx.shaper.measure(l, size, false).0)
            .fold(0.0f32, f32::max)
    } else {
        0.0
    };
    let w = pad * 2.0 + sample + gap + text_w;
    let h = pad * 2.0 + row_h * entries.len() as f32;
    let margin = 10.0;
    let (left, top) = match loc {
        LegendLoc::UpperLeft => (plot.left + margin, plot.top + margin),
        LegendLoc::LowerRight => (plot.right - margin - w, plot.bottom - margin - h),
    };
    let frame = RectF::from_ltwh(left, top, w, h).to_skia();
    canvas.draw_round_rect(frame, 4.0, 4.0, &fill_paint(ctx.theme.legend_background, 1.0));
    canvas.draw_round_rect(frame, 4.0, 4.0, &stroke_paint(ctx.theme.legend_frame, 1.0, 1.0));

    for (i, (s, label)) in entries.iter().enumerate() {
        let cy = top + pad + row_h * (i as f32 + 0.5);
        let x0 = left + pad;
        match s.series_type {
            SeriesType::Line => {
                canvas.draw_line((x0, cy), (x0 + sample, cy), &line_paint(s));
                draw_marker(canvas, s.marker, (x0 + sample * 0.5, cy), s.marker_size, &fill_paint(s.color, s.alpha));
            }
            SeriesType::Bar | SeriesType::HBar => {
                let r = skia::Rect::from_xywh(x0 + sample * 0.25, cy - size * 0.35, sample * 0.5, size * 0.7);
                canvas.draw_rect(r, &fill_paint(s.color, s.alpha));
            }
        }
        if ctx.draw_labels {
            ctx.shaper.draw(
                canvas, label, (x0 + sample + gap, cy), size,
                ctx.theme.axis_label, false, HAlign::Left, VAlign::Center,
            );
        }
    }
}
