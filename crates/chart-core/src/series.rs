// File: crates/chart-core/src/series.rs
// Summary: Series model for lines, vertical bars, and horizontal bars with per-point styling.

use skia_safe as skia;

use crate::geometry::clamp;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Line,
    Bar,   // vertical bars: (category position, value)
    HBar,  // horizontal bars: (category position, value), category on the Y axis
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    None,
    Circle,
    Square,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

#[derive(Clone, Debug)]
pub struct Series {
    pub series_type: SeriesType,
    pub data_xy: Vec<(f64, f64)>,
    /// Base color; used wherever `point_colors` has no entry.
    pub color: skia::Color,
    /// Per-point fill override (bars).
    pub point_colors: Vec<skia::Color>,
    pub alpha: f32,
    pub stroke_width: f32,
    pub line_style: LineStyle,
    pub marker: Marker,
    /// Marker diameter/side, in layout units.
    pub marker_size: f32,
    /// Bar thickness in category units (1.0 = touching neighbours).
    pub bar_width: f64,
    /// Bar outline.
    pub edge: Option<skia::Color>,
    /// Per-point outline override (bars).
    pub point_edges: Vec<skia::Color>,
    /// Legend entry; unlabeled series stay out of the legend.
    pub label: Option<String>,
}

impl Series {
    pub fn new(series_type: SeriesType, color: skia::Color) -> Self {
        Self {
            series_type,
            data_xy: Vec::new(),
            color,
            point_colors: Vec::new(),
            alpha: 1.0,
            stroke_width: 2.0,
            line_style: LineStyle::Solid,
            marker: Marker::None,
            marker_size: 8.0,
            bar_width: 0.8,
            edge: None,
            point_edges: Vec::new(),
            label: None,
        }
    }

    pub fn with_data(series_type: SeriesType, data: Vec<(f64, f64)>, color: skia::Color) -> Self {
        Self { data_xy: data, ..Self::new(series_type, color) }
    }

    /// Connected line through `data`.
    pub fn line(data: Vec<(f64, f64)>, color: skia::Color) -> Self {
        Self::with_data(SeriesType::Line, data, color)
    }

    /// One vertical bar per value, at category positions 0, 1, 2, ...
    pub fn bars(values: &[f64], color: skia::Color) -> Self {
        Self::with_data(SeriesType::Bar, indexed(values), color)
    }

    /// One horizontal bar per value, at category positions 0, 1, 2, ... on the Y axis.
    pub fn hbars(values: &[f64], color: skia::Color) -> Self {
        Self::with_data(SeriesType::HBar, indexed(values), color)
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_point_colors(mut self, colors: Vec<skia::Color>) -> Self {
        self.point_colors = colors;
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = clamp(alpha, 0.0, 1.0);
        self
    }

    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width.max(0.0);
        self
    }

    pub fn dashed(mut self) -> Self {
        self.line_style = LineStyle::Dashed;
        self
    }

    pub fn with_marker(mut self, marker: Marker, size: f32) -> Self {
        self.marker = marker;
        self.marker_size = size.max(0.0);
        self
    }

    pub fn with_edge(mut self, color: skia::Color) -> Self {
        self.edge = Some(color);
        self
    }

    pub fn with_point_edges(mut self, colors: Vec<skia::Color>) -> Self {
        self.point_edges = colors;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Fill color of point `i` (override if present, else the base color).
    pub fn color_at(&self, i: usize) -> skia::Color {
        self.point_colors.get(i).copied().unwrap_or(self.color)
    }

    /// Outline color of point `i`, if it has one.
    pub fn edge_at(&self, i: usize) -> Option<skia::Color> {
        self.point_edges.get(i).copied().or(self.edge)
    }

    pub fn len(&self) -> usize { self.data_xy.len() }

    pub fn is_empty(&self) -> bool { self.data_xy.is_empty() }
}

fn indexed(values: &[f64]) -> Vec<(f64, f64)> {
    values.iter().enumerate().map(|(i, &v)| (i as f64, v)).collect()
}
