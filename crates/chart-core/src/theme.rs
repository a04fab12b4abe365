// File: crates/chart-core/src/theme.rs
// Summary: Rendering colors, font sizes, and hex color parsing.

use skia_safe as skia;

use crate::error::RenderError;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    /// Opacity applied to grid lines (0..=1).
    pub grid_alpha: f32,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub annotation: skia::Color,
    pub legend_frame: skia::Color,
    pub legend_background: skia::Color,
}

impl Theme {
    /// White, print-friendly theme used for exported reports.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::WHITE,
            grid: skia::Color::from_rgb(0xb0, 0xb0, 0xb0),
            grid_alpha: 0.3,
            axis_line: skia::Color::from_rgb(0x20, 0x20, 0x20),
            axis_label: skia::Color::from_rgb(0x10, 0x10, 0x10),
            tick: skia::Color::from_rgb(0x30, 0x30, 0x30),
            title: skia::Color::BLACK,
            annotation: skia::Color::from_rgb(0x10, 0x10, 0x10),
            legend_frame: skia::Color::from_rgb(0xcc, 0xcc, 0xcc),
            legend_background: skia::Color::from_argb(204, 255, 255, 255),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Text sizes for one panel, in layout units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontSizes {
    pub title: f32,
    pub label: f32,
    pub tick: f32,
    pub annotation: f32,
    pub legend: f32,
    pub body: f32,
}

impl FontSizes {
    /// Sizes for a panel inside a multi-panel figure.
    pub const fn panel() -> Self {
        Self { title: 22.0, label: 16.5, tick: 13.5, annotation: 14.0, legend: 16.5, body: 19.5 }
    }

    /// Sizes for a chart exported on its own.
    pub const fn standalone() -> Self {
        Self { title: 25.0, label: 19.5, tick: 15.0, annotation: 16.5, legend: 16.5, body: 19.5 }
    }
}

impl Default for FontSizes {
    fn default() -> Self { Self::panel() }
}

/// Parse `#RRGGBB` (leading `#` optional) into an opaque color.
pub fn hex_color(literal: &str) -> Result<skia::Color, RenderError> {
    let digits = literal.strip_prefix('#').unwrap_or(literal);
    let bad = || RenderError::InvalidColor(literal.to_string());
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(bad());
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| bad());
    Ok(skia::Color::from_rgb(channel(0)?, channel(2)?, channel(4)?))
}
