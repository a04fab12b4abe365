// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (figure units, default sizes, paddings).

/// Layout units per inch. Panels are laid out in these units and scaled at raster time.
pub const UNITS_PER_INCH: f32 = 100.0;
/// Output scale that turns layout units into 300 DPI pixels.
pub const PRINT_SCALE: f32 = 3.0;

/// Default single-chart figure width, in inches.
pub const WIDTH_IN: f32 = 10.24;
/// Default single-chart figure height, in inches.
pub const HEIGHT_IN: f32 = 6.4;

/// Margins between a panel's outer rect and its plot area, in layout units.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    /// Room for y tick labels and axis title on the left, panel title on top,
    /// x tick labels and axis title below.
    fn default() -> Self {
        Self::new(104, 24, 60, 76)
    }
}
