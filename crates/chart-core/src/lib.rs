// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the figure/panel model and PNG rendering.

pub mod axis;
pub mod chart;
pub mod error;
pub mod figure;
pub mod geometry;
pub mod grid;
pub mod indicator;
pub mod number;
pub mod pie;
pub mod scale;
pub mod series;
pub mod text;
pub mod text_panel;
pub mod theme;
pub mod types;
pub mod view;

pub use axis::Axis;
pub use chart::{Annotation, Chart, GridLines, LegendLoc, RenderOptions};
pub use error::RenderError;
pub use figure::{Figure, Panel};
pub use indicator::{Indicator, LinearTrend};
pub use pie::{PieChart, PieSlice};
pub use series::{LineStyle, Marker, Series, SeriesType};
pub use text::{HAlign, TextShaper, VAlign};
pub use text_panel::TextPanel;
pub use theme::{FontSizes, Theme};
pub use types::Insets;
pub use view::ViewState;
