// File: crates/chart-core/src/figure.rs
// Summary: Figure (grid of panels) and headless PNG rendering using Skia CPU raster surfaces.

use std::path::Path;

use skia_safe as skia;
use tracing::{debug, warn};

use crate::chart::{Chart, DrawContext, RenderOptions};
use crate::error::RenderError;
use crate::geometry::RectF;
use crate::pie::PieChart;
use crate::text::TextShaper;
use crate::text_panel::TextPanel;
use crate::types::UNITS_PER_INCH;

/// Anything that can occupy one cell of a figure.
#[derive(Clone, Debug)]
pub enum Panel {
    Plot(Chart),
    Pie(PieChart),
    Text(TextPanel),
}

impl Panel {
    pub fn title(&self) -> &str {
        match self {
            Panel::Plot(c) => &c.title,
            Panel::Pie(p) => &p.title,
            Panel::Text(t) => &t.title,
        }
    }

    fn draw(&self, canvas: &skia::Canvas, rect: RectF, ctx: &DrawContext) {
        match self {
            Panel::Plot(c) => c.draw(canvas, rect, ctx),
            Panel::Pie(p) => p.draw(canvas, rect, ctx),
            Panel::Text(t) => t.draw(canvas, rect, ctx),
        }
    }
}

impl From<Chart> for Panel {
    fn from(c: Chart) -> Self { Panel::Plot(c) }
}

impl From<PieChart> for Panel {
    fn from(p: PieChart) -> Self { Panel::Pie(p) }
}

impl From<TextPanel> for Panel {
    fn from(t: TextPanel) -> Self { Panel::Text(t) }
}

/// A canvas sized in inches, split into `rows x cols` equal cells filled row-major.
#[derive(Clone, Debug)]
pub struct Figure {
    pub width_in: f32,
    pub height_in: f32,
    pub rows: usize,
    pub cols: usize,
    /// Space kept clear around each panel, in layout units.
    pub padding: f32,
    pub panels: Vec<Panel>,
}

impl Figure {
    pub fn grid(width_in: f32, height_in: f32, rows: usize, cols: usize) -> Self {
        Self {
            width_in,
            height_in,
            rows: rows.max(1),
            cols: cols.max(1),
            padding: 24.0,
            panels: Vec::new(),
        }
    }

    pub fn single(width_in: f32, height_in: f32, panel: impl Into<Panel>) -> Self {
        let mut fig = Self::grid(width_in, height_in, 1, 1);
        fig.push(panel);
        fig
    }

    pub fn push(&mut self, panel: impl Into<Panel>) {
        self.panels.push(panel.into());
    }

    /// Figure size in layout units.
    pub fn size_units(&self) -> (f32, f32) {
        (self.width_in * UNITS_PER_INCH, self.height_in * UNITS_PER_INCH)
    }

    /// Output raster size for `opts.scale`.
    pub fn pixel_size(&self, opts: &RenderOptions) -> (i32, i32) {
        let (w, h) = self.size_units();
        let px = |v: f32| ((v * opts.scale).round() as i32).max(1);
        (px(w), px(h))
    }

    /// Outer rect of cell `index` (row-major), in layout units.
    pub fn cell_rect(&self, index: usize) -> RectF {
        let (w, h) = self.size_units();
        let cw = w / self.cols as f32;
        let ch = h / self.rows as f32;
        let row = (index / self.cols) as f32;
        let col = (index % self.cols) as f32;
        RectF::from_ltwh(col * cw, row * ch, cw, ch)
    }

    /// Rasterize every panel and encode the result as PNG.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
        let (width, height) = self.pixel_size(opts);
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(RenderError::Surface { width, height })?;
        let canvas = surface.canvas();

        canvas.clear(opts.theme.background);
        canvas.scale((opts.scale, opts.scale));

        let shaper = TextShaper::new();
        let ctx = DrawContext { theme: &opts.theme, shaper: &shaper, draw_labels: opts.draw_labels };

        let capacity = self.rows * self.cols;
        if self.panels.len() > capacity {
            warn!(panels = self.panels.len(), capacity, "figure has more panels than cells; extras are skipped");
        }
        for (i, panel) in self.panels.iter().take(capacity).enumerate() {
            debug!(index = i, title = panel.title(), "drawing panel");
            panel.draw(canvas, self.cell_rect(i).pad(self.padding), &ctx);
        }

        // Snapshot and encode PNG
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RenderError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render and write to `output_png_path`, creating parent directories as needed.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<Path>,
    ) -> Result<(), RenderError> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|source| RenderError::Io { path: parent.to_path_buf(), source })?;
        }
        std::fs::write(path, &bytes)
            .map_err(|source| RenderError::Io { path: path.to_path_buf(), source })?;
        debug!(path = %path.display(), bytes = bytes.len(), "wrote png");
        Ok(())
    }
}
