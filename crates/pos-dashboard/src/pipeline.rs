// File: crates/pos-dashboard/src/pipeline.rs
// Summary: Assembles the combined and standalone figures and writes them as PNGs.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chart_core::{Figure, Panel, RenderError, RenderOptions};
use tracing::info;

use crate::charts::{self, Layout};
use crate::config::OutputConfig;
use crate::data::SalesData;

/// One produced image: fixed file name and what it shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutputFile {
    pub file_name: &'static str,
    pub description: &'static str,
}

pub const DASHBOARD: OutputFile = OutputFile {
    file_name: "pos_dashboard_charts.png",
    description: "لوحة معلومات شاملة",
};
pub const SALES_TREND: OutputFile = OutputFile {
    file_name: "sales_trend_chart.png",
    description: "اتجاه المبيعات اليومية",
};
pub const CATEGORY_DISTRIBUTION: OutputFile = OutputFile {
    file_name: "category_distribution_chart.png",
    description: "توزيع المبيعات حسب الفئة",
};
pub const HOURLY_PATTERN: OutputFile = OutputFile {
    file_name: "hourly_pattern_chart.png",
    description: "نمط المبيعات خلال اليوم",
};

/// Every file a run writes, in the order they are produced.
pub const OUTPUTS: [OutputFile; 4] = [DASHBOARD, SALES_TREND, CATEGORY_DISTRIBUTION, HOURLY_PATTERN];

pub const SUCCESS_LINE: &str = "تم إنشاء جميع الرسوم البيانية بنجاح!";
pub const FILES_HEADER: &str = "الملفات المحفوظة:";

/// The eight panels of the combined figure, row-major.
pub fn dashboard_panels(data: &SalesData) -> Result<Vec<Panel>, RenderError> {
    Ok(vec![
        charts::sales_trend(data, Layout::Panel)?.into(),
        charts::category_pie(&data.categories, Layout::Panel)?.into(),
        charts::hourly_bars(&data.hourly, Layout::Panel)?.into(),
        charts::payment_bars(&data.payments)?.into(),
        charts::product_bars(&data.products, &data.categories)?.into(),
        charts::monthly_bars(&data.monthly)?.into(),
        charts::dashboard_panel(&data.metrics)?.into(),
        charts::weekly_lines(&data.weekly)?.into(),
    ])
}

/// 20x24 in, 4 rows by 2 columns.
pub fn dashboard_figure(data: &SalesData) -> Result<Figure, RenderError> {
    let mut fig = Figure::grid(20.0, 24.0, 4, 2);
    fig.panels = dashboard_panels(data)?;
    Ok(fig)
}

/// Each output paired with the figure that produces it, in [`OUTPUTS`] order.
pub fn figures(data: &SalesData) -> Result<Vec<(OutputFile, Figure)>, RenderError> {
    Ok(vec![
        (DASHBOARD, dashboard_figure(data)?),
        (SALES_TREND, Figure::single(12.0, 6.0, charts::sales_trend(data, Layout::Standalone)?)),
        (CATEGORY_DISTRIBUTION, Figure::single(10.0, 8.0, charts::category_pie(&data.categories, Layout::Standalone)?)),
        (HOURLY_PATTERN, Figure::single(12.0, 6.0, charts::hourly_bars(&data.hourly, Layout::Standalone)?)),
    ])
}

/// Render every figure into `config.out_dir`, one after another.
/// Stops at the first failure; files already written are left in place.
pub fn render_all(data: &SalesData, config: &OutputConfig) -> Result<Vec<PathBuf>> {
    let opts = RenderOptions { scale: config.scale, ..RenderOptions::default() };
    let mut written = Vec::with_capacity(OUTPUTS.len());

    for (output, figure) in figures(data).context("failed to build charts")? {
        let path = config.out_dir.join(output.file_name);
        figure
            .render_to_png(&opts, &path)
            .with_context(|| format!("failed to render {}", path.display()))?;
        let (width, height) = figure.pixel_size(&opts);
        info!(path = %path.display(), width, height, "wrote chart");
        written.push(path);
    }
    Ok(written)
}

/// Success message printed after a run: status, header, then one numbered line per file.
pub fn confirmation_lines() -> Vec<String> {
    let mut lines = vec![SUCCESS_LINE.to_string(), FILES_HEADER.to_string()];
    lines.extend(
        OUTPUTS
            .iter()
            .enumerate()
            .map(|(i, o)| format!("{}. {} - {}", i + 1, o.file_name, o.description)),
    );
    lines
}
