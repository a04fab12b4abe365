// File: crates/pos-dashboard/src/charts.rs
// Summary: The eight chart specifications: fixed mappings from sales tables to panels.

use chart_core::number::group_thousands;
use chart_core::series::Marker;
use chart_core::text::{HAlign, VAlign};
use chart_core::theme::hex_color;
use chart_core::{
    Annotation, Axis, Chart, FontSizes, GridLines, Indicator, Insets, LegendLoc, LinearTrend,
    PieChart, RenderError, Series, TextPanel,
};
use chrono::{Datelike, NaiveDate};
use skia_safe::Color;

use crate::data::{
    CategoryTable, DashboardMetrics, HourlyPattern, MonthlyRevenue, PaymentTable, ProductTable,
    SalesData, WeeklyComparison,
};

pub const PRIMARY: &str = "#4080FF";
pub const ORANGE: &str = "#FF9A2E";
pub const TEAL: &str = "#37D4CF";
/// Peak hours and the current month.
pub const HIGHLIGHT: &str = "#23C343";
pub const NEUTRAL: &str = "#A9AEB8";

/// Autoscale padding for plotted panels.
const MARGIN: f64 = 0.05;
/// Date ticks fall on calendar days 1, 6, 11, ... of each month.
const DATE_TICK_EVERY: u32 = 5;
/// Tick spacing on the hourly chart, in hours.
const HOUR_TICK_EVERY: usize = 2;
const PAYMENT_LABEL_OFFSET: f64 = 1_000.0;
const PRODUCT_LABEL_OFFSET: f64 = 5.0;
const MONTHLY_LABEL_OFFSET: f64 = 10_000.0;

/// Whether a chart sits in the combined figure or is exported on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    Panel,
    Standalone,
}

impl Layout {
    fn fonts(self) -> FontSizes {
        match self {
            Layout::Panel => FontSizes::panel(),
            Layout::Standalone => FontSizes::standalone(),
        }
    }
}

/// (index, "%m/%d") for each date whose day of month is 1, 6, 11, 16, 21, 26 or 31.
pub fn date_ticks(dates: &[NaiveDate]) -> Vec<(f64, String)> {
    dates
        .iter()
        .enumerate()
        .filter(|(_, d)| d.day() % DATE_TICK_EVERY == 1)
        .map(|(i, d)| (i as f64, d.format("%m/%d").to_string()))
        .collect()
}

fn colors(literals: &[String]) -> Result<Vec<Color>, RenderError> {
    literals.iter().map(|c| hex_color(c)).collect()
}

/// Daily sales with markers and a dashed least-squares trend line.
pub fn trend_chart(dates: &[NaiveDate], daily_sales: &[f64], layout: Layout) -> Result<Chart, RenderError> {
    let mut chart = Chart::new().with_title("اتجاه المبيعات اليومية (آخر 30 يوم)");
    chart.fonts = layout.fonts();
    chart.insets = Insets::new(104, 24, 60, 110);

    let points = daily_sales.iter().enumerate().map(|(i, &v)| (i as f64, v)).collect();
    let sales = Series::line(points, hex_color(PRIMARY)?)
        .with_stroke_width(3.0)
        .with_marker(Marker::Circle, 8.5);
    let mut trend = LinearTrend
        .compute(&sales)
        .with_color(hex_color(ORANGE)?)
        .with_alpha(0.7)
        .with_stroke_width(2.0)
        .dashed();
    if layout == Layout::Standalone {
        trend = trend.with_label("خط الاتجاه");
        chart.legend = Some(LegendLoc::UpperLeft);
    }
    chart.add_series(sales);
    chart.add_series(trend);

    chart.x_axis = Axis::new("التاريخ", 0.0, 1.0).with_ticks(date_ticks(dates)).rotated(45.0);
    chart.y_axis = Axis::new("المبيعات (جنيه مصري)", 0.0, 1.0);
    chart.grid = GridLines::Both;
    chart.autoscale_axes(MARGIN);
    Ok(chart)
}

/// Share of sales per category, labeled with name and one-decimal percentage.
pub fn category_pie(categories: &CategoryTable, layout: Layout) -> Result<PieChart, RenderError> {
    let mut pie = PieChart::new("توزيع المبيعات حسب الفئة");
    pie.fonts = layout.fonts();
    for ((name, &sales), color) in categories.names.iter().zip(&categories.sales).zip(colors(&categories.colors)?) {
        pie.add_slice(name.as_str(), sales, color);
    }
    Ok(pie)
}

/// Bar color per hour: highlight for peak hours, base otherwise.
pub fn hourly_colors(hourly: &HourlyPattern) -> Result<Vec<Color>, RenderError> {
    let base = hex_color(TEAL)?;
    let peak = hex_color(HIGHLIGHT)?;
    Ok((0..hourly.values.len()).map(|h| if hourly.is_peak(h) { peak } else { base }).collect())
}

/// One bar per hour of day. Peak bars are filled and outlined in the highlight
/// color; the rest keep a white outline.
pub fn hourly_bars(hourly: &HourlyPattern, layout: Layout) -> Result<Chart, RenderError> {
    let mut chart = Chart::new().with_title("نمط المبيعات خلال ساعات اليوم");
    chart.fonts = layout.fonts();
    let fills = hourly_colors(hourly)?;
    let peak = hex_color(HIGHLIGHT)?;
    let edges = (0..hourly.values.len())
        .map(|h| if hourly.is_peak(h) { peak } else { Color::WHITE })
        .collect();
    chart.add_series(
        Series::bars(&hourly.values, hex_color(TEAL)?)
            .with_point_colors(fills)
            .with_point_edges(edges)
            .with_alpha(0.8)
            .with_edge(Color::WHITE),
    );
    let ticks = (0..hourly.values.len())
        .step_by(HOUR_TICK_EVERY)
        .map(|h| (h as f64, h.to_string()))
        .collect();
    chart.x_axis = Axis::new("الساعة", 0.0, 1.0).with_ticks(ticks);
    chart.y_axis = Axis::new("متوسط المبيعات (جنيه)", 0.0, 1.0);
    chart.grid = GridLines::Y;
    chart.autoscale_axes(MARGIN);
    Ok(chart)
}

/// Horizontal bar per payment method, amount printed past the bar end.
pub fn payment_bars(payments: &PaymentTable) -> Result<Chart, RenderError> {
    let mut chart = Chart::new().with_title("توزيع طرق الدفع");
    chart.insets = Insets::new(170, 24, 60, 76);
    let amounts: Vec<f64> = payments.amounts.iter().map(|&a| a as f64).collect();
    chart.add_series(Series::hbars(&amounts, hex_color(PRIMARY)?).with_point_colors(colors(&payments.colors)?));
    for (i, &amount) in payments.amounts.iter().enumerate() {
        chart.annotate(
            Annotation::new(amount as f64 + PAYMENT_LABEL_OFFSET, i as f64, group_thousands(amount as i64))
                .aligned(HAlign::Left, VAlign::Center),
        );
    }
    chart.x_axis = Axis::new("المبلغ (جنيه مصري)", 0.0, 1.0);
    chart.y_axis = Axis::categorical("", &payments.methods);
    chart.grid = GridLines::X;
    chart.autoscale_axes(MARGIN);
    Ok(chart)
}

/// Quantity per product with rotated names; colors cycle through the category palette.
pub fn product_bars(products: &ProductTable, palette: &CategoryTable) -> Result<Chart, RenderError> {
    let mut chart = Chart::new().with_title("أكثر المنتجات مبيعاً");
    chart.insets = Insets::new(104, 24, 60, 150);
    let palette = colors(&palette.colors)?;
    let fills: Vec<Color> = palette.iter().cycle().take(products.names.len()).copied().collect();
    let quantities: Vec<f64> = products.quantities.iter().map(|&q| q as f64).collect();
    chart.add_series(Series::bars(&quantities, hex_color(PRIMARY)?).with_point_colors(fills));
    for (i, &qty) in products.quantities.iter().enumerate() {
        chart.annotate(Annotation::new(i as f64, qty as f64 + PRODUCT_LABEL_OFFSET, qty.to_string()));
    }
    chart.x_axis = Axis::categorical("المنتجات", &products.names).rotated(45.0);
    chart.y_axis = Axis::new("الكمية المباعة", 0.0, 1.0);
    chart.grid = GridLines::Y;
    chart.autoscale_axes(MARGIN);
    Ok(chart)
}

/// Revenue per month, current month highlighted, values printed above the bars.
pub fn monthly_bars(monthly: &MonthlyRevenue) -> Result<Chart, RenderError> {
    let mut chart = Chart::new().with_title("مقارنة الإيرادات الشهرية");
    let neutral = hex_color(NEUTRAL)?;
    let highlight = hex_color(HIGHLIGHT)?;
    let fills = (0..monthly.months.len())
        .map(|i| if i == monthly.current { highlight } else { neutral })
        .collect();
    let revenue: Vec<f64> = monthly.revenue.iter().map(|&r| r as f64).collect();
    chart.add_series(Series::bars(&revenue, neutral).with_point_colors(fills));
    for (i, &r) in monthly.revenue.iter().enumerate() {
        chart.annotate(Annotation::new(i as f64, r as f64 + MONTHLY_LABEL_OFFSET, group_thousands(r as i64)));
    }
    chart.x_axis = Axis::categorical("الشهر", &monthly.months);
    chart.y_axis = Axis::new("الإيراد (جنيه مصري)", 0.0, 1.0);
    chart.grid = GridLines::Y;
    chart.autoscale_axes(MARGIN);
    Ok(chart)
}

/// KPI labels and values as two text columns, no axes.
pub fn dashboard_panel(metrics: &DashboardMetrics) -> Result<TextPanel, RenderError> {
    let mut panel = TextPanel::new("لوحة معلومات الأداء", hex_color(PRIMARY)?);
    for (label, value) in &metrics.entries {
        panel.add_row(label.as_str(), value.as_str());
    }
    Ok(panel)
}

/// Current vs prior period per week, told apart by color, marker, and legend.
pub fn weekly_lines(weekly: &WeeklyComparison) -> Result<Chart, RenderError> {
    let mut chart = Chart::new().with_title("مقارنة المبيعات الأسبوعية");
    let indexed = |values: &[u64]| -> Vec<(f64, f64)> {
        values.iter().enumerate().map(|(i, &v)| (i as f64, v as f64)).collect()
    };
    chart.add_series(
        Series::line(indexed(&weekly.current), hex_color(PRIMARY)?)
            .with_stroke_width(3.0)
            .with_marker(Marker::Circle, 11.0)
            .with_label("الشهر الحالي"),
    );
    chart.add_series(
        Series::line(indexed(&weekly.prior), hex_color(ORANGE)?)
            .with_stroke_width(3.0)
            .with_marker(Marker::Square, 11.0)
            .with_label("الشهر السابق"),
    );
    chart.legend = Some(LegendLoc::LowerRight);
    chart.x_axis = Axis::categorical("الأسبوع", &weekly.weeks);
    chart.y_axis = Axis::new("المبيعات (جنيه مصري)", 0.0, 1.0);
    chart.grid = GridLines::Both;
    chart.autoscale_axes(MARGIN);
    Ok(chart)
}

/// Convenience: the trend chart straight from generated data.
pub fn sales_trend(data: &SalesData, layout: Layout) -> Result<Chart, RenderError> {
    trend_chart(&data.dates, &data.daily_sales, layout)
}
