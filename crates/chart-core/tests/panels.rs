// File: crates/chart-core/tests/panels.rs
// Purpose: Pie math, text panel layout, figure cells, and rendering of non-plot panels.

use chart_core::theme::hex_color;
use chart_core::{Figure, PieChart, RenderError, RenderOptions, TextPanel};
use skia_safe::Color;

fn sample_pie() -> PieChart {
    let mut pie = PieChart::new("Share");
    pie.add_slice("a", 50.0, Color::from_rgb(230, 20, 20));
    pie.add_slice("b", 30.0, Color::from_rgb(20, 20, 230));
    pie.add_slice("c", 20.0, Color::from_rgb(20, 200, 20));
    pie
}

#[test]
fn pie_percentages_and_labels() {
    let pie = sample_pie();
    assert_eq!(pie.percentages(), vec![50.0, 30.0, 20.0]);
    assert_eq!(pie.percent_labels(), vec!["50.0%", "30.0%", "20.0%"]);
}

#[test]
fn pie_wedges_start_at_twelve_and_run_counter_clockwise() {
    let angles = sample_pie().wedge_angles();
    let close = |a: (f64, f64), b: (f64, f64)| (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9;
    assert!(close(angles[0], (90.0, 180.0)));
    assert!(close(angles[1], (270.0, 108.0)));
    let (last_start, last_sweep) = angles[2];
    assert!((last_start + last_sweep - 450.0).abs() < 1e-9);
}

#[test]
fn empty_pie_has_zero_shares() {
    let mut pie = PieChart::new("none");
    pie.add_slice("x", 0.0, Color::BLACK);
    assert_eq!(pie.percentages(), vec![0.0]);
}

#[test]
fn text_panel_rows_step_down() {
    let mut panel = TextPanel::new("KPIs", Color::BLUE);
    for i in 0..3 {
        panel.add_row(format!("k{i}"), format!("v{i}"));
    }
    let ys = panel.row_positions();
    assert_eq!(ys.len(), 3);
    assert!((ys[0] - 0.9).abs() < 1e-6);
    assert!((ys[1] - 0.75).abs() < 1e-6);
    assert!((ys[2] - 0.6).abs() < 1e-6);
}

#[test]
fn figure_cells_fill_row_major() {
    let fig = Figure::grid(20.0, 24.0, 4, 2);
    assert_eq!(fig.size_units(), (2000.0, 2400.0));
    let r = fig.cell_rect(3);
    assert_eq!((r.left, r.top, r.right, r.bottom), (1000.0, 600.0, 2000.0, 1200.0));
    let opts = RenderOptions { scale: 3.0, ..RenderOptions::default() };
    assert_eq!(fig.pixel_size(&opts), (6000, 7200));
}

#[test]
fn pie_figure_paints_first_wedge_left_of_center() {
    let fig = Figure::single(4.0, 4.0, sample_pie());
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    let bytes = fig.render_to_png_bytes(&opts).expect("render");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!((img.width(), img.height()), (400, 400));

    // Title band (44.6) below 24 padding; pie centered in the remaining area.
    let cy = ((24.0 + 44.6) + 376.0) / 2.0;
    let px = img.get_pixel(145, cy as u32).0;
    assert!(px[0] > 200 && px[1] < 60 && px[2] < 60, "expected first wedge color, got {px:?}");
}

#[test]
fn text_panel_figure_renders() {
    let mut panel = TextPanel::new("KPIs", Color::BLUE);
    panel.add_row("orders", "48");
    let bytes = Figure::single(5.0, 3.0, panel)
        .render_to_png_bytes(&RenderOptions::default())
        .expect("render");
    let img = image::load_from_memory(&bytes).expect("decode");
    assert_eq!((img.width(), img.height()), (500, 300));
}

#[test]
fn hex_colors_parse_and_reject() {
    assert_eq!(hex_color("#4080FF").unwrap(), Color::from_rgb(0x40, 0x80, 0xff));
    assert_eq!(hex_color("23c343").unwrap(), Color::from_rgb(0x23, 0xc3, 0x43));
    assert!(matches!(hex_color("#12345"), Err(RenderError::InvalidColor(_))));
    assert!(matches!(hex_color("#GGGGGG"), Err(RenderError::InvalidColor(_))));
}
