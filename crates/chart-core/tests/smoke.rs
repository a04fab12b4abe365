// File: crates/chart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use chart_core::series::Marker;
use chart_core::types::{HEIGHT_IN, WIDTH_IN};
use chart_core::{Axis, Chart, Figure, RenderOptions, Series};
use skia_safe::Color;

#[test]
fn render_smoke_png() {
    // Minimal data: tiny line series
    let mut chart = Chart::new().with_title("Smoke");
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.add_series(
        Series::line(vec![(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.5), (4.0, 2.5)], Color::BLUE)
            .with_marker(Marker::Circle, 8.0),
    );

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    Figure::single(WIDTH_IN, HEIGHT_IN, chart.clone())
        .render_to_png(&opts, &out)
        .expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!((img.width(), img.height()), (1024, 640));
    // Corner lies in the figure padding: opaque white background.
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
}

#[test]
fn render_scale_multiplies_pixel_size() {
    let mut chart = Chart::new();
    chart.add_series(Series::line(vec![(0.0, 1.0), (10.0, 50.0)], Color::BLUE));

    let opts = RenderOptions { scale: 0.5, draw_labels: false, ..RenderOptions::default() };
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!((img.width(), img.height()), (512, 320));
}
