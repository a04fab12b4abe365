// File: crates/pos-dashboard/tests/pipeline.rs
// Purpose: End-to-end rendering of the four PNGs at reduced scale, plus output naming and messages.

use std::path::PathBuf;

use chrono::NaiveDate;
use pos_dashboard::config::{DEFAULT_OUT_DIR, DEFAULT_SEED};
use pos_dashboard::pipeline::{self, OUTPUTS};
use pos_dashboard::{OutputConfig, SalesData};

fn data() -> SalesData {
    SalesData::generate(DEFAULT_SEED, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()).unwrap()
}

fn fresh_config(name: &str) -> OutputConfig {
    let out_dir = PathBuf::from("target/test_out").join(name);
    let _ = std::fs::remove_dir_all(&out_dir);
    OutputConfig { out_dir, scale: 0.25, ..OutputConfig::default() }
}

#[test]
fn render_all_writes_four_decodable_pngs() {
    let config = fresh_config("pipeline_e2e");
    let written = pipeline::render_all(&data(), &config).expect("render all");

    let want: Vec<PathBuf> = OUTPUTS.iter().map(|o| config.out_dir.join(o.file_name)).collect();
    assert_eq!(written, want);

    // 100 layout units per inch, scaled by 0.25
    let sizes = [(500, 600), (300, 150), (250, 200), (300, 150)];
    for (path, size) in written.iter().zip(sizes) {
        let meta = std::fs::metadata(path).expect("output exists");
        assert!(meta.len() > 0, "{} should be non-empty", path.display());
        let img = image::open(path).expect("decode png").to_rgba8();
        assert_eq!((img.width(), img.height()), size, "{}", path.display());
        assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255], "white background in {}", path.display());
    }
}

#[test]
fn second_run_overwrites_the_same_names() {
    let config = fresh_config("pipeline_twice");
    let first = pipeline::render_all(&data(), &config).expect("first run");
    let second = pipeline::render_all(&data(), &config).expect("second run");
    assert_eq!(first, second);

    let mut names: Vec<String> = std::fs::read_dir(&config.out_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    let mut want: Vec<String> = OUTPUTS.iter().map(|o| o.file_name.to_string()).collect();
    want.sort();
    assert_eq!(names, want);
}

#[test]
fn unwritable_output_directory_is_fatal() {
    let blocker = PathBuf::from("target/test_out/pipeline_blocker");
    std::fs::create_dir_all(blocker.parent().unwrap()).unwrap();
    let _ = std::fs::remove_dir_all(&blocker);
    std::fs::write(&blocker, b"not a directory").unwrap();

    let config = OutputConfig { out_dir: blocker.join("nested"), scale: 0.1, ..OutputConfig::default() };
    let err = pipeline::render_all(&data(), &config).unwrap_err();
    assert!(format!("{err:#}").contains("pos_dashboard_charts.png"), "{err:#}");
}

#[test]
fn combined_figure_is_four_by_two_in_layout_order() {
    let fig = pipeline::dashboard_figure(&data()).unwrap();
    assert_eq!((fig.rows, fig.cols, fig.panels.len()), (4, 2, 8));
    let titles: Vec<&str> = fig.panels.iter().map(|p| p.title()).collect();
    assert_eq!(
        titles,
        vec![
            "اتجاه المبيعات اليومية (آخر 30 يوم)",
            "توزيع المبيعات حسب الفئة",
            "نمط المبيعات خلال ساعات اليوم",
            "توزيع طرق الدفع",
            "أكثر المنتجات مبيعاً",
            "مقارنة الإيرادات الشهرية",
            "لوحة معلومات الأداء",
            "مقارنة المبيعات الأسبوعية",
        ]
    );
}

#[test]
fn confirmation_message_lists_every_file() {
    let lines = pipeline::confirmation_lines();
    assert_eq!(
        lines,
        vec![
            "تم إنشاء جميع الرسوم البيانية بنجاح!",
            "الملفات المحفوظة:",
            "1. pos_dashboard_charts.png - لوحة معلومات شاملة",
            "2. sales_trend_chart.png - اتجاه المبيعات اليومية",
            "3. category_distribution_chart.png - توزيع المبيعات حسب الفئة",
            "4. hourly_pattern_chart.png - نمط المبيعات خلال اليوم",
        ]
    );
}

#[test]
fn config_defaults_are_fixed() {
    let config = OutputConfig::default();
    assert_eq!(config.out_dir, PathBuf::from(DEFAULT_OUT_DIR));
    assert_eq!(config.seed, DEFAULT_SEED);
    assert_eq!(config.scale, 3.0);
}
