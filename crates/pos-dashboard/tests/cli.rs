// File: crates/pos-dashboard/tests/cli.rs
// Purpose: Run the built binary with no arguments: exit status, stdout message, and the four PNGs.

use std::path::PathBuf;
use std::process::Command;

use pos_dashboard::config::DEFAULT_OUT_DIR;
use pos_dashboard::pipeline::{self, OUTPUTS};

#[test]
fn binary_without_arguments_writes_charts_and_prints_message() {
    let workdir = std::env::current_dir().unwrap().join("target/test_out/cli_run");
    let _ = std::fs::remove_dir_all(&workdir);
    std::fs::create_dir_all(&workdir).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_pos-dashboard"))
        .current_dir(&workdir)
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn pos-dashboard");

    assert!(
        output.status.success(),
        "exit {:?}\nstderr:\n{}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    // Logs go to stderr, so stdout is exactly the confirmation message.
    let stdout = String::from_utf8(output.stdout).expect("utf-8 stdout");
    let lines: Vec<String> = stdout.lines().map(str::to_string).collect();
    assert_eq!(lines, pipeline::confirmation_lines());

    let out_dir = workdir.join(DEFAULT_OUT_DIR);
    // 300 DPI: 100 layout units per inch at scale 3.
    let sizes = [(6000, 7200), (3600, 1800), (3000, 2400), (3600, 1800)];
    for (file, size) in OUTPUTS.iter().zip(sizes) {
        let path: PathBuf = out_dir.join(file.file_name);
        let meta = std::fs::metadata(&path).unwrap_or_else(|e| panic!("{}: {e}", path.display()));
        assert!(meta.len() > 0, "{} should be non-empty", path.display());
        let img = image::open(&path).expect("decode png").to_rgba8();
        assert_eq!((img.width(), img.height()), size, "{}", path.display());
    }
}
