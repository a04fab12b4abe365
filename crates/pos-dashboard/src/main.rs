// File: crates/pos-dashboard/src/main.rs
// Summary: Generates the synthetic POS data and writes the four sales chart PNGs.

use anyhow::Result;
use pos_dashboard::{pipeline, OutputConfig, SalesData};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the confirmation message.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = OutputConfig::default();
    info!(out_dir = %config.out_dir.display(), seed = config.seed, scale = config.scale, "rendering sales charts");

    let today = chrono::Local::now().date_naive();
    let data = SalesData::generate(config.seed, today)?;
    let written = pipeline::render_all(&data, &config)?;
    info!(files = written.len(), "done");

    for line in pipeline::confirmation_lines() {
        println!("{line}");
    }
    Ok(())
}
