// File: crates/pos-dashboard/src/config.rs
// Summary: Output settings; fixed literal defaults (directory, seed, print scale).

use std::path::PathBuf;

use chart_core::types::PRINT_SCALE;

/// Directory the four PNGs are written to, relative to the working directory.
pub const DEFAULT_OUT_DIR: &str = "target/out";
/// Seed for the daily sales sample.
pub const DEFAULT_SEED: u64 = 42;

#[derive(Clone, Debug, PartialEq)]
pub struct OutputConfig {
    pub out_dir: PathBuf,
    pub seed: u64,
    /// Pixels per layout unit; 3.0 gives 300 DPI.
    pub scale: f32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            seed: DEFAULT_SEED,
            scale: PRINT_SCALE,
        }
    }
}
