// File: crates/chart-core/src/error.rs
// Summary: Rendering failures: surface allocation, PNG encoding, file output, bad colors.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("PNG encoding failed")]
    Encode,

    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid color literal {0:?} (expected #RRGGBB)")]
    InvalidColor(String),
}
