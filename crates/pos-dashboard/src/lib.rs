// File: crates/pos-dashboard/src/lib.rs
// Summary: Synthetic POS sales data, the chart specifications built from it, and the output pipeline.

pub mod charts;
pub mod config;
pub mod data;
pub mod error;
pub mod pipeline;

pub use config::OutputConfig;
pub use data::SalesData;
pub use error::DataError;
