// File: crates/pos-dashboard/src/error.rs
// Summary: Data-layer errors (table shape, sampling distribution).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("{table}: {column} has {actual} entries, expected {expected}")]
    LengthMismatch {
        table: &'static str,
        column: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{table}: index {index} out of range for {len} entries")]
    IndexOutOfRange {
        table: &'static str,
        index: usize,
        len: usize,
    },

    #[error("invalid daily sales distribution")]
    Distribution(#[from] rand_distr::NormalError),
}
