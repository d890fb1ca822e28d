use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

/// Everything that can go wrong while building or reading an [`IrisDataset`](crate::IrisDataset).
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The source file does not exist. Raised before any parsing.
    #[error("dataset source {} does not exist", .0.display())]
    MissingSource(PathBuf),

    #[error("failed to read csv: {0}")]
    Csv(#[from] PolarsError),

    /// The table does not have the expected layout.
    #[error("malformed table: expected {expected}, found {found}")]
    Shape { expected: String, found: String },

    #[error(
        "unknown category {value:?}{}",
        .row.map(|r| format!(" at row {r}")).unwrap_or_default()
    )]
    UnknownCategory { row: Option<usize>, value: String },

    #[error("index {index} out of range for dataset of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("failed to build array: {0}")]
    Array(#[from] ndarray::ShapeError),
}

pub type Result<T> = std::result::Result<T, DatasetError>;
