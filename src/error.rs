// ⚠️ Error Types - one enum for every way a run can abort
// Unparseable dates are NOT here: they become nulls (see cleaner.rs)

use std::path::PathBuf;

/// Errors raised by the analysis library
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// Workbook missing, unreadable or in an unknown format
    #[error("Failed to open workbook {path}: {source}")]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// Requested sheet index is out of range
    #[error("Sheet {index} does not exist (available: {available:?})")]
    SheetNotFound { index: usize, available: Vec<String> },

    /// A column the pipeline depends on is absent
    #[error("Table '{table}' has no column '{column}'")]
    MissingColumn { table: String, column: String },

    /// Numeric cell still unparseable after decimal-comma normalization
    #[error("Column '{column}' row {row}: cannot parse '{value}' as a number")]
    InvalidNumber {
        column: String,
        row: usize,
        value: String,
    },

    /// Right-hand join key appears more than once under a many-to-one join
    #[error("Duplicate key '{key}' in column '{column}' of right-hand table")]
    DuplicateKey { column: String, key: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Alias for Result with `AnalysisError`
pub type Result<T> = std::result::Result<T, AnalysisError>;
