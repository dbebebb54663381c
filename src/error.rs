//! Error types for the X/O forward pass.

/// Everything that can stop a run. All variants are fatal to the single
/// straight-line computation; there is no partial result.
#[derive(thiserror::Error, Debug)]
pub enum CnnError {
    /// A drawing contained something other than `@`, `.` or `\r`.
    #[error("invalid drawing syntax: unexpected {found:?} at line {line}, column {column} (use '@' for shaded and '.' for blank)")]
    Format { line: usize, column: usize, found: char },

    /// An encoded pixel that is neither +1 nor -1.
    #[error("pixel ({row}, {col}) is {value}, expected +1 or -1")]
    InvalidPixel { row: usize, col: usize, value: i8 },

    /// The decoded drawing is not the fixed input size.
    #[error("drawing must be {expected_rows}x{expected_cols}, got {rows} rows with a row of width {cols}")]
    Shape {
        expected_rows: usize,
        expected_cols: usize,
        rows: usize,
        cols: usize,
    },

    /// A score index points outside the flattened layer.
    #[error("score index {index} of the '{set}' set is outside the flat layer of length {len}")]
    Index { set: String, index: usize, len: usize },

    /// The 'X' and 'O' sets share an index.
    #[error("score index {index} appears in both index sets")]
    OverlappingIndexSets { index: usize },

    /// An index set with nothing to average over.
    #[error("score index set '{set}' is empty")]
    EmptyIndexSet { set: String },

    /// An index set configured under the wrong shape.
    #[error("score index set '{set}' is invalid: {reason}")]
    InvalidIndexSet { set: String, reason: String },

    /// A configured filter is not a 3x3 grid of -1/+1.
    #[error("filter '{name}' is invalid: {reason}")]
    InvalidFilter { name: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, CnnError>;
