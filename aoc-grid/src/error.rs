//! Error types for grid construction and shape-dependent operations

use thiserror::Error;

/// Error type for grid parsing and operations that need a rectangular grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A row's length differs from the first row's length
    #[error("Ragged grid: row {row} has {found} cells, expected {expected}")]
    Ragged {
        /// Index of the first offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        found: usize,
    },

    /// A cell token could not be converted to the cell type
    #[error("Invalid cell {token:?} at ({row}, {col}): {reason}")]
    InvalidCell {
        /// Row of the token in the parsed grid
        row: usize,
        /// Column of the token in the parsed grid
        col: usize,
        /// The raw token text
        token: String,
        /// Conversion failure message
        reason: String,
    },
}
