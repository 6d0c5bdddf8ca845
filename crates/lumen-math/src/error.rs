//! Error types for tuple and matrix operations.

use thiserror::Error;

/// Errors raised by the math kernel.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Operand shapes are incompatible for the requested operation.
    #[error("dimension mismatch in {op}: {left:?} vs {right:?}")]
    DimensionMismatch {
        /// Name of the operation that rejected its operands.
        op: &'static str,
        /// Shape of the left operand as `(rows, cols)`.
        left: (usize, usize),
        /// Shape of the right operand as `(rows, cols)`.
        right: (usize, usize),
    },

    /// A square-only operation was applied to a rectangular matrix.
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare {
        /// Row count.
        rows: usize,
        /// Column count.
        cols: usize,
    },

    /// The determinant is exactly zero, so no inverse exists.
    #[error("matrix is not invertible (determinant is zero)")]
    SingularMatrix,

    /// Normalizing a tuple whose magnitude is zero.
    #[error("cannot normalize a zero-length tuple")]
    ZeroLength,

    /// Matrix storage does not match the declared shape.
    #[error("invalid matrix shape {rows}x{cols} for {len} values")]
    InvalidShape {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
        /// Number of values supplied.
        len: usize,
    },

    /// Row or column index outside the matrix.
    #[error("index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    IndexOutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Row count.
        rows: usize,
        /// Column count.
        cols: usize,
    },
}

/// Result type for math operations.
pub type Result<T> = std::result::Result<T, MathError>;
