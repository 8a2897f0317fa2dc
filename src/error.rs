//! Error types for matrix construction and kernel operations.

/// Errors raised by matrix construction and by the linear-algebra kernel.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatrixError {
    #[error("Operation requires a square matrix, got {rows}x{cols}")]
    InvalidShape { rows: usize, cols: usize },

    #[error("Incompatible shapes for multiplication: {}x{} times {}x{}", left.0, left.1, right.0, right.1)]
    IncompatibleShape { left: (usize, usize), right: (usize, usize) },

    #[error("Matrix is singular: determinant {determinant}")]
    SingularMatrix { determinant: f64 },

    #[error("Rank {rank} exceeds the supported maximum of {max_rank}")]
    SizeLimitExceeded { rank: usize, max_rank: usize },

    #[error("Shape {rows}x{cols} overflows the addressable element count")]
    ShapeOverflow { rows: usize, cols: usize },

    #[error("Matrix must have at least one row and one column")]
    EmptyMatrix,

    #[error("Element buffer has {actual} values, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Index ({row}, {col}) out of bounds for a {rows}x{cols} matrix")]
    IndexOutOfBounds { row: usize, col: usize, rows: usize, cols: usize },
}
