//! Flat-file matrix dumps: the line-oriented text format and a bincode
//! snapshot.

pub mod binary;
pub mod text;

use crate::error::MatrixError;

pub use text::{ElementStyle, MatrixDocument};

/// Errors raised while reading or writing matrix files.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing 'matrix <rows> <cols>' header")]
    MissingHeader,

    #[error("Line {line}: invalid header '{content}'")]
    InvalidHeader { line: usize, content: String },

    #[error("Line {line}: '{token}' is not a finite number")]
    InvalidElement { line: usize, token: String },

    #[error("Line {line}: expected {expected} values, found {actual}")]
    RowLength { line: usize, expected: usize, actual: usize },

    #[error("Line {line}: matrix ended after {found} of {expected} rows")]
    TooFewRows { line: usize, expected: usize, found: usize },

    #[error("Line {line}: expected 'end', found '{content}'")]
    UnexpectedLine { line: usize, content: String },

    #[error("Input ended before the closing 'end' line")]
    MissingEnd,

    #[error("Invalid matrix: {0}")]
    Matrix(#[from] MatrixError),

    #[error("Binary encoding failed: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    #[error("Binary decoding failed: {0}")]
    Decode(#[from] bincode::error::DecodeError),
}
