//! Text matrix format.
//!
//! ```text
//! # ./matgen --rows 2 --cols 3
//! # Version = 0.1.0
//! matrix 2 3
//! 0.5	1.25	-3
//! 4	0	7.5
//! end
//! ```
//!
//! `#` lines before the header are comments. Values are separated by any
//! whitespace; the writer uses a tab after every value.

use std::fmt::Write as _;
use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::io::FormatError;
use crate::numerics::types::matrix::Matrix;
use crate::numerics::types::traits::FloatingPoint;

/// A parsed matrix file: the leading comments and the matrix itself.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixDocument<T: FloatingPoint = f64> {
    /// Comment text with the `#` marker and surrounding whitespace removed.
    pub comments: Vec<String>,
    pub matrix: Matrix<T>,
}

/// How elements are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementStyle {
    /// Fixed number of decimals, `Fixed(6)` matches C's `%LF`.
    Fixed(usize),
    /// Shortest representation that parses back to the same value.
    Shortest,
}

impl Default for ElementStyle {
    fn default() -> Self {
        ElementStyle::Fixed(6)
    }
}

/// Parse a full document from text.
pub fn parse_document<T: FloatingPoint>(input: &str) -> Result<MatrixDocument<T>, FormatError> {
    let mut lines = input.lines().enumerate().map(|(i, l)| (i + 1, l.trim()));
    let mut comments = Vec::new();

    let (rows, cols) = loop {
        let (line, content) = lines.next().ok_or(FormatError::MissingHeader)?;
        if content.is_empty() {
            continue;
        }
        if let Some(comment) = content.strip_prefix('#') {
            comments.push(comment.trim().to_string());
            continue;
        }
        break parse_header(line, content)?;
    };

    // the header is untrusted, so storage grows with the rows actually read
    let mut elements = Vec::new();
    let mut found = 0;
    while found < rows {
        let (line, content) = lines.next().ok_or(FormatError::MissingEnd)?;
        if content.is_empty() {
            continue;
        }
        if content == "end" {
            return Err(FormatError::TooFewRows { line, expected: rows, found });
        }
        let before = elements.len();
        for token in content.split_whitespace() {
            elements.push(parse_element::<T>(line, token)?);
        }
        let actual = elements.len() - before;
        if actual != cols {
            return Err(FormatError::RowLength { line, expected: cols, actual });
        }
        found += 1;
    }

    loop {
        let (line, content) = lines.next().ok_or(FormatError::MissingEnd)?;
        match content {
            "" => continue,
            "end" => break,
            other => {
                return Err(FormatError::UnexpectedLine { line, content: other.to_string() })
            }
        }
    }

    let matrix = Matrix::from_vec(rows, cols, elements)?;
    Ok(MatrixDocument { comments, matrix })
}

fn parse_header(line: usize, content: &str) -> Result<(usize, usize), FormatError> {
    let invalid = || FormatError::InvalidHeader { line, content: content.to_string() };
    let mut parts = content.split_whitespace();
    if parts.next() != Some("matrix") {
        return Err(invalid());
    }
    let rows: usize = parts.next().and_then(|s| s.parse().ok()).ok_or_else(invalid)?;
    let cols: usize = parts.next().and_then(|s| s.parse().ok()).ok_or_else(invalid)?;
    if parts.next().is_some() || rows == 0 || cols == 0 || rows.checked_mul(cols).is_none() {
        return Err(invalid());
    }
    Ok((rows, cols))
}

fn parse_element<T: FloatingPoint>(line: usize, token: &str) -> Result<T, FormatError> {
    match token.parse::<T>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(FormatError::InvalidElement { line, token: token.to_string() }),
    }
}

/// Parse text and keep only the matrix.
pub fn parse_matrix<T: FloatingPoint>(input: &str) -> Result<Matrix<T>, FormatError> {
    parse_document(input).map(|doc| doc.matrix)
}

/// Read and parse a matrix file.
pub fn read_document<T: FloatingPoint>(path: impl AsRef<Path>) -> Result<MatrixDocument<T>, FormatError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let doc = parse_document(&text)?;
    debug!(path = %path.display(), rows = doc.matrix.rows(), cols = doc.matrix.cols(), "read matrix file");
    Ok(doc)
}

pub fn read_matrix<T: FloatingPoint>(path: impl AsRef<Path>) -> Result<Matrix<T>, FormatError> {
    read_document(path).map(|doc| doc.matrix)
}

/// Render a matrix with its comment lines.
pub fn to_text<T: FloatingPoint>(comments: &[String], matrix: &Matrix<T>, style: ElementStyle) -> String {
    let mut out = String::new();
    for comment in comments {
        let _ = writeln!(out, "# {comment}");
    }
    let _ = writeln!(out, "matrix {} {}", matrix.rows(), matrix.cols());
    for row in matrix.iter_rows() {
        for value in row {
            let _ = match style {
                ElementStyle::Fixed(precision) => write!(out, "{value:.precision$}\t"),
                ElementStyle::Shortest => write!(out, "{value}\t"),
            };
        }
        out.push('\n');
    }
    out.push_str("end\n");
    out
}

/// Write the text form to any writer.
pub fn write_document<W: Write, T: FloatingPoint>(
    mut writer: W,
    comments: &[String],
    matrix: &Matrix<T>,
    style: ElementStyle,
) -> Result<(), FormatError> {
    writer.write_all(to_text(comments, matrix, style).as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Write the text form to `path`, replacing any existing file.
pub fn write_file<T: FloatingPoint>(
    path: impl AsRef<Path>,
    comments: &[String],
    matrix: &Matrix<T>,
    style: ElementStyle,
) -> Result<(), FormatError> {
    let path = path.as_ref();
    fs::write(path, to_text(comments, matrix, style))?;
    debug!(path = %path.display(), rows = matrix.rows(), cols = matrix.cols(), "wrote matrix file");
    Ok(())
}
