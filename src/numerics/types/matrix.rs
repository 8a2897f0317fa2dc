// src/numerics/types/matrix.rs
// Dense row-major matrix with runtime dimensions.

use serde::{Serialize, Deserialize};

use crate::error::MatrixError;
use crate::numerics::types::traits::FloatingPoint;

/// Dense `rows x cols` matrix stored row-major: `element(i, j) = elements[cols * i + j]`.
///
/// The shape invariant `elements.len() == rows * cols` with both dimensions
/// non-zero is checked by every constructor, including deserialization.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T: FloatingPoint = f64> {
    rows: usize,
    cols: usize,
    elements: Vec<T>,
}

/// `rows * cols`, or [`MatrixError::ShapeOverflow`] when the product does not fit in `usize`.
pub(crate) fn element_count(rows: usize, cols: usize) -> Result<usize, MatrixError> {
    rows.checked_mul(cols).ok_or(MatrixError::ShapeOverflow { rows, cols })
}

impl<T: FloatingPoint> Matrix<T> {
    /// Build a matrix from a flat row-major buffer.
    pub fn from_vec(rows: usize, cols: usize, elements: Vec<T>) -> Result<Self, MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::EmptyMatrix);
        }
        let expected = element_count(rows, cols)?;
        if elements.len() != expected {
            return Err(MatrixError::DimensionMismatch { expected, actual: elements.len() });
        }
        Ok(Self { rows, cols, elements })
    }

    /// Shape-preserving constructor for operations that cannot change the element count.
    pub(crate) fn from_raw(rows: usize, cols: usize, elements: Vec<T>) -> Self {
        debug_assert!(rows > 0 && cols > 0 && elements.len() == rows * cols);
        Self { rows, cols, elements }
    }

    /// Construct a matrix from fixed-width rows
    pub fn from_rows<const C: usize>(rows: &[[T; C]]) -> Result<Self, MatrixError> {
        Self::from_vec(rows.len(), C, rows.iter().flatten().copied().collect())
    }

    /// Zero matrix
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        Self::from_vec(rows, cols, vec![T::zero(); element_count(rows, cols)?])
    }

    /// Identity matrix of the given rank
    pub fn identity(rank: usize) -> Result<Self, MatrixError> {
        let mut m = Self::zeros(rank, rank)?;
        m.elements.iter_mut().step_by(rank + 1).for_each(|x| *x = T::one());
        Ok(m)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Row-major element buffer
    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    pub fn into_elements(self) -> Vec<T> {
        self.elements
    }

    /// Element at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.rows && col < self.cols {
            Some(self.elements[self.cols * row + col])
        } else {
            None
        }
    }

    /// Get a row by index
    pub fn row(&self, idx: usize) -> Option<&[T]> {
        if idx < self.rows {
            let start = idx * self.cols;
            Some(&self.elements[start..start + self.cols])
        } else {
            None
        }
    }

    /// Iterate over rows as slices
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        self.elements.chunks(self.cols)
    }

    /// Multiply every element by a scalar
    pub fn scale(mut self, scalar: T) -> Self {
        self.elements.iter_mut().for_each(|x| *x = *x * scalar);
        self
    }

    /// Submatrix obtained by deleting `row` and `col` from a square matrix.
    pub fn minor(&self, row: usize, col: usize) -> Result<Self, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::InvalidShape { rows: self.rows, cols: self.cols });
        }
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.rows == 1 {
            return Err(MatrixError::EmptyMatrix);
        }
        let mut elements = Vec::with_capacity((self.rows - 1) * (self.rows - 1));
        fill_minor(&self.elements, self.rows, row, col, &mut elements);
        Self::from_vec(self.rows - 1, self.cols - 1, elements)
    }

    /// Element-wise comparison with an absolute tolerance.
    pub fn approx_eq(&self, other: &Self, tolerance: T) -> bool {
        self.shape() == other.shape()
            && self
                .elements
                .iter()
                .zip(other.elements.iter())
                .all(|(&a, &b)| (a - b).abs() <= tolerance)
    }

    /// True when no element is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.elements.iter().all(|x| x.is_finite())
    }
}

/// Copy the rank `n - 1` minor of the `n x n` buffer `src` into `dst`,
/// skipping `skip_row` and `skip_col`. `dst` is cleared first so a frame can
/// reuse it for every column it expands.
pub(crate) fn fill_minor<T: Copy>(src: &[T], rank: usize, skip_row: usize, skip_col: usize, dst: &mut Vec<T>) {
    dst.clear();
    for (i, row) in src.chunks(rank).enumerate() {
        if i == skip_row {
            continue;
        }
        dst.extend(
            row.iter()
                .enumerate()
                .filter(|&(j, _)| j != skip_col)
                .map(|(_, &x)| x),
        );
    }
}

// Serialized as the tuple (rows, cols, elements); decoding re-checks the shape.
impl<T> Serialize for Matrix<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (self.rows, self.cols, &self.elements).serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Matrix<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (rows, cols, elements) = <(usize, usize, Vec<T>)>::deserialize(deserializer)?;
        Matrix::from_vec(rows, cols, elements).map_err(serde::de::Error::custom)
    }
}
