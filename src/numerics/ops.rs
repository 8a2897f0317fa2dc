//! Frobenius norm, transpose and multiply on rectangular matrices.

use crate::error::MatrixError;
use crate::numerics::types::matrix::Matrix;
use crate::numerics::types::traits::FloatingPoint;

impl<T: FloatingPoint> Matrix<T> {
    /// Square root of the sum of squares of every element.
    ///
    /// The sum is accumulated in `T`, so fractional contributions are kept.
    pub fn frobenius_norm(&self) -> T {
        self.elements()
            .iter()
            .fold(T::zero(), |acc, &x| acc + x * x)
            .sqrt()
    }

    /// `cols x rows` matrix with `result(j, i) = self(i, j)`.
    pub fn transpose(&self) -> Self {
        let (rows, cols) = self.shape();
        let src = self.elements();
        let mut elements = Vec::with_capacity(src.len());
        for j in 0..cols {
            for i in 0..rows {
                elements.push(src[cols * i + j]);
            }
        }
        Matrix::from_raw(cols, rows, elements)
    }

    /// Matrix product `self * rhs`.
    ///
    /// # Examples
    /// ```
    /// use matcalc::numerics::types::matrix::Matrix;
    ///
    /// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// let b = Matrix::from_rows(&[[5.0, 6.0], [7.0, 8.0]]).unwrap();
    /// assert_eq!(a.multiply(&b).unwrap().elements(), &[19.0, 22.0, 43.0, 50.0]);
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Result<Self, MatrixError> {
        let (n, inner) = self.shape();
        let (rhs_rows, m) = rhs.shape();
        if inner != rhs_rows {
            return Err(MatrixError::IncompatibleShape {
                left: self.shape(),
                right: rhs.shape(),
            });
        }

        let a = self.elements();
        let b = rhs.elements();
        let mut result = vec![T::zero(); n * m];
        for i in 0..n {
            for j in 0..m {
                let mut sum = T::zero();
                for k in 0..inner {
                    sum = sum + a[inner * i + k] * b[m * k + j];
                }
                result[m * i + j] = sum;
            }
        }
        Matrix::from_vec(n, m, result)
    }
}

/// Free-function form of [`Matrix::frobenius_norm`].
pub fn frobenius<T: FloatingPoint>(matrix: &Matrix<T>) -> T {
    matrix.frobenius_norm()
}

/// Free-function form of [`Matrix::transpose`].
pub fn transpose<T: FloatingPoint>(matrix: &Matrix<T>) -> Matrix<T> {
    matrix.transpose()
}

/// Free-function form of [`Matrix::multiply`].
pub fn multiply<T: FloatingPoint>(lhs: &Matrix<T>, rhs: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    lhs.multiply(rhs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frobenius_norm() {
        let m = Matrix::from_rows(&[[1.0f64, 2.0], [3.0, 4.0]]).unwrap();
        assert_eq!(frobenius(&m), 30.0f64.sqrt());
    }

    #[test]
    fn test_frobenius_keeps_fractions() {
        // an integer accumulator would report 0 here
        let m = Matrix::from_rows(&[[0.5f64, 0.5], [0.5, 0.5]]).unwrap();
        assert_eq!(m.frobenius_norm(), 1.0);
    }

    #[test]
    fn test_transpose_shape_and_values() {
        let m = Matrix::from_rows(&[[1.0f64, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
        let t = transpose(&m);
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.elements(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn test_transpose_vector() {
        let column = Matrix::from_vec(3, 1, vec![1.0f32, 2.0, 3.0]).unwrap();
        let row = column.transpose();
        assert_eq!(row.shape(), (1, 3));
        assert_eq!(row.elements(), column.elements());
    }

    #[test]
    fn test_multiply_concrete() {
        let a = Matrix::from_rows(&[[1.0f64, 2.0], [3.0, 4.0]]).unwrap();
        let b = Matrix::from_rows(&[[5.0f64, 6.0], [7.0, 8.0]]).unwrap();
        assert_eq!(multiply(&a, &b).unwrap().elements(), &[19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn test_multiply_rectangular() {
        let a = Matrix::from_rows(&[[1.0f64, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
        let b = Matrix::from_rows(&[[7.0f64], [8.0], [9.0]]).unwrap();
        let c = a.multiply(&b).unwrap();
        assert_eq!(c.shape(), (2, 1));
        assert_eq!(c.elements(), &[50.0, 122.0]);
    }

    #[test]
    fn test_multiply_incompatible() {
        let a = Matrix::from_rows(&[[1.0f64, 2.0, 3.0]]).unwrap();
        let b = Matrix::from_rows(&[[1.0f64, 2.0], [3.0, 4.0]]).unwrap();
        assert_eq!(
            a.multiply(&b),
            Err(MatrixError::IncompatibleShape { left: (1, 3), right: (2, 2) })
        );
    }
}
