//! Determinant, adjoint and inverse by recursive cofactor expansion.
//!
//! Expansion runs along the first row and is `O(n!)` in the rank, which is
//! why every entry point enforces [`KernelConfig::max_rank`]. Each recursion
//! frame owns a single minor buffer that it refills for every column.

use tracing::{debug, trace};

use crate::error::MatrixError;
use crate::numerics::config::KernelConfig;
use crate::numerics::types::matrix::{fill_minor, Matrix};
use crate::numerics::types::traits::FloatingPoint;

/// Cofactor-expansion kernel bound to a [`KernelConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CofactorKernel {
    config: KernelConfig,
}

impl CofactorKernel {
    pub fn new(config: KernelConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    /// Returns the rank of `matrix` after checking it is square and within
    /// the configured size limit.
    fn checked_rank<T: FloatingPoint>(&self, matrix: &Matrix<T>) -> Result<usize, MatrixError> {
        let (rows, cols) = matrix.shape();
        if rows != cols {
            return Err(MatrixError::InvalidShape { rows, cols });
        }
        if rows > self.config.max_rank {
            return Err(MatrixError::SizeLimitExceeded {
                rank: rows,
                max_rank: self.config.max_rank,
            });
        }
        Ok(rows)
    }

    /// Determinant by expansion along the first row.
    ///
    /// # Examples
    /// ```
    /// use matcalc::numerics::cofactor::CofactorKernel;
    /// use matcalc::numerics::types::matrix::Matrix;
    ///
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// let det = CofactorKernel::default().determinant(&m).unwrap();
    /// assert_eq!(det, -2.0);
    /// ```
    pub fn determinant<T: FloatingPoint>(&self, matrix: &Matrix<T>) -> Result<T, MatrixError> {
        let rank = self.checked_rank(matrix)?;
        debug!(rank, "computing determinant by cofactor expansion");
        Ok(expand(matrix.elements(), rank))
    }

    /// Adjugate: the transpose of the cofactor matrix.
    ///
    /// A rank 1 matrix has adjoint `[[1]]`.
    pub fn adjoint<T: FloatingPoint>(&self, matrix: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        let rank = self.checked_rank(matrix)?;
        debug!(rank, "computing adjoint");
        Matrix::from_vec(rank, rank, adjugate(matrix.elements(), rank))
    }

    /// Inverse as `adjoint / determinant`.
    ///
    /// Fails with [`MatrixError::SingularMatrix`] when the determinant is not
    /// finite or its magnitude is within `singular_tolerance` of zero, and
    /// also when the division overflows, so the result never holds inf or NaN.
    pub fn inverse<T: FloatingPoint>(&self, matrix: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        let rank = self.checked_rank(matrix)?;
        let det = expand(matrix.elements(), rank);
        let det_f64 = det.to_f64();
        debug!(rank, determinant = det_f64, "computing inverse");

        if !det.is_finite() || det_f64.abs() <= self.config.singular_tolerance {
            return Err(MatrixError::SingularMatrix { determinant: det_f64 });
        }

        let elements: Vec<T> = adjugate(matrix.elements(), rank)
            .into_iter()
            .map(|x| x / det)
            .collect();
        let inverse = Matrix::from_vec(rank, rank, elements)?;
        if !inverse.is_finite() {
            return Err(MatrixError::SingularMatrix { determinant: det_f64 });
        }
        Ok(inverse)
    }
}

/// `(-1)^k * value`
#[inline]
fn signed<T: FloatingPoint>(k: usize, value: T) -> T {
    if k % 2 == 0 {
        value
    } else {
        -value
    }
}

fn expand<T: FloatingPoint>(elements: &[T], rank: usize) -> T {
    match rank {
        1 => elements[0],
        2 => elements[0] * elements[3] - elements[2] * elements[1],
        _ => {
            trace!(rank, "expanding along first row");
            let mut minor = Vec::with_capacity((rank - 1) * (rank - 1));
            let mut det = T::zero();
            for i in 0..rank {
                fill_minor(elements, rank, 0, i, &mut minor);
                det = det + signed(i, elements[i] * expand(&minor, rank - 1));
            }
            det
        }
    }
}

fn adjugate<T: FloatingPoint>(elements: &[T], rank: usize) -> Vec<T> {
    if rank == 1 {
        return vec![T::one()];
    }
    let mut result = vec![T::zero(); rank * rank];
    let mut minor = Vec::with_capacity((rank - 1) * (rank - 1));
    for i in 0..rank {
        for j in 0..rank {
            fill_minor(elements, rank, i, j, &mut minor);
            // cofactor of (i, j) lands at (j, i)
            result[rank * j + i] = signed(i + j, expand(&minor, rank - 1));
        }
    }
    result
}

/// Determinant with the default [`KernelConfig`].
pub fn determinant<T: FloatingPoint>(matrix: &Matrix<T>) -> Result<T, MatrixError> {
    CofactorKernel::default().determinant(matrix)
}

/// Adjoint with the default [`KernelConfig`].
pub fn adjoint<T: FloatingPoint>(matrix: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    CofactorKernel::default().adjoint(matrix)
}

/// Inverse with the default [`KernelConfig`].
pub fn inverse<T: FloatingPoint>(matrix: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    CofactorKernel::default().inverse(matrix)
}

impl<T: FloatingPoint> Matrix<T> {
    pub fn determinant(&self) -> Result<T, MatrixError> {
        determinant(self)
    }

    pub fn adjoint(&self) -> Result<Self, MatrixError> {
        adjoint(self)
    }

    pub fn inverse(&self) -> Result<Self, MatrixError> {
        inverse(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_2x2() -> Matrix<f64> {
        Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap()
    }

    fn sample_4x4() -> Matrix<f64> {
        Matrix::from_rows(&[
            [2.0, -1.0, 0.0, 3.0],
            [1.0, 4.0, -2.0, 0.5],
            [0.0, 1.0, 5.0, -1.0],
            [3.0, 0.0, 1.0, 2.0],
        ]).unwrap()
    }

    #[test]
    fn test_concrete_2x2_scenario() {
        let m = sample_2x2();
        assert_eq!(m.determinant().unwrap(), -2.0);
        assert_eq!(m.adjoint().unwrap().elements(), &[4.0, -2.0, -3.0, 1.0]);
        assert_eq!(m.inverse().unwrap().elements(), &[-2.0, 1.0, 1.5, -0.5]);
    }

    #[test]
    fn test_base_cases() {
        let single = Matrix::from_vec(1, 1, vec![7.5f64]).unwrap();
        assert_eq!(single.determinant().unwrap(), 7.5);
        assert_eq!(single.adjoint().unwrap().elements(), &[1.0]);
        assert_eq!(single.inverse().unwrap().elements(), &[1.0 / 7.5]);

        let m = Matrix::from_rows(&[[3.0f64, 8.0], [4.0, 6.0]]).unwrap();
        assert_eq!(m.determinant().unwrap(), 3.0 * 6.0 - 8.0 * 4.0);
    }

    #[test]
    fn test_3x3_determinant() {
        let m = Matrix::from_rows(&[
            [6.0f64, 1.0, 1.0],
            [4.0, -2.0, 5.0],
            [2.0, 8.0, 7.0],
        ]).unwrap();
        assert_eq!(m.determinant().unwrap(), -306.0);

        let upper = Matrix::from_rows(&[
            [2.0f64, 5.0, -1.0],
            [0.0, 3.0, 4.0],
            [0.0, 0.0, 0.5],
        ]).unwrap();
        assert_eq!(upper.determinant().unwrap(), 3.0);
    }

    #[test]
    fn test_identity_laws() {
        for rank in 1..=5 {
            let id = Matrix::<f64>::identity(rank).unwrap();
            assert_eq!(id.determinant().unwrap(), 1.0);
            assert_eq!(id.adjoint().unwrap(), id);
            assert_eq!(id.inverse().unwrap(), id);
        }
    }

    #[test]
    fn test_adjoint_is_transposed_cofactor_matrix() {
        let m = Matrix::from_rows(&[
            [1.0f64, 2.0, 3.0],
            [0.0, 4.0, 5.0],
            [1.0, 0.0, 6.0],
        ]).unwrap();
        let adj = m.adjoint().unwrap();
        assert_eq!(
            adj.elements(),
            &[24.0, -12.0, -2.0, 5.0, 3.0, -5.0, -4.0, 2.0, 4.0]
        );
    }

    #[test]
    fn test_inverse_of_4x4() {
        let m = sample_4x4();
        let inv = m.inverse().unwrap();
        let product = m.multiply(&inv).unwrap();
        assert!(product.approx_eq(&Matrix::identity(4).unwrap(), 1e-9));
    }

    #[test]
    fn test_singular_matrix_is_rejected() {
        let m = Matrix::from_rows(&[
            [1.0f64, 2.0, 3.0],
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
        ]).unwrap();
        assert_eq!(m.inverse(), Err(MatrixError::SingularMatrix { determinant: 0.0 }));
    }

    #[test]
    fn test_tolerance_widens_singularity() {
        let m = Matrix::from_rows(&[[1.0f64, 0.0], [0.0, 1e-14]]).unwrap();
        assert!(m.inverse().is_ok());

        let kernel = CofactorKernel::new(KernelConfig::with_rounding_tolerance());
        assert!(matches!(kernel.inverse(&m), Err(MatrixError::SingularMatrix { .. })));
    }

    #[test]
    fn test_non_square_is_rejected() {
        let m = Matrix::from_rows(&[[1.0f64, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
        let expected = MatrixError::InvalidShape { rows: 2, cols: 3 };
        assert_eq!(m.determinant(), Err(expected.clone()));
        assert_eq!(m.adjoint(), Err(expected.clone()));
        assert_eq!(m.inverse(), Err(expected));
    }

    #[test]
    fn test_size_limit() {
        let kernel = CofactorKernel::new(KernelConfig::new(3, 0.0));
        let m = sample_4x4();
        let expected = MatrixError::SizeLimitExceeded { rank: 4, max_rank: 3 };
        assert_eq!(kernel.determinant(&m), Err(expected.clone()));
        assert_eq!(kernel.adjoint(&m), Err(expected.clone()));
        assert_eq!(kernel.inverse(&m), Err(expected));

        let too_big = Matrix::<f64>::identity(13).unwrap();
        assert!(matches!(too_big.determinant(), Err(MatrixError::SizeLimitExceeded { .. })));
    }

    #[test]
    fn test_single_precision() {
        let m = Matrix::from_rows(&[[1.0f32, 2.0], [3.0, 4.0]]).unwrap();
        assert_eq!(m.determinant().unwrap(), -2.0f32);
        assert_eq!(m.inverse().unwrap().elements(), &[-2.0f32, 1.0, 1.5, -0.5]);
    }
}
