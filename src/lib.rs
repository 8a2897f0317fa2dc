//! # matcalc - small dense matrix calculator
//!
//! The core is a cofactor-expansion kernel computing determinant, adjoint and
//! inverse of square matrices. Around it sit the rectangular operations
//! (Frobenius norm, transpose, multiply), the text matrix file format, a
//! flag-driven calculator and a random matrix generator.
//!
//! ```rust
//! use matcalc::Matrix;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]])?;
//! assert_eq!(m.determinant()?, -2.0);
//! assert_eq!(m.inverse()?.elements(), &[-2.0, 1.0, 1.5, -0.5]);
//! # Ok(())
//! # }
//! ```

pub mod calculator;
pub mod error;
pub mod generator;
pub mod io;
pub mod logging;
pub mod numerics;
pub mod settings;

pub use calculator::{Calculator, CalculatorError, Operation, Outcome};
pub use error::MatrixError;
pub use io::FormatError;
pub use numerics::{CofactorKernel, FloatingPoint, KernelConfig, Matrix};

/// Version written into the header comment of output files.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Comment line recording the producing version, e.g. `Version = 0.1.0`.
pub fn version_comment() -> String {
    format!("Version = {VERSION}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert!(!VERSION.is_empty());
        assert!(version_comment().starts_with("Version = "));
    }
}
