//! Operation dispatch for the calculator.
//!
//! Each operation is chosen by a single-letter flag and evaluated against one
//! matrix, or two for multiplication.

use std::fmt;

use tracing::info;

use crate::error::MatrixError;
use crate::numerics::cofactor::CofactorKernel;
use crate::numerics::config::KernelConfig;
use crate::numerics::types::matrix::Matrix;
use crate::numerics::types::traits::FloatingPoint;

/// Errors from operation selection and evaluation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalculatorError {
    #[error("Operation '{0}' needs a second matrix")]
    MissingOperand(Operation),

    #[error("Operation '{0}' takes a single matrix")]
    UnexpectedOperand(Operation),

    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Frobenius,
    Transpose,
    Multiply,
    Determinant,
    Adjoint,
    Inverse,
}

impl Operation {
    pub fn all() -> [Operation; 6] {
        [
            Operation::Frobenius,
            Operation::Transpose,
            Operation::Multiply,
            Operation::Determinant,
            Operation::Adjoint,
            Operation::Inverse,
        ]
    }

    /// Command-line letter selecting this operation.
    pub fn flag(self) -> char {
        match self {
            Operation::Frobenius => 'f',
            Operation::Transpose => 't',
            Operation::Multiply => 'm',
            Operation::Determinant => 'd',
            Operation::Adjoint => 'a',
            Operation::Inverse => 'i',
        }
    }

    pub fn from_flag(flag: char) -> Option<Self> {
        Self::all().into_iter().find(|op| op.flag() == flag)
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::Frobenius => "frobenius norm",
            Operation::Transpose => "transpose",
            Operation::Multiply => "multiply",
            Operation::Determinant => "determinant",
            Operation::Adjoint => "adjoint",
            Operation::Inverse => "inverse",
        }
    }

    pub fn operand_count(self) -> usize {
        match self {
            Operation::Multiply => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of an operation: norm and determinant give a scalar, the rest a matrix.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T: FloatingPoint = f64> {
    Scalar(T),
    Matrix(Matrix<T>),
}

impl<T: FloatingPoint> Outcome<T> {
    pub fn as_scalar(&self) -> Option<T> {
        match self {
            Outcome::Scalar(value) => Some(*value),
            Outcome::Matrix(_) => None,
        }
    }

    pub fn as_matrix(&self) -> Option<&Matrix<T>> {
        match self {
            Outcome::Matrix(m) => Some(m),
            Outcome::Scalar(_) => None,
        }
    }
}

/// Evaluates calculator operations with a configured kernel.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator {
    kernel: CofactorKernel,
}

impl Calculator {
    pub fn new(config: KernelConfig) -> Self {
        Self {
            kernel: CofactorKernel::new(config),
        }
    }

    pub fn kernel(&self) -> &CofactorKernel {
        &self.kernel
    }

    /// Run `op` on `first`, with `second` required for multiplication only.
    pub fn evaluate<T: FloatingPoint>(
        &self,
        op: Operation,
        first: &Matrix<T>,
        second: Option<&Matrix<T>>,
    ) -> Result<Outcome<T>, CalculatorError> {
        match (op, second) {
            (Operation::Multiply, None) => return Err(CalculatorError::MissingOperand(op)),
            (Operation::Multiply, Some(_)) => {}
            (_, Some(_)) => return Err(CalculatorError::UnexpectedOperand(op)),
            (_, None) => {}
        }

        info!(operation = op.name(), rows = first.rows(), cols = first.cols(), "evaluating");
        let outcome = match op {
            Operation::Frobenius => Outcome::Scalar(first.frobenius_norm()),
            Operation::Transpose => Outcome::Matrix(first.transpose()),
            Operation::Multiply => match second {
                Some(rhs) => Outcome::Matrix(first.multiply(rhs)?),
                None => return Err(CalculatorError::MissingOperand(op)),
            },
            Operation::Determinant => Outcome::Scalar(self.kernel.determinant(first)?),
            Operation::Adjoint => Outcome::Matrix(self.kernel.adjoint(first)?),
            Operation::Inverse => Outcome::Matrix(self.kernel.inverse(first)?),
        };
        Ok(outcome)
    }
}
