// src/numerics/types/traits.rs
// Scalar trait shared by the matrix type and the kernel.

use core::fmt::{Debug, Display};
use core::str::FromStr;

/// FloatingPoint is the scalar bound for matrix elements.
///
/// Implemented for `f32` and `f64`. Besides the arithmetic operators the
/// kernel needs `sqrt` for the Frobenius norm, `abs`/`is_finite` for the
/// singularity check and `FromStr`/`Display` for the text format.
pub trait FloatingPoint:
Copy + PartialOrd + Debug + Display + FromStr
+ core::ops::Add<Output = Self>
+ core::ops::Sub<Output = Self>
+ core::ops::Mul<Output = Self>
+ core::ops::Div<Output = Self>
+ core::ops::Neg<Output = Self>
{
    fn zero() -> Self;
    fn one() -> Self;
    fn sqrt(self) -> Self;
    fn abs(self) -> Self;
    fn is_finite(self) -> bool;
    fn to_f64(self) -> f64;
    fn from_f64(value: f64) -> Self;
}

impl FloatingPoint for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn sqrt(self) -> Self { f32::sqrt(self) }
    fn abs(self) -> Self { f32::abs(self) }
    fn is_finite(self) -> bool { f32::is_finite(self) }
    fn to_f64(self) -> f64 { self as f64 }
    fn from_f64(value: f64) -> Self { value as f32 }
}

impl FloatingPoint for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn sqrt(self) -> Self { f64::sqrt(self) }
    fn abs(self) -> Self { f64::abs(self) }
    fn is_finite(self) -> bool { f64::is_finite(self) }
    fn to_f64(self) -> f64 { self }
    fn from_f64(value: f64) -> Self { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hypot<T: FloatingPoint>(a: T, b: T) -> T {
        (a * a + b * b).sqrt()
    }

    #[test]
    fn test_generic_arithmetic() {
        assert_eq!(hypot(3.0f32, 4.0f32), 5.0);
        assert_eq!(hypot(3.0f64, 4.0f64), 5.0);
        assert_eq!(FloatingPoint::abs(-2.5f64), 2.5);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(<f32 as FloatingPoint>::from_f64(1.5), 1.5f32);
        assert_eq!(FloatingPoint::to_f64(0.25f32), 0.25f64);
        assert!(!FloatingPoint::is_finite(f64::NAN));
        assert!(FloatingPoint::is_finite(<f64 as FloatingPoint>::one()));
    }
}
