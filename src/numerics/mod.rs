// src/numerics/mod.rs
// Top-level numerics module: the matrix type, the cofactor kernel and the
// rectangular operations.

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod matrix;
    pub mod traits;
}

pub mod cofactor;
pub mod config;
pub mod ops;

pub use config::KernelConfig;
pub use cofactor::CofactorKernel;
pub use types::matrix::Matrix;
pub use types::traits::FloatingPoint;
