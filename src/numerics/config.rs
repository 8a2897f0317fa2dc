use serde::{Deserialize, Serialize};

/// Largest rank the cofactor kernel accepts by default. Expansion is
/// factorial in the rank, so rank 12 already takes a noticeable time.
pub const DEFAULT_MAX_RANK: usize = 12;

/// Limits applied by the cofactor-expansion kernel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelConfig {
    /// Maximum rank accepted by determinant, adjoint and inverse.
    pub max_rank: usize,
    /// A determinant whose magnitude is at or below this value makes
    /// `inverse` fail with `SingularMatrix`.
    pub singular_tolerance: f64,
}

impl Default for KernelConfig {
    /// Rank limit of 12 and an exact zero test for singularity.
    fn default() -> Self {
        Self {
            max_rank: DEFAULT_MAX_RANK,
            singular_tolerance: 0.0,
        }
    }
}

impl KernelConfig {
    pub fn new(max_rank: usize, singular_tolerance: f64) -> Self {
        Self {
            max_rank,
            singular_tolerance,
        }
    }

    /// Treat determinants within `1e-12` of zero as singular.
    pub fn with_rounding_tolerance() -> Self {
        Self {
            singular_tolerance: 1e-12,
            ..Self::default()
        }
    }

    /// Small ranks only, for interactive use where expansion must be instant.
    pub fn interactive() -> Self {
        Self {
            max_rank: 8,
            ..Self::default()
        }
    }
}
