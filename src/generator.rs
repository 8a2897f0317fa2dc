//! Random matrix generation.
//!
//! Elements are drawn either uniformly from `[min, max)` or from the standard
//! normal distribution. A fixed seed makes the output reproducible.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use tracing::debug;

use crate::numerics::types::matrix::Matrix;

pub const DEFAULT_MIN: f64 = 0.0;
pub const DEFAULT_MAX: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeneratorError {
    #[error("'rows' and 'cols' must be at least 1, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("Value of 'max' ({max}) is not greater than 'min' ({min})")]
    InvalidRange { min: f64, max: f64 },

    #[error("Invalid distribution parameters: {0}")]
    Distribution(String),
}

/// Distribution the elements are drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ElementDistribution {
    Uniform { min: f64, max: f64 },
    /// Mean 0, variance 1.
    StandardNormal,
}

impl Default for ElementDistribution {
    fn default() -> Self {
        ElementDistribution::Uniform {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub rows: usize,
    pub cols: usize,
    pub distribution: ElementDistribution,
    /// `None` seeds from the clock.
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            distribution: ElementDistribution::default(),
            seed: None,
        }
    }

    pub fn uniform(mut self, min: f64, max: f64) -> Self {
        self.distribution = ElementDistribution::Uniform { min, max };
        self
    }

    pub fn standard_normal(mut self) -> Self {
        self.distribution = ElementDistribution::StandardNormal;
        self
    }

    /// A seed of 0 means "seed from the clock".
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = (seed != 0).then_some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.rows == 0 || self.cols == 0 || self.rows.checked_mul(self.cols).is_none() {
            return Err(GeneratorError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if let ElementDistribution::Uniform { min, max } = self.distribution {
            // the sampler needs a finite width, not just finite bounds
            if !(min < max) || !(max - min).is_finite() {
                return Err(GeneratorError::InvalidRange { min, max });
            }
        }
        Ok(())
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

/// Generate a random matrix according to `config`.
pub fn generate(config: &GeneratorConfig) -> Result<Matrix<f64>, GeneratorError> {
    config.validate()?;

    let seed = config.seed.unwrap_or_else(clock_seed);
    let mut rng = StdRng::seed_from_u64(seed);
    let total = config.rows.saturating_mul(config.cols);
    debug!(rows = config.rows, cols = config.cols, seed, "generating random matrix");

    let elements: Vec<f64> = match config.distribution {
        ElementDistribution::Uniform { min, max } => {
            let uniform = Uniform::new(min, max);
            uniform.sample_iter(&mut rng).take(total).collect()
        }
        ElementDistribution::StandardNormal => {
            let normal = Normal::new(0.0, 1.0)
                .map_err(|e| GeneratorError::Distribution(e.to_string()))?;
            normal.sample_iter(&mut rng).take(total).collect()
        }
    };

    Matrix::from_vec(config.rows, config.cols, elements)
        .map_err(|_| GeneratorError::InvalidDimensions { rows: config.rows, cols: config.cols })
}
