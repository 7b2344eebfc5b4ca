//! Fixed observation-noise kernel
//!
//! K(x, y) = σ² if x and y are the same sample, 0 otherwise.
//!
//! Models i.i.d. observation noise in Gaussian processes. The noise level is
//! stored as ln σ² and fixed at construction, so the kernel takes no
//! hyperparameters when evaluated.

use crate::kernel::traits::{assert_num_hyper, Kernel, LogKernel, LogKernelHyper, NumHyper};
use crate::utils::hyper;

/// Observation-noise kernel with a fixed log noise level
///
/// "Same sample" means the very same slice or an exactly equal one, element
/// by element. Two samples that are merely close get zero covariance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedNoiseKernel {
    log_noise: f64,
}

impl FixedNoiseKernel {
    /// Create a noise kernel from the log of the noise level
    pub fn new(log_noise: f64) -> Self {
        Self { log_noise }
    }

    /// Create a noise kernel from a linear-space noise level
    ///
    /// # Panics
    /// Panics if `noise` is negative
    pub fn from_noise(noise: f64) -> Self {
        assert!(noise >= 0.0, "Noise level must be non-negative, got: {}", noise);
        Self::new(hyper::to_log(&[noise])[0])
    }

    /// Log of the noise level
    pub fn log_noise(&self) -> f64 {
        self.log_noise
    }

    /// Noise level in linear space
    pub fn noise(&self) -> f64 {
        self.log_noise.exp()
    }
}

fn same_sample(x: &[f64], y: &[f64]) -> bool {
    std::ptr::eq(x, y) || x == y
}

impl NumHyper for FixedNoiseKernel {
    fn num_hyper(&self, _dim: usize) -> usize {
        0
    }
}

impl Kernel for FixedNoiseKernel {
    fn eval(&self, x: &[f64], y: &[f64]) -> f64 {
        if same_sample(x, y) {
            self.noise()
        } else {
            0.0
        }
    }
}

impl LogKernel for FixedNoiseKernel {
    fn log_eval(&self, x: &[f64], y: &[f64]) -> f64 {
        if same_sample(x, y) {
            self.log_noise
        } else {
            f64::NEG_INFINITY
        }
    }
}

impl LogKernelHyper for FixedNoiseKernel {
    fn log_eval_hyper(&self, x: &[f64], y: &[f64], hyper: &[f64]) -> f64 {
        assert_num_hyper(0, hyper, x.len());
        self.log_eval(x, y)
    }
}
