//! Sum of kernels, computed in log space
//!
//! K(x, y) = Σᵢ Kᵢ(x, y)
//!
//! Constituents are evaluated in log space and reduced with log-sum-exp, so a
//! term many orders of magnitude below the others still contributes and
//! nothing overflows on the way.

use crate::kernel::traits::{Kernel, LogKernel, NumHyper};
use crate::utils::floats;
use std::fmt;
use std::sync::Arc;

/// Additive combination of log-space kernels
///
/// Constituents are shared handles and may be used elsewhere at the same
/// time. An empty sum evaluates to 0 (log value `-inf`).
#[derive(Clone, Default)]
pub struct SumKernel {
    kernels: Vec<Arc<dyn LogKernel>>,
}

impl SumKernel {
    /// Create a sum over the given kernels, in order
    pub fn new(kernels: Vec<Arc<dyn LogKernel>>) -> Self {
        Self { kernels }
    }

    /// Append a constituent kernel
    pub fn push<K: LogKernel + 'static>(&mut self, kernel: K) {
        self.kernels.push(Arc::new(kernel));
    }

    /// Builder form of [`push`](Self::push)
    pub fn with<K: LogKernel + 'static>(mut self, kernel: K) -> Self {
        self.push(kernel);
        self
    }

    /// Append an already shared constituent
    pub fn push_shared(&mut self, kernel: Arc<dyn LogKernel>) {
        self.kernels.push(kernel);
    }

    /// The constituent kernels
    pub fn kernels(&self) -> &[Arc<dyn LogKernel>] {
        &self.kernels
    }

    /// Number of constituent kernels
    pub fn len(&self) -> usize {
        self.kernels.len()
    }

    /// Whether the sum has no constituents
    pub fn is_empty(&self) -> bool {
        self.kernels.is_empty()
    }
}

impl fmt::Debug for SumKernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SumKernel")
            .field("n_kernels", &self.kernels.len())
            .finish()
    }
}

impl FromIterator<Arc<dyn LogKernel>> for SumKernel {
    fn from_iter<I: IntoIterator<Item = Arc<dyn LogKernel>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl LogKernel for SumKernel {
    fn log_eval(&self, x: &[f64], y: &[f64]) -> f64 {
        let log_values: Vec<f64> = self.kernels.iter().map(|k| k.log_eval(x, y)).collect();
        floats::log_sum_exp(&log_values)
    }
}

impl Kernel for SumKernel {
    fn eval(&self, x: &[f64], y: &[f64]) -> f64 {
        self.log_eval(x, y).exp()
    }
}

impl NumHyper for SumKernel {
    fn num_hyper(&self, _dim: usize) -> usize {
        0
    }
}
