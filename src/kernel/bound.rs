//! Hyperparameter binding
//!
//! Wraps a hyperparameter kernel together with a fixed hyperparameter vector
//! so it can be handed to code that only knows about [`Kernel`] and
//! [`LogKernel`], e.g. something assembling a Gram matrix once training has
//! settled on the hyperparameters.

use crate::kernel::traits::{Kernel, LogKernel, LogKernelHyper, NumHyper};

/// A hyperparameter kernel with its hyperparameters fixed
///
/// Every evaluation forwards the captured vector unchanged. The wrapped
/// kernel does any length checking, on each call.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundKernel<K> {
    kernel: K,
    hyper: Vec<f64>,
}

impl<K: LogKernelHyper> BoundKernel<K> {
    /// Bind `hyper` (log space) to `kernel`
    pub fn new(kernel: K, hyper: Vec<f64>) -> Self {
        Self { kernel, hyper }
    }

    /// The wrapped hyperparameter kernel
    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// The captured hyperparameters
    pub fn hyper(&self) -> &[f64] {
        &self.hyper
    }

    /// Split back into the kernel and its hyperparameters
    pub fn into_parts(self) -> (K, Vec<f64>) {
        (self.kernel, self.hyper)
    }
}

impl<K: LogKernelHyper> LogKernel for BoundKernel<K> {
    fn log_eval(&self, x: &[f64], y: &[f64]) -> f64 {
        self.kernel.log_eval_hyper(x, y, &self.hyper)
    }
}

impl<K: LogKernelHyper> Kernel for BoundKernel<K> {
    fn eval(&self, x: &[f64], y: &[f64]) -> f64 {
        self.log_eval(x, y).exp()
    }
}

impl<K: LogKernelHyper> NumHyper for BoundKernel<K> {
    fn num_hyper(&self, _dim: usize) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::{FixedNoiseKernel, ScaledSqExpKernel, UnitSqExpKernel};
    use approx::assert_abs_diff_eq;
    use std::sync::Arc;

    #[test]
    fn test_bound_kernel_forwards_hyper() {
        let hyper = vec![0.5_f64.ln(), 0.7];
        let bound = BoundKernel::new(ScaledSqExpKernel, hyper.clone());

        let pairs = [
            ([1.0, 3.0, 4.0], [0.0, 2.0, 6.0]),
            ([0.0, 0.0, 0.0], [0.0, 0.0, 0.0]),
            ([-1.0, 2.5, 9.0], [4.0, 2.5, -3.0]),
        ];
        for (x, y) in pairs.iter() {
            assert_eq!(bound.eval(x, y), ScaledSqExpKernel.eval_hyper(x, y, &hyper));
            assert_eq!(
                bound.log_eval(x, y),
                ScaledSqExpKernel.log_eval_hyper(x, y, &hyper)
            );
        }
    }

    #[test]
    fn test_bound_kernel_log_consistency() {
        let bound = UnitSqExpKernel.with_hyper(vec![0.0]);
        let x = [2.0, -1.0];
        let y = [0.5, 0.5];
        assert_abs_diff_eq!(bound.eval(&x, &x), bound.log_eval(&x, &x).exp(), epsilon = 1e-14);
        assert_abs_diff_eq!(bound.log_eval(&x, &y), bound.eval(&x, &y).ln(), epsilon = 1e-14);
    }

    #[test]
    fn test_bound_kernel_accessors() {
        let bound = BoundKernel::new(UnitSqExpKernel, vec![1.5]);
        assert_eq!(bound.kernel(), &UnitSqExpKernel);
        assert_eq!(bound.hyper(), &[1.5]);
        assert_eq!(bound.num_hyper(10), 0);

        let (kernel, hyper) = bound.into_parts();
        assert_eq!(kernel, UnitSqExpKernel);
        assert_eq!(hyper, vec![1.5]);
    }

    #[test]
    fn test_bound_kernel_over_shared_kernel() {
        let shared = Arc::new(ScaledSqExpKernel);
        let a = BoundKernel::new(Arc::clone(&shared), vec![0.0, 0.0]);
        let b = BoundKernel::new(shared, vec![1.0, 0.5]);
        let x = [1.0];
        let y = [2.0];
        assert!(a.eval(&x, &y) != b.eval(&x, &y));
    }

    #[test]
    fn test_bound_noise_kernel() {
        let bound = FixedNoiseKernel::new(-2.0).with_hyper(Vec::new());
        let x = [1.0, 1.0];
        assert_eq!(bound.log_eval(&x, &x), -2.0);
        assert_eq!(bound.eval(&x, &[1.0, 0.0]), 0.0);
    }

    #[test]
    #[should_panic(expected = "wrong number of hyperparameters")]
    fn test_bound_kernel_wrong_count_fails_on_eval() {
        let bound = BoundKernel::new(ScaledSqExpKernel, vec![0.0]);
        bound.eval(&[1.0], &[2.0]);
    }
}
