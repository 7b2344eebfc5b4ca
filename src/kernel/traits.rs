//! Capability traits for kernel functions
//!
//! Kernels come in two families. Fixed kernels have every parameter baked in
//! at construction and implement [`Kernel`] and [`LogKernel`]. Hyperparameter
//! kernels take their (log-space) hyperparameters on every call through
//! [`LogKernelHyper`] and report the expected vector length through
//! [`NumHyper`]; they hold no state, so training code can evaluate them
//! repeatedly while the hyperparameters change. [`BoundKernel`] turns the
//! second family into the first.

use crate::core::{KernelError, Result};
use crate::kernel::BoundKernel;
use std::sync::Arc;

/// Kernel value evaluation
///
/// Admissible covariance functions return values `>= 0`, but the trait does
/// not enforce it.
pub trait Kernel: Send + Sync {
    /// Compute the kernel value K(x, y)
    fn eval(&self, x: &[f64], y: &[f64]) -> f64;
}

/// Kernel evaluation in log space
///
/// `log_eval(x, y)` must agree with `ln(eval(x, y))` for types implementing
/// both. Families that can form the logarithm directly avoid materializing
/// values that would overflow or underflow in linear space.
pub trait LogKernel: Send + Sync {
    /// Compute ln K(x, y)
    fn log_eval(&self, x: &[f64], y: &[f64]) -> f64;
}

/// Log-space evaluation with hyperparameters supplied per call
pub trait LogKernelHyper: Send + Sync {
    /// Compute ln K(x, y; hyper)
    ///
    /// # Panics
    /// Panics with [`KernelError::BadNumHyper`]'s message if `hyper` does not
    /// have exactly the length the family requires for `x.len()` inputs.
    fn log_eval_hyper(&self, x: &[f64], y: &[f64], hyper: &[f64]) -> f64;

    /// Compute K(x, y; hyper) = exp(ln K(x, y; hyper))
    fn eval_hyper(&self, x: &[f64], y: &[f64], hyper: &[f64]) -> f64 {
        self.log_eval_hyper(x, y, hyper).exp()
    }

    /// Fix the hyperparameters, producing a kernel usable wherever a
    /// parameter-free [`Kernel`] or [`LogKernel`] is expected
    fn with_hyper(self, hyper: Vec<f64>) -> BoundKernel<Self>
    where
        Self: Sized,
    {
        BoundKernel::new(self, hyper)
    }
}

/// Number of hyperparameters a kernel family takes
pub trait NumHyper {
    /// Required hyperparameter vector length for inputs of dimension `dim`
    fn num_hyper(&self, dim: usize) -> usize;
}

/// A hyperparameter kernel usable as a trait object
pub trait HyperKernel: LogKernelHyper + NumHyper {}

impl<T: LogKernelHyper + NumHyper + ?Sized> HyperKernel for T {}

/// Check a hyperparameter vector against the kernel's expected count
///
/// This is the non-panicking counterpart of the check every
/// [`LogKernelHyper`] implementation performs, for callers that want to
/// report a bad vector before evaluating.
pub fn check_num_hyper<K: NumHyper + ?Sized>(kernel: &K, dim: usize, hyper: &[f64]) -> Result<()> {
    let expected = kernel.num_hyper(dim);
    if hyper.len() != expected {
        return Err(KernelError::BadNumHyper {
            expected,
            actual: hyper.len(),
            dim,
        });
    }
    Ok(())
}

/// Abort the current evaluation if `hyper` has the wrong length
#[track_caller]
pub(crate) fn assert_num_hyper(expected: usize, hyper: &[f64], dim: usize) {
    if hyper.len() != expected {
        panic!(
            "{}",
            KernelError::BadNumHyper {
                expected,
                actual: hyper.len(),
                dim,
            }
        );
    }
}

macro_rules! forward_capabilities {
    ($($ptr:ty),*) => {$(
        impl<K: Kernel + ?Sized> Kernel for $ptr {
            fn eval(&self, x: &[f64], y: &[f64]) -> f64 {
                (**self).eval(x, y)
            }
        }

        impl<K: LogKernel + ?Sized> LogKernel for $ptr {
            fn log_eval(&self, x: &[f64], y: &[f64]) -> f64 {
                (**self).log_eval(x, y)
            }
        }

        impl<K: LogKernelHyper + ?Sized> LogKernelHyper for $ptr {
            fn log_eval_hyper(&self, x: &[f64], y: &[f64], hyper: &[f64]) -> f64 {
                (**self).log_eval_hyper(x, y, hyper)
            }

            fn eval_hyper(&self, x: &[f64], y: &[f64], hyper: &[f64]) -> f64 {
                (**self).eval_hyper(x, y, hyper)
            }
        }

        impl<K: NumHyper + ?Sized> NumHyper for $ptr {
            fn num_hyper(&self, dim: usize) -> usize {
                (**self).num_hyper(dim)
            }
        }
    )*};
}

forward_capabilities!(&K, Box<K>, Arc<K>);
