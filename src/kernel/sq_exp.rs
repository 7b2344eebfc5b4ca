//! Squared-exponential (isotropic Gaussian) kernel family
//!
//! K(x, y) = s² · exp(-0.5 · ||x - y||² / l²)
//!
//! where l is the bandwidth and s the output scale. Both are passed per call
//! as their natural logarithms:
//! - [`UnitSqExpKernel`]: `[ln l]`, scale fixed at 1
//! - [`ScaledSqExpKernel`]: `[ln l, ln s]`
//!
//! The log form is computed as `-exp(2·ln d - 2·ln l - ln 2)`, which never
//! squares the distance or the bandwidth in linear space. At `d = 0` the
//! inner exponent is `-inf` and the result is `-0.0`, so K(x, x) = 1 comes out
//! of the same formula.

use crate::kernel::traits::{assert_num_hyper, LogKernelHyper, NumHyper};
use crate::utils::{floats, hyper};
use std::f64::consts::LN_2;

/// Squared-exponential kernel with unit scale
///
/// One hyperparameter: the log bandwidth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnitSqExpKernel;

impl UnitSqExpKernel {
    /// Log-space hyperparameter vector for a linear-space bandwidth
    pub fn hyper(bandwidth: f64) -> Vec<f64> {
        hyper::to_log(&[bandwidth])
    }
}

impl NumHyper for UnitSqExpKernel {
    fn num_hyper(&self, _dim: usize) -> usize {
        1
    }
}

impl LogKernelHyper for UnitSqExpKernel {
    fn log_eval_hyper(&self, x: &[f64], y: &[f64], hyper: &[f64]) -> f64 {
        assert_num_hyper(1, hyper, x.len());
        let d = floats::distance(x, y);
        -(2.0 * d.ln() - 2.0 * hyper[0] - LN_2).exp()
    }
}

/// Squared-exponential kernel with an output scale
///
/// Two hyperparameters, in order: the log bandwidth and the log scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScaledSqExpKernel;

impl ScaledSqExpKernel {
    /// Log-space hyperparameter vector for a linear-space bandwidth and scale
    pub fn hyper(bandwidth: f64, scale: f64) -> Vec<f64> {
        hyper::to_log(&[bandwidth, scale])
    }
}

impl NumHyper for ScaledSqExpKernel {
    fn num_hyper(&self, _dim: usize) -> usize {
        2
    }
}

impl LogKernelHyper for ScaledSqExpKernel {
    fn log_eval_hyper(&self, x: &[f64], y: &[f64], hyper: &[f64]) -> f64 {
        assert_num_hyper(2, hyper, x.len());
        let log_scale = hyper[1];
        2.0 * log_scale + UnitSqExpKernel.log_eval_hyper(x, y, &hyper[..1])
    }
}
