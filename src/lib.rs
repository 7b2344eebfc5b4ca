//! Kernel functions for Gaussian processes and other kernel methods
//!
//! Kernels are evaluated in log space where possible and take their
//! hyperparameters as log-space vectors. Hyperparameter kernels
//! ([`UnitSqExpKernel`], [`ScaledSqExpKernel`]) receive them on every call so
//! training code can reuse one kernel value across iterations; fixed kernels
//! ([`FixedNoiseKernel`], [`BoundKernel`], [`SumKernel`]) carry everything they
//! need.
//!
//! ```rust
//! use gpkernel::{Kernel, LogKernelHyper, SumKernel, FixedNoiseKernel, ScaledSqExpKernel};
//!
//! let signal = ScaledSqExpKernel.with_hyper(ScaledSqExpKernel::hyper(0.5, 2.0));
//! let noise = FixedNoiseKernel::from_noise(1e-4);
//! let kernel = SumKernel::default().with(signal).with(noise);
//!
//! let x = [1.0, 3.0, 4.0];
//! let k = kernel.eval(&x, &x);
//! assert!((k - 4.0001).abs() < 1e-12);
//! ```

pub mod config;
pub mod core;
pub mod kernel;
pub mod persistence;
pub mod utils;

// Re-export main types for convenience
pub use crate::config::{HyperFamily, KernelConfig};
pub use crate::core::{KernelError, Result};
pub use crate::kernel::*;
pub use crate::persistence::KernelFile;

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
