//! Declarative kernel descriptions
//!
//! [`KernelConfig`] describes a fixed kernel as plain data so it can be read
//! from and written to JSON. Building a config yields a shared
//! [`LogKernel`] trait object: squared-exponential entries become
//! [`BoundKernel`]s and `sum` entries become [`SumKernel`]s.
//!
//! ```rust
//! use gpkernel::config::KernelConfig;
//! use gpkernel::kernel::LogKernel;
//!
//! let config: KernelConfig = serde_json::from_str(
//!     r#"{"type": "sum", "kernels": [
//!         {"type": "scaled_sq_exp", "log_bandwidth": 0.0, "log_scale": 0.0},
//!         {"type": "fixed_noise", "log_noise": -4.6}
//!     ]}"#,
//! ).unwrap();
//!
//! let kernel = config.build().unwrap();
//! let x = [1.0, 2.0];
//! assert!(kernel.log_eval(&x, &x) > 0.0);
//! ```

use crate::core::{KernelError, Result};
use crate::kernel::{
    check_num_hyper, BoundKernel, FixedNoiseKernel, HyperKernel, LogKernel, LogKernelHyper,
    ScaledSqExpKernel, SumKernel, UnitSqExpKernel,
};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A hyperparameterized kernel family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HyperFamily {
    /// Squared exponential with unit scale, hyperparameters `[ln l]`
    UnitSqExp,
    /// Squared exponential with output scale, hyperparameters `[ln l, ln s]`
    ScaledSqExp,
}

impl HyperFamily {
    /// The family's kernel as a trait object
    pub fn kernel(&self) -> Box<dyn HyperKernel> {
        match self {
            HyperFamily::UnitSqExp => Box::new(UnitSqExpKernel),
            HyperFamily::ScaledSqExp => Box::new(ScaledSqExpKernel),
        }
    }

    /// Stable identifier, matching the serialized form
    pub fn name(&self) -> &'static str {
        match self {
            HyperFamily::UnitSqExp => "unit_sq_exp",
            HyperFamily::ScaledSqExp => "scaled_sq_exp",
        }
    }
}

/// Serializable description of a fixed kernel
///
/// All parameters are stored in log space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum KernelConfig {
    FixedNoise { log_noise: f64 },
    UnitSqExp { log_bandwidth: f64 },
    ScaledSqExp { log_bandwidth: f64, log_scale: f64 },
    Sum { kernels: Vec<KernelConfig> },
}

impl KernelConfig {
    /// Describe `family` with its hyperparameters fixed to `hyper`
    ///
    /// The hyperparameter count is checked here so a bad vector is reported
    /// as an error instead of failing later on evaluation.
    pub fn from_family(family: HyperFamily, hyper: &[f64]) -> Result<Self> {
        // Neither family's count depends on the input dimension
        check_num_hyper(&*family.kernel(), 0, hyper)?;
        let config = match family {
            HyperFamily::UnitSqExp => KernelConfig::UnitSqExp {
                log_bandwidth: hyper[0],
            },
            HyperFamily::ScaledSqExp => KernelConfig::ScaledSqExp {
                log_bandwidth: hyper[0],
                log_scale: hyper[1],
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Short identifier of the kernel kind
    pub fn kind(&self) -> &'static str {
        match self {
            KernelConfig::FixedNoise { .. } => "fixed_noise",
            KernelConfig::UnitSqExp { .. } => HyperFamily::UnitSqExp.name(),
            KernelConfig::ScaledSqExp { .. } => HyperFamily::ScaledSqExp.name(),
            KernelConfig::Sum { .. } => "sum",
        }
    }

    /// Check that every parameter is usable
    ///
    /// Log-bandwidths and log-scales must be finite. A log noise level may
    /// also be `-inf` (zero noise).
    pub fn validate(&self) -> Result<()> {
        match self {
            KernelConfig::FixedNoise { log_noise } => {
                if log_noise.is_nan() || *log_noise == f64::INFINITY {
                    return Err(invalid("log_noise", *log_noise));
                }
            }
            KernelConfig::UnitSqExp { log_bandwidth } => {
                check_finite("log_bandwidth", *log_bandwidth)?;
            }
            KernelConfig::ScaledSqExp {
                log_bandwidth,
                log_scale,
            } => {
                check_finite("log_bandwidth", *log_bandwidth)?;
                check_finite("log_scale", *log_scale)?;
            }
            KernelConfig::Sum { kernels } => {
                for kernel in kernels {
                    kernel.validate()?;
                }
            }
        }
        Ok(())
    }

    /// Validate and construct the described kernel
    pub fn build(&self) -> Result<Arc<dyn LogKernel>> {
        self.validate()?;
        Ok(self.build_validated())
    }

    fn build_validated(&self) -> Arc<dyn LogKernel> {
        match self {
            KernelConfig::FixedNoise { log_noise } => Arc::new(FixedNoiseKernel::new(*log_noise)),
            KernelConfig::UnitSqExp { log_bandwidth } => {
                Arc::new(UnitSqExpKernel.with_hyper(vec![*log_bandwidth]))
            }
            KernelConfig::ScaledSqExp {
                log_bandwidth,
                log_scale,
            } => Arc::new(BoundKernel::new(
                ScaledSqExpKernel,
                vec![*log_bandwidth, *log_scale],
            )),
            KernelConfig::Sum { kernels } => {
                if kernels.is_empty() {
                    warn!("Building an empty kernel sum; it evaluates to 0 everywhere");
                }
                Arc::new(
                    kernels
                        .iter()
                        .map(KernelConfig::build_validated)
                        .collect::<SumKernel>(),
                )
            }
        }
    }
}

fn check_finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(name, value))
    }
}

fn invalid(name: &str, value: f64) -> KernelError {
    KernelError::InvalidParameter(format!("{name} must be a finite log-space value, got {value}"))
}

impl fmt::Display for KernelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelConfig::FixedNoise { log_noise } => {
                write!(f, "fixed_noise(log_noise={log_noise})")
            }
            KernelConfig::UnitSqExp { log_bandwidth } => {
                write!(f, "unit_sq_exp(log_bandwidth={log_bandwidth})")
            }
            KernelConfig::ScaledSqExp {
                log_bandwidth,
                log_scale,
            } => write!(
                f,
                "scaled_sq_exp(log_bandwidth={log_bandwidth}, log_scale={log_scale})"
            ),
            KernelConfig::Sum { kernels } => {
                write!(f, "sum[")?;
                for (i, kernel) in kernels.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{kernel}")?;
                }
                write!(f, "]")
            }
        }
    }
}
