//! Numeric utilities shared by the kernel implementations

/// Distance and reduction primitives over `f64` slices
pub mod floats {
    /// Euclidean (L2) distance between two equal-length vectors
    ///
    /// Accumulates a scaled sum of squares so that very large or very small
    /// coordinate differences neither overflow nor underflow before the
    /// square root.
    ///
    /// # Panics
    /// Panics if `x` and `y` have different lengths.
    pub fn distance(x: &[f64], y: &[f64]) -> f64 {
        assert_eq!(
            x.len(),
            y.len(),
            "floats: slice lengths do not match"
        );

        let mut scale = 0.0_f64;
        let mut sum_sq = 1.0_f64;

        for (&a, &b) in x.iter().zip(y.iter()) {
            let diff = a - b;
            if diff == 0.0 {
                continue;
            }
            let abs_diff = diff.abs();
            if abs_diff.is_nan() {
                return f64::NAN;
            }
            if scale < abs_diff {
                let ratio = scale / abs_diff;
                sum_sq = 1.0 + sum_sq * ratio * ratio;
                scale = abs_diff;
            } else {
                let ratio = abs_diff / scale;
                sum_sq += ratio * ratio;
            }
        }

        if scale.is_infinite() {
            return f64::INFINITY;
        }
        scale * sum_sq.sqrt()
    }

    /// Numerically stable `ln(Σ exp(vᵢ))`
    ///
    /// The maximum value is factored out before exponentiating, so large
    /// log-values do not overflow and small ones keep their contribution.
    ///
    /// An empty slice is the empty sum and yields `-inf`. An infinite maximum
    /// is returned directly, which keeps all-`-inf` inputs at `-inf` instead
    /// of producing NaN.
    pub fn log_sum_exp(values: &[f64]) -> f64 {
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if max.is_infinite() {
            return max;
        }

        let sum: f64 = values.iter().map(|&v| (v - max).exp()).sum();
        sum.ln() + max
    }
}

/// Conversions between linear-space parameters and log-space hyperparameters
pub mod hyper {
    /// Convert linear-space parameters (bandwidths, scales, noise levels)
    /// into the log-space representation every kernel expects
    pub fn to_log(values: &[f64]) -> Vec<f64> {
        values.iter().map(|v| v.ln()).collect()
    }

    /// Convert log-space hyperparameters back to linear space
    pub fn from_log(log_values: &[f64]) -> Vec<f64> {
        log_values.iter().map(|v| v.exp()).collect()
    }
}
