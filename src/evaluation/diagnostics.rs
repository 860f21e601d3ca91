//! Goodness-of-fit diagnostics for a fitted line.
//!
//! ## Purpose
//!
//! This module computes fitted values, residuals and weighted summary
//! statistics for a line produced by the fitting routine. All statistics use the
//! same weights as the fit.
//!
//! ## Key concepts
//!
//! * **Weighted SSE**: Σ wᵢ·(yᵢ − ŷᵢ)²
//! * **Weighted SST**: Σ wᵢ·(yᵢ − ȳ_w)², with ȳ_w = Σwᵢyᵢ / Σwᵢ
//! * **Weighted R²**: 1 − SSE / SST, defined as 1 when SST is zero.
//!
//! ## Non-goals
//!
//! * Standard errors, confidence or prediction intervals.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::fmt::{self, Display, Formatter};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::fit::LinearFit;
use crate::math::sums::WeightedSums;
use crate::primitives::weights::Weights;

// ============================================================================
// Diagnostics
// ============================================================================

/// Weighted goodness-of-fit statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagnostics<T> {
    /// Σ wᵢ
    pub sum_weights: T,
    /// Weighted mean of y.
    pub weighted_mean_y: T,
    /// Weighted sum of squared residuals.
    pub weighted_sse: T,
    /// Weighted coefficient of determination.
    pub r_squared: T,
}

impl<T: Float> Diagnostics<T> {
    /// Compute diagnostics for `fit` over the observations it was fitted to.
    pub fn compute(
        fit: &LinearFit<T>,
        y: &[T],
        x: &[T],
        weights: Weights<'_, T>,
        sums: &WeightedSums<T>,
    ) -> Self {
        let weighted_mean_y = sums.sum_yw / sums.sum_w;

        let mut sse = T::zero();
        let mut sst = T::zero();
        for (i, (&x_i, &y_i)) in x.iter().zip(y).enumerate() {
            let w_i = weights.get(i);
            let r = y_i - fit.predict(x_i);
            let d = y_i - weighted_mean_y;
            sse = sse + w_i * r * r;
            sst = sst + w_i * d * d;
        }

        let r_squared = if sst == T::zero() {
            T::one()
        } else {
            T::one() - sse / sst
        };

        Self {
            sum_weights: sums.sum_w,
            weighted_mean_y,
            weighted_sse: sse,
            r_squared,
        }
    }
}

impl<T: Float + Display> Display for Diagnostics<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "WLS Diagnostics:")?;
        writeln!(f, "  Sum of weights: {:.6}", self.sum_weights)?;
        writeln!(f, "  Weighted mean:  {:.6}", self.weighted_mean_y)?;
        writeln!(f, "  Weighted SSE:   {:.6}", self.weighted_sse)?;
        write!(f, "  R^2:            {:.6}", self.r_squared)
    }
}

// ============================================================================
// Fitted Values and Residuals
// ============================================================================

/// Fitted values ŷᵢ of `fit` at every `x`.
pub fn fitted_values<T: Float>(fit: &LinearFit<T>, x: &[T]) -> Vec<T> {
    fit.predict_many(x)
}

/// Residuals yᵢ − ŷᵢ given precomputed fitted values.
pub fn residuals<T: Float>(y: &[T], fitted: &[T]) -> Vec<T> {
    y.iter().zip(fitted).map(|(&y_i, &f_i)| y_i - f_i).collect()
}
