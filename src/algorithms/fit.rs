//! Weighted least-squares line fitting.
//!
//! ## Purpose
//!
//! This module is the numeric core of the crate: one accumulation pass over the
//! observations followed by the closed-form normal-equation solve, producing a
//! `LinearFit` or nothing when the predictor has zero weighted variance.
//!
//! ## Design notes
//!
//! * **Shape-free**: Inputs are assumed validated (equal lengths, n ≥ 2). Length
//!   and finiteness checks live in `engine::validator`.
//! * **Stateless**: Each call is independent; nothing is cached between fits.
//!
//! ## Key concepts
//!
//! * **Degenerate geometry**: When every x coincides once weighted, the normal
//!   equations are singular and the fit is `None`. This is a valid outcome, not
//!   an error.
//!
//! ## Non-goals
//!
//! * Multiple predictors, regularization or robust reweighting.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::normal::solve_line;
use crate::math::sums::{SumsLinalg, WeightedSums};
use crate::primitives::weights::Weights;

// ============================================================================
// LinearFit
// ============================================================================

/// A fitted line `y = intercept + slope · x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit<T> {
    /// Value of the line at `x = 0`.
    pub intercept: T,
    /// Change in `y` per unit change in `x`.
    pub slope: T,
}

impl<T: Float> LinearFit<T> {
    /// Build a fit from its coefficients.
    #[inline]
    pub fn new(intercept: T, slope: T) -> Self {
        Self { intercept, slope }
    }

    /// Evaluate the line at `x`.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.intercept + self.slope * x
    }

    /// Evaluate the line at every point of `xs`.
    pub fn predict_many(&self, xs: &[T]) -> Vec<T> {
        xs.iter().map(|&x| self.predict(x)).collect()
    }

    /// Coefficients as an `(intercept, slope)` pair.
    #[inline]
    pub fn as_pair(&self) -> (T, T) {
        (self.intercept, self.slope)
    }
}

// ============================================================================
// Fitting
// ============================================================================

/// Fit a line to validated observations.
///
/// Returns the fit together with the accumulated sums, which diagnostics reuse.
pub fn fit_validated<T: SumsLinalg>(
    y: &[T],
    x: &[T],
    weights: Weights<'_, T>,
) -> (Option<LinearFit<T>>, WeightedSums<T>) {
    let sums = WeightedSums::accumulate(x, y, weights);
    let fit = solve_line(&sums).map(|(intercept, slope)| LinearFit::new(intercept, slope));
    (fit, sums)
}
