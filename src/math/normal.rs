//! Closed-form solution of the simple-regression normal equations.
//!
//! ## Purpose
//!
//! Given the weighted sums of an observation set, this module solves
//!
//! ```text
//! | Σw    Σxw  | |intercept|   | Σyw  |
//! | Σxw   Σx²w | |  slope  | = | Σxyw |
//! ```
//!
//! by Cramer's rule, reordered so the intercept follows from the slope.
//!
//! ## Invariants
//!
//! * The system is singular exactly when `Σw·Σx²w − (Σxw)²` is zero; only an
//!   exact zero is treated as singular, with no tolerance band.
//! * Intercept and slope are produced together or not at all.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::sums::WeightedSums;

/// Slope numerator and denominator of the normal-equation solution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlopeTerms<T> {
    /// `Σw·Σxyw − Σxw·Σyw`
    pub dividend: T,
    /// `Σw·Σx²w − (Σxw)²`
    pub divisor: T,
}

impl<T: Float> SlopeTerms<T> {
    /// Compute the slope terms from accumulated sums.
    #[inline]
    pub fn from_sums(s: &WeightedSums<T>) -> Self {
        Self {
            dividend: s.sum_w * s.sum_xyw - s.sum_xw * s.sum_yw,
            divisor: s.sum_w * s.sum_xxw - s.sum_xw * s.sum_xw,
        }
    }

    /// Whether the weighted variance of x is exactly zero.
    #[inline]
    pub fn is_singular(&self) -> bool {
        self.divisor == T::zero()
    }
}

/// Solve for `(intercept, slope)`, or `None` when the system is singular.
pub fn solve_line<T: Float>(s: &WeightedSums<T>) -> Option<(T, T)> {
    let terms = SlopeTerms::from_sums(s);
    if terms.is_singular() {
        return None;
    }

    let slope = terms.dividend / terms.divisor;
    let intercept = (s.sum_yw - slope * s.sum_xw) / s.sum_w;

    Some((intercept, slope))
}
