//! Output types for weighted least-squares fitting.
//!
//! ## Purpose
//!
//! This module defines `WlsResult`, the owned result of a fit run through the
//! builder API, and its human-readable summary.
//!
//! ## Invariants
//!
//! * `fit` is `None` exactly when the predictor has zero weighted variance; in
//!   that case `fitted`, `residuals` and `diagnostics` are `None` too.
//! * `fitted` and `residuals`, when present, have length `n` and follow input
//!   order.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::fmt::{self, Display, Formatter};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::fit::LinearFit;
use crate::evaluation::diagnostics::Diagnostics;

/// Result of a weighted least-squares fit.
#[derive(Debug, Clone, PartialEq)]
pub struct WlsResult<T> {
    /// Number of observations.
    pub n: usize,

    /// Σ wᵢ over all observations.
    pub sum_weights: T,

    /// Fitted line, or `None` when x has zero weighted variance.
    pub fit: Option<LinearFit<T>>,

    /// Fitted values ŷᵢ (if requested).
    pub fitted: Option<Vec<T>>,

    /// Residuals yᵢ − ŷᵢ (if requested).
    pub residuals: Option<Vec<T>>,

    /// Weighted goodness-of-fit statistics (if requested).
    pub diagnostics: Option<Diagnostics<T>>,
}

impl<T: Float> WlsResult<T> {
    /// Intercept of the fitted line.
    #[inline]
    pub fn intercept(&self) -> Option<T> {
        self.fit.map(|f| f.intercept)
    }

    /// Slope of the fitted line.
    #[inline]
    pub fn slope(&self) -> Option<T> {
        self.fit.map(|f| f.slope)
    }

    /// Whether the predictor had zero weighted variance.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.fit.is_none()
    }

    /// Evaluate the fitted line at `x`.
    #[inline]
    pub fn predict(&self, x: T) -> Option<T> {
        self.fit.map(|f| f.predict(x))
    }
}

impl<T: Float + Display> Display for WlsResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.n)?;
        writeln!(f, "  Sum of weights: {}", self.sum_weights)?;
        writeln!(f)?;

        match &self.fit {
            Some(line) => {
                writeln!(f, "Fitted Line:")?;
                writeln!(f, "  Intercept: {:.6}", line.intercept)?;
                write!(f, "  Slope:     {:.6}", line.slope)?;
            }
            None => {
                write!(f, "Fitted Line: undefined (x has zero weighted variance)")?;
            }
        }

        if let Some(diag) = &self.diagnostics {
            writeln!(f)?;
            writeln!(f)?;
            write!(f, "{}", diag)?;
        }

        if let (Some(fitted), Some(residuals)) = (&self.fitted, &self.residuals) {
            writeln!(f)?;
            writeln!(f)?;
            writeln!(f, "{:>12} {:>12}", "Fitted", "Residual")?;
            write!(f, "  -------------------------")?;
            for (y_hat, r) in fitted.iter().zip(residuals) {
                writeln!(f)?;
                write!(f, "{:>12.6} {:>12.6}", y_hat, r)?;
            }
        }

        Ok(())
    }
}
