//! High-level API for weighted least-squares fitting.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: the
//! [`fit_linear_regression`] function for a plain `(intercept, slope)` answer,
//! and a fluent builder for fits that should also report residuals or
//! diagnostics.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Builder with sensible defaults for every option.
//! * **Validated**: Duplicate builder settings are reported by `.build()`;
//!   input preconditions are reported by `.fit()`.
//! * **Type-Safe**: Fits are generic over `Float` types; the model itself is
//!   precision-agnostic and can fit `f32` and `f64` data alike.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`WlsBuilder`] via `Wls::new()`.
//! 2. Chain configuration methods (`.return_residuals()`, ...).
//! 3. Call `.build()` to obtain a [`WlsModel`].
//! 4. Call `.fit(&y, &x, weights)` on the model.

// Internal dependencies
use crate::engine::executor::WlsExecutor;
use crate::math::sums::SumsLinalg;
use crate::primitives::input::WlsInput;

// Publicly re-exported types
pub use crate::algorithms::fit::LinearFit;
pub use crate::engine::executor::WlsConfig;
pub use crate::engine::output::WlsResult;
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::primitives::errors::WlsError;
pub use crate::primitives::weights::Weights;

// ============================================================================
// Free Function
// ============================================================================

/// Fit `y = intercept + slope · x` by weighted least squares.
///
/// `w` is either one scalar weight broadcast to every observation (use `1.0`
/// for ordinary least squares) or a sequence with one weight per observation.
///
/// # Returns
///
/// * `Ok(Some(fit))` for a well-defined line.
/// * `Ok(None)` when x has zero weighted variance (for example two points with
///   the same x). Both coefficients are undefined together.
/// * `Err(WlsError)` when fewer than 2 observations are given or the lengths
///   of `x`, `y` and a weight sequence disagree.
///
/// # Examples
///
/// ```
/// use wls_rs::prelude::*;
///
/// let y = [1.0_f64, 3.0, 4.0, 5.0, 2.0, 3.0, 4.0];
/// let x = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
///
/// let fit = fit_linear_regression(&y, &x, 1.0)?.expect("x varies");
/// assert!((fit.intercept - 2.142857).abs() < 1e-6);
/// assert!((fit.slope - 0.25).abs() < 1e-9);
///
/// // A vertical line has no slope.
/// assert!(fit_linear_regression(&[0.0_f64, 1.0], &[1.0, 1.0], 1.0)?.is_none());
/// # Result::<(), WlsError>::Ok(())
/// ```
pub fn fit_linear_regression<'w, T, Y, X, W>(
    y: &Y,
    x: &X,
    w: W,
) -> Result<Option<LinearFit<T>>, WlsError>
where
    T: SumsLinalg,
    Y: WlsInput<T> + ?Sized,
    X: WlsInput<T> + ?Sized,
    W: Into<Weights<'w, T>>,
{
    let config = WlsConfig::default();
    WlsExecutor::new(&config).fit_line(y, x, w.into())
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring weighted least-squares fits.
#[derive(Debug, Clone, Default)]
pub struct WlsBuilder {
    /// Attach fitted values and residuals to results.
    pub return_residuals: Option<bool>,

    /// Attach weighted diagnostics to results.
    pub return_diagnostics: Option<bool>,

    /// Reject non-finite inputs.
    pub check_finite: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl WlsBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Include fitted values and residuals in the result.
    pub fn return_residuals(mut self) -> Self {
        if self.return_residuals.is_some() {
            self.duplicate_param = Some("return_residuals");
        }
        self.return_residuals = Some(true);
        self
    }

    /// Include weighted SSE, weighted mean and R² in the result.
    pub fn return_diagnostics(mut self) -> Self {
        if self.return_diagnostics.is_some() {
            self.duplicate_param = Some("return_diagnostics");
        }
        self.return_diagnostics = Some(true);
        self
    }

    /// Reject NaN or infinite values in x, y or the weights.
    pub fn check_finite(mut self) -> Self {
        if self.check_finite.is_some() {
            self.duplicate_param = Some("check_finite");
        }
        self.check_finite = Some(true);
        self
    }

    /// Validate the configuration and build a model.
    pub fn build(self) -> Result<WlsModel, WlsError> {
        crate::engine::validator::Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(WlsModel {
            config: WlsConfig {
                return_residuals: self.return_residuals.unwrap_or(false),
                return_diagnostics: self.return_diagnostics.unwrap_or(false),
                check_finite: self.check_finite.unwrap_or(false),
            },
        })
    }
}

// ============================================================================
// Model
// ============================================================================

/// A configured weighted least-squares model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WlsModel {
    config: WlsConfig,
}

impl WlsModel {
    /// Configuration this model fits with.
    pub fn config(&self) -> &WlsConfig {
        &self.config
    }

    /// Fit `y = intercept + slope · x` and assemble the configured output.
    pub fn fit<'w, T, Y, X, W>(&self, y: &Y, x: &X, w: W) -> Result<WlsResult<T>, WlsError>
    where
        T: SumsLinalg,
        Y: WlsInput<T> + ?Sized,
        X: WlsInput<T> + ?Sized,
        W: Into<Weights<'w, T>>,
    {
        WlsExecutor::new(&self.config).run(y, x, w.into())
    }
}
