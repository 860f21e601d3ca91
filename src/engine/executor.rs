//! Execution of a configured weighted least-squares fit.
//!
//! ## Purpose
//!
//! This module runs one fit end to end: view the inputs as slices, validate
//! them, accumulate and solve, then attach whatever evaluation output the
//! configuration asks for.
//!
//! ## Design notes
//!
//! * **Validate first**: No arithmetic happens until every precondition holds.
//! * **One accumulation**: Diagnostics reuse the sums computed for the fit.
//! * **Stateless**: `WlsExecutor` borrows its configuration and holds no data
//!   between runs, so one configuration may serve many threads.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::fit::{fit_validated, LinearFit};
use crate::engine::output::WlsResult;
use crate::engine::validator::Validator;
use crate::evaluation::diagnostics::{fitted_values, residuals, Diagnostics};
use crate::math::sums::SumsLinalg;
use crate::primitives::errors::WlsError;
use crate::primitives::input::WlsInput;
use crate::primitives::weights::Weights;

// ============================================================================
// Configuration
// ============================================================================

/// Options controlling a fit run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WlsConfig {
    /// Attach fitted values and residuals to the result.
    pub return_residuals: bool,

    /// Attach weighted diagnostics to the result.
    pub return_diagnostics: bool,

    /// Reject non-finite x, y or w.
    pub check_finite: bool,
}

// ============================================================================
// Executor
// ============================================================================

/// Runs fits under a fixed configuration.
#[derive(Debug, Clone, Copy)]
pub struct WlsExecutor<'c> {
    config: &'c WlsConfig,
}

impl<'c> WlsExecutor<'c> {
    /// Create an executor for `config`.
    pub fn new(config: &'c WlsConfig) -> Self {
        Self { config }
    }

    /// Validate and fit, returning only the line.
    pub fn fit_line<T, Y, X>(
        &self,
        y: &Y,
        x: &X,
        weights: Weights<'_, T>,
    ) -> Result<Option<LinearFit<T>>, WlsError>
    where
        T: SumsLinalg,
        Y: WlsInput<T> + ?Sized,
        X: WlsInput<T> + ?Sized,
    {
        let (y, x) = (y.as_wls_slice()?, x.as_wls_slice()?);
        self.validate(y, x, &weights)?;
        let (fit, _) = fit_validated(y, x, weights);
        Ok(fit)
    }

    /// Validate and fit, assembling the full result.
    pub fn run<T, Y, X>(
        &self,
        y: &Y,
        x: &X,
        weights: Weights<'_, T>,
    ) -> Result<WlsResult<T>, WlsError>
    where
        T: SumsLinalg,
        Y: WlsInput<T> + ?Sized,
        X: WlsInput<T> + ?Sized,
    {
        let (y, x) = (y.as_wls_slice()?, x.as_wls_slice()?);
        let n = self.validate(y, x, &weights)?;
        let (fit, sums) = fit_validated(y, x, weights);

        let (fitted, residuals) = match (&fit, self.config.return_residuals) {
            (Some(line), true) => {
                let fitted = fitted_values(line, x);
                let resid = residuals(y, &fitted);
                (Some(fitted), Some(resid))
            }
            _ => (None, None),
        };

        let diagnostics = match (&fit, self.config.return_diagnostics) {
            (Some(line), true) => Some(Diagnostics::compute(line, y, x, weights, &sums)),
            _ => None,
        };

        Ok(WlsResult {
            n,
            sum_weights: sums.sum_w,
            fit,
            fitted,
            residuals,
            diagnostics,
        })
    }

    fn validate<T: Float>(
        &self,
        y: &[T],
        x: &[T],
        weights: &Weights<'_, T>,
    ) -> Result<usize, WlsError> {
        let n = Validator::validate_inputs(y, x, weights)?;
        if self.config.check_finite {
            Validator::validate_finite(y, x, weights)?;
        }
        Ok(n)
    }
}
