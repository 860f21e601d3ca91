//! Input validation for weighted least-squares fitting.
//!
//! ## Purpose
//!
//! This module checks every precondition of a fit before any accumulation
//! runs: observation count, matching lengths of `x`, `y` and a weight
//! sequence, and (when requested) finiteness of all values.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Ordering**: The observation count (taken from `x`) is checked before
//!   lengths are compared, so a single observation is always `TooFewPoints`.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * Validated inputs satisfy n = |x| = |y| (= |w|) and n ≥ 2.
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * Zero weighted variance of x is not checked here; it is a valid outcome.
//! * Weight signs and totals are not restricted.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::WlsError;
use crate::primitives::weights::Weights;

/// Minimum number of observations for a line fit.
pub const MIN_POINTS: usize = 2;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for fit inputs and builder configuration.
///
/// All methods return `Result<_, WlsError>` and fail fast upon identifying the
/// first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate the shape of `y`, `x` and `weights`, returning n.
    pub fn validate_inputs<T: Float>(
        y: &[T],
        x: &[T],
        weights: &Weights<'_, T>,
    ) -> Result<usize, WlsError> {
        let n = x.len();

        // Check 1: Sufficient points for a line
        if n < MIN_POINTS {
            return Err(WlsError::TooFewPoints {
                got: n,
                min: MIN_POINTS,
            });
        }

        // Check 2: Matching lengths
        if y.len() != n {
            return Err(WlsError::MismatchedInputs {
                x_len: n,
                y_len: y.len(),
            });
        }

        // Check 3: Weight sequence length
        Self::validate_weights(weights, n)?;

        Ok(n)
    }

    /// Validate that a weight sequence has one weight per observation.
    pub fn validate_weights<T: Float>(weights: &Weights<'_, T>, n: usize) -> Result<(), WlsError> {
        match weights.len() {
            Some(w_len) if w_len != n => Err(WlsError::MismatchedWeights { w_len, n }),
            _ => Ok(()),
        }
    }

    /// Validate that all of `y`, `x` and `weights` are finite.
    pub fn validate_finite<T: Float>(
        y: &[T],
        x: &[T],
        weights: &Weights<'_, T>,
    ) -> Result<(), WlsError> {
        Self::validate_finite_slice(x, "x")?;
        Self::validate_finite_slice(y, "y")?;
        match weights {
            Weights::Scalar(w) => Self::validate_scalar(*w, "w"),
            Weights::Sequence(w) => Self::validate_finite_slice(w, "w"),
        }
    }

    /// Validate that every element of `values` is finite.
    pub fn validate_finite_slice<T: Float>(values: &[T], name: &str) -> Result<(), WlsError> {
        for (i, &val) in values.iter().enumerate() {
            if !val.is_finite() {
                return Err(WlsError::InvalidNumericValue(format!(
                    "{}[{}]={}",
                    name,
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    /// Validate a single numeric value for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str) -> Result<(), WlsError> {
        if !val.is_finite() {
            return Err(WlsError::InvalidNumericValue(format!(
                "{}={}",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), WlsError> {
        if let Some(param) = duplicate_param {
            return Err(WlsError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
