//! Error types for weighted least-squares fitting.
//!
//! ## Purpose
//!
//! This module defines `WlsError`, the single error type returned by every
//! fallible operation in the crate. Each variant describes one precondition
//! violation detected before any accumulation takes place.
//!
//! ## Design notes
//!
//! * **Caller errors only**: A degenerate predictor (zero weighted variance) is
//!   a valid outcome, not an error, and is never reported through this type.
//! * **Self-describing**: Variants carry the offending lengths or values so the
//!   `Display` output is actionable without a debugger.
//! * **no_std friendly**: `std::error::Error` is implemented only with `std`.
//!
//! ## Non-goals
//!
//! * This module does not perform validation (see `engine::validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;

use core::fmt;

// ============================================================================
// WlsError
// ============================================================================

/// Errors reported when a fit request violates its preconditions.
#[derive(Debug, Clone, PartialEq)]
pub enum WlsError {
    /// Fewer observations than a line fit requires.
    TooFewPoints {
        /// Number of observations supplied.
        got: usize,
        /// Minimum number of observations required.
        min: usize,
    },

    /// `x` and `y` have different lengths.
    MismatchedInputs {
        /// Length of `x`.
        x_len: usize,
        /// Length of `y`.
        y_len: usize,
    },

    /// A weight sequence does not match the number of observations.
    MismatchedWeights {
        /// Length of the weight sequence.
        w_len: usize,
        /// Number of observations.
        n: usize,
    },

    /// A non-finite value was found while finite checking was enabled.
    InvalidNumericValue(String),

    /// Input container could not be viewed as a contiguous slice.
    InvalidInput(String),

    /// A builder parameter was configured more than once.
    DuplicateParameter {
        /// Name of the parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for WlsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WlsError::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {}, need at least {}", got, min)
            }
            WlsError::MismatchedInputs { x_len, y_len } => {
                write!(
                    f,
                    "Length mismatch: x has {} points, y has {}",
                    x_len, y_len
                )
            }
            WlsError::MismatchedWeights { w_len, n } => {
                write!(
                    f,
                    "Length mismatch: weights have {} values, expected {}",
                    w_len, n
                )
            }
            WlsError::InvalidNumericValue(msg) => write!(f, "Invalid numeric value: {}", msg),
            WlsError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            WlsError::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for WlsError {}
