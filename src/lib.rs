//! # WLS: Weighted Least-Squares Linear Regression for Rust
//!
//! A small, dependency-light implementation of weighted least-squares (WLS)
//! simple linear regression: one response `y`, one predictor `x`, and optional
//! per-observation weights.
//!
//! ## What is WLS?
//!
//! Weighted least squares fits the line `y = intercept + slope · x` that
//! minimizes
//!
//! ```text
//! Σ wᵢ · (yᵢ − (intercept + slope · xᵢ))²
//! ```
//!
//! With equal weights it is ordinary least squares (OLS). Unequal weights let
//! more reliable observations pull harder on the line, for example inverse
//! variance weights for heteroscedastic data.
//!
//! **How the fit works:**
//!
//! 1. One pass over the data accumulates Σw, Σxw, Σyw, Σx²w and Σxyw
//! 2. The 2×2 weighted normal equations are solved in closed form
//! 3. If the weighted variance of x is exactly zero, the line is undefined
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use wls_rs::prelude::*;
//!
//! let y = vec![1.0, 3.0, 4.0, 5.0, 2.0, 3.0, 4.0];
//! let x = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
//!
//! // Equal weights: pass a single scalar
//! match fit_linear_regression(&y, &x, 1.0)? {
//!     Some(fit) => println!("y = {:.4} + {:.4}x", fit.intercept, fit.slope),
//!     None => println!("x has no variance; the line is undefined"),
//! }
//! # Result::<(), WlsError>::Ok(())
//! ```
//!
//! ### Per-observation Weights
//!
//! ```rust
//! use wls_rs::prelude::*;
//!
//! let y = [2.0, 4.1, 5.9, 8.2, 9.8];
//! let x = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let w = [1.0, 1.0, 0.5, 2.0, 1.0];
//!
//! let fit = fit_linear_regression(&y, &x, &w)?.expect("x varies");
//! assert!(fit.slope > 1.5);
//! # Result::<(), WlsError>::Ok(())
//! ```
//!
//! ### Full Features
//!
//! ```rust
//! use wls_rs::prelude::*;
//!
//! let y = vec![2.1, 3.8, 6.2, 7.9, 10.3, 11.8, 14.1, 15.7];
//! let x = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
//! let w = vec![1.0, 2.0, 1.0, 2.0, 1.0, 2.0, 1.0, 2.0];
//!
//! let model = Wls::new()
//!     .return_residuals()   // Fitted values and residuals
//!     .return_diagnostics() // Weighted SSE, weighted mean, R^2
//!     .check_finite()       // Reject NaN/Inf inputs
//!     .build()?;
//!
//! let result = model.fit(&y, &x, &w)?;
//! println!("{}", result);
//! assert!(result.diagnostics.unwrap().r_squared > 0.99);
//! # Result::<(), WlsError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! [`prelude::fit_linear_regression`] returns
//! `Result<Option<LinearFit<T>>, WlsError>`:
//!
//! - **`Ok(Some(fit))`**: A well-defined line.
//! - **`Ok(None)`**: x has zero weighted variance (e.g. two points with the
//!   same x). This is a valid outcome, not an error: intercept and slope are
//!   both undefined.
//! - **`Err(WlsError)`**: A precondition was violated (fewer than 2
//!   observations, or mismatched lengths of x, y and a weight sequence).
//!
//! ```rust
//! use wls_rs::prelude::*;
//!
//! // A single observation is rejected...
//! assert!(matches!(
//!     fit_linear_regression(&[1.0], &[10.0], 1.0),
//!     Err(WlsError::TooFewPoints { got: 1, min: 2 })
//! ));
//!
//! // ...but a vertical line through two points is simply undefined.
//! assert_eq!(fit_linear_regression(&[0.0, 1.0], &[1.0, 1.0], 1.0)?, None);
//! # Result::<(), WlsError>::Ok(())
//! ```
//!
//! ## Inputs
//!
//! `x`, `y` and a weight sequence may each be a slice, a `Vec`, a fixed-size
//! array or (with the `ndarray` feature) a contiguous 1-D `ndarray` array, in
//! any combination. Weights may also be a single `f32`/`f64` scalar applied to
//! every observation. Weights are not restricted in sign.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments (with `alloc`). Disable default
//! features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! wls-rs = { version = "0.1", default-features = false }
//! ```
//!
//! ## Features
//!
//! | Feature   | Default | Description                                      |
//! |-----------|---------|--------------------------------------------------|
//! | `std`     | yes     | Standard library support, `std::error::Error`    |
//! | `ndarray` | no      | Accept 1-D `ndarray` arrays as inputs            |
//! | `dev`     | no      | Expose internal layers for testing               |
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - errors, input containers and weights.
mod primitives;

// Layer 2: Math - weighted sum accumulation and the closed-form solve.
mod math;

// Layer 3: Algorithms - the fitting routine.
mod algorithms;

// Layer 4: Evaluation - fitted values, residuals and diagnostics.
mod evaluation;

// Layer 5: Engine - validation, execution and result assembly.
mod engine;

// High-level API: free function and fluent builder.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard WLS prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use wls_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        fit_linear_regression, Diagnostics, LinearFit, WlsBuilder as Wls, WlsConfig, WlsError,
        WlsModel, WlsResult, Weights,
    };
    pub use crate::primitives::input::WlsInput;
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal fitting algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal evaluation and diagnostics.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
