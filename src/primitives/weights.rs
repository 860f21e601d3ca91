//! Observation weights.
//!
//! ## Purpose
//!
//! This module defines `Weights`, the weight argument of a fit: either one
//! scalar broadcast to every observation or a borrowed sequence with one weight
//! per observation.
//!
//! ## Design notes
//!
//! * **Broadcast without allocation**: A scalar weight is never expanded into a
//!   vector; accumulators read it as a constant.
//! * **Conversions**: `f32`/`f64` scalars, slices, vectors and arrays convert
//!   into `Weights` through `From`, so call sites pass them directly.
//!
//! ## Invariants
//!
//! * A `Sequence` is only accepted by a fit when its length equals the number
//!   of observations (checked by the validator, not here).
//! * Weight values are unrestricted reals; zero or negative totals are allowed.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::WlsError;
use crate::primitives::input::WlsInput;

// ============================================================================
// Weights
// ============================================================================

/// Per-observation weights for a weighted least-squares fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Weights<'a, T: Float> {
    /// One weight applied to every observation.
    Scalar(T),

    /// One weight per observation, paired positionally with `x` and `y`.
    Sequence(&'a [T]),
}

impl<T: Float> Default for Weights<'_, T> {
    /// Equal unit weights (ordinary least squares).
    fn default() -> Self {
        Weights::Scalar(T::one())
    }
}

impl<'a, T: Float> Weights<'a, T> {
    /// Equal unit weights (ordinary least squares).
    #[inline]
    pub fn uniform() -> Self {
        Self::default()
    }

    /// Borrow a weight sequence from any supported input container.
    pub fn sequence<I>(input: &'a I) -> Result<Self, WlsError>
    where
        I: WlsInput<T> + ?Sized,
    {
        Ok(Weights::Sequence(input.as_wls_slice()?))
    }

    /// Number of explicit weights, or `None` for a broadcast scalar.
    #[inline]
    pub fn len(&self) -> Option<usize> {
        match self {
            Weights::Scalar(_) => None,
            Weights::Sequence(w) => Some(w.len()),
        }
    }

    /// Whether this is an empty weight sequence.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    /// Weight of observation `i`.
    #[inline]
    pub fn get(&self, i: usize) -> T {
        match self {
            Weights::Scalar(w) => *w,
            Weights::Sequence(w) => w[i],
        }
    }
}

macro_rules! impl_scalar_weight {
    ($($t:ty),*) => {
        $(
            impl<'a> From<$t> for Weights<'a, $t> {
                #[inline]
                fn from(w: $t) -> Self {
                    Weights::Scalar(w)
                }
            }
        )*
    };
}

impl_scalar_weight!(f32, f64);

impl<'a, T: Float> From<&'a [T]> for Weights<'a, T> {
    #[inline]
    fn from(w: &'a [T]) -> Self {
        Weights::Sequence(w)
    }
}

impl<'a, T: Float> From<&'a Vec<T>> for Weights<'a, T> {
    #[inline]
    fn from(w: &'a Vec<T>) -> Self {
        Weights::Sequence(w.as_slice())
    }
}

impl<'a, T: Float, const N: usize> From<&'a [T; N]> for Weights<'a, T> {
    #[inline]
    fn from(w: &'a [T; N]) -> Self {
        Weights::Sequence(w.as_slice())
    }
}
