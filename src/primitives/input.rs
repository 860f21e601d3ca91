//! Input abstractions for regression data.
//!
//! ## Purpose
//!
//! This module provides `WlsInput`, a unified view over the containers a caller
//! may hold observations in (slices, vectors, fixed-size arrays and, with the
//! `ndarray` feature, 1-D ndarray arrays). `x`, `y` and a weight sequence may
//! each come from a different container type.
//!
//! ## Design notes
//!
//! * **Zero-copy**: Every implementation hands out a borrowed slice.
//! * **Compile-time shape**: Passing a scalar where a sequence is expected does
//!   not type-check, so that precondition never reaches runtime.
//!
//! ## Invariants
//!
//! * Returned slices cover every element of the container, in order.
//! * Non-contiguous ndarray views are rejected with `WlsError::InvalidInput`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

#[cfg(feature = "ndarray")]
use ndarray::{ArrayBase, Data, Ix1};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::WlsError;

/// Trait for containers that can supply observations to a fit.
pub trait WlsInput<T: Float> {
    /// View the container as a contiguous slice.
    fn as_wls_slice(&self) -> Result<&[T], WlsError>;
}

impl<T: Float> WlsInput<T> for [T] {
    fn as_wls_slice(&self) -> Result<&[T], WlsError> {
        Ok(self)
    }
}

impl<T: Float> WlsInput<T> for Vec<T> {
    fn as_wls_slice(&self) -> Result<&[T], WlsError> {
        Ok(self.as_slice())
    }
}

impl<T: Float, const N: usize> WlsInput<T> for [T; N] {
    fn as_wls_slice(&self) -> Result<&[T], WlsError> {
        Ok(self.as_slice())
    }
}

impl<T: Float, I: WlsInput<T> + ?Sized> WlsInput<T> for &I {
    fn as_wls_slice(&self) -> Result<&[T], WlsError> {
        (**self).as_wls_slice()
    }
}

#[cfg(feature = "ndarray")]
impl<T: Float, S> WlsInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_wls_slice(&self) -> Result<&[T], WlsError> {
        self.as_slice().ok_or_else(|| {
            WlsError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}
