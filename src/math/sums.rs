//! Weighted sums for the simple-regression normal equations.
//!
//! ## Purpose
//!
//! This module accumulates, in one pass over the observations, the five
//! weighted sums that fully determine a weighted least-squares line:
//! Σw, Σxw, Σyw, Σx²w and Σxyw.
//!
//! ## Design notes
//!
//! * **Single pass**: O(n) time, O(1) extra space.
//! * **Broadcast weights**: A scalar weight has dedicated accumulators, so it is
//!   never expanded into a vector.
//! * **Precision dispatch**: `f64` packs four of the running sums into one
//!   `wide::f64x4`; `f32` uses the scalar loop.
//! * **Input order**: Every sum is added observation by observation, left to
//!   right, on both paths. The singularity test on the divisor is exact, so
//!   the summation order must not depend on the path taken.
//!
//! ## Invariants
//!
//! * `x`, `y` and a weight slice have equal lengths (the validator guarantees
//!   this before any accumulator runs).
//! * Every observation contributes, whatever the sign of its weight.

// External dependencies
use num_traits::Float;
use wide::f64x4;

// Internal dependencies
use crate::primitives::weights::Weights;

// ============================================================================
// WeightedSums
// ============================================================================

/// The weighted sums of one observation set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedSums<T> {
    /// Σ wᵢ
    pub sum_w: T,
    /// Σ xᵢ·wᵢ
    pub sum_xw: T,
    /// Σ wᵢ·yᵢ
    pub sum_yw: T,
    /// Σ xᵢ·wᵢ·xᵢ
    pub sum_xxw: T,
    /// Σ xᵢ·wᵢ·yᵢ
    pub sum_xyw: T,
}

impl<T: Float> Default for WeightedSums<T> {
    fn default() -> Self {
        Self {
            sum_w: T::zero(),
            sum_xw: T::zero(),
            sum_yw: T::zero(),
            sum_xxw: T::zero(),
            sum_xyw: T::zero(),
        }
    }
}

impl<T: SumsLinalg> WeightedSums<T> {
    /// Accumulate the weighted sums of `(x, y, weights)`.
    #[inline]
    pub fn accumulate(x: &[T], y: &[T], weights: Weights<'_, T>) -> Self {
        match weights {
            Weights::Scalar(w) => T::accumulate_uniform(x, y, w),
            Weights::Sequence(w) => T::accumulate_weighted(x, y, w),
        }
    }
}

// ============================================================================
// Precision Dispatch
// ============================================================================

/// Float types with a weighted-sum accumulation strategy.
pub trait SumsLinalg: Float + 'static {
    /// Accumulate with one weight per observation.
    fn accumulate_weighted(x: &[Self], y: &[Self], w: &[Self]) -> WeightedSums<Self>;

    /// Accumulate with the same weight for every observation.
    fn accumulate_uniform(x: &[Self], y: &[Self], w: Self) -> WeightedSums<Self>;
}

impl SumsLinalg for f64 {
    #[inline]
    fn accumulate_weighted(x: &[f64], y: &[f64], w: &[f64]) -> WeightedSums<f64> {
        accumulate_weighted_simd(x, y, w)
    }

    #[inline]
    fn accumulate_uniform(x: &[f64], y: &[f64], w: f64) -> WeightedSums<f64> {
        accumulate_uniform_simd(x, y, w)
    }
}

impl SumsLinalg for f32 {
    #[inline]
    fn accumulate_weighted(x: &[f32], y: &[f32], w: &[f32]) -> WeightedSums<f32> {
        accumulate_weighted_scalar(x, y, w)
    }

    #[inline]
    fn accumulate_uniform(x: &[f32], y: &[f32], w: f32) -> WeightedSums<f32> {
        accumulate_uniform_scalar(x, y, w)
    }
}

// ============================================================================
// Scalar Accumulation
// ============================================================================

/// Accumulate weighted sums with per-observation weights (scalar).
pub fn accumulate_weighted_scalar<T: Float>(x: &[T], y: &[T], w: &[T]) -> WeightedSums<T> {
    let mut s = WeightedSums::default();
    for ((&x_i, &y_i), &w_i) in x.iter().zip(y).zip(w) {
        add_observation(&mut s, x_i, y_i, w_i);
    }
    s
}

/// Accumulate weighted sums with a broadcast weight (scalar).
pub fn accumulate_uniform_scalar<T: Float>(x: &[T], y: &[T], w: T) -> WeightedSums<T> {
    let mut s = WeightedSums::default();
    for (&x_i, &y_i) in x.iter().zip(y) {
        add_observation(&mut s, x_i, y_i, w);
    }
    s
}

#[inline(always)]
fn add_observation<T: Float>(s: &mut WeightedSums<T>, x: T, y: T, w: T) {
    let xw = x * w;
    s.sum_w = s.sum_w + w;
    s.sum_xw = s.sum_xw + xw;
    s.sum_xyw = s.sum_xyw + xw * y;
    s.sum_yw = s.sum_yw + w * y;
    s.sum_xxw = s.sum_xxw + xw * x;
}

// ============================================================================
// SIMD Accumulation (f64)
// ============================================================================

// Lane layout of the packed accumulator: [Σw, Σxw, Σyw, Σxxw].
//
// Each lane is its own running sum over the observations in input order, so
// every sum matches `add_observation` bit for bit. Σxyw stays scalar.

/// Accumulate weighted sums with per-observation weights using SIMD.
pub fn accumulate_weighted_simd(x: &[f64], y: &[f64], w: &[f64]) -> WeightedSums<f64> {
    let mut acc = f64x4::splat(0.0);
    let mut sum_xyw = 0.0;

    for ((&x_i, &y_i), &w_i) in x.iter().zip(y).zip(w) {
        let xw = x_i * w_i;
        acc += f64x4::new([w_i, x_i, w_i, xw]) * f64x4::new([1.0, w_i, y_i, x_i]);
        sum_xyw += xw * y_i;
    }

    unpack(acc, sum_xyw)
}

/// Accumulate weighted sums with a broadcast weight using SIMD.
pub fn accumulate_uniform_simd(x: &[f64], y: &[f64], w: f64) -> WeightedSums<f64> {
    let mut acc = f64x4::splat(0.0);
    let mut sum_xyw = 0.0;

    for (&x_i, &y_i) in x.iter().zip(y) {
        let xw = x_i * w;
        acc += f64x4::new([w, x_i, w, xw]) * f64x4::new([1.0, w, y_i, x_i]);
        sum_xyw += xw * y_i;
    }

    unpack(acc, sum_xyw)
}

#[inline]
fn unpack(acc: f64x4, sum_xyw: f64) -> WeightedSums<f64> {
    let [sum_w, sum_xw, sum_yw, sum_xxw] = acc.to_array();
    WeightedSums {
        sum_w,
        sum_xw,
        sum_yw,
        sum_xxw,
        sum_xyw,
    }
}
