//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure numerical building blocks of the fit:
//! - One-pass weighted sum accumulation
//! - The closed-form 2×2 normal-equation solve
//!
//! Nothing here validates shapes or lengths; callers in higher layers do.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Weighted sum accumulation.
pub mod sums;

/// Normal-equation solve.
pub mod normal;
