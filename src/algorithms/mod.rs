//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer holds the fitting routine itself: accumulate weighted sums and
//! solve for the line.
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Weighted least-squares line fitting.
pub mod fit;
