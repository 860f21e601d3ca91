//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the fundamental types every other layer builds on:
//! - The crate error type
//! - Input container abstraction
//! - Observation weights
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types.
pub mod errors;

/// Input container abstraction.
pub mod input;

/// Observation weights.
pub mod weights;
