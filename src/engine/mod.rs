//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a fit: precondition checks, the numeric core, and
//! assembly of the result.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fit execution.
pub mod executor;

/// Result types.
pub mod output;

/// Input validation.
pub mod validator;
