//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer provides post-fit evaluation: fitted values, residuals and
//! weighted goodness-of-fit statistics.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fitted values, residuals and weighted diagnostics.
pub mod diagnostics;
