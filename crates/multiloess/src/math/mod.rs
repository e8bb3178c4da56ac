//! Layer 2: Math
//!
//! # Purpose
//!
//! Pure mathematical functions used by the regression algorithms: the tricube
//! kernel and robust scale estimation.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Evaluation
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Tricube kernel weights.
pub mod kernel;

/// Median-based scale estimation.
pub mod scaling;
