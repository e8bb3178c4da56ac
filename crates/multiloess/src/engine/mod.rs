//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer prepares the inputs of a smoothing request (running-time axis,
//! span grid), validates them, and runs the per-span fits by coordinating the
//! window primitives with the regression and robustness algorithms.
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
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Running-time axis construction.
pub mod axis;

/// Span grid generation.
pub mod grid;

/// Single- and multi-span execution.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for a single span.
pub mod output;
