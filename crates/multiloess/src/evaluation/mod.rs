//! Layer 5: Evaluation
//!
//! # Purpose
//!
//! This layer post-processes fitted curves: it assembles the long-form dataset,
//! computes per-span diagnostics, and prepares the color-bar contract of the
//! rendering sink.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Evaluation ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Long-form aggregation of curves.
pub mod aggregate;

/// Fit-quality diagnostics.
pub mod diagnostics;

/// Rendering contract: color ramp and ticks.
pub mod colorbar;
