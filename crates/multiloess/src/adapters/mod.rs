//! Layer 6: Adapters
//!
//! # Purpose
//!
//! This layer connects the pure core to its data boundaries: loading a
//! duration column from a wide-format table and exporting the long-form
//! result.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters ← You are here
//!   ↓
//! Layer 5: Evaluation
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// CSV source and sink.
#[cfg(feature = "csv")]
pub mod table;
