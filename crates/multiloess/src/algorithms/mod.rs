//! Layer 3: Algorithms
//!
//! This layer implements the local weighted regression and the robustness
//! reweighting. It holds the numerical core but is orchestrated by the engine
//! layer.

// Local weighted regression.
pub mod regression;

// Robustness weight updates for outlier downweighting.
pub mod robustness;
