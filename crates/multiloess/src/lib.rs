//! # multiloess: multi-span LOESS for film editing rhythm
//!
//! Fits many local-regression (LOESS) curves, at different smoothing scales,
//! to the sequence of shot durations of a film. Small spans reveal transient
//! features of the editing around specific moments; large spans describe the
//! dominant trend. Looking at all of them at once avoids committing to one
//! level of smoothing before exploring the data.
//!
//! ## Pipeline
//!
//! ```text
//! durations ──► running-time axis (0, 100] ──┐
//!                                            ├─► one LOESS fit per span ──► long-form dataset
//! (low, high, step) ──► span grid ───────────┘
//! ```
//!
//! Each fit is a locally weighted linear regression with tricube kernel
//! weights over the `ceil(span * n)` nearest shots, optionally followed by
//! bisquare robustness iterations that downweight outlying shots.
//!
//! ## Quick Start
//!
//! ```rust
//! use multiloess::prelude::*;
//!
//! let durations = vec![4.2, 3.1, 5.0, 2.4, 6.8, 3.3, 2.9, 4.4, 5.1, 3.7];
//!
//! let model = MultiLoessBuilder::new()
//!     .range(0.3, 0.9)     // Smallest and largest span
//!     .step(0.2)           // Distance between spans
//!     .iterations(1)       // One robustness iteration
//!     .build()?;
//!
//! let result = model.fit(&durations)?;
//!
//! assert_eq!(result.spans, vec![0.3, 0.5, 0.7, 0.9]);
//! assert_eq!(result.len(), 4 * durations.len());
//! println!("{}", result);
//! # Ok::<(), MultiLoessError>(())
//! ```
//!
//! ## Building Blocks
//!
//! Every stage is also available on its own:
//!
//! ```rust
//! use multiloess::prelude::*;
//!
//! let durations = vec![5.0; 10];
//!
//! let axis = build_time_axis(&durations)?;
//! let grid = build_span_grid(0.3, 0.3, 0.1)?;
//! let curve = fit_curve(&axis, &durations, grid[0], 1)?;
//! let result = aggregate(&grid, &axis, &[curve])?;
//!
//! assert_eq!(axis.last(), Some(&100.0));
//! assert_eq!(result.len(), 10);
//! # Ok::<(), MultiLoessError>(())
//! ```
//!
//! ## Logging
//!
//! The crate emits `tracing` events: `info` once per request, `debug` per span,
//! and `warn` when a span had degenerate neighborhoods that fell back to a
//! weighted mean. Install any subscriber to see them.
//!
//! ## References
//!
//! - Cleveland, W. S. (1979). "Robust Locally Weighted Regression and Smoothing Scatterplots"

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - local regression and robustness.
mod algorithms;

// Layer 4: Engine - axis, grid, validation and execution.
mod engine;

// Layer 5: Evaluation - aggregation, diagnostics, rendering contract.
mod evaluation;

// Layer 6: Adapters - data boundaries.
mod adapters;

// High-level fluent API.
mod api;

// Standard prelude.
pub mod prelude {
    #[cfg(feature = "csv")]
    pub use crate::adapters::table::{WideTable, write_long_form, write_long_form_to_path};
    pub use crate::api::{
        AggregatedResult, ErrorKind, MultiLoess, MultiLoessBuilder, MultiLoessConfig,
        MultiLoessError, Result, SpanRange, SpanRecord, ZeroWeightFallback, visualize,
    };
    pub use crate::engine::axis::{TimeAxis, build_time_axis};
    pub use crate::engine::executor::{LoessExecutor, fit_curve};
    pub use crate::engine::grid::{SpanGrid, build_span_grid};
    pub use crate::engine::output::FittedCurve;
    pub use crate::evaluation::aggregate::{ResultAggregator, aggregate};
    pub use crate::evaluation::colorbar::{
        COLORBAR_LABEL, ColorBar, RenderRequest, X_LABEL, Y_LABEL, colorbar_ticks,
        image_file_name,
    };
    pub use crate::evaluation::diagnostics::{CurveDiagnostics, roughness};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
