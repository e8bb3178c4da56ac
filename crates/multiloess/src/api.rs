//! High-level API for multi-span LOESS smoothing.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point: a fluent builder that
//! collects the span range and fitting options, and a model that runs the
//! whole pipeline (running-time axis, span grid, per-span fits, aggregation)
//! for one duration sequence.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with defaults matching common use
//!   (spans 0.1 to 0.9 in steps of 0.1, one robustness iteration).
//! * **Validated**: Parameters are checked once in `.build()`; the span grid is
//!   generated there, so an invalid range never reaches the data.
//! * **Stateless**: A built model holds configuration only; every `fit` call
//!   is an independent request.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`MultiLoessBuilder`] via `MultiLoessBuilder::new()`.
//! 2. Chain configuration methods (`.range()`, `.step()`, `.iterations()`, etc.).
//! 3. Call `.build()` to obtain a [`MultiLoess`] model, then `.fit(&durations)`.

// External dependencies
use num_traits::Float;
use tracing::info;

// Internal dependencies
use crate::engine::axis::TimeAxis;
use crate::engine::executor::fit_spans;
use crate::engine::grid::SpanGrid;
use crate::engine::validator::Validator;
use crate::evaluation::aggregate::ResultAggregator;
use crate::evaluation::diagnostics::CurveDiagnostics;

// Publicly re-exported types
pub use crate::algorithms::regression::ZeroWeightFallback;
pub use crate::engine::grid::SpanRange;
pub use crate::evaluation::aggregate::{AggregatedResult, SpanRecord};
pub use crate::primitives::errors::{ErrorKind, MultiLoessError, Result};

// ============================================================================
// Configuration
// ============================================================================

/// Complete configuration of a multi-span request.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiLoessConfig<T> {
    /// Span grid parameters.
    pub range: SpanRange<T>,

    /// Robustness iterations per span (0 means initial fit only).
    pub iterations: usize,

    /// Behavior when a neighborhood's weights all vanish.
    pub zero_weight_fallback: ZeroWeightFallback,

    /// Fit spans on the rayon pool (ignored without the `parallel` feature).
    pub parallel: bool,

    /// Attach per-span diagnostics to the result.
    pub return_diagnostics: bool,
}

impl<T: Float> Default for MultiLoessConfig<T> {
    fn default() -> Self {
        Self {
            range: SpanRange::default(),
            iterations: 1,
            zero_weight_fallback: ZeroWeightFallback::default(),
            parallel: cfg!(feature = "parallel"),
            return_diagnostics: false,
        }
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for a [`MultiLoess`] model.
#[derive(Debug, Clone)]
pub struct MultiLoessBuilder<T> {
    /// Smallest span.
    pub low: Option<T>,

    /// Largest span.
    pub high: Option<T>,

    /// Distance between spans.
    pub step: Option<T>,

    /// Robustness iterations.
    pub iterations: Option<usize>,

    /// Behavior when local neighborhood weights are zero (default: UseLocalMean).
    pub zero_weight_fallback: Option<ZeroWeightFallback>,

    /// Parallel execution across spans.
    pub parallel: Option<bool>,

    /// Attach per-span diagnostics.
    pub return_diagnostics: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for MultiLoessBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> MultiLoessBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            low: None,
            high: None,
            step: None,
            iterations: None,
            zero_weight_fallback: None,
            parallel: None,
            return_diagnostics: None,
            duplicate_param: None,
        }
    }

    /// Start from an existing configuration.
    pub fn from_config(config: &MultiLoessConfig<T>) -> Self {
        Self {
            low: Some(config.range.low),
            high: Some(config.range.high),
            step: Some(config.range.step),
            iterations: Some(config.iterations),
            zero_weight_fallback: Some(config.zero_weight_fallback),
            parallel: Some(config.parallel),
            return_diagnostics: Some(config.return_diagnostics),
            duplicate_param: None,
        }
    }

    fn mark(&mut self, already_set: bool, parameter: &'static str) {
        if already_set && self.duplicate_param.is_none() {
            self.duplicate_param = Some(parameter);
        }
    }

    /// Set the smallest span.
    pub fn low(mut self, low: T) -> Self {
        self.mark(self.low.is_some(), "low");
        self.low = Some(low);
        self
    }

    /// Set the largest span.
    pub fn high(mut self, high: T) -> Self {
        self.mark(self.high.is_some(), "high");
        self.high = Some(high);
        self
    }

    /// Set both span bounds.
    pub fn range(self, low: T, high: T) -> Self {
        self.low(low).high(high)
    }

    /// Set the distance between consecutive spans.
    pub fn step(mut self, step: T) -> Self {
        self.mark(self.step.is_some(), "step");
        self.step = Some(step);
        self
    }

    /// Set all span grid parameters at once.
    pub fn span_range(self, range: SpanRange<T>) -> Self {
        self.range(range.low, range.high).step(range.step)
    }

    /// Set the number of robustness iterations.
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.mark(self.iterations.is_some(), "iterations");
        self.iterations = Some(iterations);
        self
    }

    /// Set behavior for handling zero-weight neighborhoods.
    pub fn zero_weight_fallback(mut self, policy: ZeroWeightFallback) -> Self {
        self.mark(self.zero_weight_fallback.is_some(), "zero_weight_fallback");
        self.zero_weight_fallback = Some(policy);
        self
    }

    /// Enable or disable parallel fitting across spans.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.mark(self.parallel.is_some(), "parallel");
        self.parallel = Some(parallel);
        self
    }

    /// Attach per-span diagnostics to results.
    pub fn return_diagnostics(mut self) -> Self {
        self.mark(self.return_diagnostics.is_some(), "return_diagnostics");
        self.return_diagnostics = Some(true);
        self
    }

    /// Validate the configuration and generate the span grid.
    pub fn build(self) -> Result<MultiLoess<T>> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let defaults = MultiLoessConfig::<T>::default();
        let config = MultiLoessConfig {
            range: SpanRange {
                low: self.low.unwrap_or(defaults.range.low),
                high: self.high.unwrap_or(defaults.range.high),
                step: self.step.unwrap_or(defaults.range.step),
            },
            iterations: self.iterations.unwrap_or(defaults.iterations),
            zero_weight_fallback: self
                .zero_weight_fallback
                .unwrap_or(defaults.zero_weight_fallback),
            parallel: self.parallel.unwrap_or(defaults.parallel),
            return_diagnostics: self.return_diagnostics.unwrap_or(defaults.return_diagnostics),
        };

        MultiLoess::new(config)
    }
}

// ============================================================================
// Model
// ============================================================================

/// A validated multi-span LOESS configuration with its span grid.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiLoess<T> {
    config: MultiLoessConfig<T>,
    grid: SpanGrid<T>,
}

impl<T: Float> MultiLoess<T> {
    /// Validate `config` and generate its span grid.
    pub fn new(config: MultiLoessConfig<T>) -> Result<Self> {
        Validator::validate_iterations(config.iterations)?;
        let grid = config.range.grid()?;
        Ok(Self { config, grid })
    }

    /// Start a builder.
    pub fn builder() -> MultiLoessBuilder<T> {
        MultiLoessBuilder::new()
    }

    /// The configuration in effect.
    pub fn config(&self) -> &MultiLoessConfig<T> {
        &self.config
    }

    /// The spans every request is fitted at.
    pub fn grid(&self) -> &SpanGrid<T> {
        &self.grid
    }
}

impl<T: Float + Send + Sync> MultiLoess<T> {
    /// Smooth one duration sequence at every span of the grid.
    ///
    /// Fails without a partial result if the durations are unusable.
    pub fn fit(&self, durations: &[T]) -> Result<AggregatedResult<T>> {
        let axis = TimeAxis::from_durations(durations)?;
        Validator::validate_inputs(&axis, durations)?;

        info!(
            points = durations.len(),
            spans = self.grid.len(),
            iterations = self.config.iterations,
            parallel = self.config.parallel,
            "fitting multi-span loess"
        );

        let curves = fit_spans(
            &axis,
            durations,
            &self.grid,
            self.config.iterations,
            self.config.zero_weight_fallback,
            self.config.parallel,
        );

        let mut result = ResultAggregator::aggregate(&self.grid, &axis, &curves)?;

        if self.config.return_diagnostics {
            result.diagnostics = Some(
                curves
                    .iter()
                    .map(|c| CurveDiagnostics::compute(c.span, durations, &c.fitted))
                    .collect(),
            );
        }

        Ok(result)
    }
}

/// Run the full pipeline for `durations` under `config`.
pub fn visualize<T>(durations: &[T], config: &MultiLoessConfig<T>) -> Result<AggregatedResult<T>>
where
    T: Float + Send + Sync,
{
    MultiLoess::new(*config)?.fit(durations)
}
