//! Input contract of the rendering sink.
//!
//! ## Purpose
//!
//! The renderer draws one line per span, colored along a continuous ramp, with
//! a horizontal color bar as legend. This module computes the parts of that
//! contract that depend on the data: the normalization of spans onto the ramp
//! and the color-bar tick positions.
//!
//! ## Design notes
//!
//! * The ramp runs from the smallest to the largest span of the result.
//! * Ticks start at `low` and advance by the tick spacing up to, but not
//!   including, `high + step`; they are rounded like span labels.
//!
//! ## Non-goals
//!
//! * Choosing colors, drawing, or encoding images.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::grid::{MAX_SPANS, SpanRange, round_span};
use crate::engine::validator::Validator;
use crate::evaluation::aggregate::AggregatedResult;
use crate::primitives::errors::{MultiLoessError, Result};

/// Label of the horizontal axis.
pub const X_LABEL: &str = "Running time (%)";

/// Label of the vertical axis.
pub const Y_LABEL: &str = "Fitted values (s)";

/// Label of the color bar.
pub const COLORBAR_LABEL: &str = "Span";

/// Color-bar tick positions for a span range.
pub fn colorbar_ticks<T: Float>(range: &SpanRange<T>, tick_spacing: T) -> Result<Vec<T>> {
    range.validate()?;
    Validator::validate_tick_spacing(tick_spacing)?;

    let stop = range.high + range.step;
    let epsilon = T::from(1e-9).unwrap_or_else(T::epsilon);
    let count = ((stop - range.low) / tick_spacing - epsilon)
        .ceil()
        .to_usize()
        .unwrap_or(usize::MAX);

    if count > MAX_SPANS {
        return Err(MultiLoessError::GridTooLarge {
            got: count,
            max: MAX_SPANS,
        });
    }

    Ok((0..count)
        .map(|i| round_span(range.low + tick_spacing * T::from(i).unwrap_or_else(T::zero)))
        .collect())
}

/// Normalization of spans onto the color ramp, plus legend ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorBar<T> {
    /// Span mapped to the start of the ramp.
    pub vmin: T,

    /// Span mapped to the end of the ramp.
    pub vmax: T,

    /// Tick positions on the color bar.
    pub ticks: Vec<T>,
}

impl<T: Float> ColorBar<T> {
    /// Build the color bar for a result and the range it was produced from.
    pub fn new(result: &AggregatedResult<T>, range: &SpanRange<T>, tick_spacing: T) -> Result<Self> {
        let ticks = colorbar_ticks(range, tick_spacing)?;
        let (vmin, vmax) = result.span_bounds().unwrap_or((range.low, range.high));
        Ok(Self { vmin, vmax, ticks })
    }

    /// Position of `span` on the ramp; 0 at `vmin`, 1 at `vmax`.
    ///
    /// Values outside `[vmin, vmax]` are not clipped. A single-span ramp maps
    /// everything to 0.
    pub fn normalize(&self, span: T) -> T {
        let width = self.vmax - self.vmin;
        if width <= T::zero() {
            return T::zero();
        }
        (span - self.vmin) / width
    }
}

/// Everything the rendering sink receives for one request.
#[derive(Debug, Clone)]
pub struct RenderRequest<'a, T> {
    /// The aggregated curves.
    pub result: &'a AggregatedResult<T>,

    /// The span range the curves were fitted over.
    pub range: SpanRange<T>,

    /// Distance between color-bar ticks.
    pub tick_spacing: T,

    /// Plot title, usually the film title.
    pub title: String,
}

impl<'a, T: Float> RenderRequest<'a, T> {
    /// Bundle a result for rendering.
    pub fn new(
        result: &'a AggregatedResult<T>,
        range: SpanRange<T>,
        tick_spacing: T,
        title: impl Into<String>,
    ) -> Self {
        Self {
            result,
            range,
            tick_spacing,
            title: title.into(),
        }
    }

    /// Color bar for this request.
    pub fn color_bar(&self) -> Result<ColorBar<T>> {
        ColorBar::new(self.result, &self.range, self.tick_spacing)
    }
}

/// File name of the exported image for a data column.
pub fn image_file_name(column: &str) -> String {
    format!("{column}.png")
}
