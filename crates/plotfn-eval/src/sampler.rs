//! Sampling a function across a range of abscissas, one value per sample.
//!
//! This is the numeric half of drawing a graph: the caller maps the
//! returned samples to pixels.

use serde::{Deserialize, Serialize};

use crate::context::Context;
use crate::error::PlotError;

/// Name under which [`plot_term`] binds the plotted term.
pub const DEFAULT_FUNCTION: &str = "f";

/// Parameter name of the plotted term.
pub const DEFAULT_PARAMETER: &str = "x";

/// One evaluated point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

/// Where and how densely to sample.
///
/// Missing fields fall back to the defaults when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleRange {
    /// First abscissa (inclusive).
    pub start: f64,
    /// Last abscissa (exclusive).
    pub end: f64,
    /// Number of samples, typically the canvas width in pixels.
    pub count: usize,
}

impl Default for SampleRange {
    fn default() -> Self {
        Self {
            start: -100.0,
            end: 100.0,
            count: 720,
        }
    }
}

impl SampleRange {
    pub fn new(start: f64, end: f64, count: usize) -> Self {
        Self { start, end, count }
    }

    /// Both bounds must be finite and `start <= end`.
    pub fn validate(&self) -> Result<(), PlotError> {
        if !self.start.is_finite() || !self.end.is_finite() || self.start > self.end {
            return Err(PlotError::InvalidRange {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// The `i`-th abscissa: `start + (i / count) * (end - start)`.
    pub fn abscissa(&self, i: usize) -> f64 {
        let progress = i as f64 / self.count as f64;
        self.start + progress * (self.end - self.start)
    }

    /// All `count` abscissas in order.
    pub fn abscissas(&self) -> impl Iterator<Item = f64> {
        let range = *self;
        (0..range.count).map(move |i| range.abscissa(i))
    }
}

/// Evaluate the function `name` at every abscissa of `range`.
///
/// Stops at the first evaluation error. Non-finite results are not errors
/// and are returned as they are.
pub fn sample(
    context: &Context,
    name: &str,
    range: &SampleRange,
) -> Result<Vec<Sample>, PlotError> {
    range.validate()?;
    log::debug!(
        "sampling {name} at {} points in [{}, {})",
        range.count,
        range.start,
        range.end
    );

    let samples = range
        .abscissas()
        .map(|x| context.call(name, x).map(|y| Sample { x, y }))
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!("sampled {name}: {} points", samples.len());
    Ok(samples)
}

/// Bind `term` as `f(x)` in `context` and sample it.
///
/// Any previous `f` in the context is replaced.
pub fn plot_term(
    context: &mut Context,
    term: &str,
    range: &SampleRange,
) -> Result<Vec<Sample>, PlotError> {
    context.define_function(DEFAULT_FUNCTION, DEFAULT_PARAMETER, term)?;
    sample(context, DEFAULT_FUNCTION, range)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abscissas_exclude_end() {
        let range = SampleRange::new(0.0, 10.0, 5);
        let xs: Vec<f64> = range.abscissas().collect();
        assert_eq!(xs, vec![0.0, 2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn test_zero_count_is_empty() {
        let range = SampleRange::new(-1.0, 1.0, 0);
        assert_eq!(range.abscissas().count(), 0);
    }

    #[test]
    fn test_degenerate_range_is_valid() {
        let range = SampleRange::new(3.0, 3.0, 4);
        assert!(range.validate().is_ok());
        assert!(range.abscissas().all(|x| x == 3.0));
    }

    #[test]
    fn test_validate_rejects_reversed_and_non_finite() {
        assert_eq!(
            SampleRange::new(1.0, -1.0, 10).validate(),
            Err(PlotError::InvalidRange {
                start: 1.0,
                end: -1.0
            })
        );
        assert!(SampleRange::new(f64::NAN, 1.0, 10).validate().is_err());
        assert!(SampleRange::new(0.0, f64::INFINITY, 10).validate().is_err());
    }

    #[test]
    fn test_default_range() {
        let range = SampleRange::default();
        assert_eq!(range.start, -100.0);
        assert_eq!(range.end, 100.0);
        assert_eq!(range.count, 720);
    }

    #[test]
    fn test_range_from_partial_json() {
        let range: SampleRange = serde_json::from_str(r#"{ "count": 3 }"#).unwrap();
        assert_eq!(range, SampleRange::new(-100.0, 100.0, 3));

        let range: SampleRange = serde_json::from_str("{}").unwrap();
        assert_eq!(range, SampleRange::default());
    }

    #[test]
    fn test_sample_json_shape() {
        let json = serde_json::to_string(&Sample { x: 1.5, y: -2.0 }).unwrap();
        assert_eq!(json, r#"{"x":1.5,"y":-2.0}"#);
    }
}
