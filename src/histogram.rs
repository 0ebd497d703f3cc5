//! # Histogram
//!
//! A [histogram](https://en.wikipedia.org/wiki/Histogram) splits the range
//! `[lower, upper]` in `k` intervals of equal width and counts how many values
//! of a sample fall in each one of them. The result is a [FrequencyTable].
//!
//! Interval `i` covers `[lower + i*w, lower + (i+1)*w)` where
//! `w = (upper - lower) / k`. The last interval is closed on both ends, so
//! a value equal to `upper` is counted on it. Values outside of
//! `[lower, upper]` are not counted (but the table remembers how many there were).

use std::fmt;

use tracing::{debug, warn};

use crate::{
    configuration::{ALLOWED_INTERVAL_COUNTS, DEFAULT_INTERVAL_COUNT},
    errors::VariateError,
    euclid,
};

/// A single row of a [FrequencyTable].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// The (rounded) lower boundary of the interval.
    pub low: f64,
    /// The (rounded) upper boundary of the interval.
    pub high: f64,
    /// How many values fall inside of the interval.
    pub count: usize,
}

/// The result of binning a sample.
///
/// The intervals are sorted, contiguous and have equal width (up to the
/// rounding of their boundaries).
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable {
    intervals: Vec<Interval>,
    lower: f64,
    upper: f64,
    /// Number of values outside of `[lower, upper]`.
    dropped: usize,
}

/// The number of intervals and the bounds of a histogram, already validated.
///
/// Unlike [build], the number of intervals must be one of
/// [ALLOWED_INTERVAL_COUNTS].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramSpec {
    interval_count: usize,
    lower: f64,
    upper: f64,
}

/// Checks that `lower < upper`, that both are finite and that the
/// distance between them is also finite.
pub fn check_bounds(lower: f64, upper: f64) -> Result<(), VariateError> {
    if !lower.is_finite() || !upper.is_finite() {
        return Err(VariateError::parameter(format!(
            "the bounds of the histogram must be finite (got [{lower}, {upper}])"
        )));
    }

    if upper <= lower {
        return Err(VariateError::parameter(format!(
            "the lower bound must be smaller than the upper bound (got [{lower}, {upper}])"
        )));
    }

    if !(upper - lower).is_finite() {
        return Err(VariateError::parameter(format!(
            "the range of the histogram is too large (got [{lower}, {upper}])"
        )));
    }

    return Ok(());
}

/// Checks that `interval_count` is one of [ALLOWED_INTERVAL_COUNTS].
pub fn check_interval_count(interval_count: usize) -> Result<(), VariateError> {
    if !ALLOWED_INTERVAL_COUNTS.contains(&interval_count) {
        return Err(VariateError::parameter(format!(
            "the number of intervals must be one of {ALLOWED_INTERVAL_COUNTS:?} (got {interval_count})"
        )));
    }
    return Ok(());
}

/// Bins `sample` in `interval_count` intervals of equal width covering
/// `[lower, upper]` and returns the [FrequencyTable].
///
/// Returns [VariateError::InvalidParameter] if `interval_count == 0`, or
/// if the bounds are not finite or `upper <= lower`.
///
/// NaNs and values outside `[lower, upper]` are not counted.
pub fn build(
    sample: &[f64],
    interval_count: usize,
    lower: f64,
    upper: f64,
) -> Result<FrequencyTable, VariateError> {
    if interval_count == 0 {
        return Err(VariateError::parameter(
            "the number of intervals must be greater than 0",
        ));
    }
    check_bounds(lower, upper)?;

    let edges: Vec<f64> = euclid::equal_width_edges(lower, upper, interval_count);
    let range: f64 = upper - lower;
    let n: f64 = interval_count as f64;
    let last: usize = interval_count - 1;

    let mut counts: Vec<usize> = vec![0; interval_count];
    let mut dropped: usize = 0;

    for &x in sample {
        // also rejects NaNs
        if !(lower <= x && x <= upper) {
            dropped += 1;
            continue;
        }

        // `(x - lower) / range` is in `[0, 1]`, even for tiny ranges
        // where `n / range` would overflow.
        let mut index: usize = (((x - lower) / range * n).floor() as usize).min(last);

        // The division can be off by one ulp near an edge. The edges
        // are the reference. `edges[0] == lower <= x`, so index > 0 here.
        if x < edges[index] {
            index -= 1;
        } else if index != last && edges[index + 1] <= x {
            index += 1;
        }

        counts[index] += 1;
    }

    let intervals: Vec<Interval> = counts
        .iter()
        .enumerate()
        .map(|(i, &count)| Interval {
            low: euclid::round_default(edges[i]),
            high: euclid::round_default(edges[i + 1]),
            count,
        })
        .collect::<Vec<Interval>>();

    debug!(
        intervals = interval_count,
        lower,
        upper,
        counted = sample.len() - dropped,
        "built frequency table"
    );
    if 0 < dropped {
        warn!(
            dropped,
            lower, upper, "values outside of the histogram bounds were not counted"
        );
    }

    return Ok(FrequencyTable {
        intervals,
        lower,
        upper,
        dropped,
    });
}

/// Same as [build], but with named arguments and a deafult number of intervals
/// ([DEFAULT_INTERVAL_COUNT]).
///
/// ```
/// use VariateHistogram::histogram::frequency_table;
///
/// let table = frequency_table()
///     .sample(&[0.5, 1.5, 9.99])
///     .lower(0.0)
///     .upper(10.0)
///     .call()
///     .unwrap();
/// assert_eq!(table.total(), 3);
/// ```
#[bon::builder]
pub fn frequency_table(
    sample: &[f64],
    #[builder(default = DEFAULT_INTERVAL_COUNT)] intervals: usize,
    lower: f64,
    upper: f64,
) -> Result<FrequencyTable, VariateError> {
    return build(sample, intervals, lower, upper);
}

impl HistogramSpec {
    /// Creates a new [HistogramSpec].
    ///
    ///  - `interval_count` must be one of [ALLOWED_INTERVAL_COUNTS].
    ///  - `lower < upper`, both finite.
    pub fn new(interval_count: usize, lower: f64, upper: f64) -> Result<HistogramSpec, VariateError> {
        check_interval_count(interval_count)?;
        check_bounds(lower, upper)?;

        return Ok(HistogramSpec {
            interval_count,
            lower,
            upper,
        });
    }

    pub const fn get_interval_count(&self) -> usize {
        return self.interval_count;
    }

    pub const fn get_bounds(&self) -> (f64, f64) {
        return (self.lower, self.upper);
    }

    /// The width of every interval.
    pub fn interval_width(&self) -> f64 {
        return (self.upper - self.lower) / self.interval_count as f64;
    }

    /// Bins the `sample` (see [build]).
    pub fn build(&self, sample: &[f64]) -> Result<FrequencyTable, VariateError> {
        return build(sample, self.interval_count, self.lower, self.upper);
    }
}

impl FrequencyTable {
    /// All the intervals, sorted.
    pub fn intervals(&self) -> &[Interval] {
        return &self.intervals;
    }

    /// Number of intervals.
    pub fn len(&self) -> usize {
        return self.intervals.len();
    }

    /// A [FrequencyTable] always has at least 1 interval.
    pub fn is_empty(&self) -> bool {
        return self.intervals.is_empty();
    }

    /// The (unrounded) bounds `(lower, upper)` of the histogram.
    pub const fn get_bounds(&self) -> (f64, f64) {
        return (self.lower, self.upper);
    }

    /// The count of every interval, in order.
    pub fn counts(&self) -> Vec<usize> {
        return self.intervals.iter().map(|i: &Interval| i.count).collect::<Vec<usize>>();
    }

    /// The number of values that were counted (sum of all the counts).
    pub fn total(&self) -> usize {
        return self.intervals.iter().map(|i: &Interval| i.count).sum::<usize>();
    }

    /// The number of values that were outside of the bounds and not counted.
    pub const fn dropped(&self) -> usize {
        return self.dropped;
    }

    /// The largest count among all the intervals.
    pub fn max_count(&self) -> usize {
        return self
            .intervals
            .iter()
            .map(|i: &Interval| i.count)
            .max()
            .unwrap_or(0);
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = format!("({:.4}, {:.4})", self.low, self.high);
        // forward width and alignment
        return f.pad(&text);
    }
}

/// Two columns (`Interval` and `Frequency`) plus the row index:
///
/// ```text
///     Interval            Frequency
/// 0   (0.0000, 1.0000)    3
/// 1   (1.0000, 2.0000)    2
/// ```
impl fmt::Display for FrequencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interval_width: usize = self
            .intervals
            .iter()
            .map(|i: &Interval| i.to_string().chars().count())
            .max()
            .unwrap_or(0)
            .max("Interval".len());
        let index_width: usize = self.intervals.len().saturating_sub(1).to_string().len();

        writeln!(
            f,
            "{:index_width$}   {:<interval_width$}   Frequency",
            "", "Interval"
        )?;
        for (i, interval) in self.intervals.iter().enumerate() {
            writeln!(
                f,
                "{i:<index_width$}   {interval:<interval_width$}   {}",
                interval.count
            )?;
        }

        return Ok(());
    }
}
