//! # Bar chart
//!
//! Draws a [FrequencyTable] on the terminal as horizontal bars:
//!
//! ```text
//! Histogram of the sample with 10 intervals
//!
//! [0.0000, 1.0000) | ∎∎∎∎∎∎∎∎∎∎∎∎∎∎∎∎∎∎∎∎∎∎∎∎ 103
//! [1.0000, 2.0000) | ∎∎∎∎∎∎∎∎∎∎∎∎∎∎∎∎∎∎∎∎ 88
//! ...
//! [9.0000, 10.0000] | ∎∎∎∎∎∎∎∎∎∎∎∎∎∎∎∎∎∎∎∎∎∎∎ 99
//! ```
//!
//! The chart is drawn from the table itself, so the bars always use the
//! same intervals as the printed table.

use std::fmt;

use crate::{
    configuration::plot::{BAR_SYMBOL, DEFAULT_BAR_WIDTH},
    histogram::{FrequencyTable, Interval},
};

/// A printable bar chart of a [FrequencyTable].
pub struct BarChart<'a> {
    table: &'a FrequencyTable,
    /// The length of the longest bar.
    width: usize,
    symbol: char,
}

impl<'a> BarChart<'a> {
    /// Creates a chart with the deafult width and symbol
    /// (see [crate::configuration::plot]).
    pub fn new(table: &'a FrequencyTable) -> BarChart<'a> {
        return BarChart {
            table,
            width: DEFAULT_BAR_WIDTH,
            symbol: BAR_SYMBOL,
        };
    }

    /// Changes the length (in characters) of the longest bar.
    /// A `width` of `0` is treated as `1`.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> BarChart<'a> {
        self.width = width.max(1);
        return self;
    }

    /// Changes the character used to draw the bars.
    #[must_use]
    pub fn with_symbol(mut self, symbol: char) -> BarChart<'a> {
        self.symbol = symbol;
        return self;
    }

    /// The length of the bar for every interval, in order.
    ///
    /// The largest count gets exacly `width` symbols, the rest are scaled
    /// proportionally and rounded. A non-zero count always gets at least
    /// one symbol.
    pub fn bar_lengths(&self) -> Vec<usize> {
        let max: usize = self.table.max_count();
        if max == 0 {
            return vec![0; self.table.len()];
        }

        return self
            .table
            .intervals()
            .iter()
            .map(|i: &Interval| {
                if i.count == 0 {
                    return 0;
                }
                let len: f64 = (i.count as f64 / max as f64) * self.width as f64;
                (len.round() as usize).max(1)
            })
            .collect::<Vec<usize>>();
    }
}

impl fmt::Display for BarChart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Histogram of the sample with {} intervals",
            self.table.len()
        )?;
        writeln!(f)?;

        let intervals: &[Interval] = self.table.intervals();
        let last: usize = intervals.len().saturating_sub(1);

        let labels: Vec<String> = intervals
            .iter()
            .enumerate()
            .map(|(i, interval)| {
                let close: char = if i == last { ']' } else { ')' };
                format!("[{:.4}, {:.4}{close}", interval.low, interval.high)
            })
            .collect::<Vec<String>>();
        let label_width: usize = labels.iter().map(|l: &String| l.chars().count()).max().unwrap_or(0);

        let symbol: String = self.symbol.to_string();
        for ((label, interval), len) in labels.iter().zip(intervals).zip(self.bar_lengths()) {
            writeln!(
                f,
                "{label:>label_width$} | {} {}",
                symbol.repeat(len),
                interval.count
            )?;
        }

        if 0 < self.table.dropped() {
            writeln!(f)?;
            writeln!(
                f,
                "({} values outside of the bounds were not counted)",
                self.table.dropped()
            )?;
        }

        return Ok(());
    }
}
