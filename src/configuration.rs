//! This file contains the deafult values and other value choices used trough the library.
//!

/// The largest sample that can be requested. `1 000 000`.
///
/// Note that a [Normal](crate::distributions::Normal) sample of odd size is
/// one value longer than requested, since the values are generated in pairs.
pub static MAX_SAMPLE_SIZE: usize = 1_000_000;

/// The number of intervals a histogram is allowed to have.
pub static ALLOWED_INTERVAL_COUNTS: [usize; 4] = [10, 15, 20, 30];

/// The number of intervals used when none is given.
pub static DEFAULT_INTERVAL_COUNT: usize = 10;

/// Every generated value and every interval boundary is rounded to this many
/// decimal places.
pub static ROUNDING_DECIMALS: i32 = 4;

/// The seed used by the binary when `--seed` is not given.
pub static DEFAULT_SEED: u64 = 42;

/// The histogram of a [Normal](crate::distributions::Normal) sample covers
/// `[mean - k * std_dev, mean + k * std_dev]` with this `k`.
///
/// For `k = 3` around `99.73%` of the values fall inside.
pub static NORMAL_DISPLAY_STD_DEVS: f64 = 3.0;

/// The smallest positive gap between a uniform draw `u` in `[0, 1)` and
/// either end of the interval. `rand` draws multiples of `2^-53`, so
/// `u` is either `0` or at least this value, and `1 - u` is never smaller.
///
/// It bounds the largest value an [Exponential](crate::distributions::Exponential)
/// or a [Normal](crate::distributions::Normal) can ever produce.
pub static UNIT_DRAW_RESOLUTION: f64 = f64::EPSILON / 2.0;

/// Values used to draw the histogram on the terminal.
pub mod plot {

    /// The length (in characters) of the longest bar.
    pub static DEFAULT_BAR_WIDTH: usize = 50;

    /// The character the bars are made of.
    pub static BAR_SYMBOL: char = '∎';
}
