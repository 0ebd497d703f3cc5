//! Pure validation of the user input.
//!
//! Every function takes the raw text typed by the user and returns either the
//! parsed value or the reason it was rejected. None of them does any I/O, the
//! retry loop lives in [crate::prompt].

use crate::{
    distributions::distribution_spec::DistributionKind,
    errors::VariateError,
    generator::check_sample_size,
    histogram::check_interval_count,
};

/// Parses the name of a distribution (`uniform`, `exponential` or `normal`).
pub fn parse_distribution(input: &str) -> Result<DistributionKind, VariateError> {
    return input.parse::<DistributionKind>();
}

/// Parses an integer in `[1, 1 000 000]`.
pub fn parse_sample_size(input: &str) -> Result<usize, VariateError> {
    let n: usize = parse_integer(input)?;
    check_sample_size(n)?;
    return Ok(n);
}

/// Parses the number of intervals of the histogram. Must be one of `10, 15, 20, 30`.
pub fn parse_interval_count(input: &str) -> Result<usize, VariateError> {
    let k: usize = parse_integer(input)?;
    check_interval_count(k)?;
    return Ok(k);
}

/// Parses a finite floating point number.
pub fn parse_number(input: &str) -> Result<f64, VariateError> {
    let trimmed: &str = input.trim();
    let x: f64 = trimmed
        .parse::<f64>()
        .map_err(|_| VariateError::parameter(format!("`{trimmed}` is not a number")))?;

    if !x.is_finite() {
        return Err(VariateError::parameter(format!(
            "`{trimmed}` is not a finite number"
        )));
    }

    return Ok(x);
}

/// Checks that the bounds of a uniform distribution are ordered (`a < b`)
/// and not too far apart (`b - a` is finite).
pub fn validate_uniform_bounds(a: f64, b: f64) -> Result<(f64, f64), VariateError> {
    if b <= a {
        return Err(VariateError::parameter(format!(
            "the lower bound must be smaller than the upper bound (got a = {a}, b = {b})"
        )));
    }
    if !(b - a).is_finite() {
        return Err(VariateError::parameter(format!(
            "the bounds are too far apart (got a = {a}, b = {b})"
        )));
    }
    return Ok((a, b));
}

fn parse_integer(input: &str) -> Result<usize, VariateError> {
    let trimmed: &str = input.trim();
    return trimmed
        .parse::<usize>()
        .map_err(|_| VariateError::parameter(format!("`{trimmed}` is not a valid positive integer")));
}
