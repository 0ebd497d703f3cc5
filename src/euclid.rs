//! Small numerical helpers shared by the generators and the histogram.

use crate::configuration::ROUNDING_DECIMALS;

/// Rounds `x` to the given number of `decimals`.
///
/// Halfway cases are rounded away from `0.0`. Infinities and NaNs are
/// returned unchanged.
#[must_use]
pub fn round_decimals(x: f64, decimals: i32) -> f64 {
    if !x.is_finite() {
        return x;
    }

    let scale: f64 = 10.0_f64.powi(decimals);
    let ret: f64 = (x * scale).round() / scale;

    // `x * scale` can overflow for very large values. Those have no
    // decimals left to round anyway.
    if !ret.is_finite() {
        return x;
    }

    return ret;
}

/// Rounds `x` to [ROUNDING_DECIMALS] decimal places.
#[inline]
#[must_use]
pub fn round_default(x: f64) -> f64 {
    return round_decimals(x, ROUNDING_DECIMALS);
}

/// Rounds every value in `data` to [ROUNDING_DECIMALS] decimal places (in place).
pub fn round_all(data: &mut [f64]) {
    for v in data.iter_mut() {
        *v = round_default(*v);
    }
}

/// Returns the `num_intervals + 1` edges that split `[lower, upper]` in
/// `num_intervals` intervals of equal length.
///
/// The first edge is exacly `lower` and the last one is exacly `upper`,
/// so no floating error can move the bounds themselves.
///
/// ## Panics
///
/// If `num_intervals == 0`. [build](crate::histogram::build) checks it
/// before calling this function.
#[must_use]
pub fn equal_width_edges(lower: f64, upper: f64, num_intervals: usize) -> Vec<f64> {
    assert!(0 < num_intervals);

    let n: f64 = num_intervals as f64;
    let range: f64 = upper - lower;

    let mut edges: Vec<f64> = Vec::with_capacity(num_intervals + 1);
    for k in 0..num_intervals {
        edges.push(lower + range * (k as f64) / n);
    }
    edges.push(upper);

    return edges;
}
