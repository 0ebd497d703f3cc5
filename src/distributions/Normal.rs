//! # Normal distribution
//!
//! The [Normal distribution](https://en.wikipedia.org/wiki/Normal_distribution)
//! ia a very important continuous probability distribution.
//!
//! Values are generated with the
//! [Box-Muller transform](https://en.wikipedia.org/wiki/Box%E2%80%93Muller_transform),
//! wich turns 2 independent uniform values into 2 independent standard normal values:
//!
//! ```text
//! r  = sqrt(-2 * ln(u1))
//! z0 = r * sin(2 * pi * u2)
//! z1 = r * cos(2 * pi * u2)
//! ```
//!
//! Both are then scaled to the requested mean and standard deviation. Since
//! the values always come in pairs, [Normal::sample_pairs] is the natural way
//! of generating many of them.
//!

use rand::Rng;
use std::f64::consts::PI;

use crate::{
    configuration::UNIT_DRAW_RESOLUTION, distribution_trait::Distribution,
    errors::VariateError,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal {
    /// The mean of the distribution
    mean: f64,
    /// The standard deviation of the distribution
    standard_deviation: f64,
}

impl Normal {
    /// Create a [Normal] distribution.
    ///
    ///  - The `mean` must be finite (No `+-inf` or NaNs)
    ///  - The `standard_deviation` must be finite (No `+-inf` or NaNs)
    ///  - The `standard_deviation` must be stricly greater than `0.0`.
    ///  - The largest possible sample (see [Normal::largest_deviation])
    ///     must not overflow to infinity.
    ///
    /// If those conditions are not fullfiled, an error will be returned.
    pub fn new(mean: f64, standard_deviation: f64) -> Result<Normal, VariateError> {
        if !mean.is_finite() {
            return Err(VariateError::parameter(format!(
                "the mean must be finite (got {mean})"
            )));
        }

        if !standard_deviation.is_finite() || standard_deviation <= 0.0 {
            return Err(VariateError::parameter(format!(
                "the standard deviation must be a finite positive number (got {standard_deviation})"
            )));
        }

        let ret: Normal = Normal {
            mean,
            standard_deviation,
        };
        if !(mean.abs() + ret.largest_deviation()).is_finite() {
            return Err(VariateError::parameter(format!(
                "the samples would overflow (got mean = {mean}, standard deviation = {standard_deviation})"
            )));
        }

        return Ok(ret);
    }

    /// The largest distance to the mean a sample can have:
    /// `sqrt(-2 * ln(UNIT_DRAW_RESOLUTION)) * standard_deviation`, around
    /// `8.57` standard deviations.
    pub fn largest_deviation(&self) -> f64 {
        let r_max: f64 = (-2.0 * UNIT_DRAW_RESOLUTION.ln()).sqrt();
        return r_max * self.standard_deviation;
    }

    pub const fn get_mean(&self) -> f64 {
        return self.mean;
    }

    pub const fn get_standard_deviation(&self) -> f64 {
        return self.standard_deviation;
    }

    /// Performs one Box-Muller step and returns the pair `(z0, z1)` already
    /// scaled by the mean and standard deviation.
    ///
    /// `u1` is drawn first and `u2` second. If `u1` happens to be exacly `0.0`
    /// (`ln(0) = -inf`) it is drawn again.
    pub fn sample_pair<R: Rng>(&self, rng: &mut R) -> (f64, f64) {
        let mut u1: f64 = rng.random::<f64>();
        while u1 <= 0.0 {
            u1 = rng.random::<f64>();
        }
        let u2: f64 = rng.random::<f64>();

        let r: f64 = (-2.0 * u1.ln()).sqrt();
        let theta: f64 = 2.0 * PI * u2;

        let z0: f64 = r * theta.sin();
        let z1: f64 = r * theta.cos();

        return (
            z0 * self.standard_deviation + self.mean,
            z1 * self.standard_deviation + self.mean,
        );
    }

    /// Generates `pairs` Box-Muller pairs. The result has `2 * pairs` elements
    /// in the order `[z0, z1, z0, z1, ...]`.
    pub fn sample_pairs<R: Rng>(&self, pairs: usize, rng: &mut R) -> Vec<f64> {
        let mut ret: Vec<f64> = Vec::with_capacity(2 * pairs);
        for _ in 0..pairs {
            let (z0, z1): (f64, f64) = self.sample_pair(rng);
            ret.push(z0);
            ret.push(z1);
        }
        return ret;
    }
}

impl Distribution for Normal {
    /// Draws a full pair and discards `z1`. Use [Normal::sample_pairs] or
    /// [Distribution::sample_multiple] to generate more than one value.
    fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        return self.sample_pair(rng).0;
    }

    fn expected_value(&self) -> f64 {
        return self.mean;
    }

    fn variance(&self) -> f64 {
        return self.standard_deviation * self.standard_deviation;
    }

    fn standard_deviation(&self) -> f64 {
        return self.standard_deviation;
    }

    fn sample_multiple<R: Rng>(&self, n: usize, rng: &mut R) -> Vec<f64> {
        let mut ret: Vec<f64> = self.sample_pairs(n.div_ceil(2), rng);
        ret.truncate(n);
        return ret;
    }
}

impl Default for Normal {
    fn default() -> Self {
        Normal {
            mean: 0.0,
            standard_deviation: 1.0,
        }
    }
}
