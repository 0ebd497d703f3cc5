//! # Exponential distribution
//!
//! The [Exponential distribution](https://en.wikipedia.org/wiki/Exponential_distribution)
//! is a continuous distribution very important on statistics that measures
//! the time to the next poission event.
//!
//! The Exponential distribution has a parameter: the rate `lambda` wich determines
//! how fast do events happen.

use rand::Rng;

use crate::{
    configuration::UNIT_DRAW_RESOLUTION, distribution_trait::Distribution,
    errors::VariateError,
};

/// An [Exponential distribution](https://en.wikipedia.org/wiki/Exponential_distribution).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exponential {
    lambda: f64,
}

impl Exponential {
    /// Creates a new [Exponential] distribution. It is requiered that `0.0 < lambda`
    /// and that `lambda` is finite or an error will be returned.
    ///
    /// `lambda` can not be so small that the largest possible sample
    /// (see [Exponential::largest_sample]) overflows to infinity.
    pub fn new(lambda: f64) -> Result<Exponential, VariateError> {
        if !lambda.is_finite() || lambda <= 0.0 {
            return Err(VariateError::parameter(format!(
                "lambda must be a finite positive number (got {lambda})"
            )));
        }

        let ret: Exponential = Exponential { lambda };
        if !ret.largest_sample().is_finite() {
            return Err(VariateError::parameter(format!(
                "lambda is too small, the samples would overflow (got {lambda})"
            )));
        }

        return Ok(ret);
    }

    /// The largest value [Distribution::sample] can return:
    /// `-ln(UNIT_DRAW_RESOLUTION) / lambda`, around `36.74 / lambda`.
    pub fn largest_sample(&self) -> f64 {
        return -UNIT_DRAW_RESOLUTION.ln() / self.lambda;
    }

    pub const fn get_lambda(&self) -> f64 {
        return self.lambda;
    }

    /// Evaluates the [quantile function](https://en.wikipedia.org/wiki/Quantile_function):
    /// `-ln(1 - x) / lambda`.
    ///
    /// Returns `0.0` for `x <= 0` and `+inf` for `1 <= x`.
    pub fn quantile(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }

        if 1.0 <= x {
            return f64::INFINITY;
        }

        return -(1.0 - x).ln() / self.lambda;
    }
}

impl Distribution for Exponential {
    fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        // `u` is in `[0, 1)`, so `1 - u` is in `(0, 1]` and the log is finite.
        let u: f64 = rng.random::<f64>();
        return self.quantile(u);
    }

    fn expected_value(&self) -> f64 {
        return 1.0 / self.lambda;
    }

    fn variance(&self) -> f64 {
        return 1.0 / (self.lambda * self.lambda);
    }
}

impl Default for Exponential {
    fn default() -> Self {
        Exponential { lambda: 1.0 }
    }
}
