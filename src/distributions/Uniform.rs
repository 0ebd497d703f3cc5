//! # Uniform distribution
//!
//! The [uniform distribution](https://en.wikipedia.org/wiki/Continuous_uniform_distribution)
//! is a continuous distributions where all possible outcomes in the interval `[a, b]` have
//! equal likelyhood of happening.
//!

use rand::Rng;

use crate::{distribution_trait::Distribution, errors::VariateError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uniform {
    /// The minimum value
    a: f64,
    /// The maximum value
    b: f64,
}

impl Uniform {
    /// Creates a new [uniform distribution](https://en.wikipedia.org/wiki/Continuous_uniform_distribution).
    ///
    ///  - `a` indicates the minimum value.
    ///  - `b` indicates the maximum value.
    ///  - `a < b` must be fulfilled or an error will be returned.
    ///  - `a` and `b` must both be finite values (no `+-inf` or NaNs)
    ///  - `b - a` must also be finite, or the samples would overflow.
    pub fn new(a: f64, b: f64) -> Result<Uniform, VariateError> {
        if !a.is_finite() || !b.is_finite() {
            return Err(VariateError::parameter(format!(
                "the bounds of the uniform distribution must be finite (got a = {a}, b = {b})"
            )));
        }

        if b <= a {
            return Err(VariateError::parameter(format!(
                "the lower bound must be smaller than the upper bound (got a = {a}, b = {b})"
            )));
        }

        if !(b - a).is_finite() {
            return Err(VariateError::parameter(format!(
                "the range of the uniform distribution is too large (got a = {a}, b = {b})"
            )));
        }

        return Ok(Uniform { a, b });
    }

    /// Return `a` (minimum value).
    pub const fn get_a(&self) -> f64 {
        return self.a;
    }

    /// Return `b` (maximum value).
    pub const fn get_b(&self) -> f64 {
        return self.b;
    }

    /// Evaluates the [quantile function](https://en.wikipedia.org/wiki/Quantile_function).
    ///
    /// `x` is clamped to `[0, 1]`.
    pub fn quantile(&self, x: f64) -> f64 {
        let x: f64 = x.clamp(0.0, 1.0);
        return self.a + x * (self.b - self.a);
    }
}

impl Distribution for Uniform {
    fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        let u: f64 = rng.random::<f64>();
        return self.quantile(u);
    }

    fn expected_value(&self) -> f64 {
        return 0.5 * (self.a + self.b);
    }

    fn variance(&self) -> f64 {
        let d: f64 = self.b - self.a;
        return d * d / 12.0;
    }
}

impl Default for Uniform {
    fn default() -> Self {
        Uniform { a: 0.0, b: 1.0 }
    }
}
