//! This script contains the interface used to comunicate with the distributions.

use rand::Rng;

/// The trait for the continuous distributions we can draw values from.
///
/// The only source of randomness is the random number generator passed to
/// the sampling methods. Using the same generator with the same seed and
/// calling the methods in the same order always gives the same values.
pub trait Distribution {
    //Requiered methods:

    /// Draws a single value from the distribution.
    ///
    /// The deafult choice for the implementors is
    /// [Inverse transform sampling](https://en.wikipedia.org/wiki/Inverse_transform_sampling):
    /// generate a uniform random number in `[0, 1)` and evaluate the
    /// quantile function (inverse cdf) at that point.
    fn sample<R: Rng>(&self, rng: &mut R) -> f64;

    /// The [expected value](https://en.wikipedia.org/wiki/Expected_value) of the distribution.
    fn expected_value(&self) -> f64;

    /// The [variance](https://en.wikipedia.org/wiki/Variance) of the distribution.
    fn variance(&self) -> f64;

    // Provided methods:

    /// Draws `n` values from the distribution. The values are **not** rounded.
    ///
    /// The result always has exacly `n` elements. The deafult implementation
    /// just calls [Distribution::sample] `n` times, override it if the
    /// distribution can do better.
    fn sample_multiple<R: Rng>(&self, n: usize, rng: &mut R) -> Vec<f64> {
        let mut ret: Vec<f64> = Vec::with_capacity(n);
        for _ in 0..n {
            ret.push(self.sample(rng));
        }
        return ret;
    }

    /// The [standard deviation](https://en.wikipedia.org/wiki/Standard_deviation)
    /// of the distribution.
    fn standard_deviation(&self) -> f64 {
        return self.variance().sqrt();
    }
}
