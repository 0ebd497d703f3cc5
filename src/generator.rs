//! # Variate generation
//!
//! [generate] draws a sample of a [DistributionSpec] using the random number
//! generator it is given:
//!
//!  - Uniform and Exponential use
//!     [inverse transform sampling](https://en.wikipedia.org/wiki/Inverse_transform_sampling),
//!     one uniform value per generated value.
//!  - Normal uses the [Box-Muller transform](crate::distributions::Normal),
//!     two uniform values per generated *pair*.
//!
//! Every value is rounded to [ROUNDING_DECIMALS](crate::configuration::ROUNDING_DECIMALS)
//! decimal places.

use rand::Rng;
use tracing::debug;

use crate::{
    Samples::Samples,
    configuration::MAX_SAMPLE_SIZE,
    distribution_trait::Distribution,
    distributions::distribution_spec::DistributionSpec,
    errors::VariateError,
    euclid,
};

/// Checks that `n` is a valid sample size: `1 <= n <= MAX_SAMPLE_SIZE`.
pub fn check_sample_size(n: usize) -> Result<(), VariateError> {
    if n == 0 || MAX_SAMPLE_SIZE < n {
        return Err(VariateError::parameter(format!(
            "the sample size must be between 1 and {MAX_SAMPLE_SIZE} (got {n})"
        )));
    }
    return Ok(());
}

/// Generates a sample of size `n` from `spec`, rounded to 4 decimals.
///
/// `n` must be in `[1, 1 000 000]` or [VariateError::InvalidParameter] is returned.
///
/// ## Normal samples
///
/// The [Normal](crate::distributions::Normal) values are produced in pairs,
/// so for an **odd** `n` the returned sample has `n + 1` values. The last
/// pair is never split.
///
/// ## Reproducibility
///
/// The only source of randomness is `rng`. With the same seed and the same
/// sequence of calls the output is identical bit by bit.
pub fn generate<R: Rng>(
    spec: &DistributionSpec,
    n: usize,
    rng: &mut R,
) -> Result<Samples, VariateError> {
    check_sample_size(n)?;

    let mut data: Vec<f64> = match spec {
        DistributionSpec::Normal(normal) => normal.sample_pairs(n.div_ceil(2), rng),
        _ => spec.sample_multiple(n, rng),
    };

    euclid::round_all(&mut data);

    debug!(distribution = %spec, requested = n, generated = data.len(), "generated sample");

    return Samples::new_move(data);
}
