//! # Distribution specification
//!
//! [DistributionSpec] is the closed set of distributions the generator knows
//! about, each variant carrying its own (already validated) parameters.
//! [DistributionKind] is the same set without parameters: what the user
//! names before giving any number.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::{
    Samples::Samples,
    configuration::NORMAL_DISPLAY_STD_DEVS,
    distribution_trait::Distribution,
    distributions::{Exponential::Exponential, Normal::Normal, Uniform::Uniform},
    errors::VariateError,
};

/// The name of a distribution, without its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistributionKind {
    Uniform,
    Exponential,
    Normal,
}

/// A distribution together with its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DistributionSpec {
    Uniform(Uniform),
    Exponential(Exponential),
    Normal(Normal),
}

impl DistributionKind {
    /// All the kinds, in the order they are offered to the user.
    pub const ALL: [DistributionKind; 3] = [
        DistributionKind::Uniform,
        DistributionKind::Exponential,
        DistributionKind::Normal,
    ];

    /// The name used to refer to this kind.
    pub const fn name(&self) -> &'static str {
        return match self {
            DistributionKind::Uniform => "uniform",
            DistributionKind::Exponential => "exponential",
            DistributionKind::Normal => "normal",
        };
    }

    /// A human readable name of every parameter this kind requieres, in the
    /// order expected by [DistributionSpec::from_parameters].
    pub const fn parameter_names(&self) -> &'static [&'static str] {
        return match self {
            DistributionKind::Uniform => &["lower bound", "upper bound"],
            DistributionKind::Exponential => &["lambda"],
            DistributionKind::Normal => &["mean", "standard deviation"],
        };
    }
}

impl FromStr for DistributionKind {
    type Err = VariateError;

    /// Case insensitive. Surrounding whitespace is ignored. The spanish names
    /// (`uniforme`, `exponencial`) are also accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name: String = s.trim().to_lowercase();
        return match name.as_str() {
            "uniform" | "uniforme" => Ok(DistributionKind::Uniform),
            "exponential" | "exponencial" => Ok(DistributionKind::Exponential),
            "normal" => Ok(DistributionKind::Normal),
            _ => Err(VariateError::InvalidDistribution(s.trim().to_string())),
        };
    }
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str(self.name());
    }
}

impl DistributionSpec {
    /// A [Uniform] distribution over `[lower, upper]`.
    pub fn uniform(lower: f64, upper: f64) -> Result<DistributionSpec, VariateError> {
        return Ok(DistributionSpec::Uniform(Uniform::new(lower, upper)?));
    }

    /// An [Exponential] distribution with the given `rate` (lambda).
    pub fn exponential(rate: f64) -> Result<DistributionSpec, VariateError> {
        return Ok(DistributionSpec::Exponential(Exponential::new(rate)?));
    }

    /// A [Normal] distribution.
    pub fn normal(mean: f64, standard_deviation: f64) -> Result<DistributionSpec, VariateError> {
        return Ok(DistributionSpec::Normal(Normal::new(
            mean,
            standard_deviation,
        )?));
    }

    /// Builds the distribution of the given `kind` from a list of `parameters`.
    ///
    /// The parameters must be given in the order of
    /// [DistributionKind::parameter_names] and there must be exacly
    /// that many of them.
    pub fn from_parameters(
        kind: DistributionKind,
        parameters: &[f64],
    ) -> Result<DistributionSpec, VariateError> {
        let expected: usize = kind.parameter_names().len();
        if parameters.len() != expected {
            return Err(VariateError::parameter(format!(
                "the {kind} distribution takes {expected} parameter(s) ({}), got {}",
                kind.parameter_names().join(", "),
                parameters.len()
            )));
        }

        return match kind {
            DistributionKind::Uniform => DistributionSpec::uniform(parameters[0], parameters[1]),
            DistributionKind::Exponential => DistributionSpec::exponential(parameters[0]),
            DistributionKind::Normal => DistributionSpec::normal(parameters[0], parameters[1]),
        };
    }

    pub const fn kind(&self) -> DistributionKind {
        return match self {
            DistributionSpec::Uniform(_) => DistributionKind::Uniform,
            DistributionSpec::Exponential(_) => DistributionKind::Exponential,
            DistributionSpec::Normal(_) => DistributionKind::Normal,
        };
    }

    /// The bounds `(lower, upper)` of the histogram used to show `data`,
    /// a sample of this distribution.
    ///
    ///  - Uniform: `[a, b]`.
    ///  - Exponential: `[0, max(data)]`.
    ///  - Normal: `[mean - 3 * std_dev, mean + 3 * std_dev]`
    ///     (see [NORMAL_DISPLAY_STD_DEVS]).
    ///
    /// Returns an error if `data` is empty for an Exponential or if the
    /// resulting range is empty (all values rounded to `0.0`).
    pub fn display_bounds(&self, data: &mut Samples) -> Result<(f64, f64), VariateError> {
        let bounds: (f64, f64) = match self {
            DistributionSpec::Uniform(u) => (u.get_a(), u.get_b()),
            DistributionSpec::Exponential(_) => {
                let max: f64 = data.maximum().ok_or_else(|| {
                    VariateError::parameter("can not derive the bounds of an empty sample")
                })?;
                (0.0, max)
            }
            DistributionSpec::Normal(n) => {
                let half_width: f64 = NORMAL_DISPLAY_STD_DEVS * n.get_standard_deviation();
                (n.get_mean() - half_width, n.get_mean() + half_width)
            }
        };

        if !(bounds.0 < bounds.1) {
            return Err(VariateError::parameter(format!(
                "the derived bounds [{}, {}] are empty",
                bounds.0, bounds.1
            )));
        }

        return Ok(bounds);
    }
}

impl Distribution for DistributionSpec {
    fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        return match self {
            DistributionSpec::Uniform(d) => d.sample(rng),
            DistributionSpec::Exponential(d) => d.sample(rng),
            DistributionSpec::Normal(d) => d.sample(rng),
        };
    }

    fn expected_value(&self) -> f64 {
        return match self {
            DistributionSpec::Uniform(d) => d.expected_value(),
            DistributionSpec::Exponential(d) => d.expected_value(),
            DistributionSpec::Normal(d) => d.expected_value(),
        };
    }

    fn variance(&self) -> f64 {
        return match self {
            DistributionSpec::Uniform(d) => d.variance(),
            DistributionSpec::Exponential(d) => d.variance(),
            DistributionSpec::Normal(d) => d.variance(),
        };
    }

    fn sample_multiple<R: Rng>(&self, n: usize, rng: &mut R) -> Vec<f64> {
        return match self {
            DistributionSpec::Uniform(d) => d.sample_multiple(n, rng),
            DistributionSpec::Exponential(d) => d.sample_multiple(n, rng),
            DistributionSpec::Normal(d) => d.sample_multiple(n, rng),
        };
    }
}

impl fmt::Display for DistributionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return match self {
            DistributionSpec::Uniform(d) => write!(f, "uniform(a = {}, b = {})", d.get_a(), d.get_b()),
            DistributionSpec::Exponential(d) => write!(f, "exponential(lambda = {})", d.get_lambda()),
            DistributionSpec::Normal(d) => write!(
                f,
                "normal(mean = {}, std_dev = {})",
                d.get_mean(),
                d.get_standard_deviation()
            ),
        };
    }
}
