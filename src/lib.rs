#![allow(
    non_snake_case,
    clippy::needless_return,
    clippy::assign_op_pattern,
    clippy::excessive_precision
)]
// ^Disable warning "crate `VariateHistogram` should have a snake case name convert the identifier to snake case: `variate_histogram`"
// The rest of the names will follow the snake_case convention.

//! # Variate Histogram
//!
//! This library generates pseudo-random samples of a distribution and counts
//! them in a histogram. It provides:
//!
//! - [x] Sampling of common distributions from an injected (seedable) random number generator
//! - [x] Frequency tables of fixed-width intervals
//! - [x] Validation of user input and an interactive prompt loop
//! - [x] A text bar chart of the frequency table
//!
//! ## Distributions
//!
//! The trait [Distribution](distribution_trait::Distribution) defines how to
//! draw values. The implemented distributions are:
//!
//!  - [x] [Uniform distribution](crate::distributions::Uniform) ([Wiki](https://en.wikipedia.org/wiki/Continuous_uniform_distribution))
//!  - [x] [Exponential](crate::distributions::Exponential) ([Wiki](https://en.wikipedia.org/wiki/Exponential_distribution))
//!  - [x] [Normal distribution](crate::distributions::Normal) ([Wiki](https://en.wikipedia.org/wiki/Normal_distribution))
//!
//! Uniform and Exponential values are obtained by
//! [inverse transform sampling](https://en.wikipedia.org/wiki/Inverse_transform_sampling),
//! Normal values with the [Box-Muller transform](https://en.wikipedia.org/wiki/Box%E2%80%93Muller_transform).
//! [DistributionSpec](distributions::distribution_spec::DistributionSpec) joins
//! them in a single closed type.
//!
//! ## Generating and binning
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use VariateHistogram::distributions::distribution_spec::DistributionSpec;
//! use VariateHistogram::{generator, histogram};
//!
//! let mut rng: SmallRng = SmallRng::seed_from_u64(42);
//! let spec: DistributionSpec = DistributionSpec::uniform(0.0, 10.0).unwrap();
//!
//! let sample = generator::generate(&spec, 5, &mut rng).unwrap();
//! let table = histogram::build(sample.peek_data(), 10, 0.0, 10.0).unwrap();
//!
//! assert_eq!(table.len(), 10);
//! assert_eq!(table.total(), 5);
//! ```
//!
//! The results can be shown with the [Display](std::fmt::Display) of
//! [FrequencyTable](histogram::FrequencyTable) and with [BarChart](plot::BarChart).
//!
//! ***
//!

pub mod Samples;
pub mod configuration;
pub mod distribution_trait;
pub mod distributions;
pub mod errors;
pub mod euclid;
pub mod generator;
pub mod histogram;
pub mod plot;
pub mod prompt;
pub mod validation;
