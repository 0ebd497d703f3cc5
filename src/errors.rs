use thiserror::Error;

/// An enum that indicates why a sample or a histogram could not be produced.
///
/// The [String] carried by each variant describes what exactly was rejected,
/// so it can be shown to the user when asking again for the input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VariateError {
    /// The name of the distribution was not recognized.
    /// Only `uniform`, `exponential` and `normal` are valid.
    #[error("Unrecognized distribution: {0}. Valid options are uniform, exponential or normal. ")]
    InvalidDistribution(String),
    /// A number did not fullfill the conditions of the function.
    /// Maybe it was out of range (sample size, number of intervals), the bounds
    /// were not ordered, it was infinite or NaN, or it was not a number at all.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl VariateError {
    /// Shorthand to build a [VariateError::InvalidParameter].
    pub fn parameter(reason: impl Into<String>) -> VariateError {
        return VariateError::InvalidParameter(reason.into());
    }
}
