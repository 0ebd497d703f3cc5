//! # Samples
//!
//! The values produced by [generate](crate::generator::generate) are stored in
//! [Samples], wich also allows the effitient computation of the few statistics
//! we need (mean, variance and maximum). Every statistic is computed
//! at most once and then cached in [SampleProperties].

use crate::errors::VariateError;

/// An ordered sequence of finite values.
#[derive(Debug, Clone, PartialEq)]
pub struct Samples {
    data: Vec<f64>,
    properties: SampleProperties,
}

/// Stores the sample properties of the data if they have been computed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SampleProperties {
    /// the average of the sample
    ///
    /// Or None if `data.len() == 0`
    pub mean: Option<f64>,
    /// the (unbiased) variance of the sample
    ///
    /// Or None if `data.len() <= 1`
    pub variance: Option<f64>,
    /// The maximum value of the sample
    pub maximum: Option<f64>,
}

impl Samples {
    /// Creates a new instance of [Samples] with the given `data`.
    ///
    /// `data` must not contain NaNs or infinities (`+-inf`).
    ///
    /// If you want to just move the data without copying it,
    /// use [Samples::new_move].
    pub fn new(data: &[f64]) -> Result<Samples, VariateError> {
        return Samples::new_move(Vec::from(data));
    }

    /// Creates a new instance of [Samples] with the given `data`.
    ///
    /// `data` must not contain NaNs or infinities (`+-inf`).
    ///
    /// If you don't want to move the data (to keep ownership of it),
    /// use [Samples::new].
    pub fn new_move(data: Vec<f64>) -> Result<Samples, VariateError> {
        if let Some(bad) = data.iter().find(|f: &&f64| !f.is_finite()) {
            return Err(VariateError::parameter(format!(
                "the sample contains a non finite value ({bad})"
            )));
        }

        return Ok(Samples {
            data,
            properties: SampleProperties::default(),
        });
    }

    /// Gives a reference to the contained data.
    pub fn peek_data(&self) -> &[f64] {
        return &self.data;
    }

    /// Returns the contained data and drops self.
    ///
    /// If you do not want to drop self, use [Samples::peek_data]
    pub fn get_data(self) -> Vec<f64> {
        return self.data;
    }

    /// The number of values.
    pub fn count(&self) -> usize {
        return self.data.len();
    }

    /// Computes the sample [mean](https://en.wikipedia.org/wiki/Mean) and returns it.
    ///
    /// Returns [None] if there is not enough samples to compute the mean.
    ///
    /// If the mean was already computed, it just returns the value
    /// stored in [SampleProperties] and the operation is constant time.
    pub fn mean(&mut self) -> Option<f64> {
        if self.properties.mean.is_some() {
            return self.properties.mean;
        }

        let n: usize = self.data.len();
        if n == 0 {
            // No mean for 0 samples.
            return None;
        }

        let mean: f64 = self.data.iter().sum::<f64>() / n as f64;

        self.properties.mean = Some(mean);
        return Some(mean);
    }

    /// Computes the sample [variance](https://en.wikipedia.org/wiki/Variance)
    /// (with [Bessel's correction](https://en.wikipedia.org/wiki/Bessel%27s_correction))
    /// and returns it.
    ///
    /// Returns [None] if there is not enough samples to compute the variance
    /// (0 or 1 samples only).
    ///
    /// If the variance was already computed, it just returns the value
    /// stored in [SampleProperties] and the operation is constant time.
    pub fn variance(&mut self) -> Option<f64> {
        if self.properties.variance.is_some() {
            return self.properties.variance;
        }

        let n: usize = self.data.len();
        if n < 2 {
            // No variance for 0 or 1 samples.
            return None;
        }

        // it always exists because there is more than 1 sample
        let mean: f64 = self.mean()?;

        // sumatory[ (x_i - m)^2 ] / (n - 1)
        let mut variance: f64 = 0.0;
        for &s in &self.data {
            let centered_value: f64 = s - mean;
            variance += centered_value * centered_value;
        }
        variance = variance / (n as f64 - 1.0);

        self.properties.variance = Some(variance);
        return Some(variance);
    }

    /// The square root of [Samples::variance].
    pub fn std_dev(&mut self) -> Option<f64> {
        return self.variance().map(f64::sqrt);
    }

    /// Returns the maximum among the data.
    ///
    /// Returns `None` if there are 0 samples. It's `O(n)` the first time
    /// and constant time afterwards.
    pub fn maximum(&mut self) -> Option<f64> {
        if self.properties.maximum.is_some() {
            return self.properties.maximum;
        }

        let max: f64 = self.data.iter().copied().reduce(f64::max)?;

        self.properties.maximum = Some(max);
        return Some(max);
    }
}
