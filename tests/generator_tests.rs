use VariateHistogram::{
    Samples::Samples,
    distributions::distribution_spec::DistributionSpec,
    errors::VariateError,
    euclid::round_default,
    generator::generate,
    histogram::{FrequencyTable, build},
};
use assert_approx_eq::assert_approx_eq;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

#[inline]
fn assert_rounded(data: &[f64]) {
    for &x in data {
        assert_eq!(round_default(x), x, "{x} is not rounded to 4 decimals");
    }
}

#[inline]
fn to_bits(data: &[f64]) -> Vec<u64> {
    return data.iter().map(|x: &f64| x.to_bits()).collect::<Vec<u64>>();
}

#[test]
fn uniform_values_are_in_range_and_rounded() {
    let mut rng: SmallRng = SmallRng::seed_from_u64(42);
    let spec: DistributionSpec = DistributionSpec::uniform(2.0, 7.0).unwrap();

    let mut sample: Samples = generate(&spec, 100_000, &mut rng).expect("Sample size should be valid");

    assert_eq!(sample.count(), 100_000);
    assert!(sample.peek_data().iter().all(|&x| 2.0 <= x && x <= 7.0));
    assert_rounded(sample.peek_data());
    assert!((sample.mean().unwrap() - 4.5).abs() < 0.05);
}

#[test]
fn exponential_values_are_non_negative() {
    let mut rng: SmallRng = SmallRng::seed_from_u64(42);
    let spec: DistributionSpec = DistributionSpec::exponential(0.5).unwrap();

    let mut sample: Samples = generate(&spec, 100_000, &mut rng).expect("Sample size should be valid");

    assert_eq!(sample.count(), 100_000);
    assert!(sample.peek_data().iter().all(|&x| 0.0 <= x));
    assert_rounded(sample.peek_data());
    assert!((sample.mean().unwrap() - 2.0).abs() < 0.05);
}

#[test]
fn normal_statistics() {
    let mut rng: SmallRng = SmallRng::seed_from_u64(42);
    let spec: DistributionSpec = DistributionSpec::normal(-1.0, 3.0).unwrap();

    let mut sample: Samples = generate(&spec, 100_000, &mut rng).expect("Sample size should be valid");

    assert_eq!(sample.count(), 100_000);
    assert_rounded(sample.peek_data());
    assert!((sample.mean().unwrap() + 1.0).abs() < 0.05);
    assert!((sample.std_dev().unwrap() - 3.0).abs() < 0.05);
}

#[test]
fn normal_odd_sizes_produce_one_extra_value() {
    let mut rng: SmallRng = SmallRng::seed_from_u64(42);
    let spec: DistributionSpec = DistributionSpec::normal(0.0, 1.0).unwrap();

    for (requested, produced) in [(1, 2), (2, 2), (5, 6), (10, 10), (999, 1000)] {
        let sample: Samples = generate(&spec, requested, &mut rng).unwrap();
        assert_eq!(sample.count(), produced, "requested {requested}");
    }

    // the cap still allows the extra value
    let sample: Samples = generate(&spec, 999_999, &mut rng).unwrap();
    assert_eq!(sample.count(), 1_000_000);
}

#[test]
fn normal_values_follow_box_muller() {
    let (mean, std_dev): (f64, f64) = (3.0, 2.0);
    let spec: DistributionSpec = DistributionSpec::normal(mean, std_dev).unwrap();

    // replay the draws of the generator
    let mut draws: SmallRng = SmallRng::seed_from_u64(42);
    let u1: f64 = draws.random::<f64>();
    let u2: f64 = draws.random::<f64>();
    assert!(0.0 < u1);

    let r: f64 = (-2.0 * u1.ln()).sqrt();
    let theta: f64 = 2.0 * PI * u2;
    let expected: Vec<f64> = vec![
        round_default(r * theta.sin() * std_dev + mean),
        round_default(r * theta.cos() * std_dev + mean),
    ];

    let sample: Samples = generate(&spec, 2, &mut SmallRng::seed_from_u64(42)).unwrap();
    assert_eq!(to_bits(sample.peek_data()), to_bits(&expected));
}

#[test]
fn uniform_values_follow_inverse_transform() {
    let (a, b): (f64, f64) = (-2.0, 5.0);
    let spec: DistributionSpec = DistributionSpec::uniform(a, b).unwrap();

    let mut draws: SmallRng = SmallRng::seed_from_u64(7);
    let expected: Vec<f64> = (0..3)
        .map(|_| round_default(a + draws.random::<f64>() * (b - a)))
        .collect::<Vec<f64>>();

    let sample: Samples = generate(&spec, 3, &mut SmallRng::seed_from_u64(7)).unwrap();
    assert_eq!(to_bits(sample.peek_data()), to_bits(&expected));
}

#[test]
fn exponential_values_follow_inverse_transform() {
    let lambda: f64 = 1.5;
    let spec: DistributionSpec = DistributionSpec::exponential(lambda).unwrap();

    let mut draws: SmallRng = SmallRng::seed_from_u64(7);
    let expected: Vec<f64> = (0..3)
        .map(|_| round_default(-(1.0 - draws.random::<f64>()).ln() / lambda))
        .collect::<Vec<f64>>();

    let sample: Samples = generate(&spec, 3, &mut SmallRng::seed_from_u64(7)).unwrap();
    assert_eq!(to_bits(sample.peek_data()), to_bits(&expected));
}

#[test]
fn extreme_parameters_still_generate() {
    let mut rng: SmallRng = SmallRng::seed_from_u64(42);
    let specs: [DistributionSpec; 3] = [
        DistributionSpec::uniform(-f64::MAX / 2.0, f64::MAX / 2.0).unwrap(),
        DistributionSpec::exponential(1.0e-300).unwrap(),
        DistributionSpec::normal(0.0, 1.0e307).unwrap(),
    ];

    for spec in &specs {
        let sample: Samples = generate(spec, 1000, &mut rng).expect("Values should be finite");
        assert_eq!(sample.count(), 1000);
    }
}

#[test]
fn sample_size_limits() {
    let mut rng: SmallRng = SmallRng::seed_from_u64(42);
    let spec: DistributionSpec = DistributionSpec::uniform(0.0, 1.0).unwrap();

    assert!(matches!(
        generate(&spec, 0, &mut rng),
        Err(VariateError::InvalidParameter(_))
    ));
    assert!(matches!(
        generate(&spec, 1_000_001, &mut rng),
        Err(VariateError::InvalidParameter(_))
    ));

    assert_eq!(generate(&spec, 1, &mut rng).unwrap().count(), 1);
    assert_eq!(generate(&spec, 1_000_000, &mut rng).unwrap().count(), 1_000_000);
}

#[test]
fn same_seed_same_sample() {
    let specs: [DistributionSpec; 3] = [
        DistributionSpec::uniform(-3.0, 3.0).unwrap(),
        DistributionSpec::exponential(1.5).unwrap(),
        DistributionSpec::normal(10.0, 0.5).unwrap(),
    ];

    for spec in &specs {
        let mut rng_a: SmallRng = SmallRng::seed_from_u64(1234);
        let mut rng_b: SmallRng = SmallRng::seed_from_u64(1234);

        // same call sequence on both generators
        let first_a: Vec<f64> = generate(spec, 101, &mut rng_a).unwrap().get_data();
        let second_a: Vec<f64> = generate(spec, 37, &mut rng_a).unwrap().get_data();
        let first_b: Vec<f64> = generate(spec, 101, &mut rng_b).unwrap().get_data();
        let second_b: Vec<f64> = generate(spec, 37, &mut rng_b).unwrap().get_data();

        assert_eq!(to_bits(&first_a), to_bits(&first_b));
        assert_eq!(to_bits(&second_a), to_bits(&second_b));
    }
}

#[test]
fn different_seeds_differ() {
    let spec: DistributionSpec = DistributionSpec::uniform(0.0, 1.0).unwrap();

    let a: Vec<f64> = generate(&spec, 50, &mut SmallRng::seed_from_u64(1)).unwrap().get_data();
    let b: Vec<f64> = generate(&spec, 50, &mut SmallRng::seed_from_u64(2)).unwrap().get_data();

    assert_ne!(a, b);
}

#[test]
fn uniform_sample_into_unit_intervals() {
    let mut rng: SmallRng = SmallRng::seed_from_u64(42);
    let spec: DistributionSpec = DistributionSpec::uniform(0.0, 10.0).unwrap();

    let sample: Samples = generate(&spec, 5, &mut rng).unwrap();
    assert_eq!(sample.count(), 5);
    assert!(sample.peek_data().iter().all(|&x| 0.0 <= x && x <= 10.0));

    let table: FrequencyTable = build(sample.peek_data(), 10, 0.0, 10.0).unwrap();
    assert_eq!(table.len(), 10);
    assert_eq!(table.total(), 5);
    for interval in table.intervals() {
        assert_approx_eq!(interval.high - interval.low, 1.0);
    }
}

#[test]
fn single_exponential_value_lands_in_last_interval() {
    let mut rng: SmallRng = SmallRng::seed_from_u64(42);
    let spec: DistributionSpec = DistributionSpec::exponential(1.0).unwrap();

    let sample: Samples = generate(&spec, 1, &mut rng).unwrap();
    assert_eq!(sample.count(), 1);

    let v: f64 = sample.peek_data()[0];
    assert!(0.0 < v);

    let table: FrequencyTable = build(sample.peek_data(), 10, 0.0, v).unwrap();
    let mut expected: Vec<usize> = vec![0; 10];
    expected[9] = 1;
    assert_eq!(table.counts(), expected);
}
