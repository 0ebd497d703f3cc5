use VariateHistogram::{
    errors::VariateError,
    euclid::equal_width_edges,
    histogram::{FrequencyTable, HistogramSpec, Interval, build, frequency_table},
};
use assert_approx_eq::assert_approx_eq;

#[test]
fn counts_and_dropped_values() {
    let data: Vec<f64> = vec![0.0, 0.5, 1.0, 9.99, 10.0, -0.1, 10.1];
    let table: FrequencyTable = build(&data, 10, 0.0, 10.0).unwrap();

    assert_eq!(table.counts(), vec![2, 1, 0, 0, 0, 0, 0, 0, 0, 2]);
    assert_eq!(table.total(), 5);
    assert_eq!(table.dropped(), 2);
    assert_eq!(table.total() + table.dropped(), data.len());
}

#[test]
fn upper_bound_goes_to_last_interval() {
    let table: FrequencyTable = build(&[3.0], 15, -2.0, 3.0).unwrap();

    assert_eq!(table.counts()[14], 1);
    assert_eq!(table.total(), 1);
    assert_eq!(table.dropped(), 0);
}

#[test]
fn values_on_inner_edges_go_to_the_right() {
    // 0.1, 0.2, ..., 0.9 are exacly the inner edges of [0, 1] in 10 intervals
    let data: Vec<f64> = (1..10).map(|k: i32| k as f64 / 10.0).collect::<Vec<f64>>();
    let table: FrequencyTable = build(&data, 10, 0.0, 1.0).unwrap();

    assert_eq!(table.counts(), vec![0, 1, 1, 1, 1, 1, 1, 1, 1, 1]);
}

#[test]
fn lower_bound_goes_to_first_interval() {
    let table: FrequencyTable = build(&[-4.0, -4.0], 20, -4.0, 4.0).unwrap();
    assert_eq!(table.counts()[0], 2);
}

#[test]
fn tiny_ranges_are_binned() {
    // `10 / 1e-308` is not a finite f64
    let data: Vec<f64> = vec![0.25e-308, 0.55e-308, 0.95e-308, 1.0e-308];
    let table: FrequencyTable = build(&data, 10, 0.0, 1.0e-308).unwrap();
    assert_eq!(table.counts(), vec![0, 0, 1, 0, 0, 1, 0, 0, 0, 2]);

    let table: FrequencyTable = build(&[5.5e-311], 10, 0.0, 1.0e-310).unwrap();
    assert_eq!(table.counts()[5], 1);
    assert_eq!(table.total(), 1);
}

#[test]
fn nan_is_not_counted() {
    let table: FrequencyTable = build(&[f64::NAN, 0.5], 10, 0.0, 1.0).unwrap();
    assert_eq!(table.total(), 1);
    assert_eq!(table.dropped(), 1);
}

#[test]
fn all_in_range_counts_everything() {
    let data: Vec<f64> = (0..1000).map(|i: i32| (i as f64) * 0.03).collect::<Vec<f64>>();
    let table: FrequencyTable = build(&data, 30, 0.0, 30.0).unwrap();

    assert_eq!(table.total(), data.len());
    assert_eq!(table.dropped(), 0);
}

#[test]
fn intervals_are_contiguous_and_equal_width() {
    let table: FrequencyTable = build(&[], 15, -1.5, 2.25).unwrap();
    let intervals: &[Interval] = table.intervals();

    assert_eq!(intervals.len(), 15);
    assert_eq!(intervals[0].low, -1.5);
    assert_eq!(intervals[14].high, 2.25);

    for pair in intervals.windows(2) {
        assert_eq!(pair[0].high, pair[1].low);
    }
    for interval in intervals {
        assert_approx_eq!(interval.high - interval.low, 0.25, 1.0e-4);
        assert_eq!(interval.count, 0);
    }
}

#[test]
fn boundaries_are_rounded() {
    let table: FrequencyTable = build(&[], 3, 0.0, 1.0).unwrap();
    let intervals: &[Interval] = table.intervals();

    assert_eq!((intervals[0].low, intervals[0].high), (0.0, 0.3333));
    assert_eq!((intervals[1].low, intervals[1].high), (0.3333, 0.6667));
    assert_eq!((intervals[2].low, intervals[2].high), (0.6667, 1.0));
}

#[test]
fn invalid_arguments() {
    assert!(matches!(
        build(&[1.0], 0, 0.0, 1.0),
        Err(VariateError::InvalidParameter(_))
    ));
    assert!(build(&[1.0], 10, 1.0, 1.0).is_err());
    assert!(build(&[1.0], 10, 2.0, 1.0).is_err());
    assert!(build(&[1.0], 10, f64::NAN, 1.0).is_err());
    assert!(build(&[1.0], 10, 0.0, f64::INFINITY).is_err());
    assert!(build(&[1.0], 10, -f64::MAX, f64::MAX).is_err());
}

#[test]
fn any_positive_interval_count_is_accepted_by_build() {
    let table: FrequencyTable = build(&[0.5], 1, 0.0, 1.0).unwrap();
    assert_eq!(table.counts(), vec![1]);

    let table: FrequencyTable = build(&[0.5], 7, 0.0, 1.0).unwrap();
    assert_eq!(table.len(), 7);
}

#[test]
fn histogram_spec_validation() {
    for k in [10, 15, 20, 30] {
        assert!(HistogramSpec::new(k, 0.0, 1.0).is_ok());
    }
    for k in [0, 1, 5, 12, 25, 100] {
        assert!(matches!(
            HistogramSpec::new(k, 0.0, 1.0),
            Err(VariateError::InvalidParameter(_))
        ));
    }
    assert!(HistogramSpec::new(10, 1.0, 0.0).is_err());

    let spec: HistogramSpec = HistogramSpec::new(20, -1.0, 1.0).unwrap();
    assert_eq!(spec.get_interval_count(), 20);
    assert_eq!(spec.get_bounds(), (-1.0, 1.0));
    assert_approx_eq!(spec.interval_width(), 0.1);
}

#[test]
fn histogram_spec_build_matches_build() {
    let data: Vec<f64> = vec![-0.95, -0.5, 0.0, 0.33, 0.99, 1.0];
    let spec: HistogramSpec = HistogramSpec::new(20, -1.0, 1.0).unwrap();

    assert_eq!(spec.build(&data).unwrap(), build(&data, 20, -1.0, 1.0).unwrap());
}

#[test]
fn frequency_table_builder() {
    let data: Vec<f64> = vec![0.5, 1.5, 9.99];

    let table: FrequencyTable = frequency_table()
        .sample(&data)
        .lower(0.0)
        .upper(10.0)
        .call()
        .unwrap();
    assert_eq!(table.len(), 10);
    assert_eq!(table.counts(), vec![1, 1, 0, 0, 0, 0, 0, 0, 0, 1]);

    let table: FrequencyTable = frequency_table()
        .sample(&data)
        .intervals(20)
        .lower(0.0)
        .upper(10.0)
        .call()
        .unwrap();
    assert_eq!(table.len(), 20);
    assert_eq!(table.get_bounds(), (0.0, 10.0));
}

#[test]
fn table_display() {
    let table: FrequencyTable = build(&[0.5, 0.7, 9.0], 10, 0.0, 10.0).unwrap();
    let text: String = table.to_string();
    let lines: Vec<&str> = text.lines().collect::<Vec<&str>>();

    assert_eq!(lines.len(), 11);
    assert!(lines[0].contains("Interval"));
    assert!(lines[0].contains("Frequency"));
    assert!(lines[1].starts_with('0'));
    assert!(lines[1].contains("(0.0000, 1.0000)"));
    assert!(lines[1].trim_end().ends_with('2'));
    assert!(lines[10].starts_with('9'));
    assert!(lines[10].contains("(9.0000, 10.0000)"));
    assert!(lines[10].trim_end().ends_with('1'));
}

#[test]
fn equal_width_edges_are_exact_at_the_bounds() {
    let edges: Vec<f64> = equal_width_edges(0.1, 0.7, 3);
    assert_eq!(edges.len(), 4);
    assert_eq!(edges[0], 0.1);
    assert_eq!(edges[3], 0.7);
    assert_approx_eq!(edges[1], 0.3);
    assert_approx_eq!(edges[2], 0.5);
}
