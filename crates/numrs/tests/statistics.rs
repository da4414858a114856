//! Integration tests for percentiles, weighted averages, histograms,
//! covariance and the NaN-aware reductions.

use numrs::{Axis, NdArray};

// ---------------------------------------------------------------------------
// Percentile
// ---------------------------------------------------------------------------

#[test]
fn percentile_methods_on_odd_length() {
    let array = NdArray::from_vec(vec![5, 1, 4, 2, 3]);
    let linear = numrs::percentile(&array, 50.0, Axis::None, "linear").unwrap();
    assert_eq!(linear.item().unwrap(), 3.0);
    let lower = numrs::percentile(&array, 50.0, Axis::None, "lower").unwrap();
    assert_eq!(lower.item().unwrap(), 3.0);
}

#[test]
fn percentile_methods_on_even_length() {
    let array = NdArray::from_vec(vec![1.0, 2.0, 3.0, 4.0]);
    let at = |method: &str| {
        numrs::percentile(&array, 50.0, Axis::None, method)
            .unwrap()
            .item()
            .unwrap()
    };
    assert_eq!(at("midpoint"), 2.5);
    assert_eq!(at("linear"), 2.5);
    assert_eq!(at("lower"), 2.0);
    assert_eq!(at("higher"), 3.0);
}

#[test]
fn percentile_bounds_return_extremes() {
    let array = NdArray::from_vec(vec![9, 2, 7]);
    assert_eq!(numrs::percentile(&array, 0.0, Axis::None, "midpoint").unwrap().to_vec(), vec![2.0]);
    assert_eq!(numrs::percentile(&array, 100.0, Axis::None, "lower").unwrap().to_vec(), vec![9.0]);
}

#[test]
fn percentile_per_lane() {
    let array = NdArray::from([[1, 3], [10, 30]]);
    let per_row = numrs::percentile(&array, 50.0, Axis::Col, "linear").unwrap();
    assert_eq!(per_row.to_vec(), vec![2.0, 20.0]);
    let per_col = numrs::percentile(&array, 100.0, Axis::Row, "linear").unwrap();
    assert_eq!(per_col.to_vec(), vec![10.0, 30.0]);
}

#[test]
fn percentile_rejects_bad_arguments() {
    let array = NdArray::from_vec(vec![1, 2, 3]);
    assert!(numrs::percentile(&array, 101.0, Axis::None, "linear")
        .unwrap_err()
        .is_invalid_argument());
    assert!(numrs::percentile(&array, -0.5, Axis::None, "linear").is_err());
    assert!(numrs::percentile(&array, 50.0, Axis::None, "cubic").is_err());
}

// ---------------------------------------------------------------------------
// Average
// ---------------------------------------------------------------------------

#[test]
fn weighted_average_per_axis() {
    let array = NdArray::from([[1.0, 3.0], [5.0, 7.0]]);
    let weights = NdArray::from_vec(vec![3.0, 1.0]);
    let per_row = numrs::average_weighted(&array, &weights, Axis::Col).unwrap();
    assert_eq!(per_row.to_vec(), vec![1.5, 5.5]);
    let per_col = numrs::average_weighted(&array, &weights, Axis::Row).unwrap();
    assert_eq!(per_col.to_vec(), vec![2.0, 4.0]);
    assert_eq!(numrs::average(&array, Axis::None).to_vec(), vec![4.0]);
}

#[test]
fn weighted_average_checks_weights() {
    let array = NdArray::from([[1.0, 2.0, 3.0]]);
    let weights = NdArray::from_vec(vec![1.0, 1.0]);
    assert!(numrs::average_weighted(&array, &weights, Axis::Col)
        .unwrap_err()
        .is_invalid_argument());
    assert!(numrs::average_weighted(&array, &weights, Axis::None).is_err());
}

// ---------------------------------------------------------------------------
// Histograms and covariance
// ---------------------------------------------------------------------------

#[test]
fn histogram_with_explicit_edges() {
    let data = NdArray::from_vec(vec![1.0, 2.0, 2.0, 3.0, 5.0, 6.0, -1.0, 7.0]);
    let edges = NdArray::from_vec(vec![0.0, 4.0, 2.0, 6.0]);
    assert_eq!(numrs::histogram(&data, &edges).unwrap().to_vec(), vec![1, 3, 2]);
    assert!(numrs::histogram(&data, &NdArray::from_vec(vec![1.0]))
        .unwrap_err()
        .is_invalid_argument());
}

#[test]
fn histogram_with_equal_width_bins() {
    let (counts, edges) = numrs::histogram_bins(&NdArray::from_vec(vec![1, 2, 3, 4]), 3).unwrap();
    assert_eq!(edges.to_vec(), vec![1.0, 2.0, 3.0, 4.0]);
    assert_eq!(counts.to_vec(), vec![1, 1, 2]);

    let (counts, edges) = numrs::histogram_bins(&NdArray::from_vec(vec![2.0, 2.0]), 2).unwrap();
    assert_eq!(edges.to_vec(), vec![1.5, 2.0, 2.5]);
    assert_eq!(counts.to_vec(), vec![0, 2]);

    assert!(numrs::histogram_bins(&NdArray::from_vec(vec![1.0]), 0).is_err());
    assert!(numrs::histogram_bins(&NdArray::<f64>::default(), 4).is_err());
}

#[test]
fn bincount_plain_and_weighted() {
    let values = NdArray::from_vec(vec![0, 1, 1, 3]);
    assert_eq!(numrs::bincount(&values, 0).unwrap().to_vec(), vec![1, 2, 0, 1]);
    assert_eq!(numrs::bincount(&values, 6).unwrap().to_vec(), vec![1, 2, 0, 1, 0, 0]);
    assert_eq!(numrs::bincount(&NdArray::from_vec(vec![-2, 1]), 0).unwrap().to_vec(), vec![1, 1]);

    let weights = NdArray::from_vec(vec![0.5, 1.0, 2.0, 0.25]);
    assert_eq!(
        numrs::bincount_weighted(&values, &weights, 0).unwrap().to_vec(),
        vec![0.5, 3.0, 0.0, 0.25]
    );
    assert!(numrs::bincount_weighted(&values, &NdArray::from_vec(vec![1.0]), 0).is_err());
    assert!(numrs::bincount(&NdArray::from_vec(vec![i64::MAX]), 0).is_err());
}

#[test]
fn covariance_of_two_variables() {
    let observations = NdArray::from([[0.0, 1.0, 2.0], [2.0, 1.0, 0.0]]);
    let cov = numrs::cov(&observations).unwrap();
    assert_eq!(cov, NdArray::from([[1.0, -1.0], [-1.0, 1.0]]));
    assert!(numrs::cov(&NdArray::<f64>::default()).unwrap_err().is_invalid_argument());
}

// ---------------------------------------------------------------------------
// NaN-aware reductions
// ---------------------------------------------------------------------------

fn with_nan() -> NdArray<f64> {
    NdArray::from([[1.0, f64::NAN, 3.0], [f64::NAN, f64::NAN, f64::NAN]])
}

#[test]
fn nansum_and_nanprod_treat_nan_as_neutral() {
    let array = with_nan();
    assert_eq!(numrs::nansum(&array, Axis::Col).to_vec(), vec![4.0, 0.0]);
    assert_eq!(numrs::nanprod(&array, Axis::None).to_vec(), vec![3.0]);
    assert_eq!(numrs::nancumsum(&array, Axis::Col).row(0).unwrap().to_vec(), vec![1.0, 1.0, 4.0]);
}

#[test]
fn nan_extrema_skip_nan() {
    let array = with_nan();
    assert_eq!(numrs::nanmax(&array, Axis::None).unwrap().to_vec(), vec![3.0]);
    assert_eq!(numrs::nanargmin(&array, Axis::None).unwrap().to_vec(), vec![0]);
    let per_row = numrs::nanmin(&array, Axis::Col).unwrap();
    assert_eq!(per_row.to_vec(), vec![1.0, f64::INFINITY]);
}

#[test]
fn nan_moments_ignore_nan() {
    let array = with_nan();
    let means = numrs::nanmean(&array, Axis::Col);
    assert_eq!(means.to_vec()[0], 2.0);
    assert!(means.to_vec()[1].is_nan());
    assert_eq!(numrs::nanvar(&array, Axis::None).to_vec(), vec![1.0]);
    assert_eq!(numrs::nanstdev(&array, Axis::None).to_vec(), vec![1.0]);
}

#[test]
fn nanmedian_and_nanpercentile() {
    let array = with_nan();
    let medians = numrs::nanmedian(&array, Axis::Col).unwrap();
    assert_eq!(medians.to_vec()[0], 1.0);
    assert!(medians.to_vec()[1].is_nan());

    let percentiles = numrs::nanpercentile(&array, 50.0, Axis::None, "midpoint").unwrap();
    assert_eq!(percentiles.to_vec(), vec![2.0]);

    assert!(numrs::nanmedian(&NdArray::<f32>::default(), Axis::None).is_err());
}

#[test]
fn nan_to_num_replaces_non_finite() {
    let array = NdArray::from_vec(vec![f32::NAN, f32::INFINITY, f32::NEG_INFINITY, 1.5]);
    let cleaned = numrs::nan_to_num(&array, 0.0, 100.0, -100.0);
    assert_eq!(cleaned.to_vec(), vec![0.0, 100.0, -100.0, 1.5]);
}
