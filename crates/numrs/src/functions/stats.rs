//! Percentiles, weighted averages, histograms and covariance.
use num_traits::ToPrimitive;

use crate::core::dtype::total_order;
use crate::core::{Axis, Integer, InterpolationMethod, Numeric, Shape};
use crate::error::{Error, Result};
use crate::functions::creation::linspace;
use crate::NdArray;

pub(crate) fn check_percentile(q: f64) -> Result<()> {
    if !(0.0..=100.0).contains(&q) {
        return Err(Error::invalid(format!(
            "percentile {} must be in the range [0, 100]",
            q
        )));
    }
    Ok(())
}

/// Percentile `q` of an already sorted, non-empty lane.
///
/// `q == 0` and `q == 100` return the first and last element directly.
/// Otherwise the two order statistics `sorted[i]` and `sorted[i + 1]`
/// bracketing the percentile are combined according to `method`.
pub(crate) fn percentile_of_sorted(sorted: &[f64], q: f64, method: InterpolationMethod) -> f64 {
    let n = sorted.len();
    if n == 1 || q == 0.0 {
        return sorted[0];
    }
    if q == 100.0 {
        return sorted[n - 1];
    }
    let last = (n - 1) as f64;
    let fraction_wanted = q / 100.0;
    let i = ((last * fraction_wanted).floor() as usize).min(n - 2);
    let (lower, upper) = (sorted[i], sorted[i + 1]);
    let percent_i = i as f64 / last;
    let percent_j = (i + 1) as f64 / last;
    match method {
        InterpolationMethod::Linear => {
            let fraction = (fraction_wanted - percent_i) / (percent_j - percent_i);
            lower + (upper - lower) * fraction
        }
        InterpolationMethod::Lower => lower,
        InterpolationMethod::Higher => upper,
        InterpolationMethod::Nearest => {
            if fraction_wanted - percent_i <= percent_j - fraction_wanted {
                lower
            } else {
                upper
            }
        }
        InterpolationMethod::Midpoint => (lower + upper) / 2.0,
    }
}

pub(crate) fn sorted_f64<T: Numeric>(values: impl Iterator<Item = T>) -> Vec<f64> {
    let mut sorted: Vec<f64> = values.map(Numeric::as_f64).collect();
    sorted.sort_by(total_order);
    sorted
}

/// Percentile `q` (0 to 100) along `axis`. `method` is one of `linear`,
/// `lower`, `higher`, `nearest`, `midpoint`.
pub fn percentile<T: Numeric>(array: &NdArray<T>, q: f64, axis: Axis, method: &str) -> Result<NdArray<f64>> {
    let method: InterpolationMethod = method.parse()?;
    check_percentile(q)?;
    if array.is_empty() {
        return Ok(NdArray::default());
    }
    Ok(array.reduce_along(axis, |lane| {
        percentile_of_sorted(&sorted_f64(lane.iter().copied()), q, method)
    }))
}

/// Arithmetic mean, the unweighted form of [`average_weighted`].
pub fn average<T: Numeric>(array: &NdArray<T>, axis: Axis) -> NdArray<f64> {
    array.mean(axis)
}

/// Weighted mean along `axis`. For `Axis::None` the weights must have the
/// shape of the array; for `Axis::Col` one weight per column, for
/// `Axis::Row` one weight per row.
pub fn average_weighted<T: Numeric>(
    array: &NdArray<T>,
    weights: &NdArray<T>,
    axis: Axis,
) -> Result<NdArray<f64>> {
    let consistent = match axis {
        Axis::None => weights.shape() == array.shape(),
        Axis::Col => weights.size() == array.num_cols(),
        Axis::Row => weights.size() == array.num_rows(),
    };
    if !consistent {
        return Err(Error::invalid(format!(
            "weights of shape {} are not consistent with array of shape {} along {:?}",
            weights.shape(),
            array.shape(),
            axis
        )));
    }
    let weight_sum: f64 = weights.iter().map(|w| w.as_f64()).sum();
    Ok(array.reduce_along(axis, |lane| {
        let weighted: f64 = lane
            .iter()
            .zip(weights.iter())
            .map(|(v, w)| v.as_f64() * w.as_f64())
            .sum();
        weighted / weight_sum
    }))
}

/// Counts of `array` values per bin. Bins are half open `[e_i, e_i+1)`
/// except the last, which also holds its right edge; values outside the
/// edges are not counted. Edges are sorted first.
pub fn histogram<T: Numeric>(array: &NdArray<T>, bin_edges: &NdArray<f64>) -> Result<NdArray<u32>> {
    if bin_edges.size() < 2 {
        return Err(Error::invalid("histogram: number of bin edges must be >= 2"));
    }
    let edges = sorted_f64(bin_edges.iter().copied());
    let num_bins = edges.len() - 1;
    let (first, last) = (edges[0], edges[num_bins]);
    let mut counts = vec![0u32; num_bins];
    for value in array.iter().map(|v| v.as_f64()) {
        if !(first..=last).contains(&value) {
            continue;
        }
        let bin = edges.partition_point(|&edge| edge <= value).saturating_sub(1);
        counts[bin.min(num_bins - 1)] += 1;
    }
    Ok(NdArray::from_vec(counts))
}

/// [`histogram`] over `num_bins` equal-width bins spanning the data.
/// Returns the counts and the `num_bins + 1` edges. Constant data gets a
/// range of width one centered on the value.
pub fn histogram_bins<T: Numeric>(array: &NdArray<T>, num_bins: u32) -> Result<(NdArray<u32>, NdArray<f64>)> {
    if num_bins == 0 {
        return Err(Error::invalid("histogram: number of bins must be positive"));
    }
    let mut lo = array.min(Axis::None)?.item()?.as_f64();
    let mut hi = array.max(Axis::None)?.item()?.as_f64();
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }
    let edges = linspace(lo, hi, num_bins + 1, true)?;
    Ok((histogram(array, &edges)?, edges))
}

/// Bin of an integer value: negatives fall into bin 0, values beyond the
/// `u32` range are rejected.
fn bin_of<T: Integer>(value: T) -> Result<usize> {
    if value < T::zero() {
        return Ok(0);
    }
    value
        .to_u32()
        .map(|bin| bin as usize)
        .ok_or_else(|| Error::invalid(format!("bincount: value {} is too large", value)))
}

fn bincount_len<T: Integer>(array: &NdArray<T>, min_length: u32) -> Result<usize> {
    let mut len = min_length as usize;
    for &value in array.iter() {
        len = len.max(bin_of(value)? + 1);
    }
    Ok(len)
}

/// Number of occurrences of each value `0..=max`, padded with zeros to at
/// least `min_length` bins.
pub fn bincount<T: Integer>(array: &NdArray<T>, min_length: u32) -> Result<NdArray<u32>> {
    let mut counts = vec![0u32; bincount_len(array, min_length)?];
    for &value in array.iter() {
        counts[bin_of(value)?] += 1;
    }
    Ok(NdArray::from_vec(counts))
}

/// Like [`bincount`] but each occurrence adds its weight instead of one.
/// `weights` must have the shape of `array`.
pub fn bincount_weighted<T: Integer, W: Numeric>(
    array: &NdArray<T>,
    weights: &NdArray<W>,
    min_length: u32,
) -> Result<NdArray<W>> {
    crate::error::ensure_same_shape("bincount", array.shape(), weights.shape())?;
    let mut sums = vec![W::zero(); bincount_len(array, min_length)?];
    for (&value, &weight) in array.iter().zip(weights.iter()) {
        let bin = bin_of(value)?;
        sums[bin] = sums[bin].accumulate_add(weight);
    }
    Ok(NdArray::from_vec(sums))
}

/// Sample covariance matrix. Each row of `array` is a variable and each
/// column an observation; normalised by `observations - 1`.
pub fn cov<T: Numeric>(array: &NdArray<T>) -> Result<NdArray<f64>> {
    if array.is_empty() {
        return Err(Error::invalid("cov is undefined for an empty array"));
    }
    let Shape { rows, cols } = array.shape();
    let means = array.mean(Axis::Col);
    let centered: Vec<Vec<f64>> = array
        .rows_iter()
        .zip(means.iter())
        .map(|(lane, &mean)| lane.iter().map(|v| v.as_f64() - mean).collect())
        .collect();
    let denominator = (cols as f64) - 1.0;
    let mut out = NdArray::<f64>::new(rows, rows);
    for i in 0..rows as usize {
        for j in i..rows as usize {
            let sum: f64 = centered[i].iter().zip(&centered[j]).map(|(a, b)| a * b).sum();
            let value = sum / denominator;
            out[(i as i32, j as i32)] = value;
            out[(j as i32, i as i32)] = value;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_prefers_lower_on_ties() {
        let sorted = [10.0, 20.0, 30.0];
        assert_eq!(percentile_of_sorted(&sorted, 25.0, InterpolationMethod::Nearest), 10.0);
        assert_eq!(percentile_of_sorted(&sorted, 26.0, InterpolationMethod::Nearest), 20.0);
    }

    #[test]
    fn index_is_clipped_below_last_pair() {
        let sorted = [1.0, 2.0, 3.0];
        assert_eq!(percentile_of_sorted(&sorted, 99.0, InterpolationMethod::Higher), 3.0);
        assert_eq!(percentile_of_sorted(&sorted, 99.0, InterpolationMethod::Lower), 2.0);
    }
}
