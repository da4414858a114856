//! NaN-aware reductions.
//!
//! The sum/product/extremum family replaces NaN with a neutral value
//! (`0`, `1`, `+inf`, `-inf`) and delegates to the plain reduction. The
//! mean/variance/median/percentile family drops NaN values from each lane
//! first; a lane that is entirely NaN yields NaN.
use crate::core::{Axis, Float, InterpolationMethod};
use crate::error::{Error, Result};
use crate::functions::stats::{check_percentile, percentile_of_sorted, sorted_f64};
use crate::ndarray::reduce::{median_in_place, var_lane};
use crate::NdArray;

fn substitute<T: Float>(array: &NdArray<T>, replacement: T) -> NdArray<T> {
    array.map(|&v| if v.is_nan() { replacement } else { v })
}

fn finite_values<T: Float>(lane: &[T]) -> Vec<T> {
    lane.iter().copied().filter(|v| !v.is_nan()).collect()
}

pub fn nansum<T: Float>(array: &NdArray<T>, axis: Axis) -> NdArray<T> {
    substitute(array, T::zero()).sum(axis)
}

pub fn nanprod<T: Float>(array: &NdArray<T>, axis: Axis) -> NdArray<T> {
    substitute(array, T::one()).prod(axis)
}

pub fn nancumsum<T: Float>(array: &NdArray<T>, axis: Axis) -> NdArray<T> {
    substitute(array, T::zero()).cumsum(axis)
}

pub fn nancumprod<T: Float>(array: &NdArray<T>, axis: Axis) -> NdArray<T> {
    substitute(array, T::one()).cumprod(axis)
}

pub fn nanmin<T: Float>(array: &NdArray<T>, axis: Axis) -> Result<NdArray<T>> {
    substitute(array, T::infinity()).min(axis)
}

pub fn nanmax<T: Float>(array: &NdArray<T>, axis: Axis) -> Result<NdArray<T>> {
    substitute(array, T::neg_infinity()).max(axis)
}

pub fn nanargmin<T: Float>(array: &NdArray<T>, axis: Axis) -> Result<NdArray<u32>> {
    substitute(array, T::infinity()).argmin(axis)
}

pub fn nanargmax<T: Float>(array: &NdArray<T>, axis: Axis) -> Result<NdArray<u32>> {
    substitute(array, T::neg_infinity()).argmax(axis)
}

pub fn nanmean<T: Float>(array: &NdArray<T>, axis: Axis) -> NdArray<f64> {
    array.reduce_along(axis, |lane| {
        let values = finite_values(lane);
        values.iter().map(|v| v.as_f64()).sum::<f64>() / values.len() as f64
    })
}

/// Population variance of the non-NaN values.
pub fn nanvar<T: Float>(array: &NdArray<T>, axis: Axis) -> NdArray<f64> {
    array.reduce_along(axis, |lane| {
        let values = finite_values(lane);
        if values.is_empty() {
            return f64::NAN;
        }
        var_lane(&values)
    })
}

pub fn nanstdev<T: Float>(array: &NdArray<T>, axis: Axis) -> NdArray<f64> {
    nanvar(array, axis).map(|v| v.sqrt())
}

/// Lower-middle median of the non-NaN values.
pub fn nanmedian<T: Float>(array: &NdArray<T>, axis: Axis) -> Result<NdArray<T>> {
    if array.is_empty() {
        return Err(Error::invalid("nanmedian is undefined for an empty array"));
    }
    Ok(array.reduce_along(axis, |lane| {
        let mut values = finite_values(lane);
        if values.is_empty() {
            return T::nan();
        }
        median_in_place(&mut values)
    }))
}

pub fn nanpercentile<T: Float>(array: &NdArray<T>, q: f64, axis: Axis, method: &str) -> Result<NdArray<f64>> {
    let method: InterpolationMethod = method.parse()?;
    check_percentile(q)?;
    if array.is_empty() {
        return Ok(NdArray::default());
    }
    Ok(array.reduce_along(axis, |lane| {
        let sorted = sorted_f64(lane.iter().copied().filter(|v| !v.is_nan()));
        if sorted.is_empty() {
            return f64::NAN;
        }
        percentile_of_sorted(&sorted, q, method)
    }))
}

/// Replaces NaN and the infinities with finite values.
pub fn nan_to_num<T: Float>(array: &NdArray<T>, nan: T, posinf: T, neginf: T) -> NdArray<T> {
    array.map(|&v| {
        if v.is_nan() {
            nan
        } else if v == T::infinity() {
            posinf
        } else if v == T::neg_infinity() {
            neginf
        } else {
            v
        }
    })
}
