//! Set operations over sorted unique values, and binary search into a
//! sorted array.
use crate::core::dtype::total_order;
use crate::core::{Dtype, Side};
use crate::NdArray;

fn sorted_set<T: Dtype>(values: impl Iterator<Item = T>) -> Vec<T> {
    let mut set: Vec<T> = values.collect();
    set.sort_by(total_order);
    set.dedup();
    set
}

fn contains_sorted<T: Dtype>(set: &[T], value: &T) -> bool {
    set.binary_search_by(|element| total_order(element, value)).is_ok()
}

/// Sorted unique elements.
pub fn unique<T: Dtype>(array: &NdArray<T>) -> NdArray<T> {
    NdArray::from_vec(sorted_set(array.iter().copied()))
}

pub fn union1d<T: Dtype>(a: &NdArray<T>, b: &NdArray<T>) -> NdArray<T> {
    NdArray::from_vec(sorted_set(a.iter().chain(b.iter()).copied()))
}

pub fn intersect1d<T: Dtype>(a: &NdArray<T>, b: &NdArray<T>) -> NdArray<T> {
    let rhs = sorted_set(b.iter().copied());
    NdArray::from_vec(
        sorted_set(a.iter().copied())
            .into_iter()
            .filter(|v| contains_sorted(&rhs, v))
            .collect(),
    )
}

/// Unique values of `a` that are not in `b`.
pub fn setdiff1d<T: Dtype>(a: &NdArray<T>, b: &NdArray<T>) -> NdArray<T> {
    let rhs = sorted_set(b.iter().copied());
    NdArray::from_vec(
        sorted_set(a.iter().copied())
            .into_iter()
            .filter(|v| !contains_sorted(&rhs, v))
            .collect(),
    )
}

/// Unique values that are in exactly one of the inputs.
pub fn setxor1d<T: Dtype>(a: &NdArray<T>, b: &NdArray<T>) -> NdArray<T> {
    let lhs = sorted_set(a.iter().copied());
    let rhs = sorted_set(b.iter().copied());
    let only_lhs = lhs.iter().filter(|v| !contains_sorted(&rhs, v));
    let only_rhs = rhs.iter().filter(|v| !contains_sorted(&lhs, v));
    NdArray::from_vec(sorted_set(only_lhs.chain(only_rhs).copied()))
}

/// Insertion points that keep the sorted `array` sorted, one per element of
/// `values`. `Side::Left` gives the first valid position, `Side::Right` the
/// last.
pub fn searchsorted<T: Dtype>(array: &NdArray<T>, values: &NdArray<T>, side: Side) -> NdArray<u32> {
    let sorted = array.as_slice();
    values
        .iter()
        .map(|value| {
            let position = match side {
                Side::Left => sorted.partition_point(|element| total_order(element, value).is_lt()),
                Side::Right => sorted.partition_point(|element| total_order(element, value).is_le()),
            };
            position as u32
        })
        .collect()
}
