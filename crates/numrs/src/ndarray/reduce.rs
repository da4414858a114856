//! Axis-aware reductions.
//!
//! Every operation here is written once against a single lane (a `&[T]`)
//! and dispatched through [`NdArray::reduce_along`],
//! [`NdArray::transform_along`] or [`NdArray::modify_along`]:
//!
//! * `Axis::None` runs on the flattened buffer,
//! * `Axis::Col` runs once per row (collapsing the column dimension),
//! * `Axis::Row` runs the `Col` logic on the transpose and, for shape
//!   preserving operations, transposes the result back.
use std::borrow::Cow;

use log::trace;

use crate::core::dtype::total_order;
use crate::core::{Axis, Dtype, Numeric, Shape};
use crate::error::{Error, Result};

use super::NdArray;

impl<T: Dtype> NdArray<T> {
    /// The array whose rows are the lanes of `axis`.
    fn lanes(&self, axis: Axis) -> Cow<'_, NdArray<T>> {
        match axis {
            Axis::Row => Cow::Owned(self.transpose()),
            Axis::None | Axis::Col => Cow::Borrowed(self),
        }
    }

    /// One value per lane: `1 x 1` for `None`, `1 x rows` for `Col`,
    /// `1 x cols` for `Row`.
    pub fn reduce_along<U: Dtype, F>(&self, axis: Axis, mut f: F) -> NdArray<U>
    where
        F: FnMut(&[T]) -> U,
    {
        trace!("reduce_along {:?} over shape {}", axis, self.shape());
        match axis {
            Axis::None => NdArray::from_vec(vec![f(self.as_slice())]),
            Axis::Col | Axis::Row => self.lanes(axis).rows_iter().map(f).collect(),
        }
    }

    /// Fallible variant of [`NdArray::reduce_along`]; the first lane error
    /// aborts the whole reduction.
    pub fn try_reduce_along<U: Dtype, F>(&self, axis: Axis, mut f: F) -> Result<NdArray<U>>
    where
        F: FnMut(&[T]) -> Result<U>,
    {
        match axis {
            Axis::None => Ok(NdArray::from_vec(vec![f(self.as_slice())?])),
            Axis::Col | Axis::Row => self.lanes(axis).rows_iter().map(f).collect(),
        }
    }

    /// One equally long sequence per lane. `None` yields a flat `1 x size`
    /// array, `Col`/`Row` keep the input shape.
    pub fn transform_along<U: Dtype, F>(&self, axis: Axis, mut f: F) -> NdArray<U>
    where
        F: FnMut(&[T]) -> Vec<U>,
    {
        trace!("transform_along {:?} over shape {}", axis, self.shape());
        match axis {
            Axis::None => NdArray::from_vec(f(self.as_slice())),
            Axis::Col => {
                let mut data = Vec::with_capacity(self.size() as usize);
                for lane in self.rows_iter() {
                    data.extend(f(lane));
                }
                NdArray::from_parts(self.shape(), data)
            }
            Axis::Row => self.transpose().transform_along(Axis::Col, f).transpose(),
        }
    }

    /// Mutates each lane in place. The buffer is written back in place so
    /// views over foreign memory stay views.
    pub fn modify_along<F>(&mut self, axis: Axis, mut f: F) -> &mut Self
    where
        F: FnMut(&mut [T]),
    {
        trace!("modify_along {:?} over shape {}", axis, self.shape());
        match axis {
            Axis::None => f(self.as_mut_slice()),
            Axis::Col => {
                let cols = self.num_cols().max(1) as usize;
                for lane in self.as_mut_slice().chunks_exact_mut(cols) {
                    f(lane);
                }
            }
            Axis::Row => {
                let mut transposed = self.transpose();
                transposed.modify_along(Axis::Col, f);
                let restored = transposed.transpose();
                self.as_mut_slice().copy_from_slice(restored.as_slice());
            }
        }
        self
    }

    pub fn all(&self, axis: Axis) -> NdArray<bool> {
        self.reduce_along(axis, |lane| lane.iter().all(|v| v.is_nonzero()))
    }

    pub fn any(&self, axis: Axis) -> NdArray<bool> {
        self.reduce_along(axis, |lane| lane.iter().any(|v| v.is_nonzero()))
    }

    pub fn none(&self, axis: Axis) -> NdArray<bool> {
        self.reduce_along(axis, |lane| !lane.iter().any(|v| v.is_nonzero()))
    }

    pub fn count_nonzero(&self, axis: Axis) -> NdArray<u32> {
        self.reduce_along(axis, |lane| {
            lane.iter().filter(|v| v.is_nonzero()).count() as u32
        })
    }

    pub fn contains(&self, value: T, axis: Axis) -> NdArray<bool> {
        self.reduce_along(axis, |lane| lane.contains(&value))
    }

    pub fn issorted(&self, axis: Axis) -> NdArray<bool> {
        self.reduce_along(axis, |lane| lane.windows(2).all(|w| w[0] <= w[1]))
    }

    fn ensure_not_empty(&self, op: &str) -> Result<()> {
        if self.is_empty() {
            return Err(Error::invalid(format!(
                "{} is undefined for an empty array",
                op
            )));
        }
        Ok(())
    }

    pub fn min(&self, axis: Axis) -> Result<NdArray<T>> {
        self.ensure_not_empty("min")?;
        Ok(self.reduce_along(axis, |lane| lane[argmin_lane(lane)]))
    }

    pub fn max(&self, axis: Axis) -> Result<NdArray<T>> {
        self.ensure_not_empty("max")?;
        Ok(self.reduce_along(axis, |lane| lane[argmax_lane(lane)]))
    }

    /// Index of the first minimum of each lane.
    pub fn argmin(&self, axis: Axis) -> Result<NdArray<u32>> {
        self.ensure_not_empty("argmin")?;
        Ok(self.reduce_along(axis, |lane| argmin_lane(lane) as u32))
    }

    /// Index of the first maximum of each lane.
    pub fn argmax(&self, axis: Axis) -> Result<NdArray<u32>> {
        self.ensure_not_empty("argmax")?;
        Ok(self.reduce_along(axis, |lane| argmax_lane(lane) as u32))
    }

    /// Median by nth-element selection. For an even number of elements the
    /// lower of the two middle elements is returned as-is (no averaging).
    pub fn median(&self, axis: Axis) -> Result<NdArray<T>> {
        self.ensure_not_empty("median")?;
        Ok(self.reduce_along(axis, |lane| {
            let mut values = lane.to_vec();
            median_in_place(&mut values)
        }))
    }

    /// Indices that would stably sort each lane.
    pub fn argsort(&self, axis: Axis) -> NdArray<u32> {
        self.transform_along(axis, |lane| {
            let mut idx: Vec<u32> = (0..lane.len() as u32).collect();
            idx.sort_by(|&a, &b| total_order(&lane[a as usize], &lane[b as usize]));
            idx
        })
    }

    /// Sorts in place. `Axis::None` sorts the whole buffer and keeps the
    /// shape. NaN sorts last.
    pub fn sort(&mut self, axis: Axis) -> &mut Self {
        self.modify_along(axis, |lane| lane.sort_unstable_by(total_order))
    }

    /// Partially sorts each lane so the element at `kth` is in its sorted
    /// position, smaller elements before it and larger ones after it (in
    /// no particular order).
    pub fn partition(&mut self, kth: u32, axis: Axis) -> Result<&mut Self> {
        let lane_len = match axis {
            Axis::None => self.size(),
            Axis::Col => self.num_cols(),
            Axis::Row => self.num_rows(),
        };
        if kth >= lane_len {
            return Err(Error::invalid(format!(
                "kth(={}) out of bounds ({})",
                kth, lane_len
            )));
        }
        Ok(self.modify_along(axis, |lane| {
            lane.select_nth_unstable_by(kth as usize, total_order);
        }))
    }
}

impl<T: Numeric> NdArray<T> {
    pub fn sum(&self, axis: Axis) -> NdArray<T> {
        self.reduce_along(axis, sum_lane)
    }

    pub fn prod(&self, axis: Axis) -> NdArray<T> {
        self.reduce_along(axis, |lane| lane.iter().fold(T::one(), |acc, &v| acc.accumulate_mul(v)))
    }

    pub fn mean(&self, axis: Axis) -> NdArray<f64> {
        self.reduce_along(axis, mean_lane)
    }

    /// Population variance.
    pub fn var(&self, axis: Axis) -> NdArray<f64> {
        self.reduce_along(axis, var_lane)
    }

    /// Population standard deviation.
    pub fn stdev(&self, axis: Axis) -> NdArray<f64> {
        self.reduce_along(axis, |lane| var_lane(lane).sqrt())
    }

    /// Euclidean norm.
    pub fn norm(&self, axis: Axis) -> NdArray<f64> {
        self.reduce_along(axis, |lane| {
            lane.iter().map(|v| v.as_f64() * v.as_f64()).sum::<f64>().sqrt()
        })
    }

    /// Root mean square.
    pub fn rms(&self, axis: Axis) -> NdArray<f64> {
        self.reduce_along(axis, |lane| {
            let squares: f64 = lane.iter().map(|v| v.as_f64() * v.as_f64()).sum();
            (squares / lane.len() as f64).sqrt()
        })
    }

    /// Peak to peak (`max - min`).
    pub fn ptp(&self, axis: Axis) -> Result<NdArray<T>> {
        self.ensure_not_empty("ptp")?;
        Ok(self.reduce_along(axis, |lane| lane[argmax_lane(lane)] - lane[argmin_lane(lane)]))
    }

    pub fn cumsum(&self, axis: Axis) -> NdArray<T> {
        self.transform_along(axis, |lane| {
            lane.iter()
                .scan(T::zero(), |acc, &v| {
                    *acc = acc.accumulate_add(v);
                    Some(*acc)
                })
                .collect()
        })
    }

    pub fn cumprod(&self, axis: Axis) -> NdArray<T> {
        self.transform_along(axis, |lane| {
            lane.iter()
                .scan(T::one(), |acc, &v| {
                    *acc = acc.accumulate_mul(v);
                    Some(*acc)
                })
                .collect()
        })
    }

    /// Sum along a diagonal. `Axis::Row` shifts the start down by `offset`
    /// rows, `Axis::Col` shifts it right by `offset` columns; `Axis::None`
    /// behaves like `Axis::Row`.
    pub fn trace(&self, offset: u32, axis: Axis) -> T {
        let Shape { rows, cols } = self.shape();
        let (row_start, col_start) = match axis {
            Axis::Col => (0, offset),
            Axis::Row | Axis::None => (offset, 0),
        };
        if row_start >= rows || col_start >= cols {
            return T::zero();
        }
        let data = self.as_slice();
        (row_start..rows)
            .zip(col_start..cols)
            .fold(T::zero(), |acc, (row, col)| acc.accumulate_add(data[(row * cols + col) as usize]))
    }

    /// Inner product of two flat arrays of the same shape, otherwise the
    /// matrix product (so a column times a row is their outer product).
    pub fn dot(&self, other: &NdArray<T>) -> Result<NdArray<T>> {
        if self.shape() == other.shape() && self.is_flat() {
            return Ok(NdArray::from_vec(vec![inner_lane(self.as_slice(), other.as_slice())]));
        }
        if self.num_cols() != other.num_rows() {
            return Err(Error::invalid(format!(
                "shapes {} and {} are not aligned for dot",
                self.shape(),
                other.shape()
            )));
        }
        let out_shape = Shape::new(self.num_rows(), other.num_cols());
        let rhs = other.transpose();
        let mut data = Vec::with_capacity(out_shape.size() as usize);
        for lhs_row in self.rows_iter() {
            for rhs_col in rhs.rows_iter() {
                data.push(inner_lane(lhs_row, rhs_col));
            }
        }
        NdArray::from_shape_vec(out_shape, data)
    }
}

pub(crate) fn argmin_lane<T: PartialOrd>(lane: &[T]) -> usize {
    let mut best = 0;
    for (i, v) in lane.iter().enumerate().skip(1) {
        if *v < lane[best] {
            best = i;
        }
    }
    best
}

pub(crate) fn argmax_lane<T: PartialOrd>(lane: &[T]) -> usize {
    let mut best = 0;
    for (i, v) in lane.iter().enumerate().skip(1) {
        if lane[best] < *v {
            best = i;
        }
    }
    best
}

/// Lower-middle order statistic; reorders `values`.
pub(crate) fn median_in_place<T: PartialOrd + Copy>(values: &mut [T]) -> T {
    let middle = (values.len() - 1) / 2;
    let (_, median, _) = values.select_nth_unstable_by(middle, total_order);
    *median
}

pub(crate) fn sum_lane<T: Numeric>(lane: &[T]) -> T {
    lane.iter().fold(T::zero(), |acc, &v| acc.accumulate_add(v))
}

fn inner_lane<T: Numeric>(lhs: &[T], rhs: &[T]) -> T {
    lhs.iter()
        .zip(rhs)
        .fold(T::zero(), |acc, (&a, &b)| acc.accumulate_add(a.accumulate_mul(b)))
}

pub(crate) fn mean_lane<T: Numeric>(lane: &[T]) -> f64 {
    lane.iter().map(|v| v.as_f64()).sum::<f64>() / lane.len() as f64
}

pub(crate) fn var_lane<T: Numeric>(lane: &[T]) -> f64 {
    let mean = mean_lane(lane);
    lane.iter()
        .map(|v| {
            let d = v.as_f64() - mean;
            d * d
        })
        .sum::<f64>()
        / lane.len() as f64
}
