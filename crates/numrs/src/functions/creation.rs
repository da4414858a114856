use crate::core::{Dtype, Float, Numeric, Shape};
use crate::error::{Error, Result};
use crate::NdArray;

pub fn zeros<T: Numeric>(rows: u32, cols: u32) -> NdArray<T> {
    NdArray::from_elem(Shape::new(rows, cols), T::zero())
}

pub fn ones<T: Numeric>(rows: u32, cols: u32) -> NdArray<T> {
    NdArray::from_elem(Shape::new(rows, cols), T::one())
}

pub fn full<T: Dtype>(rows: u32, cols: u32, value: T) -> NdArray<T> {
    NdArray::from_elem(Shape::new(rows, cols), value)
}

/// Default-filled array; there is no uninitialised memory in safe Rust.
pub fn empty<T: Dtype>(rows: u32, cols: u32) -> NdArray<T> {
    NdArray::new(rows, cols)
}

pub fn zeros_like<T: Numeric>(array: &NdArray<T>) -> NdArray<T> {
    NdArray::from_elem(array.shape(), T::zero())
}

pub fn ones_like<T: Numeric>(array: &NdArray<T>) -> NdArray<T> {
    NdArray::from_elem(array.shape(), T::one())
}

pub fn full_like<T: Dtype>(array: &NdArray<T>, value: T) -> NdArray<T> {
    NdArray::from_elem(array.shape(), value)
}

/// `rows x cols` array with ones on diagonal `k` (positive `k` above the
/// main diagonal, negative below) and zeros elsewhere.
pub fn eye<T: Numeric>(rows: u32, cols: u32, k: i32) -> NdArray<T> {
    let mut out = zeros(rows, cols);
    let (row_start, col_start) = if k < 0 {
        (k.unsigned_abs(), 0)
    } else {
        (0, k as u32)
    };
    let data = out.as_mut_slice();
    for (row, col) in (row_start..rows).zip(col_start..cols) {
        data[(row * cols + col) as usize] = T::one();
    }
    out
}

pub fn identity<T: Numeric>(n: u32) -> NdArray<T> {
    eye(n, n, 0)
}

/// Values in `[start, stop)` spaced by `step`.
pub fn arange<T: Numeric>(start: T, stop: T, step: T) -> Result<NdArray<T>> {
    if step == T::zero() {
        return Err(Error::invalid("arange: step must not be zero"));
    }
    if step > T::zero() && stop < start {
        return Err(Error::invalid(
            "arange: stop value must be larger than the start value for positive step",
        ));
    }
    if step < T::zero() && stop > start {
        return Err(Error::invalid(
            "arange: start value must be larger than the stop value for negative step",
        ));
    }
    let count = ((stop.as_f64() - start.as_f64()) / step.as_f64()).ceil().max(0.0) as usize;
    let mut values = Vec::with_capacity(count);
    let mut value = start;
    for i in 0..count {
        if i > 0 {
            value += step;
        }
        values.push(value);
    }
    Ok(NdArray::from_vec(values))
}

/// `num` evenly spaced values from `start`. With `endpoint` the last value
/// is exactly `stop`; without it the spacing is `(stop - start) / num` and
/// `stop` is excluded.
pub fn linspace<T: Numeric>(start: T, stop: T, num: u32, endpoint: bool) -> Result<NdArray<T>> {
    match num {
        0 => return Ok(NdArray::default()),
        1 => return Ok(NdArray::from_vec(vec![start])),
        _ => {}
    }
    if stop <= start {
        return Err(Error::invalid(
            "linspace: stop value must be greater than the start value",
        ));
    }
    let (lo, hi) = (start.as_f64(), stop.as_f64());
    let intervals = if endpoint { num - 1 } else { num };
    let step = (hi - lo) / f64::from(intervals);
    let mut values: Vec<T> = (0..num).map(|i| T::from_f64(lo + step * f64::from(i))).collect();
    if endpoint {
        if let Some(last) = values.last_mut() {
            *last = stop;
        }
    }
    Ok(NdArray::from_vec(values))
}

/// `base` raised to `num` evenly spaced exponents between `start` and
/// `stop`.
pub fn logspace<T: Float>(start: T, stop: T, num: u32, endpoint: bool, base: T) -> Result<NdArray<T>> {
    Ok(linspace(start, stop, num, endpoint)?.map(|&exponent| base.powf(exponent)))
}

/// Lower triangle mask: element `(r, c)` is one iff `c <= r + offset`.
pub fn tri<T: Numeric>(rows: u32, cols: u32, offset: i32) -> NdArray<T> {
    let mut out = zeros(rows, cols);
    for row in 0..rows {
        let limit = i64::from(row) + i64::from(offset);
        for (col, value) in out.row_slice_mut(row).iter_mut().enumerate() {
            if col as i64 <= limit {
                *value = T::one();
            }
        }
    }
    out
}

/// Square lower triangle of ones.
pub fn tril<T: Numeric>(n: u32, offset: i32) -> NdArray<T> {
    tri(n, n, offset)
}

/// Square upper triangle of ones: element `(r, c)` is one iff
/// `c >= r + offset`.
pub fn triu<T: Numeric>(n: u32, offset: i32) -> NdArray<T> {
    tri::<T>(n, n, -offset).transpose()
}

/// Copy of `array` with the elements above diagonal `offset` zeroed.
pub fn tril_of<T: Numeric>(array: &NdArray<T>, offset: i32) -> NdArray<T> {
    let mask = tri::<T>(array.num_rows(), array.num_cols(), offset);
    apply_mask(array, &mask)
}

/// Copy of `array` with the elements below diagonal `offset` zeroed.
pub fn triu_of<T: Numeric>(array: &NdArray<T>, offset: i32) -> NdArray<T> {
    let mask = tri::<T>(array.num_cols(), array.num_rows(), -offset).transpose();
    apply_mask(array, &mask)
}

fn apply_mask<T: Numeric>(array: &NdArray<T>, mask: &NdArray<T>) -> NdArray<T> {
    let mut out = array.clone();
    for (value, keep) in out.iter_mut().zip(mask.iter()) {
        if !keep.is_nonzero() {
            *value = T::zero();
        }
    }
    out
}

/// Square array with the flattened input on its main diagonal.
pub fn diagflat<T: Numeric>(array: &NdArray<T>) -> NdArray<T> {
    let n = array.size();
    let mut out = zeros(n, n);
    let data = out.as_mut_slice();
    for (i, &value) in array.iter().enumerate() {
        data[i * n as usize + i] = value;
    }
    out
}

/// Coordinate matrices of shape `y.size() x x.size()`: every row of the
/// first is `x`, every column of the second is `y`.
pub fn meshgrid<T: Dtype>(x: &NdArray<T>, y: &NdArray<T>) -> (NdArray<T>, NdArray<T>) {
    let shape = Shape::new(y.size(), x.size());
    if shape.size() == 0 {
        return (NdArray::default(), NdArray::default());
    }
    let mut xx = Vec::with_capacity(shape.size() as usize);
    let mut yy = Vec::with_capacity(shape.size() as usize);
    for &y_value in y.iter() {
        xx.extend(x.iter().copied());
        yy.extend(std::iter::repeat(y_value).take(x.size() as usize));
    }
    (NdArray::from_parts(shape, xx), NdArray::from_parts(shape, yy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eye_offsets() {
        let upper: NdArray<i32> = eye(3, 4, 1);
        assert_eq!(upper.as_slice(), &[0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1]);
        let lower: NdArray<i32> = eye(3, 3, -2);
        assert_eq!(lower.as_slice(), &[0, 0, 0, 0, 0, 0, 1, 0, 0]);
    }

    #[test]
    fn arange_counts_steps() {
        assert_eq!(arange(0, 5, 2).unwrap().to_vec(), vec![0, 2, 4]);
        assert_eq!(arange(5.0, 0.0, -2.5).unwrap().to_vec(), vec![5.0, 2.5]);
        assert!(arange(0, 5, 0).unwrap_err().is_invalid_argument());
        assert!(arange(5, 0, 1).is_err());
    }
}
