//! Joining arrays.
//!
//! The output shape is accumulated from a null shape; inputs whose shape is
//! null (empty arrays) are skipped.
use crate::core::{Axis, Dtype, Shape};
use crate::error::{Error, Result};
use crate::NdArray;

/// Stacks arrays vertically; every input must have the same number of
/// columns.
pub fn row_stack<T: Dtype>(arrays: &[&NdArray<T>]) -> Result<NdArray<T>> {
    let mut shape = Shape::default();
    for array in arrays.iter().filter(|a| !a.shape().is_null()) {
        if shape.is_null() {
            shape = array.shape();
        } else if array.num_cols() != shape.cols {
            return Err(Error::invalid(format!(
                "row_stack: input arrays must have the same number of columns ({} != {})",
                array.num_cols(),
                shape.cols
            )));
        } else {
            shape.rows += array.num_rows();
        }
    }
    if shape.is_null() {
        return Ok(NdArray::default());
    }
    let mut data = Vec::with_capacity(shape.size() as usize);
    for array in arrays {
        data.extend_from_slice(array.as_slice());
    }
    NdArray::from_shape_vec(shape, data)
}

/// Stacks arrays horizontally; every input must have the same number of
/// rows.
pub fn column_stack<T: Dtype>(arrays: &[&NdArray<T>]) -> Result<NdArray<T>> {
    let mut shape = Shape::default();
    for array in arrays.iter().filter(|a| !a.shape().is_null()) {
        if shape.is_null() {
            shape = array.shape();
        } else if array.num_rows() != shape.rows {
            return Err(Error::invalid(format!(
                "column_stack: input arrays must have the same number of rows ({} != {})",
                array.num_rows(),
                shape.rows
            )));
        } else {
            shape.cols += array.num_cols();
        }
    }
    if shape.is_null() {
        return Ok(NdArray::default());
    }
    let mut data = Vec::with_capacity(shape.size() as usize);
    for row in 0..shape.rows {
        for array in arrays.iter().filter(|a| !a.shape().is_null()) {
            data.extend_from_slice(array.row_slice(row));
        }
    }
    NdArray::from_shape_vec(shape, data)
}

pub fn vstack<T: Dtype>(arrays: &[&NdArray<T>]) -> Result<NdArray<T>> {
    row_stack(arrays)
}

pub fn hstack<T: Dtype>(arrays: &[&NdArray<T>]) -> Result<NdArray<T>> {
    column_stack(arrays)
}

/// Joins along an existing axis. `Axis::None` flattens every input and
/// joins them into one row.
pub fn concatenate<T: Dtype>(arrays: &[&NdArray<T>], axis: Axis) -> Result<NdArray<T>> {
    match axis {
        Axis::None => Ok(arrays
            .iter()
            .flat_map(|array| array.iter().copied())
            .collect()),
        Axis::Row => row_stack(arrays),
        Axis::Col => column_stack(arrays),
    }
}

/// Like [`concatenate`] but requires an explicit axis.
pub fn stack<T: Dtype>(arrays: &[&NdArray<T>], axis: Axis) -> Result<NdArray<T>> {
    match axis {
        Axis::Row => row_stack(arrays),
        Axis::Col => column_stack(arrays),
        Axis::None => Err(Error::invalid("stack requires Axis::Row or Axis::Col")),
    }
}

/// Appends `values` to `array` along `axis`. A null-shaped side is ignored
/// and the other side returned as-is.
pub fn append<T: Dtype>(array: &NdArray<T>, values: &NdArray<T>, axis: Axis) -> Result<NdArray<T>> {
    if array.shape().is_null() {
        return Ok(values.clone());
    }
    if values.shape().is_null() {
        return Ok(array.clone());
    }
    concatenate(&[array, values], axis)
}

/// Sorted, deduplicated split points clamped into `[0, len]`. Negative
/// points count from the end.
fn split_points(indices: &[i32], len: u32) -> Vec<u32> {
    let len = len as i32;
    let mut points: Vec<u32> = indices
        .iter()
        .map(|&i| {
            let point = if i < 0 { (i + len).max(0) } else { i.min(len) };
            point as u32
        })
        .collect();
    points.sort_unstable();
    points.dedup();
    points
}

/// `[0, p0), [p0, p1), ..., [pn, len)`.
fn split_ranges(indices: &[i32], len: u32) -> Vec<(u32, u32)> {
    let mut bounds = vec![0];
    bounds.extend(split_points(indices, len));
    bounds.push(len);
    bounds.windows(2).map(|w| (w[0], w[1])).collect()
}

/// Splits into column blocks before each column index in `indices`; the
/// inverse of [`hstack`]. Blocks may be empty (zero columns).
pub fn hsplit<T: Dtype>(array: &NdArray<T>, indices: &[i32]) -> Vec<NdArray<T>> {
    let rows = array.num_rows();
    split_ranges(indices, array.num_cols())
        .into_iter()
        .map(|(lo, hi)| {
            let data: Vec<T> = array
                .rows_iter()
                .flat_map(|row| row[lo as usize..hi as usize].iter().copied())
                .collect();
            NdArray::from_parts(Shape::new(rows, hi - lo), data)
        })
        .collect()
}

/// Splits into row blocks before each row index in `indices`; the inverse
/// of [`vstack`].
pub fn vsplit<T: Dtype>(array: &NdArray<T>, indices: &[i32]) -> Vec<NdArray<T>> {
    let cols = array.num_cols();
    split_ranges(indices, array.num_rows())
        .into_iter()
        .map(|(lo, hi)| {
            let data = array.as_slice()[(lo * cols) as usize..(hi * cols) as usize].to_vec();
            NdArray::from_parts(Shape::new(hi - lo, cols), data)
        })
        .collect()
}
