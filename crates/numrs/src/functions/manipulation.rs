use crate::core::{Axis, Dtype, Numeric, Shape, Slice};
use crate::error::{Error, Result};
use crate::NdArray;

/// Repeats the whole array `rows` times down and `cols` times across.
pub fn tile<T: Dtype>(array: &NdArray<T>, rows: u32, cols: u32) -> NdArray<T> {
    array.repeat(rows, cols)
}

/// Same as [`tile`]: the whole array is repeated, not each element.
pub fn repeat<T: Dtype>(array: &NdArray<T>, rows: u32, cols: u32) -> NdArray<T> {
    array.repeat(rows, cols)
}

pub fn transpose<T: Dtype>(array: &NdArray<T>) -> NdArray<T> {
    array.transpose()
}

/// Copy of `array` with a new shape.
pub fn reshape<T: Dtype>(array: &NdArray<T>, rows: i32, cols: i32) -> Result<NdArray<T>> {
    let mut out = array.clone();
    out.reshape(rows, cols)?;
    Ok(out)
}

/// Reverses the order of the elements along `axis`; `Axis::None` reverses
/// the flattened buffer and keeps the shape.
pub fn flip<T: Dtype>(array: &NdArray<T>, axis: Axis) -> NdArray<T> {
    let mut out = array.clone();
    out.modify_along(axis, |lane| lane.reverse());
    out
}

/// Reverses every row.
pub fn fliplr<T: Dtype>(array: &NdArray<T>) -> NdArray<T> {
    flip(array, Axis::Col)
}

/// Reverses every column.
pub fn flipud<T: Dtype>(array: &NdArray<T>) -> NdArray<T> {
    flip(array, Axis::Row)
}

/// Rotates elements forward by `shift` positions along `axis`; elements
/// pushed past the end come back at the start.
pub fn roll<T: Dtype>(array: &NdArray<T>, shift: i32, axis: Axis) -> NdArray<T> {
    let mut out = array.clone();
    out.modify_along(axis, |lane| {
        if lane.is_empty() {
            return;
        }
        let len = lane.len();
        let mut mid = shift.unsigned_abs() as usize % len;
        if shift > 0 {
            mid = len - mid;
        }
        lane.rotate_left(mid);
    });
    out
}

/// Rotates by 90 degrees `k` times, counterclockwise.
pub fn rot90<T: Dtype>(array: &NdArray<T>, k: u8) -> NdArray<T> {
    match k % 4 {
        1 => flipud(&array.transpose()),
        2 => flip(array, Axis::None),
        3 => fliplr(&array.transpose()),
        _ => array.clone(),
    }
}

/// Differences between consecutive elements along `axis`. The differenced
/// dimension shrinks by one; too short an input yields an empty array.
pub fn diff<T: Numeric>(array: &NdArray<T>, axis: Axis) -> NdArray<T> {
    fn lane_diff<T: Numeric>(lane: &[T]) -> impl Iterator<Item = T> + '_ {
        lane.windows(2).map(|w| w[1] - w[0])
    }

    match axis {
        Axis::None => {
            if array.size() < 2 {
                return NdArray::default();
            }
            lane_diff(array.as_slice()).collect()
        }
        Axis::Col => {
            let Shape { rows, cols } = array.shape();
            if cols < 2 {
                return NdArray::default();
            }
            let data: Vec<T> = array.rows_iter().flat_map(lane_diff).collect();
            NdArray::from_parts(Shape::new(rows, cols - 1), data)
        }
        Axis::Row => diff(&array.transpose(), Axis::Col).transpose(),
    }
}

/// Trims leading (`"f"`), trailing (`"b"`) or both (`"fb"`) zeros from the
/// flattened array.
pub fn trim_zeros<T: Numeric>(array: &NdArray<T>, trim: &str) -> Result<NdArray<T>> {
    let (front, back) = match trim {
        "f" => (true, false),
        "b" => (false, true),
        "fb" => (true, true),
        _ => {
            return Err(Error::invalid(format!(
                "trim_zeros: trim must be 'f', 'b' or 'fb', got '{}'",
                trim
            )))
        }
    };
    let data = array.as_slice();
    let start = if front {
        data.iter().position(|v| v.is_nonzero()).unwrap_or(data.len())
    } else {
        0
    };
    let end = if back {
        data.iter().rposition(|v| v.is_nonzero()).map_or(0, |i| i + 1)
    } else {
        data.len()
    };
    if start >= end {
        return Ok(NdArray::default());
    }
    Ok(NdArray::from_slice(&data[start..end]))
}

/// Position `index` on an axis of length `len`, counting from the end when
/// negative and clamped into `[0, len]`.
fn insertion_point(index: i32, len: u32) -> usize {
    let len = len as i32;
    let point = if index < 0 { (index + len).max(0) } else { index.min(len) };
    point as usize
}

/// Inserts `values` before `index` along `axis`.
///
/// `Axis::None` inserts the flattened values into the flattened array.
/// `Axis::Row` inserts one row when `values` holds a single element or
/// exactly one row's worth, or several rows when `values` has as many
/// columns as `array`; `Axis::Col` is the same for columns.
pub fn insert<T: Dtype>(array: &NdArray<T>, index: i32, values: &NdArray<T>, axis: Axis) -> Result<NdArray<T>> {
    match axis {
        Axis::None => {
            let mut data = array.to_vec();
            let at = insertion_point(index, array.size());
            data.splice(at..at, values.iter().copied());
            Ok(NdArray::from_vec(data))
        }
        Axis::Row => {
            if array.is_empty() {
                return Ok(values.clone());
            }
            let Shape { rows, cols } = array.shape();
            let block: Vec<T> = if values.size() == cols || values.num_cols() == cols {
                values.to_vec()
            } else if values.is_scalar() {
                vec![values.as_slice()[0]; cols as usize]
            } else {
                return Err(Error::invalid(format!(
                    "insert: values of shape {} cannot be broadcast to rows of length {}",
                    values.shape(),
                    cols
                )));
            };
            let at = insertion_point(index, rows) * cols as usize;
            let new_rows = rows + block.len() as u32 / cols;
            let mut data = array.to_vec();
            data.splice(at..at, block);
            NdArray::from_shape_vec(Shape::new(new_rows, cols), data)
        }
        Axis::Col => {
            Ok(insert(&array.transpose(), index, &values.transpose(), Axis::Row)?.transpose())
        }
    }
}

/// Removes the elements (`Axis::None`), rows (`Axis::Row`) or columns
/// (`Axis::Col`) at `indices`. Duplicate indices are removed once.
/// Out of range indices are ignored for `Axis::None` and rejected for the
/// other axes.
pub fn delete_indices<T: Dtype>(array: &NdArray<T>, indices: &NdArray<u32>, axis: Axis) -> Result<NdArray<T>> {
    let mut doomed = indices.to_vec();
    doomed.sort_unstable();
    doomed.dedup();
    let (len, name) = match axis {
        Axis::None => (u32::MAX, "element"),
        Axis::Row => (array.num_rows(), "row"),
        Axis::Col => (array.num_cols(), "column"),
    };
    if let Some(&last) = doomed.last().filter(|&&last| last >= len) {
        return Err(Error::invalid(format!(
            "delete_indices: {} index {} is out of bounds for length {}",
            name, last, len
        )));
    }
    let is_doomed = |i: usize| doomed.binary_search(&(i as u32)).is_ok();
    match axis {
        Axis::None => Ok(array
            .iter()
            .enumerate()
            .filter(|(i, _)| !is_doomed(*i))
            .map(|(_, &v)| v)
            .collect()),
        Axis::Row => {
            let Shape { rows, cols } = array.shape();
            let data: Vec<T> = array
                .rows_iter()
                .enumerate()
                .filter(|(row, _)| !is_doomed(*row))
                .flat_map(|(_, lane)| lane.iter().copied())
                .collect();
            NdArray::from_shape_vec(Shape::new(rows - doomed.len() as u32, cols), data)
        }
        Axis::Col => Ok(delete_indices(&array.transpose(), &NdArray::from_vec(doomed), Axis::Row)?.transpose()),
    }
}

/// [`delete_indices`] with the indices selected by a slice over the
/// chosen axis.
pub fn delete_slice<T: Dtype>(array: &NdArray<T>, slice: Slice, axis: Axis) -> Result<NdArray<T>> {
    let len = match axis {
        Axis::None => array.size(),
        Axis::Row => array.num_rows(),
        Axis::Col => array.num_cols(),
    };
    let indices = NdArray::from_vec(slice.indices(len)?);
    delete_indices(array, &indices, axis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roll_wraps_both_directions() {
        let array = NdArray::from_vec(vec![1, 2, 3, 4, 5]);
        assert_eq!(roll(&array, 2, Axis::None).to_vec(), vec![4, 5, 1, 2, 3]);
        assert_eq!(roll(&array, -1, Axis::None).to_vec(), vec![2, 3, 4, 5, 1]);
        assert_eq!(roll(&array, 5, Axis::None).to_vec(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn rot90_quarter_turns() {
        let array = NdArray::from([[1, 2], [3, 4]]);
        assert_eq!(rot90(&array, 1), NdArray::from([[2, 4], [1, 3]]));
        assert_eq!(rot90(&array, 2), NdArray::from([[4, 3], [2, 1]]));
        assert_eq!(rot90(&array, 4), array);
    }

    #[test]
    fn trim_zeros_modes() {
        let array = NdArray::from_vec(vec![0, 0, 1, 2, 0]);
        assert_eq!(trim_zeros(&array, "f").unwrap().to_vec(), vec![1, 2, 0]);
        assert_eq!(trim_zeros(&array, "b").unwrap().to_vec(), vec![0, 0, 1, 2]);
        assert_eq!(trim_zeros(&array, "fb").unwrap().to_vec(), vec![1, 2]);
        assert!(trim_zeros(&NdArray::from_vec(vec![0, 0]), "fb").unwrap().is_empty());
        assert!(trim_zeros(&array, "x").is_err());
    }
}
