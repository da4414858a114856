//! Integration tests for the `NdArray` container: construction, element
//! access, slicing, masked assignment and shape changes.

use numrs::{Endian, NdArray, Shape, Slice};

fn grid() -> NdArray<i32> {
    NdArray::from([[1, 2, 3], [4, 5, 6]])
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn size_is_rows_times_cols() {
    let array: NdArray<f64> = NdArray::new(3, 4);
    assert_eq!(array.shape(), Shape::new(3, 4));
    assert_eq!(array.size(), 12);
    assert_eq!(array.nbytes(), 96);
    assert!(array.iter().all(|&v| v == 0.0));
}

#[test]
fn from_vec_is_a_single_row() {
    let array = NdArray::from_vec(vec![1u8, 2, 3]);
    assert_eq!(array.shape(), Shape::new(1, 3));
    assert!(array.is_flat());
    assert!(NdArray::<u8>::from_vec(Vec::new()).shape().is_null());
}

#[test]
fn ragged_rows_are_rejected() {
    let err = NdArray::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn from_shape_vec_checks_length() {
    assert!(NdArray::from_shape_vec(Shape::new(2, 2), vec![1, 2, 3]).is_err());
    let array = NdArray::from_shape_vec(Shape::new(2, 2), vec![1, 2, 3, 4]).unwrap();
    assert_eq!(array[(1, 0)], 3);
}

#[test]
fn clone_owns_a_deep_copy() {
    let array = grid();
    let mut copy = array.clone();
    copy.fill(0);
    assert_eq!(array, grid());
    assert!(copy.owns_data());
}

#[test]
fn borrowed_buffer_writes_through() {
    let mut backing = vec![1.0f32, 2.0, 3.0, 4.0];
    {
        let mut view = unsafe { NdArray::from_raw_parts(backing.as_mut_ptr(), 2, 2, false) };
        assert!(!view.owns_data());
        view.put_2d(1, 1, 40.0).unwrap();
    }
    assert_eq!(backing, vec![1.0, 2.0, 3.0, 40.0]);
}

// ---------------------------------------------------------------------------
// Element access
// ---------------------------------------------------------------------------

#[test]
fn negative_indices_count_from_the_end() {
    let array = grid();
    assert_eq!(*array.at(-1).unwrap(), 6);
    assert_eq!(*array.at(-6).unwrap(), 1);
    assert_eq!(*array.at_2d(-1, -2).unwrap(), 5);
    assert_eq!(array.back().unwrap(), 6);
    assert_eq!(array.front().unwrap(), 1);
}

#[test]
fn unchecked_indexing_wraps_negative_indices_once() {
    let mut array = grid();
    let size = array.size() as i32;
    for i in 0..size {
        assert_eq!(array[i], array[i - size]);
    }
    assert_eq!(array[(-1, -1)], 6);
    assert_eq!(array[(-2, 0)], 1);

    array[-2] = 50;
    array[(-1, -1)] = 60;
    assert_eq!(array.to_vec(), vec![1, 2, 3, 4, 50, 60]);
}

#[test]
#[should_panic]
fn unchecked_indexing_panics_past_one_wrap() {
    let array = grid();
    let _value = array[-7];
}

#[test]
fn released_buffer_can_be_adopted_again() {
    let mut array = grid();
    let ptr = array.release();
    assert!(array.is_empty());
    assert!(array.shape().is_null());

    let adopted = unsafe { NdArray::from_raw_parts(ptr, 2, 3, true) };
    assert!(adopted.owns_data());
    assert_eq!(adopted, grid());
}

#[test]
fn out_of_range_access_is_an_error() {
    let array = grid();
    assert!(array.at(6).unwrap_err().is_invalid_argument());
    assert!(array.at(-7).is_err());
    assert!(array.at_2d(2, 0).is_err());
    assert!(array.at_2d(0, -4).is_err());
}

#[test]
fn item_requires_a_single_element() {
    assert_eq!(NdArray::from_vec(vec![7]).item().unwrap(), 7);
    assert!(grid().item().is_err());
}

#[test]
fn row_and_column_copies() {
    let array = grid();
    assert_eq!(array.row(-1).unwrap().to_vec(), vec![4, 5, 6]);
    let col = array.column(1).unwrap();
    assert_eq!(col.shape(), Shape::new(2, 1));
    assert_eq!(col.to_vec(), vec![2, 5]);
}

#[test]
fn nonzero_coordinates() {
    let array = NdArray::from([[0, 1], [2, 0]]);
    assert_eq!(array.flatnonzero().to_vec(), vec![1, 2]);
    let (rows, cols) = array.nonzero();
    assert_eq!(rows.to_vec(), vec![0, 1]);
    assert_eq!(cols.to_vec(), vec![1, 0]);
}

// ---------------------------------------------------------------------------
// Slicing and masks
// ---------------------------------------------------------------------------

#[test]
fn flat_slice_with_step() {
    let array: NdArray<i32> = (0..10).collect();
    assert_eq!(array.get_slice(Slice::new(1, 8, 3)).unwrap().to_vec(), vec![1, 4, 7]);
    assert_eq!(array.get_slice(Slice::new(-3, 100, 1)).unwrap().to_vec(), vec![7, 8, 9]);
}

#[test]
fn two_dimensional_slice() {
    let array = grid();
    let sub = array.get_slice_2d(Slice::all(2), Slice::range(1, 3)).unwrap();
    assert_eq!(sub, NdArray::from([[2, 3], [5, 6]]));
    assert_eq!(array.get_row_slice(-1, Slice::to(2)).unwrap().to_vec(), vec![4, 5]);
    assert_eq!(array.get_col_slice(Slice::all(2), 2).unwrap().to_vec(), vec![3, 6]);
}

#[test]
fn mask_selection_and_assignment() {
    let mut array = grid();
    let mask = array.greater_scalar(3);
    assert_eq!(array.get_by_mask(&mask).unwrap().to_vec(), vec![4, 5, 6]);

    array.put_mask(&mask, 0).unwrap();
    assert_eq!(array.to_vec(), vec![1, 2, 3, 0, 0, 0]);

    let wrong_shape = NdArray::from_vec(vec![true, false]);
    assert!(array.put_mask(&wrong_shape, 1).unwrap_err().is_invalid_argument());
}

#[test]
fn put_values_require_matching_count() {
    let mut array: NdArray<i32> = NdArray::new(1, 5);
    let indices = NdArray::from_vec(vec![0u32, 4]);
    array.put_indices_values(&indices, &NdArray::from_vec(vec![8, 9])).unwrap();
    assert_eq!(array.to_vec(), vec![8, 0, 0, 0, 9]);

    assert!(array
        .put_indices_values(&indices, &NdArray::from_vec(vec![1, 2, 3]))
        .is_err());
    assert!(array.put_indices(&NdArray::from_vec(vec![5u32]), 1).is_err());

    array.put_slice_values(Slice::new(1, 4, 1), &NdArray::from_vec(vec![1, 2, 3])).unwrap();
    assert_eq!(array.to_vec(), vec![8, 1, 2, 3, 9]);
}

#[test]
fn mask_values_broadcast_a_single_value() {
    let mut array = grid();
    let mask = array.less_scalar(3);
    array.put_mask_values(&mask, &NdArray::from_vec(vec![-1])).unwrap();
    assert_eq!(array.to_vec(), vec![-1, -1, 3, 4, 5, 6]);

    let mask = array.greater_scalar(4);
    array.put_mask_values(&mask, &NdArray::from_vec(vec![50, 60])).unwrap();
    assert_eq!(array.to_vec(), vec![-1, -1, 3, 4, 50, 60]);
}

// ---------------------------------------------------------------------------
// Shape changes
// ---------------------------------------------------------------------------

#[test]
fn reshape_keeps_size() {
    let mut array = grid();
    array.reshape(3, -1).unwrap();
    assert_eq!(array.shape(), Shape::new(3, 2));
    assert_eq!(array[(2, 1)], 6);

    let err = array.reshape(4, 2).unwrap_err();
    assert!(err.is_runtime());
    assert_eq!(array.shape(), Shape::new(3, 2));
}

#[test]
fn transpose_is_an_involution() {
    let array = grid();
    let transposed = array.transpose();
    assert_eq!(transposed.shape(), Shape::new(3, 2));
    assert_eq!(transposed[(2, 0)], 3);
    assert_eq!(transposed.transpose(), array);
}

#[test]
fn resize_slow_keeps_overlapping_cells() {
    let mut array = grid();
    array.resize_slow(3, 2);
    assert_eq!(array, NdArray::from([[1, 2], [4, 5], [0, 0]]));
    array.resize_fast(1, 1);
    assert_eq!(array.to_vec(), vec![0]);
}

#[test]
fn diagonal_offsets() {
    let array = NdArray::from([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
    assert_eq!(array.diagonal(0, numrs::Axis::Col).unwrap().to_vec(), vec![1, 5, 9]);
    assert_eq!(array.diagonal(1, numrs::Axis::Col).unwrap().to_vec(), vec![4, 8]);
    assert_eq!(array.diagonal(1, numrs::Axis::Row).unwrap().to_vec(), vec![2, 6]);
    assert!(array.diagonal(0, numrs::Axis::None).is_err());
}

// ---------------------------------------------------------------------------
// Byte order
// ---------------------------------------------------------------------------

#[test]
fn byteswap_twice_restores_values() {
    let mut array = NdArray::from_vec(vec![1u16, 0x0102]);
    array.byteswap();
    assert_eq!(array.to_vec(), vec![0x0100, 0x0201]);
    array.byteswap();
    assert_eq!(array.to_vec(), vec![1, 0x0102]);
}

#[test]
fn newbyteorder_to_same_order_keeps_bytes() {
    let array = NdArray::from_vec(vec![0x01020304u32]);
    let same = array.newbyteorder(Endian::host());
    assert_eq!(same.to_vec(), array.to_vec());
    assert_eq!(same.endianness(), Endian::host());

    let other = if Endian::host() == Endian::Little { Endian::Big } else { Endian::Little };
    let swapped = array.newbyteorder(other);
    assert_eq!(swapped.to_vec(), vec![0x04030201]);
    assert_eq!(swapped.endianness(), other);
}
