//! Conversions to and from `ndarray::Array2`.
use ::ndarray::{Array2, ArrayView2};

use crate::core::{Dtype, Shape};
use crate::error::{Error, Result};

use super::NdArray;

impl<T: Dtype> NdArray<T> {
    /// Borrows the buffer as a 2D `ndarray` view without copying.
    pub fn as_array_view(&self) -> Result<ArrayView2<'_, T>> {
        let shape = (self.num_rows() as usize, self.num_cols() as usize);
        ArrayView2::from_shape(shape, self.as_slice()).map_err(|e| Error::runtime(e.to_string()))
    }
}

impl<T: Dtype> From<NdArray<T>> for Array2<T> {
    fn from(value: NdArray<T>) -> Self {
        let cols = value.num_cols() as usize;
        let data = value.as_slice();
        Array2::from_shape_fn(
            (value.num_rows() as usize, cols),
            |(row, col)| data[row * cols + col],
        )
    }
}

impl<T: Dtype> TryFrom<Array2<T>> for NdArray<T> {
    type Error = Error;

    fn try_from(value: Array2<T>) -> Result<Self> {
        let (rows, cols) = value.dim();
        let (rows, cols) = match (u32::try_from(rows), u32::try_from(cols)) {
            (Ok(rows), Ok(cols)) => (rows, cols),
            _ => {
                return Err(Error::invalid(format!(
                    "array of shape ({}, {}) is too large",
                    rows, cols
                )))
            }
        };
        if rows == 0 || cols == 0 {
            return Ok(NdArray::default());
        }
        // `iter` walks in logical row-major order whatever the memory layout.
        let data: Vec<T> = value.iter().copied().collect();
        NdArray::from_shape_vec(Shape::new(rows, cols), data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_array2() {
        let array = NdArray::from([[1.0f64, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let converted: Array2<f64> = array.clone().into();
        assert_eq!(converted[[1, 0]], 4.0);
        assert_eq!(array.as_array_view().unwrap()[[0, 2]], 3.0);
        let back = NdArray::try_from(converted).unwrap();
        assert_eq!(back, array);
    }

    #[test]
    fn transposed_layout_is_read_logically() {
        let mut source = Array2::from_shape_vec((2, 2), vec![1, 2, 3, 4]).unwrap();
        source.swap_axes(0, 1);
        let array = NdArray::try_from(source).unwrap();
        assert_eq!(array.as_slice(), &[1, 3, 2, 4]);
    }
}
