use crate::core::{Dtype, Shape, Slice};
use crate::error::{ensure_same_shape, Error, Result};

use super::NdArray;

impl<T: Dtype> NdArray<T> {
    /// Elements selected by a flat slice, as a `1 x n` array.
    pub fn get_slice(&self, slice: Slice) -> Result<NdArray<T>> {
        let data = self.as_slice();
        Ok(slice
            .indices(self.size())?
            .into_iter()
            .map(|i| data[i as usize])
            .collect())
    }

    /// Sub-array selected by a row slice and a column slice.
    pub fn get_slice_2d(&self, rows: Slice, cols: Slice) -> Result<NdArray<T>> {
        let row_indices = rows.indices(self.num_rows())?;
        let col_indices = cols.indices(self.num_cols())?;
        let mut data = Vec::with_capacity(row_indices.len() * col_indices.len());
        for &row in &row_indices {
            let values = self.row_slice(row);
            data.extend(col_indices.iter().map(|&col| values[col as usize]));
        }
        if data.is_empty() {
            return Ok(NdArray::default());
        }
        Ok(NdArray::from_parts(
            Shape::new(row_indices.len() as u32, col_indices.len() as u32),
            data,
        ))
    }

    /// Part of one row.
    pub fn get_row_slice(&self, row: i32, cols: Slice) -> Result<NdArray<T>> {
        let row = (self.check_2d(row, 0)? as u32 / self.num_cols()) as i32;
        self.get_slice_2d(Slice::new(row, row + 1, 1), cols)
    }

    /// Part of one column.
    pub fn get_col_slice(&self, rows: Slice, col: i32) -> Result<NdArray<T>> {
        let col = self.check_2d(0, col)? as i32;
        self.get_slice_2d(rows, Slice::new(col, col + 1, 1))
    }

    /// Elements where `mask` is true, in row-major order.
    pub fn get_by_mask(&self, mask: &NdArray<bool>) -> Result<NdArray<T>> {
        ensure_same_shape("mask", self.shape(), mask.shape())?;
        Ok(self
            .iter()
            .zip(mask.iter())
            .filter(|(_, keep)| **keep)
            .map(|(v, _)| *v)
            .collect())
    }

    /// Gathers elements by flat index. Order follows `indices` and duplicates
    /// are allowed.
    pub fn get_by_indices(&self, indices: &NdArray<u32>) -> Result<NdArray<T>> {
        self.check_indices(indices)?;
        let data = self.as_slice();
        Ok(indices.iter().map(|&i| data[i as usize]).collect())
    }

    fn check_indices(&self, indices: &NdArray<u32>) -> Result<()> {
        if let Some(&bad) = indices.iter().find(|&&i| i >= self.size()) {
            return Err(Error::invalid(format!(
                "index {} out of bounds for array of size {}",
                bad,
                self.size()
            )));
        }
        Ok(())
    }

    fn check_value_count(&self, expected: usize, values: &NdArray<T>) -> Result<()> {
        if values.size() as usize != expected {
            return Err(Error::invalid(format!(
                "{} values supplied for {} selected elements",
                values.size(),
                expected
            )));
        }
        Ok(())
    }

    /// Bounds-checked single element assignment.
    pub fn put(&mut self, index: i32, value: T) -> Result<&mut Self> {
        *self.at_mut(index)? = value;
        Ok(self)
    }

    pub fn put_2d(&mut self, row: i32, col: i32, value: T) -> Result<&mut Self> {
        *self.at_2d_mut(row, col)? = value;
        Ok(self)
    }

    pub fn put_slice(&mut self, slice: Slice, value: T) -> Result<&mut Self> {
        let indices = slice.indices(self.size())?;
        let data = self.as_mut_slice();
        for i in indices {
            data[i as usize] = value;
        }
        Ok(self)
    }

    /// Writes `values` (in order) into the positions selected by `slice`.
    pub fn put_slice_values(&mut self, slice: Slice, values: &NdArray<T>) -> Result<&mut Self> {
        let indices = slice.indices(self.size())?;
        self.check_value_count(indices.len(), values)?;
        let data = self.as_mut_slice();
        for (i, value) in indices.into_iter().zip(values.iter()) {
            data[i as usize] = *value;
        }
        Ok(self)
    }

    pub fn put_slice_2d(&mut self, rows: Slice, cols: Slice, value: T) -> Result<&mut Self> {
        let row_indices = rows.indices(self.num_rows())?;
        let col_indices = cols.indices(self.num_cols())?;
        for row in row_indices {
            let values = self.row_slice_mut(row);
            for &col in &col_indices {
                values[col as usize] = value;
            }
        }
        Ok(self)
    }

    pub fn put_indices(&mut self, indices: &NdArray<u32>, value: T) -> Result<&mut Self> {
        self.check_indices(indices)?;
        let data = self.as_mut_slice();
        for &i in indices {
            data[i as usize] = value;
        }
        Ok(self)
    }

    pub fn put_indices_values(
        &mut self,
        indices: &NdArray<u32>,
        values: &NdArray<T>,
    ) -> Result<&mut Self> {
        self.check_indices(indices)?;
        self.check_value_count(indices.size() as usize, values)?;
        let data = self.as_mut_slice();
        for (&i, value) in indices.iter().zip(values.iter()) {
            data[i as usize] = *value;
        }
        Ok(self)
    }

    pub fn put_mask(&mut self, mask: &NdArray<bool>, value: T) -> Result<&mut Self> {
        ensure_same_shape("mask", self.shape(), mask.shape())?;
        for (v, keep) in self.iter_mut().zip(mask.iter()) {
            if *keep {
                *v = value;
            }
        }
        Ok(self)
    }

    /// Writes `values` into the masked positions. A single value is
    /// broadcast to every masked position.
    pub fn put_mask_values(&mut self, mask: &NdArray<bool>, values: &NdArray<T>) -> Result<&mut Self> {
        if values.is_scalar() {
            return self.put_mask(mask, values.as_slice()[0]);
        }
        ensure_same_shape("mask", self.shape(), mask.shape())?;
        self.put_indices_values(&mask.flatnonzero(), values)
    }
}
