use log::debug;

use crate::core::{Axis, Dtype, Shape};
use crate::error::{Error, Result};

use super::NdArray;

impl<T: Dtype> NdArray<T> {
    /// Reinterprets the buffer with a new shape. One dimension may be `-1`
    /// and is then inferred from the size.
    pub fn reshape(&mut self, rows: i32, cols: i32) -> Result<&mut Self> {
        let size = i64::from(self.size());
        let (rows, cols) = match (rows < 0, cols < 0) {
            (false, false) => (i64::from(rows), i64::from(cols)),
            (true, false) if rows == -1 && cols > 0 && size % i64::from(cols) == 0 => {
                (size / i64::from(cols), i64::from(cols))
            }
            (false, true) if cols == -1 && rows > 0 && size % i64::from(rows) == 0 => {
                (i64::from(rows), size / i64::from(rows))
            }
            _ => {
                return Err(Error::runtime(format!(
                    "cannot reshape array of size {} into shape ({}, {})",
                    size, rows, cols
                )))
            }
        };
        if rows * cols != size {
            return Err(Error::runtime(format!(
                "cannot reshape array of size {} into shape ({}, {})",
                size, rows, cols
            )));
        }
        self.shape = Shape::new(rows as u32, cols as u32);
        Ok(self)
    }

    pub fn reshape_to(&mut self, shape: Shape) -> Result<&mut Self> {
        if shape.size() != self.size() {
            return Err(Error::runtime(format!(
                "cannot reshape array of size {} into shape {}",
                self.size(),
                shape
            )));
        }
        self.shape = shape;
        Ok(self)
    }

    /// Reshapes in place to a single row.
    pub fn ravel(&mut self) -> &mut Self {
        if !self.is_empty() {
            self.shape = Shape::new(1, self.size());
        }
        self
    }

    /// Flattened `1 x size` copy.
    pub fn flatten(&self) -> NdArray<T> {
        let mut out = self.clone();
        out.ravel();
        out
    }

    /// Reallocates to the new shape, discarding every element.
    pub fn resize_fast(&mut self, rows: u32, cols: u32) -> &mut Self {
        let shape = Shape::new(rows, cols);
        debug!("resize_fast {} -> {}", self.shape(), shape);
        let endianness = self.endianness;
        *self = NdArray::from_shape(shape);
        self.endianness = endianness;
        self
    }

    /// Reallocates to the new shape, keeping every element whose (row, col)
    /// position still exists and default-filling new cells.
    pub fn resize_slow(&mut self, rows: u32, cols: u32) -> &mut Self {
        let shape = Shape::new(rows, cols);
        debug!("resize_slow {} -> {}", self.shape(), shape);
        let old_shape = self.shape();
        let old = self.as_slice();
        let mut data = vec![T::default(); shape.size() as usize];
        for row in 0..rows.min(old_shape.rows) {
            for col in 0..cols.min(old_shape.cols) {
                data[(row * cols + col) as usize] = old[(row * old_shape.cols + col) as usize];
            }
        }
        let endianness = self.endianness;
        *self = NdArray::from_parts(shape, data);
        self.endianness = endianness;
        self
    }

    pub fn transpose(&self) -> NdArray<T> {
        let Shape { rows, cols } = self.shape();
        let data = self.as_slice();
        let mut out = Vec::with_capacity(data.len());
        for col in 0..cols {
            for row in 0..rows {
                out.push(data[(row * cols + col) as usize]);
            }
        }
        let mut transposed = NdArray::from_parts(Shape::new(cols, rows), out);
        transposed.endianness = self.endianness;
        transposed
    }

    /// Diagonal values as a `1 x n` array. `Axis::Col` offsets along rows
    /// (positive offset starts lower), `Axis::Row` along columns.
    pub fn diagonal(&self, offset: i32, axis: Axis) -> Result<NdArray<T>> {
        match axis {
            Axis::Col => {
                let mut values = Vec::new();
                let mut col: i64 = 0;
                for row in i64::from(offset)..i64::from(self.num_rows()) {
                    if row < 0 {
                        col += 1;
                        continue;
                    }
                    if col >= i64::from(self.num_cols()) {
                        break;
                    }
                    values.push(self.as_slice()[(row * i64::from(self.num_cols()) + col) as usize]);
                    col += 1;
                }
                Ok(NdArray::from_vec(values))
            }
            Axis::Row => self.transpose().diagonal(offset, Axis::Col),
            Axis::None => Err(Error::invalid("diagonal requires Axis::Row or Axis::Col")),
        }
    }

    /// Tiles the whole array `rows x cols` times.
    pub fn repeat(&self, rows: u32, cols: u32) -> NdArray<T> {
        let Shape { rows: in_rows, cols: in_cols } = self.shape();
        let out_shape = Shape::new(in_rows * rows, in_cols * cols);
        let mut data = Vec::with_capacity(out_shape.size() as usize);
        for out_row in 0..out_shape.rows {
            let source = self.row_slice(out_row % in_rows.max(1));
            for _ in 0..cols {
                data.extend_from_slice(source);
            }
        }
        if data.is_empty() {
            return NdArray::default();
        }
        NdArray::from_parts(out_shape, data)
    }
}
