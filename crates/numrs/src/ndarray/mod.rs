//! The `NdArray` container: a 1D/2D row-major array.
//!
//! Construction, element access and iteration live here; slicing and
//! assignment are in `index`, shape changes in `manip`, axis-aware
//! reductions in `reduce` and the operator overloads in `ops`.
mod byteorder;
mod fmt;
mod index;
#[cfg(feature = "ndarray")]
mod interop;
pub(crate) mod io;
mod manip;
mod ops;
pub(crate) mod reduce;
mod storage;

use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut};

use crate::core::{Dtype, Endian, Float, Numeric, Shape};
use crate::error::{Error, Result};
use storage::Buffer;

pub struct NdArray<T> {
    shape: Shape,
    size: u32,
    endianness: Endian,
    buffer: Buffer<T>,
}

impl<T> Default for NdArray<T> {
    fn default() -> Self {
        Self {
            shape: Shape::default(),
            size: 0,
            endianness: Endian::Native,
            buffer: Buffer::default(),
        }
    }
}

impl<T: Dtype> Clone for NdArray<T> {
    fn clone(&self) -> Self {
        Self {
            shape: self.shape,
            size: self.size,
            endianness: self.endianness,
            buffer: self.buffer.to_owned_buffer(),
        }
    }
}

impl<T: Dtype> NdArray<T> {
    /// A `rows x cols` array filled with `T::default()`.
    pub fn new(rows: u32, cols: u32) -> Self {
        Self::from_elem(Shape::new(rows, cols), T::default())
    }

    pub fn square(n: u32) -> Self {
        Self::new(n, n)
    }

    pub fn from_shape(shape: Shape) -> Self {
        Self::new(shape.rows, shape.cols)
    }

    pub fn from_elem(shape: Shape, value: T) -> Self {
        Self::from_parts(shape, vec![value; shape.size() as usize])
    }

    /// A single-row array over `data`.
    pub fn from_vec(data: Vec<T>) -> Self {
        let shape = if data.is_empty() {
            Shape::default()
        } else {
            Shape::new(1, data.len() as u32)
        };
        Self::from_parts(shape, data)
    }

    pub fn from_slice(data: &[T]) -> Self {
        Self::from_vec(data.to_vec())
    }

    pub fn from_shape_vec(shape: impl Into<Shape>, data: Vec<T>) -> Result<Self> {
        let shape = shape.into();
        if data.len() != shape.size() as usize {
            return Err(Error::invalid(format!(
                "invalid shape {} for buffer of length {}",
                shape,
                data.len()
            )));
        }
        Ok(Self::from_parts(shape, data))
    }

    /// Builds a 2D array from nested rows; every row must have the same
    /// length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let num_rows = rows.len() as u32;
        let num_cols = rows.first().map_or(0, |row| row.len()) as u32;
        let mut data = Vec::with_capacity((num_rows * num_cols) as usize);
        for (idx, row) in rows.into_iter().enumerate() {
            if row.len() as u32 != num_cols {
                return Err(Error::invalid(format!(
                    "all rows must be the same length: row {} has {} elements, expected {}",
                    idx,
                    row.len(),
                    num_cols
                )));
            }
            data.extend(row);
        }
        if data.is_empty() {
            return Ok(Self::default());
        }
        Ok(Self::from_parts(Shape::new(num_rows, num_cols), data))
    }

    /// Wraps `rows * cols` elements at `ptr`.
    ///
    /// With `take_ownership == false` the array is a view: writes go to the
    /// caller's memory and dropping the array frees nothing. With
    /// `take_ownership == true` the array adopts the allocation and frees it
    /// on drop.
    ///
    /// # Safety
    /// `ptr` must be valid for reads and writes of `rows * cols` elements for
    /// the whole lifetime of the returned array (the array must not outlive
    /// the buffer). When taking ownership, the memory must have been
    /// allocated by a `Vec<T>`/`Box<[T]>` of exactly that length, e.g. a
    /// pointer obtained from [`NdArray::release`].
    pub unsafe fn from_raw_parts(ptr: *mut T, rows: u32, cols: u32, take_ownership: bool) -> Self {
        if ptr.is_null() {
            return Self::default();
        }
        let shape = Shape::new(rows, cols);
        Self {
            shape,
            size: shape.size(),
            endianness: Endian::Native,
            buffer: Buffer::from_raw(ptr, shape.size() as usize, take_ownership),
        }
    }

    pub(crate) fn from_parts(shape: Shape, data: Vec<T>) -> Self {
        debug_assert_eq!(shape.size() as usize, data.len());
        Self {
            shape,
            size: shape.size(),
            endianness: Endian::Native,
            buffer: Buffer::Owned(data),
        }
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn num_rows(&self) -> u32 {
        self.shape.rows
    }

    pub fn num_cols(&self) -> u32 {
        self.shape.cols
    }

    pub fn endianness(&self) -> Endian {
        self.endianness
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// A single row or a single column.
    pub fn is_flat(&self) -> bool {
        !self.is_empty() && (self.shape.rows == 1 || self.shape.cols == 1)
    }

    pub fn is_scalar(&self) -> bool {
        self.size == 1
    }

    pub fn is_square(&self) -> bool {
        !self.is_empty() && self.shape.is_square()
    }

    /// Whether dropping this array frees its buffer.
    pub fn owns_data(&self) -> bool {
        self.buffer.is_owned()
    }

    pub fn nbytes(&self) -> u64 {
        (std::mem::size_of::<T>() as u64) * u64::from(self.size)
    }

    pub fn as_slice(&self) -> &[T] {
        self.buffer.as_slice()
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.buffer.as_mut_slice()
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.as_slice().to_vec()
    }

    /// Raw pointer to the first element; ownership stays with the array.
    pub fn data(&self) -> *const T {
        self.as_slice().as_ptr()
    }

    pub fn data_mut(&mut self) -> *mut T {
        self.as_mut_slice().as_mut_ptr()
    }

    /// Gives up the buffer and leaves `self` empty.
    ///
    /// For an owned buffer the caller becomes responsible for the
    /// allocation, which can be handed back with
    /// `NdArray::from_raw_parts(ptr, rows, cols, true)`. For a view the
    /// pointer is simply returned.
    pub fn release(&mut self) -> *mut T {
        let taken = std::mem::take(self);
        let (ptr, _) = taken.buffer.into_raw();
        ptr
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Iterates over the rows as slices. A zero-width array still yields one
    /// empty slice per row.
    pub fn rows_iter(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        let cols = self.shape.cols as usize;
        let data = self.as_slice();
        (0..self.shape.rows as usize).map(move |row| &data[row * cols..(row + 1) * cols])
    }

    /// Iterates down one column.
    pub fn column_iter(&self, col: u32) -> impl Iterator<Item = &T> + '_ {
        let cols = self.shape.cols.max(1) as usize;
        self.as_slice().iter().skip(col as usize).step_by(cols)
    }

    pub fn row_slice(&self, row: u32) -> &[T] {
        let start = (row * self.shape.cols) as usize;
        &self.as_slice()[start..start + self.shape.cols as usize]
    }

    pub(crate) fn row_slice_mut(&mut self, row: u32) -> &mut [T] {
        let cols = self.shape.cols as usize;
        let start = row as usize * cols;
        &mut self.as_mut_slice()[start..start + cols]
    }

    #[inline]
    fn wrap_flat(&self, index: i32) -> usize {
        let index = i64::from(index);
        let index = if index < 0 { index + i64::from(self.size) } else { index };
        index as usize
    }

    #[inline]
    fn wrap_2d(&self, row: i32, col: i32) -> usize {
        let row = if row < 0 { i64::from(row) + i64::from(self.shape.rows) } else { i64::from(row) };
        let col = if col < 0 { i64::from(col) + i64::from(self.shape.cols) } else { i64::from(col) };
        (row * i64::from(self.shape.cols) + col) as usize
    }

    fn check_flat(&self, index: i32) -> Result<usize> {
        if self.size == 0 || i64::from(index).unsigned_abs() > u64::from(self.size - 1) {
            return Err(Error::invalid(format!(
                "input index {} is out of bounds for array of size {}",
                index, self.size
            )));
        }
        Ok(self.wrap_flat(index))
    }

    fn check_2d(&self, row: i32, col: i32) -> Result<usize> {
        let rows = self.shape.rows;
        if rows == 0 || i64::from(row).unsigned_abs() > u64::from(rows - 1) {
            return Err(Error::invalid(format!(
                "row index {} is out of bounds for array of shape {}",
                row, self.shape
            )));
        }
        let cols = self.shape.cols;
        if cols == 0 || i64::from(col).unsigned_abs() > u64::from(cols - 1) {
            return Err(Error::invalid(format!(
                "column index {} is out of bounds for array of shape {}",
                col, self.shape
            )));
        }
        Ok(self.wrap_2d(row, col))
    }

    /// Bounds-checked flat access; negative indices count from the end.
    pub fn at(&self, index: i32) -> Result<&T> {
        let offset = self.check_flat(index)?;
        Ok(&self.as_slice()[offset])
    }

    pub fn at_mut(&mut self, index: i32) -> Result<&mut T> {
        let offset = self.check_flat(index)?;
        Ok(&mut self.as_mut_slice()[offset])
    }

    /// Bounds-checked 2D access; negative indices count from the end of
    /// their dimension.
    pub fn at_2d(&self, row: i32, col: i32) -> Result<&T> {
        let offset = self.check_2d(row, col)?;
        Ok(&self.as_slice()[offset])
    }

    pub fn at_2d_mut(&mut self, row: i32, col: i32) -> Result<&mut T> {
        let offset = self.check_2d(row, col)?;
        Ok(&mut self.as_mut_slice()[offset])
    }

    /// The only element of a size-1 array.
    pub fn item(&self) -> Result<T> {
        if self.size != 1 {
            return Err(Error::invalid(format!(
                "can only convert an array of size 1 to a scalar, array has size {}",
                self.size
            )));
        }
        Ok(self.as_slice()[0])
    }

    pub fn front(&self) -> Result<T> {
        self.at(0).copied()
    }

    pub fn back(&self) -> Result<T> {
        self.at(-1).copied()
    }

    /// Copy of one row as a `1 x cols` array.
    pub fn row(&self, row: i32) -> Result<NdArray<T>> {
        let row = self.check_2d(row, 0)? as u32 / self.shape.cols;
        Ok(NdArray::from_slice(self.row_slice(row)))
    }

    /// Copy of one column as a `rows x 1` array.
    pub fn column(&self, col: i32) -> Result<NdArray<T>> {
        let col = self.check_2d(0, col)? as u32;
        let values: Vec<T> = self.column_iter(col).copied().collect();
        Ok(NdArray::from_parts(Shape::new(self.shape.rows, 1), values))
    }

    /// Assigns `value` to every element without reallocating.
    pub fn fill(&mut self, value: T) -> &mut Self {
        self.as_mut_slice().fill(value);
        self
    }

    pub fn replace(&mut self, old: T, new: T) -> &mut Self {
        for value in self.iter_mut() {
            if *value == old {
                *value = new;
            }
        }
        self
    }

    pub fn swap_rows(&mut self, row1: u32, row2: u32) -> Result<&mut Self> {
        if row1 >= self.shape.rows || row2 >= self.shape.rows {
            return Err(Error::invalid(format!(
                "cannot swap rows {} and {} of an array with {} rows",
                row1, row2, self.shape.rows
            )));
        }
        let cols = self.shape.cols as usize;
        let data = self.as_mut_slice();
        for col in 0..cols {
            data.swap(row1 as usize * cols + col, row2 as usize * cols + col);
        }
        Ok(self)
    }

    pub fn swap_cols(&mut self, col1: u32, col2: u32) -> Result<&mut Self> {
        if col1 >= self.shape.cols || col2 >= self.shape.cols {
            return Err(Error::invalid(format!(
                "cannot swap columns {} and {} of an array with {} columns",
                col1, col2, self.shape.cols
            )));
        }
        let cols = self.shape.cols as usize;
        let data = self.as_mut_slice();
        for row in 0..data.len() / cols.max(1) {
            data.swap(row * cols + col1 as usize, row * cols + col2 as usize);
        }
        Ok(self)
    }

    pub fn map<U: Dtype, F>(&self, f: F) -> NdArray<U>
    where
        F: FnMut(&T) -> U,
    {
        NdArray::from_parts(self.shape, self.iter().map(f).collect())
    }

    /// Elementwise combination of two arrays of identical shape.
    pub fn zip_map<U: Dtype, V: Dtype, F>(&self, other: &NdArray<U>, op: &str, mut f: F) -> Result<NdArray<V>>
    where
        F: FnMut(T, U) -> V,
    {
        crate::error::ensure_same_shape(op, self.shape, other.shape)?;
        Ok(NdArray::from_parts(
            self.shape,
            self.iter().zip(other.iter()).map(|(a, b)| f(*a, *b)).collect(),
        ))
    }

    /// Row-major indices of the nonzero elements.
    pub fn flatnonzero(&self) -> NdArray<u32> {
        self.iter()
            .enumerate()
            .filter(|(_, v)| v.is_nonzero())
            .map(|(i, _)| i as u32)
            .collect()
    }

    /// Row and column indices of the nonzero elements.
    pub fn nonzero(&self) -> (NdArray<u32>, NdArray<u32>) {
        let cols = self.shape.cols.max(1);
        let flat = self.flatnonzero();
        let rows = flat.map(|i| i / cols);
        let columns = flat.map(|i| i % cols);
        (rows, columns)
    }
}

impl<T: Numeric> NdArray<T> {
    pub fn zeros(&mut self) -> &mut Self {
        self.fill(T::zero())
    }

    pub fn ones(&mut self) -> &mut Self {
        self.fill(T::one())
    }

    /// Converts every element to another numeric type (`as` cast semantics).
    pub fn astype<U: Numeric>(&self) -> NdArray<U> {
        let mut out = self.map(|&v| num_traits::cast::<T, U>(v).unwrap_or_else(|| U::from_f64(v.as_f64())));
        out.endianness = self.endianness;
        out
    }
}

impl<T: Float> NdArray<T> {
    pub fn nans(&mut self) -> &mut Self {
        self.fill(T::nan())
    }
}

impl<T: Dtype> PartialEq for NdArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.as_slice() == other.as_slice()
    }
}

impl<T: Dtype> std::fmt::Debug for NdArray<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NdArray")
            .field("shape", &self.shape)
            .field("endianness", &self.endianness)
            .field("owns_data", &self.owns_data())
            .field("data", &self.as_slice())
            .finish()
    }
}

impl<T: Dtype> Index<i32> for NdArray<T> {
    type Output = T;

    /// Unchecked flat access: negative indices wrap once, anything still out
    /// of range panics.
    fn index(&self, index: i32) -> &Self::Output {
        let offset = self.wrap_flat(index);
        &self.as_slice()[offset]
    }
}

impl<T: Dtype> IndexMut<i32> for NdArray<T> {
    fn index_mut(&mut self, index: i32) -> &mut Self::Output {
        let offset = self.wrap_flat(index);
        &mut self.as_mut_slice()[offset]
    }
}

impl<T: Dtype> Index<(i32, i32)> for NdArray<T> {
    type Output = T;

    fn index(&self, index: (i32, i32)) -> &Self::Output {
        let offset = self.wrap_2d(index.0, index.1);
        &self.as_slice()[offset]
    }
}

impl<T: Dtype> IndexMut<(i32, i32)> for NdArray<T> {
    fn index_mut(&mut self, index: (i32, i32)) -> &mut Self::Output {
        let offset = self.wrap_2d(index.0, index.1);
        &mut self.as_mut_slice()[offset]
    }
}

impl<T: Dtype> From<Vec<T>> for NdArray<T> {
    fn from(value: Vec<T>) -> Self {
        NdArray::from_vec(value)
    }
}

impl<T: Dtype, const N: usize> From<[T; N]> for NdArray<T> {
    fn from(value: [T; N]) -> Self {
        NdArray::from_vec(value.to_vec())
    }
}

impl<T: Dtype, const R: usize, const C: usize> From<[[T; C]; R]> for NdArray<T> {
    fn from(value: [[T; C]; R]) -> Self {
        let data: Vec<T> = value.iter().flat_map(|row| row.iter().copied()).collect();
        if data.is_empty() {
            return NdArray::default();
        }
        NdArray::from_parts(Shape::new(R as u32, C as u32), data)
    }
}

impl<T: Dtype> From<NdArray<T>> for Vec<T> {
    fn from(value: NdArray<T>) -> Self {
        match value.buffer {
            Buffer::Owned(data) => data,
            borrowed => borrowed.as_slice().to_vec(),
        }
    }
}

impl<T: Dtype> FromIterator<T> for NdArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        NdArray::from_vec(iter.into_iter().collect())
    }
}

impl<'a, T: Dtype> IntoIterator for &'a NdArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
