//! `numrs`: 1D/2D numeric arrays with NumPy-like semantics.
//!
//! The crate is built around [`NdArray`], a row-major container that either
//! owns its buffer or borrows caller-managed memory. On top of it sit
//! axis-aware reductions (see [`Axis`]), elementwise operators, and a
//! free-function layer in [`functions`] (creation, math, statistics, NaN
//! aware variants, set operations, stacking and file I/O).
//!
//! ```
//! use numrs::{Axis, NdArray};
//!
//! let a = NdArray::from([[1, 2, 3], [4, 5, 6]]);
//! assert_eq!(a.sum(Axis::Col).to_vec(), vec![6, 15]);
//! assert_eq!(a.sum(Axis::Row).to_vec(), vec![5, 7, 9]);
//! ```
pub mod config;
pub mod core;
pub mod error;
pub mod functions;
pub mod ndarray;

pub use crate::config::{load_print_options, PrintOptions};
pub use crate::core::{Axis, Dtype, Endian, Float, Integer, InterpolationMethod, Numeric, Shape, Side, Slice};
pub use crate::error::{Error, Result};
pub use crate::functions::*;
pub use crate::ndarray::NdArray;
