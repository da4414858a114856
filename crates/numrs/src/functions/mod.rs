//! Free functions over [`NdArray`](crate::NdArray).
//!
//! Elementwise math functions come in two forms: the scalar form in
//! [`math::scalar`] and an array form that applies it to every element.
pub mod creation;
pub mod io;
pub mod logic;
pub mod manipulation;
pub mod math;
pub mod nan;
pub mod set_ops;
pub mod stacking;
pub mod stats;

pub use creation::*;
pub use io::*;
pub use logic::*;
pub use manipulation::*;
pub use math::*;
pub use nan::*;
pub use set_ops::*;
pub use stacking::*;
pub use stats::*;
