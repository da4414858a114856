//! Value types shared by the container and the function layer.
pub mod dtype;
pub mod enums;
pub mod shape;
pub mod slice;

pub use dtype::{Dtype, Float, Integer, Numeric};
pub use enums::{Axis, Endian, InterpolationMethod, Side};
pub use shape::Shape;
pub use slice::Slice;
