use std::fmt;

use serde::{Deserialize, Serialize};

/// Row/column extent of an array.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    pub rows: u32,
    pub cols: u32,
}

impl Shape {
    pub const fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    pub const fn square(n: u32) -> Self {
        Self { rows: n, cols: n }
    }

    /// `(0, 0)` marks a shape that has not been determined yet, e.g. while
    /// accumulating the output shape of a stack.
    pub fn is_null(&self) -> bool {
        self.rows == 0 && self.cols == 0
    }

    pub fn size(&self) -> u32 {
        self.rows * self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn transposed(&self) -> Shape {
        Shape::new(self.cols, self.rows)
    }
}

impl From<(u32, u32)> for Shape {
    fn from(value: (u32, u32)) -> Self {
        Shape::new(value.0, value.1)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.rows, self.cols)
    }
}
