//! Elementwise operators.
//!
//! Array/array operators need identical shapes and therefore return
//! `Result<NdArray<T>>`; array/scalar operators cannot fail and return the
//! array directly. Integer division by zero panics like the scalar operator.
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, Shr, Sub, SubAssign,
};

use num_traits::ToPrimitive;

use crate::core::{Dtype, Integer, Numeric};
use crate::error::Result;

use super::NdArray;

macro_rules! impl_binary_op {
    ($bound:ident, $trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $inplace:ident) => {
        impl<'a, T: $bound> $trait<&'a NdArray<T>> for &'a NdArray<T> {
            type Output = Result<NdArray<T>>;

            fn $method(self, rhs: &'a NdArray<T>) -> Self::Output {
                self.zip_map(rhs, stringify!($method), |a, b| $trait::$method(a, b))
            }
        }

        impl<T: $bound> $trait<NdArray<T>> for NdArray<T> {
            type Output = Result<NdArray<T>>;

            fn $method(self, rhs: NdArray<T>) -> Self::Output {
                $trait::$method(&self, &rhs)
            }
        }

        impl<T: $bound> $trait<T> for &NdArray<T> {
            type Output = NdArray<T>;

            fn $method(self, rhs: T) -> Self::Output {
                let mut out = self.map(|&a| $trait::$method(a, rhs));
                out.endianness = self.endianness;
                out
            }
        }

        impl<T: $bound> $trait<T> for NdArray<T> {
            type Output = NdArray<T>;

            fn $method(mut self, rhs: T) -> Self::Output {
                $assign_trait::$assign_method(&mut self, rhs);
                self
            }
        }

        impl<T: $bound> $assign_trait<T> for NdArray<T> {
            fn $assign_method(&mut self, rhs: T) {
                for value in self.iter_mut() {
                    *value = $trait::$method(*value, rhs);
                }
            }
        }

        impl<T: $bound> NdArray<T> {
            /// In-place elementwise form of the binary operator; shapes must
            /// match.
            pub fn $inplace(&mut self, rhs: &NdArray<T>) -> Result<&mut Self> {
                crate::error::ensure_same_shape(stringify!($inplace), self.shape(), rhs.shape())?;
                for (value, &other) in self.iter_mut().zip(rhs.iter()) {
                    *value = $trait::$method(*value, other);
                }
                Ok(self)
            }
        }
    };
}

impl_binary_op!(Numeric, Add, add, AddAssign, add_assign, add_inplace);
impl_binary_op!(Numeric, Sub, sub, SubAssign, sub_assign, sub_inplace);
impl_binary_op!(Numeric, Mul, mul, MulAssign, mul_assign, mul_inplace);
impl_binary_op!(Numeric, Div, div, DivAssign, div_assign, div_inplace);
impl_binary_op!(Integer, Rem, rem, RemAssign, rem_assign, rem_inplace);
impl_binary_op!(Integer, BitAnd, bitand, BitAndAssign, bitand_assign, bitand_inplace);
impl_binary_op!(Integer, BitOr, bitor, BitOrAssign, bitor_assign, bitor_inplace);
impl_binary_op!(Integer, BitXor, bitxor, BitXorAssign, bitxor_assign, bitxor_inplace);

macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {
        $(
            impl Add<&NdArray<$t>> for $t {
                type Output = NdArray<$t>;

                fn add(self, rhs: &NdArray<$t>) -> NdArray<$t> {
                    rhs.map(|&v| self + v)
                }
            }

            impl Sub<&NdArray<$t>> for $t {
                type Output = NdArray<$t>;

                fn sub(self, rhs: &NdArray<$t>) -> NdArray<$t> {
                    rhs.map(|&v| self - v)
                }
            }

            impl Mul<&NdArray<$t>> for $t {
                type Output = NdArray<$t>;

                fn mul(self, rhs: &NdArray<$t>) -> NdArray<$t> {
                    rhs.map(|&v| self * v)
                }
            }

            impl Div<&NdArray<$t>> for $t {
                type Output = NdArray<$t>;

                fn div(self, rhs: &NdArray<$t>) -> NdArray<$t> {
                    rhs.map(|&v| self / v)
                }
            }
        )*
    };
}

impl_scalar_lhs!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

/// Shift distance for `T`: wraps modulo the bit width like `wrapping_shl`,
/// so no shift overflows. Negative distances wrap the same way.
fn shift_distance<T: Integer>(bits: T) -> usize {
    let raw = bits
        .to_u64()
        .or_else(|| bits.to_i64().map(|b| b as u64))
        .unwrap_or(0);
    (raw % (T::BYTES as u64 * 8)) as usize
}

impl<T: Integer> Shl<u32> for &NdArray<T> {
    type Output = NdArray<T>;

    fn shl(self, bits: u32) -> NdArray<T> {
        let distance = bits as usize % (T::BYTES * 8);
        self.map(|&v| v << distance)
    }
}

impl<T: Integer> Shr<u32> for &NdArray<T> {
    type Output = NdArray<T>;

    fn shr(self, bits: u32) -> NdArray<T> {
        let distance = bits as usize % (T::BYTES * 8);
        self.map(|&v| v >> distance)
    }
}

impl<'a, T: Integer> Shl<&'a NdArray<T>> for &'a NdArray<T> {
    type Output = Result<NdArray<T>>;

    fn shl(self, bits: &'a NdArray<T>) -> Self::Output {
        self.zip_map(bits, "shl", |v, b| v << shift_distance(b))
    }
}

impl<'a, T: Integer> Shr<&'a NdArray<T>> for &'a NdArray<T> {
    type Output = Result<NdArray<T>>;

    fn shr(self, bits: &'a NdArray<T>) -> Self::Output {
        self.zip_map(bits, "shr", |v, b| v >> shift_distance(b))
    }
}

impl<T: Integer> Not for &NdArray<T> {
    type Output = NdArray<T>;

    fn not(self) -> NdArray<T> {
        self.map(|&v| !v)
    }
}

impl<T: Numeric + Neg<Output = T>> Neg for &NdArray<T> {
    type Output = NdArray<T>;

    fn neg(self) -> NdArray<T> {
        self.map(|&v| -v)
    }
}

impl<T: Numeric + Neg<Output = T>> Neg for NdArray<T> {
    type Output = NdArray<T>;

    fn neg(self) -> NdArray<T> {
        -&self
    }
}

macro_rules! impl_comparison {
    ($($name:ident, $scalar_name:ident, $op:tt;)*) => {
        impl<T: Dtype> NdArray<T> {
            $(
                pub fn $name(&self, other: &NdArray<T>) -> Result<NdArray<bool>> {
                    self.zip_map(other, stringify!($name), |a, b| a $op b)
                }

                pub fn $scalar_name(&self, value: T) -> NdArray<bool> {
                    self.map(|&a| a $op value)
                }
            )*
        }
    };
}

impl_comparison! {
    equal, equal_scalar, ==;
    not_equal, not_equal_scalar, !=;
    less, less_scalar, <;
    less_equal, less_equal_scalar, <=;
    greater, greater_scalar, >;
    greater_equal, greater_equal_scalar, >=;
}

impl<T: Dtype> NdArray<T> {
    /// Truth value of `self && other`, elementwise.
    pub fn logical_and(&self, other: &NdArray<T>) -> Result<NdArray<bool>> {
        self.zip_map(other, "logical_and", |a, b| a.is_nonzero() && b.is_nonzero())
    }

    pub fn logical_or(&self, other: &NdArray<T>) -> Result<NdArray<bool>> {
        self.zip_map(other, "logical_or", |a, b| a.is_nonzero() || b.is_nonzero())
    }

    pub fn logical_xor(&self, other: &NdArray<T>) -> Result<NdArray<bool>> {
        self.zip_map(other, "logical_xor", |a, b| a.is_nonzero() != b.is_nonzero())
    }

    pub fn logical_not(&self) -> NdArray<bool> {
        self.map(|a| !a.is_nonzero())
    }
}
