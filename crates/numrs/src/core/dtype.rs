//! Element type categories.
//!
//! Operations that only make sense for one category of element (bitwise
//! operators for integers, NaN handling for floats) are implemented under the
//! matching trait bound, so using them with the wrong element type fails to
//! compile instead of failing at runtime.
use std::cmp::Ordering;
use std::fmt;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};
use std::str::FromStr;

use num_traits::{Bounded, Num, NumCast, PrimInt};

mod private {
    pub trait Sealed {}
}

/// Any type that can be stored in an [`NdArray`](crate::NdArray).
pub trait Dtype:
    Copy + Default + PartialEq + PartialOrd + fmt::Debug + fmt::Display + private::Sealed + 'static
{
    /// Name used in messages and by the CLI `--dtype` flag.
    const NAME: &'static str;

    fn is_nonzero(&self) -> bool;

    /// Text form used when printing arrays. `precision` only affects
    /// floating point types.
    fn format_value(&self, precision: usize) -> String {
        let _ = precision;
        self.to_string()
    }

    /// `true` only for floating point NaN.
    #[allow(clippy::eq_op)]
    fn is_nan_value(&self) -> bool {
        self != self
    }
}

/// Integer and floating point element types.
pub trait Numeric:
    Dtype
    + Num
    + NumCast
    + Bounded
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + FromStr
{
    /// Size of one element in a binary dump.
    const BYTES: usize;

    fn as_f64(self) -> f64;

    /// Saturating conversion back from `f64` (`as` cast semantics).
    fn from_f64(value: f64) -> Self;

    fn write_ne_bytes(self, out: &mut Vec<u8>);

    /// Reads one element from exactly [`Self::BYTES`] native-endian bytes.
    fn read_ne_bytes(bytes: &[u8]) -> Self;

    /// Addition used by accumulating reductions. Integers wrap around on
    /// overflow, floats add normally.
    fn accumulate_add(self, rhs: Self) -> Self;

    /// Multiplication used by accumulating reductions, wrapping like
    /// [`Numeric::accumulate_add`].
    fn accumulate_mul(self, rhs: Self) -> Self;
}

/// Integer element types: bitwise operators, `%` and byte swapping.
pub trait Integer: Numeric + PrimInt {}

/// Floating point element types: NaN handling, rounding and transcendental
/// functions.
pub trait Float: Numeric + num_traits::Float {}

impl private::Sealed for bool {}

impl Dtype for bool {
    const NAME: &'static str = "bool";

    fn is_nonzero(&self) -> bool {
        *self
    }
}

macro_rules! impl_numeric {
    ($($t:ty => $add:expr, $mul:expr;)*) => {
        $(
            impl private::Sealed for $t {}

            impl Dtype for $t {
                const NAME: &'static str = stringify!($t);

                fn is_nonzero(&self) -> bool {
                    *self != (0 as $t)
                }

                fn format_value(&self, precision: usize) -> String {
                    format!("{:.*}", precision, self)
                }
            }

            impl Numeric for $t {
                const BYTES: usize = std::mem::size_of::<$t>();

                fn as_f64(self) -> f64 {
                    self as f64
                }

                fn from_f64(value: f64) -> Self {
                    value as $t
                }

                fn write_ne_bytes(self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.to_ne_bytes());
                }

                fn read_ne_bytes(bytes: &[u8]) -> Self {
                    let mut raw = [0u8; std::mem::size_of::<$t>()];
                    raw.copy_from_slice(&bytes[..std::mem::size_of::<$t>()]);
                    <$t>::from_ne_bytes(raw)
                }

                fn accumulate_add(self, rhs: Self) -> Self {
                    ($add)(self, rhs)
                }

                fn accumulate_mul(self, rhs: Self) -> Self {
                    ($mul)(self, rhs)
                }
            }
        )*
    };
}

impl_numeric! {
    i8 => i8::wrapping_add, i8::wrapping_mul;
    i16 => i16::wrapping_add, i16::wrapping_mul;
    i32 => i32::wrapping_add, i32::wrapping_mul;
    i64 => i64::wrapping_add, i64::wrapping_mul;
    u8 => u8::wrapping_add, u8::wrapping_mul;
    u16 => u16::wrapping_add, u16::wrapping_mul;
    u32 => u32::wrapping_add, u32::wrapping_mul;
    u64 => u64::wrapping_add, u64::wrapping_mul;
    f32 => <f32 as std::ops::Add>::add, <f32 as std::ops::Mul>::mul;
    f64 => <f64 as std::ops::Add>::add, <f64 as std::ops::Mul>::mul;
}

impl Integer for i8 {}
impl Integer for i16 {}
impl Integer for i32 {}
impl Integer for i64 {}
impl Integer for u8 {}
impl Integer for u16 {}
impl Integer for u32 {}
impl Integer for u64 {}

impl Float for f32 {}
impl Float for f64 {}

/// Total order over partially ordered values: NaN sorts after everything
/// and equal to itself.
pub(crate) fn total_order<T: PartialOrd>(lhs: &T, rhs: &T) -> Ordering {
    match lhs.partial_cmp(rhs) {
        Some(ordering) => ordering,
        None => {
            #[allow(clippy::eq_op)]
            let lhs_nan = lhs != lhs;
            #[allow(clippy::eq_op)]
            let rhs_nan = rhs != rhs;
            lhs_nan.cmp(&rhs_nan)
        }
    }
}
