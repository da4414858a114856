//! Elementwise math.
//!
//! Each array function applies the scalar function of the same name from
//! [`scalar`] to every element, so both forms always agree.
use crate::core::{Dtype, Float, Numeric};
use crate::error::{Error, Result};
use crate::NdArray;

pub mod scalar {
    use crate::core::{Float, Numeric};

    pub fn sin<T: Float>(value: T) -> T {
        value.sin()
    }

    pub fn cos<T: Float>(value: T) -> T {
        value.cos()
    }

    pub fn tan<T: Float>(value: T) -> T {
        value.tan()
    }

    pub fn asin<T: Float>(value: T) -> T {
        value.asin()
    }

    pub fn acos<T: Float>(value: T) -> T {
        value.acos()
    }

    pub fn atan<T: Float>(value: T) -> T {
        value.atan()
    }

    /// Angle of the point `(x, y)`, quadrant aware.
    pub fn atan2<T: Float>(y: T, x: T) -> T {
        y.atan2(x)
    }

    pub fn sinh<T: Float>(value: T) -> T {
        value.sinh()
    }

    pub fn cosh<T: Float>(value: T) -> T {
        value.cosh()
    }

    pub fn tanh<T: Float>(value: T) -> T {
        value.tanh()
    }

    pub fn asinh<T: Float>(value: T) -> T {
        value.asinh()
    }

    pub fn acosh<T: Float>(value: T) -> T {
        value.acosh()
    }

    pub fn atanh<T: Float>(value: T) -> T {
        value.atanh()
    }

    pub fn exp<T: Float>(value: T) -> T {
        value.exp()
    }

    pub fn exp2<T: Float>(value: T) -> T {
        value.exp2()
    }

    /// `exp(value) - 1`, accurate near zero.
    pub fn expm1<T: Float>(value: T) -> T {
        value.exp_m1()
    }

    /// Natural logarithm.
    pub fn log<T: Float>(value: T) -> T {
        value.ln()
    }

    pub fn log2<T: Float>(value: T) -> T {
        value.log2()
    }

    pub fn log10<T: Float>(value: T) -> T {
        value.log10()
    }

    /// `ln(1 + value)`, accurate near zero.
    pub fn log1p<T: Float>(value: T) -> T {
        value.ln_1p()
    }

    pub fn sqrt<T: Float>(value: T) -> T {
        value.sqrt()
    }

    pub fn cbrt<T: Float>(value: T) -> T {
        value.cbrt()
    }

    pub fn square<T: Numeric>(value: T) -> T {
        value * value
    }

    pub fn power<T: Numeric>(value: T, exponent: u32) -> T {
        num_traits::pow(value, exponent as usize)
    }

    pub fn abs<T: Numeric>(value: T) -> T {
        if value < T::zero() {
            T::zero() - value
        } else {
            value
        }
    }

    /// `-1`, `0` or `1`; NaN maps to `0`.
    pub fn sign<T: Numeric>(value: T) -> i8 {
        if value < T::zero() {
            -1
        } else if value > T::zero() {
            1
        } else {
            0
        }
    }

    pub fn floor<T: Float>(value: T) -> T {
        value.floor()
    }

    pub fn ceil<T: Float>(value: T) -> T {
        value.ceil()
    }

    pub fn trunc<T: Float>(value: T) -> T {
        value.trunc()
    }

    /// Rounds towards zero.
    pub fn fix<T: Float>(value: T) -> T {
        if value > T::zero() {
            value.floor()
        } else {
            value.ceil()
        }
    }

    /// Rounds to the nearest integer, ties to even.
    pub fn rint<T: Float>(value: T) -> T {
        let floor = value.floor();
        let half = T::from_f64(0.5);
        let diff = value - floor;
        let two = T::one() + T::one();
        if diff < half {
            floor
        } else if diff > half || (floor / two).floor() * two != floor {
            floor + T::one()
        } else {
            floor
        }
    }

    /// Rounds half away from zero to `decimals` digits after the point.
    pub fn round<T: Float>(value: T, decimals: u8) -> T {
        let factor = T::from_f64(10f64.powi(i32::from(decimals)));
        (value * factor).round() / factor
    }

    /// Limits `value` to `[min, max]`.
    pub fn clip<T: Numeric>(value: T, min: T, max: T) -> T {
        if value < min {
            min
        } else if value > max {
            max
        } else {
            value
        }
    }

    pub fn deg2rad<T: Float>(value: T) -> T {
        value.to_radians()
    }

    pub fn rad2deg<T: Float>(value: T) -> T {
        value.to_degrees()
    }

    pub fn hypot<T: Float>(a: T, b: T) -> T {
        a.hypot(b)
    }

    pub fn reciprocal<T: Float>(value: T) -> T {
        value.recip()
    }

    pub fn isnan<T: Float>(value: T) -> bool {
        value.is_nan()
    }

    pub fn isinf<T: Float>(value: T) -> bool {
        value.is_infinite()
    }

    pub fn isfinite<T: Float>(value: T) -> bool {
        value.is_finite()
    }

    /// Smaller of the two; a NaN operand propagates.
    pub fn minimum<T: Numeric>(a: T, b: T) -> T {
        if a.is_nan_value() || a < b {
            a
        } else {
            b
        }
    }

    /// Larger of the two; a NaN operand propagates.
    pub fn maximum<T: Numeric>(a: T, b: T) -> T {
        if a.is_nan_value() || a > b {
            a
        } else {
            b
        }
    }

    /// Smaller of the two, ignoring a NaN operand.
    pub fn fmin<T: Float>(a: T, b: T) -> T {
        a.min(b)
    }

    /// Larger of the two, ignoring a NaN operand.
    pub fn fmax<T: Float>(a: T, b: T) -> T {
        a.max(b)
    }

    /// Remainder of `a / b` with the sign of `a`.
    pub fn fmod<T: Numeric>(a: T, b: T) -> T {
        a % b
    }
}

macro_rules! lift_unary {
    ($bound:ident => $($name:ident),* $(,)?) => {
        $(
            pub fn $name<T: $bound>(array: &NdArray<T>) -> NdArray<T> {
                array.map(|&v| scalar::$name(v))
            }
        )*
    };
}

lift_unary!(Float => sin, cos, tan, asin, acos, atan, sinh, cosh, tanh, asinh, acosh, atanh);
lift_unary!(Float => exp, exp2, expm1, log, log2, log10, log1p, sqrt, cbrt);
lift_unary!(Float => floor, ceil, trunc, fix, rint, deg2rad, rad2deg, reciprocal);
lift_unary!(Numeric => square, abs);

macro_rules! lift_predicate {
    ($($name:ident),* $(,)?) => {
        $(
            pub fn $name<T: Float>(array: &NdArray<T>) -> NdArray<bool> {
                array.map(|&v| scalar::$name(v))
            }
        )*
    };
}

lift_predicate!(isnan, isinf, isfinite);

pub fn atan2<T: Float>(y: &NdArray<T>, x: &NdArray<T>) -> Result<NdArray<T>> {
    y.zip_map(x, "atan2", scalar::atan2)
}

pub fn hypot<T: Float>(a: &NdArray<T>, b: &NdArray<T>) -> Result<NdArray<T>> {
    a.zip_map(b, "hypot", scalar::hypot)
}

/// Applies `f` pairwise. Shapes must match, except that a single-element
/// operand is broadcast against the other.
fn broadcast_with<T: Dtype, F>(a: &NdArray<T>, b: &NdArray<T>, op: &str, mut f: F) -> Result<NdArray<T>>
where
    F: FnMut(T, T) -> T,
{
    if a.shape() == b.shape() {
        return a.zip_map(b, op, f);
    }
    if b.is_scalar() {
        let rhs = b.as_slice()[0];
        return Ok(a.map(|&v| f(v, rhs)));
    }
    if a.is_scalar() {
        let lhs = a.as_slice()[0];
        return Ok(b.map(|&v| f(lhs, v)));
    }
    Err(Error::invalid(format!(
        "{}: operands of shape {} and {} could not be broadcast together",
        op,
        a.shape(),
        b.shape()
    )))
}

pub fn minimum<T: Numeric>(a: &NdArray<T>, b: &NdArray<T>) -> Result<NdArray<T>> {
    broadcast_with(a, b, "minimum", scalar::minimum)
}

pub fn maximum<T: Numeric>(a: &NdArray<T>, b: &NdArray<T>) -> Result<NdArray<T>> {
    broadcast_with(a, b, "maximum", scalar::maximum)
}

pub fn fmin<T: Float>(a: &NdArray<T>, b: &NdArray<T>) -> Result<NdArray<T>> {
    broadcast_with(a, b, "fmin", scalar::fmin)
}

pub fn fmax<T: Float>(a: &NdArray<T>, b: &NdArray<T>) -> Result<NdArray<T>> {
    broadcast_with(a, b, "fmax", scalar::fmax)
}

/// Elementwise remainder; an integer divisor of zero panics like `%`.
pub fn fmod<T: Numeric>(a: &NdArray<T>, b: &NdArray<T>) -> Result<NdArray<T>> {
    broadcast_with(a, b, "fmod", scalar::fmod)
}

pub fn power<T: Numeric>(array: &NdArray<T>, exponent: u32) -> NdArray<T> {
    array.map(|&v| scalar::power(v, exponent))
}

pub fn sign<T: Numeric>(array: &NdArray<T>) -> NdArray<i8> {
    array.map(|&v| scalar::sign(v))
}

pub fn round<T: Float>(array: &NdArray<T>, decimals: u8) -> NdArray<T> {
    array.map(|&v| scalar::round(v, decimals))
}

pub fn clip<T: Numeric>(array: &NdArray<T>, min: T, max: T) -> NdArray<T> {
    array.map(|&v| scalar::clip(v, min, max))
}

impl<T: Float> NdArray<T> {
    /// Rounds every element in place to `decimals` digits.
    pub fn round_to(&mut self, decimals: u8) -> &mut Self {
        for value in self.iter_mut() {
            *value = scalar::round(*value, decimals);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rint_rounds_half_to_even() {
        assert_eq!(scalar::rint(0.5f64), 0.0);
        assert_eq!(scalar::rint(1.5f64), 2.0);
        assert_eq!(scalar::rint(2.5f64), 2.0);
        assert_eq!(scalar::rint(-1.5f64), -2.0);
        assert_eq!(scalar::rint(2.4f32), 2.0);
    }

    #[test]
    fn array_form_matches_scalar_form() {
        let array = NdArray::from_vec(vec![-1.25f64, 0.0, 2.75]);
        let lifted = fix(&array);
        for (value, out) in array.iter().zip(lifted.iter()) {
            assert_eq!(scalar::fix(*value), *out);
        }
        assert_eq!(sign(&array).to_vec(), vec![-1, 0, 1]);
        assert_eq!(round(&array, 1).to_vec(), vec![-1.3, 0.0, 2.8]);
    }
}
