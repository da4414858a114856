use crate::core::{Dtype, Numeric};
use crate::error::{ensure_same_shape, Result};
use crate::NdArray;

/// Picks from `x` where `condition` is true and from `y` elsewhere. All
/// three arrays must have the same shape.
pub fn where_<T: Dtype>(condition: &NdArray<bool>, x: &NdArray<T>, y: &NdArray<T>) -> Result<NdArray<T>> {
    ensure_same_shape("where", condition.shape(), x.shape())?;
    ensure_same_shape("where", x.shape(), y.shape())?;
    let data: Vec<T> = condition
        .iter()
        .zip(x.iter().zip(y.iter()))
        .map(|(&keep, (&a, &b))| if keep { a } else { b })
        .collect();
    NdArray::from_shape_vec(x.shape(), data)
}

/// `|a - b| <= atol + rtol * |b|`, elementwise.
pub fn isclose<T: Numeric>(a: &NdArray<T>, b: &NdArray<T>, rtol: f64, atol: f64) -> Result<NdArray<bool>> {
    a.zip_map(b, "isclose", |x, y| {
        let (x, y) = (x.as_f64(), y.as_f64());
        (x - y).abs() <= atol + rtol * y.abs()
    })
}

pub fn allclose<T: Numeric>(a: &NdArray<T>, b: &NdArray<T>, rtol: f64, atol: f64) -> Result<bool> {
    Ok(isclose(a, b, rtol, atol)?.iter().all(|&close| close))
}

/// Same shape and same elements.
pub fn array_equal<T: Dtype>(a: &NdArray<T>, b: &NdArray<T>) -> bool {
    a == b
}

/// Inner product of two flat arrays or matrix product of two 2D arrays.
pub fn dot<T: Numeric>(a: &NdArray<T>, b: &NdArray<T>) -> Result<NdArray<T>> {
    a.dot(b)
}
