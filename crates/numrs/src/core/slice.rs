use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A `start:stop:step` range over one axis.
///
/// Slices are stored in raw form (negative values count from the end) so the
/// same slice can be applied to axes of different lengths. Call
/// [`Slice::normalize`] against a concrete length before iterating.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slice {
    pub start: i32,
    pub stop: i32,
    pub step: i32,
}

impl Default for Slice {
    fn default() -> Self {
        Self {
            start: 0,
            stop: 1,
            step: 1,
        }
    }
}

impl Slice {
    pub const fn new(start: i32, stop: i32, step: i32) -> Self {
        Self { start, stop, step }
    }

    /// `[0:stop:1]`
    pub const fn to(stop: i32) -> Self {
        Self::new(0, stop, 1)
    }

    /// `[start:stop:1]`
    pub const fn range(start: i32, stop: i32) -> Self {
        Self::new(start, stop, 1)
    }

    /// Every element of an axis of length `len`.
    pub fn all(len: u32) -> Self {
        Self::new(0, len as i32, 1)
    }

    /// Resolves negative bounds against `len`, clamps both bounds into
    /// `[0, len]` and validates the step direction.
    ///
    /// A negative step with `stop < start` is rewritten as the equivalent
    /// ascending range, so afterwards `0 <= start <= stop <= len` and
    /// `step > 0` always hold.
    pub fn normalize(&mut self, len: u32) -> Result<()> {
        if self.step == 0 {
            return Err(Error::invalid("slice step cannot be zero"));
        }

        let len = i64::from(len);
        let resolve = |value: i32| -> i64 {
            let value = i64::from(value);
            let value = if value < 0 { value + len } else { value };
            value.clamp(0, len)
        };

        let mut start = resolve(self.start);
        let mut stop = resolve(self.stop);
        let mut step = self.step;

        if start < stop && step < 0 {
            return Err(Error::invalid(format!(
                "invalid slice values {} for array of size {}",
                self, len
            )));
        }
        if stop < start {
            if step > 0 {
                return Err(Error::invalid(format!(
                    "invalid slice values {} for array of size {}",
                    self, len
                )));
            }
            std::mem::swap(&mut start, &mut stop);
            step = -step;
        }

        self.start = start as i32;
        self.stop = stop as i32;
        self.step = step;
        Ok(())
    }

    /// Number of elements the slice selects on an axis of length `len`.
    pub fn num_elements(&self, len: u32) -> Result<u32> {
        Ok(self.indices(len)?.len() as u32)
    }

    /// The offsets selected on an axis of length `len`, in slice order.
    pub fn indices(&self, len: u32) -> Result<Vec<u32>> {
        let mut normalized = *self;
        normalized.normalize(len)?;
        Ok((normalized.start..normalized.stop)
            .step_by(normalized.step as usize)
            .map(|i| i as u32)
            .collect())
    }
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}:{}]", self.start, self.stop, self.step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_bounds_resolve_from_the_end() {
        let mut s = Slice::new(-3, -1, 1);
        s.normalize(5).unwrap();
        assert_eq!(s, Slice::new(2, 4, 1));
    }

    #[test]
    fn bounds_are_clamped() {
        let mut s = Slice::new(-10, 100, 2);
        s.normalize(6).unwrap();
        assert_eq!(s, Slice::new(0, 6, 2));
        assert_eq!(Slice::new(0, 100, 2).indices(6).unwrap(), vec![0, 2, 4]);
    }

    #[test]
    fn zero_step_is_rejected() {
        let mut s = Slice::new(0, 3, 0);
        assert!(s.normalize(3).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn step_direction_must_agree_with_bounds() {
        assert!(Slice::new(0, 3, -1).indices(5).is_err());
        assert!(Slice::new(4, 1, 1).indices(5).is_err());
    }

    #[test]
    fn descending_range_is_canonicalised() {
        let mut s = Slice::new(4, 1, -1);
        s.normalize(5).unwrap();
        assert_eq!(s, Slice::new(1, 4, 1));
    }

    #[test]
    fn raw_slice_is_reusable_across_lengths() {
        let s = Slice::new(-2, 100, 1);
        assert_eq!(s.num_elements(4).unwrap(), 2);
        assert_eq!(s.num_elements(10).unwrap(), 2);
        assert_eq!(s, Slice::new(-2, 100, 1));
    }
}
