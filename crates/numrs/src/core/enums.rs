use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Axis selector for reductions and shape operations.
///
/// `Col` collapses the column dimension (one result per row), `Row`
/// collapses the row dimension (one result per column).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    #[default]
    None,
    Row,
    Col,
}

impl FromStr for Axis {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Axis::None),
            "row" => Ok(Axis::Row),
            "col" | "column" => Ok(Axis::Col),
            _ => Err(Error::invalid(format!(
                "unknown axis '{}'. Valid options are 'none', 'row', 'col'",
                s
            ))),
        }
    }
}

/// Byte order metadata carried by an array. Storage is only reinterpreted
/// when explicitly requested through `newbyteorder`/`byteswap`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endian {
    #[default]
    Native,
    Big,
    Little,
}

impl Endian {
    pub fn host() -> Endian {
        if cfg!(target_endian = "little") {
            Endian::Little
        } else {
            Endian::Big
        }
    }

    /// Resolves `Native` to the concrete order of the host.
    pub fn resolve(self) -> Endian {
        match self {
            Endian::Native => Endian::host(),
            other => other,
        }
    }
}

/// Which end of a run of equal values `searchsorted` reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// First position where the value could be inserted.
    #[default]
    Left,
    /// Last position where the value could be inserted.
    Right,
}

impl FromStr for Side {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Side::Left),
            "right" => Ok(Side::Right),
            _ => Err(Error::invalid(format!(
                "unknown side '{}'. Valid options are 'left', 'right'",
                s
            ))),
        }
    }
}

/// How `percentile` picks a value between the two bracketing order
/// statistics `i` and `j`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpolationMethod {
    /// `i + (j - i) * fraction`
    #[default]
    Linear,
    Lower,
    Higher,
    /// `i` or `j`, whichever is closer; ties go to `i`.
    Nearest,
    /// `(i + j) / 2`
    Midpoint,
}

impl FromStr for InterpolationMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(InterpolationMethod::Linear),
            "lower" => Ok(InterpolationMethod::Lower),
            "higher" => Ok(InterpolationMethod::Higher),
            "nearest" => Ok(InterpolationMethod::Nearest),
            "midpoint" => Ok(InterpolationMethod::Midpoint),
            _ => Err(Error::invalid(format!(
                "input interpolation method '{}' is not a valid option. \
                 Valid options are 'linear', 'lower', 'higher', 'nearest', 'midpoint'",
                s
            ))),
        }
    }
}

impl fmt::Display for InterpolationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InterpolationMethod::Linear => "linear",
            InterpolationMethod::Lower => "lower",
            InterpolationMethod::Higher => "higher",
            InterpolationMethod::Nearest => "nearest",
            InterpolationMethod::Midpoint => "midpoint",
        };
        f.write_str(name)
    }
}
