use std::error::Error as StdError;
use std::fmt;
use std::path::Path;

/// Error raised by array operations.
///
/// Every fallible operation returns this to its direct caller; nothing in the
/// crate retries or recovers from a failure internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Bad input: mismatched shapes, out of range indices or slices,
    /// unknown option strings, percentile bounds, ragged rows.
    InvalidArgument(String),
    /// Internal invariant violations (reshape size mismatch) and I/O failures.
    Runtime(String),
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    pub(crate) fn runtime(msg: impl Into<String>) -> Self {
        Error::Runtime(msg.into())
    }

    pub(crate) fn io(path: &Path, err: std::io::Error) -> Self {
        Error::Runtime(format!("i/o error on {}: {}", path.display(), err))
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    pub fn is_runtime(&self) -> bool {
        matches!(self, Error::Runtime(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Error::InvalidArgument(msg) | Error::Runtime(msg) => msg,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            Error::Runtime(msg) => write!(f, "runtime error: {}", msg),
        }
    }
}

impl StdError for Error {}

pub type Result<T> = std::result::Result<T, Error>;

/// Fails with `InvalidArgument` unless both shapes are identical.
pub(crate) fn ensure_same_shape(
    op: &str,
    lhs: crate::Shape,
    rhs: crate::Shape,
) -> Result<()> {
    if lhs != rhs {
        return Err(Error::invalid(format!(
            "{}: array shapes {} and {} do not match",
            op, lhs, rhs
        )));
    }
    Ok(())
}
