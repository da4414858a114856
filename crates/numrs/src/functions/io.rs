use std::path::Path;

use log::{debug, warn};

use crate::core::Numeric;
use crate::error::{Error, Result};
use crate::ndarray::io::TEXT_SEPARATORS;
use crate::NdArray;

/// Reads a file written by [`NdArray::dump`] as a flat `1 x n` array. The
/// element type must match the one that was dumped.
pub fn load<T: Numeric, P: AsRef<Path>>(path: P) -> Result<NdArray<T>> {
    fromfile(path, "")
}

/// Reads a binary dump (`sep == ""`) or a text file whose values are
/// separated by `" "`, `"\t"` or `"\n"`.
///
/// Text tokens that do not parse as numbers are skipped with a warning.
pub fn fromfile<T: Numeric, P: AsRef<Path>>(path: P, sep: &str) -> Result<NdArray<T>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::invalid(format!(
            "fromfile: input file does not exist: {}",
            path.display()
        )));
    }
    if sep.is_empty() {
        read_binary(path)
    } else if TEXT_SEPARATORS.contains(&sep) {
        read_text(path)
    } else {
        Err(Error::invalid(format!(
            "fromfile: unsupported separator {:?}: only ' ', '\\t' and '\\n' are supported",
            sep
        )))
    }
}

fn read_binary<T: Numeric>(path: &Path) -> Result<NdArray<T>> {
    let bytes = std::fs::read(path).map_err(|e| Error::io(path, e))?;
    if bytes.len() % T::BYTES != 0 {
        return Err(Error::runtime(format!(
            "{} is {} bytes long, not a multiple of the {} byte size of {}",
            path.display(),
            bytes.len(),
            T::BYTES,
            T::NAME
        )));
    }
    debug!("read {} bytes of {} from {}", bytes.len(), T::NAME, path.display());
    Ok(bytes.chunks_exact(T::BYTES).map(T::read_ne_bytes).collect())
}

fn read_text<T: Numeric>(path: &Path) -> Result<NdArray<T>> {
    let contents = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let mut values = Vec::new();
    for token in contents.split_whitespace() {
        match parse_token::<T>(token) {
            Some(value) => values.push(value),
            None => warn!("fromfile: skipping unparsable token {:?} in {}", token, path.display()),
        }
    }
    debug!("read {} values as text from {}", values.len(), path.display());
    Ok(NdArray::from_vec(values))
}

/// Exact parse first, then through `f64` so `"2.0"` loads into an integer
/// array.
fn parse_token<T: Numeric>(token: &str) -> Option<T> {
    token
        .parse::<T>()
        .ok()
        .or_else(|| token.parse::<f64>().ok().map(T::from_f64))
}
