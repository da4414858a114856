use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;
use numrs::Numeric;

use crate::dtype::DType;
use crate::stats::load_array;
use crate::with_dtype;

/// Input of the `convert` subcommand. Empty separators mean binary dumps.
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub dtype: DType,
    pub from_sep: String,
    pub to_sep: String,
}

/// Rewrites `input` as `output` in the requested format and returns the
/// path actually written (an extension is appended when missing).
pub fn run_convert(request: &ConvertRequest) -> Result<PathBuf> {
    with_dtype!(request.dtype, convert(request))
}

fn convert<T: Numeric>(request: &ConvertRequest) -> Result<PathBuf> {
    let array = load_array::<T>(&request.input, &request.from_sep, None)?;
    let written = array
        .tofile(&request.output, &request.to_sep)
        .with_context(|| format!("Failed to write {}", request.output.display()))?;
    info!(
        "[numrs::convert] Wrote {} {} values to {}",
        array.size(),
        T::NAME,
        written.display()
    );
    Ok(written)
}
