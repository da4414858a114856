use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;
use numrs::{Axis, NdArray, Numeric, PrintOptions, Shape};

use crate::dtype::DType;
use crate::with_dtype;

/// Input of the `stats` subcommand.
#[derive(Debug, Clone)]
pub struct StatsRequest {
    pub path: PathBuf,
    pub dtype: DType,
    /// Empty for a binary dump.
    pub sep: String,
    /// Shape to reinterpret the flat file as.
    pub shape: Option<Shape>,
    pub axis: Axis,
}

/// Loads the file described by `request` and renders its summary
/// statistics, one `name: values` line each.
pub fn run_stats(request: &StatsRequest, options: &PrintOptions) -> Result<String> {
    with_dtype!(request.dtype, summarize(request, options))
}

pub(crate) fn load_array<T: Numeric>(path: &Path, sep: &str, shape: Option<Shape>) -> Result<NdArray<T>> {
    let mut array: NdArray<T> = numrs::fromfile(path, sep)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    if let Some(shape) = shape {
        let size = array.size();
        array
            .reshape_to(shape)
            .with_context(|| format!("Failed to reshape {} values into {}", size, shape))?;
    }
    info!(
        "[numrs::stats] Loaded {} {} values with shape {}",
        array.size(),
        T::NAME,
        array.shape()
    );
    Ok(array)
}

fn summarize<T: Numeric>(request: &StatsRequest, options: &PrintOptions) -> Result<String> {
    let array: NdArray<T> = load_array(&request.path, &request.sep, request.shape)?;
    let axis = request.axis;
    let mut lines = vec![
        format!("shape: {}", array.shape()),
        format!("sum: {}", array.sum(axis).format_with(options)),
        format!("mean: {}", array.mean(axis).format_with(options)),
    ];
    if !array.is_empty() {
        lines.push(format!("min: {}", array.min(axis)?.format_with(options)));
        lines.push(format!("max: {}", array.max(axis)?.format_with(options)));
        lines.push(format!("median: {}", array.median(axis)?.format_with(options)));
    }
    lines.push(format!("stdev: {}", array.stdev(axis).format_with(options)));
    Ok(lines.join("\n"))
}
