use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Controls how arrays are rendered as text.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PrintOptions {
    /// Digits after the decimal point for floating point elements.
    pub precision: usize,

    /// Rows shown before the middle of the array is elided.
    pub max_rows: Option<usize>,

    /// Columns shown per row before the middle of the row is elided.
    pub max_cols: Option<usize>,
}

impl PrintOptions {
    pub fn new(precision: usize) -> Self {
        Self {
            precision,
            ..Self::default()
        }
    }

    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = Some(max_rows);
        self
    }

    pub fn with_max_cols(mut self, max_cols: usize) -> Self {
        self.max_cols = Some(max_cols);
        self
    }
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            precision: 4,
            max_rows: None,
            max_cols: None,
        }
    }
}

/// Reads [`PrintOptions`] from a JSON file. Missing fields take their
/// default values.
pub fn load_print_options<P: AsRef<Path>>(path: P) -> Result<PrintOptions> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read print options: {}", path.display()))?;
    let options: PrintOptions = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse print options: {}", path.display()))?;
    log::debug!("Loaded print options from {}: {:?}", path.display(), options);
    Ok(options)
}
