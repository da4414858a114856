use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::core::Numeric;
use crate::error::{Error, Result};

use super::NdArray;

/// Separators understood by the text readers and writers.
pub(crate) const TEXT_SEPARATORS: [&str; 3] = [" ", "\t", "\n"];

/// `path` with `ext` appended when it has no extension of its own.
pub(crate) fn with_default_extension(path: &Path, ext: &str) -> PathBuf {
    if path.extension().is_some() {
        return path.to_path_buf();
    }
    let mut name = path.as_os_str().to_owned();
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}

fn ensure_parent_exists(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => Err(Error::runtime(
            format!("output directory does not exist: {}", parent.display()),
        )),
        _ => Ok(()),
    }
}

impl<T: Numeric> NdArray<T> {
    /// Writes the raw native-endian element bytes (no header, no shape).
    /// `.bin` is appended when `path` has no extension; the path actually
    /// written is returned.
    pub fn dump<P: AsRef<Path>>(&self, path: P) -> Result<PathBuf> {
        let path = with_default_extension(path.as_ref(), "bin");
        ensure_parent_exists(&path)?;
        let mut bytes = Vec::with_capacity(self.size() as usize * T::BYTES);
        for &value in self.iter() {
            value.write_ne_bytes(&mut bytes);
        }
        std::fs::write(&path, &bytes).map_err(|e| Error::io(&path, e))?;
        debug!("dumped {} bytes of {} to {}", bytes.len(), T::NAME, path.display());
        Ok(path)
    }

    /// Writes the flattened array. An empty `sep` produces a binary dump;
    /// otherwise elements are written as text joined by `sep` (`.txt` is
    /// appended when `path` has no extension).
    pub fn tofile<P: AsRef<Path>>(&self, path: P, sep: &str) -> Result<PathBuf> {
        if sep.is_empty() {
            return self.dump(path);
        }
        if !TEXT_SEPARATORS.contains(&sep) {
            return Err(Error::invalid(format!(
                "unsupported separator {:?}: only ' ', '\\t' and '\\n' are supported",
                sep
            )));
        }
        let path = with_default_extension(path.as_ref(), "txt");
        ensure_parent_exists(&path)?;
        let file = File::create(&path).map_err(|e| Error::io(&path, e))?;
        let mut writer = BufWriter::new(file);
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                writer.write_all(sep.as_bytes()).map_err(|e| Error::io(&path, e))?;
            }
            write!(writer, "{}", value).map_err(|e| Error::io(&path, e))?;
        }
        writer.flush().map_err(|e| Error::io(&path, e))?;
        debug!("wrote {} values as text to {}", self.size(), path.display());
        Ok(path)
    }
}
