//! Library side of the `numrs` command-line tool.
pub mod convert;
pub mod dtype;
pub mod stats;

use anyhow::{bail, Context, Result};
use numrs::Shape;

/// Parses a `ROWS,COLS` shape argument.
pub fn parse_shape(text: &str) -> Result<Shape> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    if parts.len() != 2 {
        bail!("Invalid shape '{}': expected ROWS,COLS", text);
    }
    let rows: u32 = parts[0]
        .parse()
        .with_context(|| format!("Invalid row count in shape '{}'", text))?;
    let cols: u32 = parts[1]
        .parse()
        .with_context(|| format!("Invalid column count in shape '{}'", text))?;
    Ok(Shape::new(rows, cols))
}

/// Maps the CLI spelling of a separator (`space`, `tab`, `newline`, or the
/// literal characters) to the string understood by `numrs`. `None` means a
/// binary dump.
pub fn parse_separator(text: Option<&str>) -> Result<String> {
    let sep = match text {
        None | Some("") | Some("binary") => "",
        Some("space") | Some(" ") => " ",
        Some("tab") | Some("\t") | Some("\\t") => "\t",
        Some("newline") | Some("\n") | Some("\\n") => "\n",
        Some(other) => bail!(
            "Unsupported separator '{}'. Valid options are 'binary', 'space', 'tab', 'newline'",
            other
        ),
    };
    Ok(sep.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shapes_and_separators_parse() {
        assert_eq!(parse_shape("2, 3").unwrap(), Shape::new(2, 3));
        assert!(parse_shape("2x3").is_err());
        assert!(parse_shape("a,3").is_err());
        assert_eq!(parse_separator(None).unwrap(), "");
        assert_eq!(parse_separator(Some("tab")).unwrap(), "\t");
        assert!(parse_separator(Some(",")).is_err());
    }
}
