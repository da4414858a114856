use std::fmt;

use crate::config::PrintOptions;
use crate::core::Dtype;

use super::NdArray;

/// Indices to print out of `len`, with `None` marking the elided middle.
fn visible(len: usize, limit: Option<usize>) -> Vec<Option<usize>> {
    match limit {
        Some(limit) if len > limit => {
            let head = (limit + 1) / 2;
            let tail = limit / 2;
            let mut out: Vec<Option<usize>> = (0..head).map(Some).collect();
            out.push(None);
            out.extend((len - tail..len).map(Some));
            out
        }
        _ => (0..len).map(Some).collect(),
    }
}

impl<T: Dtype> NdArray<T> {
    /// Renders the array row by row, e.g. `[[1, 2],\n [3, 4]]`.
    pub fn format_with(&self, options: &PrintOptions) -> String {
        if self.is_empty() {
            return "[]".to_string();
        }
        let rows = visible(self.num_rows() as usize, options.max_rows);
        let cols = visible(self.num_cols() as usize, options.max_cols);
        let mut out = String::from("[");
        for (i, row) in rows.iter().enumerate() {
            if i > 0 {
                out.push_str(",\n ");
            }
            let row = match row {
                Some(row) => *row,
                None => {
                    out.push_str("...");
                    continue;
                }
            };
            let values = self.row_slice(row as u32);
            let cells: Vec<String> = cols
                .iter()
                .map(|col| match col {
                    Some(col) => values[*col].format_value(options.precision),
                    None => "...".to_string(),
                })
                .collect();
            out.push('[');
            out.push_str(&cells.join(", "));
            out.push(']');
        }
        out.push(']');
        out
    }
}

impl<T: Dtype> fmt::Display for NdArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with(&PrintOptions::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elides_middle_rows_and_columns() {
        let array = NdArray::from_shape_vec((4, 4), (0..16).collect()).unwrap();
        let options = PrintOptions::default().with_max_rows(2).with_max_cols(2);
        assert_eq!(
            array.format_with(&options),
            "[[0, ..., 3],\n ...,\n [12, ..., 15]]"
        );
    }

    #[test]
    fn floats_use_precision() {
        let array = NdArray::from_vec(vec![1.0f64, 2.5]);
        assert_eq!(array.format_with(&PrintOptions::new(2)), "[[1.00, 2.50]]");
        assert_eq!(array.to_string(), "[[1.0000, 2.5000]]");
    }
}
