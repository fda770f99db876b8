//! Text rendering for matrices, for demos and debugging.
//!
//! `Matrix<T>` is a type alias, so there is no `Display` impl to hang this
//! on; formatting lives here as a free function and stays outside the core
//! operation contract.

use std::fmt::{Display, Write};

use num_traits::Num;

use crate::Matrix;

/// Render a matrix one row per line, elements comma-separated.
///
/// Degenerate shapes render as expected: a matrix with no rows yields an
/// empty string, an empty row yields an empty line.
pub fn format_matrix<T>(matrix: &Matrix<T>) -> String
where
    T: Num + Display,
{
    let mut out = String::new();
    for (i, row) in matrix.iter().enumerate() {
        for (j, value) in row.iter().enumerate() {
            let _ = write!(out, "{}", value);
            if j + 1 != row.len() {
                out.push_str(", ");
            }
        }
        if i + 1 != matrix.len() {
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_rows_on_separate_lines() {
        let m = vec![vec![1, 2], vec![3, 4]];
        assert_eq!(format_matrix(&m), "1, 2\n3, 4");
    }

    #[test]
    fn formats_degenerate_shapes() {
        let empty: Matrix<i32> = Vec::new();
        assert_eq!(format_matrix(&empty), "");
        let no_cols: Matrix<i32> = vec![Vec::new(), Vec::new()];
        assert_eq!(format_matrix(&no_cols), "\n");
    }
}
