//! Checked construction of matrices.
//!
//! These builders are the only construction path that validates its
//! requested shape. The sole hard error is asking for zero rows with a
//! non-zero column count, which has no representation in a row-major
//! sequence of rows.

use num_traits::{Num, NumAssign};

use crate::error::MatrixError;
use crate::Matrix;

/// Create a `rows` x `cols` matrix with every element equal to `value`.
///
/// `rows == 0 && cols == 0` yields a matrix with no rows; `rows > 0 &&
/// cols == 0` yields `rows` empty rows, a valid degenerate shape that the
/// operations preserve.
///
/// # Errors
///
/// Returns [`MatrixError::UnrepresentableShape`] when `rows == 0` and
/// `cols != 0`.
pub fn filled<T>(rows: usize, cols: usize, value: T) -> Result<Matrix<T>, MatrixError>
where
    T: Num + Clone,
{
    if rows == 0 && cols != 0 {
        return Err(MatrixError::UnrepresentableShape { rows, cols });
    }
    Ok(vec![vec![value; cols]; rows])
}

/// Create a `rows` x `cols` matrix whose elements count up from `start`
/// by `step` in row-major order.
///
/// The running value is a single counter threaded across row boundaries:
/// the first element of each row continues from the last element of the
/// previous row.
///
/// # Errors
///
/// Returns [`MatrixError::UnrepresentableShape`] when `rows == 0` and
/// `cols != 0`.
pub fn sequential<T>(rows: usize, cols: usize, start: T, step: T) -> Result<Matrix<T>, MatrixError>
where
    T: NumAssign + Copy,
{
    if rows == 0 && cols != 0 {
        return Err(MatrixError::UnrepresentableShape { rows, cols });
    }
    let mut matrix = Vec::with_capacity(rows);
    let mut current = start;
    for _ in 0..rows {
        let mut row = Vec::with_capacity(cols);
        for _ in 0..cols {
            row.push(current);
            current += step;
        }
        matrix.push(row);
    }
    Ok(matrix)
}
