//! Transpose and multiplication, built from the builders and predicates.
//!
//! Both operations validate their preconditions up front and return a
//! [`MatrixError::PreconditionViolated`] naming the violated rule. Callers
//! that want to avoid the error path can probe with the predicates in
//! [`crate::shape`] first.

use num_traits::{Num, NumAssign};

use crate::error::MatrixError;
use crate::{build, shape, Matrix};

/// Transpose a rectangular matrix.
///
/// # Errors
///
/// Fails when the input has no rows, has rows but no columns, or is jagged
/// relative to its first row, in that order of checks.
pub fn transpose<T>(matrix: &Matrix<T>) -> Result<Matrix<T>, MatrixError>
where
    T: Num + Copy,
{
    if shape::is_matrix_empty(matrix) {
        return Err(MatrixError::PreconditionViolated(
            "cannot transpose a matrix with no rows",
        ));
    }
    if shape::is_row_empty(&matrix[0]) {
        return Err(MatrixError::PreconditionViolated(
            "cannot transpose a matrix with no columns",
        ));
    }
    if !shape::follows_dimensions(matrix, matrix[0].len()) {
        return Err(MatrixError::PreconditionViolated(
            "cannot transpose a matrix with a column mismatch",
        ));
    }
    let mut transposed = build::filled(matrix[0].len(), matrix.len(), T::zero())?;
    for (i, row) in matrix.iter().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            transposed[j][i] = value;
        }
    }
    Ok(transposed)
}

/// Multiply two matrices.
///
/// When the right operand has zero rows (reachable only when the left
/// operand is itself degenerate), the product mirrors the left operand's
/// row count with no columns.
///
/// # Errors
///
/// Fails when [`shape::can_multiply`] rejects the pair; the rejected rule
/// is reported at debug level on the `log` facade.
pub fn multiply<T>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError>
where
    T: NumAssign + Copy,
{
    if !shape::can_multiply(a, b) {
        return Err(MatrixError::PreconditionViolated(
            "matrices cannot be multiplied",
        ));
    }
    if shape::is_matrix_empty(b) {
        return build::filled(a.len(), 0, T::zero());
    }
    let mut product = build::filled(a.len(), b[0].len(), T::zero())?;
    if shape::is_matrix_empty(&product) {
        return Ok(product);
    }
    if shape::is_row_empty(&product[0]) {
        return Ok(product);
    }
    // i-k-j ordering: the inner loop walks a row of `b` (and of `product`)
    // contiguously.
    for i in 0..a.len() {
        for k in 0..a[0].len() {
            for j in 0..b[0].len() {
                product[i][j] += a[i][k] * b[k][j];
            }
        }
    }
    Ok(product)
}
