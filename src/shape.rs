//! Shape and content predicates.
//!
//! Every function here is total: jagged (non-rectangular) input is
//! classified, never rejected. The operations in [`crate::ops`] lean on
//! these checks to decide whether an input is usable before touching any
//! element.

use num_traits::Num;

use crate::{Matrix, Row};

/// True iff the matrix has no rows.
pub fn is_matrix_empty<T: Num>(matrix: &Matrix<T>) -> bool {
    matrix.is_empty()
}

/// True iff the row has no elements.
pub fn is_row_empty<T: Num>(row: &Row<T>) -> bool {
    row.is_empty()
}

/// True iff every row has exactly `cols` elements.
///
/// A matrix with no rows follows dimensions only for `cols == 0`. This is
/// the sole rectangularity check; the operations use it to reject jagged
/// inputs.
pub fn follows_dimensions<T: Num>(matrix: &Matrix<T>, cols: usize) -> bool {
    if is_matrix_empty(matrix) {
        return cols == 0;
    }
    for row in matrix {
        if row.len() != cols {
            log::trace!("row has {} columns, expected {}", row.len(), cols);
            return false;
        }
    }
    true
}

/// True iff both matrices are rectangular, have the same shape, and agree
/// element by element.
///
/// Two matrices with zero rows are always equal. A matrix that fails its
/// own rectangularity check is never equal to anything, itself included;
/// callers that need a true equivalence relation must check
/// [`follows_dimensions`] first.
pub fn matrices_equal<T: Num>(a: &Matrix<T>, b: &Matrix<T>) -> bool {
    if a.len() != b.len() {
        return false;
    }
    if is_matrix_empty(a) {
        return true;
    }
    if a[0].len() != b[0].len() {
        return false;
    }
    if !follows_dimensions(a, a[0].len()) || !follows_dimensions(b, b[0].len()) {
        return false;
    }
    for i in 0..a.len() {
        for j in 0..a[0].len() {
            if a[i][j] != b[i][j] {
                return false;
            }
        }
    }
    true
}

/// Decide whether `a * b` is a well-defined product.
///
/// Rules are evaluated in order, first match wins:
///
/// 1. both operands have zero rows: yes
/// 2. only `a` has zero rows: no
/// 3. `a` has rows but no columns and `b` has zero rows: yes
/// 4. `b` has zero rows otherwise: no
/// 5. `a` has rows but no columns otherwise: no
/// 6. `a` is jagged: no
/// 7. `b` is jagged: no
/// 8. `a`'s column count differs from `b`'s row count: no
/// 9. otherwise: yes
///
/// Every rejection is reported on the `log` facade at debug level.
pub fn can_multiply<T: Num>(a: &Matrix<T>, b: &Matrix<T>) -> bool {
    if is_matrix_empty(a) && is_matrix_empty(b) {
        return true;
    }
    if is_matrix_empty(a) {
        log::debug!("cannot multiply: left operand has no rows");
        return false;
    }
    if is_row_empty(&a[0]) && is_matrix_empty(b) {
        return true;
    }
    if is_matrix_empty(b) {
        log::debug!("cannot multiply: right operand has no rows");
        return false;
    }
    if is_row_empty(&a[0]) {
        log::debug!("cannot multiply: left operand has no columns");
        return false;
    }
    if !follows_dimensions(a, a[0].len()) {
        log::debug!("cannot multiply: left operand has a column mismatch");
        return false;
    }
    if !follows_dimensions(b, b[0].len()) {
        log::debug!("cannot multiply: right operand has a column mismatch");
        return false;
    }
    if a[0].len() != b.len() {
        log::debug!(
            "cannot multiply: left operand has {} columns, right operand has {} rows",
            a[0].len(),
            b.len()
        );
        return false;
    }
    true
}
