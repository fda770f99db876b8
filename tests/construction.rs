//! Integration tests for the checked matrix builders.

use matrix_kit::{build, MatrixError};

// ---------------------------------------------------------------------------
// filled
// ---------------------------------------------------------------------------

#[test]
fn filled_has_requested_shape_and_value() {
    let m = build::filled(3, 2, 7i32).unwrap();
    assert_eq!(m.len(), 3);
    for row in &m {
        assert_eq!(row.len(), 2);
        for &v in row {
            assert_eq!(v, 7);
        }
    }
}

#[test]
fn filled_float_value() {
    let m = build::filled(2, 3, -1.5f64).unwrap();
    assert_eq!(m, vec![vec![-1.5, -1.5, -1.5], vec![-1.5, -1.5, -1.5]]);
}

#[test]
fn filled_zero_rows_zero_cols_is_empty() {
    let m = build::filled(0, 0, 1i32).unwrap();
    assert!(m.is_empty());
}

#[test]
fn filled_zero_rows_nonzero_cols_is_unrepresentable() {
    let err = build::filled(0, 4, 1i32).unwrap_err();
    assert_eq!(err, MatrixError::UnrepresentableShape { rows: 0, cols: 4 });
}

#[test]
fn filled_rows_with_zero_cols_keeps_empty_rows() {
    let m = build::filled(3, 0, 1.0f32).unwrap();
    assert_eq!(m.len(), 3);
    for row in &m {
        assert!(row.is_empty());
    }
}

// ---------------------------------------------------------------------------
// sequential
// ---------------------------------------------------------------------------

#[test]
fn sequential_single_row_counts_from_start() {
    let m = build::sequential(1, 4, 10i32, 3).unwrap();
    assert_eq!(m, vec![vec![10, 13, 16, 19]]);
}

#[test]
fn sequential_counter_continues_across_rows() {
    let m = build::sequential(4, 3, 1i32, 1).unwrap();
    assert_eq!(
        m,
        vec![
            vec![1, 2, 3],
            vec![4, 5, 6],
            vec![7, 8, 9],
            vec![10, 11, 12],
        ]
    );
}

#[test]
fn sequential_negative_step() {
    let m = build::sequential(2, 2, 1i32, -1).unwrap();
    assert_eq!(m, vec![vec![1, 0], vec![-1, -2]]);
}

#[test]
fn sequential_float_step() {
    let m = build::sequential(1, 3, 0.5f64, 0.25).unwrap();
    assert_eq!(m, vec![vec![0.5, 0.75, 1.0]]);
}

#[test]
fn sequential_zero_rows_zero_cols_is_empty() {
    let m = build::sequential(0, 0, 1i32, 1).unwrap();
    assert!(m.is_empty());
}

#[test]
fn sequential_zero_rows_nonzero_cols_is_unrepresentable() {
    let err = build::sequential(0, 2, 1.0f64, 1.0).unwrap_err();
    assert_eq!(err, MatrixError::UnrepresentableShape { rows: 0, cols: 2 });
}

#[test]
fn sequential_rows_with_zero_cols_keeps_empty_rows() {
    let m = build::sequential(2, 0, 1i32, 1).unwrap();
    assert_eq!(m.len(), 2);
    for row in &m {
        assert!(row.is_empty());
    }
}
