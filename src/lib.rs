//! matrix-kit: dense 2D matrix construction and operations.
//!
//! This crate provides a minimal, allocation-based rectangular matrix
//! representation (`Matrix<T>`, an alias for `Vec<Vec<T>>`) together with
//! checked builders, shape/content predicates, transpose, and
//! multiplication over numeric element types.
//!
//! Rows are independently sized, so a jagged matrix can be written down as
//! a literal; the predicates in [`shape`] classify such inputs instead of
//! rejecting them, and [`ops`] validates rectangularity before doing any
//! arithmetic.
pub mod build;
pub mod display;
pub mod error;
pub mod ops;
pub mod shape;

pub use error::MatrixError;
pub use ops::{multiply, transpose};

/// One row of a matrix.
pub type Row<T> = Vec<T>;

/// A matrix as an ordered sequence of independently-sized rows.
pub type Matrix<T> = Vec<Row<T>>;
