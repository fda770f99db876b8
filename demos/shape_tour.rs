//! Tour of the builders and shape predicates.

use matrix_kit::build;
use matrix_kit::display::format_matrix;
use matrix_kit::shape::{
    can_multiply, follows_dimensions, is_matrix_empty, is_row_empty, matrices_equal,
};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let a = build::sequential(4, 3, 1i32, 1)?;
    let b = build::filled(3, 4, 1i32)?;

    println!("A =\n{}\n", format_matrix(&a));
    println!("B =\n{}\n", format_matrix(&b));

    println!("A empty: {}", is_matrix_empty(&a));
    println!("B empty: {}", is_matrix_empty(&b));
    println!("A first row empty: {}", is_row_empty(&a[0]));
    println!("A rectangular: {}", follows_dimensions(&a, a[0].len()));
    println!("B rectangular: {}", follows_dimensions(&b, b[0].len()));
    println!("A * B well-defined: {}", can_multiply(&a, &b));
    println!("A == B: {}", matrices_equal(&a, &b));

    // Jagged input is representable by literal and classified, not rejected.
    let jagged = vec![vec![1, 2, 3], vec![4, 5]];
    println!("jagged rectangular: {}", follows_dimensions(&jagged, 3));
    println!("jagged equal to itself: {}", matrices_equal(&jagged, &jagged));

    Ok(())
}
