//! Build a sequential matrix, transpose it, and multiply the two.

use matrix_kit::display::format_matrix;
use matrix_kit::{build, multiply, transpose};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let a = build::sequential(4, 3, 1i32, 1)?;
    let t = transpose(&a)?;
    let product = multiply(&a, &t)?;

    println!("A =\n{}\n", format_matrix(&a));
    println!("A^T =\n{}\n", format_matrix(&t));
    println!("A * A^T =\n{}\n", format_matrix(&product));

    // A degenerate product: a row vector against a matrix with rows but no
    // columns collapses to a single empty row.
    let d = build::filled(1, 3, 1i32)?;
    let e = build::filled(3, 0, 1i32)?;
    let f = multiply(&d, &e)?;
    println!("D =\n{}\n", format_matrix(&d));
    println!("E has {} rows and no columns", e.len());
    println!("D * E has {} row(s) of width {}", f.len(), f[0].len());

    Ok(())
}
