//! Walk through the calculator operations on a small matrix.
//!
//! Run with `cargo run --example basic_usage`.

use matcalc::generator::{generate, GeneratorConfig};
use matcalc::io::{text, ElementStyle};
use matcalc::{Calculator, KernelConfig, Matrix, Operation};

fn main() -> anyhow::Result<()> {
    let m = Matrix::from_rows(&[
        [2.0, -1.0, 0.0],
        [1.0, 3.0, 2.0],
        [0.0, 1.0, 4.0],
    ])?;

    println!("=== Input ===");
    print!("{}", text::to_text(&[], &m, ElementStyle::Shortest));

    let calc = Calculator::new(KernelConfig::with_rounding_tolerance());
    for op in Operation::all() {
        let second = (op.operand_count() == 2).then_some(&m);
        match calc.evaluate(op, &m, second)? {
            matcalc::Outcome::Scalar(value) => println!("{op} = {value:.6}"),
            matcalc::Outcome::Matrix(result) => {
                println!("{op}:");
                print!("{}", text::to_text(&[], &result, ElementStyle::default()));
            }
        }
    }

    println!("=== Random 3x3 ===");
    let random = generate(&GeneratorConfig::new(3, 3).uniform(-10.0, 10.0).seed(2024))?;
    print!("{}", text::to_text(&[], &random, ElementStyle::Shortest));
    println!("determinant = {:.6}", random.determinant()?);

    Ok(())
}
