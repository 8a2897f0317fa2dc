//! Matrix calculator.
//!
//! ```text
//! matcalc -d matrix.txt
//! matcalc -m left.txt right.txt --output product.txt
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use tracing::info;

use matcalc::io::{binary, text, ElementStyle};
use matcalc::settings::{CalculatorSettings, OutputFormat};
use matcalc::{logging, version_comment, Calculator, CalculatorError, Matrix, Operation, Outcome};

#[derive(Parser, Debug)]
#[command(name = "matcalc", version, about = "Matrix calculator: norm, transpose, multiply, determinant, adjoint, inverse")]
#[command(group(
    ArgGroup::new("operation")
        .required(true)
        .args(["frobenius", "transpose", "multiply", "determinant", "adjoint", "inverse"])
))]
struct Cli {
    /// Frobenius norm
    #[arg(short = 'f', long)]
    frobenius: bool,

    /// Transpose
    #[arg(short = 't', long)]
    transpose: bool,

    /// Multiply the first matrix by the second
    #[arg(short = 'm', long)]
    multiply: bool,

    /// Determinant
    #[arg(short = 'd', long)]
    determinant: bool,

    /// Adjoint (adjugate)
    #[arg(short = 'a', long)]
    adjoint: bool,

    /// Inverse
    #[arg(short = 'i', long)]
    inverse: bool,

    /// Input matrix files; the second is only used by multiply
    #[arg(required = true, num_args = 1..=2)]
    files: Vec<PathBuf>,

    /// Output file for matrix results
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Largest rank accepted by determinant, adjoint and inverse
    #[arg(long)]
    max_rank: Option<usize>,

    /// Determinant magnitude at or below which a matrix counts as singular
    #[arg(long)]
    tolerance: Option<f64>,

    /// Write matrix results as a binary snapshot
    #[arg(long)]
    binary: bool,

    /// Settings file (TOML)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,
}

impl Cli {
    fn operation(&self) -> Option<Operation> {
        [
            ('f', self.frobenius),
            ('t', self.transpose),
            ('m', self.multiply),
            ('d', self.determinant),
            ('a', self.adjoint),
            ('i', self.inverse),
        ]
        .into_iter()
        .find(|&(_, set)| set)
        .and_then(|(flag, _)| Operation::from_flag(flag))
    }

    fn settings(&self) -> Result<CalculatorSettings> {
        let mut settings = CalculatorSettings::load(self.config.as_deref())
            .context("Failed to load settings")?;
        if let Some(output) = &self.output {
            settings.output_file = output.clone();
        }
        if let Some(max_rank) = self.max_rank {
            settings.kernel.max_rank = max_rank;
        }
        if let Some(tolerance) = self.tolerance {
            settings.kernel.singular_tolerance = tolerance;
        }
        if self.binary {
            settings.output_format = OutputFormat::Binary;
        }
        Ok(settings)
    }
}

fn load(path: &Path) -> Result<Matrix> {
    let matrix: Matrix = text::read_matrix(path)
        .with_context(|| format!("Failed to read matrix from {}", path.display()))?;
    println!("{} contains matrix of {} by {}", path.display(), matrix.rows(), matrix.cols());
    Ok(matrix)
}

fn print_matrix(matrix: &Matrix, precision: usize) {
    for row in matrix.iter_rows() {
        let line: Vec<String> = row.iter().map(|x| format!("{x:.precision$}")).collect();
        println!("{}", line.join("\t"));
    }
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();
    let settings = cli.settings()?;
    let op = cli.operation().context("No operation flag given")?;

    match (op.operand_count(), cli.files.len()) {
        (2, 1) => return Err(CalculatorError::MissingOperand(op).into()),
        (1, 2) => return Err(CalculatorError::UnexpectedOperand(op).into()),
        _ => {}
    }

    let first = load(&cli.files[0])?;
    let second = match cli.files.get(1) {
        Some(path) => Some(load(path)?),
        None => None,
    };

    let calculator = Calculator::new(settings.kernel);
    let limits = calculator.kernel().config();
    info!(max_rank = limits.max_rank, tolerance = limits.singular_tolerance, "kernel configured");
    let outcome = calculator
        .evaluate(op, &first, second.as_ref())
        .with_context(|| format!("Failed to compute {op}"))?;

    match outcome {
        Outcome::Scalar(value) => {
            println!("{op} = {value:.precision$}", precision = settings.precision);
        }
        Outcome::Matrix(result) => {
            println!("{op} is:");
            print_matrix(&result, settings.precision);

            let path = &settings.output_file;
            let written = match settings.output_format {
                OutputFormat::Text => {
                    let comments = [logging::invocation_line(), version_comment()];
                    text::write_file(path, &comments, &result, ElementStyle::Fixed(settings.precision))
                }
                OutputFormat::Binary => binary::write_file(path, &result),
            };
            written.with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "result written");
        }
    }
    Ok(())
}
