//! Random matrix generator.
//!
//! ```text
//! matgen --rows 3 --cols 4 --max 10.0 --min 0.0 --file matrix_1.txt
//! ```
//!
//! Writes to stdout when `--file` is omitted.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use matcalc::generator::{self, GeneratorConfig, DEFAULT_MAX, DEFAULT_MIN};
use matcalc::io::{text, ElementStyle};
use matcalc::{logging, version_comment};

#[derive(Parser, Debug)]
#[command(name = "matgen", version, about = "Write a random matrix in the text matrix format")]
struct Cli {
    #[arg(short, long)]
    rows: usize,

    #[arg(short, long)]
    cols: usize,

    /// Upper bound of the uniform distribution
    #[arg(short = 'H', long, default_value_t = DEFAULT_MAX, allow_negative_numbers = true)]
    max: f64,

    /// Lower bound of the uniform distribution
    #[arg(short = 'L', long, default_value_t = DEFAULT_MIN, allow_negative_numbers = true)]
    min: f64,

    /// Draw from the standard normal distribution instead
    #[arg(long)]
    normal: bool,

    /// Seed for reproducible output; 0 seeds from the clock
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Output file
    #[arg(short, long)]
    file: Option<PathBuf>,
}

impl Cli {
    fn generator_config(&self) -> GeneratorConfig {
        let config = GeneratorConfig::new(self.rows, self.cols).seed(self.seed);
        if self.normal {
            config.standard_normal()
        } else {
            config.uniform(self.min, self.max)
        }
    }
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let matrix = generator::generate(&cli.generator_config()).context("Failed to generate matrix")?;
    let comments = [logging::invocation_line(), version_comment()];

    match &cli.file {
        Some(path) => text::write_file(path, &comments, &matrix, ElementStyle::Shortest)
            .with_context(|| format!("Unable to write '{}'", path.display()))?,
        None => text::write_document(std::io::stdout().lock(), &comments, &matrix, ElementStyle::Shortest)
            .context("Unable to write to stdout")?,
    }
    Ok(())
}
