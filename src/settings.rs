//! Calculator settings.
//!
//! Sources, lowest precedence first: built-in defaults, an optional
//! `matcalc.toml` in the working directory, an explicit `--config` file, then
//! `MATCALC_*` environment variables (`MATCALC_OUTPUT_FILE`,
//! `MATCALC_KERNEL__MAX_RANK`, ...). Command-line flags are applied on top by
//! the binary.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::numerics::config::KernelConfig;

/// Base name of the settings file looked up in the working directory.
pub const DEFAULT_CONFIG_NAME: &str = "matcalc";
pub const DEFAULT_OUTPUT_FILE: &str = "output.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Binary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorSettings {
    /// Where matrix results are written.
    pub output_file: PathBuf,
    pub output_format: OutputFormat,
    /// Decimals per element in text output.
    pub precision: usize,
    pub kernel: KernelConfig,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        Self {
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            output_format: OutputFormat::Text,
            precision: 6,
            kernel: KernelConfig::default(),
        }
    }
}

impl CalculatorSettings {
    /// Load settings from the default file, `config_file` if given, and the
    /// environment.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(File::with_name(DEFAULT_CONFIG_NAME).required(false));
        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).required(true));
        }
        builder
            .add_source(
                Environment::with_prefix("MATCALC")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
