pub mod cli;
pub mod remap_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{
    validate_country_code, validate_non_empty_string, validate_path, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "lead-clean")]
#[command(about = "Clean a phone column in a lead CSV, preserving all other columns")]
pub struct CliConfig {
    /// Input CSV file
    pub input: String,

    /// Output cleaned CSV (original columns + _clean_phone); supports a
    /// {timestamp} placeholder
    pub output: String,

    #[arg(long = "phone-col", help = "Name of the phone column (case-insensitive)")]
    pub phone_col: String,

    #[arg(
        long,
        default_value = "+1",
        help = "Default country code to prepend to bare 10-digit numbers (e.g. +1)"
    )]
    pub country: String,

    #[arg(long, default_value = "0", help = "Max rows to keep (0 = all)")]
    pub max: usize,

    #[arg(long, help = "Also write a phone-only CSV alongside the cleaned CSV")]
    pub phones_only: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system monitoring")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output
    }

    fn phone_column(&self) -> &str {
        &self.phone_col
    }

    fn country_code(&self) -> &str {
        &self.country
    }

    fn max_rows(&self) -> usize {
        self.max
    }

    fn phones_only(&self) -> bool {
        self.phones_only
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_path("output", &self.output)?;
        validate_non_empty_string("phone_col", &self.phone_col)?;
        validate_country_code("country", &self.country)?;
        Ok(())
    }
}
