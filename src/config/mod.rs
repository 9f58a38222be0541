pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, validate_positive_number, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "marina")]
#[command(about = "Boat management for a marina: inventory, payments and monthly charges")]
pub struct CliConfig {
    /// Boat data file, one CSV record per line
    pub data_file: PathBuf,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the maximum number of boats
    #[arg(long)]
    pub capacity: Option<usize>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data_file", &self.data_file.to_string_lossy())?;
        if let Some(capacity) = self.capacity {
            validate_positive_number("capacity", capacity, 1)?;
        }
        Ok(())
    }
}
