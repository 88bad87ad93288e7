pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "list-builder")]
#[command(about = "Aggregates a directory of profile JSON files into a single list file")]
pub struct CliConfig {
    #[arg(long, default_value = "public/assets/data")]
    pub input_dir: String,

    #[arg(long, default_value = "public/list.json")]
    pub output_file: String,

    #[arg(long, help = "TOML config file; values in it override the flags")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system monitoring")]
    pub monitor: bool,
}

impl ConfigProvider for CliConfig {
    fn input_dir(&self) -> &str {
        &self.input_dir
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_dir", &self.input_dir)?;
        validate_path("output_file", &self.output_file)?;
        Ok(())
    }
}
