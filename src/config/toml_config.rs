use crate::config::CliConfig;
use crate::utils::error::{BuildError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub build: Option<BuildSection>,
    pub input: Option<InputSection>,
    pub output: Option<OutputSection>,
    pub monitoring: Option<MonitoringSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildSection {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputSection {
    pub dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    pub file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringSection {
    pub enabled: bool,
}

impl TomlConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BuildError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| BuildError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Overlay the file's values onto the CLI settings.
    pub fn apply_to(&self, config: &mut CliConfig) {
        if let Some(input) = &self.input {
            config.input_dir = input.dir.clone();
        }
        if let Some(output) = &self.output {
            config.output_file = output.file.clone();
        }
        if let Some(monitoring) = &self.monitoring {
            config.monitor = monitoring.enabled;
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(build) = &self.build {
            validate_non_empty_string("build.name", &build.name)?;
        }
        if let Some(input) = &self.input {
            validate_path("input.dir", &input.dir)?;
        }
        if let Some(output) = &self.output {
            validate_path("output.file", &output.file)?;
        }
        Ok(())
    }
}
