use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Cannot access input directory {path}: {source}")]
    InputDirError {
        path: String,
        source: std::io::Error,
    },

    #[error("Cannot read input file {path}: {source}")]
    InputFileError {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    ParseError {
        path: String,
        source: serde_json::Error,
    },

    #[error("Cannot write output file {path}: {source}")]
    OutputError {
        path: String,
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    InputAccess,
    Parse,
    OutputAccess,
    Config,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BuildError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BuildError::InputDirError { .. } | BuildError::InputFileError { .. } => {
                ErrorCategory::InputAccess
            }
            BuildError::ParseError { .. } => ErrorCategory::Parse,
            BuildError::OutputError { .. } => ErrorCategory::OutputAccess,
            BuildError::ConfigError { .. } | BuildError::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
            BuildError::SerializationError(_) | BuildError::IoError(_) => ErrorCategory::Internal,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            BuildError::InputDirError { .. }
            | BuildError::OutputError { .. }
            | BuildError::IoError(_) => ErrorSeverity::Critical,
            BuildError::InputFileError { .. }
            | BuildError::ParseError { .. }
            | BuildError::SerializationError(_)
            | BuildError::ConfigError { .. }
            | BuildError::InvalidConfigValueError { .. } => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::InputAccess => {
                "Verify the input directory path and file permissions".to_string()
            }
            ErrorCategory::Parse => {
                "Fix or remove the malformed JSON file and run again".to_string()
            }
            ErrorCategory::OutputAccess => {
                "Verify the output directory exists and is writable".to_string()
            }
            ErrorCategory::Config => {
                "Check the command line flags or config file values".to_string()
            }
            ErrorCategory::Internal => "Re-run with --verbose and inspect the logs".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BuildError::InputDirError { path, .. } => {
                format!("The input directory '{}' could not be read", path)
            }
            BuildError::InputFileError { path, .. } => {
                format!("The profile file '{}' could not be read", path)
            }
            BuildError::ParseError { path, .. } => {
                format!("The profile file '{}' does not contain valid JSON", path)
            }
            BuildError::OutputError { path, .. } => {
                format!("The list file '{}' could not be written", path)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BuildError>;
