use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Could not find path: {path}")]
    NotFound { path: String },

    #[error("Path {path} is a directory")]
    IsADirectory { path: String },

    #[error("Not a Dockerfile: {path}")]
    NotADockerfile { path: String },

    #[error("Not a notebook: {path}")]
    NotANotebook { path: String },

    #[error("File {path} is not valid UTF-8: {source}")]
    EncodingError {
        path: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Invalid notebook: {message}")]
    InvalidNotebook { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Storage,
    Serialization,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ConvertError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ConvertError::IoError(_) => ErrorCategory::Storage,
            ConvertError::SerializationError(_) => ErrorCategory::Serialization,
            ConvertError::ConfigError { .. }
            | ConvertError::ConfigValidationError { .. }
            | ConvertError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ConvertError::NotFound { .. }
            | ConvertError::IsADirectory { .. }
            | ConvertError::NotADockerfile { .. }
            | ConvertError::NotANotebook { .. }
            | ConvertError::EncodingError { .. }
            | ConvertError::InvalidNotebook { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Serialization => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ConvertError::IoError(_) => "Check file permissions and available disk space",
            ConvertError::SerializationError(_) => "The notebook could not be encoded as JSON",
            ConvertError::ConfigError { .. } | ConvertError::ConfigValidationError { .. } => {
                "Check the configuration file for syntax errors"
            }
            ConvertError::InvalidConfigValueError { .. } => {
                "Correct the configuration value and try again"
            }
            ConvertError::NotFound { .. } => "Check the path relative to the root directory",
            ConvertError::IsADirectory { .. } => "Pass the path of a file, not a directory",
            ConvertError::NotADockerfile { .. } => "File must have extension 'Dockerfile'",
            ConvertError::NotANotebook { .. } => "File must have extension '.ipynb'",
            ConvertError::EncodingError { .. } => "Save the file as UTF-8 text",
            ConvertError::InvalidNotebook { .. } => {
                "Only nbformat 4 notebooks can be exported"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ConvertError::NotFound { path } => format!("Cannot open: could not find {}", path),
            ConvertError::IsADirectory { path } => format!("Cannot open: {} is a directory", path),
            ConvertError::NotADockerfile { path } => format!("Not a Dockerfile: {}", path),
            ConvertError::NotANotebook { path } => format!("Not a notebook: {}", path),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
