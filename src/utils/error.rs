use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Input file '{path}' contains no records")]
    EmptyInputError { path: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ConvertError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Data,
    Io,
}

impl ConvertError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ConvertError::CsvError(_) => ErrorSeverity::High,
            ConvertError::IoError(_) => ErrorSeverity::Critical,
            ConvertError::EmptyInputError { .. } => ErrorSeverity::Medium,
            ConvertError::InvalidConfigValueError { .. } => ErrorSeverity::High,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ConvertError::CsvError(_) | ConvertError::EmptyInputError { .. } => ErrorCategory::Data,
            ConvertError::IoError(_) => ErrorCategory::Io,
            ConvertError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ConvertError::CsvError(_) => "Check that the input file is well-formed CSV".to_string(),
            ConvertError::IoError(_) => {
                "Check that the input path exists and is readable".to_string()
            }
            ConvertError::EmptyInputError { .. } => {
                "Provide a file with at least a header record".to_string()
            }
            ConvertError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and try again".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ConvertError::CsvError(e) => format!("The input could not be parsed as CSV: {}", e),
            ConvertError::IoError(e) => format!("File access failed: {}", e),
            ConvertError::EmptyInputError { path } => {
                format!("'{}' has no records - nothing to convert", path)
            }
            ConvertError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Invalid {}: '{}' ({})", field, value, reason),
        }
    }
}
