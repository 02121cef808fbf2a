use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardingError {
    #[error("Booking file not found: {path}")]
    NotFound { path: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid booking ID '{value}' on line {line}")]
    InvalidBookingId { line: usize, value: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Output,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BoardingError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BoardingError::NotFound { .. } | BoardingError::InvalidBookingId { .. } => {
                ErrorCategory::Input
            }
            BoardingError::CsvError(_) => ErrorCategory::Input,
            BoardingError::ConfigValidationError { .. }
            | BoardingError::InvalidConfigValueError { .. }
            | BoardingError::MissingConfigError { .. } => ErrorCategory::Configuration,
            BoardingError::SerializationError(_) => ErrorCategory::Output,
            BoardingError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            BoardingError::NotFound { .. }
            | BoardingError::InvalidBookingId { .. }
            | BoardingError::CsvError(_)
            | BoardingError::ConfigValidationError { .. }
            | BoardingError::InvalidConfigValueError { .. }
            | BoardingError::MissingConfigError { .. }
            | BoardingError::SerializationError(_) => ErrorSeverity::High,
            BoardingError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for a failure of this severity.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BoardingError::NotFound { .. } => {
                "Check the input path, or run with --sample to create an example file"
            }
            BoardingError::InvalidBookingId { .. } => {
                "Booking IDs must be whole numbers; fix the listed line and reload"
            }
            BoardingError::CsvError(_) => {
                "Make sure the file is tab-separated: <Booking_ID>\\t<seat,seat,...>"
            }
            BoardingError::SerializationError(_) => "Retry without --json to get the plain table",
            BoardingError::ConfigValidationError { .. }
            | BoardingError::InvalidConfigValueError { .. }
            | BoardingError::MissingConfigError { .. } => {
                "Review the configuration file and command-line flags"
            }
            BoardingError::IoError(_) => "Check file permissions and available disk space",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BoardingError::NotFound { path } => format!("Input file '{}' not found.", path),
            BoardingError::InvalidBookingId { line, value } => {
                format!("Line {} has an invalid booking ID: '{}'", line, value)
            }
            BoardingError::IoError(e) => format!("Could not read or write a file: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BoardingError>;
