use thiserror::Error;

#[derive(Error, Debug)]
pub enum SantaError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV rendering error: {0}")]
    CsvError(#[from] csv::Error),

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

    #[error("Assignment invariant violated: {message}")]
    InvariantViolation { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SantaError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        SantaError::InvalidInput {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            SantaError::InvalidInput { .. } => ErrorCategory::Input,
            SantaError::ConfigError { .. }
            | SantaError::ConfigValidationError { .. }
            | SantaError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            SantaError::IoError(_)
            | SantaError::SerializationError(_)
            | SantaError::CsvError(_) => ErrorCategory::System,
            SantaError::InvariantViolation { .. } => ErrorCategory::Internal,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System | ErrorCategory::Internal => ErrorSeverity::Critical,
        }
    }

    /// 給使用者的修正建議
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SantaError::InvalidInput { .. } => {
                "Provide at least two unique participant names, e.g. PARTICIPANTS=\"alice,bob,carol\""
            }
            SantaError::ConfigError { .. } | SantaError::ConfigValidationError { .. } => {
                "Check that the configuration file exists and is valid TOML"
            }
            SantaError::InvalidConfigValueError { .. } => {
                "Fix the highlighted value in your configuration or command line"
            }
            SantaError::IoError(_) => "Check file permissions and that the path exists",
            SantaError::SerializationError(_) | SantaError::CsvError(_) => {
                "Try a different --format"
            }
            SantaError::InvariantViolation { .. } => "Run the draw again; please report this as a bug",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SantaError::InvalidInput { message } => message.clone(),
            other => other.to_string(),
        }
    }

    /// 依照嚴重程度決定結束代碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, SantaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_is_high_severity() {
        let err = SantaError::invalid_input("need two names");
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.user_friendly_message(), "need two names");
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: SantaError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.category(), ErrorCategory::System);
        assert_eq!(err.exit_code(), 3);
    }
}
