use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("Invalid input for '{field}' ({value:?}): {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invoice generation failed: {message}")]
    GenerationFailure { message: String },

    #[error("Notification delivery failed: {message}")]
    DeliveryFailure { message: String },

    #[error("Report output failed: {0}")]
    ReportFailure(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Collaborator,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code for a run that ended with this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl OrderError {
    pub fn invalid_input(field: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        OrderError::InvalidInput {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            OrderError::InvalidInput { .. } => ErrorCategory::Input,
            OrderError::ConfigError { .. } => ErrorCategory::Configuration,
            OrderError::GenerationFailure { .. } | OrderError::DeliveryFailure { .. } => {
                ErrorCategory::Collaborator
            }
            OrderError::ReportFailure(_) | OrderError::SerializationError(_) => {
                ErrorCategory::Output
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            OrderError::InvalidInput { .. } | OrderError::ConfigError { .. } => {
                ErrorSeverity::Medium
            }
            OrderError::GenerationFailure { .. } | OrderError::DeliveryFailure { .. } => {
                ErrorSeverity::High
            }
            OrderError::ReportFailure(_) | OrderError::SerializationError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn is_recoverable(&self) -> bool {
        self.severity() <= ErrorSeverity::Medium
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            OrderError::InvalidInput { field, .. } => {
                format!("Check the value passed for '{}' and try again", field)
            }
            OrderError::ConfigError { .. } => {
                "Make sure the config file exists and is valid TOML".to_string()
            }
            OrderError::GenerationFailure { .. } => {
                "Retry once the invoice backend is available".to_string()
            }
            OrderError::DeliveryFailure { .. } => {
                "Verify the email address and retry the notification".to_string()
            }
            OrderError::ReportFailure(_) | OrderError::SerializationError(_) => {
                "Check that stdout is writable".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            OrderError::InvalidInput { field, reason, .. } => {
                format!("The order was rejected: {} ({})", reason, field)
            }
            OrderError::ConfigError { message, .. } => {
                format!("Could not load the order configuration: {}", message)
            }
            OrderError::GenerationFailure { .. } => {
                "The invoice could not be generated".to_string()
            }
            OrderError::DeliveryFailure { .. } => {
                "The email notification could not be sent".to_string()
            }
            OrderError::ReportFailure(_) | OrderError::SerializationError(_) => {
                "The order report could not be written".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, OrderError>;
