use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarinaError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Marina is full (capacity {capacity})")]
    Full { capacity: usize },

    #[error("No boat named '{name}'")]
    NotFound { name: String },

    #[error("Payment exceeds the amount owed (${owed:.2})")]
    ExceedsOwed { owed: f64 },

    #[error("Invalid payment amount: {amount}")]
    InvalidAmount { amount: f64 },

    #[error("Invalid {field} {value:?}: {reason}")]
    InvalidField {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Cannot parse record '{line}': {reason}")]
    ParseError { line: String, reason: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Storage,
    Inventory,
    Input,
    Configuration,
}

impl MarinaError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MarinaError::IoError(_) | MarinaError::CsvError(_) => ErrorCategory::Storage,
            MarinaError::Full { .. }
            | MarinaError::NotFound { .. }
            | MarinaError::ExceedsOwed { .. } => ErrorCategory::Inventory,
            MarinaError::InvalidAmount { .. }
            | MarinaError::InvalidField { .. }
            | MarinaError::ParseError { .. } => ErrorCategory::Input,
            MarinaError::ConfigValidationError { .. }
            | MarinaError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    /// Message shown to the operator at the menu or on the terminal.
    pub fn user_friendly_message(&self) -> String {
        match self {
            MarinaError::IoError(e) => format!("Could not access the data file: {}", e),
            MarinaError::CsvError(e) => format!("Could not read or write boat records: {}", e),
            MarinaError::Full { .. } => "Marina is full!".to_string(),
            MarinaError::NotFound { .. } => "No boat with that name".to_string(),
            MarinaError::ExceedsOwed { owed } => {
                format!("That is more than the amount owed, ${:.2}", owed)
            }
            MarinaError::InvalidAmount { .. } => {
                "Payment amount must be a non-negative number".to_string()
            }
            MarinaError::InvalidField { field, reason, .. } => {
                format!("Invalid boat {}: {}", field, reason)
            }
            MarinaError::ParseError { reason, .. } => format!("Invalid boat data: {}", reason),
            MarinaError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            MarinaError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Storage => "Check that the data file path exists and is writable",
            ErrorCategory::Inventory => "Review the inventory listing and try again",
            ErrorCategory::Input => {
                "Enter boat data as name,length,placement,info,owed (e.g. Alpha,20.0,slip,5,100.00)"
            }
            ErrorCategory::Configuration => "Fix the TOML configuration file and restart",
        }
    }
}

pub type Result<T> = std::result::Result<T, MarinaError>;
