use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanError {
    #[error("Input file not found: {path}")]
    InputNotFound { path: String },

    #[error("Phone column '{column}' not found. Available columns: {}", .available.join(", "))]
    ColumnNotFound {
        column: String,
        available: Vec<String>,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

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

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Config,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CleanError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CleanError::InputNotFound { .. } | CleanError::ColumnNotFound { .. } => {
                ErrorCategory::Input
            }
            CleanError::ConfigError { .. }
            | CleanError::InvalidConfigValueError { .. }
            | CleanError::MissingConfigError { .. } => ErrorCategory::Config,
            CleanError::CsvError(_) | CleanError::IoError(_) => ErrorCategory::Io,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 兩種致命輸入錯誤與配置錯誤一律以退出碼 1 結束
            ErrorCategory::Input | ErrorCategory::Config => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        self.to_string()
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CleanError::InputNotFound { .. } => "Check that the input path exists and is readable",
            CleanError::ColumnNotFound { .. } => {
                "Pass --phone-col with one of the listed column names (matching is case-insensitive)"
            }
            CleanError::CsvError(_) => "Verify the input file is a CSV with a header row",
            CleanError::IoError(_) => "Check file permissions and free disk space",
            CleanError::ConfigError { .. }
            | CleanError::InvalidConfigValueError { .. }
            | CleanError::MissingConfigError { .. } => {
                "Review the command-line arguments or configuration file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CleanError>;
