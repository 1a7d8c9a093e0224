use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Profile endpoint answered with status {status}")]
    ProfileStatusError { status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown page: {value}")]
    UnknownPage { value: String },

    #[error("Unknown {kind}: {value}")]
    UnknownInput { kind: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Io,
    Data,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SiteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SiteError::ApiError(_) | SiteError::ProfileStatusError { .. } => ErrorCategory::Network,
            SiteError::ConfigError { .. } | SiteError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            SiteError::IoError(_) => ErrorCategory::Io,
            SiteError::SerializationError(_) => ErrorCategory::Data,
            SiteError::UnknownPage { .. } | SiteError::UnknownInput { .. } => {
                ErrorCategory::Input
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 個人檔案讀取失敗只影響彈窗，頁面照常運作
            ErrorCategory::Network | ErrorCategory::Data => ErrorSeverity::Low,
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SiteError::ApiError(_) => {
                "Check network connectivity; the profile modal keeps its loading state".to_string()
            }
            SiteError::ProfileStatusError { status } if *status == 403 || *status == 429 => {
                "The profile API is rate limiting this client, try again later".to_string()
            }
            SiteError::ProfileStatusError { .. } => {
                "Verify the configured username exists on the profile API".to_string()
            }
            SiteError::IoError(_) => "Check that the output directory is writable".to_string(),
            SiteError::SerializationError(_) => {
                "The profile API returned an unexpected payload".to_string()
            }
            SiteError::ConfigError { .. } | SiteError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line arguments".to_string()
            }
            SiteError::UnknownPage { .. } => {
                "Use one of: home, services, portfolio, contact, legal".to_string()
            }
            SiteError::UnknownInput { .. } => "Type 'help' to list accepted values".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SiteError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration '{}' is invalid: {}", field, reason)
            }
            SiteError::UnknownPage { value } => format!("'{}' is not a page of this site", value),
            SiteError::UnknownInput { kind, value } => {
                format!("'{}' is not a known {}", value, kind)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
