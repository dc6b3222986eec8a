use serde::{Deserialize, Serialize};

/// Error codes for structured error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Authentication (1xxx)
    AuthenticationFailed = 1001,
    RateLimited = 1002,

    // Resource Not Found (2xxx)
    UserNotFound = 2001,

    // Upstream (3xxx)
    UpstreamError = 3001,

    // Infrastructure (5xxx)
    InfrastructureError = 5001,

    // Validation (6xxx)
    InvalidInput = 6002,
}

impl ErrorCode {
    /// Get error code as integer
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ErrorCode::UserNotFound | ErrorCode::InvalidInput => ErrorSeverity::Info,

            ErrorCode::RateLimited | ErrorCode::UpstreamError => ErrorSeverity::Warning,

            ErrorCode::AuthenticationFailed | ErrorCode::InfrastructureError => {
                ErrorSeverity::Error
            }
        }
    }

    /// Check if error is recoverable
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ErrorCode::RateLimited | ErrorCode::UpstreamError | ErrorCode::InfrastructureError
        )
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl DomainError {
    /// Get error code
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::InvalidInput(_) => ErrorCode::InvalidInput,
            DomainError::Authentication(_) => ErrorCode::AuthenticationFailed,
            DomainError::NotFound(_) => ErrorCode::UserNotFound,
            DomainError::RateLimited(_) => ErrorCode::RateLimited,
            DomainError::Upstream(_) => ErrorCode::UpstreamError,
            DomainError::Infrastructure(_) => ErrorCode::InfrastructureError,
        }
    }

    /// Get error message
    pub fn message(&self) -> &str {
        match self {
            DomainError::InvalidInput(msg)
            | DomainError::Authentication(msg)
            | DomainError::NotFound(msg)
            | DomainError::RateLimited(msg)
            | DomainError::Upstream(msg)
            | DomainError::Infrastructure(msg) => msg,
        }
    }

    /// Upstream-side failures: everything except caller mistakes.
    pub fn is_upstream_failure(&self) -> bool {
        !matches!(self, DomainError::InvalidInput(_))
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        self.code().severity()
    }

    /// Check if error is recoverable
    pub fn is_recoverable(&self) -> bool {
        self.code().is_recoverable()
    }

    /// Format error with code
    pub fn format_with_code(&self) -> String {
        format!("[{}] {}", self.code().code(), self)
    }
}
