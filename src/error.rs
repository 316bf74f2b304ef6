use thiserror::Error;

/// Unified error type for actions-kit operations
#[derive(Error, Debug)]
pub enum ActionsKitError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version format error: {0}")]
    Format(String),

    #[error("Version validation error: {0}")]
    Validation(String),

    #[error("Release consistency error: {0}")]
    Consistency(String),

    #[error("Command failed: {0}")]
    Command(String),

    #[error("Download failed: {0}")]
    Http(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in actions-kit
pub type Result<T> = std::result::Result<T, ActionsKitError>;

impl ActionsKitError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ActionsKitError::Config(msg.into())
    }

    /// Create a version format error with context
    pub fn format(msg: impl Into<String>) -> Self {
        ActionsKitError::Format(msg.into())
    }

    /// Create a version validation error with context
    pub fn validation(msg: impl Into<String>) -> Self {
        ActionsKitError::Validation(msg.into())
    }

    /// Create a release consistency error with context
    pub fn consistency(msg: impl Into<String>) -> Self {
        ActionsKitError::Consistency(msg.into())
    }

    /// Create a command error with context
    pub fn command(msg: impl Into<String>) -> Self {
        ActionsKitError::Command(msg.into())
    }

    /// Create an HTTP error with context
    pub fn http(msg: impl Into<String>) -> Self {
        ActionsKitError::Http(msg.into())
    }
}
