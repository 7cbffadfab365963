//! Error handling for name-sweep

use thiserror::Error;

/// Main error type for name-sweep
#[derive(Error, Debug, Clone)]
pub enum SweepError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Corrupt checkpoint at {path}: cannot parse {content:?} as an index")]
    Checkpoint { path: String, content: String },

    #[error("Network error: {message}")]
    Network {
        message: String,
        url: Option<String>,
    },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl SweepError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a checkpoint corruption error
    pub fn checkpoint(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::Checkpoint {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Create a network error
    pub fn network(message: impl Into<String>, url: Option<String>) -> Self {
        Self::Network {
            message: message.into(),
            url,
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether the error was raised before any probe could have been sent
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message } => {
                format!("❌ Configuration problem: {}\n💡 Use --help for usage information", message)
            }
            Self::Checkpoint { path, content } => {
                format!(
                    "❌ Checkpoint file {} holds {:?}, which is not an index\n💡 Fix or delete the file, or pass --reset to start over",
                    path, content
                )
            }
            Self::Network { message, url } => {
                let target = url.as_ref().map_or(String::new(), |u| format!(" ({})", u));
                format!("❌ Network error{}: {}\n💡 Progress up to the last checkpoint is kept; rerun to resume", target, message)
            }
            Self::Io { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!("❌ File error{}: {}\n💡 Check file permissions and paths", path_info, message)
            }
            Self::Internal { message } => {
                format!("❌ Internal error: {}\n💡 This is a bug, please report it", message)
            }
        }
    }
}

/// Convert from common error types
impl From<reqwest::Error> for SweepError {
    fn from(err: reqwest::Error) -> Self {
        let url = err.url().map(|u| u.to_string());

        if err.is_timeout() {
            Self::network("Request timed out", url)
        } else if err.is_connect() {
            Self::network("Connection failed", url)
        } else if err.is_request() {
            Self::network(format!("Request failed: {}", err), url)
        } else {
            Self::network(err.to_string(), url)
        }
    }
}

impl From<serde_json::Error> for SweepError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal(format!("Failed to serialize report: {}", err))
    }
}

impl From<std::io::Error> for SweepError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), None)
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SweepError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkpoint_error_mentions_content() {
        let err = SweepError::checkpoint("/var/tmp/twitnames_3", "abc");
        let text = err.to_string();
        assert!(text.contains("/var/tmp/twitnames_3"));
        assert!(text.contains("abc"));
        assert!(err.user_message().contains("--reset"));
    }

    #[test]
    fn test_io_conversion() {
        let err: SweepError = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, SweepError::Io { .. }));
        assert!(!err.is_config());
    }
}
