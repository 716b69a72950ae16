//! Error types for the logger hierarchy

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// The empty name is reserved for the root logger
    #[error("Invalid logger name '{name}': the empty name is reserved for the root logger")]
    InvalidLoggerName { name: String },

    /// The registry tables disagree with what the lock-protected caller just observed
    #[error("Registry invariant violated in {operation}: {message}")]
    RegistryInvariant { operation: String, message: String },

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Appender already closed
    #[error("Appender '{name}' is closed")]
    AppenderClosed { name: String },

    /// Channel send error
    #[error("Failed to send log entry to async worker")]
    ChannelSendError,
}

impl LoggerError {
    /// Create a registry invariant violation error
    pub fn invariant(operation: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::RegistryInvariant {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create an invalid logger name error
    pub fn invalid_name(name: impl Into<String>) -> Self {
        LoggerError::InvalidLoggerName { name: name.into() }
    }

    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an appender closed error
    pub fn appender_closed(name: impl Into<String>) -> Self {
        LoggerError::AppenderClosed { name: name.into() }
    }

    /// Whether this error signals broken registry bookkeeping
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, LoggerError::RegistryInvariant { .. })
    }
}
