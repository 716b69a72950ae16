//! Logging macros for ergonomic log message formatting.
//!
//! The message is only formatted when the logger is enabled for the level,
//! so disabled call sites cost one level check.
//!
//! # Examples
//!
//! ```
//! use rust_logger_hierarchy::prelude::*;
//! use rust_logger_hierarchy::info;
//!
//! let hierarchy = Hierarchy::new();
//! let logger = hierarchy.get_instance("server").unwrap();
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_logger_hierarchy::prelude::*;
/// # let hierarchy = Hierarchy::new();
/// # let logger = hierarchy.get_instance("app").unwrap();
/// use rust_logger_hierarchy::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_with($level, || format!($($arg)+))
    };
}

/// Log a trace-level message.
///
/// # Examples
///
/// ```
/// # use rust_logger_hierarchy::prelude::*;
/// # let hierarchy = Hierarchy::new();
/// # let logger = hierarchy.get_instance("app").unwrap();
/// use rust_logger_hierarchy::trace;
/// trace!(logger, "Entering resolver");
/// trace!(logger, "Depth: {}", 3);
/// ```
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use rust_logger_hierarchy::prelude::*;
/// # let hierarchy = Hierarchy::new();
/// # let logger = hierarchy.get_instance("app").unwrap();
/// use rust_logger_hierarchy::debug;
/// debug!(logger, "Cache miss");
/// debug!(logger, "Key: {}", "user:42");
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log a info-level message.
///
/// # Examples
///
/// ```
/// # use rust_logger_hierarchy::prelude::*;
/// # let hierarchy = Hierarchy::new();
/// # let logger = hierarchy.get_instance("app").unwrap();
/// use rust_logger_hierarchy::info;
/// info!(logger, "Pool ready");
/// info!(logger, "Connections: {}", 8);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warn-level message.
///
/// # Examples
///
/// ```
/// # use rust_logger_hierarchy::prelude::*;
/// # let hierarchy = Hierarchy::new();
/// # let logger = hierarchy.get_instance("app").unwrap();
/// use rust_logger_hierarchy::warn;
/// warn!(logger, "Slow query");
/// warn!(logger, "Took {} ms", 950);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log a error-level message.
///
/// # Examples
///
/// ```
/// # use rust_logger_hierarchy::prelude::*;
/// # let hierarchy = Hierarchy::new();
/// # let logger = hierarchy.get_instance("app").unwrap();
/// use rust_logger_hierarchy::error;
/// error!(logger, "Connection lost");
/// error!(logger, "Peer: {}", "10.0.0.7");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
///
/// # Examples
///
/// ```
/// # use rust_logger_hierarchy::prelude::*;
/// # let hierarchy = Hierarchy::new();
/// # let logger = hierarchy.get_instance("app").unwrap();
/// use rust_logger_hierarchy::fatal;
/// fatal!(logger, "Registry corrupted");
/// fatal!(logger, "Cause: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}
