//! # Rust Logger Hierarchy
//!
//! The named-logger registry of the logger system: dot-delimited names
//! ("app.db.pool") map onto shared logger nodes arranged in a tree.
//!
//! ## Features
//!
//! - **Order independent**: ancestors may be created before or after their
//!   descendants; the tree always ends up the same
//! - **Level inheritance**: a logger without its own level uses the nearest
//!   ancestor's, ending at root
//! - **Additivity**: events propagate to ancestor appenders until a
//!   non-additive logger is reached
//! - **Global disable threshold** with an override latch
//! - **Thread Safe**: one registry lock, shared `Arc` logger handles
//!
//! ```
//! use rust_logger_hierarchy::prelude::*;
//!
//! let hierarchy = Hierarchy::new();
//! let io = hierarchy.get_instance("net.io").unwrap();
//! let net = hierarchy.get_instance("net").unwrap();
//!
//! assert_eq!(io.parent().unwrap().name(), "net");
//! net.set_level(Some(LogLevel::Warn));
//! assert!(!io.is_enabled_for(LogLevel::Info));
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{AsyncAppender, FileAppender};
    pub use crate::core::{
        default_hierarchy, get_logger, root_logger, Appender, DefaultLoggerFactory,
        DisableThreshold, FnLoggerFactory, Hierarchy, HierarchyBuilder, HierarchyContext,
        HierarchyMetrics, LogEntry, LogLevel, Logger, LoggerError, LoggerFactory, LoggerRef,
        Result,
    };
}

pub use crate::appenders::{AsyncAppender, FileAppender};
pub use crate::core::{
    default_hierarchy, get_logger, root_logger, Appender, DefaultLoggerFactory, DisableThreshold,
    FnLoggerFactory, Hierarchy, HierarchyBuilder, HierarchyContext, HierarchyMetrics, LogEntry,
    LogLevel, Logger, LoggerError, LoggerFactory, LoggerRef, ProvisionNode, Result,
};
