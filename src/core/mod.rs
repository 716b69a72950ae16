//! Core logger hierarchy types and traits

pub mod appender;
pub mod context;
pub mod diagnostics;
pub mod error;
pub mod factory;
pub mod global;
pub mod hierarchy;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod provision_node;
pub mod threshold;

pub use appender::Appender;
pub use context::HierarchyContext;
pub use error::{LoggerError, Result};
pub use factory::{DefaultLoggerFactory, FnLoggerFactory, LoggerFactory};
pub use global::{default_hierarchy, get_logger, root_logger};
pub use hierarchy::{Hierarchy, HierarchyBuilder};
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerRef};
pub use metrics::HierarchyMetrics;
pub use provision_node::ProvisionNode;
pub use threshold::DisableThreshold;
