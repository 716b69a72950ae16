//! Process-wide default hierarchy

use super::{error::Result, hierarchy::Hierarchy, logger::LoggerRef};
use std::sync::OnceLock;

static DEFAULT_HIERARCHY: OnceLock<Hierarchy> = OnceLock::new();

/// The hierarchy used by [`get_logger`], created on first use
pub fn default_hierarchy() -> &'static Hierarchy {
    DEFAULT_HIERARCHY.get_or_init(Hierarchy::new)
}

/// Look up or create `name` in the default hierarchy
///
/// # Example
///
/// ```
/// use rust_logger_hierarchy::get_logger;
///
/// let logger = get_logger("app.db").unwrap();
/// assert_eq!(logger.name(), "app.db");
/// assert!(std::sync::Arc::ptr_eq(&logger, &get_logger("app.db").unwrap()));
/// ```
pub fn get_logger(name: &str) -> Result<LoggerRef> {
    default_hierarchy().get_instance(name)
}

/// Root of the default hierarchy
pub fn root_logger() -> LoggerRef {
    default_hierarchy().root()
}
