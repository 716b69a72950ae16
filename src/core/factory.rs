//! Logger creation strategies

use super::{context::HierarchyContext, logger::Logger};
use std::sync::Arc;

/// Produces new logger nodes for a hierarchy.
///
/// Called with the registry lock held. An implementation is handed the
/// hierarchy's shared [`HierarchyContext`] rather than the hierarchy, and
/// must not call back into the hierarchy that invoked it by any other route
/// either: [`get_logger`](super::global::get_logger) or a captured
/// `Hierarchy` reference deadlocks on the non-reentrant registry lock.
///
/// The returned logger must carry `name`; a logger under another name is
/// rejected with [`LoggerError::RegistryInvariant`](super::error::LoggerError::RegistryInvariant).
///
/// # Example
///
/// ```
/// use rust_logger_hierarchy::prelude::*;
/// use std::sync::Arc;
///
/// struct QuietFactory;
///
/// impl LoggerFactory for QuietFactory {
///     fn make_new_logger_instance(&self, name: &str, context: &Arc<HierarchyContext>) -> Logger {
///         Logger::new(name, context).with_level(Some(LogLevel::Warn))
///     }
/// }
///
/// let hierarchy = Hierarchy::builder().logger_factory(QuietFactory).build();
/// let logger = hierarchy.get_instance("db").unwrap();
/// assert_eq!(logger.level(), Some(LogLevel::Warn));
/// ```
pub trait LoggerFactory: Send + Sync {
    fn make_new_logger_instance(&self, name: &str, context: &Arc<HierarchyContext>) -> Logger;

    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Plain loggers: unset level, additivity on, no appenders
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultLoggerFactory;

impl LoggerFactory for DefaultLoggerFactory {
    fn make_new_logger_instance(&self, name: &str, context: &Arc<HierarchyContext>) -> Logger {
        Logger::new(name, context)
    }

    fn name(&self) -> &str {
        "default"
    }
}

/// Adapter turning a closure into a factory
pub struct FnLoggerFactory<F> {
    name: String,
    make: F,
}

impl<F> FnLoggerFactory<F> {
    pub fn new(name: impl Into<String>, make: F) -> Self
    where
        F: Fn(&str, &Arc<HierarchyContext>) -> Logger + Send + Sync,
    {
        Self {
            name: name.into(),
            make,
        }
    }
}

impl<F> LoggerFactory for FnLoggerFactory<F>
where
    F: Fn(&str, &Arc<HierarchyContext>) -> Logger + Send + Sync,
{
    fn make_new_logger_instance(&self, name: &str, context: &Arc<HierarchyContext>) -> Logger {
        (self.make)(name, context)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
