//! Appender trait for log output destinations

use super::{error::Result, log_entry::LogEntry};

pub trait Appender: Send + Sync {
    fn append(&mut self, entry: &LogEntry) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;

    /// Release the destination. Called once when the appender is removed from a logger.
    fn close(&mut self) -> Result<()> {
        self.flush()
    }

    /// Child appenders wrapped by a composite appender, if any.
    fn nested_appenders_mut(&mut self) -> Option<&mut Vec<Box<dyn Appender>>> {
        None
    }
}

/// Close every appender nested under `appender`, depth first, then the
/// nested lists themselves are emptied. `appender` itself stays open.
pub(crate) fn close_nested(appender: &mut dyn Appender) -> Vec<crate::core::LoggerError> {
    let mut failures = Vec::new();
    if let Some(children) = appender.nested_appenders_mut() {
        for child in children.iter_mut() {
            failures.extend(close_nested(child.as_mut()));
            if let Err(e) = child.close() {
                failures.push(e);
            }
        }
        children.clear();
    }
    failures
}
