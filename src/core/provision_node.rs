//! Loggers waiting for an ancestor that does not exist yet

use super::logger::LoggerRef;

/// Ordered list of loggers created before the logger whose name keys this
/// node. Consumed, then discarded, when that logger is created.
#[derive(Debug, Default, Clone)]
pub struct ProvisionNode {
    waiting: Vec<LoggerRef>,
}

impl ProvisionNode {
    pub fn push(&mut self, logger: LoggerRef) {
        self.waiting.push(logger);
    }

    pub fn iter(&self) -> impl Iterator<Item = &LoggerRef> {
        self.waiting.iter()
    }

    /// Names of the waiting loggers, in arrival order
    pub fn names(&self) -> Vec<String> {
        self.waiting.iter().map(|l| l.name().to_string()).collect()
    }
}
