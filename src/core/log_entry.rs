//! Log entry structure

use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

thread_local! {
    static THREAD_LABEL: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Thread name if the thread has one, otherwise its id. Cached per thread.
fn current_thread_label() -> String {
    THREAD_LABEL.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| {
                let thread = std::thread::current();
                match thread.name() {
                    Some(name) => name.to_string(),
                    None => format!("{:?}", thread.id()),
                }
            })
            .clone()
    })
}

/// One event as seen by appenders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Name of the logger the event was issued on (empty for root)
    pub logger: String,
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub thread: String,
}

impl LogEntry {
    /// Escape line breaks and tabs so a message cannot forge extra log lines
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(logger: impl Into<String>, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            logger: logger.into(),
            level,
            message: Self::sanitize_message(&message.into()),
            timestamp: Utc::now(),
            thread: current_thread_label(),
        }
    }

    /// Logger name for display; root renders as `root`
    pub fn logger_label(&self) -> &str {
        if self.logger.is_empty() {
            "root"
        } else {
            &self.logger
        }
    }
}
