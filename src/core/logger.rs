//! Named logger node

use super::{
    appender::{self, Appender},
    context::HierarchyContext,
    diagnostics,
    error::{LoggerError, Result},
    log_entry::LogEntry,
    log_level::LogLevel,
};
use parking_lot::RwLock;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared handle to a logger registered in a hierarchy
pub type LoggerRef = Arc<Logger>;

/// One named node of the logger tree.
///
/// The parent link points child to parent only, so a tree of `LoggerRef`s
/// never forms a cycle. The registry owns the name table; callers share the
/// nodes through [`LoggerRef`].
pub struct Logger {
    name: String,
    is_root: bool,
    level: RwLock<Option<LogLevel>>,
    additivity: AtomicBool,
    parent: RwLock<Option<LoggerRef>>,
    appenders: RwLock<Vec<Box<dyn Appender>>>,
    context: Arc<HierarchyContext>,
}

impl Logger {
    /// Create an unlinked logger with an unset level and additivity on.
    ///
    /// Intended for [`LoggerFactory`](crate::LoggerFactory) implementations;
    /// the hierarchy links the node into the tree after the factory returns.
    #[must_use]
    pub fn new(name: impl Into<String>, context: &Arc<HierarchyContext>) -> Self {
        Self {
            name: name.into(),
            is_root: false,
            level: RwLock::new(None),
            additivity: AtomicBool::new(true),
            parent: RwLock::new(None),
            appenders: RwLock::new(Vec::new()),
            context: Arc::clone(context),
        }
    }

    pub(crate) fn new_root(level: LogLevel, context: &Arc<HierarchyContext>) -> Self {
        Self {
            name: String::new(),
            is_root: true,
            level: RwLock::new(Some(level)),
            additivity: AtomicBool::new(true),
            parent: RwLock::new(None),
            appenders: RwLock::new(Vec::new()),
            context: Arc::clone(context),
        }
    }

    /// Preset the level of a freshly made logger
    #[must_use]
    pub fn with_level(self, level: Option<LogLevel>) -> Self {
        self.set_level(level);
        self
    }

    /// Preset the additivity of a freshly made logger
    #[must_use]
    pub fn with_additivity(self, additive: bool) -> Self {
        self.set_additivity(additive);
        self
    }

    /// Attach an appender to a freshly made logger
    #[must_use]
    pub fn with_appender<A: Appender + 'static>(self, appender: A) -> Self {
        self.add_appender(Box::new(appender));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_root(&self) -> bool {
        self.is_root
    }

    /// Own level, `None` when unset
    pub fn level(&self) -> Option<LogLevel> {
        *self.level.read()
    }

    /// Set or unset the level. Root always keeps an explicit level; an
    /// attempt to unset it is reported and ignored.
    pub fn set_level(&self, level: Option<LogLevel>) {
        if self.is_root && level.is_none() {
            diagnostics::error("Attempted to unset the level of the root logger; ignored.");
            return;
        }
        *self.level.write() = level;
    }

    pub fn additivity(&self) -> bool {
        self.additivity.load(Ordering::Relaxed)
    }

    pub fn set_additivity(&self, additive: bool) {
        self.additivity.store(additive, Ordering::Relaxed);
    }

    /// The resolved parent; `None` only for root
    pub fn parent(&self) -> Option<LoggerRef> {
        self.parent.read().clone()
    }

    pub(crate) fn set_parent(&self, parent: LoggerRef) {
        *self.parent.write() = Some(parent);
    }

    /// Nearest explicit level walking up from this logger.
    ///
    /// The walk is not guarded by the registry lock; a concurrent relink
    /// shows either the old or the new ancestor, both valid.
    pub fn chained_level(&self) -> LogLevel {
        if let Some(level) = self.level() {
            return level;
        }
        let mut current = self.parent();
        while let Some(logger) = current {
            if let Some(level) = logger.level() {
                return level;
            }
            current = logger.parent();
        }
        // Only reachable for a logger that was never linked into a hierarchy.
        LogLevel::default()
    }

    /// True iff `level` clears both the hierarchy's disable threshold and
    /// this logger's chained level.
    pub fn is_enabled_for(&self, level: LogLevel) -> bool {
        if self.context.is_disabled(level) {
            return false;
        }
        level >= self.chained_level()
    }

    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        if !self.is_enabled_for(level) {
            self.context.metrics().record_suppressed();
            return;
        }
        self.forced_log(level, message);
    }

    /// Like [`log`](Self::log), but the message is only built when enabled
    pub fn log_with<F: FnOnce() -> String>(&self, level: LogLevel, message: F) {
        if !self.is_enabled_for(level) {
            self.context.metrics().record_suppressed();
            return;
        }
        self.forced_log(level, message());
    }

    /// Dispatch without consulting levels or the disable threshold
    pub fn forced_log(&self, level: LogLevel, message: impl Into<String>) {
        let entry = LogEntry::new(self.name.as_str(), level, message);
        self.call_appenders(&entry);
    }

    /// Hand `entry` to this logger's appenders, then to each ancestor's,
    /// stopping after the first logger whose additivity is off.
    pub fn call_appenders(&self, entry: &LogEntry) {
        self.context.metrics().record_dispatched();

        let mut writes = self.append_loop(entry);
        if self.additivity() {
            let mut current = self.parent();
            while let Some(logger) = current {
                writes += logger.append_loop(entry);
                if !logger.additivity() {
                    break;
                }
                current = logger.parent();
            }
        }

        if writes == 0 {
            self.context.warn_no_appenders(entry.logger_label());
        }
    }

    fn append_loop(&self, entry: &LogEntry) -> usize {
        let mut appenders = self.appenders.write();
        for appender in appenders.iter_mut() {
            if let Err(e) = appender.append(entry) {
                self.context.metrics().record_appender_failure();
                diagnostics::error(format!("Appender '{}' failed: {}", appender.name(), e));
            }
        }
        appenders.len()
    }

    #[inline]
    pub fn trace(&self, message: impl Into<String>) {
        self.log(LogLevel::Trace, message);
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    pub fn fatal(&self, message: impl Into<String>) {
        self.log(LogLevel::Fatal, message);
    }

    pub fn add_appender(&self, appender: Box<dyn Appender>) {
        self.appenders.write().push(appender);
    }

    pub fn appender_names(&self) -> Vec<String> {
        self.appenders
            .read()
            .iter()
            .map(|a| a.name().to_string())
            .collect()
    }

    pub fn has_appender(&self, name: &str) -> bool {
        self.appenders.read().iter().any(|a| a.name() == name)
    }

    pub fn appender_count(&self) -> usize {
        self.appenders.read().len()
    }

    /// Detach the first appender called `name` and hand it back unclosed
    pub fn remove_appender(&self, name: &str) -> Option<Box<dyn Appender>> {
        let mut appenders = self.appenders.write();
        let index = appenders.iter().position(|a| a.name() == name)?;
        Some(appenders.remove(index))
    }

    /// Close every appender wrapped inside a composite appender attached
    /// here. The attached appenders themselves stay in place.
    pub fn close_nested_appenders(&self) {
        let mut appenders = self.appenders.write();
        for attached in appenders.iter_mut() {
            for e in appender::close_nested(attached.as_mut()) {
                self.report_close_failure(&e);
            }
        }
    }

    /// Close and drop every attached appender
    pub fn remove_all_appenders(&self) {
        let removed: Vec<Box<dyn Appender>> = self.appenders.write().drain(..).collect();
        for mut appender in removed {
            if let Err(e) = appender.close() {
                self.report_close_failure(&e);
            }
        }
    }

    fn report_close_failure(&self, error: &LoggerError) {
        self.context.metrics().record_appender_failure();
        diagnostics::error(format!(
            "Failed to close appender of logger ({}): {}",
            if self.is_root { "root" } else { self.name.as_str() },
            error
        ));
    }

    pub fn flush(&self) -> Result<()> {
        let mut appenders = self.appenders.write();
        for appender in appenders.iter_mut() {
            appender.flush()?;
        }
        Ok(())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level())
            .field("additivity", &self.additivity())
            .field("parent", &self.parent().map(|p| p.name.clone()))
            .field("appenders", &self.appender_names())
            .finish()
    }
}
