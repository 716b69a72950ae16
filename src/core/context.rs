//! State a hierarchy shares with every logger it creates

use super::{
    diagnostics, log_level::LogLevel, metrics::HierarchyMetrics, threshold::DisableThreshold,
};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// The part of a [`Hierarchy`](crate::Hierarchy) a logger needs while logging.
///
/// Loggers hold an `Arc` to this rather than to the hierarchy, so the
/// registry table never participates in a reference cycle and a factory
/// handed the context has no way to re-enter the registry lock.
#[derive(Debug, Default)]
pub struct HierarchyContext {
    disable: RwLock<DisableThreshold>,
    no_appender_warning_emitted: AtomicBool,
    metrics: HierarchyMetrics,
}

impl HierarchyContext {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn with_threshold(threshold: DisableThreshold) -> Arc<Self> {
        Arc::new(Self {
            disable: RwLock::new(threshold),
            ..Self::default()
        })
    }

    pub fn threshold(&self) -> DisableThreshold {
        *self.disable.read()
    }

    pub fn is_disabled(&self, level: LogLevel) -> bool {
        self.disable.read().suppresses(level)
    }

    /// Apply a `disable*` request; ignored once the override latch is set.
    /// Returns whether the threshold changed.
    pub(crate) fn request_disable(&self, threshold: DisableThreshold) -> bool {
        let mut current = self.disable.write();
        if current.is_latched() {
            diagnostics::debug(format!(
                "disable({}) ignored: threshold is latched to OVERRIDE",
                threshold
            ));
            return false;
        }
        *current = threshold;
        true
    }

    pub(crate) fn enable_all(&self) {
        *self.disable.write() = DisableThreshold::Off;
    }

    pub fn metrics(&self) -> &HierarchyMetrics {
        &self.metrics
    }

    /// Warn once per hierarchy that an event reached no appender at all.
    pub(crate) fn warn_no_appenders(&self, logger_label: &str) {
        if !self.no_appender_warning_emitted.swap(true, Ordering::Relaxed) {
            diagnostics::warn(format!(
                "No appenders could be found for logger ({}).",
                logger_label
            ));
            diagnostics::warn("Please initialize the logger hierarchy properly.");
        }
    }
}
