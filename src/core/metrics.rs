//! Hierarchy metrics for observability
//!
//! Counters describing how the registry and its loggers are being used:
//! how many loggers were created, how many provisional children were
//! relinked, and how many events were dispatched or suppressed.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for hierarchy observability
///
/// # Example
///
/// ```
/// use rust_logger_hierarchy::Hierarchy;
///
/// let hierarchy = Hierarchy::new();
/// hierarchy.get_instance("net.io").unwrap();
/// hierarchy.get_instance("net").unwrap();
///
/// let metrics = hierarchy.metrics();
/// assert_eq!(metrics.loggers_created(), 2);
/// assert_eq!(metrics.provision_relinks(), 1);
/// ```
#[derive(Debug)]
pub struct HierarchyMetrics {
    /// Number of loggers produced by a factory and inserted into the table
    loggers_created: AtomicU64,

    /// Number of waiting children spliced under a newly created ancestor
    provision_relinks: AtomicU64,

    /// Number of events handed to the appender chain
    events_dispatched: AtomicU64,

    /// Number of events rejected by the disable threshold or the chained level
    events_suppressed: AtomicU64,

    /// Number of appender calls that returned an error
    appender_failures: AtomicU64,
}

impl HierarchyMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            loggers_created: AtomicU64::new(0),
            provision_relinks: AtomicU64::new(0),
            events_dispatched: AtomicU64::new(0),
            events_suppressed: AtomicU64::new(0),
            appender_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn loggers_created(&self) -> u64 {
        self.loggers_created.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn provision_relinks(&self) -> u64 {
        self.provision_relinks.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn events_dispatched(&self) -> u64 {
        self.events_dispatched.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn events_suppressed(&self) -> u64 {
        self.events_suppressed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn appender_failures(&self) -> u64 {
        self.appender_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_created(&self) -> u64 {
        self.loggers_created.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_relink(&self) -> u64 {
        self.provision_relinks.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_dispatched(&self) -> u64 {
        self.events_dispatched.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_suppressed(&self) -> u64 {
        self.events_suppressed.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_appender_failure(&self) -> u64 {
        self.appender_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of events suppressed, as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if no events have been issued.
    pub fn suppression_rate(&self) -> f64 {
        let suppressed = self.events_suppressed() as f64;
        let total = self.events_dispatched() as f64 + suppressed;
        if total == 0.0 {
            0.0
        } else {
            (suppressed / total) * 100.0
        }
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.loggers_created.store(0, Ordering::Relaxed);
        self.provision_relinks.store(0, Ordering::Relaxed);
        self.events_dispatched.store(0, Ordering::Relaxed);
        self.events_suppressed.store(0, Ordering::Relaxed);
        self.appender_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for HierarchyMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for HierarchyMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            loggers_created: AtomicU64::new(self.loggers_created()),
            provision_relinks: AtomicU64::new(self.provision_relinks()),
            events_dispatched: AtomicU64::new(self.events_dispatched()),
            events_suppressed: AtomicU64::new(self.events_suppressed()),
            appender_failures: AtomicU64::new(self.appender_failures()),
        }
    }
}
