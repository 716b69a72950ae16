//! Hierarchical logger registry
//!
//! Maps dot-delimited names onto shared [`Logger`] nodes and keeps the
//! implied tree linked no matter in which order names are first requested.
//! A logger created before its ancestors is linked to the nearest existing
//! one (or root) and parked in a [`ProvisionNode`] for every missing
//! ancestor name; creating that ancestor later splices it into the chain.

use super::{
    context::HierarchyContext,
    diagnostics,
    error::{LoggerError, Result},
    factory::{DefaultLoggerFactory, LoggerFactory},
    log_level::LogLevel,
    logger::{Logger, LoggerRef},
    metrics::HierarchyMetrics,
    provision_node::ProvisionNode,
    threshold::DisableThreshold,
};
use parking_lot::Mutex;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

/// Everything guarded by the registry lock
struct Registry {
    loggers: HashMap<String, LoggerRef>,
    provision_nodes: HashMap<String, ProvisionNode>,
    factory: Box<dyn LoggerFactory>,
}

pub struct Hierarchy {
    registry: Mutex<Registry>,
    root: LoggerRef,
    default_root_level: LogLevel,
    context: Arc<HierarchyContext>,
}

impl Hierarchy {
    /// A hierarchy holding only root, at level `Debug`
    #[must_use]
    pub fn new() -> Self {
        HierarchyBuilder::new().build()
    }

    #[must_use]
    pub fn builder() -> HierarchyBuilder {
        HierarchyBuilder::new()
    }

    /// Look up `name`, creating and linking it with the current factory if absent.
    pub fn get_instance(&self, name: &str) -> Result<LoggerRef> {
        let mut guard = self.registry.lock();
        let Registry {
            loggers,
            provision_nodes,
            factory,
        } = &mut *guard;
        self.instance_impl(loggers, provision_nodes, &**factory, name)
    }

    /// Like [`get_instance`](Self::get_instance) but a logger that has to be
    /// created is made by `factory` instead of the installed one.
    pub fn get_instance_with(&self, name: &str, factory: &dyn LoggerFactory) -> Result<LoggerRef> {
        let mut guard = self.registry.lock();
        let Registry {
            loggers,
            provision_nodes,
            ..
        } = &mut *guard;
        self.instance_impl(loggers, provision_nodes, factory, name)
    }

    fn instance_impl(
        &self,
        loggers: &mut HashMap<String, LoggerRef>,
        provision_nodes: &mut HashMap<String, ProvisionNode>,
        factory: &dyn LoggerFactory,
        name: &str,
    ) -> Result<LoggerRef> {
        if name.is_empty() {
            return Err(LoggerError::invalid_name(name));
        }
        if let Some(existing) = loggers.get(name) {
            return Ok(Arc::clone(existing));
        }

        let logger: LoggerRef = Arc::new(factory.make_new_logger_instance(name, &self.context));
        if logger.name() != name {
            return Err(Self::invariant_violation(
                "get_instance",
                format!(
                    "factory '{}' returned logger '{}' for name '{}'",
                    factory.name(),
                    logger.name(),
                    name
                ),
            ));
        }

        match loggers.entry(name.to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(Arc::clone(&logger));
            }
            Entry::Occupied(_) => {
                return Err(Self::invariant_violation(
                    "get_instance",
                    format!("insert of logger '{}' failed", name),
                ));
            }
        }
        self.context.metrics().record_created();

        if let Some(node) = provision_nodes.get(name) {
            self.update_children(node, &logger);
            if provision_nodes.remove(name).is_none() {
                return Err(Self::invariant_violation(
                    "get_instance",
                    format!("delete of provision node '{}' failed", name),
                ));
            }
        }

        self.update_parents(loggers, provision_nodes, &logger);
        if diagnostics::internal_debugging() {
            diagnostics::debug(format!(
                "Created logger '{}' under '{}'",
                name,
                logger.parent().map(|p| p.name().to_string()).unwrap_or_default()
            ));
        }
        Ok(logger)
    }

    /// Link `logger` to its nearest existing ancestor, parking it on a
    /// provision node for every missing ancestor name in between.
    ///
    /// For "w.x.y.z" the candidates are "w.x.y", "w.x", "w", in that order.
    /// A leading dot yields no candidate: the empty name is root's.
    fn update_parents(
        &self,
        loggers: &HashMap<String, LoggerRef>,
        provision_nodes: &mut HashMap<String, ProvisionNode>,
        logger: &LoggerRef,
    ) {
        let name = logger.name();
        let mut end = name.len();

        while let Some(dot) = name[..end].rfind('.') {
            let prefix = &name[..dot];
            if prefix.is_empty() {
                break;
            }
            if let Some(ancestor) = loggers.get(prefix) {
                // The nearest ancestor is already linked further up.
                logger.set_parent(Arc::clone(ancestor));
                return;
            }
            provision_nodes
                .entry(prefix.to_string())
                .or_default()
                .push(Arc::clone(logger));
            end = dot;
        }

        logger.set_parent(Arc::clone(&self.root));
    }

    /// Splice a newly created `logger` between each waiting child and that
    /// child's current parent, unless the child already hangs below a more
    /// specific ancestor.
    fn update_children(&self, node: &ProvisionNode, logger: &LoggerRef) {
        for child in node.iter() {
            let Some(current) = child.parent() else {
                continue;
            };
            if !starts_with(current.name(), logger.name()) {
                logger.set_parent(current);
                child.set_parent(Arc::clone(logger));
                self.context.metrics().record_relink();
            }
        }
    }

    fn invariant_violation(operation: &str, message: String) -> LoggerError {
        diagnostics::error(format!("Hierarchy::{}() - {}", operation, message));
        LoggerError::invariant(operation, message)
    }

    /// True when a logger called `name` has been created. Names only
    /// provisioned for by a descendant do not count.
    pub fn exists(&self, name: &str) -> bool {
        self.registry.lock().loggers.contains_key(name)
    }

    /// Snapshot of every registered logger except root, in no particular order
    pub fn current_loggers(&self) -> Vec<LoggerRef> {
        self.registry.lock().loggers.values().cloned().collect()
    }

    /// Names that descendants are waiting on but that have not been created
    pub fn provisioned_names(&self) -> Vec<String> {
        self.registry.lock().provision_nodes.keys().cloned().collect()
    }

    /// Loggers waiting on the not-yet-created logger `name`
    pub fn waiting_children(&self, name: &str) -> Vec<String> {
        self.registry
            .lock()
            .provision_nodes
            .get(name)
            .map(ProvisionNode::names)
            .unwrap_or_default()
    }

    pub fn root(&self) -> LoggerRef {
        Arc::clone(&self.root)
    }

    pub fn context(&self) -> &Arc<HierarchyContext> {
        &self.context
    }

    pub fn metrics(&self) -> &HierarchyMetrics {
        self.context.metrics()
    }

    /// Suppress every event at or below `level`, unless latched
    pub fn disable(&self, level: LogLevel) {
        self.apply_disable(DisableThreshold::Level(level));
    }

    /// Disable by level name. An unrecognized name yields
    /// [`DisableThreshold::NotSet`], which suppresses nothing.
    pub fn disable_str(&self, level: &str) {
        let threshold = DisableThreshold::from_level_name(level);
        if threshold == DisableThreshold::NotSet {
            diagnostics::warn(format!(
                "Unrecognized level '{}' passed to disable(); threshold becomes NOT_SET",
                level
            ));
        }
        self.apply_disable(threshold);
    }

    pub fn disable_all(&self) {
        self.disable(LogLevel::Fatal);
    }

    pub fn disable_debug(&self) {
        self.disable(LogLevel::Debug);
    }

    pub fn disable_info(&self) {
        self.disable(LogLevel::Info);
    }

    /// Latch the threshold: later `disable*` calls are ignored until
    /// [`enable_all`](Self::enable_all).
    pub fn disable_override(&self) {
        self.apply_disable(DisableThreshold::Override);
    }

    fn apply_disable(&self, threshold: DisableThreshold) {
        let _guard = self.registry.lock();
        self.context.request_disable(threshold);
    }

    /// Clear the threshold to `Off`, latched or not
    pub fn enable_all(&self) {
        let _guard = self.registry.lock();
        self.context.enable_all();
    }

    pub fn is_disabled(&self, level: LogLevel) -> bool {
        self.context.is_disabled(level)
    }

    pub fn disable_threshold(&self) -> DisableThreshold {
        self.context.threshold()
    }

    /// Put every logger back to its freshly created state without touching
    /// the tree: root to its default level, every other logger unset and
    /// additive, the threshold off, and no appenders anywhere.
    pub fn reset_configuration(&self) {
        self.root.set_level(Some(self.default_root_level));
        self.enable_all();

        self.shutdown();

        for logger in self.current_loggers() {
            logger.set_level(None);
            logger.set_additivity(true);
        }
    }

    /// Close nested appenders and remove all appenders, root first, then
    /// every registered logger. The lock is held only for the snapshot.
    pub fn shutdown(&self) {
        let loggers = self.current_loggers();

        self.root.close_nested_appenders();
        self.root.remove_all_appenders();

        for logger in loggers {
            logger.close_nested_appenders();
            logger.remove_all_appenders();
        }
    }

    /// Forget every logger and provision node. Root is kept; handles held
    /// elsewhere stay usable but are no longer reachable by name.
    pub fn clear(&self) {
        let mut registry = self.registry.lock();
        registry.provision_nodes.clear();
        registry.loggers.clear();
    }

    /// Install a new factory; the previous one is dropped
    pub fn set_logger_factory(&self, factory: Box<dyn LoggerFactory>) {
        let previous = std::mem::replace(&mut self.registry.lock().factory, factory);
        diagnostics::debug(format!("Replaced logger factory '{}'", previous.name()));
    }

    /// Inspect the installed factory. `f` runs with the registry lock held
    /// and must not call back into this hierarchy.
    pub fn with_logger_factory<R>(&self, f: impl FnOnce(&dyn LoggerFactory) -> R) -> R {
        let registry = self.registry.lock();
        f(&*registry.factory)
    }
}

impl Default for Hierarchy {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Hierarchy {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Prefix test used when relinking: `name` starts with `prefix` and is
/// strictly longer than it.
fn starts_with(name: &str, prefix: &str) -> bool {
    name.len() > prefix.len() && name.starts_with(prefix)
}

/// Builder for constructing a [`Hierarchy`] with a fluent API
///
/// # Example
/// ```
/// use rust_logger_hierarchy::prelude::*;
///
/// let hierarchy = Hierarchy::builder()
///     .root_level(LogLevel::Info)
///     .disable_threshold(DisableThreshold::Level(LogLevel::Debug))
///     .build();
///
/// assert_eq!(hierarchy.root().level(), Some(LogLevel::Info));
/// assert!(hierarchy.is_disabled(LogLevel::Debug));
/// ```
pub struct HierarchyBuilder {
    root_level: LogLevel,
    disable_threshold: DisableThreshold,
    factory: Option<Box<dyn LoggerFactory>>,
}

impl HierarchyBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            root_level: LogLevel::Debug,
            disable_threshold: DisableThreshold::Off,
            factory: None,
        }
    }

    /// Level root starts with and returns to on `reset_configuration`
    #[must_use = "builder methods return a new value"]
    pub fn root_level(mut self, level: LogLevel) -> Self {
        self.root_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn disable_threshold(mut self, threshold: DisableThreshold) -> Self {
        self.disable_threshold = threshold;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn logger_factory<F: LoggerFactory + 'static>(mut self, factory: F) -> Self {
        self.factory = Some(Box::new(factory));
        self
    }

    pub fn build(self) -> Hierarchy {
        let context = HierarchyContext::with_threshold(self.disable_threshold);
        let root = Arc::new(Logger::new_root(self.root_level, &context));
        let factory: Box<dyn LoggerFactory> = self
            .factory
            .unwrap_or_else(|| Box::new(DefaultLoggerFactory));

        Hierarchy {
            registry: Mutex::new(Registry {
                loggers: HashMap::new(),
                provision_nodes: HashMap::new(),
                factory,
            }),
            root,
            default_root_level: self.root_level,
            context,
        }
    }
}

impl Default for HierarchyBuilder {
    fn default() -> Self {
        Self::new()
    }
}
