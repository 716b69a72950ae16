//! Asynchronous composite appender
//!
//! Wraps child appenders and feeds them from a worker thread over a bounded
//! channel. The children are nested appenders: they belong to the wrapper,
//! not to the logger the wrapper is attached to.

use crate::core::{diagnostics, Appender, LogEntry, LoggerError, Result};
use crossbeam_channel::{bounded, Receiver, Sender};
use std::thread::{self, JoinHandle};

enum Command {
    Entry(LogEntry),
    Flush(Sender<()>),
}

/// Forwards entries to its children on a background thread.
///
/// The worker starts on the first `append` and keeps the children until it
/// is stopped; [`Appender::nested_appenders_mut`] and [`Appender::close`]
/// stop it (draining the queue) and take the children back.
///
/// # Example
///
/// ```
/// use rust_logger_hierarchy::appenders::{AsyncAppender, FileAppender};
/// use rust_logger_hierarchy::Hierarchy;
///
/// let dir = tempfile::tempdir().unwrap();
/// let file = FileAppender::new(dir.path().join("jobs.log")).unwrap();
///
/// let hierarchy = Hierarchy::new();
/// hierarchy
///     .root()
///     .add_appender(Box::new(AsyncAppender::new(256).with_appender(file)));
/// hierarchy.get_instance("jobs").unwrap().info("queued");
/// hierarchy.shutdown();
///
/// let written = std::fs::read_to_string(dir.path().join("jobs.log")).unwrap();
/// assert!(written.contains("jobs - queued"));
/// ```
pub struct AsyncAppender {
    name: String,
    buffer_size: usize,
    children: Vec<Box<dyn Appender>>,
    sender: Option<Sender<Command>>,
    worker: Option<JoinHandle<Vec<Box<dyn Appender>>>>,
}

impl AsyncAppender {
    pub fn new(buffer_size: usize) -> Self {
        Self {
            name: "async".to_string(),
            buffer_size: buffer_size.max(1),
            children: Vec::new(),
            sender: None,
            worker: None,
        }
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Attach a child before the worker starts
    #[must_use]
    pub fn with_appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.add_appender(Box::new(appender));
        self
    }

    /// Attach a child; a running worker is stopped first and restarts on the next append
    pub fn add_appender(&mut self, appender: Box<dyn Appender>) {
        self.stop_worker();
        self.children.push(appender);
    }

    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    fn ensure_worker(&mut self) -> Result<&Sender<Command>> {
        if self.sender.is_none() {
            let (sender, receiver) = bounded(self.buffer_size);
            let children = std::mem::take(&mut self.children);
            let name = self.name.clone();
            let handle = thread::Builder::new()
                .name(format!("{}-appender", self.name))
                .spawn(move || Self::run(&name, receiver, children))
                .map_err(|e| {
                    LoggerError::io_operation("spawning async appender worker", self.name.clone(), e)
                })?;
            self.sender = Some(sender);
            self.worker = Some(handle);
        }
        self.sender
            .as_ref()
            .ok_or_else(|| LoggerError::appender_closed(self.name.as_str()))
    }

    fn run(
        name: &str,
        receiver: Receiver<Command>,
        mut children: Vec<Box<dyn Appender>>,
    ) -> Vec<Box<dyn Appender>> {
        // Ends once the sender is dropped and the queue is drained.
        for command in receiver.iter() {
            match command {
                Command::Entry(entry) => {
                    for child in children.iter_mut() {
                        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                            child.append(&entry)
                        }));
                        match outcome {
                            Ok(Ok(())) => {}
                            Ok(Err(e)) => diagnostics::error(format!(
                                "Appender '{}' nested in '{}' failed: {}",
                                child.name(),
                                name,
                                e
                            )),
                            Err(_) => diagnostics::error(format!(
                                "Appender '{}' nested in '{}' panicked; other appenders continue",
                                child.name(),
                                name
                            )),
                        }
                    }
                }
                Command::Flush(ack) => {
                    for child in children.iter_mut() {
                        if let Err(e) = child.flush() {
                            diagnostics::error(format!(
                                "Appender '{}' nested in '{}' flush failed: {}",
                                child.name(),
                                name,
                                e
                            ));
                        }
                    }
                    let _ = ack.send(());
                }
            }
        }
        children
    }

    /// Drain the queue, join the worker and take the children back
    fn stop_worker(&mut self) {
        drop(self.sender.take());
        if let Some(handle) = self.worker.take() {
            match handle.join() {
                Ok(children) => self.children.extend(children),
                Err(_) => diagnostics::error(format!(
                    "Worker of appender '{}' panicked; its nested appenders are lost",
                    self.name
                )),
            }
        }
    }
}

impl Appender for AsyncAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let sender = self.ensure_worker()?;
        sender
            .send(Command::Entry(entry.clone()))
            .map_err(|_| LoggerError::ChannelSendError)
    }

    /// Blocks until the worker has handed every queued entry to the children
    fn flush(&mut self) -> Result<()> {
        match &self.sender {
            Some(sender) => {
                let (ack_tx, ack_rx) = bounded(1);
                sender
                    .send(Command::Flush(ack_tx))
                    .map_err(|_| LoggerError::ChannelSendError)?;
                ack_rx.recv().map_err(|_| LoggerError::ChannelSendError)
            }
            None => {
                for child in self.children.iter_mut() {
                    child.flush()?;
                }
                Ok(())
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn close(&mut self) -> Result<()> {
        self.stop_worker();
        let mut first_error = None;
        for mut child in self.children.drain(..) {
            if let Err(e) = child.close() {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    fn nested_appenders_mut(&mut self) -> Option<&mut Vec<Box<dyn Appender>>> {
        self.stop_worker();
        Some(&mut self.children)
    }
}

impl Drop for AsyncAppender {
    fn drop(&mut self) {
        self.stop_worker();
    }
}
