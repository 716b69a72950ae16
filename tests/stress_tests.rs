//! Concurrency stress tests for the logger hierarchy
//!
//! These tests verify:
//! - Concurrent get_instance for one name yields one identity
//! - Concurrent creation in arbitrary order yields the same tree
//! - Logging while the tree is being relinked never panics or misroutes
//! - Administrative calls interleaved with lookups keep the registry consistent

use rust_logger_hierarchy::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

const THREADS: usize = 8;

fn dotted(depth: usize, branch: usize) -> String {
    (0..depth)
        .map(|i| format!("n{}_{}", i, branch % (i + 2)))
        .collect::<Vec<_>>()
        .join(".")
}

/// Every registered logger's parent is the nearest registered proper prefix, or root
fn assert_consistent(hierarchy: &Hierarchy) {
    for logger in hierarchy.current_loggers() {
        let name = logger.name();
        let mut expected = String::new();
        let mut end = name.len();
        while let Some(dot) = name[..end].rfind('.') {
            if hierarchy.exists(&name[..dot]) {
                expected = name[..dot].to_string();
                break;
            }
            end = dot;
        }
        let parent = logger.parent().expect("registered logger has a parent");
        assert_eq!(parent.name(), expected, "wrong parent for {}", name);
    }
}

#[test]
fn test_concurrent_lookup_same_identity() {
    let hierarchy = Arc::new(Hierarchy::new());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let hierarchy = Arc::clone(&hierarchy);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                hierarchy.get_instance("shared.target").unwrap()
            })
        })
        .collect();

    let loggers: Vec<LoggerRef> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for logger in &loggers[1..] {
        assert!(Arc::ptr_eq(&loggers[0], logger));
    }
    assert_eq!(hierarchy.metrics().loggers_created(), 1);
}

#[test]
fn test_concurrent_creation_builds_consistent_tree() {
    let hierarchy = Arc::new(Hierarchy::new());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let hierarchy = Arc::clone(&hierarchy);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for i in 0..200 {
                    // Each thread walks depths in a different order.
                    let depth = if t % 2 == 0 { 1 + i % 5 } else { 5 - i % 5 };
                    hierarchy.get_instance(&dotted(depth, i + t)).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_consistent(&hierarchy);
}

#[test]
fn test_logging_during_relinking() {
    struct Counter(Arc<AtomicUsize>);

    impl Appender for Counter {
        fn append(&mut self, _entry: &LogEntry) -> Result<()> {
            self.0.fetch_add(1, Ordering::Relaxed);
            Ok(())
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "counter"
        }
    }

    let hierarchy = Arc::new(Hierarchy::new());
    let delivered = Arc::new(AtomicUsize::new(0));
    hierarchy
        .root()
        .add_appender(Box::new(Counter(Arc::clone(&delivered))));

    let leaf = hierarchy.get_instance("deep.a.b.c.d.e").unwrap();
    let writer = {
        let leaf = Arc::clone(&leaf);
        thread::spawn(move || {
            for i in 0..1_000 {
                leaf.info(format!("event {}", i));
            }
        })
    };

    for name in ["deep.a.b.c.d", "deep", "deep.a.b", "deep.a", "deep.a.b.c"] {
        hierarchy.get_instance(name).unwrap();
    }
    writer.join().unwrap();

    // Every ancestor is additive, so every event reaches root exactly once.
    assert_eq!(delivered.load(Ordering::Relaxed), 1_000);
    assert_eq!(leaf.parent().unwrap().name(), "deep.a.b.c.d");
    assert_consistent(&hierarchy);
}

#[test]
fn test_admin_calls_interleaved_with_lookups() {
    let hierarchy = Arc::new(Hierarchy::new());
    let barrier = Arc::new(Barrier::new(THREADS + 1));

    let workers: Vec<_> = (0..THREADS)
        .map(|t| {
            let hierarchy = Arc::clone(&hierarchy);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for i in 0..300 {
                    let logger = hierarchy.get_instance(&dotted(1 + (i + t) % 4, i)).unwrap();
                    logger.set_level(Some(LogLevel::Info));
                    let _ = logger.is_enabled_for(LogLevel::Warn);
                }
            })
        })
        .collect();

    barrier.wait();
    for _ in 0..50 {
        hierarchy.disable_info();
        hierarchy.reset_configuration();
        hierarchy.enable_all();
    }

    for worker in workers {
        worker.join().unwrap();
    }

    assert_consistent(&hierarchy);
    assert_eq!(hierarchy.disable_threshold(), DisableThreshold::Off);
}
