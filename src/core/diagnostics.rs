//! Internal diagnostic channel
//!
//! The registry cannot log through itself, so problems it detects are
//! reported here: prefixed lines on stderr, controlled by two global switches.

use std::sync::atomic::{AtomicBool, Ordering};

static INTERNAL_DEBUGGING: AtomicBool = AtomicBool::new(false);
static QUIET_MODE: AtomicBool = AtomicBool::new(false);

/// Enable `[LOGGER DEBUG]` output (off by default)
pub fn set_internal_debugging(enabled: bool) {
    INTERNAL_DEBUGGING.store(enabled, Ordering::Relaxed);
}

/// Suppress every internal diagnostic, including errors
pub fn set_quiet_mode(quiet: bool) {
    QUIET_MODE.store(quiet, Ordering::Relaxed);
}

pub fn internal_debugging() -> bool {
    INTERNAL_DEBUGGING.load(Ordering::Relaxed)
}

pub fn quiet_mode() -> bool {
    QUIET_MODE.load(Ordering::Relaxed)
}

pub fn debug(message: impl AsRef<str>) {
    if internal_debugging() && !quiet_mode() {
        eprintln!("[LOGGER DEBUG] {}", message.as_ref());
    }
}

pub fn warn(message: impl AsRef<str>) {
    if !quiet_mode() {
        eprintln!("[LOGGER WARNING] {}", message.as_ref());
    }
}

pub fn error(message: impl AsRef<str>) {
    if !quiet_mode() {
        eprintln!("[LOGGER ERROR] {}", message.as_ref());
    }
}
