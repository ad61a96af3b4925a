//! Diagnostic trace lines
//!
//! A process-wide switch, off by default. While it is on, every binding,
//! provider registration and field injection emits one `info` event on the
//! `dix` target. Whether the event reaches an output is up to the installed
//! tracing subscriber (see [`crate::logging::init_logging`]).

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::info;

use crate::constants::LOG_TARGET;

static ENABLED: AtomicBool = AtomicBool::new(false);

/// Turn diagnostic trace lines on or off
pub fn set_enabled(enabled: bool) {
    ENABLED.store(enabled, Ordering::Relaxed);
}

pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

/// A value was bound under `namespaces`
pub fn trace_binding(type_name: &str, namespaces: &[&str]) {
    if is_enabled() {
        info!(
            target: LOG_TARGET,
            type_name,
            namespaces = ?namespaces,
            "binding registered"
        );
    }
}

/// A provider was registered under `namespaces`
pub fn trace_provider(symbol: &str, namespaces: &[&str]) {
    if is_enabled() {
        info!(
            target: LOG_TARGET,
            symbol,
            namespaces = ?namespaces,
            "provider registered"
        );
    }
}

/// A record field received a value
pub fn trace_injection(owner: &str, field: &str, field_type: &str, hint: &str) {
    if is_enabled() {
        info!(
            target: LOG_TARGET,
            owner,
            field,
            field_type,
            hint,
            "field injected"
        );
    }
}
