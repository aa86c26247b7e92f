// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process-wide log sink.
//!
//! Supervision events (state transitions, stall warnings, dead-ringer
//! issuance) are always emitted as `tracing` events. Applications that want
//! to observe them through their own mechanism can additionally install a
//! [`LogFn`] once, before any task starts; see [`set_log_function`].

use std::sync::OnceLock;

use crate::name::WritName;

/// `(name, event, regarding, important)`.
///
/// - `name`: the Writ or Manager reporting the event.
/// - `event`: a short, stable event tag (e.g. `"state-transition"`).
/// - `regarding`: an optional second name the event concerns (e.g. the
///   ward that caused a Manager's quit-Fuse to fire).
/// - `important`: true for events an operator should not miss (stalls,
///   additional post-first errors); false for routine transitions.
pub type LogFn = fn(name: &WritName, event: &str, regarding: Option<&WritName>, important: bool);

static SINK: OnceLock<LogFn> = OnceLock::new();

/// Install the global log sink. Must be called before any supervised task
/// is started; calling it more than once is a no-op (the first
/// installation wins) rather than a panic, since a second call racing with
/// task startup is exactly the scenario this function cannot make safe
/// retroactively.
pub fn set_log_function(f: LogFn) {
    let _ = SINK.set(f);
}

/// Emit a supervision event. Always traced; additionally forwarded to the
/// installed sink, if any.
pub fn emit(name: &WritName, event: &str, regarding: Option<&WritName>, important: bool) {
    if important {
        match regarding {
            Some(r) => tracing::warn!(name = %name, regarding = %r, event, "supervision event"),
            None => tracing::warn!(name = %name, event, "supervision event"),
        }
    } else {
        match regarding {
            Some(r) => tracing::debug!(name = %name, regarding = %r, event, "supervision event"),
            None => tracing::debug!(name = %name, event, "supervision event"),
        }
    }
    if let Some(sink) = SINK.get() {
        sink(name, event, regarding, important);
    }
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
