// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types surfaced by the supervision runtime.

use std::any::Any;

use sup_core::WritName;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SupervisionError {
    /// An agent panicked. Carries the Writ's name and a rendering of the
    /// panic payload.
    #[error("task \"{task}\" panicked: {cause}")]
    TaskPanicked { task: WritName, cause: String },
}

impl SupervisionError {
    pub fn task(&self) -> &WritName {
        match self {
            Self::TaskPanicked { task, .. } => task,
        }
    }

    pub fn cause(&self) -> &str {
        match self {
            Self::TaskPanicked { cause, .. } => cause,
        }
    }
}

/// Render a caught panic payload as a human-readable string. Most panics
/// carry a `&str` or `String` message; anything else downcasts to a
/// generic placeholder rather than losing the failure entirely.
pub(crate) fn render_panic_payload(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "agent panicked with a non-string payload".to_string()
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
