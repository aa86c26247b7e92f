// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only view handed to an agent.

use sup_core::{Fuse, Selectable, WritName};

/// The capability an agent receives: its own name, and a way to observe
/// (but never inject) a quit signal. A concrete, cheaply `Clone`-able
/// type rather than a trait object — every Writ, dead-ringer or not,
/// produces the same `Supervisor` shape, so there is never more than one
/// implementation to dispatch over.
#[derive(Clone, Debug)]
pub struct Supervisor {
    name: WritName,
    quit: Selectable,
}

impl Supervisor {
    pub(crate) fn new(name: WritName, quit_fuse: &Fuse) -> Self {
        Self {
            name,
            quit: quit_fuse.selectable(),
        }
    }

    pub fn name(&self) -> &WritName {
        &self.name
    }

    /// Non-blocking check of whether quit has been signalled.
    pub fn quit(&self) -> bool {
        self.quit.is_blown()
    }

    /// A selectable view suitable for use in a multi-way wait.
    pub fn quit_channel(&self) -> Selectable {
        self.quit.clone()
    }
}

#[cfg(test)]
#[path = "supervisor_tests.rs"]
mod tests;
