// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for exercising the supervision runtime.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use sup_core::{Fuse, WritName};

use crate::supervisor::Supervisor;

/// A bare Supervisor rooted at `[root]`, for tests that need one without
/// constructing a whole Writ or Manager.
pub fn root_supervisor() -> Supervisor {
    Supervisor::new(WritName::root(), &Fuse::new())
}

/// An agent body that blocks until quit is observed, then returns — the
/// standard "well-behaved worker" used across scenario tests.
pub async fn wait_for_quit(sup: Supervisor) {
    sup.quit_channel().wait().await;
}
