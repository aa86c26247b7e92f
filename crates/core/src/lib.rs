// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sup-core: dependency-light synchronization primitives backing the `sup`
//! task-supervision runtime.
//!
//! This crate knows nothing about agents, Writs, or Managers. It provides
//! the three building blocks that make those race-free: [`Fuse`], a
//! one-shot broadcast signal; [`Sluice`], an unbounded per-value one-shot
//! delivery queue; and [`WritName`], an immutable hierarchical identifier.
//! It also owns the process-wide log sink that both this crate and `sup`
//! report through.

pub mod fuse;
pub mod logging;
pub mod name;
pub mod sluice;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use fuse::{Fuse, Selectable};
pub use logging::{emit, set_log_function, LogFn};
pub use name::WritName;
pub use sluice::{Next, Sluice};
