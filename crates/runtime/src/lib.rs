// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sup: hierarchical task supervision.
//!
//! An application spawns trees of cooperating worker tasks through a
//! [`Manager`]. Each task is represented by a [`Writ`], an authority
//! object the application runs an agent function on; agents observe
//! cancellation through a [`Supervisor`] view.

pub mod config;
pub mod error;
pub mod looper;
pub mod manager;
mod manager_internal;
pub mod root;
pub mod supervisor;
pub mod writ;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use config::ManagerConfig;
pub use error::SupervisionError;
pub use looper::looper;
pub use manager::Manager;
pub use root::new_root_task;
pub use supervisor::Supervisor;
pub use writ::Writ;

pub use sup_core::{set_log_function, Fuse, LogFn, Selectable, Sluice, WritName};

/// Create a [`Manager`] reporting to `parent`, using [`ManagerConfig::default`].
pub fn new_manager(parent: Supervisor) -> Manager {
    Manager::new(parent, ManagerConfig::default())
}

/// Create a [`Manager`] reporting to `parent` with an explicit configuration.
pub fn new_manager_with_config(parent: Supervisor, config: ManagerConfig) -> Manager {
    Manager::new(parent, config)
}
