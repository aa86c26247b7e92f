//! Shared helpers for the scenario suite. Uses only the public `sup` API.

#![allow(dead_code)]

pub use sup::{looper, new_manager, new_root_task, Manager, Supervisor, SupervisionError, Writ};
pub use sup_core::WritName;

/// An agent body that blocks until quit is observed, then returns.
pub async fn wait_for_quit(sup: Supervisor) {
    sup.quit_channel().wait().await;
}
