// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! saltmines: a worked example of a multi-level supervision tree.
//!
//! A root task owns a Manager with three digger tasks; one digger is a
//! Looper-wrapped worker that keeps swinging its pick until told to quit.
//! After a short while the root cancels, which must fan out through the
//! manager to every digger before the process exits.

use std::time::Duration;

use sup::{looper, new_manager, new_root_task, set_log_function, Supervisor, WritName};

fn log_to_stderr(name: &WritName, event: &str, regarding: Option<&WritName>, important: bool) {
    let level = if important { "IMPORTANT" } else { "info" };
    match regarding {
        Some(r) => eprintln!("[{level}] {name}: {event} (regarding {r})"),
        None => eprintln!("[{level}] {name}: {event}"),
    }
}

async fn dig_once(sup: Supervisor) {
    tracing::info!(name = %sup.name(), "swinging pick");
    tokio::time::sleep(Duration::from_millis(150)).await;
}

async fn haul_cart(sup: Supervisor) {
    tracing::info!(name = %sup.name(), "hauling a cart to the surface");
    sup.quit_channel().wait().await;
    tracing::info!(name = %sup.name(), "cart hauler standing down");
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    set_log_function(log_to_stderr);

    let root = new_root_task(["saltmines"]);
    let root_sup = root.clone();

    let run_handle = tokio::spawn(async move {
        root_sup
            .run(|sup: Supervisor| async move {
                let mgr = new_manager(sup);

                let digger = mgr.new_task("digger");
                tokio::spawn(async move {
                    digger.run(looper(dig_once)).await;
                });

                let hauler = mgr.new_task("hauler");
                tokio::spawn(async move {
                    hauler.run(haul_cart).await;
                });

                if let Err(err) = mgr.work().await {
                    tracing::warn!(%err, "saltmines manager surfaced a failure");
                }
            })
            .await;
    });

    tokio::time::sleep(Duration::from_millis(500)).await;
    tracing::info!("shift's over, calling it");
    root.cancel();

    if let Err(join_err) = run_handle.await {
        tracing::error!(%join_err, "root task join failed");
    }
}
