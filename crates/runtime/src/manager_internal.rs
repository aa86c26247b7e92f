// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The Manager's maintenance routine: Accepting -> Winddown -> Quitting ->
//! Terminated. Each state is its own function so the stack trace of a
//! panicking maintenance task always names the state it died in.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::manager::ManagerInner;
use crate::writ::Writ;

enum State {
    Accepting,
    Winddown,
    Quitting,
    Terminated,
}

pub(crate) async fn run_maintenance(inner: Arc<ManagerInner>, mut rx: mpsc::UnboundedReceiver<Writ>) {
    let mut state = State::Accepting;
    loop {
        state = match state {
            State::Accepting => step_accepting(&inner, &mut rx).await,
            State::Winddown => step_winddown(&inner, &mut rx).await,
            State::Quitting => step_quitting(&inner, &mut rx).await,
            State::Terminated => {
                step_terminated(&inner);
                return;
            }
        };
    }
}

fn reap(inner: &Arc<ManagerInner>, writ: Writ) {
    inner.shared.lock().wards.shift_remove(&writ.id());
    sup_core::emit(writ.name(), "ward-reaped", Some(inner.reporting_to.name()), false);
    inner.tombstones.push(writ);
}

/// Fires every live ward's cancel-fuse, guaranteeing that by the time this
/// returns, every ward has observed (or will imminently observe) quit —
/// before the maintenance routine accepts any further completion event.
fn cancel_all_wards(inner: &Arc<ManagerInner>) {
    let mut shared = inner.shared.lock();
    shared.accepting = false;
    let fuses: Vec<_> = shared.wards.values().map(|w| w.cancel.clone()).collect();
    drop(shared);
    for fuse in fuses {
        fuse.fire();
    }
    sup_core::emit(inner.reporting_to.name(), "quitting", None, false);
}

async fn step_accepting(
    inner: &Arc<ManagerInner>,
    rx: &mut mpsc::UnboundedReceiver<Writ>,
) -> State {
    let own_quit = inner.quit_fuse.selectable();
    let parent_quit = inner.reporting_to.quit_channel();
    let winddown = inner.winddown_fuse.selectable();
    tokio::select! {
        Some(writ) = rx.recv() => {
            reap(inner, writ);
            State::Accepting
        }
        () = own_quit.wait() => {
            cancel_all_wards(inner);
            State::Quitting
        }
        () = parent_quit.wait() => {
            cancel_all_wards(inner);
            State::Quitting
        }
        () = winddown.wait() => {
            inner.shared.lock().accepting = false;
            sup_core::emit(inner.reporting_to.name(), "winddown", None, false);
            State::Winddown
        }
    }
}

async fn step_winddown(
    inner: &Arc<ManagerInner>,
    rx: &mut mpsc::UnboundedReceiver<Writ>,
) -> State {
    if inner.shared.lock().wards.is_empty() {
        return State::Terminated;
    }
    let own_quit = inner.quit_fuse.selectable();
    let parent_quit = inner.reporting_to.quit_channel();
    tokio::select! {
        Some(writ) = rx.recv() => {
            reap(inner, writ);
            State::Winddown
        }
        () = own_quit.wait() => {
            cancel_all_wards(inner);
            State::Quitting
        }
        () = parent_quit.wait() => {
            cancel_all_wards(inner);
            State::Quitting
        }
    }
}

async fn step_quitting(
    inner: &Arc<ManagerInner>,
    rx: &mut mpsc::UnboundedReceiver<Writ>,
) -> State {
    if inner.shared.lock().wards.is_empty() {
        return State::Terminated;
    }
    match rx.recv().await {
        Some(writ) => {
            reap(inner, writ);
            State::Quitting
        }
        None => State::Terminated,
    }
}

fn step_terminated(inner: &Arc<ManagerInner>) {
    inner.done_fuse.fire();
    sup_core::emit(inner.reporting_to.name(), "terminated", None, false);
}

#[cfg(test)]
#[path = "manager_internal_tests.rs"]
mod tests;
