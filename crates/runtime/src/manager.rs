// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Manager: supervises a set of child Writs.

use std::sync::Arc;
use std::time::Instant;

use indexmap::IndexMap;
use parking_lot::Mutex;
use smol_str::SmolStr;
use sup_core::{Fuse, Sluice, WritName};
use tokio::sync::mpsc;

use crate::config::ManagerConfig;
use crate::error::SupervisionError;
use crate::manager_internal;
use crate::supervisor::Supervisor;
use crate::writ::Writ;

pub(crate) struct Ward {
    pub(crate) name: WritName,
    pub(crate) cancel: Fuse,
}

pub(crate) struct Shared {
    pub(crate) accepting: bool,
    pub(crate) wards: IndexMap<u64, Ward>,
    pub(crate) next_id: u64,
}

pub(crate) struct ManagerInner {
    pub(crate) reporting_to: Supervisor,
    pub(crate) winddown_fuse: Fuse,
    pub(crate) quit_fuse: Fuse,
    pub(crate) done_fuse: Fuse,
    pub(crate) config: ManagerConfig,
    pub(crate) shared: Mutex<Shared>,
    pub(crate) completion_tx: mpsc::UnboundedSender<Writ>,
    pub(crate) tombstones: Sluice<Writ>,
}

/// Supervises a set of child Writs, running an internal maintenance task
/// that drives the Accepting -> Winddown -> Quitting -> Terminated state
/// machine.
#[derive(Clone)]
pub struct Manager {
    pub(crate) inner: Arc<ManagerInner>,
}

impl Manager {
    pub(crate) fn new(reporting_to: Supervisor, config: ManagerConfig) -> Self {
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        let inner = Arc::new(ManagerInner {
            reporting_to,
            winddown_fuse: Fuse::new(),
            quit_fuse: Fuse::new(),
            done_fuse: Fuse::new(),
            config,
            shared: Mutex::new(Shared {
                accepting: true,
                wards: IndexMap::new(),
                next_id: 1,
            }),
            completion_tx,
            tombstones: Sluice::new(),
        });
        let maintenance_inner = inner.clone();
        tokio::spawn(async move {
            manager_internal::run_maintenance(maintenance_inner, completion_rx).await;
        });
        Self { inner }
    }

    /// Register and return a new Writ named `segment` under this Manager's
    /// reporting-to name. Returns a dead-ringer if this Manager is no
    /// longer accepting new work.
    pub fn new_task(&self, segment: impl Into<SmolStr>) -> Writ {
        let name = self.inner.reporting_to.name().append(segment);
        let mut shared = self.inner.shared.lock();
        if !shared.accepting {
            drop(shared);
            sup_core::emit(&name, "dead-ringer-issued", Some(self.inner.reporting_to.name()), false);
            return Writ::dead_ringer(name);
        }

        let id = shared.next_id;
        shared.next_id += 1;

        let tx = self.inner.completion_tx.clone();
        let writ = Writ::new(
            id,
            name.clone(),
            Some(Arc::new(move |completed: Writ| {
                // The maintenance task owns the receiver for as long as it
                // runs; a send error here means it has already exited,
                // which only happens after wards is empty, at which point
                // there is nothing left to reap anyway.
                let _ = tx.send(completed);
            })),
        );

        shared.wards.insert(
            id,
            Ward {
                name: name.clone(),
                cancel: writ.cancel_fuse(),
            },
        );
        drop(shared);
        sup_core::emit(&name, "ward-registered", Some(self.inner.reporting_to.name()), false);
        writ
    }

    /// A selectable fan-in producing one Writ per reaped child. Consuming
    /// this directly means `work()`'s built-in error policy is bypassed;
    /// dropping a returned receiver without awaiting it loses one
    /// tombstone, same caveat as the underlying Sluice.
    pub fn gather_child_channel(&self) -> sup_core::Next<Writ> {
        self.inner.tombstones.next()
    }

    /// Fire the winddown-Fuse, then drain tombstones until the Manager is
    /// fully terminated, surfacing the first child error (if any).
    pub async fn work(&self) -> Result<(), SupervisionError> {
        self.inner.winddown_fuse.fire();
        let done = self.inner.done_fuse.selectable();
        let mut surfaced: Option<SupervisionError> = None;

        // Drain until an error appears or all children are reaped. `done`
        // is checked (biased) before the tombstone branch is even polled:
        // `Sluice::next()` dequeues the moment it is called, not when it
        // resolves, so racing it unbiased against an already-ready `done`
        // can dequeue a tombstone and then have `select!` throw the whole
        // branch away. Wrapping the call in an async block makes the
        // dequeue happen only if this poll actually reaches it; any
        // tombstone left unclaimed here is still in the Sluice for the
        // final non-blocking drain below to pick up.
        while surfaced.is_none() && !done.is_blown() {
            tokio::select! {
                biased;
                () = done.wait() => break,
                writ = async { self.inner.tombstones.next().await } => {
                    if let Some(err) = writ.err().await {
                        surfaced = Some(err);
                        self.inner.quit_fuse.fire();
                    }
                }
            }
        }

        // Post-error or post-completion wait, logging stalls at a fixed
        // cadence while children are still outstanding. Same biased/lazy
        // discipline as above, for the same reason.
        let quit_fired_at = Instant::now();
        let mut ticker = tokio::time::interval(self.inner.config.stall_log_interval);
        ticker.tick().await; // first tick fires immediately
        while !done.is_blown() {
            tokio::select! {
                biased;
                () = done.wait() => break,
                writ = async { self.inner.tombstones.next().await } => {
                    if let Some(err) = writ.err().await {
                        self.log_additional_error(&err);
                    }
                }
                _ = ticker.tick() => self.log_stall(quit_fired_at.elapsed()),
            }
        }

        // Non-blocking final drain.
        while let Some(writ) = self.inner.tombstones.try_next() {
            if let Some(err) = writ.err().await {
                if surfaced.is_none() {
                    surfaced = Some(err);
                } else {
                    self.log_additional_error(&err);
                }
            }
        }

        match surfaced {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn log_additional_error(&self, err: &SupervisionError) {
        sup_core::emit(err.task(), "additional-error", Some(self.inner.reporting_to.name()), true);
    }

    fn log_stall(&self, elapsed: std::time::Duration) {
        let outstanding: Vec<WritName> = self
            .inner
            .shared
            .lock()
            .wards
            .values()
            .map(|w| w.name.clone())
            .collect();
        tracing::warn!(
            manager = %self.inner.reporting_to.name(),
            elapsed_secs = elapsed.as_secs_f64(),
            outstanding = ?outstanding.iter().map(WritName::display).collect::<Vec<_>>(),
            "wards still outstanding"
        );
        for name in &outstanding {
            sup_core::emit(name, "stall", Some(self.inner.reporting_to.name()), true);
        }
    }

    pub fn done_channel(&self) -> sup_core::Selectable {
        self.inner.done_fuse.selectable()
    }
}

#[cfg(test)]
#[path = "manager_tests.rs"]
mod tests;
