// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Writ: the authority object tracking a single agent's lifecycle.

use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use futures_util::FutureExt;
use parking_lot::Mutex;
use sup_core::{Fuse, Selectable, WritName};

use crate::error::{render_panic_payload, SupervisionError};
use crate::supervisor::Supervisor;

/// Invoked exactly once, the moment a managed Writ first reaches
/// `Terminal`, with a clone of the Writ that just finished. A dead-ringer
/// or root Writ has none.
pub(crate) type AfterHook = Arc<dyn Fn(Writ) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Issued,
    InUse,
    Quitting,
    Terminal,
}

impl Phase {
    fn from_bits(bits: u8) -> Self {
        match bits {
            0 => Phase::Issued,
            1 => Phase::InUse,
            2 => Phase::Quitting,
            3 => Phase::Terminal,
            other => unreachable!("invalid packed Writ phase bits: {other}"),
        }
    }

    fn bits(self) -> u8 {
        self as u8
    }
}

const USED_BIT: u8 = 0b100;

fn decode(word: u8) -> (Phase, bool) {
    (Phase::from_bits(word & 0b011), word & USED_BIT != 0)
}

fn encode(phase: Phase, used: bool) -> u8 {
    phase.bits() | if used { USED_BIT } else { 0 }
}

struct Inner {
    id: u64,
    name: WritName,
    phase: AtomicU8,
    quit_fuse: Fuse,
    done_fuse: Fuse,
    supervisor: Supervisor,
    after_hook: Option<AfterHook>,
    error: Mutex<Option<SupervisionError>>,
}

/// Authority object handed by a [`crate::Manager`] (or [`crate::new_root_task`])
/// to application code. Cheap to clone: every clone is a handle onto the
/// same underlying state.
#[derive(Clone)]
pub struct Writ {
    inner: Arc<Inner>,
}

impl Writ {
    pub(crate) fn new(id: u64, name: WritName, after_hook: Option<AfterHook>) -> Self {
        let quit_fuse = Fuse::new();
        let supervisor = Supervisor::new(name.clone(), &quit_fuse);
        Self {
            inner: Arc::new(Inner {
                id,
                name,
                phase: AtomicU8::new(encode(Phase::Issued, false)),
                quit_fuse,
                done_fuse: Fuse::new(),
                supervisor,
                after_hook,
                error: Mutex::new(None),
            }),
        }
    }

    /// A Writ pre-constructed already in phase Terminal, returned by a
    /// Manager that is no longer accepting new work. `run` and `cancel`
    /// are both no-ops; there is no after-hook because this Writ never
    /// enters a Manager's `wards` map in the first place.
    pub(crate) fn dead_ringer(name: WritName) -> Self {
        let quit_fuse = Fuse::new();
        quit_fuse.fire();
        let supervisor = Supervisor::new(name.clone(), &quit_fuse);
        let done_fuse = Fuse::new();
        done_fuse.fire();
        Self {
            inner: Arc::new(Inner {
                id: 0,
                name,
                phase: AtomicU8::new(encode(Phase::Terminal, false)),
                quit_fuse,
                done_fuse,
                supervisor,
                after_hook: None,
                error: Mutex::new(None),
            }),
        }
    }

    pub(crate) fn id(&self) -> u64 {
        self.inner.id
    }

    pub(crate) fn cancel_fuse(&self) -> Fuse {
        self.inner.quit_fuse.clone()
    }

    pub fn name(&self) -> &WritName {
        &self.inner.name
    }

    /// Attempt to transition Issued -> InUse and, on success, run `agent`
    /// with this Writ's Supervisor view. If the Writ is already Terminal
    /// (cancelled before `run`), this is a no-op. Calling `run` a second
    /// time on a Writ that has already run is a contract violation.
    pub async fn run<A, F>(&self, agent: A)
    where
        A: FnOnce(Supervisor) -> F + Send,
        F: Future<Output = ()> + Send + 'static,
    {
        if !self.begin_run() {
            return;
        }

        let supervisor = self.inner.supervisor.clone();
        let outcome = AssertUnwindSafe(agent(supervisor)).catch_unwind().await;

        let error = match outcome {
            Ok(()) => None,
            Err(payload) => Some(SupervisionError::TaskPanicked {
                task: self.inner.name.clone(),
                cause: render_panic_payload(payload.as_ref()),
            }),
        };
        self.transition_to_terminal(error);
    }

    /// Returns true if the agent should be invoked.
    #[allow(clippy::panic)]
    fn begin_run(&self) -> bool {
        loop {
            let cur = self.inner.phase.load(Ordering::Acquire);
            let (phase, used) = decode(cur);
            match phase {
                Phase::Issued => {
                    let new = encode(Phase::InUse, true);
                    if self
                        .inner
                        .phase
                        .compare_exchange_weak(cur, new, Ordering::AcqRel, Ordering::Acquire)
                        .is_ok()
                    {
                        return true;
                    }
                }
                Phase::Terminal if !used => return false, // cancelled before run: no-op
                Phase::Terminal | Phase::InUse | Phase::Quitting => {
                    panic!(
                        "Writ \"{}\" run() called more than once",
                        self.inner.name
                    );
                }
            }
        }
    }

    fn transition_to_terminal(&self, error: Option<SupervisionError>) {
        loop {
            let cur = self.inner.phase.load(Ordering::Acquire);
            let (_phase, used) = decode(cur);
            let new = encode(Phase::Terminal, used);
            if self
                .inner
                .phase
                .compare_exchange_weak(cur, new, Ordering::AcqRel, Ordering::Acquire)
                .is_ok()
            {
                break;
            }
        }
        if let Some(err) = error {
            *self.inner.error.lock() = Some(err);
        }
        self.inner.done_fuse.fire();
        if let Some(hook) = self.inner.after_hook.clone() {
            hook(self.clone());
        }
    }

    /// Fires the quit-Fuse unconditionally, then advances the phase:
    /// Issued -> Terminal (immediately, no agent ever ran), InUse ->
    /// Quitting (the running agent must observe quit and return), or
    /// no-op if already Quitting or Terminal.
    pub fn cancel(&self) {
        self.inner.quit_fuse.fire();
        loop {
            let cur = self.inner.phase.load(Ordering::Acquire);
            let (phase, used) = decode(cur);
            match phase {
                Phase::Issued => {
                    let new = encode(Phase::Terminal, used);
                    if self
                        .inner
                        .phase
                        .compare_exchange_weak(cur, new, Ordering::AcqRel, Ordering::Acquire)
                        .is_ok()
                    {
                        self.inner.done_fuse.fire();
                        if let Some(hook) = self.inner.after_hook.clone() {
                            hook(self.clone());
                        }
                        return;
                    }
                }
                Phase::InUse => {
                    let new = encode(Phase::Quitting, used);
                    if self
                        .inner
                        .phase
                        .compare_exchange_weak(cur, new, Ordering::AcqRel, Ordering::Acquire)
                        .is_ok()
                    {
                        return;
                    }
                }
                Phase::Quitting | Phase::Terminal => return,
            }
        }
    }

    /// Blocks until the done-Fuse is blown, then returns the captured
    /// error, if any.
    pub async fn err(&self) -> Option<SupervisionError> {
        self.inner.done_fuse.selectable().wait().await;
        self.inner.error.lock().clone()
    }

    pub fn done_channel(&self) -> Selectable {
        self.inner.done_fuse.selectable()
    }
}

impl std::fmt::Debug for Writ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (phase, used) = decode(self.inner.phase.load(Ordering::Relaxed));
        f.debug_struct("Writ")
            .field("name", &self.inner.name)
            .field("phase", &phase)
            .field("used", &used)
            .finish()
    }
}

#[cfg(test)]
#[path = "writ_tests.rs"]
mod tests;
