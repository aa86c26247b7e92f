// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One-shot broadcast signal.
//!
//! A [`Fuse`] starts unfired. `fire()` is idempotent and safe from any
//! caller; once fired, every present and future [`Selectable`] waiter
//! observes completion without blocking. Built atop
//! [`tokio_util::sync::CancellationToken`], which already provides exactly
//! this shape (idempotent cancel, many-waiter broadcast, immediate
//! resolution for late waiters).

use tokio_util::sync::CancellationToken;

/// A latch with states `{unfired, fired}`. Cloning a `Fuse` shares the same
/// underlying latch: firing any clone fires all of them. This is what lets
/// a [`crate`]-external owner (e.g. a Manager's wards map) hold a
/// fire-only handle without holding the rest of a Writ.
#[derive(Clone, Debug)]
pub struct Fuse {
    token: CancellationToken,
}

impl Fuse {
    pub fn new() -> Self {
        Self {
            token: CancellationToken::new(),
        }
    }

    /// Fire the fuse. No-op if already fired.
    pub fn fire(&self) {
        self.token.cancel();
    }

    /// Non-blocking query of whether the fuse has fired.
    pub fn is_blown(&self) -> bool {
        self.token.is_cancelled()
    }

    /// A read-only handle suitable for waiting on alongside other event
    /// sources in a `tokio::select!`.
    pub fn selectable(&self) -> Selectable {
        Selectable {
            token: self.token.clone(),
        }
    }
}

impl Default for Fuse {
    fn default() -> Self {
        Self::new()
    }
}

/// A read-only view of a [`Fuse`] that can be awaited repeatedly. Awaiting
/// after the fuse has fired resolves immediately.
#[derive(Clone, Debug)]
pub struct Selectable {
    token: CancellationToken,
}

impl Selectable {
    /// Resolve once the backing fuse has fired.
    pub async fn wait(&self) {
        self.token.cancelled().await;
    }

    pub fn is_blown(&self) -> bool {
        self.token.is_cancelled()
    }
}

#[cfg(test)]
#[path = "fuse_tests.rs"]
mod tests;
