// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Unbounded producer queue with per-value one-shot receiver semantics.
//!
//! A [`Sluice<T>`] decouples a fast producer from a slow consumer while
//! still letting the consumer multiplex the eventual value alongside other
//! event sources: `push` never blocks, and `next()` hands back a future
//! that resolves to exactly one pushed value. See the module-level
//! invariants recorded on each method.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use parking_lot::Mutex;
use tokio::sync::oneshot;

struct State<T> {
    values: VecDeque<T>,
    waiters: VecDeque<oneshot::Sender<T>>,
}

impl<T> Default for State<T> {
    fn default() -> Self {
        Self {
            values: VecDeque::new(),
            waiters: VecDeque::new(),
        }
    }
}

/// An unbounded multi-producer, per-value-one-shot-consumer buffer.
pub struct Sluice<T> {
    state: Mutex<State<T>>,
}

impl<T> Sluice<T> {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State::default()),
        }
    }

    /// Never blocks. Delivers directly into a pending receiver if one
    /// exists, otherwise appends to the internal queue.
    pub fn push(&self, value: T) {
        let mut state = self.state.lock();
        if let Some(waiter) = state.waiters.pop_front() {
            // The receiver may already have been dropped; that is the
            // documented "dropping a receiver loses one value" caveat, not
            // an error condition for the producer.
            let _ = waiter.send(value);
        } else {
            state.values.push_back(value);
        }
    }

    /// Returns a future that resolves to exactly one pushed value. If a
    /// value is already queued it is bound to the returned future
    /// immediately; otherwise the future registers as a pending waiter and
    /// resolves whenever a matching `push` arrives.
    pub fn next(&self) -> Next<T> {
        let mut state = self.state.lock();
        let (tx, rx) = oneshot::channel();
        if let Some(value) = state.values.pop_front() {
            // Capacity is >= 1 on a fresh channel, so this cannot fail.
            let _ = tx.send(value);
        } else {
            state.waiters.push_back(tx);
        }
        Next { rx }
    }

    /// Non-blockingly pop an already-queued value without registering a
    /// waiter. Used by the Manager's final, non-blocking tombstone drain.
    pub fn try_next(&self) -> Option<T> {
        self.state.lock().values.pop_front()
    }
}

impl<T> Default for Sluice<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The future returned by [`Sluice::next`].
pub struct Next<T> {
    rx: oneshot::Receiver<T>,
}

impl<T> Future for Next<T> {
    type Output = T;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<T> {
        match Pin::new(&mut self.rx).poll(cx) {
            Poll::Ready(Ok(value)) => Poll::Ready(value),
            // The sender side is only ever dropped without sending when the
            // whole Sluice is torn down while this receiver is still
            // pending; a consumer awaiting `next()` on a live Sluice never
            // observes this.
            #[allow(clippy::panic)]
            Poll::Ready(Err(_)) => {
                panic!("Sluice dropped with a pending receiver still registered")
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

#[cfg(test)]
#[path = "sluice_tests.rs"]
mod tests;
