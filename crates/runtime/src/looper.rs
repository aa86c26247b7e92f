// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Looper: a trivial decorator that repeats an agent body until quit.

use std::future::Future;

use futures_util::future::BoxFuture;

use crate::supervisor::Supervisor;

/// Given an agent body `a`, returns a new agent that, handed a
/// [`Supervisor`] `s`, repeatedly invokes `a(s)` until `s.quit()` returns
/// true. The body runs at least once; it is invoked again only if quit
/// had not already been observed.
pub fn looper<A, F>(mut body: A) -> impl FnOnce(Supervisor) -> BoxFuture<'static, ()>
where
    A: FnMut(Supervisor) -> F + Send + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    move |sup: Supervisor| {
        Box::pin(async move {
            loop {
                body(sup.clone()).await;
                if sup.quit() {
                    break;
                }
            }
        })
    }
}

#[cfg(test)]
#[path = "looper_tests.rs"]
mod tests;
