// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Root constructor: a Writ that is not under any Manager.

use smol_str::SmolStr;
use sup_core::WritName;

use crate::writ::Writ;

/// Returns a Writ with no parent Manager. Its quit-Fuse is fired only by
/// its own `cancel()`; its after-hook is a no-op; its done-Fuse semantics
/// are identical to a managed Writ.
pub fn new_root_task<I, S>(name_segments: I) -> Writ
where
    I: IntoIterator<Item = S>,
    S: Into<SmolStr>,
{
    let name = WritName::from_segments(name_segments);
    Writ::new(0, name, None)
}

#[cfg(test)]
#[path = "root_tests.rs"]
mod tests;
