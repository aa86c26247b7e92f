// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Immutable hierarchical identifier assigned to each Writ at creation.

use std::fmt;
use std::sync::Arc;

use smol_str::SmolStr;

const ROOT_DISPLAY: &str = "[root]";

/// An ordered sequence of string segments, e.g. `["mgr", "worker-3"]`
/// displaying as `mgr.worker-3`. Appending never mutates the receiver;
/// it returns a new name sharing the parent's segments via an `Arc`, so
/// deeply nested trees do not copy their whole ancestry on every
/// `new_task` call.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct WritName {
    segments: Arc<Vec<SmolStr>>,
}

impl WritName {
    /// The empty, root name.
    pub fn root() -> Self {
        Self {
            segments: Arc::new(Vec::new()),
        }
    }

    /// Build a name directly from segments, outermost first.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        Self {
            segments: Arc::new(segments.into_iter().map(Into::into).collect()),
        }
    }

    /// Return a new name with `segment` appended. Does not mutate `self`.
    pub fn append(&self, segment: impl Into<SmolStr>) -> Self {
        let mut segments = (*self.segments).clone();
        segments.push(segment.into());
        Self {
            segments: Arc::new(segments),
        }
    }

    pub fn segments(&self) -> &[SmolStr] {
        &self.segments
    }

    /// Dot-joined display form; `"[root]"` when empty.
    pub fn display(&self) -> String {
        if self.segments.is_empty() {
            ROOT_DISPLAY.to_string()
        } else {
            self.segments
                .iter()
                .map(SmolStr::as_str)
                .collect::<Vec<_>>()
                .join(".")
        }
    }

    /// The last segment, or `"[root]"` when empty.
    pub fn coda(&self) -> &str {
        match self.segments.last() {
            Some(seg) => seg.as_str(),
            None => ROOT_DISPLAY,
        }
    }
}

impl Default for WritName {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for WritName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl fmt::Debug for WritName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("WritName").field(&self.display()).finish()
    }
}

#[cfg(test)]
#[path = "name_tests.rs"]
mod tests;
