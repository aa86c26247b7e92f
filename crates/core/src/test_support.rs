// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

/// Proptest strategies for core primitive types.
pub mod strategies {
    use crate::WritName;
    use proptest::prelude::*;

    /// A single valid name segment: short, printable, never empty.
    pub fn arb_segment() -> impl Strategy<Value = String> {
        "[a-zA-Z][a-zA-Z0-9_-]{0,15}"
    }

    /// An arbitrary hierarchical name, zero to six segments deep.
    pub fn arb_writ_name() -> impl Strategy<Value = WritName> {
        prop::collection::vec(arb_segment(), 0..6).prop_map(WritName::from_segments)
    }

    /// An interleaving of `push`/`next` operation tags, used to drive a
    /// [`crate::Sluice`] through arbitrary producer/consumer orderings
    /// while keeping the multiset-delivery law checkable.
    #[derive(Debug, Clone, Copy)]
    pub enum SluiceOp {
        Push,
        Next,
    }

    pub fn arb_sluice_ops(len: usize) -> impl Strategy<Value = Vec<SluiceOp>> {
        prop::collection::vec(
            prop_oneof![Just(SluiceOp::Push), Just(SluiceOp::Next)],
            len,
        )
    }
}
