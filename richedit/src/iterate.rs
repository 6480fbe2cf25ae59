// Copyright 2026 the Richedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Traversal of the spans of one kind that intersect a selection.
//!
//! Both entry points take a snapshot of the matching [`SpanId`]s before calling back into the
//! caller, so a reducing step may detach the span it was handed (or any other span) without
//! disturbing the traversal. Spans removed by an earlier step are skipped.

use core::ops::ControlFlow;

use span_store::{Attribute, SpanId, SpanStore};

use crate::Selection;

/// Visits each span of `kind` intersecting `selection` for which `predicate` holds.
///
/// Spans are visited in store order. `visit` returns [`ControlFlow::Break`] to stop early.
pub fn for_each_matching_span<A, S>(
    buffer: &S,
    selection: Selection,
    kind: A::Kind,
    mut predicate: impl FnMut(&A) -> bool,
    mut visit: impl FnMut(SpanId, &A) -> ControlFlow<()>,
) where
    A: Attribute,
    S: SpanStore<A> + ?Sized,
{
    for id in buffer.spans_overlapping(kind, selection.as_range()) {
        let Some(attribute) = buffer.attribute(id) else {
            continue;
        };
        if !predicate(attribute) {
            continue;
        }
        if visit(id, attribute).is_break() {
            break;
        }
    }
}

/// Folds over each span of `kind` intersecting `selection` for which `predicate` holds.
///
/// `step` receives the buffer mutably, so it may remove or install spans as it goes. Spans it
/// installs are not visited. Returns `zero` untouched when nothing matches.
pub fn reduce_matching_spans<A, S, R>(
    buffer: &mut S,
    selection: Selection,
    kind: A::Kind,
    mut predicate: impl FnMut(&A) -> bool,
    zero: R,
    mut step: impl FnMut(&mut S, SpanId, &mut R) -> ControlFlow<()>,
) -> R
where
    A: Attribute,
    S: SpanStore<A> + ?Sized,
{
    let mut acc = zero;
    for id in buffer.spans_overlapping(kind, selection.as_range()) {
        match buffer.attribute(id) {
            Some(attribute) if predicate(attribute) => {}
            _ => continue,
        }
        if step(buffer, id, &mut acc).is_break() {
            break;
        }
    }
    acc
}
