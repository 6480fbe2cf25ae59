// Copyright 2026 the Richedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The span algebra behind every effect.
//!
//! Applying a value to a selection removes every matching span that intersects it and installs
//! at most three replacements: the new value over the selection, and the surviving parts of
//! spans that stuck out before the selection (the prologue) or after it (the epilogue).

use core::ops::ControlFlow;

use span_store::{Attribute, Error, SpanStore};

use crate::iterate::reduce_matching_spans;
use crate::Selection;

/// Surviving head of the spans that start before the selection.
#[derive(Debug)]
struct Prologue<V> {
    value: Option<V>,
    /// `usize::MAX` until a span starting before the selection is seen.
    start: usize,
}

/// Surviving tail of the spans that end after the selection.
#[derive(Debug)]
struct Epilogue<V> {
    value: Option<V>,
    end: Option<usize>,
}

#[derive(Debug)]
struct Fragments<V> {
    prologue: Prologue<V>,
    epilogue: Epilogue<V>,
}

/// Sets the effect selected by `kind` and `predicate` to `new_value` over `selection`.
///
/// Afterwards the effect's value is `new_value` everywhere in the selection (or absent, for
/// `None`), and text outside the selection keeps the value it had. When several spans stick out
/// on the same side, the extent of the fragment covers all of them and its value is taken from
/// the last one visited.
///
/// A caret selection is valid: a `Some` value then installs a zero-width span.
///
/// Fails if the buffer rejects `selection`, in which case the buffer is left untouched. Fragment
/// ranges are bounded by the selection and by the ends of spans already attached, so once the
/// selection is accepted every install succeeds.
pub fn apply_effect_value<A, S, V>(
    buffer: &mut S,
    selection: Selection,
    kind: A::Kind,
    predicate: impl Fn(&A) -> bool,
    value_of: impl Fn(&A) -> Option<V>,
    make_span: impl Fn(V) -> A,
    new_value: Option<V>,
) -> Result<(), Error>
where
    A: Attribute,
    S: SpanStore<A> + ?Sized,
{
    buffer.validate(selection.as_range())?;

    let zero = Fragments {
        prologue: Prologue {
            value: None,
            start: usize::MAX,
        },
        epilogue: Epilogue {
            value: None,
            end: None,
        },
    };
    let fragments = reduce_matching_spans::<A, S, _>(
        buffer,
        selection,
        kind,
        &predicate,
        zero,
        |buffer, id, fragments: &mut Fragments<V>| {
            let Some((range, attribute)) = buffer.remove(id) else {
                return ControlFlow::Continue(());
            };
            if range.start < selection.start() {
                fragments.prologue.start = fragments.prologue.start.min(range.start);
                fragments.prologue.value = value_of(&attribute);
            }
            if range.end > selection.end() {
                let end = fragments.epilogue.end.map_or(range.end, |e| e.max(range.end));
                fragments.epilogue.end = Some(end);
                fragments.epilogue.value = value_of(&attribute);
            }
            ControlFlow::Continue(())
        },
    );

    log::debug!(
        "apply {kind:?} over {:?} (new value: {})",
        selection.as_range(),
        if new_value.is_some() { "set" } else { "clear" },
    );

    if let Some(value) = new_value {
        buffer.install(make_span(value), selection.as_range())?;
    }

    let Fragments { prologue, epilogue } = fragments;
    if prologue.start != usize::MAX {
        if let Some(value) = prologue.value {
            log::trace!("restore prologue {}..{}", prologue.start, selection.start());
            buffer.install(make_span(value), prologue.start..selection.start())?;
        }
    }
    if let Some(end) = epilogue.end {
        if let Some(value) = epilogue.value {
            log::trace!("restore epilogue {}..{end}", selection.end());
            buffer.install(make_span(value), selection.end()..end)?;
        }
    }
    Ok(())
}
