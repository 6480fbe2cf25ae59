// Copyright 2026 the Richedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Effects: named styling dimensions layered over the span algebra.
//!
//! An effect is a stateless descriptor. It knows which spans belong to it, how to read a value
//! out of one of them, and how to build one from a value. Everything else is
//! [`apply_effect_value`] and the iteration helpers.

use core::fmt;
use core::ops::ControlFlow;

use span_store::{Error, SpanStore};

use crate::apply::apply_effect_value;
use crate::iterate::for_each_matching_span;
use crate::{Selection, Span, SpanKind};

/// A styling dimension with a value type.
///
/// Implementations are expected to be `static` items; see [`crate::catalog`].
pub trait Effect {
    /// The value this effect carries, such as `bool` for bold or a font name for typeface.
    type Value;

    /// Human-readable name, unique within the catalog.
    fn name(&self) -> &'static str;

    /// Returns `true` if the effect is present anywhere in `selection`.
    fn exists_in_selection(&self, buffer: &dyn SpanStore<Span>, selection: Selection) -> bool;

    /// Reads the effect's value in `selection`.
    fn value_in_selection(
        &self,
        buffer: &dyn SpanStore<Span>,
        selection: Selection,
    ) -> Option<Self::Value>;

    /// Sets the effect to `value` over `selection`, or clears it for `None`.
    ///
    /// Fails without changing `buffer` if it rejects `selection`.
    fn apply_to_selection(
        &self,
        buffer: &mut dyn SpanStore<Span>,
        selection: Selection,
        value: Option<Self::Value>,
    ) -> Result<(), Error>;
}

/// The value-independent view of an [`Effect`], so effects of different value types can be
/// listed together.
pub trait AnyEffect: Sync {
    /// See [`Effect::name`].
    fn name(&self) -> &'static str;

    /// See [`Effect::exists_in_selection`].
    fn exists_in_selection(&self, buffer: &dyn SpanStore<Span>, selection: Selection) -> bool;
}

impl<E: Effect + Sync> AnyEffect for E {
    fn name(&self) -> &'static str {
        Effect::name(self)
    }

    fn exists_in_selection(&self, buffer: &dyn SpanStore<Span>, selection: Selection) -> bool {
        Effect::exists_in_selection(self, buffer, selection)
    }
}

impl fmt::Debug for dyn AnyEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AnyEffect").field(&self.name()).finish()
    }
}

/// An on/off effect backed by a constant marker span.
///
/// The value in a selection is `true` as soon as any marker touches it; it does not have to
/// cover the whole selection.
#[derive(Clone, Debug)]
pub struct MarkerEffect {
    name: &'static str,
    marker: Span,
}

impl MarkerEffect {
    /// Creates a marker effect whose spans are equal to `marker`.
    pub const fn new(name: &'static str, marker: Span) -> Self {
        Self { name, marker }
    }

    /// The span installed by this effect.
    pub fn marker(&self) -> &Span {
        &self.marker
    }

    fn kind(&self) -> SpanKind {
        span_store::Attribute::kind(&self.marker)
    }
}

impl Effect for MarkerEffect {
    type Value = bool;

    fn name(&self) -> &'static str {
        self.name
    }

    fn exists_in_selection(&self, buffer: &dyn SpanStore<Span>, selection: Selection) -> bool {
        self.value_in_selection(buffer, selection) == Some(true)
    }

    fn value_in_selection(&self, buffer: &dyn SpanStore<Span>, selection: Selection) -> Option<bool> {
        let mut found = false;
        for_each_matching_span::<Span, _>(
            buffer,
            selection,
            self.kind(),
            |span| *span == self.marker,
            |_, _| {
                found = true;
                ControlFlow::Break(())
            },
        );
        Some(found)
    }

    fn apply_to_selection(
        &self,
        buffer: &mut dyn SpanStore<Span>,
        selection: Selection,
        value: Option<bool>,
    ) -> Result<(), Error> {
        apply_effect_value::<Span, _, _>(
            buffer,
            selection,
            self.kind(),
            |span| *span == self.marker,
            |_| Some(true),
            |_| self.marker.clone(),
            value.filter(|on| *on),
        )
    }
}

/// An effect carrying a value, described by plain functions over [`Span`].
///
/// `predicate` selects the effect's spans among those of `kind`, `value_of` reads a value back,
/// and `make_span` builds a span from a value.
pub struct SpanEffect<T> {
    name: &'static str,
    kind: SpanKind,
    predicate: fn(&Span) -> bool,
    value_of: fn(&Span) -> Option<T>,
    make_span: fn(T) -> Span,
}

impl<T> SpanEffect<T> {
    /// Creates an effect from its span class and accessors.
    pub const fn new(
        name: &'static str,
        kind: SpanKind,
        predicate: fn(&Span) -> bool,
        value_of: fn(&Span) -> Option<T>,
        make_span: fn(T) -> Span,
    ) -> Self {
        Self {
            name,
            kind,
            predicate,
            value_of,
            make_span,
        }
    }
}

impl<T> fmt::Debug for SpanEffect<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpanEffect")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl<T> Effect for SpanEffect<T> {
    type Value = T;

    fn name(&self) -> &'static str {
        self.name
    }

    fn exists_in_selection(&self, buffer: &dyn SpanStore<Span>, selection: Selection) -> bool {
        self.value_in_selection(buffer, selection).is_some()
    }

    /// The value of the first matching span in store order.
    fn value_in_selection(&self, buffer: &dyn SpanStore<Span>, selection: Selection) -> Option<T> {
        let mut value = None;
        for_each_matching_span::<Span, _>(buffer, selection, self.kind, self.predicate, |_, span| {
            value = (self.value_of)(span);
            if value.is_some() {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        value
    }

    fn apply_to_selection(
        &self,
        buffer: &mut dyn SpanStore<Span>,
        selection: Selection,
        value: Option<T>,
    ) -> Result<(), Error> {
        apply_effect_value::<Span, _, _>(
            buffer,
            selection,
            self.kind,
            self.predicate,
            self.value_of,
            self.make_span,
            value,
        )
    }
}
