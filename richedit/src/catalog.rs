// Copyright 2026 the Richedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The built-in effects.

use alloc::sync::Arc;

use smallvec::SmallVec;
use span_store::SpanStore;

use crate::effect::{AnyEffect, MarkerEffect, SpanEffect};
use crate::{Alignment, AnnotationKey, Selection, Span, SpanKind, TextStyle};

/// Bold text.
pub static BOLD: MarkerEffect = MarkerEffect::new("bold", Span::Style(TextStyle::Bold));
/// Italic text.
pub static ITALIC: MarkerEffect = MarkerEffect::new("italic", Span::Style(TextStyle::Italic));
/// Underlined text.
pub static UNDERLINE: MarkerEffect = MarkerEffect::new("underline", Span::Underline);
/// Struck-through text.
pub static STRIKETHROUGH: MarkerEffect = MarkerEffect::new("strikethrough", Span::Strikethrough);
/// Superscript.
pub static SUPERSCRIPT: MarkerEffect = MarkerEffect::new("superscript", Span::Superscript);
/// Subscript.
pub static SUBSCRIPT: MarkerEffect = MarkerEffect::new("subscript", Span::Subscript);

/// Paragraph alignment.
pub static LINE_ALIGNMENT: SpanEffect<Alignment> = SpanEffect::new(
    "line_alignment",
    SpanKind::Alignment,
    |span| matches!(span, Span::Alignment(_)),
    |span| match span {
        Span::Alignment(alignment) => Some(*alignment),
        _ => None,
    },
    Span::Alignment,
);

/// Font family, such as `"serif"`, `"sans"` or `"monospace"`.
pub static TYPEFACE: SpanEffect<Arc<str>> = SpanEffect::new(
    "typeface",
    SpanKind::Typeface,
    |span| matches!(span, Span::Typeface(_)),
    |span| match span {
        Span::Typeface(family) => Some(family.clone()),
        _ => None,
    },
    Span::Typeface,
);

/// Hyperlink target, stored as a [`AnnotationKey::Link`] annotation.
pub static LINK: SpanEffect<Arc<str>> = SpanEffect::new(
    "link",
    SpanKind::Annotation,
    |span| AnnotationKey::Link.matches_span(span),
    |span| span.as_annotation().map(|a| a.value.clone()),
    |url| AnnotationKey::Link.span(url),
);

/// Every built-in effect, in the order they are reported.
pub static EFFECTS: [&dyn AnyEffect; 9] = [
    &BOLD,
    &ITALIC,
    &UNDERLINE,
    &STRIKETHROUGH,
    &SUPERSCRIPT,
    &SUBSCRIPT,
    &LINE_ALIGNMENT,
    &TYPEFACE,
    &LINK,
];

/// Effects present in a selection, see [`active_effects`].
pub type ActiveEffects = SmallVec<[&'static dyn AnyEffect; 9]>;

/// Returns the catalog effects present anywhere in `selection`, in catalog order.
pub fn active_effects(buffer: &dyn SpanStore<Span>, selection: Selection) -> ActiveEffects {
    EFFECTS
        .iter()
        .copied()
        .filter(|effect| effect.exists_in_selection(buffer, selection))
        .collect()
}

/// Looks up a catalog effect by name.
pub fn effect_named(name: &str) -> Option<&'static dyn AnyEffect> {
    EFFECTS.iter().copied().find(|effect| effect.name() == name)
}
