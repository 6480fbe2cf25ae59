// Copyright 2026 the Richedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The span vocabulary carried by a rich text buffer.

use alloc::sync::Arc;

use span_store::Attribute;

use crate::annotation::Annotation;

/// A font style toggled by the bold and italic effects.
///
/// Both share [`SpanKind::Style`] and are told apart by value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextStyle {
    /// Heavier weight.
    Bold,
    /// Slanted glyphs.
    Italic,
}

/// Horizontal alignment of a paragraph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Aligned to the start edge of the line.
    #[default]
    Start,
    /// Centered.
    Middle,
    /// Aligned to the end edge of the line.
    End,
}

/// An image drawn in place of its placeholder character.
///
/// `id` identifies the decoded image in the host's image store; the span only records how large
/// it is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InlineImage {
    /// Host-defined image identifier.
    pub id: u64,
    /// Drawn width.
    pub width: f32,
    /// Drawn height.
    pub height: f32,
}

/// One span of a rich text buffer.
#[derive(Clone, Debug, PartialEq)]
pub enum Span {
    /// Bold or italic.
    Style(TextStyle),
    /// Underlined text.
    Underline,
    /// Struck-through text.
    Strikethrough,
    /// Raised, smaller text.
    Superscript,
    /// Lowered, smaller text.
    Subscript,
    /// A font family name such as `"serif"` or `"monospace"`.
    Typeface(Arc<str>),
    /// Paragraph alignment.
    Alignment(Alignment),
    /// A key/value annotation, such as a hyperlink target or an image key.
    Annotation(Annotation),
    /// An inline image.
    Image(InlineImage),
}

/// The class of a [`Span`], used to query one class at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// [`Span::Style`].
    Style,
    /// [`Span::Underline`].
    Underline,
    /// [`Span::Strikethrough`].
    Strikethrough,
    /// [`Span::Superscript`].
    Superscript,
    /// [`Span::Subscript`].
    Subscript,
    /// [`Span::Typeface`].
    Typeface,
    /// [`Span::Alignment`].
    Alignment,
    /// [`Span::Annotation`].
    Annotation,
    /// [`Span::Image`].
    Image,
}

impl Attribute for Span {
    type Kind = SpanKind;

    fn kind(&self) -> SpanKind {
        match self {
            Self::Style(_) => SpanKind::Style,
            Self::Underline => SpanKind::Underline,
            Self::Strikethrough => SpanKind::Strikethrough,
            Self::Superscript => SpanKind::Superscript,
            Self::Subscript => SpanKind::Subscript,
            Self::Typeface(_) => SpanKind::Typeface,
            Self::Alignment(_) => SpanKind::Alignment,
            Self::Annotation(_) => SpanKind::Annotation,
            Self::Image(_) => SpanKind::Image,
        }
    }
}

impl Span {
    /// The annotation payload, if this is an annotation span.
    pub fn as_annotation(&self) -> Option<&Annotation> {
        match self {
            Self::Annotation(annotation) => Some(annotation),
            _ => None,
        }
    }

    /// The image payload, if this is an image span.
    pub fn as_image(&self) -> Option<&InlineImage> {
        match self {
            Self::Image(image) => Some(image),
            _ => None,
        }
    }
}
