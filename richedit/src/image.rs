// Copyright 2026 the Richedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inline images and the keys that let them be rebuilt.
//!
//! An inserted image is a single placeholder character carrying two spans over the same range:
//! the [`Span::Image`] that draws it and an [`AnnotationKey::ImageSpanKey`] annotation that
//! records the caller's key for it. Image spans are expected to be dropped when a buffer is
//! persisted; the annotations survive, and [`restore_image_spans`] recreates the image spans from
//! them afterwards.

use alloc::string::String;
use core::fmt::Debug;
use core::ops::{ControlFlow, Range};

use hashbrown::HashMap;
use span_store::{EditableText, Error, SpanStore, SpanWatcher, SpannedText};

use crate::iterate::reduce_matching_spans;
use crate::{AnnotationKey, InlineImage, Selection, Span, SpanKind};

/// The character an inline image stands in for in the text.
pub const OBJECT_REPLACEMENT: char = '\u{FFFC}';

/// Observer notified when the text holding an inline image goes away.
pub trait ImageSpanWatcher {
    /// Called once for every image key annotation that was detached.
    fn on_image_span_removed(&mut self, key: &str);
}

impl<F: FnMut(&str)> ImageSpanWatcher for F {
    fn on_image_span_removed(&mut self, key: &str) {
        self(key);
    }
}

/// Adapts an [`ImageSpanWatcher`] into a [`SpanWatcher`] that only reports image keys.
#[derive(Debug)]
pub struct ImageKeyWatcher<W> {
    inner: W,
}

impl<W: ImageSpanWatcher> ImageKeyWatcher<W> {
    /// Wraps `inner`.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }
}

impl<W: ImageSpanWatcher> SpanWatcher<Span> for ImageKeyWatcher<W> {
    fn on_span_removed(&mut self, span: &Span, _range: Range<usize>) {
        let Some(annotation) = span.as_annotation() else {
            return;
        };
        if AnnotationKey::ImageSpanKey.matches(annotation) {
            log::debug!("image {:?} removed", annotation.value);
            self.inner.on_image_span_removed(&annotation.value);
        }
    }
}

/// Replaces `selection` with an image placeholder and attaches `image` and its `key` to it.
///
/// Returns the selection the editor should show next: a caret after the image if `selection`
/// was empty, otherwise the image itself.
pub fn insert_image<T: Debug + EditableText>(
    buffer: &mut SpannedText<T, Span>,
    selection: Selection,
    key: &str,
    image: InlineImage,
) -> Result<Selection, Error> {
    let mut utf8 = [0; 4];
    let placeholder = OBJECT_REPLACEMENT.encode_utf8(&mut utf8);
    buffer.replace_range(selection.as_range(), placeholder)?;

    let range = selection.start()..selection.start() + placeholder.len();
    buffer.install(Span::Image(image), range.clone())?;
    buffer.install(AnnotationKey::ImageSpanKey.span(key), range.clone())?;
    log::debug!("inserted image {key:?} at {range:?}");

    Ok(if selection.is_empty() {
        Selection::caret(range.end)
    } else {
        Selection::from(range)
    })
}

/// Recreates image spans from the image key annotations in `buffer`.
///
/// For every key that `resolver` maps to an image, existing image spans over the annotation's
/// range are replaced by the resolved one. Keys that resolve to `None` are left alone. Returns how
/// many images were restored.
pub fn restore_image_spans<S: SpanStore<Span> + ?Sized>(
    buffer: &mut S,
    mut resolver: impl FnMut(&str) -> Option<InlineImage>,
) -> Result<usize, Error> {
    let whole = Selection::whole(buffer.len());
    let restored = reduce_matching_spans::<Span, S, _>(
        buffer,
        whole,
        SpanKind::Annotation,
        |span| AnnotationKey::ImageSpanKey.matches_span(span),
        Ok(0),
        |buffer, id, restored: &mut Result<usize, Error>| {
            let Some(range) = buffer.range_of(id) else {
                return ControlFlow::Continue(());
            };
            let Some(key) = buffer
                .attribute(id)
                .and_then(Span::as_annotation)
                .map(|a| a.value.clone())
            else {
                return ControlFlow::Continue(());
            };
            let Some(image) = resolver(&*key) else {
                log::trace!("no image for key {key:?}");
                return ControlFlow::Continue(());
            };
            for old in buffer.spans_overlapping(SpanKind::Image, range.clone()) {
                buffer.remove(old);
            }
            match buffer.install(Span::Image(image), range) {
                Ok(_) => {
                    if let Ok(count) = restored {
                        *count += 1;
                    }
                    ControlFlow::Continue(())
                }
                Err(err) => {
                    *restored = Err(err);
                    ControlFlow::Break(())
                }
            }
        },
    );
    if let Ok(count) = &restored {
        log::debug!("restored {count} image span(s)");
    }
    restored
}

/// Like [`restore_image_spans`], looking images up in a map keyed by image key.
pub fn set_image_spans<S: SpanStore<Span> + ?Sized>(
    buffer: &mut S,
    images: &HashMap<String, InlineImage>,
) -> Result<usize, Error> {
    restore_image_spans(buffer, |key| images.get(key).copied())
}
