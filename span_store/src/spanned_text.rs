// Copyright 2026 the Richedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::ops::Range;

use crate::text_range::validate_range;
use crate::{
    intersects, Attribute, EditableText, Error, Operation, SpanId, SpanMatches, SpanStore,
    SpanWatcher, TextRange, TextStorage,
};

#[derive(Debug)]
struct Entry<A> {
    id: SpanId,
    range: Range<usize>,
    attribute: A,
}

/// A block of text with spans attached to ranges within it.
///
/// This is the in-memory [`SpanStore`]: spans are kept in the order they were installed, and
/// queries report them in that order. With [`EditableText`] storage such as `String`, the text
/// can be edited through [`SpannedText::replace_range`] and the spans follow the edit.
pub struct SpannedText<T: Debug + TextStorage, A: Attribute> {
    text: T,
    spans: Vec<Entry<A>>,
    next_id: u64,
    watcher: Option<Box<dyn SpanWatcher<A>>>,
}

impl<T: Debug + TextStorage, A: Attribute> Debug for SpannedText<T, A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SpannedText")
            .field("text", &self.text)
            .field("spans", &self.spans)
            .field("next_id", &self.next_id)
            .field("watcher", &self.watcher.is_some())
            .finish()
    }
}

impl<T: Debug + TextStorage, A: Attribute> SpannedText<T, A> {
    /// Creates a `SpannedText` with no spans.
    pub fn new(text: T) -> Self {
        Self {
            text,
            spans: Vec::new(),
            next_id: 0,
            watcher: None,
        }
    }

    /// Borrows the underlying text storage.
    pub fn text(&self) -> &T {
        &self.text
    }

    /// Borrows the underlying text as `&str` when the storage is contiguous.
    pub fn as_str(&self) -> &str
    where
        T: AsRef<str>,
    {
        self.text.as_ref()
    }

    /// Validates a byte `range` against the current text.
    pub fn range(&self, range: Range<usize>) -> Result<TextRange, Error> {
        TextRange::new(&self.text, range)
    }

    /// Sets the watcher notified of span changes, returning the previous one.
    pub fn set_span_watcher(
        &mut self,
        watcher: Option<Box<dyn SpanWatcher<A>>>,
    ) -> Option<Box<dyn SpanWatcher<A>>> {
        core::mem::replace(&mut self.watcher, watcher)
    }

    /// Iterates over all spans in store order.
    pub fn spans_iter(&self) -> impl ExactSizeIterator<Item = (SpanId, Range<usize>, &A)> {
        self.spans
            .iter()
            .map(|entry| (entry.id, entry.range.clone(), &entry.attribute))
    }

    /// Returns the number of attached spans.
    pub fn spans_len(&self) -> usize {
        self.spans.len()
    }

    /// Iterates over the spans covering the byte at `index`.
    pub fn spans_at(&self, index: usize) -> impl Iterator<Item = (Range<usize>, &A)> {
        self.spans
            .iter()
            .filter(move |entry| entry.range.contains(&index))
            .map(|entry| (entry.range.clone(), &entry.attribute))
    }

    /// Detaches every span, notifying the watcher for each.
    pub fn clear_spans(&mut self) {
        for entry in core::mem::take(&mut self.spans) {
            self.notify_removed(&entry);
        }
    }

    fn position(&self, span: SpanId) -> Option<usize> {
        // Ids are handed out in increasing order and the vector keeps install order.
        self.spans.binary_search_by_key(&span, |entry| entry.id).ok()
    }

    fn notify_removed(&mut self, entry: &Entry<A>) {
        if let Some(watcher) = self.watcher.as_mut() {
            watcher.on_span_removed(&entry.attribute, entry.range.clone());
        }
    }
}

impl<T: Debug + EditableText, A: Attribute> SpannedText<T, A> {
    /// Replaces the text in `range` with `with`, moving spans to follow the edit.
    ///
    /// Span endpoints before the edit stay put and endpoints after it shift by the change in
    /// length. Endpoints inside the replaced range collapse onto it without covering the new
    /// text, since spans are exclusive at both ends. A non-empty span whose text was entirely
    /// replaced is detached and reported to the watcher.
    pub fn replace_range(&mut self, range: Range<usize>, with: &str) -> Result<(), Error> {
        validate_range(&self.text, &range).map_err(|e| e.during(Operation::Replace))?;
        self.text.replace_range(range.clone(), with);

        let removed_len = range.end - range.start;
        let inserted_len = with.len();
        let map_start = |p: usize| {
            if p < range.start {
                p
            } else if p >= range.end {
                p - removed_len + inserted_len
            } else {
                range.start + inserted_len
            }
        };
        let map_end = |p: usize| {
            if p <= range.start {
                p
            } else if p > range.end {
                p - removed_len + inserted_len
            } else {
                range.start
            }
        };

        let mut detached = Vec::new();
        let mut kept = Vec::with_capacity(self.spans.len());
        for mut entry in core::mem::take(&mut self.spans) {
            let start = map_start(entry.range.start);
            let end = map_end(entry.range.end);
            if !entry.range.is_empty() && end <= start {
                detached.push(entry);
                continue;
            }
            entry.range = start..end.max(start);
            kept.push(entry);
        }
        self.spans = kept;

        for entry in &detached {
            self.notify_removed(entry);
        }
        Ok(())
    }
}

impl<T: Debug + TextStorage, A: Attribute> SpanStore<A> for SpannedText<T, A> {
    fn len(&self) -> usize {
        self.text.len()
    }

    fn validate(&self, range: Range<usize>) -> Result<(), Error> {
        validate_range(&self.text, &range).map_err(|e| e.during(Operation::Install))
    }

    fn spans_overlapping(&self, kind: A::Kind, range: Range<usize>) -> SpanMatches {
        self.spans
            .iter()
            .filter(|entry| entry.attribute.kind() == kind && intersects(&entry.range, &range))
            .map(|entry| entry.id)
            .collect()
    }

    fn attribute(&self, span: SpanId) -> Option<&A> {
        self.position(span).map(|ix| &self.spans[ix].attribute)
    }

    fn range_of(&self, span: SpanId) -> Option<Range<usize>> {
        self.position(span).map(|ix| self.spans[ix].range.clone())
    }

    fn remove(&mut self, span: SpanId) -> Option<(Range<usize>, A)> {
        let ix = self.position(span)?;
        let entry = self.spans.remove(ix);
        self.notify_removed(&entry);
        Some((entry.range, entry.attribute))
    }

    fn install(&mut self, attribute: A, range: Range<usize>) -> Result<SpanId, Error> {
        self.validate(range.clone())?;
        let id = SpanId(self.next_id);
        self.next_id += 1;
        if let Some(watcher) = self.watcher.as_mut() {
            watcher.on_span_added(&attribute, range.clone());
        }
        self.spans.push(Entry {
            id,
            range,
            attribute,
        });
        Ok(id)
    }
}
