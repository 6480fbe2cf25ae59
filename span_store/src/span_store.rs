// Copyright 2026 the Richedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::Debug;
use core::ops::Range;

use smallvec::SmallVec;

use crate::Error;

/// A span payload that reports which class of span it belongs to.
///
/// Span stores answer queries per kind, so that a bold marker and a hyperlink never show up in
/// each other's traversals.
pub trait Attribute: Debug {
    /// The discriminant used to query spans of one class.
    type Kind: Copy + Eq + Debug;

    /// The class of this span.
    fn kind(&self) -> Self::Kind;
}

/// Opaque handle to a span attached to a [`SpanStore`].
///
/// Handles are only meaningful for the store that produced them, and only until that span is
/// removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpanId(pub(crate) u64);

/// Matches collected by [`SpanStore::spans_overlapping`].
pub type SpanMatches = SmallVec<[SpanId; 8]>;

/// A text buffer that carries spans over half-open byte ranges.
///
/// Every range is exclusive at both ends: text inserted exactly at a span's start or end is not
/// covered by it.
pub trait SpanStore<A: Attribute> {
    /// Length of the underlying text in bytes.
    fn len(&self) -> usize;

    /// Returns `true` if the underlying text is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks that `range` could be installed, without changing the store.
    ///
    /// [`install`](Self::install) over a range that passed this check does not fail until the
    /// text is next edited.
    fn validate(&self, range: Range<usize>) -> Result<(), Error>;

    /// Collects every span of `kind` that intersects `range`, in store order.
    ///
    /// The result is materialized, so callers may remove spans while walking it. See
    /// [`intersects`] for the exact intersection rule.
    fn spans_overlapping(&self, kind: A::Kind, range: Range<usize>) -> SpanMatches;

    /// The payload of `span`, or `None` if it is no longer attached.
    fn attribute(&self, span: SpanId) -> Option<&A>;

    /// The range of `span`, or `None` if it is no longer attached.
    fn range_of(&self, span: SpanId) -> Option<Range<usize>>;

    /// Detaches `span`, returning its range and payload.
    fn remove(&mut self, span: SpanId) -> Option<(Range<usize>, A)>;

    /// Attaches `attribute` over `range`.
    fn install(&mut self, attribute: A, range: Range<usize>) -> Result<SpanId, Error>;
}

/// Observer notified when spans are attached to or detached from a store.
///
/// Removal is reported whether it was requested explicitly or caused by deleting the text a span
/// covered.
pub trait SpanWatcher<A> {
    /// Called after `attribute` was attached over `range`.
    fn on_span_added(&mut self, attribute: &A, range: Range<usize>) {
        let _ = (attribute, range);
    }

    /// Called after `attribute` was detached from `range`.
    fn on_span_removed(&mut self, attribute: &A, range: Range<usize>) {
        let _ = (attribute, range);
    }
}

/// Returns whether a span over `span` is reported by a query over `query`.
///
/// The ranges intersect when `span.start <= query.end && span.end >= query.start`. When both
/// are non-empty, ranges that merely touch are not reported, so `0..5` does not match `5..8`.
/// A caret query (`5..5`) sees spans that start or end at the caret.
///
/// ```
/// use span_store::intersects;
///
/// assert!(intersects(&(0..10), &(3..7)));
/// assert!(!intersects(&(0..5), &(5..8)));
/// assert!(intersects(&(0..5), &(5..5)));
/// assert!(intersects(&(4..4), &(0..8)));
/// ```
#[inline]
pub fn intersects(span: &Range<usize>, query: &Range<usize>) -> bool {
    if span.start > query.end || span.end < query.start {
        return false;
    }
    if !span.is_empty() && !query.is_empty() {
        return span.start != query.end && span.end != query.start;
    }
    true
}
