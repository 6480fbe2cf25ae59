// Copyright 2026 the Richedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::{Endpoint, Error, ErrorKind, TextStorage};

/// A byte range validated against a text buffer.
///
/// Guarantees, at the time of validation:
///
/// - `start <= end`
/// - both endpoints are within the text
/// - both endpoints lie on UTF-8 character boundaries
///
/// A `TextRange` does not remember which text it was validated against; it is only meaningful
/// until that text is edited.
///
/// ## Example
///
/// ```
/// use span_store::TextRange;
///
/// let range = TextRange::new(&"Hello!", 0..5).unwrap();
/// assert_eq!(range.as_range(), 0..5);
/// assert!(TextRange::new(&"Hello!", 0..7).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextRange {
    start: usize,
    end: usize,
}

impl TextRange {
    /// Validates `range` against `text`.
    #[inline]
    pub fn new<T: TextStorage + ?Sized>(text: &T, range: Range<usize>) -> Result<Self, Error> {
        validate_range(text, &range)?;
        Ok(Self {
            start: range.start,
            end: range.end,
        })
    }

    /// The start byte offset.
    #[must_use]
    #[inline]
    pub const fn start(self) -> usize {
        self.start
    }

    /// The end byte offset (exclusive).
    #[must_use]
    #[inline]
    pub const fn end(self) -> usize {
        self.end
    }

    /// Returns `true` for a zero-width range.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Returns this range as a `Range<usize>`.
    #[must_use]
    #[inline]
    pub fn as_range(self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<TextRange> for Range<usize> {
    #[inline]
    fn from(value: TextRange) -> Self {
        value.as_range()
    }
}

pub(crate) fn validate_range<T: TextStorage + ?Sized>(
    text: &T,
    range: &Range<usize>,
) -> Result<(), Error> {
    let len = text.len();
    if range.start > range.end {
        return Err(Error::new(ErrorKind::InvalidRange, range.start, range.end, len));
    }
    if range.end > len {
        return Err(Error::new(ErrorKind::InvalidBounds, range.start, range.end, len));
    }
    for (which, index) in [(Endpoint::Start, range.start), (Endpoint::End, range.end)] {
        if !text.is_char_boundary(index) {
            return Err(Error::not_on_char_boundary(
                text,
                range.start,
                range.end,
                which,
            ));
        }
    }
    Ok(())
}
