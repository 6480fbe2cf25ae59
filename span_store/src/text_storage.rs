// Copyright 2026 the Richedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::sync::Arc;
use core::ops::Range;

/// The text underneath a [`SpannedText`].
///
/// [`SpannedText`]: crate::SpannedText
pub trait TextStorage {
    /// The length of the text in bytes.
    fn len(&self) -> usize;

    /// Returns `true` if the text is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns whether `index` is a UTF-8 character boundary in the text.
    ///
    /// Indices greater than the length are never boundaries; the length itself is one.
    fn is_char_boundary(&self, index: usize) -> bool;
}

/// Text storage that can be edited in place.
pub trait EditableText: TextStorage {
    /// Replaces the bytes in `range` with `with`.
    ///
    /// `range` has already been validated against this text.
    fn replace_range(&mut self, range: Range<usize>, with: &str);
}

impl TextStorage for String {
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn is_char_boundary(&self, index: usize) -> bool {
        self.as_str().is_char_boundary(index)
    }
}

impl EditableText for String {
    fn replace_range(&mut self, range: Range<usize>, with: &str) {
        Self::replace_range(self, range, with);
    }
}

impl TextStorage for &str {
    fn len(&self) -> usize {
        str::len(self)
    }

    fn is_char_boundary(&self, index: usize) -> bool {
        str::is_char_boundary(self, index)
    }
}

impl TextStorage for Arc<str> {
    fn len(&self) -> usize {
        str::len(self)
    }

    fn is_char_boundary(&self, index: usize) -> bool {
        str::is_char_boundary(self, index)
    }
}

#[cfg(test)]
mod tests {
    use super::{EditableText, TextStorage};
    use alloc::string::{String, ToString};
    use alloc::sync::Arc;

    #[test]
    fn placeholder_is_three_bytes() {
        let s = "a\u{FFFC}b";
        assert_eq!(TextStorage::len(&s), 5);
        for (index, expected) in [(0, true), (1, true), (2, false), (3, false), (4, true)] {
            assert_eq!(s.is_char_boundary(index), expected, "index {index}");
        }

        let arc: Arc<str> = Arc::from(s);
        assert!(!TextStorage::is_char_boundary(&arc, 2));
        assert!(!TextStorage::is_char_boundary(&arc, 6));
    }

    #[test]
    fn replace_range_edits_in_place() {
        let mut s: String = "hello world".to_string();
        EditableText::replace_range(&mut s, 0..5, "goodbye");
        assert_eq!(s, "goodbye world");
        EditableText::replace_range(&mut s, 7..13, "");
        assert_eq!(s, "goodbye");
        assert!(!TextStorage::is_empty(&s));
    }
}
