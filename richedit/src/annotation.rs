// Copyright 2026 the Richedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use core::fmt;

use crate::Span;

/// A generic key/value span.
///
/// Several features share annotation spans; the key says which feature a span belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Annotation {
    /// Feature discriminator, see [`AnnotationKey`].
    pub key: Arc<str>,
    /// Feature payload.
    pub value: Arc<str>,
}

impl Annotation {
    /// Creates an annotation.
    pub fn new(key: impl Into<Arc<str>>, value: impl Into<Arc<str>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// The roles an [`Annotation`] span can play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnnotationKey {
    /// Ties an inline image to the key of its source, so it can be rebuilt later.
    ImageSpanKey,
    /// A hyperlink target.
    Link,
}

impl AnnotationKey {
    /// The key stored in annotations of this role.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ImageSpanKey => "IMAGE_SPAN_KEY",
            Self::Link => "LINK",
        }
    }

    /// Returns `true` if `annotation` plays this role.
    pub fn matches(self, annotation: &Annotation) -> bool {
        *annotation.key == *self.name()
    }

    /// Returns `true` if `span` is an annotation playing this role.
    pub fn matches_span(self, span: &Span) -> bool {
        span.as_annotation().is_some_and(|a| self.matches(a))
    }

    /// Creates an annotation of this role.
    pub fn annotation(self, value: impl Into<Arc<str>>) -> Annotation {
        Annotation::new(self.name(), value)
    }

    /// Creates an annotation span of this role.
    pub fn span(self, value: impl Into<Arc<str>>) -> Span {
        Span::Annotation(self.annotation(value))
    }
}

impl fmt::Display for AnnotationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{Annotation, AnnotationKey};

    #[test]
    fn keys_match_by_exact_name() {
        let link = AnnotationKey::Link.annotation("https://example.com");
        assert!(AnnotationKey::Link.matches(&link));
        assert!(!AnnotationKey::ImageSpanKey.matches(&link));
        assert!(!AnnotationKey::Link.matches(&Annotation::new("link", "x")));
        assert_eq!(AnnotationKey::ImageSpanKey.to_string(), "IMAGE_SPAN_KEY");
    }
}
