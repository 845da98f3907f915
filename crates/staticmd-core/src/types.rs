//! Core types for staticmd

use crate::enums::SpanKind;

/// One inline-formatted fragment of text.
///
/// Only [`SpanKind::Image`] and [`SpanKind::Link`] spans carry a target;
/// the constructors keep that invariant and the fields are read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    kind: SpanKind,
    text: String,
    target: Option<String>,
}

impl Span {
    /// Create an unformatted span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(SpanKind::Plain, text)
    }

    /// Create a span of a kind without a target.
    ///
    /// Passing [`SpanKind::Image`] or [`SpanKind::Link`] yields an empty target.
    pub fn styled(kind: SpanKind, text: impl Into<String>) -> Self {
        let target = kind.has_target().then(String::new);
        Self {
            kind,
            text: text.into(),
            target,
        }
    }

    /// Create an image span; `text` is the alt text.
    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: SpanKind::Image,
            text: alt.into(),
            target: Some(url.into()),
        }
    }

    /// Create a link span.
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: SpanKind::Link,
            text: text.into(),
            target: Some(url.into()),
        }
    }

    pub fn kind(&self) -> SpanKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The URL of an image or link span.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_has_no_target() {
        let span = Span::plain("hello");
        assert_eq!(span.kind(), SpanKind::Plain);
        assert_eq!(span.text(), "hello");
        assert_eq!(span.target(), None);
    }

    #[test]
    fn test_styled_bold_has_no_target() {
        let span = Span::styled(SpanKind::Bold, "b");
        assert_eq!(span.target(), None);
        assert!(!span.is_plain());
    }

    #[test]
    fn test_image_keeps_empty_parts() {
        let span = Span::image("", "");
        assert_eq!(span.text(), "");
        assert_eq!(span.target(), Some(""));
    }

    #[test]
    fn test_link() {
        let span = Span::link("l", "v.com");
        assert_eq!(span.kind(), SpanKind::Link);
        assert_eq!(span.target(), Some("v.com"));
    }

    #[test]
    fn test_target_presence_follows_kind() {
        let kinds = [
            SpanKind::Plain,
            SpanKind::Bold,
            SpanKind::Italic,
            SpanKind::Code,
            SpanKind::Image,
            SpanKind::Link,
        ];
        for kind in kinds {
            let span = Span::styled(kind, "t");
            assert_eq!(span.target().is_some(), kind.has_target(), "{kind}");
        }
    }
}
