//! Core enums for staticmd parsing.
//!
//! These enums are the closed vocabularies shared by the inline tokenizer,
//! the block segmenter and the HTML tree builder.


/// The kind of an inline span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// Unformatted text
    Plain,
    /// Text between `**` pairs
    Bold,
    /// Text between `_` pairs
    Italic,
    /// Text between backtick pairs
    Code,
    /// `![alt](url)`
    Image,
    /// `[text](url)`
    Link,
}

impl SpanKind {
    /// Whether spans of this kind carry a URL target.
    pub fn has_target(&self) -> bool {
        matches!(self, SpanKind::Image | SpanKind::Link)
    }
}

impl std::fmt::Display for SpanKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpanKind::Plain => write!(f, "plain"),
            SpanKind::Bold => write!(f, "bold"),
            SpanKind::Italic => write!(f, "italic"),
            SpanKind::Code => write!(f, "code"),
            SpanKind::Image => write!(f, "image"),
            SpanKind::Link => write!(f, "link"),
        }
    }
}

/// The kind of a blank-line-delimited block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Anything not matched by another kind
    Paragraph,
    /// `#` to `######` followed by a space; holds the level (1-6)
    Heading(u8),
    /// Fenced by lines that are exactly three backticks
    Code,
    /// Every line starts with `>`
    Quote,
    /// Every line starts with `- `
    UnorderedList,
    /// Lines numbered `1. `, `2. `, ... in sequence
    OrderedList,
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockKind::Paragraph => write!(f, "paragraph"),
            BlockKind::Heading(level) => write!(f, "heading{}", level),
            BlockKind::Code => write!(f, "code"),
            BlockKind::Quote => write!(f, "quote"),
            BlockKind::UnorderedList => write!(f, "unordered_list"),
            BlockKind::OrderedList => write!(f, "ordered_list"),
        }
    }
}
