//! Inline markdown tokenizer.
//!
//! Splits raw text into a flat sequence of [`Span`]s. Tokenizing runs a
//! fixed series of passes (images, links, then the `**`, `_` and backtick
//! delimiters), each pass only splitting the plain spans left over by the
//! previous one. Styled spans pass through untouched, so styles never nest.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;
use staticmd_core::{Result, Span, SpanKind, StaticmdError};

/// Regex for matching images: ![alt](url)
static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

/// Regex for matching links: [text](url)
///
/// A match directly preceded by `!` is image syntax and is skipped by
/// [`find_link`].
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

/// Paired delimiters, in the order their passes run.
pub const DELIMITERS: [(&str, SpanKind); 3] = [
    ("**", SpanKind::Bold),
    ("_", SpanKind::Italic),
    ("`", SpanKind::Code),
];

/// An image or link found in a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Extracted<'a> {
    /// Byte range of the whole construct, brackets included
    range: Range<usize>,
    /// Alt text or link text
    label: &'a str,
    /// URL
    target: &'a str,
}

fn extracted_from<'a>(caps: &regex::Captures<'a>) -> Option<Extracted<'a>> {
    let whole = caps.get(0)?;
    Some(Extracted {
        range: whole.range(),
        label: caps.get(1).map_or("", |m| m.as_str()),
        target: caps.get(2).map_or("", |m| m.as_str()),
    })
}

/// Find the next image at or after byte offset `from`.
fn find_image(text: &str, from: usize) -> Option<Extracted<'_>> {
    let caps = IMAGE_RE.captures_at(text, from)?;
    extracted_from(&caps)
}

/// Find the next link at or after byte offset `from`.
fn find_link(text: &str, mut from: usize) -> Option<Extracted<'_>> {
    loop {
        let caps = LINK_RE.captures_at(text, from)?;
        let found = extracted_from(&caps)?;
        if text[..found.range.start].ends_with('!') {
            // `[` is one byte, so this stays on a char boundary
            from = found.range.start + 1;
            continue;
        }
        return Some(found);
    }
}

fn extract_all(
    text: &str,
    find: fn(&str, usize) -> Option<Extracted<'_>>,
) -> Vec<(String, String)> {
    let mut found = Vec::new();
    let mut cursor = 0;
    while let Some(item) = find(text, cursor) {
        found.push((item.label.to_string(), item.target.to_string()));
        cursor = item.range.end;
    }
    found
}

/// Return `(alt, url)` for every image in `text`.
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    extract_all(text, find_image)
}

/// Return `(text, url)` for every link in `text`, ignoring images.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    extract_all(text, find_link)
}

/// Split the plain spans of `spans` around every match of `find`.
fn split_extracted(
    spans: Vec<Span>,
    find: fn(&str, usize) -> Option<Extracted<'_>>,
    build: fn(&str, &str) -> Span,
) -> Vec<Span> {
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }

        let text = span.text();
        let mut cursor = 0;
        while let Some(item) = find(text, cursor) {
            if item.range.start > cursor {
                result.push(Span::plain(&text[cursor..item.range.start]));
            }
            result.push(build(item.label, item.target));
            cursor = item.range.end;
        }
        if cursor < text.len() {
            result.push(Span::plain(&text[cursor..]));
        }
    }

    result
}

/// Split plain spans on `![alt](url)`, producing image spans.
pub fn split_images(spans: Vec<Span>) -> Vec<Span> {
    split_extracted(spans, find_image, |alt, url| Span::image(alt, url))
}

/// Split plain spans on `[text](url)`, producing link spans.
pub fn split_links(spans: Vec<Span>) -> Vec<Span> {
    split_extracted(spans, find_link, |text, url| Span::link(text, url))
}

/// Split plain spans on paired occurrences of `delimiter`.
///
/// Text between a pair becomes a span of `kind` (possibly empty); text
/// outside pairs stays plain and is only emitted when non-empty. An opening
/// delimiter with no closing partner fails with
/// [`StaticmdError::UnbalancedDelimiter`].
pub fn split_delimiter(spans: Vec<Span>, delimiter: &str, kind: SpanKind) -> Result<Vec<Span>> {
    if delimiter.is_empty() {
        return Ok(spans);
    }

    let mut result = Vec::with_capacity(spans.len());
    for span in spans {
        if span.is_plain() {
            split_plain(span.text(), delimiter, kind, &mut result)?;
        } else {
            result.push(span);
        }
    }
    Ok(result)
}

fn split_plain(text: &str, delimiter: &str, kind: SpanKind, out: &mut Vec<Span>) -> Result<()> {
    let mut rest = text;

    while let Some(open) = rest.find(delimiter) {
        if open > 0 {
            out.push(Span::plain(&rest[..open]));
        }
        let inner = &rest[open + delimiter.len()..];
        let close = inner
            .find(delimiter)
            .ok_or_else(|| StaticmdError::UnbalancedDelimiter(delimiter.to_string()))?;
        out.push(Span::styled(kind, &inner[..close]));
        rest = &inner[close + delimiter.len()..];
    }

    if !rest.is_empty() {
        out.push(Span::plain(rest));
    }
    Ok(())
}

/// Tokenize a piece of inline markdown into spans.
///
/// This is the main entry point for inline parsing. Empty input yields no
/// spans.
pub fn tokenize(text: &str) -> Result<Vec<Span>> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let spans = split_images(vec![Span::plain(text)]);
    let mut spans = split_links(spans);
    for (delimiter, kind) in DELIMITERS {
        spans = split_delimiter(spans, delimiter, kind)?;
    }
    Ok(spans)
}
