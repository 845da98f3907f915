//! Markdown block to HTML node conversion.

use crate::node::{Attributes, Node};
use staticmd_core::{BlockKind, Result, Span, SpanKind};
use staticmd_parser::blocks::ordered_marker;
use staticmd_parser::{parse_blocks, tokenize, Block, CODE_FENCE};

/// Map one inline span to its leaf node.
pub fn span_to_node(span: &Span) -> Node {
    let target = span.target().unwrap_or_default();
    match span.kind() {
        SpanKind::Plain => Node::text(span.text()),
        SpanKind::Bold => Node::leaf("b", span.text()),
        SpanKind::Italic => Node::leaf("i", span.text()),
        SpanKind::Code => Node::leaf("code", span.text()),
        SpanKind::Image => Node::leaf_with_attributes(
            "img",
            "",
            Attributes::new().with("src", target).with("alt", span.text()),
        ),
        SpanKind::Link => {
            Node::leaf_with_attributes("a", span.text(), Attributes::new().with("href", target))
        }
    }
}

/// Tokenize inline text into child nodes.
///
/// Empty text yields a single empty text node so that the enclosing
/// element still renders.
pub fn inline_children(text: &str) -> Result<Vec<Node>> {
    let spans = tokenize(text)?;
    if spans.is_empty() {
        return Ok(vec![Node::text("")]);
    }
    Ok(spans.iter().map(span_to_node).collect())
}

/// Text of a heading block after its `#` markers and one space.
pub fn heading_text(block: &str, level: u8) -> &str {
    block.get(level as usize + 1..).unwrap_or_default()
}

/// Lines between the opening and closing fences of a code block.
fn code_body(block: &str) -> String {
    let lines: Vec<&str> = block.lines().collect();
    match lines.as_slice() {
        [first, body @ .., last] if *first == CODE_FENCE && *last == CODE_FENCE => body.join("\n"),
        _ => block.to_string(),
    }
}

/// Quote text with each line's `>` and one following space removed.
fn quote_text(block: &str) -> String {
    block
        .lines()
        .map(|line| {
            let line = line.strip_prefix('>').unwrap_or(line);
            line.strip_prefix(' ').unwrap_or(line)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn list_node<'a>(tag: &str, items: impl Iterator<Item = &'a str>) -> Result<Node> {
    let children = items
        .map(|item| Ok(Node::parent("li", inline_children(item)?)))
        .collect::<Result<Vec<_>>>()?;
    Ok(Node::parent(tag, children))
}

/// Convert a classified block into its HTML node.
pub fn block_to_node(block: &Block) -> Result<Node> {
    let text = block.text.as_str();
    let node = match block.kind {
        BlockKind::Paragraph => Node::parent("p", inline_children(text)?),
        BlockKind::Heading(level) => {
            Node::parent(format!("h{}", level), inline_children(heading_text(text, level))?)
        }
        BlockKind::Code => {
            let code = Node::parent("code", inline_children(&code_body(text))?);
            Node::parent("pre", vec![code])
        }
        BlockKind::Quote => Node::parent("blockquote", inline_children(&quote_text(text))?),
        BlockKind::UnorderedList => list_node(
            "ul",
            text.lines()
                .map(|line| line.strip_prefix("- ").unwrap_or(line)),
        )?,
        BlockKind::OrderedList => list_node(
            "ol",
            text.lines().enumerate().map(|(i, line)| {
                line.strip_prefix(ordered_marker(i).as_str())
                    .unwrap_or(line)
            }),
        )?,
    };
    Ok(node)
}

/// Convert a whole document into a `div` wrapping one node per block.
pub fn markdown_to_node(markdown: &str) -> Result<Node> {
    let children = parse_blocks(markdown)
        .iter()
        .map(block_to_node)
        .collect::<Result<Vec<_>>>()?;
    Ok(Node::parent("div", children))
}
