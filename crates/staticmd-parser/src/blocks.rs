//! Block segmentation and classification.
//!
//! A document is cut into blocks at blank lines, and each block is
//! classified into exactly one [`BlockKind`] by looking at its lines.

use log::trace;
use regex::Regex;
use std::sync::LazyLock;
use staticmd_core::BlockKind;

/// Regex for headings: one to six `#` followed by a space
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#{1,6}) ").unwrap());

/// A line that opens or closes a fenced code block
pub const CODE_FENCE: &str = "```";

/// One classified block of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Trimmed block text, never empty when produced by [`parse_blocks`]
    pub text: String,
    pub kind: BlockKind,
}

impl Block {
    /// Classify `text` and wrap it as a block.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let kind = classify(&text);
        Self { text, kind }
    }
}

/// Split a document into trimmed, non-empty blocks.
///
/// Runs of blank (or whitespace-only) lines act as a single separator.
pub fn split_blocks(markdown: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in markdown.lines() {
        if line.trim().is_empty() {
            flush_block(&mut current, &mut blocks);
        } else {
            current.push(line);
        }
    }
    flush_block(&mut current, &mut blocks);

    blocks
}

fn flush_block(lines: &mut Vec<&str>, blocks: &mut Vec<String>) {
    if lines.is_empty() {
        return;
    }
    let joined = lines.join("\n");
    let trimmed = joined.trim();
    if !trimmed.is_empty() {
        blocks.push(trimmed.to_string());
    }
    lines.clear();
}

/// Split a document into blocks and classify each one, in document order.
pub fn parse_blocks(markdown: &str) -> Vec<Block> {
    split_blocks(markdown)
        .into_iter()
        .map(|text| {
            let block = Block::new(text);
            trace!("Classified block as {}: {:?}", block.kind, block.text);
            block
        })
        .collect()
}

/// Return the heading level of a line, if it opens a heading.
pub fn heading_level(line: &str) -> Option<u8> {
    HEADING_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|hashes| hashes.len() as u8)
}

/// The marker that line `index` (0-based) of an ordered list starts with.
pub fn ordered_marker(index: usize) -> String {
    format!("{}. ", index + 1)
}

/// Classify a block.
///
/// Checks run in a fixed precedence (code, quote, unordered list, ordered
/// list, heading) and the first match wins; anything else is a paragraph.
/// Lines are split on `\n` only, so a trailing newline counts as a final
/// empty line.
pub fn classify(block: &str) -> BlockKind {
    // `split` always yields at least one line
    let lines: Vec<&str> = block.split('\n').collect();

    if is_code(&lines) {
        return BlockKind::Code;
    }
    if lines.iter().all(|line| line.starts_with('>')) {
        return BlockKind::Quote;
    }
    if lines.iter().all(|line| line.starts_with("- ")) {
        return BlockKind::UnorderedList;
    }
    if lines
        .iter()
        .enumerate()
        .all(|(i, line)| line.starts_with(&ordered_marker(i)))
    {
        return BlockKind::OrderedList;
    }
    if let Some(level) = heading_level(lines[0]) {
        return BlockKind::Heading(level);
    }

    BlockKind::Paragraph
}

fn is_code(lines: &[&str]) -> bool {
    lines.len() >= 2 && lines[0] == CODE_FENCE && lines[lines.len() - 1] == CODE_FENCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_blocks() {
        let md = r#"
This is **bolded** paragraph

This is another paragraph with _italic_ text and `code` here
This is the same paragraph on a new line

- This is a list
- with items
"#;
        assert_eq!(
            split_blocks(md),
            vec![
                "This is **bolded** paragraph",
                "This is another paragraph with _italic_ text and `code` here\nThis is the same paragraph on a new line",
                "- This is a list\n- with items",
            ]
        );
    }

    #[test]
    fn test_excessive_newlines() {
        let md = "First block\n\n\nSecond block\n\n\n\nThird block";
        assert_eq!(
            split_blocks(md),
            vec!["First block", "Second block", "Third block"]
        );
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        let md = "\n   First block with spaces   \n\n  Second block with tabs\t\n\nThird block\n";
        assert_eq!(
            split_blocks(md),
            vec![
                "First block with spaces",
                "Second block with tabs",
                "Third block",
            ]
        );
    }

    #[test]
    fn test_whitespace_only_line_separates() {
        assert_eq!(split_blocks("one\n   \ntwo"), vec!["one", "two"]);
    }

    #[test]
    fn test_empty_and_blank_documents() {
        assert!(split_blocks("").is_empty());
        assert!(split_blocks("\n\n\n\n").is_empty());
    }

    #[test]
    fn test_single_block() {
        assert_eq!(
            split_blocks("Just a single paragraph"),
            vec!["Just a single paragraph"]
        );
    }

    #[test]
    fn test_code_block_kept_whole() {
        let md = "Here's some code:\n\n```\nfn main() {\n    run();\n}\n```\n\nAfter.";
        let blocks = parse_blocks(md);
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[1].kind, BlockKind::Code);
        assert_eq!(blocks[1].text, "```\nfn main() {\n    run();\n}\n```");
    }

    #[test]
    fn test_classify_paragraph() {
        assert_eq!(classify("This is a simple paragraph"), BlockKind::Paragraph);
        assert_eq!(
            classify("This is line 1\nThis is line 2\nThis is line 3"),
            BlockKind::Paragraph
        );
        assert_eq!(classify(""), BlockKind::Paragraph);
    }

    #[test]
    fn test_classify_headings() {
        assert_eq!(classify("# Heading 1"), BlockKind::Heading(1));
        assert_eq!(classify("###### Heading 6"), BlockKind::Heading(6));
        assert_eq!(classify("#NoSpace"), BlockKind::Paragraph);
        assert_eq!(classify("####### Too many"), BlockKind::Paragraph);
    }

    #[test]
    fn test_classify_code() {
        assert_eq!(classify("```\nprint('hello')\n```"), BlockKind::Code);
        assert_eq!(classify("```\n```"), BlockKind::Code);
        assert_eq!(classify("```"), BlockKind::Paragraph);
        assert_eq!(classify("```rust\nlet x = 1;\n```"), BlockKind::Paragraph);
        assert_eq!(classify("```\nx\n```\n"), BlockKind::Paragraph);
    }

    #[test]
    fn test_classify_quote() {
        assert_eq!(classify(">This is a quote"), BlockKind::Quote);
        assert_eq!(classify(">Line 1\n> Line 2\n>Line 3"), BlockKind::Quote);
        assert_eq!(classify(">Line 1\nLine 2"), BlockKind::Paragraph);
        assert_eq!(classify(">Line 1\n"), BlockKind::Paragraph);
    }

    #[test]
    fn test_classify_unordered_list() {
        assert_eq!(
            classify("- Item 1\n- Item 2\n- Item 3"),
            BlockKind::UnorderedList
        );
        assert_eq!(classify("- Item 1\n-Item 2"), BlockKind::Paragraph);
    }

    #[test]
    fn test_classify_ordered_list() {
        assert_eq!(
            classify("1. First\n2. Second\n3. Third"),
            BlockKind::OrderedList
        );
        assert_eq!(classify("1. First\n3. Wrong\n2. Order"), BlockKind::Paragraph);
        assert_eq!(classify("1. a\n3. b\n2. c"), BlockKind::Paragraph);
        assert_eq!(classify("2. Starts late"), BlockKind::Paragraph);
        assert_eq!(classify("1.Missing space"), BlockKind::Paragraph);
    }

    #[test]
    fn test_list_precedes_heading() {
        assert_eq!(classify("- # not a heading"), BlockKind::UnorderedList);
    }

    #[test]
    fn test_heading_level() {
        assert_eq!(heading_level("## Two"), Some(2));
        assert_eq!(heading_level("##Two"), None);
        assert_eq!(heading_level("plain"), None);
    }
}
