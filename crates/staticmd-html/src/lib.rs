//! Staticmd HTML
//!
//! Builds an HTML node tree from markdown and renders it to text.
//!
//! # Example
//!
//! ```
//! use staticmd_html::{convert_document, extract_title};
//!
//! let markdown = "# Hi\n\nA paragraph.";
//! assert_eq!(
//!     convert_document(markdown).unwrap(),
//!     "<div><h1>Hi</h1><p>A paragraph.</p></div>"
//! );
//! assert_eq!(extract_title(markdown).unwrap(), "Hi");
//! ```

pub mod builder;
pub mod node;

pub use builder::{block_to_node, markdown_to_node, span_to_node};
pub use node::{is_void_element, Attributes, Node};

use log::debug;
use staticmd_core::{BlockKind, Result, StaticmdError};
use staticmd_parser::parse_blocks;

/// Convert a markdown document into an HTML string wrapped in a `div`.
pub fn convert_document(markdown: &str) -> Result<String> {
    let node = markdown_to_node(markdown)?;
    debug!("Built HTML tree with {} top-level blocks", node.children().len());
    node.to_html()
}

/// Return the text of the first level-1 heading, trimmed.
///
/// Fails with [`StaticmdError::NoTitleFound`] when the document has none.
pub fn extract_title(markdown: &str) -> Result<String> {
    parse_blocks(markdown)
        .into_iter()
        .find(|block| block.kind == BlockKind::Heading(1))
        .map(|block| builder::heading_text(&block.text, 1).trim().to_string())
        .ok_or(StaticmdError::NoTitleFound)
}
