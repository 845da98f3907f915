//! Staticmd Parser
//!
//! The parsing half of the staticmd markdown pipeline: an inline tokenizer
//! that turns text into typed spans, and a block segmenter that cuts a
//! document into classified blocks.
//!
//! # Example
//!
//! ```
//! use staticmd_core::{BlockKind, SpanKind};
//! use staticmd_parser::{parse_blocks, tokenize};
//!
//! let blocks = parse_blocks("# Hello\n\nSome **bold** text");
//! assert_eq!(blocks[0].kind, BlockKind::Heading(1));
//! assert_eq!(blocks[1].kind, BlockKind::Paragraph);
//!
//! let spans = tokenize(&blocks[1].text).unwrap();
//! assert_eq!(spans[1].kind(), SpanKind::Bold);
//! assert_eq!(spans[1].text(), "bold");
//! ```

pub mod blocks;
pub mod inline;

pub use blocks::{classify, heading_level, parse_blocks, split_blocks, Block, CODE_FENCE};
pub use inline::{
    extract_images, extract_links, split_delimiter, split_images, split_links, tokenize,
};
