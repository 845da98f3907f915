//! Staticmd Core
//!
//! This crate provides core types and error definitions
//! for the staticmd markdown-to-HTML converter.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`SpanKind`], [`BlockKind`] - Closed sets of inline and block kinds
//! - [`Span`] - One inline-formatted fragment of text
//! - [`StaticmdError`] - Error types

pub mod enums;
pub mod error;
pub mod types;

pub use enums::{BlockKind, SpanKind};
pub use error::{Result, StaticmdError};
pub use types::Span;
