//! Inline-specific syntax knowledge, one module per construct family.
//!
//! Each module owns its delimiters and its `match_at` rule. Matchers work on
//! raw bytes: every delimiter is ASCII, so scanning positions inside a
//! multi-byte character can never match and all produced boundaries are
//! valid UTF-8 boundaries by construction.

pub mod code_span;
pub mod emphasis;
pub mod link;
pub mod strikethrough;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strong};
pub use link::{Image, Link};
pub use strikethrough::Strikethrough;

/// A successful match at some scan position, in line-local byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawMatch {
    /// Offset just past the construct (including closing delimiters).
    pub end: usize,
    /// Content offsets, delimiters excluded.
    pub content: (usize, usize),
}
