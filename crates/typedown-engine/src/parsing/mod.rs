//! # Parsing
//!
//! Stateless per-pass parsing: every decoration build re-derives the full
//! per-line view from the rope. Nothing here survives a buffer edit, which
//! rules out stale-decoration bugs at the cost of an O(document) rescan —
//! acceptable for human-scale notes.

pub mod blocks;
pub mod inline;
pub mod regions;
pub mod rope;

pub use blocks::{BlockKind, LineClass, classify};
pub use regions::{LineInfo, ParsedDoc, parse_document};
