//! # Block classification
//!
//! Per-line block parsing in two phases:
//!
//! 1. **Line classification** (`classify`): each line is classified on its
//!    own text into a [`LineClass`] — kind, indent level, marker span,
//!    content start, widget glyph span.
//! 2. **Region resolution** (`crate::parsing::regions`): a whole-document
//!    pass overrides kinds for multi-line structures (fenced code regions,
//!    pipe tables) using the primitives exposed by the kind modules.
//!
//! Syntax knowledge lives in `kinds/*`; the classifier only dispatches.

pub mod classify;
pub mod kinds;
pub mod types;

pub use classify::{LineClass, classify};
pub use types::BlockKind;
