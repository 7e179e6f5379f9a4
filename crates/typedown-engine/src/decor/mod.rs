//! # Decoration composition
//!
//! Turns one document snapshot plus the active region into an ordered,
//! non-overlapping decoration list. The host applies the list to its own
//! rendering representation; the engine never touches that representation
//! and the underlying text is never mutated by a decoration pass.

pub mod compose;
pub mod types;

pub use compose::compose;
pub use types::{ActiveRegion, DecorAction, Decoration, StyleTag, WidgetKind};
