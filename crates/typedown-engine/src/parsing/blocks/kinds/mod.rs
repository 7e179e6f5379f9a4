//! Block-specific syntax knowledge, one module per kind.
//!
//! Each kind owns its delimiter constants and matching rules so classifier
//! code never hard-codes syntax it doesn't own.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list_item;
pub mod table;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list_item::{ListItem, ListMarker, ListMarkerKind};
pub use table::Table;
pub use thematic_break::ThematicBreak;
