pub mod decor;
pub mod editing;
pub mod parsing;

// Re-export key types for easier usage
pub use decor::{ActiveRegion, DecorAction, Decoration, StyleTag, WidgetKind, compose};
pub use editing::{
    Cmd, DEBOUNCE_INTERVAL, Debouncer, Document, Key, Outcome, Patch, Recompute, Scheduler,
    handle_command, toggle_checkbox,
};
pub use parsing::{BlockKind, LineClass, LineInfo, ParsedDoc, classify, parse_document};
pub use parsing::rope::Span;
