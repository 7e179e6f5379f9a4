//! # Editing
//!
//! Edits flow one way: a [`Cmd`] (or a structural key routed through
//! [`handle_command`]) is compiled to a rope delta, applied to the
//! [`Document`], and reported back as a [`Patch`]. The host then asks the
//! [`Scheduler`] when to rebuild decorations from the new snapshot.

pub mod commands;
pub mod document;
pub mod patch;
pub mod scheduler;

pub use commands::{Cmd, INDENT, Key, Outcome, handle_command, toggle_checkbox};
pub use document::Document;
pub use patch::Patch;
pub use scheduler::{DEBOUNCE_INTERVAL, Debouncer, Recompute, Scheduler};
