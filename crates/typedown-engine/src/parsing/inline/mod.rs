//! # Inline scanning
//!
//! Single-pass inline parsing over one line's content span. Inline spans
//! never cross line boundaries.
//!
//! At each offset, constructs are tried in precedence order (code first —
//! backticks are a raw zone), and a matched span's delimiters are never
//! reconsidered. Overlap resolution is therefore leftmost-start-wins, with
//! the precedence order acting as the longest-match tiebreak at equal
//! starts.
//!
//! - **`types`**: [`InlineSpan`] / [`InlineKind`]
//! - **`kinds`**: per-construct delimiters and `match_at` rules
//! - **`parser`**: [`scan_inline`] entry point

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::scan_inline;
pub use types::{InlineKind, InlineSpan};
