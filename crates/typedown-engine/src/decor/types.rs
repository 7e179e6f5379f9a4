use serde::{Deserialize, Serialize};
use xi_rope::Rope;

use crate::parsing::rope::{Span, line_at_offset};

/// Style tags the host maps onto its own visual styles. The engine never
/// touches the host's rendering representation directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StyleTag {
    /// Dimmed raw syntax, revealed on the active line.
    Syntax,
    // Whole-line styles.
    Body,
    Heading(u8),
    Quote,
    Rule,
    List { indent: usize },
    CodeBlock,
    Table,
    // Inline content styles.
    Code,
    Strong,
    Emphasis,
    Strikethrough,
    Link,
    Image,
}

/// A non-text visual replacement for a syntax glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WidgetKind {
    Checkbox { checked: bool },
    Bullet,
}

/// What the rendering layer should do with a span. Decorations are purely
/// presentational; applying them never mutates the underlying text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecorAction {
    /// Remove the span from the rendered output.
    Hide,
    /// Apply a character style to the span.
    Mark(StyleTag),
    /// Replace the span with an interactive widget; the host hands the same
    /// span back for click hit-testing.
    ReplaceWithWidget(WidgetKind),
    /// Whole-line layout style; range-legal alongside span decorations.
    LineStyle(StyleTag),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decoration {
    pub span: Span,
    pub action: DecorAction,
}

impl Decoration {
    pub fn is_line_style(&self) -> bool {
        matches!(self.action, DecorAction::LineStyle(_))
    }
}

/// The lines intersected by the current selection, 1-based inclusive.
/// Rebuilt on every selection change, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveRegion {
    pub start_line: usize,
    pub end_line: usize,
}

impl ActiveRegion {
    /// Derives the active lines from a byte-offset selection. Out-of-range
    /// offsets clamp to the end of the document rather than erroring.
    pub fn from_selection(rope: &Rope, selection: &std::ops::Range<usize>) -> Self {
        let a = line_at_offset(rope, selection.start).number;
        let b = line_at_offset(rope, selection.end).number;
        Self {
            start_line: a.min(b),
            end_line: a.max(b),
        }
    }

    /// A region touching no line, for rendering without focus.
    pub fn none() -> Self {
        Self {
            start_line: 0,
            end_line: 0,
        }
    }

    pub fn contains(&self, line: usize) -> bool {
        line >= self.start_line && line <= self.end_line && line != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caret_selection_is_one_line() {
        let rope = Rope::from("one\ntwo\nthree");
        let region = ActiveRegion::from_selection(&rope, &(5..5));
        assert_eq!(region.start_line, 2);
        assert_eq!(region.end_line, 2);
        assert!(region.contains(2));
        assert!(!region.contains(1));
    }

    #[test]
    fn multi_line_selection() {
        let rope = Rope::from("one\ntwo\nthree");
        let region = ActiveRegion::from_selection(&rope, &(1..9));
        assert_eq!((region.start_line, region.end_line), (1, 3));
    }

    #[test]
    fn out_of_range_selection_clamps() {
        let rope = Rope::from("one");
        let region = ActiveRegion::from_selection(&rope, &(50..60));
        assert_eq!((region.start_line, region.end_line), (1, 1));
    }

    #[test]
    fn none_contains_nothing() {
        let region = ActiveRegion::none();
        assert!(!region.contains(0));
        assert!(!region.contains(1));
    }
}
