use crate::parsing::rope::Span;

use super::kinds::{BlockQuote, Heading, ListItem, ListMarkerKind, ThematicBreak};
use super::types::BlockKind;

/// Classification of a single line: block kind plus structural offsets.
///
/// Spans are absolute byte offsets (the line's start offset is passed as
/// `base`). Fence and table context is layered on afterwards by the region
/// pass; this classification itself depends on nothing but the line's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass {
    pub kind: BlockKind,
    /// Nesting level derived from leading whitespace, two characters per
    /// level (tabs count as one character).
    pub indent: usize,
    /// Span of the block's syntax marker, when the kind has one.
    pub marker: Option<Span>,
    /// Absolute offset where the line's content begins, past the marker.
    pub content_start: usize,
    /// Exact span of the bullet character or checkbox box, for widget
    /// replacement and click hit-testing.
    pub glyph: Option<Span>,
}

/// Classifies one line of text. `text` must not include the line terminator.
pub fn classify(text: &str, base: usize) -> LineClass {
    let leading = text
        .bytes()
        .take_while(|&b| b == b' ' || b == b'\t')
        .count();
    let indent = leading / ListItem::INDENT_WIDTH;

    if let Some((level, marker_len)) = Heading::parse(text) {
        return LineClass {
            kind: BlockKind::Heading(level),
            indent: 0,
            marker: Some(Span::new(base, base + marker_len)),
            content_start: base + marker_len,
            glyph: None,
        };
    }

    if let Some((depth, marker_len)) = BlockQuote::parse(text) {
        return LineClass {
            kind: BlockKind::Blockquote(depth),
            indent,
            marker: Some(Span::new(base, base + marker_len)),
            content_start: base + marker_len,
            glyph: None,
        };
    }

    if ThematicBreak::matches(text) {
        // The whole rule line is syntax; there is no content.
        let end = base + text.trim_end().len();
        return LineClass {
            kind: BlockKind::HorizontalRule,
            indent: 0,
            marker: Some(Span::new(base, end)),
            content_start: end,
            glyph: None,
        };
    }

    if let Some(m) = ListItem::parse(text) {
        let kind = match m.kind {
            ListMarkerKind::Bullet => BlockKind::UnorderedItem { indent: m.indent },
            ListMarkerKind::Ordered { number } => BlockKind::OrderedItem {
                number,
                indent: m.indent,
            },
            ListMarkerKind::Checkbox { checked } => BlockKind::ChecklistItem {
                checked,
                indent: m.indent,
            },
        };
        return LineClass {
            kind,
            indent: m.indent,
            marker: Some(Span::new(base + m.leading, base + m.content_start)),
            content_start: base + m.content_start,
            glyph: m.glyph.map(|(s, e)| Span::new(base + s, base + e)),
        };
    }

    LineClass {
        kind: BlockKind::Paragraph,
        indent,
        marker: None,
        content_start: base,
        glyph: None,
    }
}
