//! Whole-document region resolution for fenced code and pipe tables.
//!
//! Both structures are multi-line, so they are resolved after per-line
//! classification and override the local kind where they apply.

use xi_rope::Rope;

use super::blocks::kinds::{CodeFence, Table};
use super::blocks::{BlockKind, classify};
use super::rope::{Span, lines_with_spans};

/// One line of the parsed document with its resolved kind and offsets.
///
/// Rebuilt from scratch on every pass; never cached across edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineInfo {
    /// 1-based line number.
    pub number: usize,
    /// Line span, terminator excluded.
    pub span: Span,
    pub kind: BlockKind,
    pub indent: usize,
    /// Span of the block's syntax marker, when the kind has one.
    pub marker: Option<Span>,
    /// Content span (post-marker); inline scanning operates on this.
    pub content: Span,
    /// Exact bullet/checkbox glyph span for widget replacement.
    pub glyph: Option<Span>,
}

/// The per-line view of one document snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDoc {
    pub lines: Vec<LineInfo>,
}

impl ParsedDoc {
    /// Looks up a line by its 1-based number.
    pub fn line(&self, number: usize) -> Option<&LineInfo> {
        number.checked_sub(1).and_then(|i| self.lines.get(i))
    }
}

/// Classifies every line and resolves fence and table regions.
pub fn parse_document(rope: &Rope) -> ParsedDoc {
    let mut lines = Vec::new();
    let mut texts = Vec::new();
    let mut in_fence = false;

    for lr in lines_with_spans(rope) {
        let base = lr.span.start;
        let text = lr.text.trim_end_matches(['\r', '\n']).to_string();
        let text_end = base + text.len();

        let lc = classify(&text, base);
        let mut info = LineInfo {
            number: lr.number,
            span: Span::new(base, text_end),
            kind: lc.kind,
            indent: lc.indent,
            marker: lc.marker,
            content: Span::new(lc.content_start, text_end),
            glyph: lc.glyph,
        };

        // Fence context overrides the local classification. An unclosed
        // region extends to the end of the document; that is graceful
        // degradation, not an error.
        if in_fence {
            if CodeFence::is_fence_line(&text) {
                mark_fence_boundary(&mut info);
                in_fence = false;
            } else {
                info.kind = BlockKind::CodeFenceBody;
                info.marker = None;
                info.content = info.span;
                info.glyph = None;
            }
        } else if CodeFence::is_fence_line(&text) {
            mark_fence_boundary(&mut info);
            in_fence = true;
        }

        texts.push(text);
        lines.push(info);
    }

    detect_tables(&mut lines, &texts);
    ParsedDoc { lines }
}

fn mark_fence_boundary(info: &mut LineInfo) {
    info.kind = BlockKind::CodeFenceBoundary;
    info.indent = 0;
    // The whole boundary line (backticks plus info string) is syntax.
    info.marker = Some(info.span);
    info.content = Span::new(info.span.end, info.span.end);
    info.glyph = None;
}

/// Two-pass table detection: candidate lines are promoted when a separator
/// row directly follows one, and candidates that never find their separator
/// keep their local classification (demoted to plain paragraphs).
fn detect_tables(lines: &mut [LineInfo], texts: &[String]) {
    // Fence kinds are resolved before this pass, so a fence line can never
    // be a table candidate even when its text starts with a pipe.
    let candidates: Vec<bool> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            !line.kind.is_code_fence()
                && (Table::is_pipe_line(&texts[i]) || Table::is_separator_line(&texts[i]))
        })
        .collect();

    let mut i = 0;
    while i < lines.len() {
        if candidates[i]
            && i + 1 < lines.len()
            && candidates[i + 1]
            && Table::is_separator_line(&texts[i + 1])
        {
            lines[i].kind = BlockKind::TableHeader;
            lines[i + 1].kind = BlockKind::TableSeparator;
            let mut j = i + 2;
            while j < lines.len() && candidates[j] {
                lines[j].kind = BlockKind::TableRow;
                j += 1;
            }
            i = j;
        } else {
            i += 1;
        }
    }
}
