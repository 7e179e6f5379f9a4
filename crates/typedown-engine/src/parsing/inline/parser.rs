use crate::parsing::rope::Span;

use super::kinds::{CodeSpan, Emphasis, Image, Link, RawMatch, Strikethrough, Strong};
use super::types::{InlineKind, InlineSpan};

/// Scans one line's content for inline spans.
///
/// # Arguments
/// - `base`: byte offset in the rope where `s` begins (for absolute spans)
/// - `s`: the content to scan; never spans a line boundary
///
/// # Precedence
/// At each offset, constructs are tried in order: code, image, link, strong,
/// emphasis, strikethrough. Code is a raw zone: nothing inside backticks is
/// parsed further. A delimiter claimed by an earlier span is never
/// reconsidered, which yields leftmost-start-wins overall; at equal starts
/// the precedence order doubles as longest-match (strong before emphasis).
///
/// # Returns
/// Non-overlapping spans ordered by start offset. Text between constructs
/// produces nothing; malformed syntax simply stays plain.
pub fn scan_inline(base: usize, s: &str) -> Vec<InlineSpan> {
    let b = s.as_bytes();
    let mut out = Vec::new();
    let mut i = 0usize;

    while i < b.len() {
        match match_at(b, i) {
            Some((kind, m)) => {
                out.push(InlineSpan {
                    kind,
                    span: Span::new(base + i, base + m.end),
                    content: Span::new(base + m.content.0, base + m.content.1),
                });
                i = m.end;
            }
            // Delimiters are ASCII, so advancing one byte at a time is safe:
            // positions inside a multi-byte character can never match.
            None => i += 1,
        }
    }

    out
}

fn match_at(b: &[u8], at: usize) -> Option<(InlineKind, RawMatch)> {
    if let Some(m) = CodeSpan::match_at(b, at) {
        return Some((InlineKind::Code, m));
    }
    if let Some(m) = Image::match_at(b, at) {
        return Some((InlineKind::Image, m));
    }
    if let Some(m) = Link::match_at(b, at) {
        return Some((InlineKind::Link, m));
    }
    if let Some(m) = Strong::match_at(b, at) {
        return Some((InlineKind::Strong, m));
    }
    if let Some(m) = Emphasis::match_at(b, at) {
        return Some((InlineKind::Emphasis, m));
    }
    if let Some(m) = Strikethrough::match_at(b, at) {
        return Some((InlineKind::Strikethrough, m));
    }
    None
}
