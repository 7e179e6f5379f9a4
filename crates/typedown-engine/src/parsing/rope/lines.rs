use xi_rope::Rope;

use super::span::Span;

/// A reference to a single line in the rope with its byte span.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// 1-based line number.
    pub number: usize,
    /// Byte span of this line in the rope (includes newline if present).
    pub span: Span,
    /// The line text as a string, newline included.
    pub text: String,
}

impl LineRef {
    /// Byte offset where the line's text ends, excluding any `\r\n` / `\n`.
    pub fn text_end(&self) -> usize {
        let trimmed = self.text.trim_end_matches(['\r', '\n']);
        self.span.start + trimmed.len()
    }
}

/// Returns an iterator over lines with their byte spans.
///
/// Uses `lines_raw` to preserve newline characters, which is important for
/// accurate span tracking during decoration builds.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    let mut number = 0usize;
    rope.lines_raw(..).map(move |line| {
        let start = offset;
        let len = line.len();
        offset += len;
        number += 1;
        LineRef {
            number,
            span: Span {
                start,
                end: offset,
            },
            text: line.into_owned(),
        }
    })
}

/// Position of the line containing a byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinePos {
    /// 1-based line number.
    pub number: usize,
    /// Byte offset of the line start.
    pub start: usize,
    /// Byte offset where the line text ends (newline excluded).
    pub text_end: usize,
    /// Byte offset past the line terminator (start of the next line).
    pub end: usize,
}

/// Finds the line containing `offset`. Offsets past the end of the document
/// are clamped to the last line; an offset just past a trailing newline lands
/// on the empty virtual line after it.
pub fn line_at_offset(rope: &Rope, offset: usize) -> LinePos {
    let offset = offset.min(rope.len());
    let mut last: Option<LineRef> = None;

    for lr in lines_with_spans(rope) {
        if offset < lr.span.end {
            return line_pos(&lr);
        }
        last = Some(lr);
    }

    match last {
        // Offset == len. If the final line has no terminator the cursor sits
        // on it; otherwise it sits on the empty line after the terminator.
        Some(lr) if lr.text_end() == lr.span.end => line_pos(&lr),
        Some(lr) => LinePos {
            number: lr.number + 1,
            start: lr.span.end,
            text_end: lr.span.end,
            end: lr.span.end,
        },
        None => LinePos {
            number: 1,
            start: 0,
            text_end: 0,
            end: 0,
        },
    }
}

fn line_pos(lr: &LineRef) -> LinePos {
    LinePos {
        number: lr.number,
        start: lr.span.start,
        text_end: lr.text_end(),
        end: lr.span.end,
    }
}
