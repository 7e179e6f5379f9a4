use xi_rope::delta::Builder;
use xi_rope::{Delta, Rope, RopeInfo};

use crate::parsing::BlockKind;
use crate::parsing::blocks::classify;
use crate::parsing::rope::{Span, line_at_offset};

use super::document::Document;
use super::patch::Patch;

/// Two spaces per nesting level, matching the classifier's indent rule.
pub const INDENT: &str = "  ";

/// Low-level edit commands, compiled to rope deltas by [`Document::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    InsertText {
        at: usize,
        text: String,
    },
    DeleteRange {
        range: std::ops::Range<usize>,
    },
    ReplaceRange {
        range: std::ops::Range<usize>,
        text: String,
    },
}

/// Structural keys intercepted before the host's default handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Tab,
    ShiftTab,
}

/// Whether the engine consumed a key. On `NotHandled` the host's default
/// behavior applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Handled(Patch),
    NotHandled,
}

/// Compiles a command into a rope delta. Ranges are clamped to the buffer so
/// stale offsets degrade to smaller edits instead of panicking.
pub(crate) fn compile_command(doc: &Document, cmd: &Cmd) -> Delta<RopeInfo> {
    let len = doc.len();
    let clamp = |r: &std::ops::Range<usize>| {
        let start = r.start.min(len);
        start..r.end.min(len).max(start)
    };

    let mut builder = Builder::new(len);
    match cmd {
        Cmd::InsertText { at, text } => {
            let at = (*at).min(len);
            builder.replace(at..at, Rope::from(text.as_str()));
        }
        Cmd::DeleteRange { range } => {
            builder.delete(clamp(range));
        }
        Cmd::ReplaceRange { range, text } => {
            builder.replace(clamp(range), Rope::from(text.as_str()));
        }
    }
    builder.build()
}

/// Transforms a selection through a command: positions after the edit shift
/// by the size delta, positions inside a deleted/replaced range collapse.
pub(crate) fn transform_selection_for_command(
    sel: &std::ops::Range<usize>,
    cmd: &Cmd,
) -> std::ops::Range<usize> {
    match cmd {
        Cmd::InsertText { at, text } => {
            let n = text.len();
            if *at <= sel.start {
                (sel.start + n)..(sel.end + n)
            } else if *at < sel.end {
                sel.start..(sel.end + n)
            } else {
                sel.clone()
            }
        }
        Cmd::DeleteRange { range } => {
            let n = range.len();
            if range.end <= sel.start {
                (sel.start - n)..(sel.end - n)
            } else if range.start >= sel.end {
                sel.clone()
            } else {
                range.start..range.start
            }
        }
        Cmd::ReplaceRange { range, text } => {
            let removed = range.len() as i64;
            let inserted = text.len() as i64;
            if range.end <= sel.start {
                let shift = |p: usize| (p as i64 + inserted - removed).max(0) as usize;
                shift(sel.start)..shift(sel.end)
            } else if range.start >= sel.end {
                sel.clone()
            } else {
                let p = range.start + text.len();
                p..p
            }
        }
    }
}

/// Handles a structural key at the current cursor position.
///
/// Decisions are made per keystroke by classifying the cursor's line; there
/// is no persisted state machine.
pub fn handle_command(doc: &mut Document, key: Key) -> Outcome {
    match key {
        Key::Enter => handle_enter(doc),
        Key::Tab => handle_tab(doc, false),
        Key::ShiftTab => handle_tab(doc, true),
    }
}

fn handle_enter(doc: &mut Document) -> Outcome {
    let at = doc.selection().start;
    let pos = line_at_offset(doc.rope(), at);
    let text = doc.slice(pos.start..pos.text_end).into_owned();
    let lc = classify(&text, 0);

    if !lc.kind.is_list_item() {
        return Outcome::NotHandled;
    }
    let Some(marker) = lc.marker else {
        return Outcome::NotHandled;
    };

    if text[lc.content_start..].trim().is_empty() {
        // Enter on an empty item exits the list: the marker goes away and
        // the keypress's newline is consumed, so the whole line (terminator
        // included) is removed.
        return Outcome::Handled(doc.apply(Cmd::DeleteRange {
            range: pos.start..pos.end,
        }));
    }

    let continuation = match lc.kind {
        BlockKind::UnorderedItem { .. } => format!("{} ", &text[marker.start..marker.start + 1]),
        BlockKind::OrderedItem { number, .. } => format!("{}. ", number + 1),
        // New checklist items always start unchecked.
        BlockKind::ChecklistItem { .. } => format!("{} [ ] ", &text[marker.start..marker.start + 1]),
        _ => return Outcome::NotHandled,
    };
    let insert = format!("\n{}{}", &text[..marker.start], continuation);
    // Selection transformation puts the cursor right after the new marker.
    Outcome::Handled(doc.apply(Cmd::InsertText { at, text: insert }))
}

fn handle_tab(doc: &mut Document, outdent: bool) -> Outcome {
    let at = doc.selection().start;
    let pos = line_at_offset(doc.rope(), at);
    let text = doc.slice(pos.start..pos.text_end).into_owned();

    if !classify(&text, 0).kind.is_list_item() {
        return Outcome::NotHandled;
    }

    if outdent {
        let leading = text.bytes().take_while(|&b| b == b' ').count();
        let remove = leading.min(INDENT.len());
        // Indent never goes below zero; the key is still consumed.
        Outcome::Handled(doc.apply(Cmd::DeleteRange {
            range: pos.start..pos.start + remove,
        }))
    } else {
        Outcome::Handled(doc.apply(Cmd::InsertText {
            at: pos.start,
            text: INDENT.to_string(),
        }))
    }
}

/// Toggles a checkbox given the exact glyph span previously emitted in a
/// `ReplaceWithWidget` decoration. The cursor stays where it was.
///
/// Returns `None` when the span no longer holds a checkbox (stale after a
/// concurrent edit); the caller re-queries after the next recompute.
pub fn toggle_checkbox(doc: &mut Document, glyph: Span) -> Option<Patch> {
    let current = doc.slice(glyph.to_range()).into_owned();
    // Case-insensitive on read, always normalized to lowercase on write.
    let replacement = match current.as_str() {
        "[ ]" => "[x]",
        "[x]" | "[X]" => "[ ]",
        _ => return None,
    };

    let selection = doc.selection();
    let mut patch = doc.apply(Cmd::ReplaceRange {
        range: glyph.to_range(),
        text: replacement.to_string(),
    });
    // Same-length replacement: the old selection is still valid.
    doc.set_selection(selection);
    patch.new_selection = doc.selection();
    Some(patch)
}
