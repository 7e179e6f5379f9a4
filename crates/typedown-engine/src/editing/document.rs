use xi_rope::Rope;

use crate::editing::commands::{Cmd, compile_command, transform_selection_for_command};
use crate::editing::patch::Patch;

/// The text buffer with its selection and version counter.
///
/// The rope is the sole source of truth: decorations are derived from it and
/// never written back, and [`Document::to_bytes`] returns the buffer bytes
/// verbatim so the save round-trip is lossless. All edits flow through
/// [`Document::apply`], which compiles a [`Cmd`] to a rope delta, applies it
/// atomically and transforms the selection through the edit.
pub struct Document {
    pub(crate) buffer: Rope,
    pub(crate) selection: std::ops::Range<usize>,
    pub(crate) version: u64,
}

impl Document {
    /// Creates a document from raw bytes; fails on invalid UTF-8.
    pub fn from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        let text = std::str::from_utf8(bytes)?;
        Ok(Self {
            buffer: Rope::from(text),
            selection: 0..0,
            version: 0,
        })
    }

    pub fn rope(&self) -> &Rope {
        &self.buffer
    }

    /// Current content as a string (exact buffer bytes).
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// Current content as bytes, for lossless saving.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.text().into_bytes()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn selection(&self) -> std::ops::Range<usize> {
        self.selection.clone()
    }

    /// Sets the selection, clamping both ends to the buffer length so a
    /// stale range from before an edit degrades instead of erroring.
    pub fn set_selection(&mut self, selection: std::ops::Range<usize>) {
        let len = self.len();
        let start = selection.start.min(len);
        let end = selection.end.min(len).max(start);
        self.selection = start..end;
    }

    /// Applies a command: compile to a delta, apply to the buffer, transform
    /// the selection, bump the version.
    pub fn apply(&mut self, cmd: Cmd) -> Patch {
        let delta = compile_command(self, &cmd);

        // Collect post-edit insert ranges for the patch.
        let mut changed = Vec::new();
        let mut cursor = 0;
        for op in delta.els.iter() {
            match op {
                xi_rope::delta::DeltaElement::Copy(_from, to) => {
                    cursor = *to;
                }
                xi_rope::delta::DeltaElement::Insert(inserted) => {
                    let start = cursor;
                    let end = cursor + inserted.len();
                    changed.push(start..end);
                    cursor = end;
                }
            }
        }

        self.buffer = delta.apply(&self.buffer);

        let new_selection = transform_selection_for_command(&self.selection, &cmd);
        self.set_selection(new_selection);
        self.version += 1;

        Patch {
            changed,
            new_selection: self.selection.clone(),
            version: self.version,
        }
    }

    /// Slices the buffer, clamping the range to the buffer bounds.
    pub(crate) fn slice(&self, range: std::ops::Range<usize>) -> std::borrow::Cow<'_, str> {
        let len = self.len();
        let start = range.start.min(len);
        let end = range.end.min(len).max(start);
        self.buffer.slice_to_cow(start..end)
    }
}
