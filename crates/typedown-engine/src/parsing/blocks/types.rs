use serde::{Deserialize, Serialize};

/// The block kind of a single line.
///
/// Exactly one kind per line per decoration pass. Classification is a pure
/// function of the line's text plus the whole-document fence/table context;
/// it never depends on prior decoration state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockKind {
    /// Default when no other kind matches (also the demotion target for
    /// orphaned table candidates).
    Paragraph,
    /// ATX heading, level 1..=6.
    Heading(u8),
    /// Blockquote with its composed prefix depth.
    Blockquote(u8),
    /// A rule line of `---` / `***` / `___`.
    HorizontalRule,
    /// `- item` / `* item` / `+ item`.
    UnorderedItem { indent: usize },
    /// `3. item` / `3) item`; the number is preserved for continuation,
    /// never renumbered during classification.
    OrderedItem { number: u64, indent: usize },
    /// `- [ ] task` / `- [x] task`.
    ChecklistItem { checked: bool, indent: usize },
    /// The opening or closing ``` line of a fenced code region.
    CodeFenceBoundary,
    /// A line inside a fenced code region; rendered verbatim.
    CodeFenceBody,
    /// A pipe line promoted by the separator row that follows it.
    TableHeader,
    /// The `| --- | --- |` row under a table header.
    TableSeparator,
    /// A pipe line following a separator or another row.
    TableRow,
}

impl BlockKind {
    /// True for the three list flavours (the kinds the edit behaviors act on).
    pub fn is_list_item(&self) -> bool {
        matches!(
            self,
            BlockKind::UnorderedItem { .. }
                | BlockKind::OrderedItem { .. }
                | BlockKind::ChecklistItem { .. }
        )
    }

    /// True for lines inside or bounding a fenced code region, which are
    /// excluded from table detection and inline scanning.
    pub fn is_code_fence(&self) -> bool {
        matches!(
            self,
            BlockKind::CodeFenceBoundary | BlockKind::CodeFenceBody
        )
    }
}
