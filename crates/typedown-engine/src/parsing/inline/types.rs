use serde::{Deserialize, Serialize};

use crate::parsing::rope::Span;

/// The kind of an inline construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InlineKind {
    Code,
    Strong,
    Emphasis,
    Strikethrough,
    Link,
    Image,
}

/// An inline construct within one line's content.
///
/// `span` includes the delimiters, `content` excludes them (for links and
/// images, `content` is the text/alt part; the URL sits inside the trailing
/// delimiter range). Within one line, spans are non-overlapping and ordered
/// by start offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineSpan {
    pub kind: InlineKind,
    pub span: Span,
    pub content: Span,
}
