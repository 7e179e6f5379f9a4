/// Result of applying a command to a [`crate::editing::Document`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    /// Byte ranges inserted or replaced, in post-edit coordinates.
    pub changed: Vec<std::ops::Range<usize>>,
    /// Selection after the edit.
    pub new_selection: std::ops::Range<usize>,
    /// Document version after the edit.
    pub version: u64,
}
