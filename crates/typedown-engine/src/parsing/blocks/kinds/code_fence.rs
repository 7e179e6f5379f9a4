/// Code-fence syntax. Fences are backtick-only; the info string after the
/// backticks (```` ```rust ````) is part of the boundary line.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// True when the line opens or closes a fenced code region.
    pub fn is_fence_line(s: &str) -> bool {
        s.starts_with(Self::FENCE)
    }
}
