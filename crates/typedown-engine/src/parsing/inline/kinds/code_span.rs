use super::RawMatch;

/// Inline code syntax. Code is matched first and is a raw zone: nothing
/// inside the backticks is parsed further.
pub struct CodeSpan;

impl CodeSpan {
    pub const TICK: u8 = b'`';

    /// Matches `` `...` `` at `at`. The delimiter is exactly one backtick;
    /// content may contain any character except another backtick.
    pub fn match_at(b: &[u8], at: usize) -> Option<RawMatch> {
        if b.get(at) != Some(&Self::TICK) {
            return None;
        }
        let close = at + 1 + b[at + 1..].iter().position(|&c| c == Self::TICK)?;
        Some(RawMatch {
            end: close + 1,
            content: (at + 1, close),
        })
    }
}
