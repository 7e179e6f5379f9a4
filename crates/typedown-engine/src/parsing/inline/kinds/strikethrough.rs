use super::RawMatch;

/// `~~text~~` syntax.
pub struct Strikethrough;

impl Strikethrough {
    pub const TILDE: u8 = b'~';

    /// Matches `~~text~~` at `at`; content must be non-empty.
    pub fn match_at(b: &[u8], at: usize) -> Option<RawMatch> {
        if b.get(at) != Some(&Self::TILDE) || b.get(at + 1) != Some(&Self::TILDE) {
            return None;
        }
        let mut j = at + 3; // non-empty content
        while j + 1 < b.len() {
            if b[j] == Self::TILDE && b[j + 1] == Self::TILDE {
                return Some(RawMatch {
                    end: j + 2,
                    content: (at + 2, j),
                });
            }
            j += 1;
        }
        None
    }
}
