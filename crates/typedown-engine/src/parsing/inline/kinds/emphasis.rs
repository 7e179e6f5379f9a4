use super::RawMatch;

pub const DELIMS: [u8; 2] = [b'*', b'_'];

fn is_ws(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

/// `**text**` / `__text__` syntax.
pub struct Strong;

impl Strong {
    /// Matches a doubled delimiter at `at`. Content must be non-empty and
    /// must not start or end with whitespace or the delimiter character.
    /// Closing candidates failing those checks are skipped, so `***x***`
    /// still finds a valid pairing further right when one exists.
    pub fn match_at(b: &[u8], at: usize) -> Option<RawMatch> {
        let d = *b.get(at)?;
        if !DELIMS.contains(&d) || b.get(at + 1) != Some(&d) {
            return None;
        }
        let mut j = at + 2;
        while j + 1 < b.len() {
            if b[j] == d && b[j + 1] == d {
                let content = &b[at + 2..j];
                if !content.is_empty()
                    && !is_ws(content[0])
                    && !is_ws(content[content.len() - 1])
                    && content[0] != d
                    && content[content.len() - 1] != d
                {
                    return Some(RawMatch {
                        end: j + 2,
                        content: (at + 2, j),
                    });
                }
            }
            j += 1;
        }
        None
    }
}

/// `*text*` / `_text_` syntax.
pub struct Emphasis;

impl Emphasis {
    /// Matches a single delimiter at `at`. A delimiter is only valid when
    /// not immediately preceded or followed by another instance of the same
    /// character, so the `*` runs inside `**bold**` never read as emphasis.
    pub fn match_at(b: &[u8], at: usize) -> Option<RawMatch> {
        let d = *b.get(at)?;
        if !DELIMS.contains(&d) {
            return None;
        }
        if at > 0 && b[at - 1] == d {
            return None;
        }
        if b.get(at + 1) == Some(&d) {
            return None;
        }
        let mut j = at + 2; // content must be non-empty
        while j < b.len() {
            if b[j] == d && b[j - 1] != d && b.get(j + 1) != Some(&d) {
                return Some(RawMatch {
                    end: j + 1,
                    content: (at + 1, j),
                });
            }
            j += 1;
        }
        None
    }
}
