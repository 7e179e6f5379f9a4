/// Blockquote prefix syntax. One composed depth is tracked; nested quotes
/// beyond the prefix count are not rendered separately.
pub struct BlockQuote;

impl BlockQuote {
    pub const PREFIX: u8 = b'>';

    /// Parses leading `>` prefixes, greedily, allowing interleaved spaces
    /// (`> text`, `>> nested`, `> > spaced`).
    ///
    /// # Returns
    /// `(depth, marker_len)` where `marker_len` covers the prefixes plus one
    /// space after the final `>` if present. `None` when the line has no
    /// prefix at all.
    pub fn parse(s: &str) -> Option<(u8, usize)> {
        let b = s.as_bytes();
        let mut i = 0usize;
        let mut depth = 0u8;

        loop {
            let mark = i;
            while i < b.len() && b[i] == b' ' {
                i += 1;
            }
            if i < b.len() && b[i] == Self::PREFIX {
                depth = depth.saturating_add(1);
                i += 1;
            } else {
                i = mark;
                break;
            }
        }
        if depth == 0 {
            return None;
        }
        if i < b.len() && b[i] == b' ' {
            i += 1;
        }
        Some((depth, i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_a_quote() {
        assert_eq!(BlockQuote::parse("hello"), None);
    }

    #[test]
    fn single_prefix() {
        assert_eq!(BlockQuote::parse("> hello"), Some((1, 2)));
    }

    #[test]
    fn spaced_nested_prefix() {
        assert_eq!(BlockQuote::parse("> > hello"), Some((2, 4)));
    }

    #[test]
    fn tight_nested_prefix() {
        assert_eq!(BlockQuote::parse(">> hello"), Some((2, 3)));
    }

    #[test]
    fn bare_prefix_at_end_of_line() {
        assert_eq!(BlockQuote::parse(">"), Some((1, 1)));
    }
}
