use super::RawMatch;

/// `[text](url)` syntax. Bracket pairs do not nest and there are no escape
/// sequences; the first closing bracket/paren wins.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    pub const URL_OPEN: u8 = b'(';
    pub const URL_CLOSE: u8 = b')';

    /// Matches `[text](url)` at `at`. Content is the text part; the
    /// `(url)` tail stays inside the trailing delimiter range.
    pub fn match_at(b: &[u8], at: usize) -> Option<RawMatch> {
        if b.get(at) != Some(&Self::OPEN) {
            return None;
        }
        let close = at + 1 + b[at + 1..].iter().position(|&c| c == Self::CLOSE)?;
        if b.get(close + 1) != Some(&Self::URL_OPEN) {
            return None;
        }
        let url_close = close + 2 + b[close + 2..].iter().position(|&c| c == Self::URL_CLOSE)?;
        Some(RawMatch {
            end: url_close + 1,
            content: (at + 1, close),
        })
    }
}

/// `![alt](url)` syntax; a link body prefixed with `!`. Images are matched
/// before links so the `!` is never left behind as stray text.
pub struct Image;

impl Image {
    pub const BANG: u8 = b'!';

    /// Matches `![alt](url)` at `at`. Content is the alt text.
    pub fn match_at(b: &[u8], at: usize) -> Option<RawMatch> {
        if b.get(at) != Some(&Self::BANG) {
            return None;
        }
        let body = Link::match_at(b, at + 1)?;
        Some(RawMatch {
            end: body.end,
            content: body.content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_link() {
        let m = Link::match_at(b"[here](http://x)", 0).unwrap();
        assert_eq!(m.end, 16);
        assert_eq!(m.content, (1, 5));
    }

    #[test]
    fn link_needs_adjacent_paren() {
        assert_eq!(Link::match_at(b"[here] (http://x)", 0), None);
    }

    #[test]
    fn unclosed_url() {
        assert_eq!(Link::match_at(b"[here](http://x", 0), None);
    }

    #[test]
    fn image_wraps_link_body() {
        let m = Image::match_at(b"![cat](cat.png)", 0).unwrap();
        assert_eq!(m.end, 15);
        assert_eq!(m.content, (2, 5));
    }

    #[test]
    fn bang_without_bracket() {
        assert_eq!(Image::match_at(b"!not an image", 0), None);
    }
}
