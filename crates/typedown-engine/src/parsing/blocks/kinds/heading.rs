/// ATX heading syntax. All `#` marker knowledge lives here.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: u8 = 6;

    /// Parses a heading marker at the start of a line.
    ///
    /// The hashes must be followed by a space or end-of-line (after trailing
    /// whitespace is ignored); seven or more hashes never match.
    ///
    /// # Returns
    /// `(level, marker_len)` where `marker_len` covers the hashes plus one
    /// following space if present.
    pub fn parse(s: &str) -> Option<(u8, usize)> {
        let hashes = s.bytes().take_while(|&b| b == Self::MARKER).count();
        if hashes == 0 || hashes > Self::MAX_LEVEL as usize {
            return None;
        }
        let rest = &s[hashes..];
        if rest.starts_with(' ') {
            Some((hashes as u8, hashes + 1))
        } else if rest.trim_end().is_empty() {
            Some((hashes as u8, hashes))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_one_with_space() {
        assert_eq!(Heading::parse("# title"), Some((1, 2)));
    }

    #[test]
    fn level_six() {
        assert_eq!(Heading::parse("###### deep"), Some((6, 7)));
    }

    #[test]
    fn seven_hashes_is_not_a_heading() {
        assert_eq!(Heading::parse("####### too many"), None);
    }

    #[test]
    fn hashes_at_end_of_line() {
        assert_eq!(Heading::parse("##"), Some((2, 2)));
        assert_eq!(Heading::parse("## "), Some((2, 3)));
    }

    #[test]
    fn no_space_after_hashes() {
        assert_eq!(Heading::parse("#title"), None);
    }

    #[test]
    fn indented_hashes_do_not_match() {
        assert_eq!(Heading::parse("  # title"), None);
    }
}
