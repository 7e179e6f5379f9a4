/// Horizontal rule syntax: a line of 3+ repeats of one rule character.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const CHARS: [char; 3] = ['*', '-', '_'];

    /// True when the trimmed line consists solely of three or more of the
    /// same rule character. Mixed or spaced forms (`- - -`) do not match.
    pub fn matches(s: &str) -> bool {
        let t = s.trim();
        let mut chars = t.chars();
        let Some(first) = chars.next() else {
            return false;
        };
        Self::CHARS.contains(&first) && t.len() >= 3 && chars.all(|c| c == first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_of_each_kind() {
        assert!(ThematicBreak::matches("---"));
        assert!(ThematicBreak::matches("***"));
        assert!(ThematicBreak::matches("___"));
    }

    #[test]
    fn longer_runs_match() {
        assert!(ThematicBreak::matches("----------"));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert!(ThematicBreak::matches("  ---  "));
    }

    #[test]
    fn too_short() {
        assert!(!ThematicBreak::matches("--"));
    }

    #[test]
    fn mixed_characters() {
        assert!(!ThematicBreak::matches("--*"));
        assert!(!ThematicBreak::matches("- - -"));
    }

    #[test]
    fn blank_line() {
        assert!(!ThematicBreak::matches(""));
        assert!(!ThematicBreak::matches("   "));
    }
}
