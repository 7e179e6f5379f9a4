use regex::Regex;
use std::sync::OnceLock;

/// Pipe-table syntax primitives. Whether a candidate line actually becomes
/// part of a table is decided by the whole-document region pass.
pub struct Table;

impl Table {
    pub const PIPE: char = '|';

    /// A candidate table line: starts and ends with `|` after trimming.
    pub fn is_pipe_line(s: &str) -> bool {
        let t = s.trim();
        t.len() >= 2 && t.starts_with(Self::PIPE) && t.ends_with(Self::PIPE)
    }

    /// A header/body separator row such as `| --- | :---: |`.
    pub fn is_separator_line(s: &str) -> bool {
        static SEPARATOR: OnceLock<Regex> = OnceLock::new();
        let re = SEPARATOR.get_or_init(|| {
            Regex::new(r"^\|?(\s*:?-+:?\s*\|)+\s*:?-+:?\s*\|?$")
                .expect("invalid table separator regex")
        });
        re.is_match(s.trim())
    }
}
