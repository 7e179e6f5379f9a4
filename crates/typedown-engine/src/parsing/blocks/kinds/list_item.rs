/// List-item marker syntax: bullets, ordered numbers, and checkboxes.
pub struct ListItem;

/// Which flavour of list marker was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMarkerKind {
    Bullet,
    Ordered { number: u64 },
    Checkbox { checked: bool },
}

/// A parsed list marker with its structural offsets (all relative to the
/// line start).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMarker {
    pub kind: ListMarkerKind,
    /// Leading whitespace character count. Tabs count as one character, not
    /// a tab stop; changing this would change nesting in existing documents.
    pub leading: usize,
    /// Nesting level: two spaces per level.
    pub indent: usize,
    /// Offset where the item's content begins, past the marker.
    pub content_start: usize,
    /// Exact range of the bullet character or `[ ]`/`[x]` box, for widget
    /// replacement and click hit-testing. `None` for ordered items.
    pub glyph: Option<(usize, usize)>,
    /// The bullet character (`-`, `*` or `+`); `.` for ordered items.
    pub bullet: char,
}

impl ListItem {
    pub const BULLETS: [u8; 3] = [b'-', b'*', b'+'];
    pub const INDENT_WIDTH: usize = 2;

    /// Parses a list marker at the start of a line.
    ///
    /// Checkboxes require whitespace after the `]`; a bullet requires
    /// whitespace after the bullet character, so `*emphasis*` never matches.
    /// Ordered numbers are preserved verbatim for list continuation, never
    /// renumbered here.
    pub fn parse(s: &str) -> Option<ListMarker> {
        let b = s.as_bytes();
        let mut i = 0usize;
        while i < b.len() && (b[i] == b' ' || b[i] == b'\t') {
            i += 1;
        }
        let leading = i;
        let indent = leading / Self::INDENT_WIDTH;

        if i < b.len() && Self::BULLETS.contains(&b[i]) {
            let bullet_at = i;
            let bullet = b[i] as char;
            i += 1;
            let ws_start = i;
            while i < b.len() && (b[i] == b' ' || b[i] == b'\t') {
                i += 1;
            }
            if i == ws_start {
                return None;
            }

            // `[ ]` / `[x]` / `[X]` followed by whitespace upgrades the
            // bullet to a checklist item.
            if i + 3 < b.len()
                && b[i] == b'['
                && matches!(b[i + 1], b' ' | b'x' | b'X')
                && b[i + 2] == b']'
                && (b[i + 3] == b' ' || b[i + 3] == b'\t')
            {
                return Some(ListMarker {
                    kind: ListMarkerKind::Checkbox {
                        checked: b[i + 1] != b' ',
                    },
                    leading,
                    indent,
                    content_start: i + 4,
                    glyph: Some((i, i + 3)),
                    bullet,
                });
            }

            return Some(ListMarker {
                kind: ListMarkerKind::Bullet,
                leading,
                indent,
                content_start: i,
                glyph: Some((bullet_at, bullet_at + 1)),
                bullet,
            });
        }

        let num_start = i;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        if i > num_start && i < b.len() && matches!(b[i], b'.' | b')') {
            let number: u64 = s[num_start..i].parse().ok()?;
            i += 1;
            let ws_start = i;
            while i < b.len() && (b[i] == b' ' || b[i] == b'\t') {
                i += 1;
            }
            if i > ws_start {
                return Some(ListMarker {
                    kind: ListMarkerKind::Ordered { number },
                    leading,
                    indent,
                    content_start: i,
                    glyph: None,
                    bullet: '.',
                });
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_bullet() {
        let m = ListItem::parse("- item").unwrap();
        assert_eq!(m.kind, ListMarkerKind::Bullet);
        assert_eq!(m.leading, 0);
        assert_eq!(m.content_start, 2);
        assert_eq!(m.glyph, Some((0, 1)));
        assert_eq!(m.bullet, '-');
    }

    #[test]
    fn indented_bullet() {
        let m = ListItem::parse("    * item").unwrap();
        assert_eq!(m.indent, 2);
        assert_eq!(m.glyph, Some((4, 5)));
    }

    #[test]
    fn odd_indent_rounds_down() {
        let m = ListItem::parse("   + item").unwrap();
        assert_eq!(m.indent, 1);
    }

    #[test]
    fn tab_counts_as_one_character() {
        let m = ListItem::parse("\t\t- item").unwrap();
        assert_eq!(m.leading, 2);
        assert_eq!(m.indent, 1);
    }

    #[test]
    fn bullet_needs_trailing_whitespace() {
        assert_eq!(ListItem::parse("-item"), None);
        assert_eq!(ListItem::parse("*emphasis*"), None);
    }

    #[test]
    fn unchecked_box() {
        let m = ListItem::parse("- [ ] task").unwrap();
        assert_eq!(m.kind, ListMarkerKind::Checkbox { checked: false });
        assert_eq!(m.content_start, 6);
        assert_eq!(m.glyph, Some((2, 5)));
    }

    #[test]
    fn checked_box_either_case() {
        let lower = ListItem::parse("- [x] done").unwrap();
        let upper = ListItem::parse("- [X] done").unwrap();
        assert_eq!(lower.kind, ListMarkerKind::Checkbox { checked: true });
        assert_eq!(upper.kind, ListMarkerKind::Checkbox { checked: true });
    }

    #[test]
    fn box_without_trailing_space_is_a_plain_bullet() {
        let m = ListItem::parse("- [ ]").unwrap();
        assert_eq!(m.kind, ListMarkerKind::Bullet);
    }

    #[test]
    fn ordered_with_dot() {
        let m = ListItem::parse("3. third").unwrap();
        assert_eq!(m.kind, ListMarkerKind::Ordered { number: 3 });
        assert_eq!(m.content_start, 3);
        assert_eq!(m.glyph, None);
    }

    #[test]
    fn ordered_with_paren() {
        let m = ListItem::parse("12) twelfth").unwrap();
        assert_eq!(m.kind, ListMarkerKind::Ordered { number: 12 });
        assert_eq!(m.content_start, 4);
    }

    #[test]
    fn number_without_separator() {
        assert_eq!(ListItem::parse("12 things"), None);
        assert_eq!(ListItem::parse("3.14 is pi"), None);
    }
}
