use xi_rope::Rope;

use crate::parsing::inline::{InlineKind, scan_inline};
use crate::parsing::rope::{Span, slice_to_string};
use crate::parsing::{BlockKind, LineInfo, parse_document};

use super::types::{ActiveRegion, DecorAction, Decoration, StyleTag, WidgetKind};

/// Builds the full decoration set for one document snapshot.
///
/// Pure function of the rope and the active region: calling it twice on the
/// same snapshot yields identical output, and it never mutates the rope.
/// The result is ordered by start offset and no two non-`LineStyle`
/// decorations overlap; conflicting candidates are silently dropped so
/// malformed markdown renders as plain text instead of erroring.
pub fn compose(rope: &Rope, active: &ActiveRegion) -> Vec<Decoration> {
    let doc = parse_document(rope);
    let mut decorations = Vec::new();

    for line in &doc.lines {
        emit_line(rope, line, active.contains(line.number), &mut decorations);
    }

    resolve(decorations)
}

fn emit_line(rope: &Rope, line: &LineInfo, active: bool, out: &mut Vec<Decoration>) {
    push(out, line.span, DecorAction::LineStyle(line_style(line)));

    if let Some(marker) = line.marker {
        emit_marker(line, marker, active, out);
    }

    // Fence regions render verbatim; everything else gets inline spans over
    // its content.
    if line.kind.is_code_fence() {
        return;
    }
    let content = slice_to_string(rope, line.content);
    for span in scan_inline(line.content.start, &content) {
        let open = Span::new(span.span.start, span.content.start);
        let close = Span::new(span.content.end, span.span.end);
        let style = inline_style(span.kind);
        if active {
            push(out, open, DecorAction::Mark(StyleTag::Syntax));
            push(out, span.content, DecorAction::Mark(style));
            push(out, close, DecorAction::Mark(StyleTag::Syntax));
        } else {
            push(out, open, DecorAction::Hide);
            push(out, span.content, DecorAction::Mark(style));
            push(out, close, DecorAction::Hide);
        }
    }
}

fn emit_marker(line: &LineInfo, marker: Span, active: bool, out: &mut Vec<Decoration>) {
    if active {
        // Raw syntax stays visible while the line is being edited, dimmed so
        // content stands out.
        push(out, marker, DecorAction::Mark(StyleTag::Syntax));
        return;
    }
    match (widget_for(&line.kind), line.glyph) {
        (Some(widget), Some(glyph)) => {
            // Hide the syntax around the glyph and put the widget exactly on
            // it, so click hit-testing maps back to the original text range.
            push(out, Span::new(marker.start, glyph.start), DecorAction::Hide);
            push(out, glyph, DecorAction::ReplaceWithWidget(widget));
            push(
                out,
                Span::new(glyph.end, line.content.start),
                DecorAction::Hide,
            );
        }
        _ => push(out, marker, DecorAction::Hide),
    }
}

fn widget_for(kind: &BlockKind) -> Option<WidgetKind> {
    match kind {
        BlockKind::UnorderedItem { .. } => Some(WidgetKind::Bullet),
        BlockKind::ChecklistItem { checked, .. } => Some(WidgetKind::Checkbox { checked: *checked }),
        _ => None,
    }
}

fn line_style(line: &LineInfo) -> StyleTag {
    match line.kind {
        BlockKind::Paragraph => StyleTag::Body,
        BlockKind::Heading(level) => StyleTag::Heading(level),
        BlockKind::Blockquote(_) => StyleTag::Quote,
        BlockKind::HorizontalRule => StyleTag::Rule,
        BlockKind::UnorderedItem { indent }
        | BlockKind::OrderedItem { indent, .. }
        | BlockKind::ChecklistItem { indent, .. } => StyleTag::List { indent },
        BlockKind::CodeFenceBoundary | BlockKind::CodeFenceBody => StyleTag::CodeBlock,
        BlockKind::TableHeader | BlockKind::TableSeparator | BlockKind::TableRow => StyleTag::Table,
    }
}

fn inline_style(kind: InlineKind) -> StyleTag {
    match kind {
        InlineKind::Code => StyleTag::Code,
        InlineKind::Strong => StyleTag::Strong,
        InlineKind::Emphasis => StyleTag::Emphasis,
        InlineKind::Strikethrough => StyleTag::Strikethrough,
        InlineKind::Link => StyleTag::Link,
        InlineKind::Image => StyleTag::Image,
    }
}

fn push(out: &mut Vec<Decoration>, span: Span, action: DecorAction) {
    // Degenerate spans are never emitted.
    if !span.is_empty() {
        out.push(Decoration { span, action });
    }
}

/// Sorts by start offset (`LineStyle` first on ties, since those are
/// range-legal alongside span decorations) and drops any non-`LineStyle`
/// decoration that overlaps an earlier kept one.
fn resolve(mut decorations: Vec<Decoration>) -> Vec<Decoration> {
    decorations.sort_by_key(|d| (d.span.start, u8::from(!d.is_line_style())));

    let mut out = Vec::with_capacity(decorations.len());
    let mut last_end = 0usize;
    for d in decorations {
        if d.is_line_style() {
            out.push(d);
        } else if d.span.start >= last_end {
            last_end = d.span.end;
            out.push(d);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn compose_str(md: &str, active: &ActiveRegion) -> Vec<Decoration> {
        compose(&Rope::from(md), active)
    }

    fn active_line(n: usize) -> ActiveRegion {
        ActiveRegion {
            start_line: n,
            end_line: n,
        }
    }

    #[test]
    fn compose_is_idempotent() {
        let md = "# h\n- [ ] task\n**b** and *i*\n";
        let rope = Rope::from(md);
        let region = active_line(2);
        assert_eq!(compose(&rope, &region), compose(&rope, &region));
    }

    #[test]
    fn compose_never_mutates_the_rope() {
        let md = "# h\n`code`\n";
        let rope = Rope::from(md);
        let _ = compose(&rope, &ActiveRegion::none());
        assert_eq!(rope.to_string(), md);
    }

    #[test]
    fn non_line_style_decorations_never_overlap() {
        let md = "# *h*\n- [x] **a** `b`\n~~c~~ *d* __e__\n| a |\n";
        let decorations = compose_str(md, &active_line(2));
        let mut last_end = 0;
        for d in decorations.iter().filter(|d| !d.is_line_style()) {
            assert!(d.span.start >= last_end, "overlap at {:?}", d);
            last_end = d.span.end;
        }
    }

    #[test]
    fn output_is_ordered_by_start() {
        let md = "## two\n> quote with `code`\n";
        let decorations = compose_str(md, &ActiveRegion::none());
        for pair in decorations.windows(2) {
            assert!(pair[0].span.start <= pair[1].span.start);
        }
    }

    #[test]
    fn inactive_bold_hides_delimiters_and_marks_content() {
        let decorations = compose_str("**bold**", &ActiveRegion::none());
        assert_eq!(
            decorations,
            vec![
                Decoration {
                    span: Span::new(0, 8),
                    action: DecorAction::LineStyle(StyleTag::Body),
                },
                Decoration {
                    span: Span::new(0, 2),
                    action: DecorAction::Hide,
                },
                Decoration {
                    span: Span::new(2, 6),
                    action: DecorAction::Mark(StyleTag::Strong),
                },
                Decoration {
                    span: Span::new(6, 8),
                    action: DecorAction::Hide,
                },
            ]
        );
    }

    #[test]
    fn active_bold_marks_everything_hides_nothing() {
        let decorations = compose_str("**bold**", &active_line(1));
        assert_eq!(
            decorations,
            vec![
                Decoration {
                    span: Span::new(0, 8),
                    action: DecorAction::LineStyle(StyleTag::Body),
                },
                Decoration {
                    span: Span::new(0, 2),
                    action: DecorAction::Mark(StyleTag::Syntax),
                },
                Decoration {
                    span: Span::new(2, 6),
                    action: DecorAction::Mark(StyleTag::Strong),
                },
                Decoration {
                    span: Span::new(6, 8),
                    action: DecorAction::Mark(StyleTag::Syntax),
                },
            ]
        );
    }

    #[test]
    fn inactive_heading_hides_its_marker() {
        let decorations = compose_str("## title", &ActiveRegion::none());
        assert!(decorations.contains(&Decoration {
            span: Span::new(0, 3),
            action: DecorAction::Hide,
        }));
        assert!(decorations.contains(&Decoration {
            span: Span::new(0, 8),
            action: DecorAction::LineStyle(StyleTag::Heading(2)),
        }));
    }

    #[test]
    fn active_heading_dims_its_marker() {
        let decorations = compose_str("## title", &active_line(1));
        assert!(decorations.contains(&Decoration {
            span: Span::new(0, 3),
            action: DecorAction::Mark(StyleTag::Syntax),
        }));
    }

    #[test]
    fn inactive_checklist_gets_a_checkbox_widget() {
        let decorations = compose_str("- [x] done", &ActiveRegion::none());
        assert!(decorations.contains(&Decoration {
            span: Span::new(2, 5),
            action: DecorAction::ReplaceWithWidget(WidgetKind::Checkbox { checked: true }),
        }));
        // The "- " before and the space after the box are hidden.
        assert!(decorations.contains(&Decoration {
            span: Span::new(0, 2),
            action: DecorAction::Hide,
        }));
        assert!(decorations.contains(&Decoration {
            span: Span::new(5, 6),
            action: DecorAction::Hide,
        }));
    }

    #[test]
    fn active_checklist_has_no_widget() {
        let decorations = compose_str("- [x] done", &active_line(1));
        assert!(
            decorations
                .iter()
                .all(|d| !matches!(d.action, DecorAction::ReplaceWithWidget(_)))
        );
        assert!(decorations.contains(&Decoration {
            span: Span::new(0, 6),
            action: DecorAction::Mark(StyleTag::Syntax),
        }));
    }

    #[test]
    fn inactive_bullet_gets_a_bullet_widget() {
        let decorations = compose_str("- item", &ActiveRegion::none());
        assert!(decorations.contains(&Decoration {
            span: Span::new(0, 1),
            action: DecorAction::ReplaceWithWidget(WidgetKind::Bullet),
        }));
    }

    #[test]
    fn fence_body_has_no_inline_decorations() {
        let decorations = compose_str("```\n**raw**\n```\n", &ActiveRegion::none());
        let body_marks: Vec<_> = decorations
            .iter()
            .filter(|d| d.span.start >= 4 && d.span.end <= 11 && !d.is_line_style())
            .collect();
        assert!(body_marks.is_empty(), "unexpected: {:?}", body_marks);
    }

    #[test]
    fn empty_document_composes_to_nothing() {
        assert!(compose_str("", &ActiveRegion::none()).is_empty());
    }

    #[test]
    fn blank_lines_emit_no_decorations() {
        let decorations = compose_str("a\n\nb\n", &ActiveRegion::none());
        // The empty middle line has a zero-length span, so not even its
        // line style is emitted.
        assert_eq!(
            decorations
                .iter()
                .filter(|d| d.is_line_style())
                .count(),
            2
        );
    }

    #[test]
    fn table_lines_get_table_line_style() {
        let decorations = compose_str("| a |  b |\n| --- | --- |\n| 1 | 2 |\n", &ActiveRegion::none());
        let tables = decorations
            .iter()
            .filter(|d| d.action == DecorAction::LineStyle(StyleTag::Table))
            .count();
        assert_eq!(tables, 3);
    }

    #[test]
    fn horizontal_rule_hides_whole_line_when_inactive() {
        let decorations = compose_str("---\n", &ActiveRegion::none());
        assert_eq!(
            decorations,
            vec![
                Decoration {
                    span: Span::new(0, 3),
                    action: DecorAction::LineStyle(StyleTag::Rule),
                },
                Decoration {
                    span: Span::new(0, 3),
                    action: DecorAction::Hide,
                },
            ]
        );
    }
}
