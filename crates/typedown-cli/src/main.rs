use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::{
    env,
    io::stdout,
    path::PathBuf,
    process,
    time::{Duration, Instant},
};
use typedown_config::Config;
use typedown_engine::{
    ActiveRegion, Cmd, DecorAction, Debouncer, Decoration, Document, Key, Outcome, Recompute,
    Scheduler, StyleTag, WidgetKind, classify, compose, handle_command, toggle_checkbox,
};
use typedown_engine::parsing::rope::line_at_offset;

struct App {
    path: PathBuf,
    doc: Document,
    decorations: Vec<Decoration>,
    scheduler: Scheduler,
    debouncer: Debouncer,
    render_widgets: bool,
    dirty: bool,
    status: String,
}

impl App {
    fn new(path: PathBuf, config: Config) -> Result<Self> {
        let doc = if path.exists() {
            Document::from_bytes(&std::fs::read(&path)?)?
        } else {
            Document::from_bytes(b"")?
        };

        let mut app = Self {
            path,
            doc,
            decorations: Vec::new(),
            scheduler: Scheduler::new(Duration::from_millis(config.debounce_ms)),
            debouncer: Debouncer::new(),
            render_widgets: config.render_widgets,
            dirty: false,
            status: String::new(),
        };
        app.recompute();
        Ok(app)
    }

    fn recompute(&mut self) {
        let region = ActiveRegion::from_selection(self.doc.rope(), &self.doc.selection());
        self.decorations = compose(self.doc.rope(), &region);
    }

    fn after_edit(&mut self) {
        self.dirty = true;
        let cursor = self.doc.selection().start;
        match self.scheduler.plan_after_edit(self.doc.rope(), cursor) {
            Recompute::Immediate => {
                self.debouncer.cancel();
                self.recompute();
            }
            Recompute::Debounced(interval) => self.debouncer.schedule(Instant::now(), interval),
        }
    }

    fn after_selection(&mut self) {
        // Moving the cursor changes which line shows raw syntax, so the
        // decoration set has to refresh before the next paint.
        self.debouncer.cancel();
        self.recompute();
    }

    fn insert(&mut self, text: &str) {
        let at = self.doc.selection().start;
        self.doc.apply(Cmd::InsertText {
            at,
            text: text.to_string(),
        });
        self.after_edit();
    }

    fn backspace(&mut self) {
        let at = self.doc.selection().start;
        if at == 0 {
            return;
        }
        let text = self.doc.text();
        let start = prev_boundary(&text, at);
        self.doc.apply(Cmd::DeleteRange { range: start..at });
        self.after_edit();
    }

    fn structural_key(&mut self, key: Key) -> bool {
        match handle_command(&mut self.doc, key) {
            Outcome::Handled(_) => {
                self.after_edit();
                true
            }
            Outcome::NotHandled => false,
        }
    }

    fn toggle_checkbox_at_cursor(&mut self) {
        let pos = line_at_offset(self.doc.rope(), self.doc.selection().start);
        let text = self
            .doc
            .rope()
            .slice_to_cow(pos.start..pos.text_end)
            .into_owned();
        if let Some(glyph) = classify(&text, pos.start).glyph
            && toggle_checkbox(&mut self.doc, glyph).is_some()
        {
            self.dirty = true;
            self.recompute();
        }
    }

    fn save(&mut self) {
        match std::fs::write(&self.path, self.doc.to_bytes()) {
            Ok(()) => {
                self.dirty = false;
                self.status = format!("Saved {}", self.path.display());
            }
            Err(e) => self.status = format!("Save failed: {e}"),
        }
    }

    fn move_cursor(&mut self, movement: Movement) {
        let text = self.doc.text();
        let at = self.doc.selection().start;
        let new = match movement {
            Movement::Left => prev_boundary(&text, at),
            Movement::Right => next_boundary(&text, at),
            Movement::Up => vertical_move(&text, at, -1),
            Movement::Down => vertical_move(&text, at, 1),
            Movement::Home => text[..at].rfind('\n').map(|i| i + 1).unwrap_or(0),
            Movement::End => text[at..].find('\n').map(|i| at + i).unwrap_or(text.len()),
        };
        if new != at {
            self.doc.set_selection(new..new);
            self.after_selection();
        }
    }
}

enum Movement {
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

fn prev_boundary(text: &str, at: usize) -> usize {
    text[..at]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_boundary(text: &str, at: usize) -> usize {
    text[at..]
        .chars()
        .next()
        .map(|c| at + c.len_utf8())
        .unwrap_or(at)
}

/// Moves one line up or down, keeping the character column where possible.
fn vertical_move(text: &str, at: usize, direction: isize) -> usize {
    let line_start = text[..at].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let col = text[line_start..at].chars().count();

    let target_start = if direction < 0 {
        if line_start == 0 {
            return at;
        }
        text[..line_start - 1].rfind('\n').map(|i| i + 1).unwrap_or(0)
    } else {
        match text[at..].find('\n') {
            Some(i) => at + i + 1,
            None => return at,
        }
    };

    let target_len = text[target_start..]
        .find('\n')
        .unwrap_or(text.len() - target_start);
    let target = &text[target_start..target_start + target_len];
    let offset: usize = target.chars().take(col).map(|c| c.len_utf8()).sum();
    target_start + offset
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <markdown-file>", args[0]);
        process::exit(1);
    }
    let path = PathBuf::from(&args[1]);

    let config = match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(path, config)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        // Wake up in time for the pending debounced recompute, if any.
        let timeout = app
            .debouncer
            .deadline()
            .map(|d| d.saturating_duration_since(Instant::now()))
            .unwrap_or(Duration::from_millis(250));

        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            match key.code {
                KeyCode::Char('q') if ctrl => return Ok(()),
                KeyCode::Char('s') if ctrl => app.save(),
                KeyCode::Char('t') if ctrl => app.toggle_checkbox_at_cursor(),
                KeyCode::Char(c) if !ctrl => app.insert(&c.to_string()),
                KeyCode::Enter => {
                    if !app.structural_key(Key::Enter) {
                        app.insert("\n");
                    }
                }
                KeyCode::Tab => {
                    if !app.structural_key(Key::Tab) {
                        app.insert("  ");
                    }
                }
                KeyCode::BackTab => {
                    let _ = app.structural_key(Key::ShiftTab);
                }
                KeyCode::Backspace => app.backspace(),
                KeyCode::Left => app.move_cursor(Movement::Left),
                KeyCode::Right => app.move_cursor(Movement::Right),
                KeyCode::Up => app.move_cursor(Movement::Up),
                KeyCode::Down => app.move_cursor(Movement::Down),
                KeyCode::Home => app.move_cursor(Movement::Home),
                KeyCode::End => app.move_cursor(Movement::End),
                _ => {}
            }
        }

        if app.debouncer.fire_if_due(Instant::now()) {
            app.recompute();
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let text = app.doc.text();
    let cursor = app.doc.selection().start;
    let cursor_row = text[..cursor].matches('\n').count();

    let inner_height = chunks[0].height.saturating_sub(2) as usize;
    let scroll = cursor_row.saturating_sub(inner_height.saturating_sub(1)) as u16;

    let mut lines = Vec::new();
    let mut offset = 0;
    for raw in text.split('\n') {
        lines.push(render_line(raw, offset, &app.decorations, app.render_widgets));
        offset += raw.len() + 1;
    }

    let title = format!(
        "{}{}",
        app.path.display(),
        if app.dirty { " [+]" } else { "" }
    );
    let editor = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title))
        .scroll((scroll, 0));
    f.render_widget(editor, chunks[0]);

    // The cursor's line always shows raw syntax, so byte-to-column mapping
    // is safe there: nothing on it is hidden or replaced.
    let line_start = text[..cursor].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let cursor_col = text[line_start..cursor].chars().count();
    f.set_cursor_position((
        chunks[0].x + 1 + cursor_col as u16,
        chunks[0].y + 1 + cursor_row as u16 - scroll,
    ));

    let help = if app.status.is_empty() {
        "Ctrl-S: Save | Ctrl-T: Toggle checkbox | Ctrl-Q: Quit".to_string()
    } else {
        app.status.clone()
    };
    f.render_widget(Paragraph::new(Line::from(help)), chunks[1]);
}

/// Renders one document line through its decorations: hidden spans are
/// skipped, marked spans styled, glyphs swapped for widgets.
fn render_line(
    raw: &str,
    base: usize,
    decorations: &[Decoration],
    render_widgets: bool,
) -> Line<'static> {
    let end = base + raw.len();

    let line_style = decorations
        .iter()
        .find(|d| d.is_line_style() && d.span.start == base)
        .map(|d| match d.action {
            DecorAction::LineStyle(tag) => style_for(tag),
            _ => Style::default(),
        })
        .unwrap_or_default();

    let mut spans = Vec::new();
    let mut cursor = base;
    for d in decorations
        .iter()
        .filter(|d| !d.is_line_style() && d.span.start >= base && d.span.end <= end)
    {
        if d.span.start > cursor {
            spans.push(Span::styled(
                raw[cursor - base..d.span.start - base].to_string(),
                line_style,
            ));
        }
        let slice = &raw[d.span.start - base..d.span.end - base];
        match d.action {
            DecorAction::Hide => {}
            DecorAction::Mark(tag) => {
                spans.push(Span::styled(slice.to_string(), line_style.patch(style_for(tag))));
            }
            DecorAction::ReplaceWithWidget(widget) => {
                if render_widgets {
                    spans.push(Span::styled(widget_glyph(widget).to_string(), line_style));
                } else {
                    spans.push(Span::styled(slice.to_string(), line_style));
                }
            }
            DecorAction::LineStyle(_) => {}
        }
        cursor = d.span.end;
    }
    if cursor < end {
        spans.push(Span::styled(raw[cursor - base..].to_string(), line_style));
    }

    Line::from(spans)
}

fn widget_glyph(widget: WidgetKind) -> &'static str {
    match widget {
        WidgetKind::Checkbox { checked: true } => "☑",
        WidgetKind::Checkbox { checked: false } => "☐",
        WidgetKind::Bullet => "•",
    }
}

fn style_for(tag: StyleTag) -> Style {
    match tag {
        StyleTag::Syntax => Style::default().fg(Color::DarkGray),
        StyleTag::Body | StyleTag::List { .. } => Style::default(),
        StyleTag::Heading(_) => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        StyleTag::Quote => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::ITALIC),
        StyleTag::Rule => Style::default().fg(Color::DarkGray),
        StyleTag::CodeBlock | StyleTag::Code => Style::default().fg(Color::Yellow),
        StyleTag::Table => Style::default().fg(Color::Magenta),
        StyleTag::Strong => Style::default().add_modifier(Modifier::BOLD),
        StyleTag::Emphasis => Style::default().add_modifier(Modifier::ITALIC),
        StyleTag::Strikethrough => Style::default().add_modifier(Modifier::CROSSED_OUT),
        StyleTag::Link => Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::UNDERLINED),
        StyleTag::Image => Style::default().fg(Color::Magenta),
    }
}
