//! Interactive TUI shell around the search-bar widget. Presentation only:
//! all widget behavior lives in `SearchBarState`; this layer renders
//! snapshots and translates key events.

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Instant;

use arboard::Clipboard;

use crate::{
    mode::ModeConfig,
    provider::CandidateProvider,
    search_bar::{SearchBarState, SearchResults, SearchSnapshot},
    types::{HighlightSpan, MatchResult},
};

/// Clipboard copy failures surfaced on the status line.
#[derive(Debug, thiserror::Error)]
pub enum CopyError {
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error("clipboard error: {0}")]
    Clipboard(String),
}

pub struct TuiApp<P: CandidateProvider> {
    pub bar: SearchBarState<P>,
    pub selected_index: usize,
    pub should_quit: bool,
    pub show_help: bool,
    pub status_message: String,
    /// Copyable text per rendered row; `None` marks section headers.
    copy_targets: Vec<Option<String>>,
}

impl<P: CandidateProvider> TuiApp<P> {
    pub fn new(provider: P, config: ModeConfig) -> Self {
        let mut bar = SearchBarState::with_config(provider, config);
        bar.focus();
        Self {
            bar,
            selected_index: 0,
            should_quit: false,
            show_help: false,
            status_message: "Ready".to_string(),
            copy_targets: Vec::new(),
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.show_help {
            self.show_help = false;
            return;
        }

        match key.code {
            KeyCode::Esc => {
                if self.bar.is_open() && !self.bar.query().is_empty() {
                    self.bar.close();
                    self.bar.focus();
                    self.selected_index = 0;
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::F(1) => {
                self.show_help = true;
            }
            KeyCode::Tab => {
                self.bar.toggle_mode(now);
            }
            KeyCode::Up => self.move_up(),
            KeyCode::Down => self.move_down(),
            KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => self.move_up(),
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => self.move_down(),
            KeyCode::Enter => {
                self.bar.submit(now);
                self.copy_current_result();
            }
            KeyCode::Char(c) => {
                self.bar.type_char(c, now);
                self.selected_index = 0;
            }
            KeyCode::Backspace => {
                self.bar.backspace(now);
                self.selected_index = 0;
            }
            _ => {}
        }
    }

    fn move_up(&mut self) {
        let mut index = self.selected_index;
        while index > 0 {
            index -= 1;
            if self.is_selectable(index) {
                self.selected_index = index;
                return;
            }
        }
    }

    fn move_down(&mut self) {
        let mut index = self.selected_index;
        while index + 1 < self.copy_targets.len() {
            index += 1;
            if self.is_selectable(index) {
                self.selected_index = index;
                return;
            }
        }
    }

    fn is_selectable(&self, index: usize) -> bool {
        self.copy_targets
            .get(index)
            .map(|target| target.is_some())
            .unwrap_or(false)
    }

    fn copy_current_result(&mut self) {
        let Some(Some(text)) = self.copy_targets.get(self.selected_index).cloned() else {
            return;
        };

        match copy_to_clipboard(&text) {
            Ok(()) => {
                self.status_message = format!("📋 Copied: {}", text);
            }
            Err(err) => {
                self.status_message = format!("❌ {}", err);
            }
        }
    }

    pub fn render(&mut self, f: &mut Frame, now: Instant) {
        let snapshot = self.bar.evaluate(now);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search box
                Constraint::Min(1),    // Results
                Constraint::Length(3), // Status/help
            ])
            .split(f.size());

        self.render_search_box(f, chunks[0], &snapshot);
        self.render_results(f, chunks[1], &snapshot);
        self.render_status(f, chunks[2]);

        if self.show_help {
            self.render_help_popup(f);
        }
    }

    fn render_search_box(&self, f: &mut Frame, area: Rect, snapshot: &SearchSnapshot) {
        let (title, title_style) = match &snapshot.notification {
            Some(notification) => (
                format!("💡 {}", notification.text),
                Style::default().fg(Color::Yellow),
            ),
            None => (
                format!("{} {} mode", snapshot.mode.icon(), snapshot.mode.name()),
                Style::default().fg(Color::Blue),
            ),
        };

        let input_span = if self.bar.query().is_empty() {
            Span::styled(
                snapshot.mode.placeholder(),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )
        } else {
            Span::raw(self.bar.query().to_string())
        };

        let search_text = Text::from(vec![Line::from(vec![
            Span::styled("Search: ", Style::default().fg(Color::Cyan)),
            input_span,
            Span::styled("_", Style::default().fg(Color::Yellow)), // Cursor
        ])]);

        let search_box = Paragraph::new(search_text).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(title_style),
        );

        f.render_widget(search_box, area);
    }

    fn render_results(&mut self, f: &mut Frame, area: Rect, snapshot: &SearchSnapshot) {
        self.copy_targets.clear();
        let mut items: Vec<ListItem> = Vec::new();

        let title = match &snapshot.results {
            SearchResults::AiEcho { prompt } => {
                items.push(ListItem::new(Line::from(vec![
                    Span::raw("✨ "),
                    Span::styled(
                        prompt.clone(),
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    ),
                ])));
                self.copy_targets.push(Some(prompt.clone()));
                "Ask AI".to_string()
            }
            SearchResults::Matches(matches) => {
                for result in matches {
                    items.push(self.match_item(result));
                    self.copy_targets.push(Some(result.candidate.label.clone()));
                }
                format!("Results: {}", matches.len())
            }
            SearchResults::Defaults {
                suggestions,
                recent,
            } => {
                items.push(section_header("Suggestions"));
                self.copy_targets.push(None);
                for suggestion in suggestions {
                    items.push(ListItem::new(Line::from(format!("  ✨ {}", suggestion))));
                    self.copy_targets.push(Some(suggestion.clone()));
                }
                items.push(section_header("Recent"));
                self.copy_targets.push(None);
                for item in recent {
                    items.push(ListItem::new(Line::from(format!("  🕘 {}", item))));
                    self.copy_targets.push(Some(item.clone()));
                }
                "Jump back in".to_string()
            }
        };

        // Keep the selection on a selectable row after the list changed.
        if !self.is_selectable(self.selected_index) {
            self.selected_index = self
                .copy_targets
                .iter()
                .position(|target| target.is_some())
                .unwrap_or(0);
        }

        let results_list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(Style::default().fg(Color::Green)),
            )
            .highlight_style(Style::default().bg(Color::DarkGray));

        let mut list_state = ListState::default();
        list_state.select(Some(self.selected_index));

        f.render_stateful_widget(results_list, area, &mut list_state);
    }

    fn match_item(&self, result: &MatchResult) -> ListItem<'static> {
        let base = Style::default().fg(Color::White);
        let highlight = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        let dim = Style::default().fg(Color::Gray);

        let mut spans = vec![Span::raw(format!("{} ", result.candidate.kind.icon()))];

        match result.field {
            crate::types::HighlightField::Label => {
                spans.extend(highlighted_spans(
                    &result.candidate.label,
                    &result.spans,
                    base,
                    highlight,
                ));
                if let Some(secondary) = &result.candidate.secondary_text {
                    spans.push(Span::styled(format!("  {}", secondary), dim));
                }
            }
            crate::types::HighlightField::Secondary => {
                spans.push(Span::styled(result.candidate.label.clone(), base));
                spans.push(Span::raw("  "));
                spans.extend(highlighted_spans(
                    result.matched_text(),
                    &result.spans,
                    dim,
                    highlight,
                ));
            }
        }

        ListItem::new(Line::from(spans))
    }

    fn render_status(&self, f: &mut Frame, area: Rect) {
        let status_text = Text::from(vec![
            Line::from(vec![
                Span::styled("Status: ", Style::default().fg(Color::Cyan)),
                Span::raw(self.status_message.clone()),
            ]),
            Line::from(vec![
                Span::styled("Keys: ", Style::default().fg(Color::Yellow)),
                Span::raw("↑/↓/C-p/C-n Navigate • Tab Toggle mode • Enter Copy • F1 Help • Esc/C-c Quit"),
            ]),
        ]);

        let status_box = Paragraph::new(status_text).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Status")
                .border_style(Style::default().fg(Color::Magenta)),
        );

        f.render_widget(status_box, area);
    }

    fn render_help_popup(&self, f: &mut Frame) {
        let popup_area = centered_rect(60, 70, f.size());

        let help_text = Text::from(vec![
            Line::from("omnibar - Help"),
            Line::from(""),
            Line::from("Modes:"),
            Line::from("  💬 AI Q&A - free-text questions and instructions"),
            Line::from("  🔍 Traditional - keyword typeahead over channels,"),
            Line::from("     people, messages and files"),
            Line::from(""),
            Line::from("The mode follows what you type: questions and"),
            Line::from("commands switch to AI Q&A, plain keywords switch"),
            Line::from("back. Tab overrides the detector for the current"),
            Line::from("query."),
            Line::from(""),
            Line::from("Navigation:"),
            Line::from("  ↑/↓ or Ctrl+P/Ctrl+N - Move selection"),
            Line::from("  Enter - Copy selected entry to clipboard"),
            Line::from("  Tab - Toggle AI/Traditional mode"),
            Line::from("  Esc - Clear query, then quit"),
            Line::from("  F1 - Toggle this help"),
            Line::from(""),
            Line::from("Press any key to close help"),
        ]);

        let help_popup = Paragraph::new(help_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Help")
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .style(Style::default().bg(Color::Black));

        f.render_widget(Clear, popup_area);
        f.render_widget(help_popup, popup_area);
    }
}

fn section_header(text: &str) -> ListItem<'static> {
    ListItem::new(Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )))
}

/// Split `text` into styled spans around the highlight offsets. Spans are
/// sorted, non-overlapping and within bounds, so plain slicing is safe.
fn highlighted_spans(
    text: &str,
    spans: &[HighlightSpan],
    base: Style,
    highlight: Style,
) -> Vec<Span<'static>> {
    let mut out = Vec::new();
    let mut cursor = 0;
    for span in spans {
        if span.start > cursor {
            out.push(Span::styled(text[cursor..span.start].to_string(), base));
        }
        out.push(Span::styled(text[span.start..span.end].to_string(), highlight));
        cursor = span.end;
    }
    if cursor < text.len() {
        out.push(Span::styled(text[cursor..].to_string(), base));
    }
    out
}

/// Copy text to the system clipboard, temporarily leaving raw mode so the
/// clipboard provider sees a normal terminal.
fn copy_to_clipboard(text: &str) -> Result<(), CopyError> {
    disable_raw_mode()?;

    let result = Clipboard::new()
        .and_then(|mut clipboard| clipboard.set_text(text))
        .map_err(|e| CopyError::Clipboard(e.to_string()));

    enable_raw_mode()?;
    result
}

// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Run the interactive shell until the user quits.
pub async fn run_tui<P: CandidateProvider>(provider: P, config: ModeConfig) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = TuiApp::new(provider, config);

    // Main loop
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend, P: CandidateProvider>(
    terminal: &mut Terminal<B>,
    app: &mut TuiApp<P>,
) -> anyhow::Result<()> {
    loop {
        let now = Instant::now();
        app.bar.tick(now);
        terminal.draw(|f| app.render(f, now))?;

        if app.should_quit {
            break;
        }

        if event::poll(std::time::Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key_event(key, Instant::now());
            }
        }
    }

    Ok(())
}
