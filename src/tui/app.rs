// src/tui/app.rs — Chat view state, event loop, and rendering.

use std::io;
use std::sync::Arc;

use crossterm::{
    event::{
        KeyCode, KeyEvent, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use crate::client::{AnswerService, AskRequest, AskResponse};
use crate::infra::config::Config;
use crate::infra::errors::HaqooqError;
use crate::infra::prefs::Prefs;
use crate::landing;
use crate::session::Session;

use super::event::{Event, EventHandler};
use super::theme::Theme;
use super::widgets;

/// Lines moved per PageUp/PageDown.
const PAGE: u16 = 5;

/// What the loop should do after a key press.
#[derive(Debug, PartialEq)]
pub enum Action {
    None,
    Quit,
    Send(AskRequest),
}

// ── App state ────────────────────────────────────────────────────

pub struct App {
    pub session: Session,
    pub draft: String,
    pub show_disclaimer: bool,
    /// Lines scrolled up from the newest turn. Reset on every append.
    pub scroll_back: u16,
    /// Largest useful `scroll_back` as of the last frame.
    max_scroll_back: u16,
    tick: usize,
    endpoint: String,
    examples: Vec<String>,
    show_timestamps: bool,
    prefs: Prefs,
}

impl App {
    pub fn new(endpoint: &str, config: &Config, prefs: Prefs) -> Self {
        Self {
            session: Session::new(),
            draft: String::new(),
            show_disclaimer: landing::disclaimer_pending(&prefs),
            scroll_back: 0,
            max_scroll_back: 0,
            tick: 0,
            endpoint: endpoint.to_string(),
            examples: config.ui.example_questions.clone(),
            show_timestamps: config.ui.show_timestamps,
            prefs,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key.code == KeyCode::Char('c') {
            return Action::Quit;
        }
        if self.show_disclaimer
            && (key.code == KeyCode::Esc || (ctrl && key.code == KeyCode::Char('d')))
        {
            self.dismiss_disclaimer();
            return Action::None;
        }

        match key.code {
            KeyCode::Esc => return Action::Quit,
            KeyCode::PageUp => {
                self.scroll_back = self
                    .scroll_back
                    .saturating_add(PAGE)
                    .min(self.max_scroll_back);
                return Action::None;
            }
            KeyCode::PageDown => {
                self.scroll_back = self.scroll_back.saturating_sub(PAGE);
                return Action::None;
            }
            _ => {}
        }

        // Input is disabled while a request is outstanding.
        if self.session.is_pending() {
            return Action::None;
        }

        match key.code {
            KeyCode::Enter
                if key
                    .modifiers
                    .intersects(KeyModifiers::SHIFT | KeyModifiers::ALT) =>
            {
                self.draft.push('\n');
            }
            KeyCode::Enter => return self.submit(),
            KeyCode::Char('j') if ctrl => self.draft.push('\n'),
            KeyCode::Char('u') if ctrl => self.draft.clear(),
            KeyCode::Char(c) if !ctrl => {
                if self.draft.is_empty() && self.session.turns().is_empty() && c.is_ascii_digit() {
                    if let Some(q) = landing::example_question(&self.examples, c) {
                        self.draft = q.to_string();
                        return Action::None;
                    }
                }
                self.draft.push(c);
            }
            KeyCode::Backspace => {
                self.draft.pop();
            }
            _ => {}
        }
        Action::None
    }

    /// Send action: accepted drafts are cleared and the view snaps to bottom.
    pub fn submit(&mut self) -> Action {
        match self.session.submit(&self.draft) {
            Some(request) => {
                self.draft.clear();
                self.scroll_back = 0;
                Action::Send(request)
            }
            None => Action::None,
        }
    }

    pub fn on_answer(&mut self, outcome: Result<AskResponse, HaqooqError>) {
        if self.session.resolve(outcome).is_some() {
            self.scroll_back = 0;
        }
    }

    pub fn on_tick(&mut self) {
        if self.session.is_pending() {
            self.tick = self.tick.wrapping_add(1);
        }
    }

    fn dismiss_disclaimer(&mut self) {
        self.show_disclaimer = false;
        landing::dismiss_disclaimer(&self.prefs);
    }
}

// ── Public entry point ───────────────────────────────────────────

/// Launch the full-screen chat view. Blocks until the user quits (Esc / Ctrl-C).
pub async fn run_chat_view(
    service: Arc<dyn AnswerService>,
    config: &Config,
    prefs: Prefs,
) -> anyhow::Result<()> {
    let mut app = App::new(service.endpoint(), config, prefs);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    // Needed for the terminal to report Shift+Enter distinctly from Enter.
    let enhanced = supports_keyboard_enhancement().unwrap_or(false);
    if enhanced {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut events = EventHandler::new();
    let result = run_event_loop(&mut terminal, &mut app, &mut events, service).await;

    // Restore terminal
    if enhanced {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
    service: Arc<dyn AnswerService>,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        match events.next().await? {
            Event::Tick => app.on_tick(),
            Event::Resize => {}
            Event::Closed => return Ok(()),
            Event::Answer(outcome) => app.on_answer(outcome),
            Event::Key(key) => match app.handle_key(key) {
                Action::Quit => return Ok(()),
                Action::Send(request) => spawn_request(service.clone(), request, events.sender()),
                Action::None => {}
            },
        }
    }
}

/// One task per accepted submit; it reports back exactly once.
fn spawn_request(
    service: Arc<dyn AnswerService>,
    request: AskRequest,
    sender: mpsc::UnboundedSender<Event>,
) {
    tokio::spawn(async move {
        let outcome = service.ask(request).await;
        let _ = sender.send(Event::Answer(outcome));
    });
}

// ── Rendering ────────────────────────────────────────────────────

pub fn render(f: &mut Frame, app: &mut App) {
    let banner = if app.show_disclaimer {
        widgets::banner::HEIGHT
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                      // Header
            Constraint::Length(banner),                 // Disclaimer
            Constraint::Min(5),                         // Transcript
            Constraint::Length(widgets::input::HEIGHT), // Draft
            Constraint::Length(1),                      // Key hints
        ])
        .split(f.area());

    render_header(f, chunks[0], app);
    if app.show_disclaimer {
        widgets::banner::render(f, chunks[1]);
    }
    app.max_scroll_back = if app.session.turns().is_empty() && !app.session.is_pending() {
        widgets::welcome::render(f, chunks[2], &app.examples);
        0
    } else {
        widgets::transcript::render(
            f,
            chunks[2],
            &app.session,
            app.show_timestamps,
            app.tick,
            app.scroll_back,
        )
    };
    // A resize or a shorter transcript can leave the offset out of range.
    app.scroll_back = app.scroll_back.min(app.max_scroll_back);

    widgets::input::render(f, chunks[3], &app.draft, app.session.is_pending());
    render_footer(f, chunks[4], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let status = if app.session.is_pending() {
        Span::styled("\u{25cc} Thinking", Theme::thinking())
    } else {
        Span::styled("\u{25cf} Online", Theme::online())
    };

    let line = Line::from(vec![
        Span::styled(" Ask me anything about women's rights in Pakistan  ", Theme::text_dim()),
        status,
        Span::styled(format!("  {}", app.endpoint), Theme::text_dim()),
    ]);

    let p = Paragraph::new(line).block(
        Block::default()
            .title(Span::styled(" \u{2696} Legal Assistant ", Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border()),
    );
    f.render_widget(p, area);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let send = if app.session.can_submit(&app.draft) {
        Theme::key_hint()
    } else {
        Theme::text_dim()
    };
    let hints = Line::from(vec![
        Span::styled(" Enter", send),
        Span::styled(" send  ", Theme::key_desc()),
        Span::styled("Shift+Enter", Theme::key_hint()),
        Span::styled(" newline  ", Theme::key_desc()),
        Span::styled("PgUp/PgDn", Theme::key_hint()),
        Span::styled(" scroll  ", Theme::key_desc()),
        Span::styled("Ctrl-C", Theme::key_hint()),
        Span::styled(" quit", Theme::key_desc()),
    ]);
    f.render_widget(Paragraph::new(hints), area);
}
