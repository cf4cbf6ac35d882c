//! TUI application state and logic

use crate::commands::{QueryOptions, QueryOutcome, run_query};
use crate::index::PositionalIndex;
use crate::query::{Constraint, Query, parse_constraints};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Rows kept for the candidate panel
const VISIBLE_CANDIDATES: usize = 40;
const MAX_MESSAGES: usize = 5;
const MAX_UNDO: usize = 50;

/// State snapshot for undo functionality
#[derive(Debug, Clone)]
pub struct StateSnapshot {
    pub present: Vec<Constraint>,
    pub absent: Vec<Constraint>,
}

/// Application state
pub struct App<'a> {
    pub index: &'a PositionalIndex,
    pub present: Vec<Constraint>,
    pub absent: Vec<Constraint>,
    pub outcome: QueryOutcome,
    pub input_buffer: String,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    pub undo_stack: Vec<StateSnapshot>,
}

/// Which side of the query typed tokens go to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Require,
    Exclude,
}

impl InputMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Require => Self::Exclude,
            Self::Exclude => Self::Require,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(index: &'a PositionalIndex) -> Self {
        let mut app = Self {
            index,
            present: Vec::new(),
            absent: Vec::new(),
            outcome: run_query(index, &Query::new(), &Self::options()),
            input_buffer: String::new(),
            input_mode: InputMode::Require,
            messages: Vec::new(),
            should_quit: false,
            undo_stack: Vec::new(),
        };
        app.add_message(
            &format!("Loaded {} words. Type constraints like 'a' or 'a1'.", index.len()),
            MessageStyle::Info,
        );
        app.add_message("TAB switches between required and excluded", MessageStyle::Info);
        app
    }

    const fn options() -> QueryOptions {
        QueryOptions {
            limit: Some(VISIBLE_CANDIDATES),
            rank: true,
            histogram: true,
        }
    }

    /// The query described by the current constraint lists
    #[must_use]
    pub fn query(&self) -> Query {
        Query::from_parts(self.present.clone(), self.absent.clone())
    }

    /// Total number of words matching the current query
    #[must_use]
    pub const fn candidates_count(&self) -> usize {
        self.outcome.count
    }

    fn refresh(&mut self) {
        let query = self.query();
        self.outcome = run_query(self.index, &query, &Self::options());
        debug!(%query, matches = self.outcome.count, "refreshed candidates");
    }

    fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            present: self.present.clone(),
            absent: self.absent.clone(),
        }
    }

    /// Record `snapshot`, dropping the oldest entry once the stack is full
    fn push_undo(&mut self, snapshot: StateSnapshot) {
        self.undo_stack.push(snapshot);
        if self.undo_stack.len() > MAX_UNDO {
            self.undo_stack.remove(0);
        }
    }

    /// Parse `input` and add its constraints to the side chosen by the input mode
    pub fn submit(&mut self, input: &str) {
        let constraints = match parse_constraints(input) {
            Ok(constraints) => constraints,
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };
        if constraints.is_empty() {
            self.add_message("Nothing to add", MessageStyle::Error);
            return;
        }

        let snapshot = self.snapshot();
        let target = match self.input_mode {
            InputMode::Require => &mut self.present,
            InputMode::Exclude => &mut self.absent,
        };
        let mut added = 0;
        for constraint in constraints {
            if !target.contains(&constraint) {
                target.push(constraint);
                added += 1;
            }
        }

        self.input_buffer.clear();
        if added == 0 {
            self.add_message("Constraints already applied", MessageStyle::Info);
            return;
        }

        self.push_undo(snapshot);
        self.refresh();
        let count = self.candidates_count();
        if count == 0 {
            self.add_message(
                "No words match. Press Ctrl+U to undo.",
                MessageStyle::Error,
            );
        } else {
            self.add_message(&format!("{count} candidates remaining"), MessageStyle::Success);
        }
    }

    pub fn toggle_mode(&mut self) {
        self.input_mode = self.input_mode.toggled();
    }

    pub fn undo_last(&mut self) {
        if let Some(snapshot) = self.undo_stack.pop() {
            self.present = snapshot.present;
            self.absent = snapshot.absent;
            self.refresh();
            self.add_message("Undone!", MessageStyle::Info);
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    /// Drop every constraint; the previous state stays on the undo stack
    pub fn clear(&mut self) {
        if self.present.is_empty() && self.absent.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        self.push_undo(snapshot);
        self.present.clear();
        self.absent.clear();
        self.input_buffer.clear();
        self.refresh();
        self.add_message("Cleared all constraints", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('u') if ctrl => self.undo_last(),
            KeyCode::Char('n') if ctrl => self.clear(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.toggle_mode(),
            KeyCode::Char(c) => self.input_buffer.push(c.to_ascii_lowercase()),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => {
                let input = std::mem::take(&mut self.input_buffer);
                self.submit(&input);
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
