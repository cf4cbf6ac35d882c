//! TUI rendering with ratatui
//!
//! Layout for the constraint explorer.

use super::app::{App, InputMode, MessageStyle};
use crate::query::Constraint as QueryConstraint;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

const HISTOGRAM_BAR_WIDTH: usize = 16;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔎 WORDLE INDEX - Explorer")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(5)])
        .split(area);

    render_constraints(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
}

fn constraint_spans<'s>(constraints: &[QueryConstraint], color: Color) -> Vec<Span<'s>> {
    if constraints.is_empty() {
        return vec![Span::styled("none", Style::default().fg(Color::DarkGray))];
    }
    constraints
        .iter()
        .map(|c| {
            Span::styled(
                format!("{} ", c.to_string().to_uppercase()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        })
        .collect()
}

fn render_constraints(f: &mut Frame, app: &App, area: Rect) {
    let mut required = vec![Span::raw("Required: ")];
    required.extend(constraint_spans(&app.present, Color::Green));
    let mut excluded = vec![Span::raw("Excluded: ")];
    excluded.extend(constraint_spans(&app.absent, Color::Red));

    let paragraph = Paragraph::new(vec![Line::from(required), Line::from(excluded)]).block(
        Block::default()
            .title(" Constraints ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let outcome = &app.outcome;

    let content: Vec<Line> = if outcome.count == 0 {
        vec![Line::from(Span::styled(
            "No words match",
            Style::default().fg(Color::Red),
        ))]
    } else {
        outcome
            .words
            .iter()
            .map(|row| {
                let mut spans = vec![
                    Span::raw("  "),
                    Span::styled(
                        format!("{:<6}", row.word.to_uppercase()),
                        Style::default().fg(Color::Yellow),
                    ),
                ];
                if let Some(score) = row.score {
                    spans.push(Span::styled(
                        format!(" {score}"),
                        Style::default().fg(Color::Cyan),
                    ));
                }
                Line::from(spans)
            })
            .collect()
    };

    let title = if outcome.words.len() < outcome.count {
        format!(" Candidates (top {} of {}) ", outcome.words.len(), outcome.count)
    } else {
        format!(" Candidates ({}) ", outcome.count)
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search space gauge
            Constraint::Min(6), // Histogram
            Constraint::Length(7), // Messages
        ])
        .split(area);

    render_search_space(f, app, chunks[0]);
    render_histogram(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_search_space(f: &mut Frame, app: &App, area: Rect) {
    let total = app.index.len();
    let remaining = app.candidates_count();
    let ratio = if total == 0 {
        0.0
    } else {
        remaining as f64 / total as f64
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Search Space ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{remaining}/{total} words"));

    f.render_widget(gauge, area);
}

fn render_histogram(f: &mut Frame, app: &App, area: Rect) {
    let histogram = app.outcome.histogram.as_deref().unwrap_or_default();
    let largest = histogram.first().map_or(0, |entry| entry.count);

    let items: Vec<ListItem> = histogram
        .iter()
        .map(|entry| {
            let bar = crate::output::formatters::histogram_bar(entry, largest, HISTOGRAM_BAR_WIDTH);
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", entry.letter.to_char().to_ascii_uppercase()),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(bar, Style::default().fg(Color::Green)),
                Span::raw(format!(" {}", entry.count)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Letter Frequencies ")
            .borders(Borders::ALL),
    );
    f.render_widget(list, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::Require => (
            " Require letters (a = anywhere, a0-a4 = slot) | TAB to exclude ",
            Color::Green,
        ),
        InputMode::Exclude => (
            " Exclude letters (a = anywhere, a0-a4 = slot) | TAB to require ",
            Color::Red,
        ),
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help = format!(
        "Enter: Apply | Ctrl+U: Undo ({}) | Ctrl+N: Clear | Esc: Quit",
        app.undo_stack.len()
    );
    let status = Paragraph::new(help)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
