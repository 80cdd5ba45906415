//! TUI rendering with ratatui
//!
//! Visualizations for the Bulls and Cows solver interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{MAX_DIGIT, MIN_DIGIT};
use crate::output::formatters::{bulls_slots, feedback_badge};
use crate::secrets::SECRET_COUNT;
use crate::solver::Phase;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
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
    let header = Paragraph::new("🐂 BULLS AND COWS SOLVER - Interactive Mode")
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
        .constraints([
            Constraint::Percentage(45), // Current guess and knowledge
            Constraint::Percentage(55), // History
        ])
        .split(area);

    render_current_guess(f, app, chunks[0]);
    render_history(f, app, chunks[1]);
}

fn phase_color(phase: Phase) -> Color {
    match phase {
        Phase::Initial => Color::White,
        Phase::Exploring => Color::Yellow,
        Phase::Plateau => Color::Magenta,
        Phase::Solved => Color::Green,
        Phase::Aborted => Color::Red,
    }
}

fn render_current_guess(f: &mut Frame, app: &App, area: Rect) {
    let engine = &app.engine;
    let pool = engine.pool();

    // Digits still possible in bold, excluded ones dimmed
    let mut pool_spans = vec![Span::raw("Pool:      ")];
    for d in MIN_DIGIT..=MAX_DIGIT {
        let style = if pool.contains(d) {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        pool_spans.push(Span::styled(format!("{d} "), style));
    }

    let content = vec![
        Line::from(vec![
            Span::raw("Guess:     "),
            Span::styled(
                engine.submit_guess().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("Phase:     "),
            Span::styled(
                engine.phase().to_string(),
                Style::default().fg(phase_color(engine.phase())),
            ),
        ]),
        Line::from(format!("Bulls:     {}", bulls_slots(engine.bulls()))),
        Line::from(pool_spans),
        Line::from(format!(
            "Remaining: {} possible secrets",
            engine.candidates_remaining()
        )),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Current Guess ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let visible = usize::from(area.height.saturating_sub(2));

    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .enumerate()
        .rev()
        .take(visible)
        .map(|(i, entry)| {
            let learned = entry
                .inference
                .map(|inference| format!(" | {inference}"))
                .unwrap_or_default();
            let content = format!(
                "{:2}: {} {} {} → {}{}",
                i + 1,
                entry.guess,
                feedback_badge(entry.feedback),
                entry.candidates_before,
                entry.candidates_after,
                learned
            );
            ListItem::new(content).style(Style::default().fg(phase_color(entry.phase)))
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search space gauge
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_search_progress(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let remaining = app.engine.candidates_remaining();
    let eliminated = SECRET_COUNT.saturating_sub(remaining);
    let progress_pct = (eliminated * 100 / SECRET_COUNT) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Secrets Eliminated ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!("{eliminated}/{SECRET_COUNT} | {remaining} remain"));

    f.render_widget(gauge, area);
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
    let (title, content, color) = match app.input_mode {
        InputMode::WinCelebration => (
            " 🎉 SOLVED! 🎉 | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::GameOver => (
            " ❌ Inconsistent answers | 'u' to undo, 'n' for new game ",
            "",
            Color::Red,
        ),
        InputMode::Feedback => (
            " Enter Bulls and Cows (e.g. 21) | w: win | TAB: ask your own guess ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::ManualGuess => (
            " Enter Guess to Ask (4 digits) | ESC to cancel ",
            app.manual_guess.as_str(),
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(content)
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
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let turn_text = format!("Turn: {}", app.engine.turns() + 1);
    let turn = Paragraph::new(turn_text).alignment(Alignment::Center);
    f.render_widget(turn, chunks[0]);

    let stats_text = format!(
        "Games: {} | Won: {}",
        app.stats.total_games, app.stats.games_won
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let average_text = if app.stats.games_won > 0 {
        format!(
            "Avg turns: {:.1}",
            app.stats.total_turns as f64 / app.stats.games_won as f64
        )
    } else {
        "Avg turns: -".to_string()
    };
    let average = Paragraph::new(average_text).alignment(Alignment::Center);
    f.render_widget(average, chunks[2]);

    let help = Paragraph::new("q: Quit | n: New | u: Undo | Enter: Submit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
