//! TUI application state and logic

use crate::commands::{new_engine, replay_session};
use crate::core::{Feedback, Guess};
use crate::solver::{Engine, Inference, Phase, Turn, TurnOutcome};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub engine: Engine,
    pub seed: u64,
    pub first_guess: Option<Guess>,
    pub history: Vec<HistoryEntry>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub manual_guess: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Feedback,
    ManualGuess,
    WinCelebration,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub guess: Guess,
    pub feedback: Feedback,
    pub phase: Phase,
    pub inference: Option<Inference>,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub total_turns: usize,
}

impl App {
    #[must_use]
    pub fn new(seed: Option<u64>, first_guess: Option<Guess>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);

        Self {
            engine: new_engine(seed, first_guess),
            seed,
            first_guess,
            history: Vec::new(),
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Think of four different digits 1-9. I'll find them.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type bulls then cows (e.g. '21') and press Enter".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Feedback,
            manual_guess: String::new(),
        }
    }

    pub fn handle_feedback(&mut self, input: &str) {
        let feedback: Feedback = match input.trim() {
            "w" | "win" => Feedback::SOLVED,
            other => match other.parse() {
                Ok(feedback) => feedback,
                Err(e) => {
                    self.add_message(&e.to_string(), MessageStyle::Error);
                    return;
                }
            },
        };

        let guess = self.engine.submit_guess();
        let candidates_before = self.engine.candidates_remaining();

        match self.engine.record(feedback) {
            Ok(outcome) => {
                self.history.push(HistoryEntry {
                    guess,
                    feedback,
                    phase: self.engine.phase(),
                    inference: self.engine.last_inference(),
                    candidates_before,
                    candidates_after: self.engine.candidates_remaining(),
                });

                match outcome {
                    TurnOutcome::Solved(secret) => self.celebrate(secret),
                    TurnOutcome::Continue(_) => {
                        if let Some(inference) = self.engine.last_inference() {
                            self.add_message(&inference.to_string(), MessageStyle::Info);
                        }
                    }
                }
            }
            Err(e) if e.is_fatal() => {
                self.history.push(HistoryEntry {
                    guess,
                    feedback,
                    phase: Phase::Aborted,
                    inference: None,
                    candidates_before,
                    candidates_after: 0,
                });
                self.stats.total_games += 1;
                self.input_mode = InputMode::GameOver;
                self.add_message(&e.to_string(), MessageStyle::Error);
                self.add_message("Press 'u' to undo the last answer.", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }

        self.input_buffer.clear();
    }

    fn celebrate(&mut self, secret: Guess) {
        let turns = self.engine.turns();
        self.stats.games_won += 1;
        self.stats.total_games += 1;
        self.stats.total_turns += turns;

        self.input_mode = InputMode::WinCelebration;

        let celebration = match turns {
            1 => "🎯 FIRST TRY! Extraordinary! 🌟",
            2..=5 => "🔥 MAGNIFICENT! 🔥",
            6..=8 => "✨ SPLENDID! ✨",
            9..=12 => "👏 GREAT JOB! 👏",
            _ => "🎊 SOLVED! 🎊",
        };

        self.add_message(celebration, MessageStyle::Success);
        self.add_message(
            &format!("Your secret is {secret}, found in {turns} guesses"),
            MessageStyle::Success,
        );
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        self.seed = rand::random();
        self.engine = new_engine(self.seed, self.first_guess);
        self.history.clear();
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Feedback;
        self.add_message("New game started! Think of a secret.", MessageStyle::Info);
    }

    pub fn undo_last(&mut self) {
        let turns: Vec<Turn> = self.engine.turns_iter().collect();
        let Some((_, kept)) = turns.split_last() else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
            return;
        };

        match replay_session(self.seed, self.first_guess, kept) {
            Ok(engine) => {
                if self.input_mode == InputMode::GameOver {
                    self.stats.total_games = self.stats.total_games.saturating_sub(1);
                }
                self.engine = engine;
                self.history.truncate(kept.len());
                self.input_mode = InputMode::Feedback;
                self.add_message("Undone!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&format!("Cannot undo: {e}"), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    pub fn use_manual_guess(&mut self) {
        let input = self.manual_guess.clone();

        let guess: Guess = match input.parse() {
            Ok(guess) => guess,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        match self.engine.override_guess(guess) {
            Ok(()) => {
                self.add_message(&format!("Asking {guess} instead"), MessageStyle::Success);
                self.input_mode = InputMode::Feedback;
                self.manual_guess.clear();
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
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

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if let KeyCode::Char('c') = key.code
                && key.modifiers.contains(KeyModifiers::CONTROL)
            {
                app.should_quit = true;
            }

            match app.input_mode {
                InputMode::WinCelebration | InputMode::GameOver => match key.code {
                    KeyCode::Char('q') => app.should_quit = true,
                    KeyCode::Char('n') => app.new_game(),
                    KeyCode::Char('u') => app.undo_last(),
                    _ => {}
                },
                InputMode::Feedback => match key.code {
                    KeyCode::Char('q') => app.should_quit = true,
                    KeyCode::Char('n') => app.new_game(),
                    KeyCode::Char('u') => app.undo_last(),
                    KeyCode::Char('w') => app.handle_feedback("win"),
                    KeyCode::Tab => {
                        app.input_mode = InputMode::ManualGuess;
                        app.add_message("Enter a guess to ask (4 digits)", MessageStyle::Info);
                    }
                    KeyCode::Char(c) if c.is_ascii_digit() || c == ' ' => {
                        app.input_buffer.push(c);
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => {
                        let input = app.input_buffer.clone();
                        app.handle_feedback(&input);
                    }
                    _ => {}
                },
                InputMode::ManualGuess => match key.code {
                    KeyCode::Esc | KeyCode::Tab => {
                        app.input_mode = InputMode::Feedback;
                        app.manual_guess.clear();
                    }
                    KeyCode::Char(c) if c.is_ascii_digit() && app.manual_guess.len() < 4 => {
                        app.manual_guess.push(c);
                    }
                    KeyCode::Backspace => {
                        app.manual_guess.pop();
                    }
                    KeyCode::Enter => app.use_manual_guess(),
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
