use crate::config::AppConfig;
use crate::game::{Coordinate, PlacementSession, Verdict};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::Backend, Terminal};
use std::io;

/// Longest text the position field accepts. Longer than a valid token so
/// format errors can still be typed and reported.
const MAX_INPUT: usize = 4;

pub struct App {
    session: PlacementSession,
    config: AppConfig,
    input: String,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        App {
            session: PlacementSession::new(),
            config,
            input: String::new(),
            should_quit: false,
            message: None,
        }
    }

    pub fn session(&self) -> &PlacementSession {
        &self.session
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal.draw(|f| self.render(f)).map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.session.reset();
                self.input.clear();
                self.message = Some("Board cleared, enter the 1st queen.".to_string());
            }
            KeyCode::Char(c) => {
                if self.input.chars().count() < MAX_INPUT {
                    self.input.push(c.to_ascii_uppercase());
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => {
                self.confirm();
            }
            _ => {}
        }
    }

    /// Submit the typed position
    fn confirm(&mut self) {
        if self.session.is_complete() {
            self.message = Some("All queens placed. Ctrl-R to start again.".to_string());
            return;
        }

        let typed = self.input.trim();
        let token = if typed.is_empty() { None } else { Some(typed) };

        match self.session.submit(token) {
            Ok(coord) => {
                self.input.clear();
                self.message = Some(if self.session.is_complete() {
                    self.verdict_message()
                } else {
                    format!("Queen placed at {coord}.")
                });
            }
            Err(err) => {
                let reason = err
                    .position_error()
                    .map(|e| e.to_string())
                    .unwrap_or_else(|| err.to_string());
                self.message = Some(format!("ERROR: {reason}. Try again."));
            }
        }
    }

    fn verdict_message(&self) -> String {
        match self.session.verdict() {
            Ok(Verdict::Solved) => "Valid solution! No queen attacks another.".to_string(),
            Ok(Verdict::Attacked { first, second }) => {
                format!("Not a solution: {first} attacks {second}.")
            }
            Err(err) => err.to_string(),
        }
    }

    /// Queens involved in the reported attack, for highlighting
    fn conflict(&self) -> Vec<Coordinate> {
        match self.session.verdict() {
            Ok(Verdict::Attacked { first, second }) => vec![first, second],
            _ => Vec::new(),
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::entry_view::render(
            frame,
            &self.session,
            &self.config.display,
            &self.input,
            &self.conflict(),
            &self.message,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
