use crossterm::event::{KeyCode, KeyEventKind, KeyModifiers};
use tracing::debug;

use crate::app::{App, Mode};
use crate::input::command::{Command, MenuChoice};
use crate::seating::SeatGrid;

/// What a front end should show after a command has run.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Reply {
    /// Outcome of a book or cancel request.
    Message { text: String, is_error: bool },
    /// The rendered seating chart.
    Chart(String),
    Exit,
}

impl Reply {
    fn success(text: String) -> Self {
        Reply::Message { text, is_error: false }
    }

    fn failure(text: String) -> Self {
        Reply::Message { text, is_error: true }
    }
}

/// Runs one command against the grid.
pub fn handle_command(grid: &mut SeatGrid, command: Command) -> Reply {
    debug!(?command, "dispatching command");

    match command {
        Command::Book { column, row } => match grid.book(column, row) {
            Ok(seat) => Reply::success(format!("Seat {} has been booked.", seat)),
            Err(e) => Reply::failure(format!("Error: {}", e)),
        },
        Command::Cancel { column, row } => match grid.cancel(column, row) {
            Ok(seat) => Reply::success(format!("Seat {} booking has been canceled.", seat)),
            Err(e) => Reply::failure(format!("Error: {}", e)),
        },
        Command::ShowChart => Reply::Chart(grid.render()),
        Command::Exit => Reply::Exit,
    }
}

/// Applies a key press to the full-screen app.
pub fn handle_key(app: &mut App, key_code: KeyCode, kind: KeyEventKind, modifiers: KeyModifiers) {
    if kind == KeyEventKind::Release {
        return;
    }

    if modifiers.contains(KeyModifiers::CONTROL) && key_code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    match app.mode {
        Mode::Menu => match key_code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                app.quit();
            }
            KeyCode::Char(c) => match c.to_digit(10) {
                Some(digit) => match MenuChoice::from_number(digit as i32) {
                    Some(choice) => app.choose(choice),
                    None => app.reject_choice(),
                },
                None => app.reject_input(),
            },
            _ => {}
        },
        Mode::SeatPrompt(_) => match key_code {
            KeyCode::Enter => {
                app.submit_seat();
            }
            KeyCode::Esc => {
                app.abort_prompt();
            }
            KeyCode::Backspace => {
                app.input.pop();
            }
            KeyCode::Char(c) if c.is_ascii_alphanumeric() => {
                app.input.push(c.to_ascii_uppercase());
            }
            _ => {}
        },
    }
}
