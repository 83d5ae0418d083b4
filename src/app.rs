//! State of the full-screen front end.

use tracing::info;

use crate::constants::{COLUMNS, ROWS};
use crate::input::command::{parse_seat_code, Command, MenuChoice};
use crate::input::handler::{handle_command, Reply};
use crate::seating::SeatGrid;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mode {
    Menu,
    /// Collecting a seat code for a book or cancel choice.
    SeatPrompt(MenuChoice),
}

/// Last message shown under the chart.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Status {
    pub text: String,
    pub is_error: bool,
}

impl Status {
    fn info(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_error: false }
    }

    fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_error: true }
    }
}

pub struct App {
    pub grid: SeatGrid,
    pub mode: Mode,
    pub input: String,
    pub status: Option<Status>,
    pub should_quit: bool,
}

impl App {
    pub fn new(grid: SeatGrid) -> Self {
        Self {
            grid,
            mode: Mode::Menu,
            input: String::new(),
            status: None,
            should_quit: false,
        }
    }

    pub fn choose(&mut self, choice: MenuChoice) {
        match choice {
            MenuChoice::Book | MenuChoice::Cancel => {
                self.mode = Mode::SeatPrompt(choice);
                self.input.clear();
            }
            MenuChoice::ShowChart => self.apply(Command::ShowChart),
            MenuChoice::Exit => self.apply(Command::Exit),
        }
    }

    /// A menu number outside 1-4.
    pub fn reject_choice(&mut self) {
        self.status = Some(Status::error("Invalid choice. Please select a valid option."));
    }

    /// A menu key that is not a number at all.
    pub fn reject_input(&mut self) {
        self.status = Some(Status::error("Invalid input. Please enter a number between 1 and 4."));
    }

    pub fn submit_seat(&mut self) {
        let Mode::SeatPrompt(choice) = self.mode else {
            return;
        };

        match parse_seat_code(&self.input) {
            Some((column, row)) => self.apply(choice.into_command(column, row)),
            None => {
                self.status = Some(Status::error(format!(
                    "Error: '{}' is not a seat. Enter a column (A-L) and a row (1-30), e.g. C12.",
                    self.input
                )));
            }
        }

        self.mode = Mode::Menu;
        self.input.clear();
    }

    pub fn abort_prompt(&mut self) {
        self.mode = Mode::Menu;
        self.input.clear();
    }

    pub fn quit(&mut self) {
        info!("leaving full-screen mode");
        self.should_quit = true;
    }

    fn apply(&mut self, command: Command) {
        match handle_command(&mut self.grid, command) {
            Reply::Message { text, is_error } => {
                self.status = Some(if is_error { Status::error(text) } else { Status::info(text) });
            }
            Reply::Chart(_) => {
                // The chart is always on screen; report occupancy instead
                self.status = Some(Status::info(format!(
                    "{} of {} seats booked.",
                    self.grid.booked_count(),
                    ROWS * COLUMNS
                )));
            }
            Reply::Exit => self.quit(),
        }
    }
}
