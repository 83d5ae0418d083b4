//! Line-oriented menu front end.
//!
//! Reads whitespace-separated tokens from any `BufRead` and writes prompts
//! and replies to any `Write`, so it runs the same against a terminal and
//! against in-memory buffers.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::error::AppError;
use crate::input::command::{parse_column, Command, MenuChoice};
use crate::input::handler::{handle_command, Reply};
use crate::input::tokens::TokenReader;
use crate::seating::SeatGrid;

const MENU: &str = "\n--- Theater Seat Management ---\n\
1. Book a Seat\n\
2. Cancel a Booking\n\
3. Show Theater Seats\n\
4. Exit\n\
Enter your choice: ";

pub const FAREWELL: &str = "Exiting... Thank you for using the Theater Seat Management System.";

enum SeatInput {
    Seat(char, i32),
    BadRow,
    Closed,
}

pub struct Menu<R, W> {
    grid: SeatGrid,
    tokens: TokenReader<R>,
    out: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(grid: SeatGrid, input: R, out: W) -> Self {
        Self {
            grid,
            tokens: TokenReader::new(input),
            out,
        }
    }

    pub fn into_grid(self) -> SeatGrid {
        self.grid
    }

    /// Runs until the exit choice is made or the input ends.
    pub fn run(&mut self) -> Result<(), AppError> {
        loop {
            self.prompt(MENU)?;

            let Some(number) = self.read_choice()? else {
                info!("input closed, leaving menu");
                return Ok(());
            };

            let Some(choice) = MenuChoice::from_number(number) else {
                writeln!(self.out, "Invalid choice. Please select a valid option.")?;
                continue;
            };

            let command = match choice {
                MenuChoice::ShowChart => Command::ShowChart,
                MenuChoice::Exit => Command::Exit,
                MenuChoice::Book | MenuChoice::Cancel => match self.read_seat()? {
                    SeatInput::Seat(column, row) => choice.into_command(column, row),
                    SeatInput::BadRow => {
                        writeln!(self.out, "Invalid input. Please enter a row number.")?;
                        continue;
                    }
                    SeatInput::Closed => {
                        info!("input closed during seat prompt");
                        return Ok(());
                    }
                },
            };

            match handle_command(&mut self.grid, command) {
                Reply::Message { text, .. } => {
                    writeln!(self.out, "{}", text)?;
                }
                Reply::Chart(chart) => {
                    writeln!(self.out, "Theater Seating Chart:")?;
                    write!(self.out, "{}", chart)?;
                }
                Reply::Exit => {
                    writeln!(self.out, "{}", FAREWELL)?;
                    self.out.flush()?;
                    info!(booked = self.grid.booked_count(), "exit selected");
                    return Ok(());
                }
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<(), AppError> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }

    /// Skips tokens that are not integers, complaining about each one.
    fn read_choice(&mut self) -> Result<Option<i32>, AppError> {
        while let Some(token) = self.tokens.next_token()? {
            match token.parse::<i32>() {
                Ok(number) => return Ok(Some(number)),
                Err(_) => {
                    debug!(%token, "discarding non-numeric menu input");
                    writeln!(self.out, "Invalid input. Please enter a number between 1 and 4.")?;
                }
            }
        }
        Ok(None)
    }

    fn read_seat(&mut self) -> Result<SeatInput, AppError> {
        self.prompt("Enter the column (A-L): ")?;
        let Some(column) = self.tokens.next_token()?.as_deref().and_then(parse_column) else {
            return Ok(SeatInput::Closed);
        };

        self.prompt("Enter the row (1-30): ")?;
        let Some(token) = self.tokens.next_token()? else {
            return Ok(SeatInput::Closed);
        };

        match token.parse::<i32>() {
            Ok(row) => Ok(SeatInput::Seat(column, row)),
            Err(_) => {
                debug!(%token, "discarding non-numeric row");
                Ok(SeatInput::BadRow)
            }
        }
    }
}
