use crate::constants::{CHOICE_BOOK, CHOICE_CANCEL, CHOICE_EXIT, CHOICE_SHOW};

/// A request for the seat grid, produced by either front end.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    Book { column: char, row: i32 },
    Cancel { column: char, row: i32 },
    ShowChart,
    Exit,
}

/// One entry of the main menu.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MenuChoice {
    Book,
    Cancel,
    ShowChart,
    Exit,
}

impl MenuChoice {
    /// Maps a menu number to its choice. Anything but 1-4 is `None`.
    pub fn from_number(number: i32) -> Option<Self> {
        match number {
            CHOICE_BOOK => Some(MenuChoice::Book),
            CHOICE_CANCEL => Some(MenuChoice::Cancel),
            CHOICE_SHOW => Some(MenuChoice::ShowChart),
            CHOICE_EXIT => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    /// Completes the choice into a command. The seat is ignored for choices
    /// that do not take one.
    pub fn into_command(self, column: char, row: i32) -> Command {
        match self {
            MenuChoice::Book => Command::Book { column, row },
            MenuChoice::Cancel => Command::Cancel { column, row },
            MenuChoice::ShowChart => Command::ShowChart,
            MenuChoice::Exit => Command::Exit,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Book => "Book a Seat",
            MenuChoice::Cancel => "Cancel a Booking",
            MenuChoice::ShowChart => "Show Theater Seats",
            MenuChoice::Exit => "Exit",
        }
    }

    pub fn all() -> [MenuChoice; 4] {
        [MenuChoice::Book, MenuChoice::Cancel, MenuChoice::ShowChart, MenuChoice::Exit]
    }
}

/// Column letter taken from a column token: its first character, uppercased.
///
/// `"AB"` therefore means column `A`.
pub fn parse_column(token: &str) -> Option<char> {
    token.chars().next().map(|c| c.to_ascii_uppercase())
}

/// Splits a seat code such as `a7` or `L30` into column and row.
///
/// The row must be an integer; range checks are left to the grid.
pub fn parse_seat_code(code: &str) -> Option<(char, i32)> {
    let code = code.trim();
    let column = parse_column(code)?;
    let rest = code[column.len_utf8()..].trim();
    let row = rest.parse::<i32>().ok()?;
    Some((column, row))
}
