use std::fmt;

use crate::constants::{FIRST_COLUMN, LAST_COLUMN, ROWS};

/// A seat address that is known to lie inside the theater.
///
/// Displays as the column letter followed by the 1-based row, e.g. `C12`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SeatId {
    column: char,
    row: u8,
}

impl SeatId {
    /// Validates a column letter and 1-based row.
    ///
    /// The column is case-insensitive. Returns `None` when either coordinate
    /// falls outside the theater.
    pub fn new(column: char, row: i32) -> Option<Self> {
        let column = column.to_ascii_uppercase();
        if !(FIRST_COLUMN..=LAST_COLUMN).contains(&column) {
            return None;
        }
        if row < 1 || row > ROWS as i32 {
            return None;
        }
        Some(Self { column, row: row as u8 })
    }

    pub fn column(&self) -> char {
        self.column
    }

    pub fn row_index(&self) -> usize {
        self.row as usize - 1
    }

    pub fn column_index(&self) -> usize {
        (self.column as u8 - FIRST_COLUMN as u8) as usize
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}

/// Why a book or cancel request was refused. None of these change the grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeatError {
    #[error("Invalid seat {column}{row}.")]
    InvalidSeat { column: char, row: i32 },

    #[error("Seat {0} is already booked.")]
    AlreadyBooked(SeatId),

    #[error("Seat {0} is not booked.")]
    NotBooked(SeatId),
}

impl SeatError {
    pub fn invalid(column: char, row: i32) -> Self {
        Self::InvalidSeat {
            column: column.to_ascii_uppercase(),
            row,
        }
    }
}
