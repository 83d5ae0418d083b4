use tracing::debug;

use crate::constants::{COLUMNS, FIRST_COLUMN, LAST_COLUMN, ROWS};
use crate::seating::seat::{SeatError, SeatId};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SeatState {
    #[default]
    Free,
    Booked,
}

impl SeatState {
    pub fn is_booked(self) -> bool {
        self == SeatState::Booked
    }

    /// Chart symbol for this state.
    pub fn symbol(self) -> char {
        match self {
            SeatState::Free => 'O',
            SeatState::Booked => 'X',
        }
    }
}

/// Occupancy of every seat in the theater, indexed `[row][column]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeatGrid {
    seats: [[SeatState; COLUMNS]; ROWS],
}

impl Default for SeatGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl SeatGrid {
    /// A grid with every seat free.
    pub fn new() -> Self {
        Self {
            seats: [[SeatState::Free; COLUMNS]; ROWS],
        }
    }

    pub fn is_valid_seat(&self, column: char, row: i32) -> bool {
        SeatId::new(column, row).is_some()
    }

    pub fn book(&mut self, column: char, row: i32) -> Result<SeatId, SeatError> {
        let seat = SeatId::new(column, row).ok_or_else(|| SeatError::invalid(column, row))?;
        let cell = &mut self.seats[seat.row_index()][seat.column_index()];

        if cell.is_booked() {
            debug!(%seat, "book refused, seat already booked");
            return Err(SeatError::AlreadyBooked(seat));
        }

        *cell = SeatState::Booked;
        debug!(%seat, "seat booked");
        Ok(seat)
    }

    pub fn cancel(&mut self, column: char, row: i32) -> Result<SeatId, SeatError> {
        let seat = SeatId::new(column, row).ok_or_else(|| SeatError::invalid(column, row))?;
        let cell = &mut self.seats[seat.row_index()][seat.column_index()];

        if !cell.is_booked() {
            debug!(%seat, "cancel refused, seat not booked");
            return Err(SeatError::NotBooked(seat));
        }

        *cell = SeatState::Free;
        debug!(%seat, "booking canceled");
        Ok(seat)
    }

    pub fn state(&self, seat: SeatId) -> SeatState {
        self.seats[seat.row_index()][seat.column_index()]
    }

    /// `false` for seats outside the theater as well as free ones.
    pub fn is_booked(&self, column: char, row: i32) -> bool {
        SeatId::new(column, row).is_some_and(|seat| self.state(seat).is_booked())
    }

    pub fn booked_count(&self) -> usize {
        self.seats
            .iter()
            .flatten()
            .filter(|state| state.is_booked())
            .count()
    }

    pub fn free_count(&self) -> usize {
        ROWS * COLUMNS - self.booked_count()
    }

    /// Row-major view of the seat states, row 1 first.
    pub fn rows(&self) -> impl Iterator<Item = &[SeatState; COLUMNS]> {
        self.seats.iter()
    }

    /// Text chart: a header of column letters, then one line per row with
    /// the row number right-aligned to width 2 and `X`/`O` per seat.
    pub fn render(&self) -> String {
        let mut chart = String::with_capacity((ROWS + 1) * (3 + COLUMNS * 2 + 1));

        chart.push_str("  ");
        for column in FIRST_COLUMN..=LAST_COLUMN {
            chart.push(' ');
            chart.push(column);
        }
        chart.push('\n');

        for (index, row) in self.seats.iter().enumerate() {
            chart.push_str(&format!("{:>2}", index + 1));
            for state in row {
                chart.push(' ');
                chart.push(state.symbol());
            }
            chart.push('\n');
        }

        chart
    }
}
