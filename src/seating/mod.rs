pub mod grid;
pub mod seat;

pub use grid::{SeatGrid, SeatState};
pub use seat::{SeatError, SeatId};
