//! Seat reservations for a 30 row by 12 column theater.
//!
//! [`SeatGrid`] owns the occupancy state and the book/cancel rules. The
//! [`menu`] module drives it from a line-oriented text menu and the [`app`]
//! and [`ui`] modules drive it from a full-screen terminal interface. Both
//! front ends turn user input into a [`Command`] and hand it to
//! [`handle_command`].

pub mod app;
pub mod constants;
pub mod error;
pub mod input;
pub mod menu;
pub mod seating;
pub mod ui;

pub use app::App;
pub use error::AppError;
pub use input::{handle_command, Command, Reply};
pub use menu::Menu;
pub use seating::{SeatError, SeatGrid, SeatId, SeatState};
