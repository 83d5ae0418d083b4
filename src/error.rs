//! Application-level errors.
//!
//! Seat rule violations are not errors at this level; they are reported as
//! [`SeatError`](crate::seating::SeatError) messages and the menu carries on.

/// Errors that end a front end's loop.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}
