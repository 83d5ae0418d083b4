//! Shared helpers for integration tests.

use theater_seats::{Menu, SeatGrid};

/// Runs the line menu over scripted input and returns the final grid and
/// everything written to stdout.
pub fn run_menu(input: &str) -> (SeatGrid, String) {
    run_menu_with(SeatGrid::new(), input)
}

pub fn run_menu_with(grid: SeatGrid, input: &str) -> (SeatGrid, String) {
    let mut out = Vec::new();
    let mut menu = Menu::new(grid, input.as_bytes(), &mut out);
    menu.run().expect("menu should not fail on in-memory buffers");
    let grid = menu.into_grid();
    (grid, String::from_utf8(out).expect("menu output is UTF-8"))
}
