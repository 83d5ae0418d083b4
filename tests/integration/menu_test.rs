//! Line menu driven over in-memory buffers

use super::helpers::{run_menu, run_menu_with};
use theater_seats::menu::FAREWELL;
use theater_seats::SeatGrid;

#[test]
fn book_show_and_exit() {
    let (grid, out) = run_menu("1\na\n1\n3\n4\n");

    assert!(grid.is_booked('A', 1));
    assert!(out.contains("Seat A1 has been booked."));
    assert!(out.contains("Theater Seating Chart:"));
    assert!(out.contains(" 1 X O O O O O O O O O O O"));
    assert!(out.contains(FAREWELL));
}

#[test]
fn double_booking_and_cancel_messages() {
    let (_, out) = run_menu("1 L 30\n1 L 30\n2 L 30\n2 L 30\n4\n");

    let messages: Vec<&str> = out
        .lines()
        .filter_map(|line| line.strip_prefix("Enter your choice: Enter the column (A-L): Enter the row (1-30): "))
        .collect();
    assert_eq!(
        messages,
        vec![
            "Seat L30 has been booked.",
            "Error: Seat L30 is already booked.",
            "Seat L30 booking has been canceled.",
            "Error: Seat L30 is not booked.",
        ]
    );
}

#[test]
fn invalid_seat_is_reported() {
    let (grid, out) = run_menu("1 M 5 1 A 31 4");

    assert_eq!(grid, SeatGrid::new());
    assert!(out.contains("Error: Invalid seat M5."));
    assert!(out.contains("Error: Invalid seat A31."));
}

#[test]
fn existing_grid_is_used() {
    let mut grid = SeatGrid::new();
    grid.book('C', 3).unwrap();

    let (grid, out) = run_menu_with(grid, "2 c 3 4");
    assert!(out.contains("Seat C3 booking has been canceled."));
    assert_eq!(grid, SeatGrid::new());
}

#[test]
fn garbage_then_valid_choice() {
    let (_, out) = run_menu("x y 0 4");

    assert_eq!(
        out.matches("Invalid input. Please enter a number between 1 and 4.").count(),
        2
    );
    assert_eq!(out.matches("Invalid choice. Please select a valid option.").count(), 1);
    assert!(out.contains(FAREWELL));
}

#[test]
fn empty_input_exits_without_farewell() {
    let (grid, out) = run_menu("");
    assert_eq!(grid, SeatGrid::new());
    assert!(out.ends_with("Enter your choice: "));
    assert!(!out.contains(FAREWELL));
}
