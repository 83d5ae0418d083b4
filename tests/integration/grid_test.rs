//! Seat grid behavior through the public API

use theater_seats::constants::{COLUMNS, ROWS};
use theater_seats::{SeatError, SeatGrid, SeatId};

#[test]
fn book_first_seat_shows_in_chart() {
    let mut grid = SeatGrid::new();
    assert_eq!(grid.book('A', 1), Ok(SeatId::new('A', 1).unwrap()));

    let chart = grid.render();
    let first_row = chart.lines().nth(1).unwrap();
    assert!(first_row.starts_with(" 1 X O O O O O O O O O O O"));
}

#[test]
fn last_seat_full_cycle() {
    let mut grid = SeatGrid::new();
    let seat = SeatId::new('L', 30).unwrap();

    assert_eq!(grid.book('L', 30), Ok(seat));
    assert_eq!(grid.book('L', 30), Err(SeatError::AlreadyBooked(seat)));
    assert_eq!(grid.cancel('L', 30), Ok(seat));
    assert_eq!(grid.cancel('L', 30), Err(SeatError::NotBooked(seat)));
    assert_eq!(grid, SeatGrid::new());
}

#[test]
fn out_of_range_column_is_invalid() {
    let mut grid = SeatGrid::new();
    assert_eq!(grid.book('M', 5), Err(SeatError::InvalidSeat { column: 'M', row: 5 }));
    assert_eq!(grid, SeatGrid::new());
}

#[test]
fn invalid_coordinates_never_validate() {
    let grid = SeatGrid::new();
    for column in ['@', '[', 'M', 'Z', 'm', '0', ' '] {
        for row in [1, 15, 30] {
            assert!(!grid.is_valid_seat(column, row), "{}{} should be invalid", column, row);
        }
    }
    for row in [i32::MIN, -1, 0, 31, 100, i32::MAX] {
        assert!(!grid.is_valid_seat('A', row), "A{} should be invalid", row);
    }
}

#[test]
fn chart_has_fixed_dimensions() {
    let mut grid = SeatGrid::new();
    grid.book('f', 15).unwrap();
    let chart = grid.render();

    assert_eq!(chart.lines().count(), ROWS + 1);
    for line in chart.lines().skip(1) {
        assert_eq!(line.split_whitespace().count(), COLUMNS + 1);
    }
    assert_eq!(chart.lines().nth(15).unwrap(), "15 O O O O O X O O O O O O");
}

#[test]
fn counts_track_bookings() {
    let mut grid = SeatGrid::new();
    grid.book('A', 1).unwrap();
    grid.book('B', 2).unwrap();
    assert!(matches!(grid.book('B', 2), Err(SeatError::AlreadyBooked(_))));
    grid.cancel('A', 1).unwrap();

    assert_eq!(grid.booked_count(), 1);
    assert_eq!(grid.free_count(), ROWS * COLUMNS - 1);
}
