//! Integration tests for theater-seats.

mod cli_test;
mod grid_test;
mod helpers;
mod menu_test;
