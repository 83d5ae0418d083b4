pub mod command;
pub mod handler;
pub mod tokens;

pub use command::{parse_seat_code, Command, MenuChoice};
pub use handler::{handle_command, handle_key, Reply};
pub use tokens::TokenReader;
