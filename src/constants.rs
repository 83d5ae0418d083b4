// Theater dimensions
pub const ROWS: usize = 30;
pub const COLUMNS: usize = 12;

// Displayed column letters run from FIRST_COLUMN to LAST_COLUMN
pub const FIRST_COLUMN: char = 'A';
pub const LAST_COLUMN: char = 'L';

// Menu choices
pub const CHOICE_BOOK: i32 = 1;
pub const CHOICE_CANCEL: i32 = 2;
pub const CHOICE_SHOW: i32 = 3;
pub const CHOICE_EXIT: i32 = 4;

// Default tracing filter when neither --log nor THEATER_SEATS_LOG is given
pub const DEFAULT_LOG_FILTER: &str = "warn";
