use anyhow::Result;
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyEvent},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use std::{
    io::{self, stdout},
    time::Duration,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use theater_seats::constants::DEFAULT_LOG_FILTER;
use theater_seats::input::handle_key;
use theater_seats::ui::ui;
use theater_seats::{App, AppError, Menu, SeatGrid};

/// Book and cancel theater seats (30 rows, columns A-L).
#[derive(Debug, Parser)]
#[command(name = "theater-seats", version, about)]
struct Cli {
    /// Use the full-screen interface instead of the line menu
    #[arg(long)]
    tui: bool,

    /// Tracing filter directive, e.g. `debug` or `theater_seats=trace`
    #[arg(long, env = "THEATER_SEATS_LOG", default_value = DEFAULT_LOG_FILTER)]
    log: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let grid = SeatGrid::new();
    info!(tui = cli.tui, "starting theater seat management");

    if cli.tui {
        run_tui(grid)?;
    } else {
        let stdin = io::stdin();
        let mut menu = Menu::new(grid, stdin.lock(), stdout());
        menu.run()?;
    }

    Ok(())
}

fn init_logging(cli: &Cli) -> Result<(), AppError> {
    // The alternate screen cannot share the terminal with log lines
    let filter = if cli.tui { "off" } else { cli.log.as_str() };
    let filter = EnvFilter::try_new(filter).map_err(|e| AppError::Logging(e.to_string()))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr).with_target(false))
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}

fn run_tui(grid: SeatGrid) -> Result<(), AppError> {
    // Setup terminal
    terminal::enable_raw_mode()?;

    run_then_restore(
        || {
            let mut stdout = stdout();
            execute!(stdout, EnterAlternateScreen)?;

            let backend = CrosstermBackend::new(stdout);
            let mut terminal = Terminal::new(backend)?;

            let mut app = App::new(grid);
            event_loop(&mut terminal, &mut app)
        },
        restore_terminal,
    )
}

/// Runs `body`, then `restore` whether or not `body` failed. The body's
/// error wins over a restore error.
fn run_then_restore<T>(
    body: impl FnOnce() -> Result<T, AppError>,
    restore: impl FnOnce() -> Result<(), AppError>,
) -> Result<T, AppError> {
    let result = body();
    let restored = restore();
    let value = result?;
    restored?;
    Ok(value)
}

// Cleanup
fn restore_terminal() -> Result<(), AppError> {
    terminal::disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen, cursor::Show)?;
    Ok(())
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), AppError> {
    while !app.should_quit {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(KeyEvent { code, kind, modifiers, .. }) = event::read()? {
                handle_key(app, code, kind, modifiers);
            }
        }
    }
    Ok(())
}
