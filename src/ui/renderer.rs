use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Mode};
use crate::constants::{COLUMNS, FIRST_COLUMN, LAST_COLUMN, ROWS};
use crate::input::command::MenuChoice;
use crate::seating::SeatState;

// 30 rows + header + 2 borders
const CHART_HEIGHT: u16 = ROWS as u16 + 3;
// Row label + 2 chars per seat + 2 borders
const CHART_WIDTH: u16 = 3 + COLUMNS as u16 * 2 + 2;
const SIDE_WIDTH: u16 = 34;

pub fn ui(f: &mut Frame, app: &App) {
    let size = f.size();

    // Create a centered layout
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                 // Flexible top space
            Constraint::Length(CHART_HEIGHT),   // Chart height
            Constraint::Min(0),                 // Flexible bottom space
        ])
        .split(size);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),                 // Left margin
            Constraint::Length(CHART_WIDTH),    // Seating chart
            Constraint::Length(SIDE_WIDTH),     // Menu, prompt and status
            Constraint::Min(0),                 // Right margin
        ])
        .split(vertical_chunks[1]);

    render_chart(f, app, horizontal_chunks[1]);
    render_side_panel(f, app, horizontal_chunks[2]);
}

fn render_chart(f: &mut Frame, app: &App, area: Rect) {
    let mut chart_lines = Vec::with_capacity(ROWS + 1);

    let mut header = String::from("  ");
    for column in FIRST_COLUMN..=LAST_COLUMN {
        header.push(' ');
        header.push(column);
    }
    chart_lines.push(Line::from(Span::styled(header, Style::default().fg(Color::Cyan))));

    for (index, row) in app.grid.rows().enumerate() {
        let mut line_spans = vec![Span::styled(
            format!("{:>2}", index + 1),
            Style::default().fg(Color::Cyan),
        )];
        for state in row {
            let style = match state {
                SeatState::Booked => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                SeatState::Free => Style::default().fg(Color::Green),
            };
            line_spans.push(Span::raw(" "));
            line_spans.push(Span::styled(state.symbol().to_string(), style));
        }
        chart_lines.push(Line::from(line_spans));
    }

    let chart_widget = Paragraph::new(chart_lines)
        .block(Block::default()
               .borders(Borders::ALL)
               .title("Seats"));

    f.render_widget(chart_widget, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),  // Menu
            Constraint::Length(5),  // Occupancy
            Constraint::Length(3),  // Prompt
            Constraint::Min(3),     // Status
        ])
        .split(area);

    render_menu(f, app, chunks[0]);
    render_occupancy(f, app, chunks[1]);
    render_prompt(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_menu(f: &mut Frame, app: &App, area: Rect) {
    let active = match app.mode {
        Mode::SeatPrompt(choice) => Some(choice),
        Mode::Menu => None,
    };

    let mut menu_lines: Vec<Line> = MenuChoice::all()
        .iter()
        .enumerate()
        .map(|(index, choice)| {
            let style = if Some(*choice) == active {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(Span::styled(format!("{}. {}", index + 1, choice.label()), style))
        })
        .collect();
    menu_lines.push(Line::from(""));
    menu_lines.push(Line::from(Span::styled(
        "q / Esc to quit",
        Style::default().fg(Color::DarkGray),
    )));

    let menu_widget = Paragraph::new(menu_lines)
        .block(Block::default().borders(Borders::ALL).title("Theater Seat Management"));

    f.render_widget(menu_widget, area);
}

fn render_occupancy(f: &mut Frame, app: &App, area: Rect) {
    let occupancy_text = vec![
        Line::from(vec![
            Span::styled("X", Style::default().fg(Color::Red)),
            Span::raw(format!(" booked  {:>3}", app.grid.booked_count())),
        ]),
        Line::from(vec![
            Span::styled("O", Style::default().fg(Color::Green)),
            Span::raw(format!(" free    {:>3}", app.grid.free_count())),
        ]),
    ];

    let occupancy_widget = Paragraph::new(occupancy_text)
        .block(Block::default().borders(Borders::ALL).title("Occupancy"))
        .alignment(Alignment::Left);

    f.render_widget(occupancy_widget, area);
}

fn render_prompt(f: &mut Frame, app: &App, area: Rect) {
    let prompt_line = match app.mode {
        Mode::SeatPrompt(choice) => {
            let verb = match choice {
                MenuChoice::Cancel => "Cancel",
                _ => "Book",
            };
            Line::from(vec![
                Span::raw(format!("{} seat: ", verb)),
                Span::styled(app.input.clone(), Style::default().fg(Color::Yellow)),
                Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
            ])
        }
        Mode::Menu => Line::from(Span::styled(
            "Enter your choice (1-4)",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let prompt_widget = Paragraph::new(prompt_line)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(prompt_widget, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let status_line = match &app.status {
        Some(status) => {
            let color = if status.is_error { Color::Red } else { Color::Green };
            Line::from(Span::styled(status.text.clone(), Style::default().fg(color)))
        }
        None => Line::from(""),
    };

    let status_widget = Paragraph::new(status_line)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .wrap(Wrap { trim: true });

    f.render_widget(status_widget, area);
}
