use crate::config::DisplayConfig;
use crate::game::{Coordinate, PlacementSession, QUEENS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    session: &PlacementSession,
    display: &DisplayConfig,
    input: &str,
    conflict: &[Coordinate],
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Board + accepted table
            Constraint::Length(3), // Input
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_header(frame, session, chunks[0]);
    super::board_widget::render_board(
        frame,
        &session.board().snapshot(),
        display,
        conflict,
        body[0],
    );
    render_accepted(frame, session, body[1]);
    render_input(frame, session, input, chunks[2]);
    render_message(frame, message, chunks[3]);
    render_controls(frame, chunks[4]);
}

fn render_header(frame: &mut Frame, session: &PlacementSession, area: Rect) {
    let status = if session.is_complete() {
        format!("All {QUEENS} queens placed")
    } else {
        format!(
            "Enter queen's positions  |  {} of {QUEENS} placed",
            session.placed().len()
        )
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Eight Queens"));

    frame.render_widget(header, area);
}

fn render_accepted(frame: &mut Frame, session: &PlacementSession, area: Rect) {
    let rows = session
        .placed()
        .iter()
        .enumerate()
        .map(|(i, coord)| Row::new(vec![(i + 1).to_string(), coord.to_string()]));

    let table = Table::new(rows, [Constraint::Length(6), Constraint::Length(10)])
        .header(
            Row::new(vec!["Queen", "Position"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Accepted queens positions"),
        );

    frame.render_widget(table, area);
}

fn render_input(frame: &mut Frame, session: &PlacementSession, input: &str, area: Rect) {
    let label = if session.is_complete() {
        "Done".to_string()
    } else {
        format!("Nr. {}: ", session.next_queen_number())
    };

    let line = Line::from(vec![
        Span::styled(label, Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(input.to_string(), Style::default().fg(Color::Yellow)),
        Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
    ]);

    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Position (column A-H, row 1-8)"),
    );
    frame.render_widget(widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new("Type position  |  Enter: Confirm  |  Ctrl-R: Reset  |  Esc: Quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
