use crate::config::DisplayConfig;
use crate::game::{Coordinate, Snapshot, SquareState, SIZE};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the board with alternating square shading. Squares listed in
/// `highlight` are drawn in red.
pub fn render_board(
    frame: &mut Frame,
    grid: &Snapshot,
    display: &DisplayConfig,
    highlight: &[Coordinate],
    area: Rect,
) {
    let mut lines = Vec::new();

    if display.show_coordinates {
        let mut header = vec![Span::raw("   ")];
        for letter in 'A'..='H' {
            header.push(Span::styled(
                format!(" {letter} "),
                Style::default().fg(Color::Cyan),
            ));
        }
        lines.push(Line::from(header));
    }

    for (row, cells) in grid.iter().enumerate() {
        let mut spans = Vec::with_capacity(SIZE + 1);
        if display.show_coordinates {
            spans.push(Span::styled(
                format!(" {} ", row + 1),
                Style::default().fg(Color::Cyan),
            ));
        }

        for (col, &cell) in cells.iter().enumerate() {
            let background = if (row + col) % 2 == 0 {
                Color::White
            } else {
                Color::Gray
            };
            let square = Coordinate::new(row as i32, col as i32);
            let (symbol, style) = match cell {
                SquareState::Empty => (
                    display.empty_symbol,
                    Style::default().fg(Color::DarkGray).bg(background),
                ),
                SquareState::Queen if highlight.contains(&square) => (
                    display.queen_symbol,
                    Style::default()
                        .fg(Color::Red)
                        .bg(background)
                        .add_modifier(Modifier::BOLD),
                ),
                SquareState::Queen => (
                    display.queen_symbol,
                    Style::default()
                        .fg(Color::Black)
                        .bg(background)
                        .add_modifier(Modifier::BOLD),
                ),
            };
            spans.push(Span::styled(format!(" {symbol} "), style));
        }
        lines.push(Line::from(spans));
    }

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Board"));
    frame.render_widget(widget, area);
}
