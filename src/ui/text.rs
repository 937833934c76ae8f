use crate::config::DisplayConfig;
use crate::game::{Snapshot, SquareState};

/// Render the grid as plain text, row 1 at the top.
///
/// ```text
///   A B C D E F G H
/// 1 X # # # # # # #
/// 2 # # # # X # # #
/// ```
pub fn render_board(grid: &Snapshot, display: &DisplayConfig) -> String {
    let mut out = String::new();

    if display.show_coordinates {
        let header: Vec<String> = ('A'..='H').map(String::from).collect();
        out.push_str("  ");
        out.push_str(&header.join(" "));
        out.push('\n');
    }

    for (row, cells) in grid.iter().enumerate() {
        let symbols: Vec<String> = cells
            .iter()
            .map(|cell| match cell {
                SquareState::Empty => display.empty_symbol.to_string(),
                SquareState::Queen => display.queen_symbol.to_string(),
            })
            .collect();

        if display.show_coordinates {
            out.push_str(&format!("{} ", row + 1));
        }
        out.push_str(&symbols.join(" "));
        out.push('\n');
    }

    out
}
