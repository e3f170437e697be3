use crate::game::{Cell, GameSnapshot, Player, Position, COLS, ROWS};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const PIECE: &str = " \u{25cf} ";
const WINNING_PIECE: &str = " \u{25c9} ";
const EMPTY: &str = " . ";
const BLANK: &str = "   ";

/// Presentation-only state drawn on top of the game snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overlay {
    /// Column the human is aiming at, shown above the board.
    pub hover_column: Option<usize>,
    /// Falling piece: its column, and its row once it has entered the board.
    pub falling: Option<(usize, Option<usize>)>,
}

pub fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

fn piece_span(player: Player) -> Span<'static> {
    Span::styled(PIECE, Style::default().fg(player_color(player)))
}

fn cell_span(cell: Cell, winning: bool) -> Span<'static> {
    match cell.player() {
        None => Span::styled(EMPTY, Style::default().fg(Color::DarkGray)),
        Some(_) if winning => Span::styled(
            WINNING_PIECE,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Some(player) => piece_span(player),
    }
}

/// Lines for the board: column numbers, the hover line, then the framed grid.
pub fn board_lines(snapshot: &GameSnapshot, overlay: &Overlay) -> Vec<Line<'static>> {
    let mover = snapshot.current_player;
    let mut lines = Vec::with_capacity(ROWS + 4);

    // Column numbers, matching the 1-7 keys
    let mut numbers = vec![Span::raw("   ")];
    for col in 0..COLS {
        let label = format!(" {} ", col + 1);
        if overlay.hover_column == Some(col) {
            numbers.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            numbers.push(Span::raw(label));
        }
    }
    numbers.push(Span::raw("  "));
    lines.push(Line::from(numbers));

    // Piece waiting above the board, or just released
    let above = match overlay.falling {
        Some((col, None)) => Some(col),
        Some((_, Some(_))) => None,
        None => overlay.hover_column,
    };
    let mut hover = vec![Span::raw("   ")];
    for col in 0..COLS {
        if above == Some(col) {
            hover.push(piece_span(mover));
        } else {
            hover.push(Span::raw(BLANK));
        }
    }
    hover.push(Span::raw("  "));
    lines.push(Line::from(hover));

    lines.push(Line::from("  ╔══════════════════════╗"));

    let is_winning = |col: usize, row: usize| {
        snapshot
            .winning_line
            .is_some_and(|line| line.contains(&Position::new(col, row)))
    };

    for row in 0..ROWS {
        let mut spans = vec![Span::raw("  ║")];
        for col in 0..COLS {
            if overlay.falling == Some((col, Some(row))) {
                spans.push(piece_span(mover));
            } else {
                spans.push(cell_span(snapshot.board.get(row, col), is_winning(col, row)));
            }
        }
        spans.push(Span::raw(" ║"));
        lines.push(Line::from(spans));
    }

    lines.push(Line::from("  ╚══════════════════════╝"));
    lines
}
