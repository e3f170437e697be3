//! Four-in-a-row detection over the whole board.

use super::{Board, Player, COLS, ROWS};

/// A cell coordinate as `(col, row)`, the order winning lines are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub col: usize,
    pub row: usize,
}

impl Position {
    pub fn new(col: usize, row: usize) -> Self {
        Position { col, row }
    }
}

/// The four collinear cells that ended the game, in probe order.
pub type WinningLine = [Position; 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Win {
    pub player: Player,
    pub line: WinningLine,
}

/// Probe directions as `(d_row, d_col)`: down, right, down-right, down-left.
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Scan the board row-major from the top-left and return the first
/// four-in-a-row found.
///
/// For each occupied cell the four directions are probed in fixed order, so
/// when a board holds more than one line the one reported is the first in that
/// scan order.
pub fn detect_win(board: &Board) -> Option<Win> {
    for row in 0..ROWS {
        for col in 0..COLS {
            let Some(player) = board.get(row, col).player() else {
                continue;
            };
            for (d_row, d_col) in DIRECTIONS {
                if let Some(line) = probe(board, row, col, d_row, d_col, player) {
                    return Some(Win { player, line });
                }
            }
        }
    }
    None
}

/// A draw is declared once the top row is full.
pub fn is_board_full(board: &Board) -> bool {
    board.is_full()
}

fn probe(
    board: &Board,
    row: usize,
    col: usize,
    d_row: isize,
    d_col: isize,
    player: Player,
) -> Option<WinningLine> {
    let mut line = [Position::new(col, row); 4];
    for (i, slot) in line.iter_mut().enumerate() {
        let r = row.checked_add_signed(d_row * i as isize)?;
        let c = col.checked_add_signed(d_col * i as isize)?;
        if r >= ROWS || c >= COLS || board.get(r, c) != player.to_cell() {
            return None;
        }
        *slot = Position::new(c, r);
    }
    Some(line)
}
