use super::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    /// The player occupying this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerOne => Some(Player::One),
            Cell::PlayerTwo => Some(Player::Two),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// A column is playable while its top cell is still empty
    pub fn is_column_playable(&self, col: usize) -> bool {
        col < COLS && self.cells[0][col].is_empty()
    }

    /// Resting row for a piece dropped into `col`, scanning from the bottom up.
    /// `None` when the column is full or out of range.
    pub fn lowest_empty_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][col].is_empty())
    }

    /// Write a piece into a cell.
    ///
    /// No validation: the caller has already resolved the resting row with
    /// [`Board::lowest_empty_row`].
    pub fn place(&mut self, row: usize, col: usize, player: Player) {
        self.cells[row][col] = player.to_cell();
    }

    /// Copy of this board with `player`'s piece dropped into `col`, along with
    /// the row it landed on. The board itself is left untouched.
    pub fn with_piece(&self, col: usize, player: Player) -> Option<(Board, usize)> {
        let row = self.lowest_empty_row(col)?;
        let mut next = *self;
        next.place(row, col, player);
        Some((next, row))
    }

    /// Check if the board is completely full (every top cell taken)
    pub fn is_full(&self) -> bool {
        self.cells[0].iter().all(|cell| !cell.is_empty())
    }

    /// Columns that can still take a piece, left to right
    pub fn playable_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..COLS).filter(move |&col| self.is_column_playable(col))
    }

    /// Number of occupied cells
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
