use super::turn::Phase;
use super::win::{detect_win, Position, WinningLine};
use super::{Board, Player, COLS};
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Who sits in Player Two's seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OpponentMode {
    #[default]
    Computer,
    Human,
}

/// A move that has been chosen but not yet committed to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropTransition {
    pub column: usize,
    /// Resting row, fixed when the column was selected.
    pub target_row: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveStatus {
    Continue { next: Player },
    Win { winner: Player, line: WinningLine },
    Draw,
}

/// What a committed move did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub position: Position,
    pub player: Player,
    pub status: MoveStatus,
}

/// Read-only view of the game for rendering, polled once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Board,
    pub current_player: Player,
    pub outcome: Option<GameOutcome>,
    pub winning_line: Option<WinningLine>,
    pub pending_drop: Option<DropTransition>,
    pub mode: OpponentMode,
    pub phase: Phase,
}

impl GameSnapshot {
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn winner(&self) -> Option<Player> {
        match self.outcome {
            Some(GameOutcome::Winner(player)) => Some(player),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub(super) board: Board,
    pub(super) current_player: Player,
    pub(super) outcome: Option<GameOutcome>,
    pub(super) winning_line: Option<WinningLine>,
    pub(super) mode: OpponentMode,
    pub(super) pending_drop: Option<DropTransition>,
}

impl GameState {
    /// Create initial game state
    pub fn new(mode: OpponentMode) -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::One, // Player One always starts
            outcome: None,
            winning_line: None,
            mode,
            pending_drop: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Winning player, `None` while playing or after a draw
    pub fn winner(&self) -> Option<Player> {
        match self.outcome {
            Some(GameOutcome::Winner(player)) => Some(player),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    pub fn mode(&self) -> OpponentMode {
        self.mode
    }

    pub fn pending_drop(&self) -> Option<DropTransition> {
        self.pending_drop
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_game_over() {
            return Vec::new();
        }
        self.board.playable_columns().collect()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board,
            current_player: self.current_player,
            outcome: self.outcome,
            winning_line: self.winning_line,
            pending_drop: self.pending_drop,
            mode: self.mode,
            phase: self.phase(),
        }
    }

    /// Drop the current player's piece into `column` and settle the result.
    ///
    /// Rejected while the game is over or a drop is still pending; the state is
    /// unchanged on every error.
    pub fn apply_move(&mut self, column: usize) -> Result<MoveResult, MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }
        if self.pending_drop.is_some() {
            return Err(MoveError::DropInProgress);
        }
        let row = self.resting_row(column)?;
        Ok(self.settle(row, column))
    }

    /// Resting row for `column`, or why nothing can be dropped there.
    pub(super) fn resting_row(&self, column: usize) -> Result<usize, MoveError> {
        if column >= COLS {
            return Err(MoveError::InvalidColumn(column));
        }
        self.board
            .lowest_empty_row(column)
            .ok_or(MoveError::ColumnFull(column))
    }

    /// Commit the mover's piece at a resolved cell, then decide between win,
    /// draw and handing the turn over. Every committed move passes through
    /// here.
    pub(super) fn settle(&mut self, row: usize, column: usize) -> MoveResult {
        let player = self.current_player;
        self.board.place(row, column, player);
        tracing::debug!(player = player.name(), row, column, "piece placed");

        let status = if let Some(win) = detect_win(&self.board) {
            self.outcome = Some(GameOutcome::Winner(win.player));
            self.winning_line = Some(win.line);
            tracing::info!(winner = win.player.name(), "game won");
            MoveStatus::Win {
                winner: win.player,
                line: win.line,
            }
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
            tracing::info!("game drawn");
            MoveStatus::Draw
        } else {
            self.current_player = player.other();
            MoveStatus::Continue {
                next: self.current_player,
            }
        };

        MoveResult {
            position: Position::new(column, row),
            player,
            status,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(OpponentMode::default())
    }
}
