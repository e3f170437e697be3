//! Turn/drop state machine layered over [`GameState`].
//!
//! A human move goes `WaitingForInput -> Dropping -> WaitingForInput | GameOver`:
//! the column is fixed at selection, and the piece is only committed once the
//! presentation layer reports that its animation landed. The computer skips
//! `Dropping` and commits straight through [`GameState::apply_move`].
//! Input that arrives in the wrong phase is ignored rather than reported.

use super::state::{DropTransition, GameState, MoveResult, OpponentMode};
use super::Player;
use crate::ai::Agent;
use crate::error::{MoveError, StrategyError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    WaitingForInput,
    Dropping,
    GameOver,
}

impl GameState {
    pub fn phase(&self) -> Phase {
        if self.is_game_over() {
            Phase::GameOver
        } else if self.pending_drop.is_some() {
            Phase::Dropping
        } else {
            Phase::WaitingForInput
        }
    }

    /// Whether the player to move is controlled by the computer
    pub fn is_computer_turn(&self) -> bool {
        self.mode == OpponentMode::Computer && self.current_player == Player::Two
    }

    pub fn is_human_turn(&self) -> bool {
        !self.is_computer_turn()
    }

    /// A human picked a column.
    ///
    /// Returns the started drop, `Ok(None)` when the input is stale (a piece
    /// is already falling, the game is over, or it is the computer's move), or
    /// an error when the column cannot take a piece.
    pub fn human_selects_column(
        &mut self,
        column: usize,
    ) -> Result<Option<DropTransition>, MoveError> {
        if self.phase() != Phase::WaitingForInput || !self.is_human_turn() {
            tracing::debug!(column, phase = ?self.phase(), "ignoring stale column input");
            return Ok(None);
        }

        let target_row = self.resting_row(column)?;
        let drop = DropTransition { column, target_row };
        self.pending_drop = Some(drop);
        tracing::debug!(column, target_row, "drop started");
        Ok(Some(drop))
    }

    /// The falling piece reached its resting row; commit it.
    pub fn animation_landed(&mut self) -> Option<MoveResult> {
        if self.phase() != Phase::Dropping {
            return None;
        }
        let drop = self.pending_drop.take()?;
        Some(self.settle(drop.target_row, drop.column))
    }

    /// Let `agent` move for the computer, if it is the computer's move.
    pub fn play_computer_turn(
        &mut self,
        agent: &mut dyn Agent,
    ) -> Result<Option<MoveResult>, StrategyError> {
        if self.phase() != Phase::WaitingForInput || !self.is_computer_turn() {
            return Ok(None);
        }

        let column = agent.select_action(self)?;
        tracing::debug!(agent = agent.name(), column, "computer move");
        self.apply_move(column)
            .map(Some)
            .map_err(|source| StrategyError::IllegalChoice { column, source })
    }

    /// Start over in `mode`. Only honored once the game has ended.
    pub fn restart_requested(&mut self, mode: OpponentMode) -> bool {
        if self.phase() != Phase::GameOver {
            return false;
        }
        *self = GameState::new(mode);
        tracing::info!(?mode, "game restarted");
        true
    }
}
