use crate::error::StrategyError;
use crate::game::GameState;

/// Interface for anything that picks the computer's column.
pub trait Agent {
    /// Select a column for the current player of `state`.
    fn select_action(&mut self, state: &GameState) -> Result<usize, StrategyError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
