//! Rule-based opponent: take a win, block a loss, otherwise play as close to
//! the center as possible.

use crate::error::StrategyError;
use crate::game::{detect_win, Board, GameState, Player, COLS};

use super::agent::Agent;

/// The rule that produced a choice, highest priority first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Win,
    Block,
    Center,
    NearCenter,
    Leftmost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub column: usize,
    pub tier: Tier,
}

const CENTER: usize = COLS / 2;

/// Pick a column for `player` on `board`.
///
/// Tiers short-circuit in order: a column that wins now, a column the opponent
/// would win with next, the center column, columns spreading out from the
/// center (left side first at each distance), then the leftmost playable
/// column. Winning probes run on board copies, so `board` is never touched.
pub fn choose_column(board: &Board, player: Player) -> Result<Choice, StrategyError> {
    let choice = if let Some(column) = winning_column(board, player) {
        Choice { column, tier: Tier::Win }
    } else if let Some(column) = winning_column(board, player.other()) {
        Choice { column, tier: Tier::Block }
    } else if board.is_column_playable(CENTER) {
        Choice { column: CENTER, tier: Tier::Center }
    } else if let Some(column) = near_center_column(board) {
        Choice { column, tier: Tier::NearCenter }
    } else if let Some(column) = board.playable_columns().next() {
        Choice { column, tier: Tier::Leftmost }
    } else {
        return Err(StrategyError::NoLegalMove);
    };

    tracing::debug!(player = player.name(), column = choice.column, tier = ?choice.tier, "column chosen");
    Ok(choice)
}

/// Leftmost column where dropping `player`'s piece completes a line for them.
fn winning_column(board: &Board, player: Player) -> Option<usize> {
    board.playable_columns().find(|&col| {
        board
            .with_piece(col, player)
            .and_then(|(next, _)| detect_win(&next))
            .is_some_and(|win| win.player == player)
    })
}

fn near_center_column(board: &Board) -> Option<usize> {
    (1..=CENTER)
        .flat_map(|offset| [CENTER.checked_sub(offset), Some(CENTER + offset)])
        .flatten()
        .find(|&col| board.is_column_playable(col))
}

/// The computer opponent: [`choose_column`] for whoever is to move.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityAgent;

impl PriorityAgent {
    pub fn new() -> Self {
        PriorityAgent
    }
}

impl Agent for PriorityAgent {
    fn select_action(&mut self, state: &GameState) -> Result<usize, StrategyError> {
        choose_column(state.board(), state.current_player()).map(|choice| choice.column)
    }

    fn name(&self) -> &str {
        "Computer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{OpponentMode, ROWS};

    fn board_from(rows: [&str; ROWS]) -> Board {
        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    'X' => board.place(row, col, Player::One),
                    'O' => board.place(row, col, Player::Two),
                    _ => {}
                }
            }
        }
        board
    }

    fn choose(board: &Board, player: Player) -> Choice {
        let before = *board;
        let choice = choose_column(board, player).unwrap();
        assert_eq!(*board, before, "strategy must not alter the board");
        choice
    }

    #[test]
    fn test_empty_board_takes_center() {
        let choice = choose(&Board::new(), Player::Two);
        assert_eq!(choice, Choice { column: 3, tier: Tier::Center });
    }

    #[test]
    fn test_blocks_open_three() {
        let board = board_from([
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "XXX....",
        ]);
        let choice = choose(&board, Player::Two);
        assert_eq!(choice, Choice { column: 3, tier: Tier::Block });
    }

    #[test]
    fn test_block_takes_leftmost_threat() {
        let board = board_from([
            ".......",
            ".......",
            ".......",
            ".......",
            "...OO..",
            "...XXX.",
        ]);
        let choice = choose(&board, Player::Two);
        assert_eq!(choice, Choice { column: 2, tier: Tier::Block });
    }

    #[test]
    fn test_completes_vertical_win() {
        let board = board_from([
            ".......",
            ".......",
            ".......",
            "....O..",
            "X...O..",
            "XX..OX.",
        ]);
        let choice = choose(&board, Player::Two);
        assert_eq!(choice, Choice { column: 4, tier: Tier::Win });
    }

    #[test]
    fn test_win_beats_block() {
        let board = board_from([
            ".......",
            ".......",
            ".......",
            "....O..",
            "....O..",
            "XXX.OX.",
        ]);
        let choice = choose(&board, Player::Two);
        assert_eq!(choice, Choice { column: 4, tier: Tier::Win });
    }

    #[test]
    fn test_strategy_plays_for_either_side() {
        let board = board_from([
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "XXX....",
        ]);
        let choice = choose(&board, Player::One);
        assert_eq!(choice, Choice { column: 3, tier: Tier::Win });
    }

    #[test]
    fn test_full_center_goes_left_first() {
        let board = board_from([
            "...O...",
            "...X...",
            "...O...",
            "...X...",
            "...O...",
            "...X...",
        ]);
        let choice = choose(&board, Player::One);
        assert_eq!(choice, Choice { column: 2, tier: Tier::NearCenter });
    }

    #[test]
    fn test_near_center_then_right() {
        let board = board_from([
            "..XO...",
            "..OX...",
            "..XO...",
            "..OX...",
            "..XO...",
            "..OX...",
        ]);
        let choice = choose(&board, Player::One);
        assert_eq!(choice, Choice { column: 4, tier: Tier::NearCenter });
    }

    #[test]
    fn test_full_board_has_no_legal_move() {
        let board = board_from([
            "XOXOXOO",
            "OXXXOXX",
            "OOOXOOO",
            "OOXXOOX",
            "XOXOXOO",
            "XXXOXXX",
        ]);
        assert_eq!(
            choose_column(&board, Player::Two),
            Err(StrategyError::NoLegalMove)
        );
    }

    #[test]
    fn test_agent_moves_for_current_player() {
        let mut state = GameState::new(OpponentMode::Computer);
        for col in [0, 6, 1, 6] {
            state.apply_move(col).unwrap();
        }
        let mut agent = PriorityAgent::new();
        assert_eq!(state.current_player(), Player::One);
        // Player One already has two on the bottom row; nothing wins or needs blocking yet
        assert_eq!(agent.select_action(&state), Ok(3));
        assert_eq!(agent.name(), "Computer");
    }
}
