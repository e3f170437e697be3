//! Core Connect Four game logic: board, players, win detection, the move
//! engine and the turn/drop state machine.

mod board;
mod player;
mod state;
mod turn;
mod win;

pub use board::{Board, Cell, COLS, ROWS};
pub use player::Player;
pub use state::{
    DropTransition, GameOutcome, GameSnapshot, GameState, MoveResult, MoveStatus, OpponentMode,
};
pub use turn::Phase;
pub use win::{detect_win, is_board_full, Position, Win, WinningLine};
