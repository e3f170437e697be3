use std::time::Duration;

use crate::game::DropTransition;

/// Frame-paced descent of a dropped piece.
///
/// The piece starts in the hover line above the board and moves down one row
/// every `step`. It has landed once it has spent a step on its target row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropAnimation {
    drop: DropTransition,
    step: Duration,
    elapsed: Duration,
}

impl DropAnimation {
    pub fn new(drop: DropTransition, step: Duration) -> Self {
        DropAnimation {
            drop,
            step: step.max(Duration::from_millis(1)),
            elapsed: Duration::ZERO,
        }
    }

    pub fn column(&self) -> usize {
        self.drop.column
    }

    /// Advance by `dt`; returns true once the piece has landed.
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.elapsed += dt;
        self.is_landed()
    }

    pub fn is_landed(&self) -> bool {
        self.steps() > self.drop.target_row
    }

    /// Board row the piece is drawn on, `None` while still above the board.
    pub fn current_row(&self) -> Option<usize> {
        self.steps()
            .checked_sub(1)
            .map(|row| row.min(self.drop.target_row))
    }

    fn steps(&self) -> usize {
        (self.elapsed.as_nanos() / self.step.as_nanos()) as usize
    }
}
