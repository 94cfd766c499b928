//! Phase 2: the top two rows, one column at a time from the right, down to column 2.

use log::trace;

use super::maneuver::ROW_ZERO_ROTATION;
use super::Reducer;
use crate::error::PuzzleError;
use crate::fifteen::moves::SlideMove::{Down, Left, Right, Up};
use crate::fifteen::Position;

impl Reducer {
    /// Place the tile for `(1, col)`, leaving the blank at `(0, col)`.
    pub(super) fn solve_row1_tile(&mut self, col: usize) -> Result<(), PuzzleError> {
        trace!("solving row 1 tile of column {col}");
        self.ensure(
            |g| g.row1_invariant(col),
            || format!("row 1 invariant does not hold before column {col}"),
        )?;

        let target = Position::new(1, col);
        self.position_tile(target, target)?;
        self.play(&[Up, Right])?;

        self.ensure(
            |g| g.row0_invariant(col),
            || format!("row 0 invariant does not hold after row 1 of column {col}"),
        )
    }

    /// Place the tile for `(0, col)`, leaving the blank at `(1, col - 1)`.
    ///
    /// When stepping the blank left and down does not already drop the tile into place, it is
    /// brought to `(1, col - 1)` and rotated up through the 2x3 block ending at `col`.
    pub(super) fn solve_row0_tile(&mut self, col: usize) -> Result<(), PuzzleError> {
        trace!("solving row 0 tile of column {col}");
        self.ensure(
            |g| g.row0_invariant(col),
            || format!("row 0 invariant does not hold before column {col}"),
        )?;

        self.play(&[Left, Down])?;
        let target = Position::new(0, col);
        if self.grid.locate(target)? != target {
            self.position_tile(target, Position::new(1, col - 1))?;
            self.play(ROW_ZERO_ROTATION)?;
        }

        self.ensure(
            |g| g.row1_invariant(col - 1),
            || format!("row 1 invariant does not hold after column {col}"),
        )
    }
}
