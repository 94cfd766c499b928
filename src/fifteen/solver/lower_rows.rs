//! Phase 1: every row from the bottom up to row 2, right to left.

use log::trace;

use super::maneuver::COLUMN_ZERO_ROTATION;
use super::Reducer;
use crate::error::PuzzleError;
use crate::fifteen::moves::SlideMove::{Right, Up};
use crate::fifteen::Position;

impl Reducer {
    /// Place the tile for `(row, col)` where `col > 0`, leaving the blank on its left.
    pub(super) fn solve_interior_tile(&mut self, row: usize, col: usize) -> Result<(), PuzzleError> {
        trace!("solving interior tile ({row}, {col})");
        self.ensure(
            |g| g.lower_row_invariant(row, col),
            || format!("lower row invariant does not hold before ({row}, {col})"),
        )?;

        let target = Position::new(row, col);
        self.position_tile(target, target)?;

        self.ensure(
            |g| g.lower_row_invariant(row, col - 1),
            || format!("lower row invariant does not hold after ({row}, {col})"),
        )
    }

    /// Place the tile for `(row, 0)`, leaving the blank at the right end of the row above.
    ///
    /// Column 0 has no left neighbour to cycle through, so the tile is first brought to `(row - 1,
    /// 1)` and then dropped into place by a fixed rotation of the 3x2 block above and at the slot.
    pub(super) fn solve_col0_tile(&mut self, row: usize) -> Result<(), PuzzleError> {
        trace!("solving column 0 tile of row {row}");
        self.ensure(
            |g| g.lower_row_invariant(row, 0),
            || format!("lower row invariant does not hold before ({row}, 0)"),
        )?;

        self.play(&[Up, Right])?;
        let target = Position::new(row, 0);
        if self.grid.locate(target)? != target {
            self.position_tile(target, Position::new(row - 1, 1))?;
            self.play(COLUMN_ZERO_ROTATION)?;
        }

        let blank = self.grid.locate_blank();
        self.play(&vec![Right; self.grid.width() - 1 - blank.col])?;

        let width = self.grid.width();
        self.ensure(
            |g| g.lower_row_invariant(row - 1, width - 1),
            || format!("lower row invariant does not hold after ({row}, 0)"),
        )
    }
}
