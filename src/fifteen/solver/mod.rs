//! A constructive solver which places tiles one at a time, in three phases:
//!
//! 1. rows `2..height`, bottom up and right to left,
//! 2. the top two rows, right to left down to column 2,
//! 3. the remaining 2x2 block in the top left corner.
//!
//! Every tile is placed by consulting a fixed table of move fragments (see `maneuver`) until it
//! reaches its slot. The solution is not optimal, but it is found in time polynomial in the size
//! of the grid and every step is checked.

mod corner;
mod lower_rows;
mod maneuver;
mod top_rows;

use log::{debug, trace};

use super::moves::SlideMove;
use super::{Grid, Position};
use crate::error::PuzzleError;
use crate::moves::MoveSequence;

/// A solved grid together with the moves that solved it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Applying these moves to the input grid solves it.
    pub moves: MoveSequence<SlideMove>,
    /// The input grid after the moves were applied.
    pub grid: Grid,
}

/// Solve a grid using the default [`Solver`].
pub fn solve(grid: &Grid) -> Result<Solution, PuzzleError> {
    Solver::new().solve(grid)
}

/// A sliding puzzle solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solver {
    check_invariants: bool,
    simplify: bool,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a solver. Invariants are checked in debug builds and the solution is simplified.
    pub fn new() -> Self {
        Solver {
            check_invariants: cfg!(debug_assertions),
            simplify: true,
        }
    }

    /// Check the partial-solution invariant before and after every tile is placed, and at the end
    /// of every phase. A failed check is reported as
    /// [`SolveInvariantViolation`](PuzzleError::SolveInvariantViolation).
    pub fn check_invariants(mut self, check: bool) -> Self {
        self.check_invariants = check;
        self
    }

    /// Cancel adjacent moves which undo each other in the solution. This never changes the final
    /// grid.
    pub fn simplify(mut self, simplify: bool) -> Self {
        self.simplify = simplify;
        self
    }

    /// Obtain a solving sequence for the grid (such that applying the sequence solves the grid),
    /// along with the solved grid.
    pub fn solve(&self, grid: &Grid) -> Result<Solution, PuzzleError> {
        grid.validate()?;
        if grid.is_solved() {
            return Ok(Solution {
                moves: MoveSequence::new(),
                grid: grid.clone(),
            });
        }
        if !grid.is_solvable() {
            debug!(
                "rejecting {}x{} grid with {} inversions",
                grid.height(),
                grid.width(),
                grid.inversions()
            );
            return Err(PuzzleError::UnsolvableConfiguration);
        }

        let mut reducer = Reducer::new(grid.clone(), self.check_invariants);
        reducer.park_blank()?;
        reducer.run_phase::<LowerRows>()?;
        reducer.run_phase::<TopRows>()?;
        reducer.run_phase::<Corner>()?;

        if !reducer.grid.is_solved() {
            return Err(PuzzleError::SolveInvariantViolation(
                "the final grid is not solved".to_owned(),
            ));
        }

        let mut moves = MoveSequence(reducer.moves);
        debug!("solved in {} moves", moves.len());
        if self.simplify {
            moves = moves.cancel();
            debug!("simplified to {} moves", moves.len());
        }

        Ok(Solution {
            moves,
            grid: reducer.grid,
        })
    }
}

/// One stage of the reduction. Each phase leaves the grid in the state the next one expects.
trait Phase {
    const NAME: &'static str;

    fn reduce(reducer: &mut Reducer) -> Result<(), PuzzleError>;

    /// The condition that must hold once the phase is finished.
    fn handed_off(grid: &Grid) -> bool;
}

struct LowerRows;
struct TopRows;
struct Corner;

impl Phase for LowerRows {
    const NAME: &'static str = "lower rows";

    fn reduce(reducer: &mut Reducer) -> Result<(), PuzzleError> {
        for row in (2..reducer.grid.height()).rev() {
            for col in (1..reducer.grid.width()).rev() {
                reducer.solve_interior_tile(row, col)?;
            }
            reducer.solve_col0_tile(row)?;
        }
        Ok(())
    }

    fn handed_off(grid: &Grid) -> bool {
        grid.row1_invariant(grid.width() - 1)
    }
}

impl Phase for TopRows {
    const NAME: &'static str = "top rows";

    fn reduce(reducer: &mut Reducer) -> Result<(), PuzzleError> {
        for col in (2..reducer.grid.width()).rev() {
            reducer.solve_row1_tile(col)?;
            reducer.solve_row0_tile(col)?;
        }
        Ok(())
    }

    fn handed_off(grid: &Grid) -> bool {
        grid.row1_invariant(1)
    }
}

impl Phase for Corner {
    const NAME: &'static str = "corner";

    fn reduce(reducer: &mut Reducer) -> Result<(), PuzzleError> {
        reducer.solve_corner()
    }

    fn handed_off(grid: &Grid) -> bool {
        grid.is_solved()
    }
}

/// The working state of one solve: the grid being solved and every move played on it so far.
struct Reducer {
    grid: Grid,
    moves: Vec<SlideMove>,
    check_invariants: bool,
}

impl Reducer {
    fn new(grid: Grid, check_invariants: bool) -> Self {
        Reducer {
            grid,
            moves: Vec::new(),
            check_invariants,
        }
    }

    fn run_phase<P: Phase>(&mut self) -> Result<(), PuzzleError> {
        let start = self.moves.len();
        debug!("phase {}: starting", P::NAME);
        P::reduce(self)?;
        self.ensure(P::handed_off, || {
            format!("phase {} did not hand off a valid grid", P::NAME)
        })?;
        debug!(
            "phase {}: done in {} moves",
            P::NAME,
            self.moves.len() - start
        );
        Ok(())
    }

    /// Apply moves to the grid and record them.
    fn play(&mut self, mvs: &[SlideMove]) -> Result<(), PuzzleError> {
        if mvs.is_empty() {
            return Ok(());
        }
        self.grid.apply_moves(mvs.iter().copied())?;
        trace!("played {}", MoveSequence(mvs.to_vec()));
        self.moves.extend_from_slice(mvs);
        Ok(())
    }

    /// Report a violation if invariant checking is on and `holds` fails for the current grid.
    fn ensure(
        &self,
        holds: impl FnOnce(&Grid) -> bool,
        what: impl FnOnce() -> String,
    ) -> Result<(), PuzzleError> {
        if self.check_invariants && !holds(&self.grid) {
            return Err(PuzzleError::SolveInvariantViolation(what()));
        }
        Ok(())
    }

    /// Move the blank to the bottom right corner, where the first phase starts.
    fn park_blank(&mut self) -> Result<(), PuzzleError> {
        let blank = self.grid.locate_blank();
        let mut path = vec![SlideMove::Down; self.grid.height() - 1 - blank.row];
        path.extend(std::iter::repeat(SlideMove::Right).take(self.grid.width() - 1 - blank.col));
        self.play(&path)
    }

    /// Bring the tile that belongs at `target` to `dest`, finishing with the blank directly left
    /// of `dest`. The blank must start at `dest` and the tile must not be below it, or on its row
    /// to the right of it unless that part of the row is unsolved.
    fn position_tile(&mut self, target: Position, dest: Position) -> Result<(), PuzzleError> {
        let tile = self.grid.locate(target)?;
        let path = maneuver::approach(tile, self.grid.locate_blank())?;
        self.play(&path)?;

        // The tile is at most `height + width - 2` cells away and every shift closes one of them.
        for _ in 0..self.grid.height() + self.grid.width() {
            let tile = self.grid.locate(target)?;
            match maneuver::lookup(tile, self.grid.locate_blank(), dest)? {
                maneuver::Maneuver::Done => return Ok(()),
                maneuver::Maneuver::Shift(fragment) => self.play(fragment)?,
                maneuver::Maneuver::Settle(fragment) => return self.play(fragment),
            }
        }

        Err(PuzzleError::SolveInvariantViolation(format!(
            "tile for {target} did not reach {dest}"
        )))
    }
}
