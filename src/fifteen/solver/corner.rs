//! Phase 3: the 2x2 block in the top left corner.

use log::trace;

use super::maneuver::CORNER_CYCLE;
use super::Reducer;
use crate::error::PuzzleError;
use crate::fifteen::moves::SlideMove::{Left, Up};

/// The three tiles of the block return to where they started after this many cycles.
const MAX_CORNER_CYCLES: usize = 3;

impl Reducer {
    /// Bring the blank to `(0, 0)` and cycle the block until it is solved.
    pub(super) fn solve_corner(&mut self) -> Result<(), PuzzleError> {
        let blank = self.grid.locate_blank();
        let mut path = vec![Up; blank.row];
        path.extend(std::iter::repeat(Left).take(blank.col));
        self.play(&path)?;

        for cycle in 0..MAX_CORNER_CYCLES {
            if self.grid.is_corner_solved() {
                trace!("corner solved after {cycle} cycles");
                return Ok(());
            }
            self.play(CORNER_CYCLE)?;
        }
        if self.grid.is_corner_solved() {
            return Ok(());
        }

        Err(PuzzleError::SolveInvariantViolation(format!(
            "corner not solved after {MAX_CORNER_CYCLES} cycles"
        )))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::PuzzleError;
    use crate::fifteen::solver::Reducer;
    use crate::fifteen::Grid;
    use crate::moves::MoveSequence;

    #[test]
    fn cycles_into_place() {
        let cases = [
            ([[3, 1, 2], [4, 0, 5]], "ulrdlu"),
            ([[1, 4, 2], [0, 3, 5]], "urdlurdlu"),
        ];
        for (rows, expected) in cases {
            let mut reducer = Reducer::new(Grid::from_rows(&rows).unwrap(), true);
            reducer.solve_corner().unwrap();
            assert_eq!(MoveSequence(reducer.moves.clone()).to_string(), expected);
            assert!(reducer.grid.is_solved());
        }
    }

    #[test]
    fn already_solved_corner() {
        let mut reducer = Reducer::new(Grid::solved(2, 2).unwrap(), true);
        reducer.solve_corner().unwrap();
        assert!(reducer.moves.is_empty());
    }

    #[test]
    fn odd_corner_is_reported() {
        let grid = Grid::from_rows(&[[4, 1, 2], [3, 0, 5]]).unwrap();
        let mut reducer = Reducer::new(grid, false);
        assert!(matches!(
            reducer.solve_corner(),
            Err(PuzzleError::SolveInvariantViolation(_))
        ));
    }
}
