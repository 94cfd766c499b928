//! Predicates describing how much of a grid has been solved. The solver re-establishes one of
//! these after every tile it places.

use super::{Grid, Position};

impl Grid {
    /// The blank is at `(target_row, target_col)`, every row below `target_row` is solved and
    /// every cell to the right of the blank in `target_row` is solved.
    ///
    /// This is the invariant maintained while solving rows `2..height`, but it is well defined for
    /// any cell on the grid. Cells off the grid never satisfy it.
    pub fn lower_row_invariant(&self, target_row: usize, target_col: usize) -> bool {
        if target_row >= self.height || target_col >= self.width {
            return false;
        }

        self.get(target_row, target_col) == 0
            && self.rows_solved_from(target_row + 1)
            && (target_col + 1..self.width)
                .all(|col| self.is_solved_at(Position::new(target_row, col)))
    }

    /// The blank is at `(1, target_col)`, rows `2..height` are solved, and in the top two rows
    /// every column right of `target_col` is solved.
    pub fn row1_invariant(&self, target_col: usize) -> bool {
        if target_col >= self.width {
            return false;
        }

        self.get(1, target_col) == 0
            && self.rows_solved_from(2)
            && self.top_columns_solved_from(target_col + 1)
    }

    /// The blank is at `(0, target_col)`, rows `2..height` are solved, `(1, target_col)` is solved,
    /// and in the top two rows every column right of `target_col` is solved.
    pub fn row0_invariant(&self, target_col: usize) -> bool {
        if target_col >= self.width {
            return false;
        }

        self.get(0, target_col) == 0
            && self.is_solved_at(Position::new(1, target_col))
            && self.rows_solved_from(2)
            && self.top_columns_solved_from(target_col + 1)
    }

    /// Whether the top left 2x2 block is solved.
    pub fn is_corner_solved(&self) -> bool {
        (0..2).all(|row| (0..2).all(|col| self.is_solved_at(Position::new(row, col))))
    }

    fn rows_solved_from(&self, first_row: usize) -> bool {
        (first_row..self.height)
            .all(|row| (0..self.width).all(|col| self.is_solved_at(Position::new(row, col))))
    }

    fn top_columns_solved_from(&self, first_col: usize) -> bool {
        (first_col..self.width).all(|col| {
            self.is_solved_at(Position::new(0, col)) && self.is_solved_at(Position::new(1, col))
        })
    }
}
