//! Moves of the blank and the move executor.

use std::fmt;
use std::str::FromStr;

use super::{Grid, Position};
use crate::error::{PuzzleError, TryFromCharToMoveError};
use crate::moves::MoveSequence;

#[cfg(test)]
use proptest_derive::Arbitrary;

/// A primitive move, named after the direction the blank travels. The tile the blank swaps with
/// travels the opposite way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Arbitrary))]
pub enum SlideMove {
    /// Towards row 0
    Up,
    /// Away from row 0
    Down,
    /// Towards column 0
    Left,
    /// Away from column 0
    Right,
}

impl SlideMove {
    /// Every move, in `u d l r` order.
    pub const ALL: [SlideMove; 4] = [
        SlideMove::Up,
        SlideMove::Down,
        SlideMove::Left,
        SlideMove::Right,
    ];

    /// The character used for this move in a move string.
    pub fn as_char(self) -> char {
        match self {
            SlideMove::Up => 'u',
            SlideMove::Down => 'd',
            SlideMove::Left => 'l',
            SlideMove::Right => 'r',
        }
    }

    fn offset(self) -> (isize, isize) {
        match self {
            SlideMove::Up => (-1, 0),
            SlideMove::Down => (1, 0),
            SlideMove::Left => (0, -1),
            SlideMove::Right => (0, 1),
        }
    }
}

impl crate::moves::Move for SlideMove {
    fn inverse(self) -> Self {
        match self {
            SlideMove::Up => SlideMove::Down,
            SlideMove::Down => SlideMove::Up,
            SlideMove::Left => SlideMove::Right,
            SlideMove::Right => SlideMove::Left,
        }
    }
}

impl fmt::Display for SlideMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for SlideMove {
    type Error = TryFromCharToMoveError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'u' => Ok(SlideMove::Up),
            'd' => Ok(SlideMove::Down),
            'l' => Ok(SlideMove::Left),
            'r' => Ok(SlideMove::Right),
            _ => Err(TryFromCharToMoveError::InvalidChar(c)),
        }
    }
}

/// Parse a move string such as `"uurdl"`.
impl FromStr for MoveSequence<SlideMove> {
    type Err = TryFromCharToMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars().map(SlideMove::try_from).collect()
    }
}

impl Grid {
    /// The cell next to `pos` in the direction of `mv`, if it is on the grid.
    pub fn neighbour(&self, pos: Position, mv: SlideMove) -> Option<Position> {
        let (dr, dc) = mv.offset();
        let row = pos.row.checked_add_signed(dr)?;
        let col = pos.col.checked_add_signed(dc)?;
        if self.height <= row || self.width <= col {
            return None;
        }
        Some(Position::new(row, col))
    }

    /// Apply a single move. A grid whose blank was overwritten by [`set`](Grid::set) is reported
    /// as [`UnreachableTile(0)`](PuzzleError::UnreachableTile).
    pub fn slide(&mut self, mv: SlideMove) -> Result<(), PuzzleError> {
        self.apply_moves(std::iter::once(mv))
    }

    /// Apply a sequence of moves. Either every move is applied, or the first move that would push
    /// the blank off the grid is reported and the grid is left exactly as it was.
    pub fn apply(&mut self, mvs: &MoveSequence<SlideMove>) -> Result<(), PuzzleError> {
        self.apply_moves(mvs.iter().copied())
    }

    /// Parse a move string and apply it, see [`apply`](Grid::apply).
    pub fn apply_str(&mut self, mvs: &str) -> Result<(), PuzzleError> {
        let mvs: MoveSequence<SlideMove> = mvs.parse()?;
        self.apply(&mvs)
    }

    /// Apply an algorithm to a grid, returning the resulting grid.
    pub fn make_moves(mut self, mvs: &MoveSequence<SlideMove>) -> Result<Grid, PuzzleError> {
        self.apply(mvs)?;
        Ok(self)
    }

    pub(crate) fn apply_moves(
        &mut self,
        mvs: impl IntoIterator<Item = SlideMove>,
    ) -> Result<(), PuzzleError> {
        let mut tiles = self.tiles.clone();
        let mut blank = self.position_of(0).ok_or(PuzzleError::UnreachableTile(0))?;

        for (index, mv) in mvs.into_iter().enumerate() {
            let next = self
                .neighbour(blank, mv)
                .ok_or(PuzzleError::OutOfBoundsMove { index, mv })?;
            tiles.swap(self.offset(blank), self.offset(next));
            blank = next;
        }

        self.tiles = tiles;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Move;

    use proptest::collection::vec;
    use proptest::prelude::*;

    #[test]
    fn parse_move_string() {
        let mvs: MoveSequence<SlideMove> = "udlr".parse().unwrap();
        assert_eq!(mvs.0, SlideMove::ALL);
        assert_eq!(mvs.to_string(), "udlr");
        assert_eq!(
            "ulx".parse::<MoveSequence<SlideMove>>(),
            Err(TryFromCharToMoveError::InvalidChar('x'))
        );
        assert_eq!(
            "U".parse::<MoveSequence<SlideMove>>(),
            Err(TryFromCharToMoveError::InvalidChar('U'))
        );
    }

    #[test]
    fn slide_swaps_with_neighbour() {
        let mut grid = Grid::solved(3, 3).unwrap();
        grid.apply_str("rd").unwrap();
        assert_eq!(
            grid,
            Grid::from_rows(&[[1, 4, 2], [3, 0, 5], [6, 7, 8]]).unwrap()
        );
        grid.slide(SlideMove::Left).unwrap();
        assert_eq!(grid.locate_blank(), Position::new(1, 0));
        assert_eq!(grid.get(1, 1), 3);
    }

    #[test]
    fn out_of_bounds_is_atomic() {
        let mut grid = Grid::solved(2, 3).unwrap();
        let before = grid.clone();
        assert_eq!(
            grid.apply_str("rrr"),
            Err(PuzzleError::OutOfBoundsMove {
                index: 2,
                mv: SlideMove::Right
            })
        );
        assert_eq!(grid, before);
        assert_eq!(
            grid.slide(SlideMove::Up),
            Err(PuzzleError::OutOfBoundsMove {
                index: 0,
                mv: SlideMove::Up
            })
        );
        assert_eq!(grid, before);
        assert_eq!(
            grid.apply_str("dq"),
            Err(PuzzleError::InvalidMove(TryFromCharToMoveError::InvalidChar(
                'q'
            )))
        );
        assert_eq!(grid, before);
    }

    #[test]
    fn missing_blank_is_reported() {
        let mut grid = Grid::solved(2, 3).unwrap();
        grid.set(0, 0, 1);
        let before = grid.clone();
        assert_eq!(grid.apply_str("dr"), Err(PuzzleError::UnreachableTile(0)));
        assert_eq!(
            grid.slide(SlideMove::Right),
            Err(PuzzleError::UnreachableTile(0))
        );
        assert_eq!(grid, before);
    }

    #[test]
    fn neighbours_at_edges() {
        let grid = Grid::solved(2, 2).unwrap();
        let corner = Position::new(0, 0);
        assert_eq!(grid.neighbour(corner, SlideMove::Up), None);
        assert_eq!(grid.neighbour(corner, SlideMove::Left), None);
        assert_eq!(
            grid.neighbour(corner, SlideMove::Down),
            Some(Position::new(1, 0))
        );
        assert_eq!(grid.neighbour(Position::new(1, 1), SlideMove::Right), None);
    }

    #[test]
    fn inverse_pairs() {
        for mv in SlideMove::ALL {
            assert_ne!(mv.inverse(), mv);
            assert_eq!(mv.inverse().inverse(), mv);
        }
    }

    /// Grow a legal move sequence from a random walk, dropping the steps that would leave the
    /// grid.
    fn legal_walk(grid: &Grid, walk: Vec<SlideMove>) -> MoveSequence<SlideMove> {
        let mut blank = grid.locate_blank();
        walk.into_iter()
            .filter(|&mv| match grid.neighbour(blank, mv) {
                Some(next) => {
                    blank = next;
                    true
                }
                None => false,
            })
            .collect()
    }

    proptest! {
        #[test]
        fn inverse_apply(
            h in 2..6usize,
            w in 2..6usize,
            walk in vec(any::<SlideMove>(), 0..60),
        ) {
            let solved = Grid::solved(h, w).unwrap();
            let mvs = legal_walk(&solved, walk);
            let scrambled = solved.clone().make_moves(&mvs).unwrap();
            prop_assert!(scrambled.validate().is_ok());
            prop_assert!(scrambled.is_solvable());
            prop_assert_eq!(scrambled.make_moves(&mvs.inverse()).unwrap(), solved);
        }

        #[test]
        fn apply_equals_stepwise(walk in vec(any::<SlideMove>(), 0..30)) {
            let start = Grid::solved(3, 4).unwrap();
            let mvs = legal_walk(&start, walk);
            let mut stepped = start.clone();
            for &mv in &mvs {
                stepped.slide(mv).unwrap();
            }
            prop_assert_eq!(start.make_moves(&mvs).unwrap(), stepped);
        }
    }
}
