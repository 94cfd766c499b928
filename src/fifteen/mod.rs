//! The sliding tile puzzle on an arbitrary `height x width` board.
//!
//! Tiles are numbered `0..height * width` where `0` is the blank. In the solved state the cell at
//! `(row, col)` holds `row * width + col`, so the blank ends up in the top left corner.

mod invariant;
pub mod moves;
pub mod solver;

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use crate::error::{GridDefect, PuzzleError};

/// A `(row, col)` cell on a grid, 0-indexed from the top left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a position.
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The state of a sliding tile puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    height: usize,
    width: usize,
    tiles: Box<[u32]>,
}

impl Index<Position> for Grid {
    type Output = u32;
    fn index(&self, pos: Position) -> &Self::Output {
        &self.tiles[self.offset(pos)]
    }
}

impl Grid {
    /// The solved grid of the given size.
    pub fn solved(height: usize, width: usize) -> Result<Grid, PuzzleError> {
        let count = check_dimensions(height, width)?;
        let tiles = (0..count).collect();
        Ok(Grid {
            height,
            width,
            tiles,
        })
    }

    /// Create a grid from its tiles in row-major order. The tiles must be a permutation of
    /// `0..height * width`.
    pub fn new(height: usize, width: usize, tiles: Vec<u32>) -> Result<Grid, PuzzleError> {
        let expected = check_dimensions(height, width)? as usize;
        if tiles.len() != expected {
            return Err(GridDefect::TileCount {
                expected,
                found: tiles.len(),
            }
            .into());
        }

        let grid = Grid {
            height,
            width,
            tiles: tiles.into_boxed_slice(),
        };
        grid.validate()?;
        Ok(grid)
    }

    /// Create a grid from a list of rows, each of which must have the same length.
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Grid, PuzzleError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let count = check_dimensions(height, width)?;

        let mut tiles = Vec::with_capacity(count as usize);
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != width {
                return Err(GridDefect::RaggedRow {
                    row,
                    expected: width,
                    found: r.len(),
                }
                .into());
            }
            tiles.extend_from_slice(r);
        }

        Grid::new(height, width, tiles)
    }

    /// Check that the tiles are a permutation of `0..height * width`. Grids built through the
    /// constructors always are, but [`set`](Grid::set) can break this.
    pub fn validate(&self) -> Result<(), PuzzleError> {
        check_dimensions(self.height, self.width)?;
        let mut seen = vec![false; self.tiles.len()];
        for &t in self.tiles.iter() {
            match seen.get_mut(t as usize) {
                Some(s) if !*s => *s = true,
                _ => return Err(GridDefect::NotPermutation(t).into()),
            }
        }
        Ok(())
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The tile at the given cell.
    ///
    /// # Panics
    ///
    /// Panics if the cell is outside the grid.
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self[Position::new(row, col)]
    }

    /// Overwrite the tile at the given cell. No check is made that the grid is still a permutation
    /// afterwards; use [`validate`](Grid::validate) for that.
    ///
    /// # Panics
    ///
    /// Panics if the cell is outside the grid.
    pub fn set(&mut self, row: usize, col: usize, value: u32) {
        let idx = self.offset(Position::new(row, col));
        self.tiles[idx] = value;
    }

    /// The rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.tiles.chunks(self.width)
    }

    /// The tile that sits at `pos` once the puzzle is solved.
    pub fn solved_value(&self, pos: Position) -> u32 {
        (pos.row * self.width + pos.col) as u32
    }

    /// Whether `pos` currently holds its solved tile.
    pub fn is_solved_at(&self, pos: Position) -> bool {
        self[pos] == self.solved_value(pos)
    }

    /// Whether every tile is in its solved position.
    pub fn is_solved(&self) -> bool {
        self.tiles.iter().zip(0..).all(|(&t, i)| t == i)
    }

    /// Where the given tile currently is.
    pub fn position_of(&self, value: u32) -> Option<Position> {
        let idx = self.tiles.iter().position(|&t| t == value)?;
        Some(Position::new(idx / self.width, idx % self.width))
    }

    /// Locate the tile which belongs at `target` when the puzzle is solved.
    pub fn locate(&self, target: Position) -> Result<Position, PuzzleError> {
        let value = self.solved_value(target);
        self.position_of(value).ok_or(PuzzleError::UnreachableTile(value))
    }

    /// Where the blank currently is.
    ///
    /// # Panics
    ///
    /// Panics if the grid has no blank, which can only happen after an invalid [`set`](Grid::set).
    pub fn locate_blank(&self) -> Position {
        self.position_of(0).expect("a valid grid always contains the blank")
    }

    /// The number of pairs of non-blank tiles that appear in the wrong order when the grid is read
    /// row by row.
    pub fn inversions(&self) -> usize {
        let tiles: Vec<u32> = self.tiles.iter().copied().filter(|&t| t != 0).collect();
        tiles
            .iter()
            .enumerate()
            .map(|(i, &t)| tiles[i + 1..].iter().filter(|&&next| next < t).count())
            .sum()
    }

    /// Whether the grid can be brought into the solved state by legal moves.
    ///
    /// A horizontal move never changes the inversion count. A vertical move carries one tile past
    /// `width - 1` others, so with an odd width the inversion parity is invariant, and with an even
    /// width the parity of inversions plus the blank's row is. A grid without a blank is never
    /// solvable.
    pub fn is_solvable(&self) -> bool {
        let Some(blank) = self.position_of(0) else {
            return false;
        };
        let inversions = self.inversions();
        if self.width % 2 == 1 {
            inversions % 2 == 0
        } else {
            (inversions + blank.row) % 2 == 0
        }
    }

    fn offset(&self, pos: Position) -> usize {
        assert!(
            pos.row < self.height && pos.col < self.width,
            "{pos} is outside a {}x{} grid",
            self.height,
            self.width
        );
        pos.row * self.width + pos.col
    }
}

/// The number of tiles on a `height x width` grid, which must fit in a `u32`.
fn check_dimensions(height: usize, width: usize) -> Result<u32, PuzzleError> {
    if height < 2 || width < 2 {
        return Err(GridDefect::Dimensions { height, width }.into());
    }
    height
        .checked_mul(width)
        .and_then(|count| u32::try_from(count).ok())
        .ok_or(GridDefect::Dimensions { height, width }.into())
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cell_width = (self.tiles.len() - 1).to_string().len();
        for row in self.rows() {
            let mut first = true;
            for t in row {
                if !first {
                    f.write_str(" ")?;
                }
                first = false;
                write!(f, "{t:>cell_width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parse a grid from whitespace separated tile numbers, one row per non-empty line.
impl FromStr for Grid {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                line.split_whitespace()
                    .map(|tok| {
                        tok.parse::<u32>()
                            .map_err(|_| GridDefect::Unparsable(tok.to_owned()))
                    })
                    .collect::<Result<Vec<u32>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Grid::from_rows(&rows)
    }
}
